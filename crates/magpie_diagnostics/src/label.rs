//! Span annotations carried by a diagnostic.

use magpie_source::Span;
use serde::{Deserialize, Serialize};

/// Distinguishes the location being flagged from supporting context.
///
/// The renderer underlines primary labels with `^^^^` and secondary ones
/// with `----`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum LabelStyle {
    /// The flagged location itself.
    Primary,
    /// Supporting context elsewhere in the source.
    Secondary,
}

/// One annotated span inside a diagnostic.
///
/// A parameter finding, for example, carries a primary label on the
/// parameter declaration; a rule may add secondary labels on the usages
/// that constrained it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Label {
    /// Where the annotation points.
    pub span: Span,
    /// Text shown beside the underline.
    pub message: String,
    /// Primary or secondary.
    pub style: LabelStyle,
}

impl Label {
    /// A label on the flagged location itself.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            style: LabelStyle::Primary,
        }
    }

    /// A label adding context at another location.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            style: LabelStyle::Secondary,
        }
    }
}
