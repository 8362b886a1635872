//! Rule codes with category prefixes for structured identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The family a rule code belongs to.
///
/// The family sets the letter a code displays with, so `A101` reads as
/// "API-shape rule 101" and `C203` as "naming convention 203". Categories
/// group related rules for documentation; severity is configured per rule,
/// not per category.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Internal and model-consistency errors, prefixed with `E`.
    Error,
    /// General correctness warnings, prefixed with `W`.
    Warning,
    /// Naming and style conventions, prefixed with `C`.
    Convention,
    /// API-shape guidelines, prefixed with `A`.
    Api,
    /// Attribute and symbol usage rules, prefixed with `U`.
    Usage,
}

impl Category {
    /// The letter this family displays with.
    pub fn prefix(self) -> char {
        match self {
            Category::Error => 'E',
            Category::Warning => 'W',
            Category::Convention => 'C',
            Category::Api => 'A',
            Category::Usage => 'U',
        }
    }
}

/// A rule's stable identifier: family plus number.
///
/// Displays as the family letter followed by the zero-padded number
/// (`A101`, `W012`). Configuration files and CLI flags accept this display
/// form to select a rule.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The family this code belongs to.
    pub category: Category,
    /// The number within the family.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a code from its parts.
    pub fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}
