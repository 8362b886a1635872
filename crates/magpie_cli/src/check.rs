//! `magpie check` — the analysis pipeline.
//!
//! Loads the project configuration, reads the host-exported model, validates
//! it, loads the source files the model references, runs the analysis
//! engine, and renders diagnostics. The full pipeline:
//!
//! 1. Find the project root (walk up looking for `magpie.toml`)
//! 2. Load config via `magpie_config`
//! 3. Read and deserialize the exported model
//! 4. Load referenced source files, flagging stale ones
//! 5. Validate the model's structure
//! 6. Run the analysis engine
//! 7. Render diagnostics

use std::path::{Path, PathBuf};

use magpie_analysis::AnalysisEngine;
use magpie_common::CancelToken;
use magpie_config::{OutputFormat, ProjectConfig, RulesConfig};
use magpie_diagnostics::{
    Category, Diagnostic, DiagnosticCode, DiagnosticRenderer, DiagnosticSink, Severity,
    TerminalRenderer,
};
use magpie_model::Compilation;
use magpie_source::{SourceDb, Span};

use crate::{CheckArgs, GlobalArgs, ReportFormat};

/// Exit code for a model that fails structural validation.
const EXIT_INVALID_MODEL: i32 = 2;

/// Runs the `magpie check` command.
///
/// Returns exit code 0 when the analysis is clean, 1 when error-severity
/// diagnostics were reported, and 2 when the model itself fails validation.
pub fn run(args: &CheckArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let project_dir = resolve_project_root(global)?;
    let config = magpie_config::load_config(&project_dir)?;

    if !global.quiet {
        if config.project.version.is_empty() {
            eprintln!("   Checking {}", config.project.name);
        } else {
            eprintln!(
                "   Checking {} v{}",
                config.project.name, config.project.version
            );
        }
    }

    // --model is resolved like any CLI path; the config setting is
    // relative to the project directory.
    let model_path = match &args.model {
        Some(path) => PathBuf::from(path),
        None => project_dir.join(&config.project.model),
    };
    let comp = load_model(&model_path)?;

    let sink = DiagnosticSink::new();
    let source_db = load_sources(&comp, &project_dir, &config, &sink, global);

    if let Err(defect) = comp.validate() {
        sink.emit(
            Diagnostic::error(
                DiagnosticCode::new(Category::Error, 1),
                format!("model is not self-consistent: {defect}"),
                Span::DUMMY,
            )
            .with_help("re-export the model from the host compiler"),
        );
        report(&sink, &source_db, args, &config, global);
        return Ok(EXIT_INVALID_MODEL);
    }

    let merged = merge_rules_config(&config, args);
    let engine = AnalysisEngine::new(&merged);
    engine.run(&comp, &sink, &CancelToken::new());

    report(&sink, &source_db, args, &config, global);

    if sink.has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Walks up from `start` looking for the nearest directory containing
/// `magpie.toml`.
fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join("magpie.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find magpie.toml in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the project root from global CLI args.
///
/// An explicit `--config` path wins (a file means its parent directory);
/// otherwise walk up from the current directory.
fn resolve_project_root(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(ref config_path) = global.config {
        let p = PathBuf::from(config_path);
        if p.is_file() {
            Ok(p.parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(".")))
        } else {
            Ok(p)
        }
    } else {
        find_project_root(&std::env::current_dir()?)
    }
}

/// Reads and deserializes a host-exported model file.
fn load_model(path: &Path) -> Result<Compilation, Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read model {}: {e}", path.display()))?;
    let comp: Compilation = serde_json::from_str(&content)
        .map_err(|e| format!("cannot parse model {}: {e}", path.display()))?;
    Ok(comp)
}

/// Loads every source file the model references, in model order so the
/// model's file IDs line up with the database.
///
/// A file that cannot be read becomes an empty placeholder; its spans then
/// render without a source excerpt. A file whose content no longer matches
/// the hash recorded at export time gets a staleness warning.
fn load_sources(
    comp: &Compilation,
    project_dir: &Path,
    config: &ProjectConfig,
    sink: &DiagnosticSink,
    global: &GlobalArgs,
) -> SourceDb {
    let source_root = match &config.project.source_root {
        Some(root) => project_dir.join(root),
        None => project_dir.to_path_buf(),
    };

    let mut source_db = SourceDb::new();
    for record in &comp.files {
        let path = if record.path.is_absolute() {
            record.path.clone()
        } else {
            source_root.join(&record.path)
        };
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                if let Some(exported) = record.hash {
                    if !exported.matches(content.as_bytes()) {
                        sink.emit(
                            Diagnostic::warning(
                                DiagnosticCode::new(Category::Warning, 1),
                                format!(
                                    "source file {} changed since the model was exported",
                                    record.path.display()
                                ),
                                Span::DUMMY,
                            )
                            .with_note("spans reported for this file may not match its content")
                            .with_help("re-export the model to refresh it"),
                        );
                    }
                }
                source_db.add_source(record.path.clone(), content);
            }
            Err(e) => {
                if !global.quiet {
                    eprintln!("warning: cannot read {}: {e}", path.display());
                }
                // An empty placeholder keeps later IDs aligned with the
                // model's file table.
                source_db.add_source(record.path.clone(), String::new());
            }
        }
    }
    source_db
}

/// Merges CLI `--allow`/`--deny`/`--warn` flags with the config file's
/// rules section.
///
/// CLI flags take precedence: a rule passed as `--allow` is removed from
/// the config's deny and warn lists, and likewise for the other flags.
fn merge_rules_config(config: &ProjectConfig, args: &CheckArgs) -> RulesConfig {
    let mut deny = config.rules.deny.clone();
    let mut allow = config.rules.allow.clone();
    let mut warn = config.rules.warn.clone();

    for rule in &args.deny {
        allow.retain(|r| r != rule);
        warn.retain(|r| r != rule);
        if !deny.contains(rule) {
            deny.push(rule.clone());
        }
    }
    for rule in &args.warn {
        allow.retain(|r| r != rule);
        deny.retain(|r| r != rule);
        if !warn.contains(rule) {
            warn.push(rule.clone());
        }
    }
    for rule in &args.allow {
        deny.retain(|r| r != rule);
        warn.retain(|r| r != rule);
        if !allow.contains(rule) {
            allow.push(rule.clone());
        }
    }

    RulesConfig { deny, allow, warn }
}

/// Picks the report format: an explicit CLI flag wins over the config file.
fn report_format(args: &CheckArgs, config: &ProjectConfig) -> ReportFormat {
    args.format.unwrap_or(match config.output.format {
        OutputFormat::Text => ReportFormat::Text,
        OutputFormat::Json => ReportFormat::Json,
    })
}

/// Renders accumulated diagnostics in the selected format, followed by a
/// summary line in text mode.
fn report(
    sink: &DiagnosticSink,
    source_db: &SourceDb,
    args: &CheckArgs,
    config: &ProjectConfig,
    global: &GlobalArgs,
) {
    let diagnostics = sink.diagnostics();

    match report_format(args, config) {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(global.color);
            for diag in &diagnostics {
                eprintln!("{}", renderer.render(diag, source_db));
            }
            if !global.quiet {
                let errors = diagnostics
                    .iter()
                    .filter(|d| d.severity == Severity::Error)
                    .count();
                let warnings = diagnostics
                    .iter()
                    .filter(|d| d.severity == Severity::Warning)
                    .count();
                eprintln!("   Result: {errors} error(s), {warnings} warning(s)");
            }
        }
        ReportFormat::Json => {
            let json =
                serde_json::to_string_pretty(&diagnostics).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}
