pub mod check;
pub mod export;
pub mod play;
pub mod show;
pub mod vocab;

use std::path::Path;

use cv_data::{DEFAULT_NAME, DEFAULT_SOURCE, Diagnostic, Loaded, Severity, render_diagnostics};
use tracing::info;

/// The text of the data file and the name to show in diagnostics.
fn source_for(path: Option<&Path>) -> Result<(String, String), String> {
    match path {
        Some(path) => {
            let source = cv_data::read_source(path).map_err(|e| e.to_string())?;
            Ok((source, path.display().to_string()))
        }
        None => Ok((DEFAULT_SOURCE.to_string(), DEFAULT_NAME.to_string())),
    }
}

/// Load world data and print any diagnostics.
/// Returns the tables if there are no errors.
fn load(path: Option<&Path>) -> Result<Loaded, String> {
    let (source, filename) = source_for(path)?;

    match cv_data::load_source(&source) {
        Ok(loaded) => {
            info!(
                file = %filename,
                rooms = loaded.data.location_count(),
                warnings = loaded.warnings.len(),
                "world data loaded"
            );
            print_diagnostics(&source, &filename, &loaded.warnings);
            Ok(loaded)
        }
        Err(e) => {
            print_diagnostics(&source, &filename, &[e.to_diagnostic()]);
            Err("world data has errors".into())
        }
    }
}

/// Print diagnostics to stderr using ariadne.
fn print_diagnostics(source: &str, filename: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }

    let rendered = render_diagnostics(source, filename, diagnostics);
    eprint!("{rendered}");

    let errors = diagnostics
        .iter()
        .filter(|d| d.severity == Severity::Error)
        .count();
    let warnings = diagnostics.len() - errors;
    eprintln!("  {errors} error(s), {warnings} warning(s)");
}
