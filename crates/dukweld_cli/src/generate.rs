//! The generate command
//!
//! Scans every input, renders the unit and writes it in one piece. Nothing
//! is written when the run fails.

use anyhow::{Context, Result};
use duk_weld::{generate_files, DiagnosticsCollector, OutputFormat, WeldConfig};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Exit status when `--keep-going` dropped at least one directive
const EXIT_SKIPPED: u8 = 2;

/// One invocation of the generator
#[derive(Debug)]
pub struct Request {
    pub inputs: Vec<PathBuf>,
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    pub config: WeldConfig,
}

/// Rendered output plus what the run reported
struct Outcome {
    code: String,
    wrapper_count: usize,
    diagnostics: DiagnosticsCollector,
}

/// Run the generator and write the result
pub fn run(request: Request) -> Result<ExitCode> {
    let outcome = render(&request)?;

    match &request.output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            fs::write(path, &outcome.code)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(
                "wrote {} wrapper(s) to {}",
                outcome.wrapper_count,
                path.display()
            );
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(outcome.code.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush().context("Failed to flush stdout")?;
        }
    }

    outcome.diagnostics.print();
    outcome.diagnostics.print_summary();

    if outcome.diagnostics.has_errors() {
        Ok(ExitCode::from(EXIT_SKIPPED))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn render(request: &Request) -> Result<Outcome> {
    let (unit, diagnostics) = generate_files(request.inputs.as_slice(), request.config.clone())
        .context("Binding generation failed")?;
    let code = request
        .format
        .render(&unit, &request.config)
        .with_context(|| format!("Failed to render {} output", request.format))?;

    Ok(Outcome {
        code,
        wrapper_count: unit.wrappers.len(),
        diagnostics,
    })
}
