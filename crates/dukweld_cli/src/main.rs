//! dukweld - generate Duktape bindings from annotated C++ sources
//!
//! ```text
//! dukweld native/js_defs.hpp native/editor_defs.hpp -o src/duk_wrappers.inc
//! dukweld --format json native/js_defs.hpp
//! dukweld --keep-going --config dukweld.toml native/*.hpp
//! ```
//!
//! Environment variables:
//! - `DUKWELD_LOG` - Log level (default: "warn")

mod config;
mod generate;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use duk_weld::OutputFormat;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormatChoice {
    Cpp,
    Json,
}

impl From<FormatChoice> for OutputFormat {
    fn from(choice: FormatChoice) -> Self {
        match choice {
            FormatChoice::Cpp => OutputFormat::Cpp,
            FormatChoice::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "dukweld",
    version,
    about = "Generate Duktape wrapper functions and their registration routine"
)]
struct Cli {
    /// Annotated source files, scanned in the given order
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write the generated code to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = FormatChoice::Cpp)]
    format: FormatChoice,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Skip malformed directives and report them instead of aborting
    #[arg(short, long, default_value_t = false)]
    keep_going: bool,

    /// Name of the generated registration routine
    #[arg(long)]
    init_name: Option<String>,
}

fn main() -> Result<ExitCode> {
    init_logging();

    let cli = Cli::parse();
    let config = config::load(cli.config.as_deref())?;
    let config = config::apply_overrides(config, cli.keep_going, cli.init_name);

    let request = generate::Request {
        inputs: cli.inputs,
        output: cli.output,
        format: cli.format.into(),
        config,
    };

    generate::run(request)
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter =
        EnvFilter::try_from_env("DUKWELD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::try_parse_from([
            "dukweld",
            "-f",
            "json",
            "-k",
            "--init-name",
            "register_natives",
            "a.hpp",
            "b.hpp",
        ])
        .unwrap();

        assert_eq!(cli.inputs, vec![PathBuf::from("a.hpp"), PathBuf::from("b.hpp")]);
        assert_eq!(cli.format, FormatChoice::Json);
        assert!(cli.keep_going);
        assert_eq!(cli.init_name.as_deref(), Some("register_natives"));
        assert!(cli.output.is_none());
    }

    #[test]
    fn test_inputs_required() {
        assert!(Cli::try_parse_from(["dukweld"]).is_err());
    }
}
