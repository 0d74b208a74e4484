//! BindingBuilder for simplified build.rs scripts
//!
//! This module provides a high-level API for generating Duktape bindings
//! from build.rs scripts with minimal boilerplate.

use crate::build::Generator;
use crate::codegen::OutputFormat;
use crate::config::{ErrorPolicy, WeldConfig};
use crate::diagnostics::{Diagnostic, WeldError, WeldResult};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Builder for binding generation in build scripts
///
/// Handles:
/// - resolving sources against `CARGO_MANIFEST_DIR`
/// - writing the generated file into `OUT_DIR`
/// - cargo:rerun-if-changed directives
/// - surfacing skipped directives as cargo warnings
///
/// # Example
/// ```ignore
/// use duk_weld::build::BindingBuilder;
///
/// fn main() {
///     BindingBuilder::new()
///         .sources(&["native/js_defs.hpp", "native/editor_defs.hpp"])
///         .output("duk_wrappers.inc")
///         .build()
///         .expect("Failed to generate Duktape bindings");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BindingBuilder {
    sources: Vec<PathBuf>,
    output: PathBuf,
    config: WeldConfig,
    format: OutputFormat,
}

impl Default for BindingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingBuilder {
    /// Create a builder with the default configuration
    pub fn new() -> Self {
        Self {
            sources: Vec::new(),
            output: PathBuf::from("duk_wrappers.inc"),
            config: WeldConfig::default(),
            format: OutputFormat::Cpp,
        }
    }

    /// Add an annotated source (relative to the crate root)
    pub fn source(mut self, path: impl AsRef<Path>) -> Self {
        self.sources.push(path.as_ref().to_path_buf());
        self
    }

    /// Add several annotated sources, scanned in the given order
    pub fn sources(mut self, paths: &[&str]) -> Self {
        self.sources.extend(paths.iter().map(PathBuf::from));
        self
    }

    /// Set the generated file name (relative to `OUT_DIR`)
    pub fn output(mut self, path: impl AsRef<Path>) -> Self {
        self.output = path.as_ref().to_path_buf();
        self
    }

    /// Set the generator configuration
    pub fn config(mut self, config: WeldConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the output format
    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the error policy
    pub fn policy(mut self, policy: ErrorPolicy) -> Self {
        self.config.on_error = policy;
        self
    }

    /// Generate the bindings
    ///
    /// This will:
    /// 1. Scan every source in order
    /// 2. Render the unit and write it to `OUT_DIR`
    /// 3. Print cargo:rerun-if-changed and cargo:warning directives
    pub fn build(self) -> Result<BuildOutput, WeldError> {
        let out_dir = env::var("OUT_DIR")
            .map_err(|_| WeldError::EnvVarMissing("OUT_DIR".to_string()))?;
        let manifest_dir = env::var("CARGO_MANIFEST_DIR")
            .map_err(|_| WeldError::EnvVarMissing("CARGO_MANIFEST_DIR".to_string()))?;

        self.build_into(Path::new(&manifest_dir), Path::new(&out_dir))
    }

    /// Generate the bindings with explicit directories instead of cargo's
    /// environment variables
    pub fn build_into(self, manifest_dir: &Path, out_dir: &Path) -> WeldResult<BuildOutput> {
        let full_sources: Vec<PathBuf> = self
            .sources
            .iter()
            .map(|src| manifest_dir.join(src))
            .collect();

        if let Some(missing) = full_sources.iter().find(|p| !p.exists()) {
            return Err(WeldError::SourceNotFound(missing.clone()));
        }

        for line in self.rerun_directives() {
            println!("{}", line);
        }

        let mut generator = Generator::new(self.config.clone());
        for full in &full_sources {
            generator.scan_file(full)?;
        }

        let (unit, diagnostics) = generator.finish_with_diagnostics()?;
        for diagnostic in diagnostics.diagnostics() {
            println!("cargo:warning={}", diagnostic.format());
        }

        let code = self.format.render(&unit, &self.config)?;
        let output_path = out_dir.join(&self.output);
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| WeldError::io(parent, e))?;
        }
        fs::write(&output_path, code).map_err(|e| WeldError::io(&output_path, e))?;

        Ok(BuildOutput {
            output: output_path,
            wrapper_count: unit.wrappers.len(),
            diagnostics: diagnostics.into_diagnostics(),
        })
    }

    /// One `cargo:rerun-if-changed` line per source, in scan order
    fn rerun_directives(&self) -> Vec<String> {
        self.sources
            .iter()
            .map(|src| format!("cargo:rerun-if-changed={}", src.display()))
            .collect()
    }
}

/// Result of a successful build
#[derive(Debug)]
pub struct BuildOutput {
    /// Path to the generated file
    pub output: PathBuf,
    /// Number of wrappers generated
    pub wrapper_count: usize,
    /// Diagnostics for skipped directives and warnings
    pub diagnostics: Vec<Diagnostic>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_creation() {
        let builder = BindingBuilder::new()
            .source("native/js_defs.hpp")
            .sources(&["a.hpp", "b.hpp"])
            .output("bindings.inc");

        assert_eq!(builder.sources.len(), 3);
        assert_eq!(builder.sources[1], PathBuf::from("a.hpp"));
        assert_eq!(builder.output, PathBuf::from("bindings.inc"));
        assert_eq!(builder.config.on_error, ErrorPolicy::Abort);
    }

    #[test]
    fn test_rerun_directives_cover_every_source() {
        let builder = BindingBuilder::new().sources(&["good.hpp", "bad.hpp", "later.hpp"]);
        assert_eq!(
            builder.rerun_directives(),
            vec![
                "cargo:rerun-if-changed=good.hpp",
                "cargo:rerun-if-changed=bad.hpp",
                "cargo:rerun-if-changed=later.hpp",
            ]
        );
    }

    #[test]
    fn test_policy_updates_config() {
        let builder = BindingBuilder::new().policy(ErrorPolicy::Skip);
        assert_eq!(builder.config.on_error, ErrorPolicy::Skip);
    }
}
