//! Per-run generator state
//!
//! A [`Generator`] owns everything one run accumulates: the wrappers
//! emitted so far, the registration sequence with its active target, and
//! the diagnostics for skipped directives. Sources are scanned in the order
//! they are given, lines in file order, and [`Generator::finish`] consumes
//! the state to produce the [`GenerationUnit`].
//!
//! Once a scan has failed the run is poisoned: later scans and `finish`
//! return [`WeldError::Aborted`] instead of a partial unit.

use crate::codegen::{emit_bootstrap, RegistrationBuilder, WrapperEmitter};
use crate::config::{ErrorPolicy, WeldConfig};
use crate::diagnostics::{
    Diagnostic, DiagnosticsCollector, DirectiveError, SourceLocation, WeldError, WeldResult,
};
use crate::ir::{GenerationUnit, WrapperDef};
use crate::parse::{directives, parse_declaration, parse_namespace, Directive};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Accumulated state of one generation run
#[derive(Debug)]
pub struct Generator {
    config: WeldConfig,
    wrappers: Vec<WrapperDef>,
    registry: RegistrationBuilder,
    diagnostics: DiagnosticsCollector,
    first_seen: HashMap<String, SourceLocation>,
    aborted: bool,
}

impl Generator {
    /// Create a generator for one run
    pub fn new(config: WeldConfig) -> Self {
        Self {
            config,
            wrappers: Vec::new(),
            registry: RegistrationBuilder::new(),
            diagnostics: DiagnosticsCollector::new(),
            first_seen: HashMap::new(),
            aborted: false,
        }
    }

    /// Wrappers emitted so far
    pub fn wrappers(&self) -> &[WrapperDef] {
        &self.wrappers
    }

    /// Diagnostics recorded so far
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    /// Read and scan one file
    pub fn scan_file(&mut self, path: impl AsRef<Path>) -> WeldResult<()> {
        self.ensure_running()?;

        let path = path.as_ref();
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(e) => {
                self.aborted = true;
                return Err(if e.kind() == ErrorKind::NotFound {
                    WeldError::SourceNotFound(path.to_path_buf())
                } else {
                    WeldError::io(path, e)
                });
            }
        };

        self.scan_source(&path.display().to_string(), &source)
    }

    /// Scan an in-memory source labelled `origin`
    pub fn scan_source(&mut self, origin: &str, source: &str) -> WeldResult<()> {
        self.ensure_running()?;
        tracing::info!("scanning {}", origin);

        let found: Vec<(usize, Directive<'_>)> = directives(source, &self.config).collect();
        for (line, directive) in found {
            let location = SourceLocation::new(origin, line);
            if let Err(err) = self.process(&location, directive) {
                self.reject(location, err)?;
            }
        }

        Ok(())
    }

    fn process(
        &mut self,
        location: &SourceLocation,
        directive: Directive<'_>,
    ) -> Result<(), DirectiveError> {
        match directive {
            Directive::Namespace(rest) => {
                let name = parse_namespace(rest)?;
                tracing::debug!("{}: namespace {}", location, name);
                self.registry.open_namespace(name);
            }
            Directive::Function(rest) => {
                let decl = parse_declaration(rest)?;
                tracing::debug!(
                    "{}: {} {} with {} param(s) on {}",
                    location,
                    decl.return_type,
                    decl.name,
                    decl.arity(),
                    self.registry.active_target()
                );

                if let Some(first) = self.first_seen.get(&decl.name) {
                    tracing::warn!("{}: duplicate declaration of {}", location, decl.name);
                    self.diagnostics.add(
                        Diagnostic::warning(format!(
                            "duplicate declaration of `{}` (first declared at {})",
                            decl.name, first
                        ))
                        .at(location.clone())
                        .with_code("W010"),
                    );
                } else {
                    self.first_seen.insert(decl.name.clone(), location.clone());
                }

                let wrapper =
                    WrapperEmitter::new(&self.config).emit_into(&decl, &mut self.registry);
                self.wrappers.push(wrapper);
            }
        }
        Ok(())
    }

    fn reject(&mut self, location: SourceLocation, err: DirectiveError) -> WeldResult<()> {
        match self.config.on_error {
            ErrorPolicy::Abort => {
                self.aborted = true;
                Err(WeldError::directive(location, err))
            }
            ErrorPolicy::Skip => {
                tracing::warn!("{}: skipping directive: {}", location, err);
                self.diagnostics
                    .add(Diagnostic::from_directive(location, &err));
                Ok(())
            }
        }
    }

    fn ensure_running(&self) -> WeldResult<()> {
        if self.aborted {
            Err(WeldError::Aborted)
        } else {
            Ok(())
        }
    }

    /// Finish the run and build the generation unit
    pub fn finish(self) -> WeldResult<GenerationUnit> {
        Ok(self.finish_with_diagnostics()?.0)
    }

    /// Finish the run, also returning the diagnostics
    pub fn finish_with_diagnostics(self) -> WeldResult<(GenerationUnit, DiagnosticsCollector)> {
        self.ensure_running()?;

        let bootstrap = emit_bootstrap(
            self.config.init_function.as_str(),
            self.registry.into_statements(),
        );
        tracing::info!(
            "generated {} wrapper(s), {} setup statement(s)",
            self.wrappers.len(),
            bootstrap.statements.len()
        );

        Ok((
            GenerationUnit {
                wrappers: self.wrappers,
                bootstrap,
            },
            self.diagnostics,
        ))
    }
}

/// Scan `paths` in order and build the unit
pub fn generate_files<P: AsRef<Path>>(
    paths: &[P],
    config: WeldConfig,
) -> WeldResult<(GenerationUnit, DiagnosticsCollector)> {
    let mut generator = Generator::new(config);
    for path in paths {
        generator.scan_file(path)?;
    }
    generator.finish_with_diagnostics()
}
