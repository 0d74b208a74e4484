//! Registration builder
//!
//! Accumulates the statements the bootstrap routine runs, in the order the
//! directives were encountered. The statements stay plain data until a
//! renderer serializes them.

use crate::ir::{SetupStatement, Target};

/// Append-only builder for registration statements
#[derive(Debug, Clone, Default)]
pub struct RegistrationBuilder {
    statements: Vec<SetupStatement>,
    active: Target,
}

impl RegistrationBuilder {
    /// Create a builder with the global object as active target
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the active target to a fresh namespace object
    ///
    /// Closes the current target, reopens the global object, stores a new
    /// empty object under `name` and activates it. An earlier object stored
    /// under the same name is replaced.
    pub fn open_namespace(&mut self, name: &str) {
        tracing::debug!("opening namespace {} (was {})", name, self.active);

        self.statements.push(SetupStatement::DeactivateTarget);
        self.statements.push(SetupStatement::ActivateGlobal);
        self.statements.push(SetupStatement::DefineNamespace {
            name: name.to_string(),
        });
        self.statements.push(SetupStatement::DeactivateTarget);
        self.statements.push(SetupStatement::ActivateNamespace {
            name: name.to_string(),
        });
        self.active = Target::Namespace(name.to_string());
    }

    /// Register a wrapper and bind it on the active target
    pub fn bind_function(&mut self, wrapper: &str, bound_name: &str, arity: usize) {
        self.statements.push(SetupStatement::RegisterCallable {
            wrapper: wrapper.to_string(),
            arity,
        });
        self.statements.push(SetupStatement::BindProperty {
            name: bound_name.to_string(),
        });
    }

    /// The target subsequent bindings attach to
    pub fn active_target(&self) -> &Target {
        &self.active
    }

    /// Statements recorded so far
    pub fn statements(&self) -> &[SetupStatement] {
        &self.statements
    }

    /// Take the recorded statements
    pub fn into_statements(self) -> Vec<SetupStatement> {
        self.statements
    }
}
