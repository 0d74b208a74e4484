//! Bootstrap emitter
//!
//! Wraps the accumulated registration statements in the startup routine.

use crate::ir::{Bootstrap, SetupStatement};

/// Build the startup routine around a registration sequence.
///
/// The routine opens the global object first and closes whatever target is
/// active last, so an empty sequence still yields a valid no-op routine.
pub fn emit_bootstrap(name: impl Into<String>, registrations: Vec<SetupStatement>) -> Bootstrap {
    let mut statements = Vec::with_capacity(registrations.len() + 2);
    statements.push(SetupStatement::ActivateGlobal);
    statements.extend(registrations);
    statements.push(SetupStatement::DeactivateTarget);

    Bootstrap {
        name: name.into(),
        statements,
    }
}
