//! Wrapper emitter
//!
//! Turns one [`Declaration`] into one [`WrapperDef`] and records the
//! bind statements that register it.

use crate::codegen::RegistrationBuilder;
use crate::config::WeldConfig;
use crate::ir::{Declaration, Extraction, WrapperDef};

/// Emitter for Duktape wrapper functions
pub struct WrapperEmitter<'a> {
    config: &'a WeldConfig,
}

impl<'a> WrapperEmitter<'a> {
    /// Create a new wrapper emitter
    pub fn new(config: &'a WeldConfig) -> Self {
        Self { config }
    }

    /// Build the wrapper for a declaration
    ///
    /// Parameter `i` is read from stack slot `i` with the accessor for its
    /// type; the result policy follows the return type.
    pub fn emit(&self, decl: &Declaration) -> WrapperDef {
        let extractions = decl
            .params
            .iter()
            .enumerate()
            .map(|(slot, param)| Extraction {
                slot,
                ty: param.ty,
            })
            .collect();

        WrapperDef {
            symbol: self.config.wrapper_symbol(&decl.name),
            callee: decl.name.clone(),
            bound_name: self.config.bound_name(&decl.name).to_string(),
            extractions,
            returns: decl.return_type,
        }
    }

    /// Build the wrapper and bind it on the builder's active target
    pub fn emit_into(&self, decl: &Declaration, registry: &mut RegistrationBuilder) -> WrapperDef {
        let wrapper = self.emit(decl);
        registry.bind_function(&wrapper.symbol, &wrapper.bound_name, wrapper.arity());
        wrapper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ParamType, ReturnType, SetupStatement};

    #[test]
    fn test_emit_int_wrapper() {
        let config = WeldConfig::default();
        let decl = Declaration::new(ReturnType::Int, "add")
            .param(ParamType::Int, "a")
            .param(ParamType::Int, "b");

        let wrapper = WrapperEmitter::new(&config).emit(&decl);

        assert_eq!(wrapper.symbol, "wrapper_add");
        assert_eq!(wrapper.bound_name, "add");
        assert_eq!(
            wrapper.extractions,
            vec![
                Extraction { slot: 0, ty: ParamType::Int },
                Extraction { slot: 1, ty: ParamType::Int },
            ]
        );
        assert_eq!(wrapper.call_expr(), "add(arg0, arg1)");
        assert_eq!(wrapper.result_count(), 1);
    }

    #[test]
    fn test_emit_strips_bound_prefix() {
        let config = WeldConfig::default();
        let decl = Declaration::new(ReturnType::Void, "duk_log").param(ParamType::Text, "msg");

        let wrapper = WrapperEmitter::new(&config).emit(&decl);

        assert_eq!(wrapper.symbol, "wrapper_duk_log");
        assert_eq!(wrapper.bound_name, "log");
        assert_eq!(wrapper.extractions[0].ty.accessor(), "duk_require_string");
        assert_eq!(wrapper.returns.push_fn(), None);
        assert_eq!(wrapper.result_count(), 0);
    }

    #[test]
    fn test_emit_into_records_binding() {
        let config = WeldConfig::default();
        let decl = Declaration::new(ReturnType::Text, "duk_docCopy").param(ParamType::Int, "handle");
        let mut registry = RegistrationBuilder::new();

        WrapperEmitter::new(&config).emit_into(&decl, &mut registry);

        assert_eq!(
            registry.statements(),
            &[
                SetupStatement::RegisterCallable {
                    wrapper: "wrapper_duk_docCopy".to_string(),
                    arity: 1,
                },
                SetupStatement::BindProperty {
                    name: "docCopy".to_string(),
                },
            ]
        );
    }
}
