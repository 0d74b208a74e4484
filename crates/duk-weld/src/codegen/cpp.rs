//! Duktape C++ source generator
//!
//! Serializes a [`GenerationUnit`] into the source file that gets compiled
//! next to the annotated functions: one `static duk_ret_t` wrapper per
//! declaration followed by the startup routine.

use crate::config::WeldConfig;
use crate::ir::{Bootstrap, GenerationUnit, SetupStatement, WrapperDef};

/// Generator for Duktape C++ bindings
pub struct CppGenerator<'a> {
    unit: &'a GenerationUnit,
    config: &'a WeldConfig,
}

impl<'a> CppGenerator<'a> {
    /// Create a new generator for a unit
    pub fn new(unit: &'a GenerationUnit, config: &'a WeldConfig) -> Self {
        Self { unit, config }
    }

    /// Generate the complete source
    pub fn generate(&self) -> String {
        let mut output = String::new();

        if self.config.banner {
            output.push_str("// Auto-generated Duktape bindings\n");
            output.push_str("// Generated by duk-weld - do not edit manually\n\n");
        }

        for wrapper in &self.unit.wrappers {
            output.push_str(&self.generate_wrapper(wrapper));
            output.push('\n');
        }

        output.push_str(&self.generate_bootstrap(&self.unit.bootstrap));
        output
    }

    /// Generate one wrapper function
    ///
    /// ```text
    /// static duk_ret_t wrapper_add(duk_context* ctx) {
    ///   int arg0 = duk_require_int(ctx, 0);
    ///   int arg1 = duk_require_int(ctx, 1);
    ///   duk_push_int(ctx, add(arg0, arg1));
    ///   return 1;
    /// }
    /// ```
    pub fn generate_wrapper(&self, wrapper: &WrapperDef) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "static duk_ret_t {}(duk_context* ctx) {{\n",
            wrapper.symbol
        ));

        for extraction in &wrapper.extractions {
            output.push_str(&format!(
                "  {} {} = {}(ctx, {});\n",
                extraction.ty.c_type(),
                extraction.local(),
                extraction.ty.accessor(),
                extraction.slot
            ));
        }

        let call = wrapper.call_expr();
        match wrapper.returns.push_fn() {
            Some(push) => output.push_str(&format!(
                "  {}(ctx, {}{});\n",
                push,
                call,
                wrapper.returns.result_suffix()
            )),
            None => output.push_str(&format!("  {};\n", call)),
        }

        output.push_str(&format!("  return {};\n", wrapper.result_count()));
        output.push_str("}\n");
        output
    }

    /// Generate the startup routine
    pub fn generate_bootstrap(&self, bootstrap: &Bootstrap) -> String {
        let mut output = String::new();

        output.push_str(&format!("void {}(duk_context* ctx) {{\n", bootstrap.name));
        for statement in &bootstrap.statements {
            for line in statement_lines(statement) {
                output.push_str("  ");
                output.push_str(&line);
                output.push('\n');
            }
        }
        output.push_str("}\n");
        output
    }
}

/// Duktape API calls performing one setup statement
pub fn statement_lines(statement: &SetupStatement) -> Vec<String> {
    match statement {
        SetupStatement::ActivateGlobal => vec!["duk_push_global_object(ctx);".to_string()],
        SetupStatement::DeactivateTarget => vec!["duk_pop(ctx);".to_string()],
        SetupStatement::DefineNamespace { name } => vec![
            format!("duk_push_string(ctx, {});", c_string(name)),
            "duk_push_object(ctx);".to_string(),
            "duk_put_prop(ctx, -3);".to_string(),
        ],
        SetupStatement::ActivateNamespace { name } => {
            vec![format!("duk_get_global_string(ctx, {});", c_string(name))]
        }
        SetupStatement::RegisterCallable { wrapper, arity } => {
            vec![format!("duk_push_c_function(ctx, {}, {});", wrapper, arity)]
        }
        SetupStatement::BindProperty { name } => {
            vec![format!("duk_put_prop_string(ctx, -2, {});", c_string(name))]
        }
    }
}

/// Quote a name as a C string literal
fn c_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::emit_bootstrap;
    use crate::ir::{Extraction, ParamType, ReturnType};
    use pretty_assertions::assert_eq;

    fn wrapper(callee: &str, params: &[ParamType], returns: ReturnType) -> WrapperDef {
        let config = WeldConfig::default();
        WrapperDef {
            symbol: config.wrapper_symbol(callee),
            callee: callee.to_string(),
            bound_name: config.bound_name(callee).to_string(),
            extractions: params
                .iter()
                .enumerate()
                .map(|(slot, ty)| Extraction { slot, ty: *ty })
                .collect(),
            returns,
        }
    }

    fn unit_of(wrappers: Vec<WrapperDef>) -> GenerationUnit {
        GenerationUnit {
            wrappers,
            bootstrap: emit_bootstrap("init_wrappers", Vec::new()),
        }
    }

    #[test]
    fn test_generate_text_return_wrapper() {
        let unit = unit_of(Vec::new());
        let config = WeldConfig::default();
        let gen = CppGenerator::new(&unit, &config);

        let output = gen.generate_wrapper(&wrapper(
            "duk_getDocLine",
            &[ParamType::Int, ParamType::Int],
            ReturnType::Text,
        ));

        assert_eq!(
            output,
            "static duk_ret_t wrapper_duk_getDocLine(duk_context* ctx) {\n\
             \x20 int arg0 = duk_require_int(ctx, 0);\n\
             \x20 int arg1 = duk_require_int(ctx, 1);\n\
             \x20 duk_push_string(ctx, duk_getDocLine(arg0, arg1).c_str());\n\
             \x20 return 1;\n\
             }\n"
        );
    }

    #[test]
    fn test_generate_void_wrapper() {
        let unit = unit_of(Vec::new());
        let config = WeldConfig::default();
        let gen = CppGenerator::new(&unit, &config);

        let output = gen.generate_wrapper(&wrapper(
            "duk_docPaste",
            &[ParamType::Int, ParamType::Text, ParamType::Bool],
            ReturnType::Void,
        ));

        assert!(output.contains("  const char* arg1 = duk_require_string(ctx, 1);\n"));
        assert!(output.contains("  bool arg2 = duk_require_boolean(ctx, 2);\n"));
        assert!(output.contains("  duk_docPaste(arg0, arg1, arg2);\n"));
        assert!(!output.contains("duk_push"));
        assert!(output.ends_with("  return 0;\n}\n"));
    }

    #[test]
    fn test_generate_without_banner() {
        let unit = unit_of(Vec::new());
        let config = WeldConfig::default().with_banner(false);

        let output = CppGenerator::new(&unit, &config).generate();

        assert_eq!(
            output,
            "void init_wrappers(duk_context* ctx) {\n  duk_push_global_object(ctx);\n  duk_pop(ctx);\n}\n"
        );
    }

    #[test]
    fn test_namespace_statement_lines() {
        assert_eq!(
            statement_lines(&SetupStatement::DefineNamespace {
                name: "Syn".to_string()
            }),
            vec![
                "duk_push_string(ctx, \"Syn\");".to_string(),
                "duk_push_object(ctx);".to_string(),
                "duk_put_prop(ctx, -3);".to_string(),
            ]
        );
        assert_eq!(
            statement_lines(&SetupStatement::ActivateNamespace {
                name: "Syn".to_string()
            }),
            vec!["duk_get_global_string(ctx, \"Syn\");".to_string()]
        );
    }

    #[test]
    fn test_c_string_escapes() {
        assert_eq!(c_string("plain"), "\"plain\"");
        assert_eq!(c_string("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
