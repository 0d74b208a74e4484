//! JSON generator
//!
//! Dumps the generation unit as JSON for tooling that wants the binding
//! table without parsing C++.

use crate::diagnostics::WeldResult;
use crate::ir::GenerationUnit;

/// Generator for the JSON form of a unit
pub struct JsonGenerator<'a> {
    unit: &'a GenerationUnit,
}

impl<'a> JsonGenerator<'a> {
    /// Create a new JSON generator
    pub fn new(unit: &'a GenerationUnit) -> Self {
        Self { unit }
    }

    /// Generate pretty-printed JSON with a trailing newline
    pub fn generate(&self) -> WeldResult<String> {
        let mut json = serde_json::to_string_pretty(self.unit)?;
        json.push('\n');
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codegen::emit_bootstrap;
    use crate::ir::{Extraction, ParamType, ReturnType, SetupStatement, WrapperDef};

    #[test]
    fn test_json_round_trip() {
        let unit = GenerationUnit {
            wrappers: vec![WrapperDef {
                symbol: "wrapper_duk_log".to_string(),
                callee: "duk_log".to_string(),
                bound_name: "log".to_string(),
                extractions: vec![Extraction { slot: 0, ty: ParamType::Text }],
                returns: ReturnType::Void,
            }],
            bootstrap: emit_bootstrap(
                "init_wrappers",
                vec![
                    SetupStatement::RegisterCallable {
                        wrapper: "wrapper_duk_log".to_string(),
                        arity: 1,
                    },
                    SetupStatement::BindProperty {
                        name: "log".to_string(),
                    },
                ],
            ),
        };

        let json = JsonGenerator::new(&unit).generate().unwrap();
        assert!(json.contains("\"op\": \"register_callable\""));
        assert!(json.contains("\"bound_name\": \"log\""));

        let parsed: GenerationUnit = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, unit);
    }
}
