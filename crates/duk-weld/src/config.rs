//! Generator configuration
//!
//! Every knob has a default matching the conventions used by the
//! Duktape-embedding sources this tool was written for, so an empty
//! configuration file is valid.

use serde::{Deserialize, Serialize};

/// What to do when a directive cannot be turned into a wrapper
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop at the first bad directive; the run produces nothing
    #[default]
    Abort,
    /// Drop the bad directive, record a diagnostic and keep going
    Skip,
}

/// Configuration for a generation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeldConfig {
    /// Keyword that starts a function directive line
    pub function_marker: String,
    /// Prefix that starts a namespace directive line
    pub namespace_marker: String,
    /// Leading prefix stripped (once) from a function name to form its script name
    pub bound_prefix: String,
    /// Prefix prepended to a function name to form its wrapper symbol
    pub wrapper_prefix: String,
    /// Name of the generated startup routine
    pub init_function: String,
    /// Emit a "do not edit" banner at the top of rendered C++ output
    pub banner: bool,
    /// Error handling policy
    pub on_error: ErrorPolicy,
}

impl Default for WeldConfig {
    fn default() -> Self {
        Self {
            function_marker: "DFUNC".to_string(),
            namespace_marker: "// DUKTAPE_NAMESPACE".to_string(),
            bound_prefix: "duk_".to_string(),
            wrapper_prefix: "wrapper_".to_string(),
            init_function: "init_wrappers".to_string(),
            banner: true,
            on_error: ErrorPolicy::Abort,
        }
    }
}

impl WeldConfig {
    /// Create a configuration with default markers and names
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the function directive marker
    pub fn with_function_marker(mut self, marker: impl Into<String>) -> Self {
        self.function_marker = marker.into();
        self
    }

    /// Set the namespace directive marker
    pub fn with_namespace_marker(mut self, marker: impl Into<String>) -> Self {
        self.namespace_marker = marker.into();
        self
    }

    /// Set the prefix stripped from bound names
    pub fn with_bound_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.bound_prefix = prefix.into();
        self
    }

    /// Set the wrapper symbol prefix
    pub fn with_wrapper_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.wrapper_prefix = prefix.into();
        self
    }

    /// Set the startup routine name
    pub fn with_init_function(mut self, name: impl Into<String>) -> Self {
        self.init_function = name.into();
        self
    }

    /// Enable or disable the generated-file banner
    pub fn with_banner(mut self, banner: bool) -> Self {
        self.banner = banner;
        self
    }

    /// Set the error policy
    pub fn with_policy(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    /// Script-visible name for a native function
    ///
    /// Removes exactly one leading occurrence of `bound_prefix`.
    pub fn bound_name<'a>(&self, func_name: &'a str) -> &'a str {
        if self.bound_prefix.is_empty() {
            return func_name;
        }
        func_name
            .strip_prefix(self.bound_prefix.as_str())
            .unwrap_or(func_name)
    }

    /// Wrapper symbol for a native function
    pub fn wrapper_symbol(&self, func_name: &str) -> String {
        format!("{}{}", self.wrapper_prefix, func_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bound_name_strips_prefix_once() {
        let config = WeldConfig::default();
        assert_eq!(config.bound_name("duk_log"), "log");
        assert_eq!(config.bound_name("duk_duk_log"), "duk_log");
        assert_eq!(config.bound_name("add"), "add");
        assert_eq!(config.bound_name("getDocType"), "getDocType");
    }

    #[test]
    fn test_bound_name_requires_leading_prefix() {
        let config = WeldConfig::default();
        assert_eq!(config.bound_name("my_duk_log"), "my_duk_log");
    }

    #[test]
    fn test_wrapper_symbol_keeps_full_name() {
        let config = WeldConfig::default();
        assert_eq!(config.wrapper_symbol("duk_log"), "wrapper_duk_log");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: WeldConfig =
            serde_json::from_str(r#"{"init_function": "bind_all", "on_error": "skip"}"#).unwrap();
        assert_eq!(config.init_function, "bind_all");
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert_eq!(config.function_marker, "DFUNC");
    }
}
