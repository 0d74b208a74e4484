//! Configuration loading for the dukweld CLI

use anyhow::{Context, Result};
use duk_weld::{ErrorPolicy, WeldConfig};
use std::fs;
use std::path::Path;

/// Load the generator configuration, falling back to defaults without a file
pub fn load(path: Option<&Path>) -> Result<WeldConfig> {
    let Some(path) = path else {
        return Ok(WeldConfig::default());
    };

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config: WeldConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    tracing::debug!("loaded configuration from {}", path.display());
    Ok(config)
}

/// Apply command-line flags on top of the file configuration
pub fn apply_overrides(
    mut config: WeldConfig,
    keep_going: bool,
    init_name: Option<String>,
) -> WeldConfig {
    if keep_going {
        config.on_error = ErrorPolicy::Skip;
    }
    if let Some(name) = init_name {
        config.init_function = name;
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_file() {
        let config = load(None).unwrap();
        assert_eq!(config.function_marker, "DFUNC");
        assert_eq!(config.on_error, ErrorPolicy::Abort);
    }

    #[test]
    fn test_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "init_function = \"register_natives\"").unwrap();
        writeln!(file, "on_error = \"skip\"").unwrap();
        writeln!(file, "banner = false").unwrap();

        let config = load(Some(file.path())).unwrap();
        assert_eq!(config.init_function, "register_natives");
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert!(!config.banner);
        assert_eq!(config.bound_prefix, "duk_");
    }

    #[test]
    fn test_invalid_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "on_error = \"sometimes\"").unwrap();

        let err = load(Some(file.path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_flags_override_file() {
        let config = apply_overrides(WeldConfig::default(), true, Some("boot".to_string()));
        assert_eq!(config.on_error, ErrorPolicy::Skip);
        assert_eq!(config.init_function, "boot");

        let untouched = apply_overrides(WeldConfig::default(), false, None);
        assert_eq!(untouched, WeldConfig::default());
    }
}
