//! The `[project]` table.

use std::path::PathBuf;

use serde::Deserialize;

/// Project metadata and generator settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Project name
    pub name: String,

    /// Default Java package for classes that don't declare one
    #[serde(default)]
    pub package: Option<String>,

    /// Output directory for generated sources, relative to the manifest
    #[serde(default)]
    pub output: Option<PathBuf>,

    /// Indentation of generated code
    #[serde(default, deserialize_with = "deserialize_indent")]
    pub indent: IndentSetting,

    /// Comment line written at the top of every generated file
    #[serde(default)]
    pub header: Option<String>,
}

impl ProjectConfig {
    /// Output directory, defaulting to Maven's source root.
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from("src/main/java"))
    }
}

/// Indentation unit for generated Java.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentSetting {
    /// Spaces with the specified width
    Spaces(u8),
    /// Tab character
    Tab,
}

impl Default for IndentSetting {
    fn default() -> Self {
        Self::Spaces(2)
    }
}

/// Widest space indent the generator emits.
const MAX_INDENT_WIDTH: u8 = 16;

fn deserialize_indent<'de, D>(deserializer: D) -> std::result::Result<IndentSetting, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawIndent {
        Width(u8),
        Named(String),
    }

    match RawIndent::deserialize(deserializer)? {
        RawIndent::Width(0) => Err(D::Error::custom("indent width must be at least 1")),
        RawIndent::Width(n) if n > MAX_INDENT_WIDTH => Err(D::Error::custom(format!(
            "indent width must be at most {}",
            MAX_INDENT_WIDTH
        ))),
        RawIndent::Width(n) => Ok(IndentSetting::Spaces(n)),
        RawIndent::Named(s) if s.eq_ignore_ascii_case("tab") => Ok(IndentSetting::Tab),
        RawIndent::Named(s) => Err(D::Error::custom(format!(
            "invalid indent '{}', expected a width or \"tab\"",
            s
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_width_and_tab() {
        let cfg: ProjectConfig = toml::from_str("name = \"x\"\nindent = 4").unwrap();
        assert_eq!(cfg.indent, IndentSetting::Spaces(4));

        let cfg: ProjectConfig = toml::from_str("name = \"x\"\nindent = \"tab\"").unwrap();
        assert_eq!(cfg.indent, IndentSetting::Tab);
    }

    #[test]
    fn test_defaults() {
        let cfg: ProjectConfig = toml::from_str("name = \"x\"").unwrap();
        assert_eq!(cfg.indent, IndentSetting::Spaces(2));
        assert_eq!(cfg.output_dir(), PathBuf::from("src/main/java"));
        assert!(cfg.header.is_none());
    }

    #[test]
    fn test_invalid_indent() {
        assert!(toml::from_str::<ProjectConfig>("name = \"x\"\nindent = \"wide\"").is_err());
        assert!(toml::from_str::<ProjectConfig>("name = \"x\"\nindent = 0").is_err());
    }

    #[test]
    fn test_indent_width_upper_bound() {
        let cfg: ProjectConfig = toml::from_str("name = \"x\"\nindent = 16").unwrap();
        assert_eq!(cfg.indent, IndentSetting::Spaces(16));

        let err = toml::from_str::<ProjectConfig>("name = \"x\"\nindent = 17").unwrap_err();
        assert!(err.to_string().contains("indent width must be at most 16"));
    }
}
