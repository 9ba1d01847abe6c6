//! Indentation configuration for code generation.

use foamj_model::IndentSetting;

const SPACES: &str = "                ";

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width (capped at 16).
    Spaces(u8),
    /// Tab character.
    Tab,
}

impl Indent {
    /// 2-space indentation, FOAM's Java default.
    pub const JAVA: Self = Self::Spaces(2);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n) => &SPACES[..usize::from(*n).min(SPACES.len())],
            Self::Tab => "\t",
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::JAVA
    }
}

impl From<IndentSetting> for Indent {
    fn from(setting: IndentSetting) -> Self {
        match setting {
            IndentSetting::Spaces(n) => Self::Spaces(n),
            IndentSetting::Tab => Self::Tab,
        }
    }
}
