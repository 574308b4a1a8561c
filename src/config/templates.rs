//! Template naming and output configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Template identifier settings
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TemplatesConfig {
    /// Prefix shared by every template file name
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    "FL-NFD".to_string()
}

impl TemplatesConfig {
    /// Validate template configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.prefix.trim().is_empty() {
            return Err(ValidationError::EmptyTemplatePrefix);
        }
        Ok(())
    }
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

/// Where rendered payloads are written by the file renderer
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

fn default_directory() -> PathBuf {
    PathBuf::from("./generated")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_prefix_rejected() {
        let templates = TemplatesConfig {
            prefix: "  ".to_string(),
        };
        assert_eq!(templates.validate(), Err(ValidationError::EmptyTemplatePrefix));
    }

    #[test]
    fn test_output_default_directory() {
        assert_eq!(OutputConfig::default().directory, PathBuf::from("./generated"));
    }
}
