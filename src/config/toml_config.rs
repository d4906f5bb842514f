use crate::utils::error::{PortalError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Portal configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortalConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_seconds: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataConfig {
    pub seating: Option<String>,
    pub schedule: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub log_filter: Option<String>,
}

impl PortalConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PortalError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        toml::from_str(&processed).map_err(|e| PortalError::InvalidConfig {
            field: "toml".to_string(),
            value: String::new(),
            reason: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` placeholders with environment values;
    /// unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> String {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();
        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .to_string()
    }
}

impl Validate for PortalConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("api.base_url", &self.api.base_url)?;
        if let Some(seating) = &self.data.seating {
            validation::validate_path("data.seating", seating)?;
        }
        if let Some(schedule) = &self.data.schedule {
            validation::validate_path("data.schedule", schedule)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_config() {
        let toml_content = r#"
[api]
base_url = "http://localhost:8000"

[data]
seating = "./data/seating.csv"
schedule = "./data/schedule.csv"
"#;
        let config = PortalConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.data.seating.as_deref(), Some("./data/seating.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_defaults_apply_when_sections_missing() {
        let config = PortalConfig::from_toml_str("").unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(config.data.schedule.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PORTAL_TEST_API", "https://exams.example.edu");

        let toml_content = r#"
[api]
base_url = "${PORTAL_TEST_API}"
"#;
        let config = PortalConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api.base_url, "https://exams.example.edu");

        std::env::remove_var("PORTAL_TEST_API");
    }

    #[test]
    fn test_invalid_base_url_fails_validation() {
        let toml_content = r#"
[api]
base_url = "not-a-url"
"#;
        let config = PortalConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        let toml_content = r#"
[api]
base_url = "https://exams.example.edu"
"#;
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = PortalConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.api.base_url, "https://exams.example.edu");
    }
}
