use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - The required Azure OpenAI variables are set (key, version, URL)
/// - Model name is not empty
/// - Token budget is not 0
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut missing = Vec::new();
    if config.llm.api_key.trim().is_empty() {
        missing.push("AZURE_OPENAI_API_KEY");
    }
    if config.llm.api_version.trim().is_empty() {
        missing.push("AZURE_OPENAI_API_VERSION");
    }
    if config.llm.url.trim().is_empty() {
        missing.push("AZURE_OPENAI_URL");
    }
    if !missing.is_empty() {
        return Err(ConfigError::ValidationError(format!(
            "Missing required environment variables: {}",
            missing.join(", ")
        )));
    }

    if config.llm.model.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "llm.model cannot be empty".to_string(),
        ));
    }

    if config.llm.max_tokens == 0 {
        return Err(ConfigError::ValidationError(
            "llm.max_tokens cannot be 0".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LlmConfig;

    fn configured() -> Config {
        Config {
            llm: LlmConfig {
                api_key: "key".to_string(),
                api_version: "2024-02-15-preview".to_string(),
                url: "https://example.openai.azure.com/openai/deployments/gpt/chat/completions"
                    .to_string(),
                ..LlmConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_validate_valid_config() {
        assert!(validate_config(&configured()).is_ok());
    }

    #[test]
    fn test_validate_missing_everything_names_all_variables() {
        let result = validate_config(&Config::default());
        assert!(result.is_err());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("AZURE_OPENAI_API_KEY"));
        assert!(message.contains("AZURE_OPENAI_API_VERSION"));
        assert!(message.contains("AZURE_OPENAI_URL"));
    }

    #[test]
    fn test_validate_missing_key_names_only_key() {
        let mut config = configured();
        config.llm.api_key = String::new();
        let message = validate_config(&config).unwrap_err().to_string();
        assert!(message.contains("AZURE_OPENAI_API_KEY"));
        assert!(!message.contains("AZURE_OPENAI_API_VERSION"));
        assert!(!message.contains("AZURE_OPENAI_URL"));
    }

    #[test]
    fn test_validate_blank_url_counts_as_missing() {
        let mut config = configured();
        config.llm.url = "   ".to_string();
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("AZURE_OPENAI_URL"));
    }

    #[test]
    fn test_validate_empty_model_fails() {
        let mut config = configured();
        config.llm.model = String::new();
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(_)
        ));
    }

    #[test]
    fn test_validate_zero_max_tokens_fails() {
        let mut config = configured();
        config.llm.max_tokens = 0;
        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_tokens"));
    }
}
