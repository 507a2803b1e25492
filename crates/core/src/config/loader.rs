use figment::{providers::Env, Figment};

use super::{types::Config, ConfigError};

/// Environment prefix for file path settings.
const ENV_PREFIX: &str = "TICKETLINT_";

/// Environment prefix for the Azure OpenAI endpoint settings.
const LLM_ENV_PREFIX: &str = "AZURE_OPENAI_";

/// Load configuration from environment variables.
///
/// `TICKETLINT_*` variables map to top-level fields (for example
/// `TICKETLINT_TICKETS_PATH`), while `AZURE_OPENAI_*` variables map
/// into the `llm` section (for example `AZURE_OPENAI_API_KEY`).
pub fn load_config() -> Result<Config, ConfigError> {
    Figment::new()
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Env::prefixed(LLM_ENV_PREFIX).map(|key| format!("llm.{}", key.as_str()).into()))
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_config_defaults() {
        Jail::expect_with(|_jail| {
            let config = load_config().expect("defaults should load");
            assert_eq!(
                config.tickets_path.to_str().unwrap(),
                "./data/servicenow_tickets.json"
            );
            assert_eq!(config.llm.model, "gpt-4.1");
            assert_eq!(config.llm.max_tokens, 8000);
            assert!(config.llm.api_key.is_empty());
            Ok(())
        });
    }

    #[test]
    fn test_load_config_azure_vars_map_into_llm_section() {
        Jail::expect_with(|jail| {
            jail.set_env("AZURE_OPENAI_API_KEY", "test-key");
            jail.set_env("AZURE_OPENAI_API_VERSION", "2024-02-15-preview");
            jail.set_env(
                "AZURE_OPENAI_URL",
                "https://example.openai.azure.com/openai/deployments/gpt/chat/completions",
            );
            jail.set_env("AZURE_OPENAI_MODEL", "gpt-4o");

            let config = load_config().expect("config should load");
            assert_eq!(config.llm.api_key, "test-key");
            assert_eq!(config.llm.api_version, "2024-02-15-preview");
            assert_eq!(
                config.llm.url,
                "https://example.openai.azure.com/openai/deployments/gpt/chat/completions"
            );
            assert_eq!(config.llm.model, "gpt-4o");
            Ok(())
        });
    }

    #[test]
    fn test_load_config_path_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("TICKETLINT_TICKETS_PATH", "/tmp/dump.json");
            jail.set_env("TICKETLINT_REPORT_CSV_PATH", "/tmp/out.csv");

            let config = load_config().expect("config should load");
            assert_eq!(config.tickets_path.to_str().unwrap(), "/tmp/dump.json");
            assert_eq!(config.report_csv_path.to_str().unwrap(), "/tmp/out.csv");
            // Untouched fields keep their defaults
            assert_eq!(
                config.rules_path.to_str().unwrap(),
                "./data/completeness_rules.csv"
            );
            Ok(())
        });
    }

    #[test]
    fn test_load_config_numeric_overrides() {
        Jail::expect_with(|jail| {
            jail.set_env("AZURE_OPENAI_MAX_TOKENS", "500");
            jail.set_env("AZURE_OPENAI_TEMPERATURE", "0.7");
            jail.set_env("AZURE_OPENAI_TIMEOUT_SECS", "5");

            let config = load_config().expect("config should load");
            assert_eq!(config.llm.max_tokens, 500);
            assert_eq!(config.llm.temperature, 0.7);
            assert_eq!(config.llm.timeout_secs, 5);
            Ok(())
        });
    }

    #[test]
    fn test_load_config_invalid_numeric_fails() {
        Jail::expect_with(|jail| {
            jail.set_env("AZURE_OPENAI_MAX_TOKENS", "lots");

            let result = load_config();
            assert!(result.is_err());
            assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
            Ok(())
        });
    }
}
