use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Path to the exported ticket dump (JSON array of records).
    #[serde(default = "default_tickets_path")]
    pub tickets_path: PathBuf,
    /// Path to the completeness rules file (first CSV column per row).
    #[serde(default = "default_rules_path")]
    pub rules_path: PathBuf,
    /// Output path for the JSON report.
    #[serde(default = "default_report_json_path")]
    pub report_json_path: PathBuf,
    /// Output path for the CSV report.
    #[serde(default = "default_report_csv_path")]
    pub report_csv_path: PathBuf,
    #[serde(default)]
    pub llm: LlmConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tickets_path: default_tickets_path(),
            rules_path: default_rules_path(),
            report_json_path: default_report_json_path(),
            report_csv_path: default_report_csv_path(),
            llm: LlmConfig::default(),
        }
    }
}

fn default_tickets_path() -> PathBuf {
    PathBuf::from("./data/servicenow_tickets.json")
}

fn default_rules_path() -> PathBuf {
    PathBuf::from("./data/completeness_rules.csv")
}

fn default_report_json_path() -> PathBuf {
    PathBuf::from("ticket_completeness_report.json")
}

fn default_report_csv_path() -> PathBuf {
    PathBuf::from("ticket_completeness_report.csv")
}

/// Azure OpenAI endpoint configuration
///
/// Populated from `AZURE_OPENAI_*` environment variables. The key,
/// API version and URL have no usable defaults and are checked by
/// `validate_config`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LlmConfig {
    /// API key sent in the `api-key` header.
    #[serde(default)]
    pub api_key: String,
    /// Value for the `api-version` query parameter.
    #[serde(default)]
    pub api_version: String,
    /// Full chat-completions endpoint URL of the deployment.
    #[serde(default)]
    pub url: String,
    /// Model identifier sent in the request body.
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum tokens for the model reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature.
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u32,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            api_version: String::new(),
            url: String::new(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout(),
        }
    }
}

fn default_model() -> String {
    "gpt-4.1".to_string()
}

fn default_max_tokens() -> u32 {
    8000
}

fn default_temperature() -> f32 {
    0.2
}

fn default_timeout() -> u32 {
    60
}
