use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ticketlint_core::{
    load_config, load_rules, load_tickets, validate_config, write_reports, AzureOpenAiClient,
    EvaluatorConfig, TicketEvaluator,
};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("ticketlint {}", VERSION);

    // Load configuration from the environment
    let config = load_config().context("Failed to load configuration from environment")?;
    validate_config(&config).context("Configuration validation failed")?;

    info!("Configuration loaded successfully");
    info!("Endpoint: {}", config.llm.url);
    info!("Model: {}", config.llm.model);

    // Load inputs
    info!("Loading tickets from {:?}", config.tickets_path);
    let tickets = load_tickets(&config.tickets_path)
        .with_context(|| format!("Failed to load tickets from {:?}", config.tickets_path))?;
    info!("Loaded {} tickets", tickets.len());

    info!("Loading rules from {:?}", config.rules_path);
    let rules = load_rules(&config.rules_path)
        .with_context(|| format!("Failed to load rules from {:?}", config.rules_path))?;
    info!("Loaded {} rules", rules.len());

    // Create the evaluator over the configured endpoint
    let client = Arc::new(AzureOpenAiClient::new(&config.llm));
    let evaluator = TicketEvaluator::with_config(
        client,
        rules,
        EvaluatorConfig {
            max_tokens: config.llm.max_tokens,
            temperature: config.llm.temperature,
        },
    );

    // Evaluate every ticket, one request at a time
    let verdicts = evaluator.evaluate_all(&tickets).await;

    // Write reports
    write_reports(&verdicts, &config.report_json_path, &config.report_csv_path)
        .context("Failed to write reports")?;

    let complete = verdicts.iter().filter(|v| v.completeness).count();
    let failed = verdicts.iter().filter(|v| v.is_failure()).count();
    let incomplete = verdicts.len() - complete - failed;

    info!(
        "Audit finished: {} complete, {} incomplete, {} failed",
        complete, incomplete, failed
    );
    info!("JSON report: {:?}", config.report_json_path);
    info!("CSV report: {:?}", config.report_csv_path);
    if failed > 0 {
        warn!(
            "{} tickets could not be evaluated; see the error column",
            failed
        );
    }

    Ok(())
}
