mod agent;
mod cli;
mod config;
mod errors;
mod llm_client;
mod models;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::agent::career::CareerAgent;
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::llm_client::{ChatModel, LlmClient};
use crate::models::profile::CareerProfile;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first (fails on missing GROQ_API_KEY)
    let config = Config::from_env()?;

    // Initialize structured logging. Stdout carries the model's answer, so logs go to stderr.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting career-agent v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (markdown output, as every career prompt asks for it)
    let llm = LlmClient::new(
        config.groq_api_key.clone(),
        config.groq_api_url.clone(),
        config.groq_model.clone(),
        true,
    )?;
    info!("LLM client initialized (model: {})", llm.model_id());

    let llm: Arc<dyn ChatModel> = Arc::new(llm);
    let agent = match &config.profile_path {
        Some(path) => {
            let profile = CareerProfile::from_json_file(path)?;
            info!("Loaded career profile from {}", path.display());
            CareerAgent::with_profile(llm, profile)
        }
        None => CareerAgent::new(llm),
    };
    info!(
        "{} ready (avatar: {}, {} skill categories, {} jobs): {}",
        agent.base().name(),
        agent.base().avatar(),
        agent.profile().skills.len(),
        agent.profile().experience.len(),
        agent.base().description()
    );

    match cli.command {
        // Free-form queries print straight to the console, streamed by default.
        Command::Ask { query, no_stream } => {
            agent.base().print_response(&query, !no_stream).await?;
            Ok(())
        }
        command => {
            let mut stdout = std::io::stdout();
            cli::run(&agent, command, &mut stdout).await
        }
    }
}
