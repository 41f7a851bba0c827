//! Command-line surface of the demo binary.

use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::agent::base::AgentResponse;
use crate::agent::career::CareerAgent;

#[derive(Debug, Parser)]
#[command(
    name = "career-agent",
    version,
    about = "Ask the CareerGuide agent about skills, experience and job fit"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Professional summary of the profile's skills
    Skills,
    /// Career narrative built from the job history
    Experience,
    /// Assess the profile against a job description
    Fit {
        job_description: String,
    },
    /// Job recommendations for the given skills
    Recommend {
        #[arg(required = true)]
        skills: Vec<String>,
    },
    /// Send a free-form query straight to the model
    Ask {
        query: String,
        /// Print the full answer at once instead of streaming it
        #[arg(long)]
        no_stream: bool,
    },
}

/// Runs `command` against `agent`, writing the answer to `out`.
pub async fn run<W>(agent: &CareerAgent, command: Command, out: &mut W) -> Result<()>
where
    W: Write + Send,
{
    match command {
        Command::Skills => write_response(out, agent.get_skills_summary().await?).await?,
        Command::Experience => write_response(out, agent.get_experience_summary().await?).await?,
        Command::Fit { job_description } => {
            write_response(out, agent.assess_job_fit(&job_description).await?).await?
        }
        Command::Recommend { skills } => {
            write_response(out, agent.get_job_recommendations(skills.as_slice()).await?).await?
        }
        Command::Ask { query, no_stream } => {
            agent
                .base()
                .print_response_to(out, &query, !no_stream)
                .await?
        }
    }
    Ok(())
}

async fn write_response<W: Write + Send>(out: &mut W, response: AgentResponse) -> Result<()> {
    let text = response.into_text().await?;
    writeln!(out, "{text}")?;
    Ok(())
}
