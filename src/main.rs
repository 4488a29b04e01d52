mod assistant;
mod cli;
mod config;
mod content;
mod error;
mod gemini_client;
mod markup;
mod planner;
mod provider;
mod search;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenv::dotenv;
use eyre::Result;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use crate::cli::page::PageContext;
use crate::config::Config;
use crate::error::AppError;
use crate::gemini_client::GeminiClient;
use crate::planner::{Interest, PlanForm, TravelStyle, TripDuration};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Gemini model to use (overrides GEMINI_MODEL)
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the guide interactively (default)
    Page,
    /// Search attractions, offers and town history
    Search {
        /// Text to look for
        #[arg(required = true)]
        query: Vec<String>,
    },
    /// Let the trip planner suggest an itinerary
    Plan {
        /// Interests of the visitor, repeat for more than one
        #[arg(short, long, value_enum, required = true)]
        interest: Vec<Interest>,

        /// Length of the stay
        #[arg(short, long, value_enum, default_value_t = TripDuration::OneDay)]
        duration: TripDuration,

        /// Preferred pace of the trip
        #[arg(short, long, value_enum, default_value_t = TravelStyle::Balanced)]
        style: TravelStyle,
    },
    /// Ask the local guide a single question
    Ask {
        #[arg(required = true)]
        question: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Load environment variables from .env file
    dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| AppError::Logger(e.to_string()))?;

    let config = match Config::from_env() {
        Ok(config) => config.with_model(cli.model),
        Err(e) => {
            error!(error = %e, "cannot start the guide");
            return Ok(ExitCode::FAILURE);
        }
    };

    let client = Arc::new(GeminiClient::new(&config));
    info!(model = client.model(), "starting Bad Belzig guide");

    match cli.command {
        None | Some(Commands::Page) => {
            let mut page = PageContext::new(Box::new(io::stdout()), client, true);
            page.run().await
        }
        Some(Commands::Search { query }) => {
            let mut page = PageContext::new(Box::new(io::stdout()), client, false);
            page.search(&query.join(" "))?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Plan { interest, duration, style }) => {
            let mut page = PageContext::new(Box::new(io::stdout()), client, false);
            page.set_form(PlanForm { interests: interest, duration, style });
            page.plan().await?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Ask { question }) => {
            let mut page = PageContext::new(Box::new(io::stdout()), client, false);
            page.ask(&question.join(" ")).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
