//! Vigia - camera monitoring event submission tool
//!
//! Posts camera-monitoring events (camera id, event type, timestamp) to the
//! ingestion API and renders the alert decision as a card.

mod form;
mod interactive;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use vigia_client::EventClient;
use vigia_events::EventType;

use crate::form::{submit, FormEvent, FormState};

#[derive(Parser)]
#[command(name = "vigia")]
#[command(about = "Vigia - Monitoramento Inteligente event submission")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Ingestion API base URL
    #[arg(
        long,
        global = true,
        env = "VIGIA_API_URL",
        default_value = "http://localhost:8000"
    )]
    api_url: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit a single camera event
    #[command(about = "Submit one camera event and print the alert decision")]
    Send {
        /// Camera identifier (ex: CAM-001)
        #[arg(short, long)]
        camera: String,

        /// Event type: movimento, parado, queda, inatividade_prolongada,
        /// invasao_perimetro
        #[arg(short, long, default_value = "movimento")]
        event_type: EventType,

        /// Observation time in milliseconds since epoch (default: now)
        #[arg(short, long)]
        timestamp: Option<i64>,
    },

    /// Interactive submission form
    #[command(about = "Fill the event form interactively")]
    Form,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure colored output
    if cli.no_color {
        colored::control::set_override(false);
    }

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .init();

    let client = EventClient::new(cli.api_url);

    match cli.command {
        Commands::Send {
            camera,
            event_type,
            timestamp,
        } => {
            let mut state = FormState::new();
            state.apply(FormEvent::CameraIdChanged(camera));
            state.apply(FormEvent::EventTypeChanged(event_type));
            if let Some(ts) = timestamp {
                state.apply(FormEvent::TimestampChanged(ts.to_string()));
            }

            submit(&mut state, &client).await;

            if let Some(outcome) = &state.last_outcome {
                render::print_outcome(outcome);
            }
            if let Some(message) = &state.last_error {
                render::print_error(message);
                std::process::exit(1);
            }
        },
        Commands::Form => {
            interactive::run(&client).await?;
        },
    }

    Ok(())
}
