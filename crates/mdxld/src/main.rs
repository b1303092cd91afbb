//! mdxld CLI - Main entry point

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::PipelineArgs;

#[derive(Parser)]
#[command(name = "mdxld")]
#[command(version)]
#[command(about = "Normalize YAML-LD frontmatter in markdown documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a document and write the result
    Process {
        /// Input markdown file
        input: String,

        /// Write output to FILE (defaults to stdout)
        #[arg(short = 'o', long)]
        output: Option<String>,

        /// Write the YAML-LD data as JSON instead of the document
        #[arg(long)]
        data: bool,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Validate documents and report diagnostics
    Check {
        /// Input markdown files
        #[arg(required = true)]
        inputs: Vec<String>,

        /// Print diagnostics as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries document output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mdxld=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Process {
            input,
            output,
            data,
            pipeline,
        } => commands::process::execute(commands::process::ProcessArgs {
            input,
            output,
            data,
            pipeline,
        }),
        Commands::Check {
            inputs,
            json,
            pipeline,
        } => commands::check::execute(commands::check::CheckArgs {
            inputs,
            json,
            pipeline,
        }),
    }
}
