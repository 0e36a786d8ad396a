//! qident - SQS queue identity tool
//!
//! Builds queue URLs and ARNs from their parts, parses them back, and shows
//! queue attributes in human-readable form.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "qident")]
#[command(about = "Build, parse and describe SQS queue identities", long_about = None)]
struct Args {
    /// Output format (defaults to output.format from the config file)
    #[arg(long, value_enum, global = true, env = "QIDENT_FORMAT")]
    format: Option<OutputFormat>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true, env = "QIDENT_LOG_LEVEL")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the queue URL for the given parts
    Url(PartsArgs),

    /// Print the queue ARN for the given parts
    Arn(PartsArgs),

    /// Parse a queue URL or ARN
    Parse {
        input: String,
    },

    /// Parse a queue URL or ARN and show attributes in readable form
    Describe {
        input: String,

        /// Queue attribute as Key=Value (repeatable)
        #[arg(short = 'a', long = "attribute", value_parser = commands::parse_attribute)]
        attributes: Vec<(String, String)>,
    },
}

#[derive(clap::Args, Debug)]
struct PartsArgs {
    /// Region code (defaults to defaults.region)
    #[arg(long)]
    region: Option<String>,

    /// Account number (defaults to defaults.account)
    #[arg(long)]
    account: Option<String>,

    /// Queue name
    name: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Logs go to stderr so stdout stays machine readable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("qident={0},qident_sqs={0}", args.log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::load()?;
    let format = args.format.unwrap_or(config.output.format);

    match run(&args.command, &config, format) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) if format == OutputFormat::Json => {
            eprintln!("{}", commands::error_json(&e));
            std::process::exit(1);
        }
        Err(e) => Err(e),
    }
}

fn run(command: &Command, config: &Config, format: OutputFormat) -> anyhow::Result<String> {
    match command {
        Command::Url(parts) => {
            let queue = parts_to_identity(parts, config)?;
            Ok(queue.url())
        }
        Command::Arn(parts) => {
            let queue = parts_to_identity(parts, config)?;
            Ok(queue.arn())
        }
        Command::Parse { input } => {
            let queue = commands::parse(input)?;
            commands::render_identity(&queue, format)
        }
        Command::Describe { input, attributes } => {
            let queue = commands::parse(input)?.with_attributes(attributes.iter().cloned());
            commands::render_attributes(&queue, format)
        }
    }
}

fn parts_to_identity(
    parts: &PartsArgs,
    config: &Config,
) -> anyhow::Result<qident_sqs::QueueIdentity> {
    commands::from_parts(
        parts.region.as_deref(),
        parts.account.as_deref(),
        &parts.name,
        &config.defaults,
    )
}
