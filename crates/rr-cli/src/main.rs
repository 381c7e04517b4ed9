use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{OutputFormat, Preset};

#[derive(Parser, Debug)]
#[command(name = "rr", version, about = "RETS Rabbit listing query parameter resolver")]
struct Cli {
    /// Log resolution steps to stderr
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve template attributes into listing API query parameters.
    Resolve {
        /// Schema file (YAML). Defaults to the built-in preset.
        #[arg(long, env = "RR_SCHEMA")]
        schema: Option<PathBuf>,

        /// Built-in schema to use when no schema file is given
        #[arg(long, value_enum, default_value_t = Preset::Properties)]
        preset: Preset,

        /// Attribute value, e.g. --param top=50. Repeatable.
        #[arg(short, long = "param", value_parser = commands::resolve::parse_key_val)]
        params: Vec<(String, String)>,

        /// Raw query string, e.g. "filter=City+eq+%27Austin%27&skip=10"
        #[arg(short, long)]
        query: Option<String>,

        /// What to print
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Wire)]
        format: OutputFormat,
    },

    /// Validate a schema file.
    Check {
        /// Schema file (YAML)
        file: PathBuf,
    },

    /// Print a schema as YAML.
    Schema {
        /// Schema file (YAML). Defaults to the built-in preset.
        #[arg(long, env = "RR_SCHEMA")]
        schema: Option<PathBuf>,

        /// Built-in schema to print when no schema file is given
        #[arg(long, value_enum, default_value_t = Preset::Properties)]
        preset: Preset,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Resolve {
            schema,
            preset,
            params,
            query,
            format,
        } => {
            let schema = commands::load_schema(schema.as_deref(), preset)?;
            let output = commands::resolve::run(&schema, &params, query.as_deref(), format)?;
            println!("{}", output);
        }
        Command::Check { file } => {
            println!("{}", commands::check::run(&file)?);
        }
        Command::Schema { schema, preset } => {
            let schema = commands::load_schema(schema.as_deref(), preset)?;
            print!("{}", schema.to_yaml()?);
        }
    }

    Ok(())
}
