use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use finvoice_core::{CategoryTable, RandomSource, SeededRandom, ThreadRandom};
use finvoice_finance::{advise, parse_expenses_csv, predict_return};
use finvoice_ingest::{ParseStrategy, parse_expense_text};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod state;

#[derive(Parser, Debug)]
#[command(name = "finvoice", version, about = "Expense parsing and investment return estimates")]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: ~/.finvoice/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an expense statement, e.g. "add dinner 300"
    Parse {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,

        /// general | strict (default: from config)
        #[arg(long)]
        strategy: Option<ParseStrategy>,
    },

    /// Categorize a description
    Categorize {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Print the category table
    Categories,

    /// Estimate returns for a lump-sum investment
    Predict {
        #[arg(long, allow_negative_numbers = true)]
        amount: f64,

        /// equity | commodity (aliases: stocks, gold)
        #[arg(long)]
        asset: String,

        #[arg(long, default_value = "1 year")]
        timeframe: String,

        /// Seed the sentiment draw for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Summarize spending from a CSV (description,amount[,category])
    Advise {
        #[arg(long)]
        csv: PathBuf,

        /// Savings goal name(s); the first one is used in advice
        #[arg(long = "goal")]
        goals: Vec<String>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Manage ~/.finvoice/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config if none exists
    Init,
    /// Print the config location
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .compact()
                .with_writer(std::io::stderr),
        )
        .init();

    match cli.command {
        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Path => println!("{}", config::config_path()?.display()),
        },

        Command::Parse { text, strategy } => {
            let cfg = config::load_config(cli.config.as_deref())?;
            let table = cfg.category_table()?;
            let strategy = strategy.unwrap_or(cfg.parser.strategy);
            let parsed = parse_expense_text(&text.join(" "), strategy, &table);
            print_json(&parsed)?;
        }

        Command::Categorize { text } => {
            let table = load_table(cli.config.as_deref())?;
            println!("{}", table.categorize(&text.join(" ")));
        }

        Command::Categories => {
            let table = load_table(cli.config.as_deref())?;
            print_json(table.rules())?;
        }

        Command::Predict {
            amount,
            asset,
            timeframe,
            seed,
        } => {
            if !amount.is_finite() {
                bail!("--amount must be a finite number");
            }
            let rng = random_source(seed);
            let prediction = predict_return(amount, &asset, &timeframe, rng.as_ref())
                .with_context(|| format!("predicting returns for '{asset}'"))?;
            print_json(&prediction)?;
        }

        Command::Advise { csv, goals, seed } => {
            if !csv.exists() {
                bail!("CSV not found: {} (pass --csv <path>)", csv.display());
            }
            let table = load_table(cli.config.as_deref())?;
            let expenses = parse_expenses_csv(&csv)
                .with_context(|| format!("parsing {}", csv.display()))?;
            let rng = random_source(seed);
            let advice = advise(&expenses, &goals, &table, rng.as_ref());
            print_json(&advice)?;
        }
    }

    Ok(())
}

fn load_table(path: Option<&Path>) -> Result<CategoryTable> {
    config::load_config(path)?.category_table()
}

fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_joins_words() {
        let cli = Cli::try_parse_from(["finvoice", "parse", "add", "dinner", "300", "--strategy", "strict"])
            .unwrap();
        match cli.command {
            Command::Parse { text, strategy } => {
                assert_eq!(text.join(" "), "add dinner 300");
                assert_eq!(strategy, Some(ParseStrategy::Strict));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_predict_defaults() {
        let cli = Cli::try_parse_from(["finvoice", "predict", "--amount", "50000", "--asset", "gold"])
            .unwrap();
        match cli.command {
            Command::Predict { amount, asset, timeframe, seed } => {
                assert_eq!(amount, 50000.0);
                assert_eq!(asset, "gold");
                assert_eq!(timeframe, "1 year");
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_bad_strategy_rejected() {
        assert!(Cli::try_parse_from(["finvoice", "parse", "x", "--strategy", "loose"]).is_err());
    }

    #[test]
    fn test_advise_collects_goals() {
        let cli = Cli::try_parse_from([
            "finvoice", "advise", "--csv", "x.csv", "--goal", "Trip", "--goal", "House",
        ])
        .unwrap();
        match cli.command {
            Command::Advise { goals, .. } => assert_eq!(goals, vec!["Trip", "House"]),
            other => panic!("unexpected command {other:?}"),
        }
    }
}
