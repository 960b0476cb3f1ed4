use bankist::{Account, BankConfig, Operation, Statement};

use std::path::PathBuf;
use std::process;
use anyhow::Context;
use colored::Colorize;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// Name of the account owner
    #[clap(value_parser)]
    owner: String,

    /// Currency tag, e.g. EUR
    #[clap(value_parser)]
    currency: String,

    /// Account pin
    #[clap(value_parser)]
    pin: u32,

    /// Operations to apply in order: deposit=N, withdraw=N or loan=N
    #[clap(value_parser)]
    operations: Vec<Operation>,

    /// Path to a TOML config file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Print the resulting statement as JSON
    #[clap(long)]
    json: bool,

    /// Show more log output (repeatable); RUST_LOG applies when absent
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("bankist=warn")),
        1 => EnvFilter::new("bankist=info"),
        _ => EnvFilter::new("bankist=debug")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_movements(account: &Account) {
    for amount in account.movements() {
        let color = if *amount < 0.0 {
            colored::ColoredString::bright_red
        } else if *amount > 0.0 {
            colored::ColoredString::green
        } else {
            colored::ColoredString::normal
        };
        let fmt_amount = color(format!("{}", amount).white());
        println!("{} {}", fmt_amount, account.currency());
    }
    let total: f64 = account.movements().iter().sum();
    println!("{}: {} movements, net {} {}",
        account.owner().bold(), account.movements().len(), total, account.currency());
}

fn run(args: Cli) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => BankConfig::read(path)
            .with_context(|| format!("cannot load {}", path.display()))?,
        None => BankConfig::default()
    };

    let mut account = config.open_account(&args.owner, &args.currency, args.pin);
    Operation::apply_all(&args.operations, &mut account);

    if args.json {
        let statement = Statement::from(&account);
        println!("{}", serde_json::to_string_pretty(&statement)?);
    } else {
        print_movements(&account);
    }
    return Ok(());
}

fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    if let Err(err) = run(args) {
        eprintln!("{}: {:#}", "error".bright_red(), err);
        process::exit(1);
    }
}
