//! CLI tool for card input validation.
//!
//! # Usage
//!
//! ```bash
//! # Validate a full card input
//! cardvalidator card --owner "John Doe" --number 4111111111111111 --issue-date 12/30 --cvc 123
//!
//! # Same, as JSON
//! cardvalidator card -o json --owner "John Doe" --number 4111111111111111 --issue-date 12/30 --cvc 123
//!
//! # Check a single field
//! cardvalidator owner "John Doe"
//! cardvalidator number 5412345678901234
//! cardvalidator expiry 12/30
//! cardvalidator cvc 123
//!
//! # Detect card brand
//! cardvalidator brand 341234567890123
//! ```
//!
//! Set `RUST_LOG=debug` to see validation events on stderr.

use std::process::ExitCode;

use card_validation::{cvc, detect, expiry, get_brand, owner, CreditCard};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cardvalidator")]
#[command(author, version, about = "Payment card input validation tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate all four card fields at once
    Card {
        /// Card holder name
        #[arg(long, default_value = "")]
        owner: String,

        /// Card number (digits only)
        #[arg(long, default_value = "")]
        number: String,

        /// Expiry date (MM/YY or MM/YYYY)
        #[arg(long, default_value = "")]
        issue_date: String,

        /// Card verification code
        #[arg(long, default_value = "")]
        cvc: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Validate a card holder name
    Owner {
        /// Name to validate
        name: String,
    },

    /// Validate a card number
    Number {
        /// Card number to validate
        card_number: String,
    },

    /// Validate an expiry date
    Expiry {
        /// Expiry date (MM/YY or MM/YYYY)
        date: String,
    },

    /// Validate a CVC
    Cvc {
        /// CVC to validate
        cvc: String,
    },

    /// Detect card brand from number
    Brand {
        /// Card number
        card_number: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Card {
            owner,
            number,
            issue_date,
            cvc,
            output,
        } => cmd_card(CreditCard::new(owner, number, issue_date, cvc), output),
        Commands::Owner { name } => report(
            owner::parse_owner(&name).map(|n| format!("Words: {}", n.token_count())),
        ),
        Commands::Number { card_number } => report(
            detect::parse_number(&card_number).map(|brand| format!("Brand: {}", brand)),
        ),
        Commands::Expiry { date } => cmd_expiry(&date),
        Commands::Cvc { cvc: input } => report(
            cvc::parse_cvc(&input).map(|c| format!("Length: {} digits", c.length())),
        ),
        Commands::Brand { card_number } => cmd_brand(&card_number),
    }
}

/// Prints a field check result and maps it to an exit code.
fn report<E: std::fmt::Display>(result: Result<String, E>) -> ExitCode {
    match result {
        Ok(details) => {
            println!("Valid: yes");
            println!("{}", details);
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Valid: no");
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_card(card: CreditCard, output: OutputFormat) -> ExitCode {
    let outcome = card.validate();

    match output {
        OutputFormat::Text => {
            if outcome.is_valid() {
                println!("Valid: yes");
            } else {
                println!("Valid: no");
            }
            if let Some(brand) = outcome.brand() {
                println!("Brand: {}", brand);
            }
            for message in outcome.messages() {
                println!("Error: {}", message);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&outcome) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    if outcome.is_valid() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn cmd_expiry(date: &str) -> ExitCode {
    let now = Utc::now();
    report(expiry::validate_expiry_at(date, now).map(|exp| {
        format!(
            "Month: {:02}\nYear: {}\nLast Day: {}\nMonths Until Expiry: {}",
            exp.month(),
            exp.year(),
            exp.last_day(),
            exp.months_until_expiry_at(now)
        )
    }))
}

fn cmd_brand(card_number: &str) -> ExitCode {
    match get_brand(card_number) {
        Ok(brand) => {
            println!("Detected Brand: {}", brand.name());
            println!("Valid Lengths: {:?}", brand.valid_lengths());
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Detected Brand: none");
            println!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
