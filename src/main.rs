//! Address Book - demonstration entry point
//!
//! Builds a small book, edits and queries it, and prints the results to
//! stdout. Logs go to stderr.

use address_book::config::OutputFormat;
use address_book::{AddressBook, Config, Record};
use anyhow::{Context, Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Output format: {}", config.output_format);

    if let Err(e) = run(config.output_format) {
        error!("Demo failed: {:#}", e);
        return Err(e);
    }

    Ok(())
}

fn run(format: OutputFormat) -> Result<()> {
    let mut book = AddressBook::new();

    let mut john = Record::new("John")?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane")?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    print_book(&book, format)?;

    let john = book.find_mut("John").context("John is missing from the book")?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{}", john);

    if let Some(phone) = john.find_phone("5555555555") {
        println!("{}: {}", john.name(), phone);
    }

    book.delete("Jane");
    print_book(&book, format)?;

    Ok(())
}

fn print_book(book: &AddressBook, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for (_, record) in book {
                println!("{}", record);
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(book).context("Failed to serialize book")?;
            println!("{}", json);
        }
    }
    Ok(())
}
