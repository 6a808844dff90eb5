use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::application::ExchangeService;
use crate::domain::Rate;
use crate::storage::SqliteRateStore;

/// Cambio - Currency Exchange
#[derive(Parser)]
#[command(name = "cambio")]
#[command(about = "A local-first currency exchange tool based on stored pair rates")]
#[command(version)]
pub struct Cli {
    /// Database file path
    #[arg(short, long, default_value = "cambio.db")]
    pub database: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new database
    Init,

    /// Set the rate for a currency pair
    Set {
        /// Source currency code (e.g., USD)
        from: String,

        /// Target currency code (e.g., EUR)
        to: String,

        /// Rate value: 1 FROM = VALUE TO (e.g., "0.92")
        value: String,
    },

    /// Convert an amount between two currencies
    Convert {
        /// Amount to convert (e.g., "50.00" or "50")
        amount: String,

        /// Source currency code
        #[arg(long)]
        from: String,

        /// Target currency code
        #[arg(long)]
        to: String,
    },

    /// List stored rates
    Rates {
        /// Output as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Init => {
                SqliteRateStore::init(&format!("sqlite:{}?mode=rwc", self.database)).await?;
                println!("Database initialized: {}", self.database);
            }

            Commands::Set { from, to, value } => {
                let service = connect_service(&self.database).await?;
                let value: f64 = value
                    .parse()
                    .context("Invalid rate value. Use a decimal like '0.92'")?;

                service.set_rate(Rate::new(&from, &to, value)).await?;

                // Echo the canonical form so a reversed pair visibly
                // prints the stored reciprocal.
                let stored = Rate::new(from, to, value).into_canonical();
                println!("Stored rate: {}", stored);
            }

            Commands::Convert { amount, from, to } => {
                let service = connect_service(&self.database).await?;
                let amount: f64 = amount
                    .parse()
                    .context("Invalid amount format. Use '50.00' or '50'")?;

                let converted = service.exchange(&from, &to, amount).await?;
                println!("{} {} = {} {}", amount, from, converted, to);
            }

            Commands::Rates { json } => {
                let service = connect_service(&self.database).await?;
                let records = service.store().list_rates().await?;

                if json {
                    let rates: Vec<&Rate> = records.iter().map(|r| &r.rate).collect();
                    println!("{}", serde_json::to_string_pretty(&rates)?);
                } else if records.is_empty() {
                    println!("No rates stored.");
                } else {
                    println!("{:<5} {:<5} {:<20} UPDATED", "FROM", "TO", "VALUE");
                    for record in records {
                        println!(
                            "{:<5} {:<5} {:<20} {}",
                            record.rate.code_from,
                            record.rate.code_to,
                            record.rate.value,
                            record.updated_at.format("%Y-%m-%d %H:%M:%S")
                        );
                    }
                }
            }
        }

        Ok(())
    }
}

async fn connect_service(database: &str) -> Result<ExchangeService<SqliteRateStore>> {
    let store = SqliteRateStore::connect(&format!("sqlite:{}", database)).await?;
    Ok(ExchangeService::new(store))
}
