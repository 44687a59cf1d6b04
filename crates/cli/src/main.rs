//! Corebank CLI - Scripted sessions against an in-memory bank
//!
//! The core holds no persistent state, so each invocation wires a fresh
//! in-memory bank, seeds roles, and plays a session through the facade.
//! Every action here is a facade call; no business logic lives in this
//! binary.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use corebank_access::Permission;
use corebank_bank::Bank;
use corebank_core::{Amount, Currency};
use corebank_ledger::AccountType;
use corebank_registry::NewCustomer;
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "corebank")]
#[command(about = "Corebank - enterprise ledger core", long_about = None)]
struct Cli {
    /// Institution name stamped on the session
    #[arg(long, default_value = "First Example Bank")]
    institution: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the reference session: register, open two accounts, deposit,
    /// transfer, then attempt an over-transfer
    Demo {
        /// Opening deposit into the first account
        #[arg(long, default_value = "200")]
        deposit: Decimal,

        /// Amount moved from the first account to the second
        #[arg(long, default_value = "150")]
        transfer: Decimal,

        /// Currency for the whole session
        #[arg(long, default_value = "USD")]
        currency: Currency,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Demo {
            deposit,
            transfer,
            currency,
        } => demo(&cli.institution, deposit, transfer, currency),
    }
}

fn demo(institution: &str, deposit: Decimal, transfer: Decimal, currency: Currency) -> Result<()> {
    let bank = Bank::in_memory(institution, "INST-001");
    bank.add_role("ops", "operations", Permission::ALL)?;

    let customer_id = bank.register_customer(
        "ops",
        NewCustomer {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 12, 10)
                .context("invalid demo date of birth")?,
            address: "12 Analytical St".into(),
            contact_info: "ada@example.com".into(),
            id_documents: vec!["PASSPORT-X123".into()],
        },
    )?;
    println!("registered customer {customer_id}");

    let a1 = bank.create_account(
        "ops",
        &customer_id,
        AccountType::Checking,
        currency.clone(),
        Amount::ZERO,
    )?;
    let a2 = bank.create_account(
        "ops",
        &customer_id,
        AccountType::Savings,
        currency.clone(),
        Amount::ZERO,
    )?;
    println!("opened accounts {a1} and {a2} ({currency})");

    let deposit = Amount::new(deposit)?;
    let receipt = bank.deposit("ops", &a1, deposit, currency.clone())?;
    println!("deposited {} -> balance {}", receipt.amount, receipt.balance);

    let transfer = Amount::new(transfer)?;
    let moved = bank.transfer("ops", &a1, &a2, transfer, currency.clone())?;
    println!(
        "transferred {}: {} now {}, {} now {}",
        moved.outgoing.amount,
        a1,
        moved.outgoing.balance,
        a2,
        moved.incoming.balance
    );

    // Over-draw on purpose to show the typed rejection
    match bank.transfer("ops", &a1, &a2, Amount::new(Decimal::new(1000, 0))?, currency) {
        Ok(_) => println!("unexpected: over-transfer succeeded"),
        Err(err) => println!("over-transfer rejected: {err}"),
    }

    for account_id in [&a1, &a2] {
        let statement = bank.statement(account_id)?;
        println!("statement {account_id} (balance {}):", statement.balance);
        for txn in &statement.transactions {
            println!(
                "  {} {} {} -> {}",
                txn.id, txn.kind, txn.amount, txn.balance_after
            );
        }
    }

    Ok(())
}
