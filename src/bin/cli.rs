use cashpoint::{Account, AppConfig, AuthGate, Credential,
    JsonStore, PinOutcome, PinStore, StateStore,
    transaction::Amount};

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;

#[derive(Parser, Debug)]
#[clap(version, about)]
struct Cli {
    /// Path to a TOML config file; built-in defaults apply when omitted
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Override the state file path
    #[clap(long, value_parser)]
    state: Option<PathBuf>,

    /// Override the secret file path
    #[clap(long, value_parser)]
    secret: Option<PathBuf>
}

type Input = io::Lines<io::StdinLock<'static>>;

fn read_line(lines: &mut Input, prompt: &str) -> anyhow::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush().context("failed to flush stdout")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read from stdin")?)),
        None => Ok(None)
    }
}

fn authenticate(lines: &mut Input, credential: &Credential, max_attempts: u32) -> anyhow::Result<bool> {
    let mut gate = AuthGate::new(max_attempts);
    loop {
        let pin = match read_line(lines, "Enter your 4-digit PIN: ")? {
            Some(pin) => pin,
            None => return Ok(false)
        };
        match gate.submit(credential, pin.trim()) {
            PinOutcome::Accepted => return Ok(true),
            PinOutcome::Rejected { remaining } => {
                println!("{}", format!("Invalid PIN. Attempts left: {}", remaining).red());
            }
            PinOutcome::LockedOut => {
                println!("{}", "Too many failed attempts. Exiting.".red());
                return Ok(false);
            }
        }
    }
}

fn change_pin(lines: &mut Input, credential: &mut Credential, store: &PinStore) -> anyhow::Result<()> {
    let old_pin = match read_line(lines, "Enter your old PIN: ")? {
        Some(pin) => pin,
        None => return Ok(())
    };
    let new_pin = match read_line(lines, "Enter your new 4-digit PIN: ")? {
        Some(pin) => pin,
        None => return Ok(())
    };

    match credential.change_pin(old_pin.trim(), new_pin.trim()) {
        Ok(()) => {
            store.save(credential)?;
            println!("{}", "PIN changed successfully.".green());
        }
        Err(err) => println!("{}", err.to_string().red())
    }
    return Ok(());
}

// rejects NaN and infinities up front; they would slip past the
// ledger's non-positive check
fn parse_amount(arg: Option<&str>) -> Option<Amount> {
    arg?.parse().ok().filter(|amount: &Amount| amount.is_finite())
}

fn print_help() {
    println!("Commands: balance, deposit <amount>, withdraw <amount>, history, change-pin, help, quit");
}

fn run_session(lines: &mut Input, account: &mut Account,
               credential: &mut Credential, pin_store: &PinStore) -> anyhow::Result<()> {
    println!("{}", account.balance_summary().green());
    print_help();

    loop {
        let line = match read_line(lines, "> ")? {
            Some(line) => line,
            None => return Ok(())
        };
        let mut words = line.split_whitespace();
        let command = words.next().unwrap_or("");
        let argument = words.next();

        match command {
            "" => continue,
            "balance" => println!("{}", account.balance_summary().green()),
            "deposit" | "withdraw" => {
                let amount = match parse_amount(argument) {
                    Some(amount) => amount,
                    None => {
                        println!("{}", "Invalid amount.".red());
                        continue;
                    }
                };
                let result = if command == "deposit" {
                    account.deposit(amount)
                } else {
                    account.withdraw(amount)
                };
                match result {
                    Ok(receipt) => println!("{}", receipt),
                    Err(err) => println!("{}", err.to_string().red())
                }
            }
            "history" => {
                for entry in account.history() {
                    println!("{}", entry);
                }
            }
            "change-pin" => change_pin(lines, credential, pin_store)?,
            "help" => print_help(),
            "quit" | "exit" => return Ok(()),
            other => println!("{}", format!("Unknown command: {}", other).red())
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Cli::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::read(path)?,
        None => AppConfig::default()
    };
    if let Some(path) = args.state {
        config.storage.state_file = path;
    }
    if let Some(path) = args.secret {
        config.storage.secret_file = path;
    }

    let pin_store = PinStore::new(&config.storage.secret_file);
    let mut credential = pin_store.load_or_init()?;

    let mut lines = io::stdin().lines();

    if !authenticate(&mut lines, &credential, config.session.max_pin_attempts)? {
        return Ok(());
    }

    let store = JsonStore::new(&config.storage.state_file);
    let mut account = Account::new(config.currency_format());
    account.import_state(store.load());

    run_session(&mut lines, &mut account, &mut credential, &pin_store)?;

    store.save(&account.export_state())?;
    println!("Goodbye.");
    return Ok(());
}
