//! A scripted tour of the machine: seven sessions against one drawer.
//!
//! Run with `cargo run --bin demo`. Set `RUST_LOG=cashpoint=debug` to watch
//! every transition, or pass `--interactive` to drive a session yourself.

use cashpoint::{
    Account, Atm, AtmEnvironment, AtmError, AtmEvent, AtmNotice, Card, CashInventory,
    Denomination, InMemoryAccounts, InputSource, Money, Operation, PinCode, QueuedInput,
};
use std::io::{self, Write};

fn bank() -> InMemoryAccounts {
    InMemoryAccounts::new()
        .with_account(Account::new("ACC001", Money::from_units(5_000)))
        .with_account(Account::new("ACC002", Money::from_units(100)))
        .with_account(Account::new("ACC003", Money::zero()))
        .with_account(Account::new("ACC004", Money::from_units(10_000)))
        .with_account(Account::new("ACC005", Money::from_units(50)))
}

fn card(slot: usize) -> Option<Card> {
    let (number, pin, account) = match slot {
        1 => ("CARD001", 1111, "ACC001"),
        2 => ("CARD002", 2222, "ACC002"),
        3 => ("CARD003", 3333, "ACC003"),
        4 => ("CARD004", 4444, "ACC004"),
        5 => ("CARD005", 5555, "ACC005"),
        _ => return None,
    };
    Some(Card::new(number, PinCode::new(pin), account))
}

fn banner(title: &str) {
    println!();
    println!("=== {title} ===");
}

fn announce(outcome: Result<AtmNotice, AtmError>) {
    match outcome {
        Ok(notice) => println!("  -> {notice}"),
        Err(error) => println!("  !! {error}"),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cashpoint=warn")),
        )
        .init();

    if std::env::args().any(|arg| arg == "--interactive") {
        interactive();
    } else {
        scripted();
    }
}

fn scripted() {
    let mut atm = Atm::new(CashInventory::default());
    let mut env = AtmEnvironment::new(bank(), QueuedInput::new());

    banner("1. successful withdrawal");
    env.input = Box::new(
        QueuedInput::new()
            .with_pin(PinCode::new(1111))
            .with_amount(Money::from_units(300)),
    );
    announce(atm.dispatch(AtmEvent::InsertCard(card(1).unwrap()), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::ExecuteTransaction, &mut env));

    banner("2. wrong PINs, then a balance inquiry");
    env.input = Box::new(
        QueuedInput::new()
            .with_pin(PinCode::new(1234))
            .with_pin(PinCode::new(9999))
            .with_pin(PinCode::new(4444)),
    );
    announce(atm.dispatch(AtmEvent::InsertCard(card(4).unwrap()), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::BalanceInquiry), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::BalanceInquiry), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::BalanceInquiry), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::BalanceInquiry), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::BalanceInquiry), &mut env));
    announce(atm.dispatch(AtmEvent::ExecuteTransaction, &mut env));

    banner("3. insufficient balance, corrected on retry");
    env.input = Box::new(
        QueuedInput::new()
            .with_pin(PinCode::new(2222))
            .with_amount(Money::from_units(200))
            .with_amount(Money::from_units(100)),
    );
    announce(atm.dispatch(AtmEvent::InsertCard(card(2).unwrap()), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::ExecuteTransaction, &mut env));
    announce(atm.dispatch(AtmEvent::ExecuteTransaction, &mut env));

    banner("4. more than the drawer holds");
    env.input = Box::new(
        QueuedInput::new()
            .with_pin(PinCode::new(4444))
            .with_amount(Money::from_units(5_000)),
    );
    announce(atm.dispatch(AtmEvent::InsertCard(card(4).unwrap()), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::ExecuteTransaction, &mut env));
    announce(atm.dispatch(AtmEvent::RemoveCard, &mut env));

    banner("5. an empty account");
    env.input = Box::new(
        QueuedInput::new()
            .with_pin(PinCode::new(3333))
            .with_pin(PinCode::new(3333))
            .with_amount(Money::from_units(10)),
    );
    announce(atm.dispatch(AtmEvent::InsertCard(card(3).unwrap()), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::ExecuteTransaction, &mut env));
    announce(atm.dispatch(AtmEvent::RemoveCard, &mut env));
    announce(atm.dispatch(AtmEvent::InsertCard(card(3).unwrap()), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::BalanceInquiry), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::BalanceInquiry), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::BalanceInquiry), &mut env));
    announce(atm.dispatch(AtmEvent::ExecuteTransaction, &mut env));

    banner("6. events out of order");
    env.input = Box::new(QueuedInput::new());
    announce(atm.dispatch(AtmEvent::ExecuteTransaction, &mut env));
    announce(atm.dispatch(AtmEvent::RemoveCard, &mut env));
    announce(atm.dispatch(AtmEvent::InsertCard(card(5).unwrap()), &mut env));
    announce(atm.dispatch(AtmEvent::ExecuteTransaction, &mut env));

    banner("7. pulling the card mid-session");
    env.input = Box::new(QueuedInput::new().with_pin(PinCode::new(5555)));
    announce(atm.dispatch(AtmEvent::InsertCard(card(5).unwrap()), &mut env));
    announce(atm.dispatch(AtmEvent::RemoveCard, &mut env));
    announce(atm.dispatch(AtmEvent::InsertCard(card(5).unwrap()), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env));
    announce(atm.dispatch(AtmEvent::RemoveCard, &mut env));

    epilogue(&atm);
}

fn epilogue(atm: &Atm) {
    banner("end of day");
    println!("  drawer total: {}", atm.inventory().total_value());
    for denomination in Denomination::DESCENDING {
        println!(
            "    {denomination} x {}",
            atm.inventory().count_of(denomination)
        );
    }

    let journal = atm.journal();
    let rejections = journal
        .records()
        .iter()
        .filter(|record| record.outcome.is_rejection())
        .count();
    println!("  journal: {} events, {} rejected", journal.len(), rejections);

    if let Some(last) = journal.records().last().and_then(|record| record.session) {
        let records: Vec<_> = journal.session_records(last).collect();
        match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("  last session:\n{json}"),
            Err(error) => println!("  last session could not be serialized: {error}"),
        }
    }
}

/// Blocking keypad reads from stdin, for the interactive mode.
struct ConsoleInput;

impl ConsoleInput {
    fn read_number(prompt: &str) -> u64 {
        loop {
            print!("{prompt}");
            let _ = io::stdout().flush();
            let mut line = String::new();
            match io::stdin().read_line(&mut line) {
                Ok(0) | Err(_) => return 0,
                Ok(_) => {}
            }
            match line.trim().parse() {
                Ok(value) => return value,
                Err(_) => println!("  numbers only"),
            }
        }
    }
}

impl InputSource for ConsoleInput {
    fn read_pin(&mut self) -> PinCode {
        PinCode::new(Self::read_number("  PIN: ") as u32)
    }

    fn read_amount(&mut self) -> Money {
        Money::from_units(Self::read_number("  amount: "))
    }
}

fn interactive() {
    let mut atm = Atm::new(CashInventory::default());
    let mut env = AtmEnvironment::new(bank(), ConsoleInput);

    println!("cards 1-5 are on file (PINs 1111, 2222, 3333, 4444, 5555)");
    println!("commands: insert <1-5> | remove | select withdraw | select balance | execute | quit");

    loop {
        print!("> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let mut words = line.split_whitespace();

        let outcome = match (words.next(), words.next()) {
            (Some("insert"), Some(slot)) => {
                match slot.parse().ok().and_then(card) {
                    Some(card) => atm.dispatch(AtmEvent::InsertCard(card), &mut env),
                    None => {
                        println!("  no such card");
                        continue;
                    }
                }
            }
            (Some("remove"), None) => atm.dispatch(AtmEvent::RemoveCard, &mut env),
            (Some("select"), Some("withdraw")) => {
                atm.dispatch(AtmEvent::SelectOperation(Operation::Withdraw), &mut env)
            }
            (Some("select"), Some("balance")) => {
                atm.dispatch(AtmEvent::SelectOperation(Operation::BalanceInquiry), &mut env)
            }
            (Some("execute"), None) => atm.dispatch(AtmEvent::ExecuteTransaction, &mut env),
            (Some("quit"), None) => break,
            (None, None) => continue,
            _ => {
                println!("  unknown command");
                continue;
            }
        };
        announce(outcome);
    }

    epilogue(&atm);
}
