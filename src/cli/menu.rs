// src/cli/menu.rs
use anyhow::Result;
use console::style;
use inquire::{Confirm, MultiSelect, Password, Select, Text};

use passforge::analysis;
use passforge::breach::{BreachChecker, BreachSlot};
use passforge::core::config::Config;
use passforge::generators::{self, passphrase};
use passforge::history::History;
use passforge::models::{GenerationConfig, PassphraseConfig};

use crate::cli::handlers::{print_breach_result, print_report};

const CLASS_CHOICES: [&str; 4] = [
    "Lowercase (a-z)",
    "Uppercase (A-Z)",
    "Numbers (0-9)",
    "Symbols (!@#$%)",
];

pub async fn run_menu(config: &Config) -> Result<()> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║            🔐 PASSFORGE              ║");
    println!("╚══════════════════════════════════════╝");

    let mut history = History::new(config.history_capacity);
    let checker = BreachChecker::new(&config.breach_endpoint, config.breach_timeout)?;
    let slot = BreachSlot::new();

    loop {
        println!();
        let choice = Select::new(
            "What would you like to do?",
            vec![
                "Generate password",
                "Generate passphrase",
                "Analyze a password",
                "Check breach exposure",
                "View history",
                "Quit",
            ],
        )
        .prompt()?;

        match choice {
            "Generate password" => generate_password(config, &mut history)?,
            "Generate passphrase" => generate_passphrase(config, &mut history)?,
            "Analyze a password" => analyze_password()?,
            "Check breach exposure" => check_breach(&checker, &slot).await?,
            "View history" => view_history(&history),
            _ => break,
        }
    }

    Ok(())
}

fn generate_password(config: &Config, history: &mut History) -> Result<()> {
    let length: usize = Text::new("Password length:")
        .with_default(&config.default_password_length.to_string())
        .prompt()?
        .parse()
        .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))?;

    let selected = MultiSelect::new("Character classes:", CLASS_CHOICES.to_vec())
        .with_default(&[0, 1, 2, 3])
        .prompt()?;

    let exclude_ambiguous = Confirm::new("Exclude ambiguous characters (l, o, I, O, 0, 1, |)?")
        .with_default(config.default_exclude_ambiguous)
        .prompt()?;

    let gen_config = GenerationConfig {
        length,
        include_lowercase: selected.contains(&CLASS_CHOICES[0]),
        include_uppercase: selected.contains(&CLASS_CHOICES[1]),
        include_digits: selected.contains(&CLASS_CHOICES[2]),
        include_symbols: selected.contains(&CLASS_CHOICES[3]),
        exclude_ambiguous,
    };

    match generators::generate(&gen_config) {
        Ok(password) => {
            println!("\n{}", style(&password).green().bold());
            print_report(&analysis::analyze(&password));
            history.record(password);
        }
        Err(e) => println!("{}", style(format!("❌ {}", e)).red()),
    }
    Ok(())
}

fn generate_passphrase(config: &Config, history: &mut History) -> Result<()> {
    let word_count: usize = Text::new("Number of words:")
        .with_default(&config.default_word_count.to_string())
        .prompt()?
        .parse()
        .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))?;

    let separator = Text::new("Separator:")
        .with_default(&config.default_separator)
        .prompt()?;

    let capitalize = Confirm::new("Capitalize each word?")
        .with_default(false)
        .prompt()?;

    let append_number = Confirm::new("Append a random number?")
        .with_default(false)
        .prompt()?;

    let pp_config = PassphraseConfig {
        word_count,
        separator,
        capitalize,
        append_number,
    };

    match generators::generate_passphrase(&pp_config) {
        Ok(result) => {
            println!("\n{}", style(&result).green().bold());
            println!(
                "Entropy:    {:.2} bits",
                passphrase::passphrase_entropy_bits(&pp_config)
            );
            history.record(result);
        }
        Err(e) => println!("{}", style(format!("❌ {}", e)).red()),
    }
    Ok(())
}

fn analyze_password() -> Result<()> {
    let password = Password::new("Password to analyze:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;
    print_report(&analysis::analyze(&password));
    Ok(())
}

async fn check_breach(checker: &BreachChecker, slot: &BreachSlot) -> Result<()> {
    let password = Password::new("Password to check:")
        .with_display_mode(inquire::PasswordDisplayMode::Hidden)
        .without_confirmation()
        .prompt()?;

    println!("Checking...");
    // The slot drops stale results if a newer check started meanwhile.
    if let Some(result) = slot.check_latest(checker, &password).await {
        print_breach_result(&result);
    }
    Ok(())
}

fn view_history(history: &History) {
    if history.is_empty() {
        println!("No passwords generated in this session.");
        return;
    }
    println!(
        "Last {} of up to {} generated passwords:",
        history.len(),
        history.capacity()
    );
    for entry in history.iter_newest_first() {
        println!(
            "  {}  {}",
            entry.generated_at.format("%Y-%m-%d %H:%M:%S"),
            entry.password
        );
    }
}
