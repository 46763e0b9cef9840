// src/cli/handlers.rs
use anyhow::Result;
use console::style;

use passforge::analysis;
use passforge::breach::{BreachChecker, BreachError};
use passforge::core::config::Config;
use passforge::generators::{self, passphrase};
use passforge::models::{EntropyReport, GenerationConfig, PassphraseConfig, StrengthLevel};

use crate::cli::commands::CliCommand;

pub async fn run_command(command: CliCommand, config: &Config, json: bool) -> Result<()> {
    match command {
        CliCommand::Generate {
            length,
            no_lowercase,
            no_uppercase,
            no_digits,
            no_symbols,
            exclude_ambiguous,
        } => {
            let gen_config = GenerationConfig {
                length: length.unwrap_or(config.default_password_length),
                include_lowercase: !no_lowercase,
                include_uppercase: !no_uppercase,
                include_digits: !no_digits,
                include_symbols: !no_symbols,
                exclude_ambiguous: exclude_ambiguous || config.default_exclude_ambiguous,
            };
            let password = generators::generate(&gen_config)?;
            let report = analysis::analyze(&password);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "password": password,
                        "analysis": report,
                    }))?
                );
            } else {
                println!("{}", style(&password).green().bold());
                print_report(&report);
            }
        }

        CliCommand::Passphrase {
            words,
            separator,
            capitalize,
            append_number,
        } => {
            let pp_config = PassphraseConfig {
                word_count: words.unwrap_or(config.default_word_count),
                separator: separator.unwrap_or_else(|| config.default_separator.clone()),
                capitalize,
                append_number,
            };
            let result = generators::generate_passphrase(&pp_config)?;
            let bits = passphrase::passphrase_entropy_bits(&pp_config);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "passphrase": result,
                        "entropy_bits": bits,
                    }))?
                );
            } else {
                println!("{}", style(&result).green().bold());
                println!("Entropy:    {:.2} bits", bits);
            }
        }

        CliCommand::Analyze { password } => {
            let report = analysis::analyze(&password);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }

        CliCommand::Breach { password } => {
            let checker = BreachChecker::new(&config.breach_endpoint, config.breach_timeout)?;
            let result = checker.check(&password).await;
            if json {
                let value = match &result {
                    Ok(count) => serde_json::json!({ "exposed": *count > 0, "count": count }),
                    Err(e) => serde_json::json!({ "error": e.to_string() }),
                };
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print_breach_result(&result);
            }
        }
    }

    Ok(())
}

pub fn print_report(report: &EntropyReport) {
    let strength = format!(
        "{} ({}/7)",
        report.strength.label(),
        report.strength.ordinal()
    );
    let strength = match report.strength {
        StrengthLevel::Critical | StrengthLevel::VeryWeak => style(strength).red(),
        StrengthLevel::Weak | StrengthLevel::Fair => style(strength).yellow(),
        _ => style(strength).green(),
    };
    println!("Strength:   {}", strength);
    println!(
        "Entropy:    {:.2} bits (pool) / {:.2} bits (observed)",
        report.pool_entropy_bits, report.shannon_entropy_bits
    );
    println!("Crack time: {}", report.crack_time);
    if !report.patterns.is_empty() {
        let ids: Vec<&str> = report.patterns.iter().map(|p| p.id()).collect();
        println!("Patterns:   {}", style(ids.join(", ")).red());
    }
    for suggestion in &report.suggestions {
        println!("  - {}", suggestion);
    }
}

pub fn print_breach_result(result: &passforge::breach::BreachResult) {
    match result {
        Ok(0) => println!(
            "{}",
            style("✅ Not found in any known data breach").green()
        ),
        Ok(count) => println!(
            "{}",
            style(format!(
                "⚠️  Found {} times in known data breaches — do not use this password",
                count
            ))
            .red()
            .bold()
        ),
        Err(BreachError::EmptyInput) => {
            println!("{}", style("Nothing to check: password is empty").yellow())
        }
        Err(e) => println!("{}", style(format!("❌ Breach check failed: {}", e)).red()),
    }
}
