// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Generate a random password
    Generate {
        /// Password length
        #[arg(long, short)]
        length: Option<usize>,

        /// Leave out lowercase letters
        #[arg(long)]
        no_lowercase: bool,

        /// Leave out uppercase letters
        #[arg(long)]
        no_uppercase: bool,

        /// Leave out digits
        #[arg(long)]
        no_digits: bool,

        /// Leave out symbols
        #[arg(long)]
        no_symbols: bool,

        /// Skip easily confused glyphs (l, o, I, O, 0, 1, |)
        #[arg(long)]
        exclude_ambiguous: bool,
    },

    /// Generate a word-based passphrase
    Passphrase {
        /// Number of words
        #[arg(long, short)]
        words: Option<usize>,

        /// Separator between words
        #[arg(long)]
        separator: Option<String>,

        /// Capitalize each word
        #[arg(long)]
        capitalize: bool,

        /// Append a random number
        #[arg(long)]
        append_number: bool,
    },

    /// Analyze the strength of a password
    Analyze {
        /// Password to analyze
        #[arg(required = true)]
        password: String,
    },

    /// Check a password against known breach corpora (k-anonymity)
    Breach {
        /// Password to check; only a 5-character hash prefix is transmitted
        #[arg(required = true)]
        password: String,
    },
}
