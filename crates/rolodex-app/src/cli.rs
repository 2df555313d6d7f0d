//! Command-line arguments.

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};
use rolodex_core::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "rolodex", version, about = "Inspect and normalize vCard address books")]
pub struct Cli {
    /// Fail on malformed vCard text instead of treating it as empty.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format, overriding `output.format` from the configuration.
    #[arg(long, global = true, value_enum)]
    pub format: Option<FormatArg>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode every card in a file and print it back out.
    Decode {
        file: PathBuf,
    },
    /// Print the file-as name of every card matching a name or address.
    Match(MatchArgs),
    /// Print each card's decayed use score, highest first.
    Score {
        file: PathBuf,
    },
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("query").required(true).args(["name", "email"])))]
pub struct MatchArgs {
    pub file: PathBuf,

    /// Fuzzy-match against the structured name (nicknames allowed).
    #[arg(long)]
    pub name: Option<String>,

    /// Match against e-mail addresses; subdomains count.
    #[arg(long)]
    pub email: Option<String>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Json,
    Vcard,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Vcard => Self::Vcard,
        }
    }
}
