/// Command-line interface definition for the `starling` binary
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::transactions::DateRange;

#[derive(Debug, Parser)]
#[command(name = "starling")]
#[command(about = "Command-line client for the Starling Bank API", long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config dir>/starling/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug output for every module
    #[arg(long, global = true)]
    pub debug: bool,

    /// Enable debug output for HTTP requests
    #[arg(long, global = true)]
    pub debug_api: bool,

    /// Enable debug output for config loading
    #[arg(long, global = true)]
    pub debug_config: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List transactions, the last 100 unless a date range is given
    Transactions(TransactionsArgs),
}

#[derive(Debug, Args)]
pub struct TransactionsArgs {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long, requires = "to")]
    pub from: Option<NaiveDate>,

    /// Last day of the range (YYYY-MM-DD)
    #[arg(long, requires = "from")]
    pub to: Option<NaiveDate>,

    /// Print JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Tag keys with debug output enabled
    pub fn debug_tags(&self) -> Vec<&'static str> {
        let mut tags = Vec::new();
        if self.debug_api {
            tags.push("api");
        }
        if self.debug_config {
            tags.push("config");
        }
        tags
    }
}

impl TransactionsArgs {
    pub fn date_range(&self) -> Option<DateRange> {
        match (self.from, self.to) {
            (Some(from), Some(to)) => Some(DateRange::new(from, to)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_transactions_with_range() {
        let cli = Cli::try_parse_from([
            "starling",
            "--debug-api",
            "transactions",
            "--from",
            "2023-01-01",
            "--to",
            "2023-01-31",
        ])
        .unwrap();

        assert_eq!(cli.debug_tags(), vec!["api"]);
        let Command::Transactions(args) = cli.command;
        let range = args.date_range().unwrap();
        assert_eq!(range.from, NaiveDate::from_ymd_opt(2023, 1, 1).unwrap());
        assert_eq!(range.to, NaiveDate::from_ymd_opt(2023, 1, 31).unwrap());
        assert!(!args.json);
    }

    #[test]
    fn test_parse_transactions_without_range() {
        let cli = Cli::try_parse_from(["starling", "transactions", "--json"]).unwrap();

        let Command::Transactions(args) = cli.command;
        assert!(args.date_range().is_none());
        assert!(args.json);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_single_bound_is_rejected() {
        assert!(Cli::try_parse_from(["starling", "transactions", "--from", "2023-01-01"]).is_err());
        assert!(Cli::try_parse_from(["starling", "transactions", "--to", "2023-01-31"]).is_err());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        assert!(Cli::try_parse_from([
            "starling",
            "transactions",
            "--from",
            "01/01/2023",
            "--to",
            "2023-01-31"
        ])
        .is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["starling", "transactions", "--config", "/tmp/starling.toml"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/starling.toml")));
    }
}
