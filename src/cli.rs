use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

/// alculator: grades a drink by how much alcohol a dollar buys.
#[derive(Parser, Debug)]
#[command(name = "alculator")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Default volume unit (ml, oz or shot).
    #[arg(short, long, global = true, env = "ALCULATOR_UNIT", default_value = "ml")]
    pub unit: String,

    /// When to color grades.
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Interactive session: enter drinks one after another and keep a short history.
    #[default]
    Session,

    /// Score a single drink and exit.
    Score {
        /// Alcohol by volume, in percent.
        #[arg(long)]
        alcohol: String,

        /// Volume of one container, in the selected unit.
        #[arg(long)]
        volume: String,

        /// Number of containers.
        #[arg(long)]
        quantity: String,

        /// Total price in dollars, at most two decimals.
        #[arg(long)]
        price: String,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Score every drink in a CSV file (alcohol,volume,unit,quantity,price).
    Batch {
        /// Input CSV file.
        file: PathBuf,

        /// Where to write results (default: stdout).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(self) -> bool {
        match self {
            ColorMode::Auto => std::io::stdout().is_terminal(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_session() {
        let cli = Cli::try_parse_from(["alculator"]).unwrap();
        assert!(cli.command.is_none());
        assert!(matches!(cli.command.unwrap_or_default(), Command::Session));
        assert_eq!(cli.color, ColorMode::Auto);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_score_args() {
        let cli = Cli::try_parse_from([
            "alculator", "score", "--alcohol", "5", "--volume", "12", "--quantity", "6",
            "--price", "9.99", "--unit", "oz", "--json", "-vv",
        ])
        .unwrap();

        assert_eq!(cli.unit, "oz");
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Score { price, json, .. }) => {
                assert_eq!(price, "9.99");
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_batch_args() {
        let cli =
            Cli::try_parse_from(["alculator", "batch", "drinks.csv", "--format", "json"]).unwrap();
        match cli.command {
            Some(Command::Batch { file, output, format }) => {
                assert_eq!(file, PathBuf::from("drinks.csv"));
                assert!(output.is_none());
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
