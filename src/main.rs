use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use clap::Parser;

use alculator::batch::{load_rows, score_rows, write_csv, write_json, BatchSummary};
use alculator::cli::{Cli, Command, OutputFormat};
use alculator::error::Result;
use alculator::interface::{
    apply_color_mode, display_batch_summary, display_outcome, display_rejection,
    display_session, prompt_drink, prompt_yes_no, suggest_unit,
};
use alculator::models::{DrinkInput, VolumeUnit};
use alculator::state::Session;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    apply_color_mode(cli.color);

    let unit = resolve_unit(&cli.unit)?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Session => cmd_session(unit),
        Command::Score {
            alcohol,
            volume,
            quantity,
            price,
            json,
        } => cmd_score(DrinkInput::new(alcohol, volume, quantity, price), unit, json),
        Command::Batch {
            file,
            output,
            format,
        } => cmd_batch(&file, output.as_deref(), format, unit),
    }
}

/// Logs go to stderr. `-v` and `-vv` raise the default level; RUST_LOG wins over both.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn resolve_unit(name: &str) -> Result<VolumeUnit> {
    name.parse().inspect_err(|_| {
        if let Some(suggestion) = suggest_unit(name) {
            eprintln!("Did you mean '{}'?", suggestion);
        }
    })
}

/// Enter drinks until the user stops. History lives only as long as this loop.
fn cmd_session(default_unit: VolumeUnit) -> Result<()> {
    let mut session = Session::new();
    let mut unit = default_unit;

    println!("the alculator");
    println!();

    loop {
        let (input, selected) = prompt_drink(unit)?;
        unit = selected;

        match session.submit(&input, unit) {
            Ok((next, _)) => {
                session = next;
                display_session(&session);
            }
            Err(e) => display_rejection(&e),
        }

        if !prompt_yes_no("Alculate another?", true)? {
            break;
        }
    }

    Ok(())
}

/// Score one drink from the command line.
fn cmd_score(input: DrinkInput, unit: VolumeUnit, json: bool) -> Result<()> {
    let (_, outcome) = Session::new().submit(&input, unit)?;

    if json {
        let value = serde_json::json!({
            "grade": outcome.entry.grade,
            "score": outcome.entry.score,
            "color": outcome.entry.grade.color().css(),
            "volume_ml": outcome.volume_ml,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        display_outcome(&outcome);
    }

    Ok(())
}

/// Score a CSV of drinks as one session, in file order.
fn cmd_batch(
    file: &Path,
    output: Option<&Path>,
    format: OutputFormat,
    unit: VolumeUnit,
) -> Result<()> {
    let rows = load_rows(file)?;
    log::info!("Loaded {} rows from {}", rows.len(), file.display());

    let (_, results) = score_rows(&rows, unit, Session::new());

    match output {
        Some(path) => {
            let writer = BufWriter::new(File::create(path)?);
            match format {
                OutputFormat::Csv => write_csv(&results, writer)?,
                OutputFormat::Json => write_json(&results, writer)?,
            }
        }
        None => {
            let writer = io::stdout().lock();
            match format {
                OutputFormat::Csv => write_csv(&results, writer)?,
                OutputFormat::Json => write_json(&results, writer)?,
            }
        }
    }

    display_batch_summary(&BatchSummary::from_results(&results));
    Ok(())
}
