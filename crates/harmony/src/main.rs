#![allow(clippy::print_stdout, clippy::print_stderr)]

//! The `harmony` command line tool.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use harmony::order::{order, Algorithm, Direction};
use harmony::palette::{
    converted_path, read_palette, sorted_path, AseWriter, ClrWriter, PaletteWriter, TextWriter,
    ASE_EXTENSION, CLR_EXTENSION,
};
use harmony::settings::Settings;
use harmony::OutputFormat;

/// Harmony is a CLI that provides tools for managing colors.
#[derive(Debug, Parser)]
#[command(name = "harmony", version, about)]
struct Cli {
    /// Log more details; repeat for even more. RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sort the colors of a palette and save them next to the palette
    Sort(SortArgs),
    /// Convert a palette into an Adobe Swatch Exchange (".ase") file
    Txt2ase(AseArgs),
    /// Convert a palette into an Apple color list (".clr") file
    Txt2clr(ClrArgs),
}

#[derive(Debug, Args)]
struct SortArgs {
    /// Palette with one color per line, e.g., "#0f8fb3 Light Blue"
    #[arg(value_name = "FILE")]
    colors_file: PathBuf,

    /// Algorithm: rgb, hsv, hsl, luminosity, step, step-alternated, or
    /// hillbert [env: HARMONY_ALGORITHM] [default: hillbert]
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Direction: forward or backward [env: HARMONY_DIRECTION] [default:
    /// forward]
    #[arg(short, long)]
    direction: Option<Direction>,

    /// Output format: input, rgb, or hexcode [env: HARMONY_FORMAT] [default:
    /// input]
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Text to append to the sorted palette's file name [env: HARMONY_SUFFIX]
    #[arg(short, long)]
    suffix: Option<String>,
}

#[derive(Debug, Args)]
struct AseArgs {
    /// Palette with one color per line, e.g., "#0f8fb3 Light Blue"
    #[arg(value_name = "FILE")]
    colors_file: PathBuf,

    /// Name of the palette inside the swatch file
    #[arg(short, long, default_value = AseWriter::DEFAULT_PALETTE_NAME)]
    palette_name: String,
}

#[derive(Debug, Args)]
struct ClrArgs {
    /// Palette with one color per line, e.g., "#0f8fb3 Light Blue"
    #[arg(value_name = "FILE")]
    colors_file: PathBuf,
}

// --------------------------------------------------------------------------------------------------------------------

/// Install a subscriber that writes log events to standard error.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Combine settings from the environment with command line options, which
/// take precedence.
fn resolve_settings(
    algorithm: Option<Algorithm>,
    direction: Option<Direction>,
    format: Option<OutputFormat>,
    suffix: Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::from_environment().context("invalid environment variable")?;

    if let Some(algorithm) = algorithm {
        settings.algorithm = algorithm;
    }
    if let Some(direction) = direction {
        settings.direction = direction;
    }
    if let Some(format) = format {
        settings.format = format;
    }
    if let Some(suffix) = suffix {
        settings.suffix = suffix;
    }

    Ok(settings)
}

/// Sort the palette and return the path of the sorted palette.
fn sort(args: SortArgs) -> anyhow::Result<PathBuf> {
    let SortArgs {
        colors_file,
        algorithm,
        direction,
        format,
        suffix,
    } = args;
    let settings = resolve_settings(algorithm, direction, format, suffix)?;

    let colors = read_palette(&colors_file)
        .with_context(|| format!("failed to load {}", colors_file.display()))?;
    let ordered = order(&colors, settings.algorithm, settings.direction);

    let destination = sorted_path(&colors_file, settings.algorithm, &settings.suffix);
    TextWriter::new(settings.format)
        .write(&destination, &ordered)
        .with_context(|| format!("failed to save {}", destination.display()))?;

    tracing::info!(
        source = %colors_file.display(),
        destination = %destination.display(),
        count = ordered.len(),
        "sorted palette"
    );
    Ok(destination)
}

/// Convert the palette and return the path of the swatch file.
fn txt2ase(args: AseArgs) -> anyhow::Result<PathBuf> {
    let colors = read_palette(&args.colors_file)
        .with_context(|| format!("failed to load {}", args.colors_file.display()))?;

    let destination = converted_path(&args.colors_file, ASE_EXTENSION);
    AseWriter::new(args.palette_name)
        .write(&destination, &colors)
        .with_context(|| format!("failed to save {}", destination.display()))?;

    tracing::info!(
        source = %args.colors_file.display(),
        destination = %destination.display(),
        count = colors.len(),
        "converted palette"
    );
    Ok(destination)
}

/// Convert the palette and return the path of the color list.
fn txt2clr(args: ClrArgs) -> anyhow::Result<PathBuf> {
    let colors = read_palette(&args.colors_file)
        .with_context(|| format!("failed to load {}", args.colors_file.display()))?;

    let destination = converted_path(&args.colors_file, CLR_EXTENSION);
    ClrWriter
        .write(&destination, &colors)
        .with_context(|| format!("failed to save {}", destination.display()))?;

    tracing::info!(
        source = %args.colors_file.display(),
        destination = %destination.display(),
        count = colors.len(),
        "converted palette"
    );
    Ok(destination)
}

fn run(command: Command) -> anyhow::Result<String> {
    match command {
        Command::Sort(args) => {
            sort(args).map(|path| format!("File sorted and saved to {}", path.display()))
        }
        Command::Txt2ase(args) => {
            txt2ase(args).map(|path| format!("File converted and saved to {}", path.display()))
        }
        Command::Txt2clr(args) => {
            txt2clr(args).map(|path| format!("File converted and saved to {}", path.display()))
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(message) => {
            println!("{}", message);
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("error: {:#}", error);
            ExitCode::FAILURE
        }
    }
}

// ====================================================================================================================
