#![warn(clippy::pedantic)]

mod config;

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use color_eyre::eyre::WrapErr;
use config::{ColorScheme, Config};
use env_logger::TimestampPrecision;
use itertools::Itertools;
use log::{LevelFilter, debug, info};
use owo_colors::OwoColorize;
use twisty_core::{Cube, MoveSequence};

/// Applies a move sequence to an N×N×N cube and shows the result
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The side length of the cube
    #[arg(short, long, default_value_t = 3)]
    size: usize,

    /// The colour scheme file to use, in TOML format
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Print every face grid as TOML instead of drawing the net
    #[arg(long)]
    snapshot: bool,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// The moves to apply, e.g. R U' 2F2
    moves: Vec<String>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = Config::load(cli.config.as_deref())?;

    let sequence = cli
        .moves
        .join(" ")
        .parse::<MoveSequence>()
        .wrap_err("Invalid move sequence")?;
    info!("Applying {} moves: {sequence}", sequence.len());

    let mut cube = Cube::new(cli.size)?;
    cube.apply_sequence(&sequence)
        .wrap_err_with(|| format!("Cannot apply `{sequence}` to a cube of size {}", cli.size))?;
    debug!("Resulting cube:\n{cube}");

    if cli.snapshot {
        print!("{}", toml::to_string(&cube.snapshot())?);
    } else {
        for line in render(&cube, &config.colors) {
            println!("{line}");
        }
        if cube.is_solved() {
            println!("Solved");
        }
    }

    Ok(())
}

/// Draw the net of `cube`, two terminal columns per sticker.
fn render(cube: &Cube, colors: &ColorScheme) -> Vec<String> {
    cube.net()
        .into_iter()
        .map(|row| {
            row.into_iter()
                .map(|cell| match cell {
                    Some(sticker) => {
                        let color = colors.display(sticker);
                        "██".truecolor(color.r, color.g, color.b).to_string()
                    }
                    None => "  ".to_owned(),
                })
                .join("")
                .trim_end()
                .to_owned()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_line_per_net_row() {
        let cube = Cube::new(2).unwrap();
        let lines = render(&cube, &ColorScheme::default());
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0].matches("██").count(), 2);
        assert_eq!(lines[2].matches("██").count(), 8);
        assert!(lines[0].starts_with("    "));
    }

    #[test]
    fn parses_arguments() {
        let cli = Cli::try_parse_from(["twisty", "-s", "4", "-vv", "R", "2U'"]).unwrap();
        assert_eq!(cli.size, 4);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.moves, ["R", "2U'"]);
        assert!(!cli.snapshot);
    }
}
