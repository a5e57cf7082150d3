use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Portuguese public holidays and a month carousel.
#[derive(Parser)]
#[command(
    name = "feriados",
    version,
    about = "Portuguese public holidays and month calendar"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable ANSI colours.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the date of Easter Sunday.
    Easter(YearArgs),
    /// List the public holidays of a year.
    Holidays(HolidaysArgs),
    /// Tell whether a date is a public holiday.
    Check(CheckArgs),
    /// Show the previous, current, and next month.
    Show(MonthArgs),
    /// Browse months interactively (n/p to move, h <day> for a tooltip, q to quit).
    Browse(MonthArgs),
}

/// Arguments taking a single year.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Gregorian year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Gregorian year.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` subcommand.
#[derive(clap::Args)]
pub struct CheckArgs {
    /// Date as YYYY-MM-DD.
    pub date: String,
}

/// Arguments for the `show` and `browse` subcommands.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Month to display as YYYY-MM (default: the current month).
    #[arg(short, long)]
    pub month: Option<String>,
}
