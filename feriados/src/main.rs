mod cli;
mod commands;
mod config;
mod logging;

use std::io::{self, IsTerminal};
use std::process;

use anyhow::Result;
use clap::Parser;
use feriados::carousel::RenderStyle;
use feriados::core::Settings;
use feriados::time::Date;

use crate::cli::{Cli, Command};
use crate::commands::RunContext;
use crate::config::FeriadosConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = FeriadosConfig::load(cli.config.as_deref())?;
    if let Some(today) = config.today {
        Settings::instance().set_evaluation_date(today.year(), today.month(), today.day_of_month());
    }
    let ctx = RunContext {
        today: Date::today()?,
        options: config.carousel_options()?,
        style: RenderStyle {
            color: config.display.color && !cli.no_color && io::stdout().is_terminal(),
        },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Easter(args) => commands::easter(&args, &mut out),
        Command::Holidays(args) => commands::holidays(&args, &mut out),
        Command::Check(args) => commands::check(&args, &mut out),
        Command::Show(args) => commands::show(&args, &ctx, &mut out),
        Command::Browse(args) => commands::browse(&args, &ctx, io::stdin().lock(), &mut out),
    }
}
