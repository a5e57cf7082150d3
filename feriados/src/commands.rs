use std::io::{BufRead, Write};
use std::thread;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use feriados::carousel::render::{self, RenderStyle};
use feriados::carousel::{Carousel, CarouselEvent, CarouselOptions, Direction, Effect};
use feriados::time::{easter_sunday, find_holiday, list_holidays, Date, YearMonth};
use tracing::debug;

use crate::cli::{CheckArgs, HolidaysArgs, MonthArgs, YearArgs};

/// Shared state every subcommand can use.
pub struct RunContext {
    pub today: Date,
    pub options: CarouselOptions,
    pub style: RenderStyle,
}

pub fn easter(args: &YearArgs, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", easter_sunday(args.year))?;
    Ok(())
}

pub fn holidays(args: &HolidaysArgs, out: &mut impl Write) -> Result<()> {
    let list = list_holidays(args.year);
    if args.json {
        serde_json::to_writer_pretty(&mut *out, &list)?;
        writeln!(out)?;
        return Ok(());
    }
    for h in &list {
        writeln!(out, "{}  {:<3}  {}", h.date(), h.date().weekday().short_name(), h.name())?;
    }
    Ok(())
}

pub fn check(args: &CheckArgs, out: &mut impl Write) -> Result<()> {
    let date: Date = args
        .date
        .parse()
        .with_context(|| format!("invalid date {:?}", args.date))?;
    let list = list_holidays(date.year());
    match find_holiday(&list, date) {
        Some(h) => writeln!(out, "{date}: {}", h.name())?,
        None => writeln!(out, "{date}: not a holiday")?,
    }
    Ok(())
}

fn start_month(args: &MonthArgs, today: Date) -> Result<YearMonth> {
    match &args.month {
        Some(text) => text
            .parse()
            .with_context(|| format!("invalid month {text:?}")),
        None => Ok(YearMonth::of(today)),
    }
}

fn write_strip(carousel: &Carousel, style: RenderStyle, out: &mut impl Write) -> Result<()> {
    let cards = carousel.cards()?;
    writeln!(out, "{}", render::strip_to_text(&cards, style))?;
    Ok(())
}

pub fn show(args: &MonthArgs, ctx: &RunContext, out: &mut impl Write) -> Result<()> {
    let carousel = Carousel::new(start_month(args, ctx.today)?, ctx.today, ctx.options);
    write_strip(&carousel, ctx.style, out)
}

const BROWSE_HELP: &str = "commands: n (next), p (previous), h <day> (holiday tooltip), l (hide tooltip), q (quit)";

pub fn browse(
    args: &MonthArgs,
    ctx: &RunContext,
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut carousel = Carousel::new(start_month(args, ctx.today)?, ctx.today, ctx.options);
    write_strip(&carousel, ctx.style, out)?;
    writeln!(out, "{BROWSE_HELP}")?;

    for line in input.lines() {
        let line = line.context("failed to read input")?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };
        match command {
            "q" | "quit" => break,
            "n" | "next" => slide(&mut carousel, Direction::Next, ctx.style, out)?,
            "p" | "prev" => slide(&mut carousel, Direction::Prev, ctx.style, out)?,
            "h" | "hover" => {
                let day = words.next().and_then(|w| w.parse::<u8>().ok());
                match day {
                    Some(day) => hover(&mut carousel, day, ctx.style, out)?,
                    None => writeln!(out, "usage: h <day>")?,
                }
            }
            "l" | "leave" => {
                if carousel.dispatch(CarouselEvent::PointerLeave, Instant::now())? == Effect::HideTooltip {
                    writeln!(out, "(tooltip hidden)")?;
                }
            }
            other => writeln!(out, "unknown command {other:?}; {BROWSE_HELP}")?,
        }
    }
    Ok(())
}

/// Run one slide to completion, sleeping for the animation time.
fn slide(
    carousel: &mut Carousel,
    direction: Direction,
    style: RenderStyle,
    out: &mut impl Write,
) -> Result<()> {
    let effect = carousel.dispatch(CarouselEvent::Navigate(direction), Instant::now())?;
    let Effect::StartSlide { duration, .. } = effect else {
        debug!(?effect, "slide not started");
        return Ok(());
    };
    thread::sleep(duration);
    loop {
        match carousel.dispatch(CarouselEvent::Tick, Instant::now())? {
            Effect::Rerender => break,
            _ => thread::sleep(duration / 10),
        }
    }
    write_strip(carousel, style, out)
}

fn hover(carousel: &mut Carousel, day: u8, style: RenderStyle, out: &mut impl Write) -> Result<()> {
    let Ok(date) = carousel.cursor().day(day) else {
        writeln!(out, "{} has no day {day}", carousel.cursor().pt_title())?;
        return Ok(());
    };
    let card = carousel.current_card();
    let name = card
        .day_cell(date)
        .and_then(|c| c.holiday.as_ref())
        .map(|h| h.name())
        .unwrap_or_default();
    let Some(geometry) = render::text_geometry(&card, date, name) else {
        bail!("{date} is not on the displayed card");
    };
    match carousel.dispatch(CarouselEvent::PointerEnter { date, geometry }, Instant::now())? {
        Effect::ShowTooltip(tooltip) => {
            for line in render::card_lines(&card, style) {
                writeln!(out, "{line}")?;
            }
            for line in render::tooltip_lines(&tooltip) {
                writeln!(out, "{line}")?;
            }
        }
        _ => writeln!(out, "{date}: not a holiday")?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ctx() -> RunContext {
        RunContext {
            today: Date::from_ymd(2025, 4, 20).unwrap(),
            options: CarouselOptions::new(Duration::from_millis(1), 360.0, 28.0).unwrap(),
            style: RenderStyle::default(),
        }
    }

    fn run(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn easter_prints_iso_date() {
        let text = run(|out| easter(&YearArgs { year: 2016 }, out));
        assert_eq!(text, "2016-03-27\n");
    }

    #[test]
    fn holidays_table_and_json() {
        let table = run(|out| holidays(&HolidaysArgs { year: 2025, json: false }, out));
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[1], "2025-04-18  Fri  Sexta-feira Santa");

        let json = run(|out| holidays(&HolidaysArgs { year: 2025, json: true }, out));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 13);
        assert_eq!(value[12]["name"], "Natal");
        assert_eq!(value[12]["date"], "2025-12-25");
    }

    #[test]
    fn check_reports_name_or_absence() {
        let hit = run(|out| check(&CheckArgs { date: "2031-12-25".into() }, out));
        assert_eq!(hit, "2031-12-25: Natal\n");
        let miss = run(|out| check(&CheckArgs { date: "2025-07-04".into() }, out));
        assert_eq!(miss, "2025-07-04: not a holiday\n");
        let mut sink = Vec::new();
        assert!(check(&CheckArgs { date: "July 4th".into() }, &mut sink).is_err());
    }

    #[test]
    fn show_defaults_to_todays_month() {
        let text = run(|out| show(&MonthArgs { month: None }, &ctx(), out));
        let first = text.lines().next().unwrap();
        assert!(first.contains("março de 2025"));
        assert!(first.contains("abril de 2025"));
        assert!(first.contains("maio de 2025"));
        assert!(text.contains("[20]"));
    }

    #[test]
    fn browse_session() {
        let input = "n\nh 1\nl\np\nh 3\nbogus\nq\nn\n".as_bytes();
        let text = run(|out| browse(&MonthArgs { month: Some("2025-04".into()) }, &ctx(), input, out));
        // Initial strip, then the strip after moving to May.
        assert!(text.contains("junho de 2025"));
        assert!(text.contains("[Dia do Trabalhador]"));
        assert!(text.contains("(tooltip hidden)"));
        assert!(text.contains("2025-04-03: not a holiday"));
        assert!(text.contains("unknown command \"bogus\""));
        // Input after `q` is not processed: no strip reaching July.
        assert!(!text.contains("julho de 2025"));
    }

    #[test]
    fn browse_plain_day_drops_holiday_tooltip() {
        let input = "h 25\nh 26\nl\nq\n".as_bytes();
        let text = run(|out| browse(&MonthArgs { month: Some("2025-12".into()) }, &ctx(), input, out));
        assert!(text.contains("[Natal]"));
        assert!(text.contains("2025-12-26: not a holiday"));
        assert!(!text.contains("(tooltip hidden)"));
    }

    #[test]
    fn invalid_month_argument() {
        let mut sink = Vec::new();
        assert!(show(&MonthArgs { month: Some("2025-13".into()) }, &ctx(), &mut sink).is_err());
    }
}
