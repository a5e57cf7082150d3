//! Monospaced text rendering of month cards.
//!
//! Every cell is [`CELL_WIDTH`] characters wide, so a card is
//! [`CARD_WIDTH`] characters wide.  Holidays are marked with `*` and today
//! is bracketed; with colour enabled holidays are red and today is shown in
//! reverse video.  Colour codes are added after padding, so visible widths
//! are the same with and without colour.

use fer_time::{Date, Weekday};

use crate::card::{Cell, DayCell, MonthCard, COLUMNS};
use crate::tooltip::{CellGeometry, Span, Tooltip};

/// Visible width of one cell.
pub const CELL_WIDTH: usize = 4;

/// Visible width of one card.
pub const CARD_WIDTH: usize = CELL_WIDTH * COLUMNS;

/// Blank columns between cards in a strip.
pub const STRIP_GAP: usize = 3;

/// Most week rows any month needs.
const MAX_ROWS: usize = 6;

const RED: &str = "\x1b[31m";
const REVERSE: &str = "\x1b[7m";
const RESET: &str = "\x1b[0m";

/// Rendering switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderStyle {
    /// Emit ANSI colour codes.
    pub color: bool,
}

/// Pad or center `text` to exactly `width` visible characters.
fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.chars().take(width).collect();
    }
    let left = (width - len) / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(width - len - left))
}

fn day_text(day: &DayCell, style: RenderStyle) -> String {
    let n = day.date.day_of_month();
    let plain = if day.is_today {
        format!("[{n:>2}]")
    } else if day.holiday.is_some() {
        format!(" {n:>2}*")
    } else {
        format!(" {n:>2} ")
    };
    if !style.color {
        return plain;
    }
    match (day.is_today, day.holiday.is_some()) {
        (true, true) => format!("{REVERSE}{RED}{plain}{RESET}"),
        (true, false) => format!("{REVERSE}{plain}{RESET}"),
        (false, true) => format!("{RED}{plain}{RESET}"),
        (false, false) => plain,
    }
}

fn cell_text(cell: &Cell, style: RenderStyle) -> String {
    match cell {
        Cell::Empty => " ".repeat(CELL_WIDTH),
        Cell::Day(day) => day_text(day, style),
    }
}

/// Title, weekday header, and one line per week; every line is exactly
/// [`CARD_WIDTH`] visible characters.
pub fn card_lines(card: &MonthCard, style: RenderStyle) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 + card.rows());
    lines.push(center(&card.title(), CARD_WIDTH));
    lines.push(
        Weekday::ALL
            .iter()
            .map(|w| format!("{:<CELL_WIDTH$}", w.short_name()))
            .collect(),
    );
    for week in card.weeks() {
        let mut line: String = week.iter().map(|c| cell_text(c, style)).collect();
        line.push_str(&" ".repeat(CELL_WIDTH * (COLUMNS - week.len())));
        lines.push(line);
    }
    lines
}

/// `* 25 Natal` lines for the holidays shown on a card.
pub fn legend_lines(card: &MonthCard) -> Vec<String> {
    card.holidays()
        .filter_map(|d| {
            d.holiday
                .as_ref()
                .map(|h| format!("* {:>2} {}", d.date.day_of_month(), h.name()))
        })
        .collect()
}

/// A single card followed by its holiday legend.
pub fn card_to_text(card: &MonthCard, style: RenderStyle) -> String {
    let mut lines = card_lines(card, style);
    let legend = legend_lines(card);
    if !legend.is_empty() {
        lines.push(String::new());
        lines.extend(legend);
    }
    lines.join("\n")
}

/// Cards side by side, followed by the combined holiday legend.
pub fn strip_to_text(cards: &[MonthCard], style: RenderStyle) -> String {
    let blank = " ".repeat(CARD_WIDTH);
    let columns: Vec<Vec<String>> = cards
        .iter()
        .map(|card| {
            let mut lines = card_lines(card, style);
            lines.resize(2 + MAX_ROWS, blank.clone());
            lines
        })
        .collect();

    let gap = " ".repeat(STRIP_GAP);
    let mut out: Vec<String> = (0..2 + MAX_ROWS)
        .map(|row| {
            let parts: Vec<&str> = columns.iter().map(|c| c[row].as_str()).collect();
            parts.join(gap.as_str()).trim_end().to_string()
        })
        .collect();

    let legend: Vec<String> = cards
        .iter()
        .flat_map(|card| {
            card.holidays().filter_map(|d| {
                d.holiday
                    .as_ref()
                    .map(|h| format!("* {} {}", d.date, h.name()))
            })
        })
        .collect();
    if !legend.is_empty() {
        out.push(String::new());
        out.extend(legend);
    }
    out.join("\n")
}

/// Geometry of `date`'s cell in text units, for a tooltip showing `text`.
///
/// The card spans `[0, CARD_WIDTH)`; the tooltip is drawn as `[text]`.
pub fn text_geometry(card: &MonthCard, date: Date, text: &str) -> Option<CellGeometry> {
    let (_, column) = card.position_of(date)?;
    let left = (column * CELL_WIDTH) as f64;
    Some(CellGeometry {
        card: Span::new(0.0, CARD_WIDTH as f64),
        cell: Span::new(left, left + CELL_WIDTH as f64),
        tooltip_width: (text.chars().count() + 2) as f64,
    })
}

/// Two lines drawing `tooltip` under a card: a `^` under the cell and the
/// bracketed name at the tooltip's offset.
pub fn tooltip_lines(tooltip: &Tooltip) -> [String; 2] {
    let left = tooltip.left.max(0.0).round() as usize;
    let arrow = (tooltip.left + tooltip.arrow).max(0.0).floor() as usize;
    [
        format!("{}^", " ".repeat(arrow)),
        format!("{}[{}]", " ".repeat(left), tooltip.text),
    ]
}
