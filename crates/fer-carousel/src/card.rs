//! Month cards: one Monday-first grid per displayed month.

use fer_time::{find_holiday, Date, Holiday, YearMonth};

/// Number of columns in the week grid.
pub const COLUMNS: usize = 7;

/// A day of the displayed month, annotated for display.
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    /// The date the cell stands for.
    pub date: Date,
    /// The holiday on this date (first match), if any.
    pub holiday: Option<Holiday>,
    /// The cell is the current day.
    pub is_today: bool,
    /// Saturday or Sunday.
    pub is_weekend: bool,
}

/// One slot of the week grid.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Placeholder before day 1.
    Empty,
    /// A day of the month.
    Day(DayCell),
}

impl Cell {
    /// The day cell, if this slot holds one.
    pub fn day(&self) -> Option<&DayCell> {
        match self {
            Cell::Empty => None,
            Cell::Day(day) => Some(day),
        }
    }
}

/// A month laid out as a 7-column grid.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCard {
    month: YearMonth,
    cells: Vec<Cell>,
}

impl MonthCard {
    /// Lay out `month`, marking cells found in `holidays` and the cell equal
    /// to `today`.
    ///
    /// `holidays` should be the list for `month`'s year; entries of other
    /// years simply never match.
    pub fn build(month: YearMonth, holidays: &[Holiday], today: Date) -> Self {
        let blanks = month.leading_blanks();
        let days = month.days_in_month();
        let mut cells = Vec::with_capacity(blanks + days as usize);
        cells.extend(std::iter::repeat(Cell::Empty).take(blanks));
        let mut date = month.first_day();
        for day in 1..=days {
            cells.push(Cell::Day(DayCell {
                date,
                holiday: find_holiday(holidays, date).cloned(),
                is_today: date == today,
                is_weekend: date.weekday().is_weekend(),
            }));
            if day < days {
                date += 1;
            }
        }
        Self { month, cells }
    }

    /// The month shown.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// Card title, e.g. `"abril de 2025"`.
    pub fn title(&self) -> String {
        self.month.pt_title()
    }

    /// All slots in row-major order (leading placeholders included).
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Slots grouped into weeks.  The last week may be shorter than seven.
    pub fn weeks(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(COLUMNS)
    }

    /// Number of week rows.
    pub fn rows(&self) -> usize {
        self.cells.len().div_ceil(COLUMNS)
    }

    /// Iterate over the day cells only.
    pub fn days(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(Cell::day)
    }

    /// The day cells that carry a holiday.
    pub fn holidays(&self) -> impl Iterator<Item = &DayCell> {
        self.days().filter(|d| d.holiday.is_some())
    }

    /// The cell for `date`, if it belongs to this month.
    pub fn day_cell(&self, date: Date) -> Option<&DayCell> {
        let index = self.index_of(date)?;
        self.cells[index].day()
    }

    /// `(row, column)` of `date` in the grid, if it belongs to this month.
    pub fn position_of(&self, date: Date) -> Option<(usize, usize)> {
        let index = self.index_of(date)?;
        Some((index / COLUMNS, index % COLUMNS))
    }

    fn index_of(&self, date: Date) -> Option<usize> {
        if !self.month.contains(date) {
            return None;
        }
        Some(self.month.leading_blanks() + date.day_of_month() as usize - 1)
    }
}
