//! The carousel: displayed-month cursor, holiday list, and navigation state.

use std::time::Instant;

use fer_core::errors::Result;
use fer_time::{find_holiday, Calendar, Date, Holiday, Portugal, YearMonth};
use tracing::{debug, info};

use crate::card::MonthCard;
use crate::event::{CarouselEvent, Effect};
use crate::options::CarouselOptions;
use crate::state::{Direction, NavState};
use crate::tooltip::{self, CellGeometry, Tooltip};

/// State of a month carousel.
///
/// All state lives here and changes only through [`Carousel::dispatch`];
/// the view layer renders [`Carousel::cards`] and performs the returned
/// [`Effect`]s.
#[derive(Debug)]
pub struct Carousel<C: Calendar = Portugal> {
    calendar: C,
    cursor: YearMonth,
    /// Holidays of `cursor.year()`.
    holidays: Vec<Holiday>,
    state: NavState,
    options: CarouselOptions,
    today: Date,
    tooltip: Option<Tooltip>,
}

impl Carousel<Portugal> {
    /// A Portuguese-holiday carousel showing `cursor`.
    pub fn new(cursor: YearMonth, today: Date, options: CarouselOptions) -> Self {
        Self::with_calendar(Portugal, cursor, today, options)
    }
}

impl<C: Calendar> Carousel<C> {
    /// A carousel over an arbitrary calendar.
    pub fn with_calendar(
        calendar: C,
        cursor: YearMonth,
        today: Date,
        options: CarouselOptions,
    ) -> Self {
        let holidays = calendar.holidays(cursor.year());
        debug!(
            calendar = calendar.name(),
            year = cursor.year(),
            count = holidays.len(),
            "loaded holidays"
        );
        Self {
            calendar,
            cursor,
            holidays,
            state: NavState::Idle,
            options,
            today,
            tooltip: None,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The displayed month.
    pub fn cursor(&self) -> YearMonth {
        self.cursor
    }

    /// Holidays of the displayed month's year.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Navigation state.
    pub fn state(&self) -> NavState {
        self.state
    }

    /// Return `true` while a slide is running.
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Geometry and timing.
    pub fn options(&self) -> &CarouselOptions {
        &self.options
    }

    /// The day highlighted as today.
    pub fn today(&self) -> Date {
        self.today
    }

    /// Change the day highlighted as today (e.g. after midnight).
    pub fn set_today(&mut self, today: Date) {
        self.today = today;
    }

    /// The visible tooltip, if any.
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Horizontal offset of the card strip at rest (middle card visible).
    pub fn rest_offset(&self) -> f64 {
        -self.options.slide_shift()
    }

    /// Offset the strip slides to for `direction`.
    pub fn slide_offset(&self, direction: Direction) -> f64 {
        match direction {
            Direction::Prev => 0.0,
            Direction::Next => -2.0 * self.options.slide_shift(),
        }
    }

    // ── Cards ─────────────────────────────────────────────────────────────────

    /// Cards for the previous, displayed, and next month.
    pub fn cards(&self) -> Result<[MonthCard; 3]> {
        let prev = self.cursor.shift(-1)?;
        let next = self.cursor.shift(1)?;
        Ok([self.card(prev), self.card(self.cursor), self.card(next)])
    }

    /// The card for the displayed month.
    pub fn current_card(&self) -> MonthCard {
        self.card(self.cursor)
    }

    fn card(&self, month: YearMonth) -> MonthCard {
        if month.year() == self.cursor.year() {
            MonthCard::build(month, &self.holidays, self.today)
        } else {
            MonthCard::build(month, &self.calendar.holidays(month.year()), self.today)
        }
    }

    fn holiday_on(&self, date: Date) -> Option<Holiday> {
        if date.year() == self.cursor.year() {
            find_holiday(&self.holidays, date).cloned()
        } else {
            self.calendar.holiday_on(date)
        }
    }

    // ── Events ────────────────────────────────────────────────────────────────

    /// Apply `event` at time `now` and return what the view should do.
    ///
    /// Fails only when navigation would leave the representable year range.
    pub fn dispatch(&mut self, event: CarouselEvent, now: Instant) -> Result<Effect> {
        match event {
            CarouselEvent::Navigate(direction) => self.navigate(direction, now),
            CarouselEvent::Tick => Ok(self.tick(now)),
            CarouselEvent::PointerEnter { date, geometry } => Ok(self.pointer_enter(date, &geometry)),
            CarouselEvent::PointerLeave => Ok(match self.tooltip.take() {
                Some(_) => Effect::HideTooltip,
                None => Effect::None,
            }),
        }
    }

    fn navigate(&mut self, direction: Direction, now: Instant) -> Result<Effect> {
        if self.state.is_animating() {
            debug!(?direction, "navigation ignored while animating");
            return Ok(Effect::Ignored);
        }
        let target = self.cursor.shift(direction.months())?;
        let duration = self.options.animation();
        self.state = NavState::Animating {
            direction,
            target,
            deadline: now + duration,
        };
        let hide_tooltip = self.tooltip.take().is_some();
        debug!(?direction, from = %self.cursor, to = %target, "slide started");
        Ok(Effect::StartSlide {
            direction,
            to_offset: self.slide_offset(direction),
            duration,
            hide_tooltip,
        })
    }

    fn tick(&mut self, now: Instant) -> Effect {
        let NavState::Animating {
            target, deadline, ..
        } = self.state
        else {
            return Effect::None;
        };
        if now < deadline {
            return Effect::None;
        }
        if target.year() != self.cursor.year() {
            self.holidays = self.calendar.holidays(target.year());
            info!(year = target.year(), "displayed year changed, holidays reloaded");
        }
        self.cursor = target;
        self.state = NavState::Idle;
        debug!(month = %target, "slide finished");
        Effect::Rerender
    }

    fn pointer_enter(&mut self, date: Date, geometry: &CellGeometry) -> Effect {
        match self.holiday_on(date) {
            Some(holiday) => {
                let placed = tooltip::place(holiday.name(), geometry);
                self.tooltip = Some(placed.clone());
                Effect::ShowTooltip(placed)
            }
            None => match self.tooltip.take() {
                Some(_) => Effect::HideTooltip,
                None => Effect::None,
            },
        }
    }
}
