//! Events fed to a carousel and the effects it asks the view to perform.

use std::time::Duration;

use fer_time::Date;

use crate::state::Direction;
use crate::tooltip::{CellGeometry, Tooltip};

/// Input understood by [`Carousel::dispatch`](crate::Carousel::dispatch).
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselEvent {
    /// A prev/next control was activated.
    Navigate(Direction),
    /// The pointer entered the cell for `date`.
    PointerEnter {
        /// Date of the hovered cell.
        date: Date,
        /// Measured geometry of the card, cell, and tooltip.
        geometry: CellGeometry,
    },
    /// The pointer left the hovered cell.
    PointerLeave,
    /// Time passed; completes a slide whose deadline is reached.
    Tick,
}

/// What the view should do in response to an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Animate the card strip to `to_offset` over `duration`.
    StartSlide {
        /// Slide direction.
        direction: Direction,
        /// Target horizontal offset of the strip.
        to_offset: f64,
        /// Slide duration.
        duration: Duration,
        /// A tooltip was visible and must be hidden before sliding.
        hide_tooltip: bool,
    },
    /// The displayed month changed; rebuild the cards and reset the strip to
    /// its rest offset.
    Rerender,
    /// Show a tooltip.
    ShowTooltip(Tooltip),
    /// Hide the visible tooltip.
    HideTooltip,
    /// The event was rejected (navigation during a slide).
    Ignored,
    /// Nothing to do.
    None,
}
