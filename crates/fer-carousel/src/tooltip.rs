//! Edge-aware horizontal placement of holiday tooltips.
//!
//! A tooltip is normally centered over its day cell.  When the cell is too
//! close to the left or right edge of the card for half the tooltip to fit,
//! the tooltip is pinned to that edge instead.

/// A horizontal extent, `left <= right`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Left edge.
    pub left: f64,
    /// Right edge.
    pub right: f64,
}

impl Span {
    /// Create a span.
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// `right - left`.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Horizontal midpoint.
    pub fn center(&self) -> f64 {
        (self.left + self.right) / 2.0
    }
}

/// Where the tooltip sits relative to its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Pinned to the card's left edge.
    AlignLeft,
    /// Pinned to the card's right edge.
    AlignRight,
    /// Centered over the cell.
    Centered,
}

/// Geometry of a hovered cell, as measured by the binding layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGeometry {
    /// Extent of the whole card.
    pub card: Span,
    /// Extent of the hovered day cell.
    pub cell: Span,
    /// Rendered width of the tooltip.
    pub tooltip_width: f64,
}

/// A positioned tooltip.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    /// Holiday name shown.
    pub text: &'static str,
    /// Chosen placement.
    pub placement: Placement,
    /// Left edge of the tooltip, relative to the card's left edge.
    pub left: f64,
    /// Position of the pointer arrow (cell center), relative to the
    /// tooltip's left edge.
    pub arrow: f64,
}

/// Decide where a tooltip goes.
pub fn placement(geometry: &CellGeometry) -> Placement {
    let half = geometry.tooltip_width / 2.0;
    let space_left = geometry.cell.left - geometry.card.left;
    let space_right = geometry.card.right - geometry.cell.right;
    if space_left < half {
        Placement::AlignLeft
    } else if space_right < half {
        Placement::AlignRight
    } else {
        Placement::Centered
    }
}

/// Place a tooltip showing `text` over the cell described by `geometry`.
pub fn place(text: &'static str, geometry: &CellGeometry) -> Tooltip {
    let placement = placement(geometry);
    let card = geometry.card;
    let width = geometry.tooltip_width;
    let left = match placement {
        Placement::AlignLeft => 0.0,
        Placement::AlignRight => card.width() - width,
        Placement::Centered => geometry.cell.center() - card.left - width / 2.0,
    };
    let arrow = geometry.cell.center() - card.left - left;
    Tooltip {
        text,
        placement,
        left,
        arrow,
    }
}
