//! Scroll Thresholds
//!
//! Pure decisions behind the navbar scroll-spy, the back-to-top button and
//! reveal-on-scroll sections.

/// Offset added to the scroll position before testing sections
pub const SCROLL_SPY_OFFSET: f64 = 200.0;

/// Scroll distance after which the back-to-top button shows
pub const BACK_TO_TOP_THRESHOLD: f64 = 100.0;

/// Fraction of the viewport height an element's top must pass to count as reached
pub const REVEAL_VIEWPORT_RATIO: f64 = 0.8;

/// Vertical extent of a page section, in document pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Whether the nav link for this section is active at `scroll_y`.
    /// Both edges are inclusive, so adjacent sections can both be active.
    pub fn is_active(&self, scroll_y: f64) -> bool {
        let position = scroll_y + SCROLL_SPY_OFFSET;
        position >= self.top && position <= self.top + self.height
    }
}

pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Whether an element whose top sits at `element_top` (viewport-relative)
/// has scrolled far enough into a viewport `viewport_height` tall
pub fn reached_viewport(element_top: f64, viewport_height: f64) -> bool {
    element_top <= viewport_height * REVEAL_VIEWPORT_RATIO
}
