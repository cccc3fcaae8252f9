/// Horizontal scroll geometry of a list container, as reported by the platform.
///
/// Mirrors the DOM's `scrollLeft` / `scrollWidth` / `clientWidth` triple.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_left: f64, scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_left,
            scroll_width,
            client_width,
        }
    }

    /// The largest reachable offset. Zero when the content fits the viewport.
    pub fn max_scroll(&self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }

    /// Clamps an offset into `[0, max_scroll]`.
    pub fn clamp(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.max_scroll())
    }
}

/// Whether the previous / next carousel controls should be enabled.
///
/// Derived from [`ScrollMetrics`]; never stored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affordance {
    pub can_go_prev: bool,
    pub can_go_next: bool,
}

impl Affordance {
    pub fn new(can_go_prev: bool, can_go_next: bool) -> Self {
        Self {
            can_go_prev,
            can_go_next,
        }
    }

    /// Computes the affordance for a scroll position with an `epsilon` tolerance at both ends.
    pub fn compute(metrics: ScrollMetrics, epsilon: f64) -> Self {
        let pos = metrics.scroll_left;
        Self {
            can_go_prev: pos > epsilon,
            can_go_next: pos < metrics.max_scroll() - epsilon,
        }
    }

    pub fn state(self) -> CarouselState {
        match (self.can_go_prev, self.can_go_next) {
            (false, true) => CarouselState::AtStart,
            (true, true) => CarouselState::Middle,
            (true, false) => CarouselState::AtEnd,
            (false, false) => CarouselState::AtStartAndEnd,
        }
    }
}

/// Where a carousel sits relative to its scroll bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CarouselState {
    AtStart,
    Middle,
    AtEnd,
    /// The content fits entirely; no scrolling is possible.
    AtStartAndEnd,
}

impl From<Affordance> for CarouselState {
    fn from(a: Affordance) -> Self {
        a.state()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Self::Prev => -1.0,
            Self::Next => 1.0,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    Instant,
    #[default]
    Smooth,
}

/// Vertical placement of an element in document coordinates (`offsetTop` / `offsetHeight`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutBox {
    pub top: f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The window's vertical viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }

    /// Fraction of `layout` that lies inside the viewport, after growing (positive) or
    /// shrinking (negative) its bottom edge by `bottom_margin`.
    ///
    /// Zero-height boxes report `1.0` when their top edge lies inside the root and `0.0`
    /// otherwise.
    pub fn intersection_ratio(&self, layout: LayoutBox, bottom_margin: f64) -> f64 {
        let root_top = self.scroll_y;
        let root_bottom = self.scroll_y + (self.height + bottom_margin).max(0.0);

        if layout.height <= 0.0 {
            let inside = layout.top >= root_top && layout.top <= root_bottom;
            return if inside { 1.0 } else { 0.0 };
        }

        let overlap = layout.bottom().min(root_bottom) - layout.top.max(root_top);
        (overlap / layout.height).clamp(0.0, 1.0)
    }
}
