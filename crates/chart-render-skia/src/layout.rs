// File: crates/chart-render-skia/src/layout.rs
// Summary: Plot-area layout: insets, plot rectangle, category/value pixel mapping.

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // room for y tick labels, legend on top and time labels below
        Self::new(64, 24, 40, 48)
    }
}

/// Plot area plus the mappings from category index / value to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub categories: usize,
    pub vmin: f64,
    pub vmax: f64,
}

impl PlotArea {
    /// Lay out a `width` x `height` surface. A degenerate value range is widened by one
    /// unit each way; otherwise 5% headroom is added on both ends.
    pub fn new(width: u32, height: u32, insets: Insets, categories: usize, range: Option<(f64, f64)>) -> Self {
        let (lo, hi) = range.unwrap_or((0.0, 1.0));
        let (vmin, vmax) = if (hi - lo).abs() < 1e-9 {
            (lo - 1.0, hi + 1.0)
        } else {
            let pad = (hi - lo) * 0.05;
            (lo - pad, hi + pad)
        };
        let right = (width.saturating_sub(insets.right)).max(insets.left + 1);
        let bottom = (height.saturating_sub(insets.bottom)).max(insets.top + 1);
        Self {
            left: insets.left as f32,
            top: insets.top as f32,
            right: right as f32,
            bottom: bottom as f32,
            categories: categories.max(1),
            vmin,
            vmax,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Center of category slot `index`.
    pub fn x(&self, index: usize) -> f32 {
        self.left + (index as f32 + 0.5) * self.width() / self.categories as f32
    }

    pub fn y(&self, value: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom - ((value - self.vmin) / span) as f32 * (self.bottom - self.top)
    }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
