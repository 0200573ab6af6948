// File: crates/chart-render-skia/src/theme.rs
// Summary: Light/Dark theming for chart chrome and series line colors.
// Point colors come from the status palette, not from the theme.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub placeholder: skia::Color,
    /// Line strokes, cycled by series index.
    pub series: [skia::Color; 6],
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            placeholder: skia::Color::from_argb(255, 150, 150, 160),
            series: [
                skia::Color::from_argb(255, 64, 160, 255),
                skia::Color::from_argb(255, 180, 120, 255),
                skia::Color::from_argb(255, 80, 210, 210),
                skia::Color::from_argb(255, 255, 150, 90),
                skia::Color::from_argb(255, 230, 110, 180),
                skia::Color::from_argb(255, 170, 200, 90),
            ],
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            placeholder: skia::Color::from_argb(255, 100, 100, 110),
            series: [
                skia::Color::from_argb(255, 32, 120, 200),
                skia::Color::from_argb(255, 120, 70, 200),
                skia::Color::from_argb(255, 20, 150, 150),
                skia::Color::from_argb(255, 210, 110, 40),
                skia::Color::from_argb(255, 190, 60, 130),
                skia::Color::from_argb(255, 110, 150, 40),
            ],
        }
    }

    pub fn series_color(&self, index: usize) -> skia::Color {
        self.series[index % self.series.len()]
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets().into_iter().find(|t| t.name.eq_ignore_ascii_case(name)).unwrap_or_else(Theme::dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_is_case_insensitive_with_dark_fallback() {
        assert_eq!(find("LIGHT").name, "light");
        assert_eq!(find("solarized").name, "dark");
        assert_ne!(Theme::dark().series_color(0), Theme::dark().series_color(1));
        assert_eq!(Theme::light().series_color(6), Theme::light().series_color(0));
    }
}
