// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia renderer crate. Implements the core render backend on CPU raster surfaces.

pub mod layout;
pub mod raster;
pub mod theme;

pub use layout::{Insets, PlotArea};
pub use raster::{RasterChart, RenderOptions, SkiaBackend};
pub use theme::Theme;
