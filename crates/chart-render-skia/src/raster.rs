// File: crates/chart-render-skia/src/raster.rs
// Summary: CPU raster backend: draws a ChartSpec onto a Skia surface, reads back PNG/RGBA.

use skia_safe as skia;
use status_chart_core::{ChartSpec, Color, RenderBackend, RenderError, SurfaceSize};
use tracing::debug;

use crate::layout::{linspace, Insets, PlotArea};
use crate::theme::Theme;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub theme: Theme,
    pub insets: Insets,
    /// Text (title, legend, tick labels). Off for pixel-exact tests.
    pub draw_labels: bool,
    pub max_x_labels: usize,
    pub point_radius: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::dark(), insets: Insets::default(), draw_labels: true, max_x_labels: 8, point_radius: 3.5 }
    }
}

/// A live raster surface plus the chart currently shown on it.
pub struct RasterChart {
    surface: skia::Surface,
    size: SurfaceSize,
    shown: Option<ChartSpec>,
}

impl RasterChart {
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    pub fn is_placeholder(&self) -> bool {
        self.shown.is_none()
    }

    pub fn png_bytes(&mut self) -> Result<Vec<u8>, RenderError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| RenderError::Backend("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Unpremultiplied RGBA pixels: (pixels, width, height, row stride in bytes).
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, u32, u32, usize), RenderError> {
        let SurfaceSize { width, height } = self.size;
        let info = skia::ImageInfo::new(
            (width as i32, height as i32),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut px = vec![0u8; stride * height as usize];
        if !self.surface.read_pixels(&info, &mut px, stride, (0, 0)) {
            return Err(RenderError::Backend("read pixels failed".into()));
        }
        Ok((px, width, height, stride))
    }
}

/// Backend creating one raster surface per mounted host.
#[derive(Default)]
pub struct SkiaBackend {
    pub options: RenderOptions,
    live: usize,
}

impl SkiaBackend {
    pub fn new(options: RenderOptions) -> Self {
        Self { options, live: 0 }
    }

    /// Surfaces created and not yet disposed.
    pub fn live_instances(&self) -> usize {
        self.live
    }

    fn redraw(&self, chart: &mut RasterChart) {
        let size = chart.size;
        let canvas = chart.surface.canvas();
        match &chart.shown {
            Some(spec) => draw_chart(canvas, size, spec, &self.options),
            None => draw_placeholder(canvas, size, &self.options),
        }
    }
}

fn new_surface(size: SurfaceSize) -> Result<skia::Surface, RenderError> {
    let too_big = size.width > i32::MAX as u32 || size.height > i32::MAX as u32;
    if size.width == 0 || size.height == 0 || too_big {
        return Err(RenderError::Surface { width: size.width, height: size.height });
    }
    skia::surfaces::raster_n32_premul((size.width as i32, size.height as i32))
        .ok_or(RenderError::Surface { width: size.width, height: size.height })
}

impl RenderBackend for SkiaBackend {
    type Instance = RasterChart;

    fn create(&mut self, size: SurfaceSize) -> Result<RasterChart, RenderError> {
        let mut chart = RasterChart { surface: new_surface(size)?, size, shown: None };
        self.redraw(&mut chart);
        self.live += 1;
        Ok(chart)
    }

    fn apply(&mut self, instance: &mut RasterChart, spec: &ChartSpec) -> Result<(), RenderError> {
        instance.shown = Some(spec.clone());
        self.redraw(instance);
        debug!(series = spec.series.len(), "drew chart");
        Ok(())
    }

    fn show_placeholder(&mut self, instance: &mut RasterChart) -> Result<(), RenderError> {
        instance.shown = None;
        self.redraw(instance);
        Ok(())
    }

    fn resize(&mut self, instance: &mut RasterChart, size: SurfaceSize) -> Result<(), RenderError> {
        if instance.size == size {
            return Ok(());
        }
        instance.surface = new_surface(size)?;
        instance.size = size;
        self.redraw(instance);
        Ok(())
    }

    fn dispose(&mut self, instance: RasterChart) {
        drop(instance);
        self.live = self.live.saturating_sub(1);
    }
}

// ---- drawing ----------------------------------------------------------------

fn sk(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

fn draw_placeholder(canvas: &skia::Canvas, size: SurfaceSize, opts: &RenderOptions) {
    canvas.clear(opts.theme.background);
    if !opts.draw_labels {
        return;
    }
    let mut paint = skia::Paint::default();
    paint.set_color(opts.theme.placeholder);
    paint.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(16.0);
    let text = "No data";
    let origin = (size.width as f32 / 2.0 - 28.0, size.height as f32 / 2.0);
    canvas.draw_str(text, origin, &font, &paint);
}

fn draw_chart(canvas: &skia::Canvas, size: SurfaceSize, spec: &ChartSpec, opts: &RenderOptions) {
    let theme = &opts.theme;
    canvas.clear(theme.background);

    let area = PlotArea::new(size.width, size.height, opts.insets, spec.timeline.len(), spec.value_range());
    let stride = spec.x_axis.label_stride(opts.max_x_labels);

    draw_grid(canvas, &area, stride, theme);
    draw_axes(canvas, &area, theme);

    for (index, series) in spec.series.iter().enumerate() {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(theme.series_color(index));

        for segment in series.segments() {
            if segment.len() < 2 {
                continue;
            }
            let mut path = skia::Path::new();
            let (i0, v0) = segment[0];
            path.move_to((area.x(i0), area.y(v0)));
            for &(i, v) in segment.iter().skip(1) {
                path.line_to((area.x(i), area.y(v)));
            }
            canvas.draw_path(&path, &stroke);
        }

        if series.show_symbol {
            let mut dot = skia::Paint::default();
            dot.set_anti_alias(true);
            dot.set_style(skia::paint::Style::Fill);
            for (i, point) in series.points() {
                dot.set_color(sk(point.color));
                canvas.draw_circle((area.x(i), area.y(point.value)), opts.point_radius, &dot);
            }
        }
    }

    if opts.draw_labels {
        draw_labels(canvas, spec, &area, stride, opts);
    }
}

fn draw_grid(canvas: &skia::Canvas, area: &PlotArea, stride: usize, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.grid);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.0);

    for y in linspace(area.top as f64, area.bottom as f64, 6) {
        canvas.draw_line((area.left, y as f32), (area.right, y as f32), &paint);
    }
    for i in (0..area.categories).step_by(stride) {
        let x = area.x(i);
        canvas.draw_line((x, area.top), (x, area.bottom), &paint);
    }
}

fn draw_axes(canvas: &skia::Canvas, area: &PlotArea, theme: &Theme) {
    let mut paint = skia::Paint::default();
    paint.set_color(theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_stroke_width(1.5);
    canvas.draw_line((area.left, area.bottom), (area.right, area.bottom), &paint);
    canvas.draw_line((area.left, area.top), (area.left, area.bottom), &paint);
}

fn draw_labels(canvas: &skia::Canvas, spec: &ChartSpec, area: &PlotArea, stride: usize, opts: &RenderOptions) {
    let theme = &opts.theme;
    let mut text = skia::Paint::default();
    text.set_color(theme.axis_label);
    text.set_anti_alias(true);
    let mut font = skia::Font::default();
    font.set_size(11.0);

    for (i, label) in spec.x_axis.labels.iter().enumerate().step_by(stride) {
        let (w, _) = font.measure_str(label, Some(&text));
        canvas.draw_str(label, (area.x(i) - w / 2.0, area.bottom + 16.0), &font, &text);
    }

    for v in linspace(area.vmin, area.vmax, 6) {
        let label = format!("{v:.2}");
        let (w, _) = font.measure_str(&label, Some(&text));
        canvas.draw_str(&label, (area.left - w - 6.0, area.y(v) + 4.0), &font, &text);
    }
    if let Some(name) = &spec.y_axis.name {
        canvas.draw_str(name, (4.0, area.top - 8.0), &font, &text);
    }

    // legend: swatch in the series line color, then the metric name
    let mut swatch = skia::Paint::default();
    swatch.set_anti_alias(true);
    let mut x = area.left;
    for (index, name) in spec.legend.entries.iter().enumerate() {
        swatch.set_color(theme.series_color(index));
        canvas.draw_rect(skia::Rect::from_xywh(x, 12.0, 14.0, 8.0), &swatch);
        canvas.draw_str(name, (x + 18.0, 20.0), &font, &text);
        let (w, _) = font.measure_str(name, Some(&text));
        x += 18.0 + w + 16.0;
    }

    if let Some(title) = &spec.title {
        let mut title_font = skia::Font::default();
        title_font.set_size(14.0);
        let (w, _) = title_font.measure_str(title, Some(&text));
        canvas.draw_str(title, (area.right - w, 20.0), &title_font, &text);
    }
}
