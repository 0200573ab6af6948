// File: crates/chart-render-skia/tests/render.rs
// Purpose: Drive the Skia backend through the host lifecycle and inspect the pixels.

use status_chart_core::{parse_records, ChartConfig, ChartHost, StatusPalette, SurfaceSize};
use status_chart_render_skia::{Insets, RenderOptions, SkiaBackend};

const ONE_POINT: &str = r#"[{"category": 1, "cpu": {"value": "5", "timestamp": 1000, "status": "GOOD"}}]"#;

fn quiet_backend() -> SkiaBackend {
    SkiaBackend::new(RenderOptions { draw_labels: false, insets: Insets::new(10, 10, 10, 10), ..RenderOptions::default() })
}

#[test]
fn point_takes_its_status_color() {
    let mut host = ChartHost::new(quiet_backend(), SurfaceSize::new(200, 100), ChartConfig::default());
    host.update(&parse_records(ONE_POINT).unwrap()).unwrap();

    let (backend, chart) = host.instance_mut().expect("mounted");
    assert_eq!(backend.live_instances(), 1);
    let (px, w, h, stride) = chart.rgba8().expect("rgba render");
    assert_eq!((w, h), (200, 100));
    assert_eq!(px.len(), stride * h as usize);

    // single category, single value: the dot sits at the middle of the plot area
    let i = 50 * stride + 100 * 4;
    let good = StatusPalette::standard().color("GOOD");
    assert_eq!(&px[i..i + 4], &[good.r, good.g, good.b, 255]);

    // top-left is opaque background
    assert_eq!(px[3], 255);
}

#[test]
fn png_output_and_placeholder() {
    let mut host = ChartHost::new(SkiaBackend::default(), SurfaceSize::new(320, 200), ChartConfig::default());
    host.update(&parse_records(ONE_POINT).unwrap()).unwrap();
    {
        let (_, chart) = host.instance_mut().unwrap();
        assert!(!chart.is_placeholder());
        let bytes = chart.png_bytes().expect("png");
        assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
        let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
        assert_eq!(img.dimensions(), (320, 200));
    }

    host.update(&[]).unwrap();
    let (_, chart) = host.instance_mut().unwrap();
    assert!(chart.is_placeholder());
}

#[test]
fn resize_replaces_surface() {
    let mut host = ChartHost::new(quiet_backend(), SurfaceSize::new(200, 100), ChartConfig::default());
    host.update(&parse_records(ONE_POINT).unwrap()).unwrap();
    host.resize(SurfaceSize::new(400, 300)).unwrap();

    let (_, chart) = host.instance_mut().unwrap();
    assert_eq!(chart.size(), SurfaceSize::new(400, 300));
    let (px, w, h, _) = chart.rgba8().unwrap();
    assert_eq!((w, h), (400, 300));
    assert_eq!(px.len(), 400 * 300 * 4);
}

#[test]
fn dispose_releases_surface() {
    let mut host = ChartHost::new(quiet_backend(), SurfaceSize::new(50, 50), ChartConfig::default());
    host.update(&parse_records(ONE_POINT).unwrap()).unwrap();
    assert_eq!(host.backend().live_instances(), 1);
    host.dispose();
    assert_eq!(host.backend().live_instances(), 0);
    assert!(host.instance_mut().is_none());
}
