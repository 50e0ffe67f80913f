use super::*;

fn canvas(w: u32, h: u32) -> Canvas {
    Canvas::new(w, h).unwrap()
}

#[test]
fn hsla_primary_hues() {
    let red = Paint::hsla(0.0, 100.0, 50.0, 1.0);
    assert_eq!((red.r, red.g, red.b), (255, 0, 0));
    let green = Paint::hsla(120.0, 100.0, 50.0, 0.5);
    assert_eq!((green.r, green.g, green.b), (0, 255, 0));
    assert_eq!(green.a, 0.5);
    let blue = Paint::hsla(600.0, 100.0, 50.0, 1.0);
    assert_eq!((blue.r, blue.g, blue.b), (0, 0, 255));
}

#[test]
fn escape_xml_handles_markup() {
    assert_eq!(escape_xml(r#"<a & "b">"#), "&lt;a &amp; &quot;b&quot;&gt;");
    assert_eq!(escape_xml("it's"), "it&apos;s");
}

#[test]
fn finish_declares_output_size_and_logical_viewbox() {
    let doc = SvgDoc::new(1920.0, 1080.0);
    let svg = doc.finish(canvas(192, 108));
    assert!(svg.contains(r#"width="192" height="108""#));
    assert!(svg.contains(r#"viewBox="0 0 1920 1080""#));
}

#[test]
fn rasterize_fills_whole_canvas() {
    let mut doc = SvgDoc::new(100.0, 100.0);
    doc.fill_rect(0.0, 0.0, 100.0, 100.0, Paint::rgb(200, 10, 20));
    let frame = doc.rasterize(canvas(16, 8), &no_fonts()).unwrap();

    assert_eq!((frame.width, frame.height), (16, 8));
    assert_eq!(frame.pixel(0, 0), Some([200, 10, 20, 255]));
    assert_eq!(frame.pixel(15, 7), Some([200, 10, 20, 255]));
}

#[test]
fn text_without_fonts_is_skipped_not_an_error() {
    let mut doc = SvgDoc::new(100.0, 100.0);
    doc.fill_rect(0.0, 0.0, 100.0, 100.0, Paint::rgb(0, 0, 0));
    doc.text(
        10.0,
        50.0,
        TextStyle {
            size_px: 20.0,
            bold: true,
            anchor: Anchor::Start,
            paint: Paint::rgb(255, 255, 255),
        },
        "hello <world>",
    );
    assert!(doc.rasterize(canvas(20, 20), &no_fonts()).is_ok());
}

#[test]
fn malformed_svg_is_a_validation_error() {
    let err = rasterize_svg("<svg", canvas(4, 4), &no_fonts()).unwrap_err();
    assert!(matches!(err, StudioError::Validation(_)));
}
