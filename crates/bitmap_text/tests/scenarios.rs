//! End-to-end scenarios through the public API, one per documented
//! behaviour: word wrap, explicit newlines, scroll saturation, a motionless
//! thumb drag and the typewriter finishing.

use std::sync::Arc;

use bitmap_text::core::ScrollbarConfig;
use bitmap_text::prelude::*;

fn font_with(metrics: GlyphMetrics, backend: &mut CommandRecorder) -> Arc<BitmapFont> {
    FontRegistry::new()
        .register_image(
            "6x7",
            &ImageData::solid_color(65 * 6, 7, [0xff; 4]),
            metrics,
            backend,
        )
        .expect("register font")
}

#[test]
fn test_word_boundary_wrap() {
    let layout = TextLayout::compute("THE QUICK BROWN FOX", 7 * 6, 70, GlyphMetrics::DEFAULT);
    assert_eq!(layout.chars_per_line(), 6);
    assert_eq!(layout.lines(), ["THE", "QUICK", "BROWN", "FOX"]);
}

#[test]
fn test_explicit_newline_breaks() {
    let layout = TextLayout::compute("A\nB", 120, 70, GlyphMetrics::DEFAULT);
    assert_eq!(layout.lines(), ["A", "B"]);
}

#[test]
fn test_negative_offset_saturates_at_top() {
    let mut backend = CommandRecorder::new();
    let message = "0\n1\n2\n3\n4\n5\n6\n7\n8\n9";
    let mut text = TextPresenter::new(
        font_with(GlyphMetrics::DEFAULT, &mut backend),
        Rect::new(0, 0, 60, 21),
        message,
    );
    assert_eq!(text.line_count(), 10);
    assert_eq!(text.window_lines(), 3);

    text.set_scroll_offset(-5);
    assert_eq!(text.scroll_position(), 0);
}

#[test]
fn test_motionless_drag_keeps_scroll() {
    // 33px lines in a 100px region: 3 visible lines and an 84px track
    let mut backend = CommandRecorder::new();
    let font = font_with(GlyphMetrics::new(6, 7, 26), &mut backend);
    let message = "A\nB\nC\nD\nE\nF\nG\nH\nI\nJ\nK\nL";
    let mut text = ScrollableText::new(
        font,
        Rect::new(40, 30, 67, 100),
        message,
        &ScrollbarConfig::default(),
    );
    text.set_scroll_position(2);
    assert_eq!(text.presenter().window_lines(), 3);
    assert_eq!(text.scrollbar().geometry().thumb_top, 20);

    let (x, y) = (40 + 62, 30 + 20);
    text.handle_pointer(&PointerEvent::down(x, y, MouseButton::Left));
    assert!(text.scrollbar().is_dragging());
    text.handle_pointer(&PointerEvent::moved(x, y));
    text.handle_pointer(&PointerEvent::up(x, y, MouseButton::Left));

    assert_eq!(text.scroll_position(), 2);
    assert!(!text.scrollbar().is_dragging());
}

#[test]
fn test_typewriter_stops_at_message_length() {
    let mut backend = CommandRecorder::new();
    let mut text = TextPresenter::new(
        font_with(GlyphMetrics::DEFAULT, &mut backend),
        Rect::new(0, 0, 120, 7),
        "HELLO",
    );
    text.set_ticks_per_char(100);

    let mut revealed = Vec::new();
    for _ in 0..6 {
        backend.clear();
        text.draw(100, &mut backend).expect("draw");
        revealed.push(text.revealed_chars());
    }

    assert_eq!(revealed, vec![1, 2, 3, 4, 5, 5]);
    assert_eq!(backend.blit_count(), 5);
    assert_eq!(text.typewriter().ticks_accumulated(), 500);
}
