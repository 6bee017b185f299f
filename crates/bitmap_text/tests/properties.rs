//! Property-based tests for layout, scrolling and the frame-driven effects.
//!
//! Each property runs against the public API only: wrap a message, drive a
//! presenter or scrollbar with arbitrary input, then check the invariant.

use std::sync::Arc;

use bitmap_text::core::ScrollbarConfig;
use bitmap_text::prelude::*;
use bitmap_text::text::{reveal::Typewriter, wrap_lines, Blink};
use bitmap_text::ui::ScrollbarGeometry;
use proptest::prelude::*;

// ===== Strategies =====

/// Short words, runs of spaces and newlines, dense enough to hit every
/// wrap branch at small widths
fn arb_message() -> impl Strategy<Value = String> {
    "[A-E \n]{0,80}"
}

fn arb_chars_per_line() -> impl Strategy<Value = usize> {
    0usize..24
}

fn stock_font() -> Arc<BitmapFont> {
    let mut backend = CommandRecorder::new();
    FontRegistry::new()
        .register_image(
            "6x7",
            &ImageData::solid_color(65 * 6, 7, [0xff; 4]),
            GlyphMetrics::DEFAULT,
            &mut backend,
        )
        .expect("register stock font")
}

fn visible_chars(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

// ===== Layout =====

proptest! {
    #[test]
    fn prop_rewrap_is_fixed_point(message in arb_message(), cpl in arb_chars_per_line()) {
        let once = wrap_lines(&message, cpl);
        let twice = wrap_lines(&once.join("\n"), cpl);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_every_visible_char_survives_in_order(
        message in arb_message(),
        cpl in arb_chars_per_line(),
    ) {
        let lines = wrap_lines(&message, cpl);
        prop_assert_eq!(visible_chars(&lines.concat()), visible_chars(&message));
    }

    #[test]
    fn prop_lines_overshoot_by_at_most_one(
        message in arb_message(),
        cpl in arb_chars_per_line(),
    ) {
        for line in wrap_lines(&message, cpl) {
            prop_assert!(line.chars().count() <= cpl + 1, "line {:?} at {} per line", line, cpl);
        }
    }

    #[test]
    fn prop_layout_is_pure(message in arb_message(), width in 0i32..200, height in 0i32..100) {
        let a = TextLayout::compute(&message, width, height, GlyphMetrics::DEFAULT);
        let b = TextLayout::compute(&message, width, height, GlyphMetrics::DEFAULT);
        prop_assert_eq!(a, b);
    }
}

// ===== Scrolling =====

proptest! {
    #[test]
    fn prop_scroll_stays_clamped(
        line_count in 0usize..40,
        offsets in prop::collection::vec(-50isize..50, 1..30),
    ) {
        let message = vec!["X"; line_count].join("\n");
        let mut text = TextPresenter::new(stock_font(), Rect::new(0, 0, 60, 21), message);

        for offset in offsets {
            text.set_scroll_offset(offset);
            prop_assert!(text.scroll_position() <= text.line_count().saturating_sub(1));
        }
    }

    #[test]
    fn prop_thumb_stays_inside_track(
        height in 0i32..200,
        line_count in 0usize..200,
        window_lines in 0usize..30,
        scroll in 0usize..300,
    ) {
        let config = ScrollbarConfig::default();
        let geometry = ScrollbarGeometry::compute(
            67, height, config.width, config.arrow_height, line_count, window_lines, scroll,
        );

        if geometry.track_height > 0 {
            prop_assert!(geometry.thumb_height <= geometry.track_height);
            prop_assert!(geometry.thumb_top >= geometry.track_top);
            prop_assert!(geometry.thumb_top + geometry.thumb_height <= geometry.track_bottom());
        } else {
            prop_assert_eq!(geometry.thumb_height, 0);
            prop_assert!(!geometry.thumb_enabled);
        }
    }
}

// ===== Effects =====

proptest! {
    #[test]
    fn prop_reveal_is_monotonic_and_bounded(
        ticks_per_char in 1u32..500,
        message_len in 0usize..100,
        frames in prop::collection::vec(0u32..1_000, 1..60),
    ) {
        let mut typewriter = Typewriter::new(ticks_per_char);
        let mut previous = 0;

        for elapsed in frames {
            typewriter.advance(elapsed, message_len);
            let revealed = typewriter.revealed(message_len);
            prop_assert!(revealed >= previous);
            prop_assert!(revealed <= message_len);
            previous = revealed;
        }
    }

    #[test]
    fn prop_blink_counter_stays_in_cycle(
        on_ms in 0u32..10_000,
        off_ms in 1u32..10_000,
        frames in prop::collection::vec(any::<u32>(), 1..100),
    ) {
        let mut blink = Blink::new(on_ms, off_ms);
        for elapsed in frames {
            blink.advance(elapsed);
            prop_assert!(blink.counter() < blink.cycle_ms());
        }
    }
}
