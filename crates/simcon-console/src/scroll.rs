#![forbid(unsafe_code)]

//! Visible-window computation over the scrollback log.
//!
//! The offset is the index of the first visible line. Scrolling back
//! in time moves the offset towards 0; page-up passes a positive line
//! count, page-down a negative one.

/// Pixels reserved for the separator between log and input row.
pub const RESERVED_CHROME: i32 = 4;

/// Scroll offset into the scrollback log, clamped against content.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollWindow {
    offset: usize,
}

impl ScrollWindow {
    /// Index of the first visible line.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Snap to showing the newest content.
    pub fn scroll_to_end(&mut self, total_lines: usize, visible_lines: usize) {
        self.offset = if visible_lines == 0 {
            0
        } else {
            total_lines.saturating_sub(visible_lines)
        };
    }

    /// Scroll by `lines_to_scroll`; positive moves towards older lines.
    ///
    /// Takes effect only when the content exceeds the visible area,
    /// and always clamps into `[0, total - visible]`.
    pub fn scroll(&mut self, lines_to_scroll: i32, total_lines: usize, visible_lines: usize) {
        if total_lines > visible_lines {
            let max_offset = (total_lines - visible_lines) as i32;
            self.offset = (self.offset as i32 - lines_to_scroll).clamp(0, max_offset) as usize;
        }
    }
}

/// Lines that fit in the log area, excluding the input row.
///
/// One line height is reserved for the input row and a fixed chrome
/// band for the separator. Returns 0 while the console is unsized.
#[must_use]
pub fn num_visible_lines(console_height: i32, line_height: i32) -> usize {
    if console_height == 0 || line_height <= 0 {
        return 0;
    }
    let drawable = console_height - 2 * line_height - RESERVED_CHROME;
    if drawable <= 0 {
        0
    } else {
        (drawable / line_height) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn visible_lines_reserve_input_row_and_chrome() {
        // (322 - 2*10 - 4) / 10
        assert_eq!(num_visible_lines(322, 10), 29);
    }

    #[test]
    fn unsized_console_shows_nothing() {
        assert_eq!(num_visible_lines(0, 10), 0);
        assert_eq!(num_visible_lines(322, 0), 0);
        assert_eq!(num_visible_lines(20, 10), 0);
    }

    #[test]
    fn scroll_to_end_snaps_to_newest() {
        let mut window = ScrollWindow::default();
        window.scroll_to_end(100, 29);
        assert_eq!(window.offset(), 71);
        window.scroll_to_end(10, 29);
        assert_eq!(window.offset(), 0);
        window.scroll_to_end(100, 0);
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn scroll_is_inert_when_content_fits() {
        let mut window = ScrollWindow::default();
        window.scroll(5, 10, 29);
        assert_eq!(window.offset(), 0);
        window.scroll(-5, 10, 29);
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn positive_scroll_moves_towards_older_lines() {
        let mut window = ScrollWindow::default();
        window.scroll_to_end(100, 29);
        window.scroll(28, 100, 29);
        assert_eq!(window.offset(), 43);
        window.scroll(-28, 100, 29);
        assert_eq!(window.offset(), 71);
    }

    #[test]
    fn scroll_clamps_at_both_ends() {
        let mut window = ScrollWindow::default();
        window.scroll(1000, 100, 29);
        assert_eq!(window.offset(), 0);
        window.scroll(-1000, 100, 29);
        assert_eq!(window.offset(), 71);
    }

    proptest! {
        #[test]
        fn prop_offset_always_in_range(
            deltas in prop::collection::vec(-50..50i32, 0..30),
            total in 0..200usize,
            visible in 0..40usize,
        ) {
            let mut window = ScrollWindow::default();
            for delta in deltas {
                window.scroll(delta, total, visible);
                prop_assert!(window.offset() <= total.saturating_sub(visible));
            }
        }

        #[test]
        fn prop_scroll_round_trip_without_clamp(
            start in 0..100usize,
            delta in 1..20i32,
        ) {
            let total = 200usize;
            let visible = 29usize;
            let start = start.min(total - visible);
            let mut window = ScrollWindow::default();
            window.scroll_to_end(start + visible, visible); // offset = start
            prop_assume!(window.offset() as i32 - delta >= 0);
            prop_assume!(window.offset() as i32 + delta <= (total - visible) as i32);

            let before = window.offset();
            window.scroll(delta, total, visible);
            window.scroll(-delta, total, visible);
            prop_assert_eq!(window.offset(), before);
        }

        #[test]
        fn prop_scroll_to_end_shows_tail(
            total in 0..500usize,
            visible in 1..40usize,
        ) {
            let mut window = ScrollWindow::default();
            window.scroll_to_end(total, visible);
            if total >= visible {
                prop_assert_eq!(window.offset() + visible, total);
            } else {
                prop_assert_eq!(window.offset(), 0);
            }
        }
    }
}
