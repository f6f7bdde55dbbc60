#![forbid(unsafe_code)]

//! The console controller.
//!
//! Owns the scrollback, history, edit state, and scroll window, and
//! drives them from three entry points called by the game loop: input
//! events, a per-frame `update`, and a per-frame `draw`. All platform
//! access goes through the [`ConsoleHost`] collaborators passed into
//! each call; the console holds no global state and no locks, and is
//! driven exclusively by the single render/update thread.

use simcon_core::{
    Colour, CommandInterpreter, ConsoleInput, DrawSurface, FilterPalette, FormatToken,
    RectInsetFlags, Screen, ScreenCoords, ScreenRect, TextInputHost, TextInputSession, TextPaint,
    Theme, ThemeSlot,
};

use crate::config::ConsoleConfig;
use crate::history::HistoryRing;
use crate::input::InputEditState;
use crate::line_buffer::LineBuffer;
use crate::scroll::{ScrollWindow, num_visible_lines};

/// Caret bar width in pixels.
pub const CARET_WIDTH: i32 = 6;
/// Padding between console edges and text, in pixels.
pub const EDGE_PADDING: i32 = 4;

const PROMPT: &str = "> ";

/// The game-side collaborators for one console call.
///
/// Rebuilt (cheaply) for every call into the console; the console
/// never stores these references.
pub struct ConsoleHost<'a> {
    /// Current frame's drawing target.
    pub surface: &'a mut dyn DrawSurface,
    /// Platform text-input service.
    pub text_input: &'a mut dyn TextInputHost,
    /// Command interpreter executed lines are handed to.
    pub interpreter: &'a mut dyn CommandInterpreter,
    /// Viewport and invalidation queries.
    pub screen: &'a mut dyn Screen,
    /// Themed colour lookup.
    pub theme: &'a dyn Theme,
}

/// The in-game developer console overlay.
#[derive(Debug)]
pub struct Console {
    config: ConsoleConfig,
    open: bool,
    lines: LineBuffer,
    history: HistoryRing,
    input: InputEditState,
    scroll: ScrollWindow,
    bounds: ScreenRect,
    last_viewport_pos: Option<ScreenCoords>,
    session: Option<TextInputSession>,
}

impl Console {
    /// Create a closed console and write the startup banner.
    #[must_use]
    pub fn new(config: ConsoleConfig) -> Self {
        let mut console = Self {
            lines: LineBuffer::new(config.max_lines),
            history: HistoryRing::new(config.history_size),
            input: InputEditState::new(config.input_capacity),
            scroll: ScrollWindow::default(),
            bounds: ScreenRect::default(),
            last_viewport_pos: None,
            session: None,
            open: false,
            config,
        };
        console.write_line(
            concat!("simcon ", env!("CARGO_PKG_VERSION")),
            FormatToken::WindowColour2,
        );
        console.write_line(
            "Type 'help' for a list of available commands. Type 'hide' to hide the console.",
            FormatToken::WindowColour2,
        );
        console.write_line("", FormatToken::WindowColour2);
        console.write_prompt();
        console
    }

    /// Check if the console is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The scrollback log.
    #[must_use]
    pub fn lines(&self) -> &LineBuffer {
        &self.lines
    }

    /// The executed-line history.
    #[must_use]
    pub fn history(&self) -> &HistoryRing {
        &self.history
    }

    /// The current input line.
    #[must_use]
    pub fn current_line(&self) -> &str {
        self.input.line()
    }

    /// Index of the first visible log line.
    #[must_use]
    pub fn scroll_offset(&self) -> usize {
        self.scroll.offset()
    }

    /// The active text-input session lease, while open.
    #[must_use]
    pub fn session(&self) -> Option<&TextInputSession> {
        self.session.as_ref()
    }

    /// Current console screen bounds, as of the last `update`.
    #[must_use]
    pub fn bounds(&self) -> ScreenRect {
        self.bounds
    }

    /// Append one or more log lines.
    pub fn write_line(&mut self, text: &str, colour: FormatToken) {
        self.lines.write_line(text, colour);
    }

    /// Drop all log lines and snap the scroll window to the end.
    pub fn clear(&mut self, surface: &dyn DrawSurface) {
        self.lines.clear();
        self.scroll_to_end(surface);
    }

    /// Clear the input line and refresh the caret, without touching
    /// the text-input session.
    pub fn clear_line(&mut self, surface: &dyn DrawSurface) {
        self.input.clear();
        self.input
            .refresh_caret(surface, self.config.font_style(), 0);
    }

    /// Re-measure the caret at `position` (byte offset into the line).
    ///
    /// Called by the platform shell after the text-input service has
    /// edited the line.
    pub fn refresh_caret(&mut self, surface: &dyn DrawSurface, position: usize) {
        self.input
            .refresh_caret(surface, self.config.font_style(), position);
    }

    /// Replace the input line with the session's edited text.
    ///
    /// The platform shell calls this when raw key input changes the
    /// leased buffer; the console's copy stays the authoritative
    /// mirror once the session ends.
    pub fn set_current_line(&mut self, text: &str) {
        self.input.set_text(text);
    }

    /// Open the console: snap to the newest content, solidify the
    /// caret, and lease the input line to the text-input service.
    pub fn open(&mut self, host: &mut ConsoleHost<'_>) {
        self.open = true;
        tracing::debug!("console opened");
        self.scroll_to_end(&*host.surface);
        self.refresh_caret(&*host.surface, 0);
        self.session = Some(
            host.text_input
                .start(self.input.line(), self.config.input_capacity),
        );
    }

    /// Close the console and release the text-input session.
    ///
    /// The lease is dropped before the host is told to stop; it must
    /// never be touched again after this returns.
    pub fn close(&mut self, host: &mut ConsoleHost<'_>) {
        self.session = None;
        self.open = false;
        host.screen.mark_dirty(self.bounds);
        host.text_input.stop();
        tracing::debug!("console closed");
    }

    /// Alias for [`Console::close`].
    pub fn hide(&mut self, host: &mut ConsoleHost<'_>) {
        self.close(host);
    }

    /// Toggle between open and closed.
    pub fn toggle(&mut self, host: &mut ConsoleHost<'_>) {
        if self.open {
            self.close(host);
        } else {
            self.open(host);
        }
    }

    /// Dispatch one input event.
    ///
    /// The game's input dispatcher only routes events here while the
    /// console is open.
    pub fn handle_input(&mut self, input: ConsoleInput, host: &mut ConsoleHost<'_>) {
        match input {
            ConsoleInput::LineClear => {
                self.clear_input(host.text_input);
                self.refresh_caret(&*host.surface, 0);
            }
            ConsoleInput::LineExecute => {
                if !self.input.line().is_empty() {
                    let line = self.input.line().to_string();
                    self.history.add(&line);

                    // Echo the command onto the waiting prompt line.
                    self.lines.append_to_last(&line);

                    tracing::debug!(command = %line, "execute");
                    host.interpreter.execute(&line, &mut self.lines);
                    self.write_prompt();
                    self.clear_input(host.text_input);
                    self.refresh_caret(&*host.surface, 0);
                }
                self.scroll_to_end(&*host.surface);
            }
            ConsoleInput::HistoryPrevious => {
                if let Some(entry) = self.history.previous().map(str::to_string) {
                    self.input.set_text(&entry);
                }
                self.sync_session();
            }
            ConsoleInput::HistoryNext => match self.history.next().map(str::to_string) {
                Some(entry) => {
                    self.input.set_text(&entry);
                    self.sync_session();
                }
                None => {
                    self.clear_input(host.text_input);
                }
            },
            ConsoleInput::ScrollPrevious => {
                let amount = self.visible_lines(&*host.surface) as i32 - 1;
                self.scroll_by(amount, &*host.surface);
            }
            ConsoleInput::ScrollNext => {
                let amount = self.visible_lines(&*host.surface) as i32 - 1;
                self.scroll_by(-amount, &*host.surface);
            }
        }
    }

    /// Per-frame state advance: recompute bounds, invalidate when the
    /// main viewport panned underneath the panel, advance the blink.
    pub fn update(&mut self, host: &mut ConsoleHost<'_>) {
        self.bounds = ScreenRect::new(
            ScreenCoords::new(0, 0),
            ScreenCoords::new(host.screen.width(), self.config.height),
        );

        if self.open {
            // Scrolling the map blits over the console pixels, so a
            // pan forces a full-screen redraw.
            if let Some(pos) = host.screen.main_viewport_pos()
                && self.last_viewport_pos != Some(pos)
            {
                self.last_viewport_pos = Some(pos);
                host.screen.invalidate_all();
            }
        }

        self.input.advance_blink();
    }

    /// Per-frame paint. No-op while closed.
    pub fn draw(&self, host: &mut ConsoleHost<'_>) {
        if !self.open {
            return;
        }

        let font = self.config.font_style();
        let line_height = host.surface.line_height(font);
        let visible = num_visible_lines(self.bounds.height(), line_height);

        let text_colour = host.theme.colour(ThemeSlot::Text).opaque();
        // Force genuinely black text rather than the desaturated grey
        // the themed path would produce.
        let colour_format = if text_colour.base() == Colour::BLACK {
            "{BLACK}"
        } else {
            ""
        };
        // TrueType rendering looks better without the outline.
        let outline = !self.config.truetype_font;
        let paint = TextPaint::new(text_colour, font).with_outline(outline);

        // The panel is translucent, so stale game frames must never
        // show through: redraw the whole region every frame.
        host.screen.mark_dirty(self.bounds);

        let top_left = self.bounds.top_left;
        let bottom_right = self.bounds.bottom_right;

        host.surface.filter_rect(self.bounds, FilterPalette::DARKEN);
        // A second pass over the input row makes it more opaque.
        host.surface.filter_rect(
            ScreenRect::new(
                ScreenCoords::new(top_left.x, bottom_right.y - line_height - 10),
                bottom_right - ScreenCoords::new(0, 1),
            ),
            FilterPalette::DARKEN,
        );

        let background = host.theme.colour(ThemeSlot::Background);
        host.surface
            .fill_rect_inset(self.bounds, background, RectInsetFlags::FILL_NONE);
        host.surface.fill_rect_inset(
            ScreenRect::new(
                top_left + ScreenCoords::new(1, 1),
                bottom_right - ScreenCoords::new(1, 1),
            ),
            background,
            RectInsetFlags::BORDER_INSET,
        );

        // Visible log window, top-down.
        let mut pos = top_left + ScreenCoords::new(EDGE_PADDING, EDGE_PADDING);
        for line in self.lines.iter().skip(self.scroll.offset()).take(visible) {
            host.surface
                .draw_string(pos, &format!("{colour_format}{line}"), paint);
            pos.y += line_height;
        }

        // Current input line, right above the bottom border.
        pos.y = bottom_right.y - line_height - EDGE_PADDING - 1;
        let input_paint = TextPaint::new(Colour::WHITE, font).with_outline(outline);
        host.surface.draw_string(
            pos,
            &format!("{colour_format}{}", self.input.line()),
            input_paint,
        );

        if self.input.caret_visible() {
            let caret = pos + ScreenCoords::new(self.input.caret_x(), line_height);
            let caret_colour = host.theme.shades(text_colour.base()).lightest;
            host.surface.fill_rect(
                ScreenRect::new(caret, caret + ScreenCoords::new(CARET_WIDTH, 1)),
                caret_colour,
            );
        }

        // Separator above the input row and the console's bottom edge,
        // each a light/mid-dark shade pair of the background colour.
        let shades = host.theme.shades(background.base());
        let (x0, x1) = (top_left.x, bottom_right.x);
        host.surface.fill_rect(
            ScreenRect::hline(x0, x1, bottom_right.y - line_height - 11),
            shades.light,
        );
        host.surface.fill_rect(
            ScreenRect::hline(x0, x1, bottom_right.y - line_height - 10),
            shades.mid_dark,
        );
        host.surface
            .fill_rect(ScreenRect::hline(x0, x1, bottom_right.y - 1), shades.light);
        host.surface
            .fill_rect(ScreenRect::hline(x0, x1, bottom_right.y), shades.mid_dark);
    }

    fn write_prompt(&mut self) {
        self.lines.write_line(PROMPT, FormatToken::WindowColour2);
    }

    /// Clear the input line; while open, rebind the text-input session
    /// over the now-empty buffer.
    fn clear_input(&mut self, text_input: &mut dyn TextInputHost) {
        self.input.clear();
        if self.open {
            self.session = Some(text_input.start(self.input.line(), self.config.input_capacity));
        }
    }

    fn sync_session(&mut self) {
        if let Some(session) = self.session.as_mut() {
            *session = self.input.session_metadata();
        }
    }

    fn visible_lines(&self, surface: &dyn DrawSurface) -> usize {
        num_visible_lines(
            self.bounds.height(),
            surface.line_height(self.config.font_style()),
        )
    }

    fn scroll_by(&mut self, lines_to_scroll: i32, surface: &dyn DrawSurface) {
        let visible = self.visible_lines(surface);
        self.scroll
            .scroll(lines_to_scroll, self.lines.len(), visible);
    }

    fn scroll_to_end(&mut self, surface: &dyn DrawSurface) {
        let visible = self.visible_lines(surface);
        self.scroll.scroll_to_end(self.lines.len(), visible);
    }
}
