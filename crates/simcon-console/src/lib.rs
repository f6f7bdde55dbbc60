#![forbid(unsafe_code)]

//! In-process developer console overlay for real-time simulation games.
//!
//! A scrollable text log paired with a single-line editable input,
//! rendered each frame on top of the game viewport. The console keeps
//! every buffer bounded: the log evicts its oldest lines, the history
//! ring drops its oldest entries, and the edit line is capped at the
//! platform buffer capacity. Rendering recomputes the visible window
//! and caret geometry from current state every frame, so there is no
//! retained surface to flicker or grow.
//!
//! The console talks to the game exclusively through the traits in
//! [`simcon_core`]: a drawing surface, a text-input service, a command
//! interpreter, screen queries, and a theme. Construct one [`Console`]
//! at startup, keep it alive for the process, and drive it from the
//! single render/update thread:
//!
//! ```ignore
//! let mut console = Console::new(ConsoleConfig::default());
//!
//! // per frame
//! console.update(&mut host);
//! console.draw(&mut host);
//!
//! // on input
//! console.handle_input(ConsoleInput::LineExecute, &mut host);
//! ```

/// Console configuration and defaults.
pub mod config;
/// The console controller and host collaborators.
pub mod console;
/// Bounded ring of executed input lines.
pub mod history;
/// Input-line edit state and caret blink.
pub mod input;
/// Bounded scrollback log.
pub mod line_buffer;
/// Scroll-window arithmetic.
pub mod scroll;

pub use config::ConsoleConfig;
pub use console::{CARET_WIDTH, Console, ConsoleHost, EDGE_PADDING};
pub use history::HistoryRing;
pub use input::{CARET_FLASH_PERIOD, CARET_FLASH_THRESHOLD, InputEditState};
pub use line_buffer::LineBuffer;
pub use scroll::{ScrollWindow, num_visible_lines};
