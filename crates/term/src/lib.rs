//! Terminal surface module.
//!
//! This is a small, game-oriented display layer. The snake draws onto a
//! plain character [`Screen`] through the core's `Drawer` seam, and a
//! [`TerminalRenderer`] flushes that screen to a real terminal.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Give tests a surface they can read back cell by cell
//! - Flush only what changed between frames

pub mod renderer;
pub mod screen;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use renderer::TerminalRenderer;
pub use screen::Screen;
