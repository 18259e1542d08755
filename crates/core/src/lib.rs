//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the snake body component and the drawing-surface
//! seam it renders through. It has **zero dependencies** on terminal I/O,
//! making it:
//!
//! - **Deterministic**: every operation is a direct in-memory mutation
//! - **Testable**: unit tests cover all movement and growth rules
//! - **Portable**: can run against any surface (terminal, buffer, headless)
//!
//! # Module Structure
//!
//! - [`snake`]: the snake body - an ordered segment sequence with growth,
//!   reversal-guarded turning, stepping, and drawing
//! - [`draw`]: the [`Drawer`](draw::Drawer) trait the snake paints through
//!
//! # Example
//!
//! ```
//! use tui_snake_core::Snake;
//! use tui_snake_types::{Direction, Point};
//!
//! let mut snake = Snake::new('#', Point::new(0, 0), 3);
//! assert_eq!(snake.head(), Point::new(0, 0));
//!
//! snake.change_direction(Direction::Down);
//! snake.step();
//! assert_eq!(snake.head(), Point::new(0, 1));
//! assert_eq!(snake.len(), 4);
//! ```

pub mod draw;
pub mod snake;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use draw::Drawer;
pub use snake::Snake;
