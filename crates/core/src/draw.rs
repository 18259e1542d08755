//! Drawing-surface seam between the core and whatever displays it.

/// A surface that can paint one character cell at a time.
///
/// The snake is a pure consumer of this primitive and knows nothing about
/// the backing store (terminal, framebuffer, test recorder). Coordinates
/// may fall outside the surface; implementations clip and never panic.
pub trait Drawer {
    fn draw_point(&mut self, x: i32, y: i32, ch: char);
}
