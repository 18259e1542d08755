//! Snake module - the body sequence and its movement rules
//!
//! The body is an ordered head-to-tail sequence of cell positions backed by
//! a `VecDeque`: stepping is a pop at the tail plus a push at the head, and
//! growth is a push at the tail. The body is never empty.

use std::collections::VecDeque;

use crate::draw::Drawer;
use crate::types::{Direction, Point, BLANK, START_DIRECTION};

/// The snake: an ordered body of segments, a facing direction, and the
/// character it is drawn with.
#[derive(Debug, Clone)]
pub struct Snake {
    /// Body segments, head first. Invariant: never empty.
    body: VecDeque<Point>,
    direction: Direction,
    symbol: char,
}

impl Snake {
    /// Create a snake of `initial_length + 1` segments extending rightward
    /// from `start`, facing [`START_DIRECTION`].
    ///
    /// The head is the segment at `start` itself; the body trails behind it
    /// at increasing `x`. A zero `initial_length` yields the minimal
    /// one-segment body.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_core::Snake;
    /// use tui_snake_types::Point;
    ///
    /// let snake = Snake::new('#', Point::new(0, 0), 3);
    /// assert_eq!(snake.len(), 4);
    /// assert_eq!(snake.head(), Point::new(0, 0));
    /// ```
    pub fn new(symbol: char, start: Point, initial_length: u16) -> Self {
        let mut body = VecDeque::with_capacity(initial_length as usize + 1);
        for i in 0..=initial_length as i32 {
            body.push_back(Point::new(start.x + i, start.y));
        }

        Self {
            body,
            direction: START_DIRECTION,
            symbol,
        }
    }

    /// The frontmost segment.
    pub fn head(&self) -> Point {
        *self.body.front().expect("snake body is never empty")
    }

    /// Current facing direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Character every segment is drawn with.
    pub fn symbol(&self) -> char {
        self.symbol
    }

    /// Number of body segments. Always at least 1.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Body segments in head-to-tail order.
    pub fn segments(&self) -> impl Iterator<Item = Point> + '_ {
        self.body.iter().copied()
    }

    /// Grow by one segment at the tail end.
    ///
    /// No adjacency check is made; the position comes from the collaborator
    /// that decided the snake ate something there.
    pub fn eat(&mut self, position: Point) {
        self.body.push_back(position);
    }

    /// Turn to face `new_direction`, unless it is the exact opposite of the
    /// current direction, in which case the turn is silently ignored - a
    /// snake cannot reverse into its own body.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_snake_core::Snake;
    /// use tui_snake_types::{Direction, Point};
    ///
    /// let mut snake = Snake::new('#', Point::new(0, 0), 2);
    /// snake.change_direction(Direction::Left); // opposite of Right: ignored
    /// assert_eq!(snake.direction(), Direction::Right);
    /// snake.change_direction(Direction::Up);
    /// assert_eq!(snake.direction(), Direction::Up);
    /// ```
    pub fn change_direction(&mut self, new_direction: Direction) {
        if new_direction != self.direction.opposite() {
            self.direction = new_direction;
        }
    }

    /// Advance one cell in the current direction.
    ///
    /// The tail segment is removed and a new head is pushed one cell ahead
    /// of the old one: the body length is unchanged and every other segment
    /// stays where it was.
    pub fn step(&mut self) {
        // Next head is computed before the tail pop so a one-segment body
        // keeps the never-empty invariant through the whole update.
        let next = self.head().translate(self.direction);
        self.body.pop_back();
        self.body.push_front(next);
    }

    /// Paint every segment onto `drawer` with the snake's symbol, head
    /// first, then blank the current tail cell.
    ///
    /// The trailing blank erases the cell the tail vacates when `draw` runs
    /// on the pre-step body; drawn after a step it blanks the cell the tail
    /// currently occupies. Callers are expected to sequence draw-then-step
    /// so the blank wipes the trail, not the body.
    pub fn draw<D: Drawer>(&self, drawer: &mut D) {
        for segment in &self.body {
            drawer.draw_point(segment.x, segment.y, self.symbol);
        }

        if let Some(tail) = self.body.back() {
            drawer.draw_point(tail.x, tail.y, BLANK);
        }
    }
}
