//! Snake tests - body construction, growth, turning, and stepping

use tui_snake::core::Snake;
use tui_snake::types::{Direction, Point};

#[test]
fn test_construction_head_and_segments() {
    // Body extends rightward from the start cell; the head is the start
    // cell itself, not the far end.
    let snake = Snake::new('#', Point::new(0, 0), 3);

    assert_eq!(snake.len(), 4);
    assert_eq!(snake.head(), Point::new(0, 0));

    let segments: Vec<Point> = snake.segments().collect();
    assert_eq!(segments[0], Point::new(0, 0));
    assert_eq!(segments[3], Point::new(3, 0));
}

#[test]
fn test_construction_away_from_origin() {
    let snake = Snake::new('@', Point::new(10, 7), 2);

    let segments: Vec<Point> = snake.segments().collect();
    assert_eq!(
        segments,
        vec![Point::new(10, 7), Point::new(11, 7), Point::new(12, 7)]
    );
    assert_eq!(snake.head(), Point::new(10, 7));
}

#[test]
fn test_eat_grows_by_one() {
    let mut snake = Snake::new('#', Point::new(0, 0), 3);
    let head_before = snake.head();
    let len_before = snake.len();

    snake.eat(Point::new(5, 5));

    assert_eq!(snake.len(), len_before + 1);
    assert_eq!(snake.head(), head_before);
    assert_eq!(snake.segments().last(), Some(Point::new(5, 5)));
}

#[test]
fn test_move_semantics() {
    let mut snake = Snake::new('#', Point::new(0, 0), 3);
    assert_eq!(snake.head(), Point::new(0, 0));
    let len_before = snake.len();

    snake.step();

    assert_eq!(snake.head(), Point::new(1, 0));
    assert_eq!(snake.len(), len_before);
}

#[test]
fn test_length_invariant_across_moves() {
    let mut snake = Snake::new('#', Point::new(0, 0), 3);

    for _ in 0..50 {
        snake.step();
    }
    assert_eq!(snake.len(), 4);

    snake.change_direction(Direction::Down);
    for _ in 0..50 {
        snake.step();
    }
    assert_eq!(snake.len(), 4);
    assert_eq!(snake.head(), Point::new(50, 50));
}

#[test]
fn test_direction_reversal_guard() {
    let mut snake = Snake::new('#', Point::new(0, 0), 3);
    assert_eq!(snake.direction(), Direction::Right);

    // Reversal is silently ignored.
    snake.change_direction(Direction::Left);
    assert_eq!(snake.direction(), Direction::Right);

    // Perpendicular turns go through.
    snake.change_direction(Direction::Up);
    assert_eq!(snake.direction(), Direction::Up);
}

#[test]
fn test_invalid_direction_input_is_rejected_at_parse() {
    // The core enum is closed; bad direction values only exist as strings
    // and are rejected before they can reach the snake.
    assert_eq!(Direction::from_str("diagonal"), None);
    assert_eq!(Direction::from_str("upp"), None);
    assert_eq!(Direction::from_str(""), None);

    for dir in Direction::ALL {
        assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
    }
}

#[test]
fn test_growth_then_movement() {
    let mut snake = Snake::new('#', Point::new(0, 0), 1);
    assert_eq!(snake.len(), 2);

    // Tail of the body is at (1, 0); pretend food appeared behind it.
    snake.eat(Point::new(2, 0));
    assert_eq!(snake.len(), 3);

    // Stepping keeps the grown length.
    snake.step();
    assert_eq!(snake.len(), 3);
    assert_eq!(snake.head(), Point::new(1, 0));
}
