use tracing::debug;

use crate::body::SnakeBody;
use crate::direction::Direction;

/// Turn the snake around: the tail becomes the head and the snake heads away
/// from its old tail's successor. Occupied cells do not change.
///
/// Returns the direction to travel in from the next tick on.
pub fn reverse(snake: &mut SnakeBody, travel: Direction) -> Direction {
    let heading = snake.tail_heading(travel).opposite();
    snake.reverse();
    debug!(?heading, head = snake.head().cell, "snake reversed");
    heading
}
