use common::SnakeColor;

use super::types::{CharDimensions, CharPattern};

/// Maps game objects to character patterns. Implementations decide how
/// many characters one board cell occupies.
pub trait GameObjectRenderer {
    fn char_dimensions(&self) -> CharDimensions;

    fn render_snake_segment(&self, is_head: bool, color: SnakeColor) -> CharPattern;

    fn render_food(&self) -> CharPattern;
}
