use common::SnakeColor;

use super::traits::GameObjectRenderer;
use super::types::{CharDimensions, CharPattern};

/// Block-character renderer: bright head, per-snake body shade, dot food.
/// Terminal cells are roughly twice as tall as wide, so 2x1 characters per
/// board cell gives square-looking play fields.
pub struct StandardRenderer {
    char_dims: CharDimensions,
}

impl StandardRenderer {
    pub fn new(char_dims: CharDimensions) -> Self {
        Self { char_dims }
    }

    fn body_char(color: SnakeColor) -> char {
        match color {
            SnakeColor::Green => '▓',
            SnakeColor::Blue => '▒',
        }
    }
}

impl GameObjectRenderer for StandardRenderer {
    fn char_dimensions(&self) -> CharDimensions {
        self.char_dims
    }

    fn render_snake_segment(&self, is_head: bool, color: SnakeColor) -> CharPattern {
        let ch = if is_head { '█' } else { Self::body_char(color) };
        CharPattern::single(ch, self.char_dims)
    }

    fn render_food(&self) -> CharPattern {
        CharPattern::single('●', self.char_dims)
    }
}
