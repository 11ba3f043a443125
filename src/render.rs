//! Seams to the rendering framework.
//!
//! The core never draws by itself; it hands [`SpriteDraw`] requests to a
//! [`Renderer`] and asks a [`Camera`] where things end up on screen.

use crate::geo::*;
use serde::{Deserialize, Serialize};

/// opaque handle of a loaded texture, only its size is known to the core
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct Texture {
    pub id: u32,
    pub width: u32,
    pub height: u32,
}

impl Texture {
    pub fn new(id: u32, width: u32, height: u32) -> Texture {
        Texture { id, width, height }
    }

    pub fn size(&self) -> V2 {
        V2::new(self.width as Float, self.height as Float)
    }
}

/// one textured quad
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpriteDraw {
    pub texture: Texture,
    /// screen position of the quad
    pub position: V2,
    /// region of the texture, `None` draws the whole texture
    pub source: Option<Rect>,
    pub tint: Color,
    pub scale: V2,
    pub flip: bool,
    /// back to front sort key, larger is further back
    pub depth: Float,
}

pub trait Renderer {
    fn draw_sprite(&mut self, sprite: &SpriteDraw);
}

pub trait Camera {
    fn world_to_screen(&self, position: V2) -> V2;
    fn is_position_visible(&self, position: V2) -> bool;
}

/// camera looking at a fixed region of the world without zoom
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ViewportCamera {
    /// world position shown at the top left corner of the screen
    pub offset: V2,
    pub viewport: V2,
    /// extra margin so sprites straddling the screen edge are still drawn
    pub margin: Float,
}

impl ViewportCamera {
    pub fn new(offset: V2, viewport: V2) -> ViewportCamera {
        ViewportCamera {
            offset,
            viewport,
            margin: 0.0,
        }
    }
}

impl Camera for ViewportCamera {
    fn world_to_screen(&self, position: V2) -> V2 {
        position - self.offset
    }

    fn is_position_visible(&self, position: V2) -> bool {
        let p = self.world_to_screen(position);
        between(p.x, -self.margin, self.viewport.x + self.margin)
            && between(p.y, -self.margin, self.viewport.y + self.margin)
    }
}
