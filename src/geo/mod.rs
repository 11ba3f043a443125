pub mod bounds;
pub mod rect;
pub mod traits;

extern crate nalgebra as na;

pub use crate::utils::*;
pub use bounds::*;
pub use rand::distributions::{Distribution, Standard};
pub use rand::Rng;
pub use rect::*;
use serde::*;
pub use traits::*;

/// 2d tint color, 8 bits per channel
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgba(255, 255, 255, 255);
    pub const BLACK: Color = Color::rgba(0, 0, 0, 255);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl Distribution<Color> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        Color::rgba(rng.gen(), rng.gen(), rng.gen(), rng.gen())
    }
}
