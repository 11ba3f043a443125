use crate::geo::*;
use serde::{Deserialize, Serialize};
use crate::render::Texture;

/// widths of the fixed border of a nine slice, in source pixels
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Border {
    pub left: Float,
    pub right: Float,
    pub top: Float,
    pub bottom: Float,
}

impl Border {
    pub fn uniform(width: Float) -> Border {
        Border {
            left: width,
            right: width,
            top: width,
            bottom: width,
        }
    }
}

/// a texture region stretched to any size without distorting its border:
/// corners keep their size, edges stretch along one axis, the center along both
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct NineSlice {
    pub texture: Texture,
    pub source: Rect,
    pub border: Border,
}

/// source and destination rectangle of one of the nine patches
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Patch {
    pub source: Rect,
    pub target: Rect,
}

impl Patch {
    /// per axis stretch from source to target, `None` for degenerate patches
    pub fn scale(&self) -> Option<V2> {
        if self.source.is_empty() || self.target.is_empty() {
            None
        } else {
            Some(V2::new(
                self.target.width / self.source.width,
                self.target.height / self.source.height,
            ))
        }
    }
}

/// cut points `[start, start + a, end - b, end]`, shrinking `a` and `b`
/// proportionally when they do not fit into `length`
fn cuts(start: Float, length: Float, a: Float, b: Float) -> [Float; 4] {
    let (a, b) = if a + b > length && a + b > 0.0 {
        let k = length / (a + b);
        (a * k, b * k)
    } else {
        (a, b)
    };
    [start, start + a, start + length - b, start + length]
}

impl NineSlice {
    pub fn new(texture: Texture, source: Rect, border: Border) -> NineSlice {
        NineSlice {
            texture,
            source,
            border,
        }
    }

    /// the nine patches row by row from the top left corner
    pub fn patches(&self, target: &Rect) -> [Patch; 9] {
        let b = &self.border;
        let sx = cuts(self.source.x, self.source.width, b.left, b.right);
        let sy = cuts(self.source.y, self.source.height, b.top, b.bottom);
        let tx = cuts(target.x, target.width, b.left, b.right);
        let ty = cuts(target.y, target.height, b.top, b.bottom);
        let patch = |i: usize| {
            let (col, row) = (i % 3, i / 3);
            Patch {
                source: Rect::new(sx[col], sy[row], sx[col + 1] - sx[col], sy[row + 1] - sy[row]),
                target: Rect::new(tx[col], ty[row], tx[col + 1] - tx[col], ty[row + 1] - ty[row]),
            }
        };
        [
            patch(0),
            patch(1),
            patch(2),
            patch(3),
            patch(4),
            patch(5),
            patch(6),
            patch(7),
            patch(8),
        ]
    }
}
