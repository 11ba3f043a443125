//! Minimum translation separation of two overlapping boxes.

use crate::geo::*;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Axis {
    X,
    Y,
}

/// raw penetration depths of `a` into `b` from each side
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Overlaps {
    /// `a.right - b.left`
    pub left: Float,
    /// `b.right - a.left`
    pub right: Float,
    /// `a.bottom - b.top`
    pub top: Float,
    /// `b.bottom - a.top`
    pub bottom: Float,
}

impl Overlaps {
    pub fn between(a: &Bounds, b: &Bounds) -> Overlaps {
        Overlaps {
            left: a.right - b.left,
            right: b.right - a.left,
            top: a.bottom - b.top,
            bottom: b.bottom - a.top,
        }
    }

    /// signed correction along x, positive pushes `a` out to the left
    pub fn x_correction(&self) -> Float {
        nearer_side(self.left, self.right)
    }

    /// signed correction along y, positive pushes `a` out over the top
    pub fn y_correction(&self) -> Float {
        nearer_side(self.top, self.bottom)
    }
}

/// the axis to resolve on and the signed correction along it
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Correction {
    pub axis: Axis,
    pub amount: Float,
}

impl Correction {
    /// what has to be added to the position of `a` to separate it from `b`
    pub fn displacement(&self) -> V2 {
        match self.axis {
            Axis::X => V2::new(-self.amount, 0.0),
            Axis::Y => V2::new(0.0, -self.amount),
        }
    }
}

/// picks the axis needing the smaller displacement, ties go to y
///
/// `None` when either box is empty or they do not overlap. A single call does
/// not guarantee full separation from several boxes at once.
pub fn resolve_overlap(a: &Bounds, b: &Bounds) -> Option<Correction> {
    if a.is_empty() || b.is_empty() || !a.does_collide(b) {
        return None;
    }
    let overlaps = Overlaps::between(a, b);
    let cx = overlaps.x_correction();
    let cy = overlaps.y_correction();
    if cx.abs() < cy.abs() {
        Some(Correction {
            axis: Axis::X,
            amount: cx,
        })
    } else {
        Some(Correction {
            axis: Axis::Y,
            amount: cy,
        })
    }
}
