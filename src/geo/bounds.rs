use super::*;

/// axis aligned bounds in screen space orientation: `top < bottom`
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub left: Float,
    pub right: Float,
    pub top: Float,
    pub bottom: Float,
}


impl Bounds {
    pub fn from_center_size(center: V2, size: V2) -> Bounds {
        let half = size * 0.5;
        Bounds {
            left: center.x - half.x,
            right: center.x + half.x,
            top: center.y - half.y,
            bottom: center.y + half.y,
        }
    }

    pub fn width(&self) -> Float {
        self.right - self.left
    }

    pub fn height(&self) -> Float {
        self.bottom - self.top
    }

    pub fn size(&self) -> V2 {
        V2::new(self.width(), self.height())
    }

    pub fn center(&self) -> V2 {
        V2::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// zero (or negative) width or height, used as the "uninitialized" sentinel
    pub fn is_empty(&self) -> bool {
        self.width() <= 0.0 || self.height() <= 0.0
    }

    pub fn translate(&self, delta: V2) -> Bounds {
        Bounds {
            left: self.left + delta.x,
            right: self.right + delta.x,
            top: self.top + delta.y,
            bottom: self.bottom + delta.y,
        }
    }
}

impl Intersect<Bounds> for Bounds {
    type Intersection = Bounds;

    /// half open overlap test, returns the overlapping region
    fn intersect(&self, other: &Bounds) -> Option<Bounds> {
        if self.is_empty() || other.is_empty() {
            return None;
        }
        if self.left < other.right
            && other.left < self.right
            && other.top < self.bottom
            && self.top < other.bottom
        {
            Some(Bounds {
                left: self.left.max(other.left),
                right: self.right.min(other.right),
                top: self.top.max(other.top),
                bottom: self.bottom.min(other.bottom),
            })
        } else {
            None
        }
    }
}

impl Contains for Bounds {
    fn contains(&self, p: &V2) -> bool {
        self.left <= p.x && p.x < self.right && self.top <= p.y && p.y < self.bottom
    }
}

impl Distribution<Bounds> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Bounds {
        let center: V2 = rng.gen::<V2>() * 20.0;
        let size: V2 = rng.gen::<V2>() * 10.0;
        Bounds::from_center_size(center, size)
    }
}
