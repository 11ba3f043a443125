use super::*;

/// rectangle given by its top left corner and its extent
#[derive(Copy, Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: Float,
    pub y: Float,
    pub width: Float,
    pub height: Float,
}

impl Rect {
    pub const EMPTY: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: Float, y: Float, width: Float, height: Float) -> Rect {
        Rect {
            x,
            y,
            width: width.abs(),
            height: height.abs(),
        }
    }

    pub fn from_bounds(bounds: &Bounds) -> Rect {
        Rect::new(bounds.left, bounds.top, bounds.width(), bounds.height())
    }

    pub fn position(&self) -> V2 {
        V2::new(self.x, self.y)
    }

    pub fn size(&self) -> V2 {
        V2::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl HasBounds for Rect {
    fn get_bounds(&self) -> Bounds {
        Bounds {
            left: self.x,
            right: self.x + self.width,
            top: self.y,
            bottom: self.y + self.height,
        }
    }
}

impl Intersect<Rect> for Rect {
    type Intersection = Rect;

    fn intersect(&self, other: &Rect) -> Option<Rect> {
        self.get_bounds()
            .intersect(&other.get_bounds())
            .map(|b| Rect::from_bounds(&b))
    }
}

impl Contains for Rect {
    fn contains(&self, p: &V2) -> bool {
        self.get_bounds().contains(p)
    }
}

impl Distribution<Rect> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rect {
        let origin: V2 = rng.gen::<V2>() * 20.0 - V2::new(10.0, 10.0);
        Rect::new(
            origin.x,
            origin.y,
            rng.gen::<Float>() * 10.0,
            rng.gen::<Float>() * 10.0,
        )
    }
}
