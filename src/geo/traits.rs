use super::*;

/// wether a shape contains a point
pub trait Contains {
    fn contains(&self, p: &V2) -> bool;
}

pub trait Intersect<T> {
    type Intersection;

    fn intersect(&self, other: &T) -> Option<Self::Intersection>;

    fn does_collide(&self, other: &T) -> bool {
        self.intersect(other).is_some()
    }
}

/// axis aligned world space extent of a shape
pub trait HasBounds {
    fn get_bounds(&self) -> Bounds;
}
