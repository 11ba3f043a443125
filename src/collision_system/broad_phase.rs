use crate::geo::*;
use crate::object::{ObjectId, World};

/// broad phase: finds objects that may collide with something at `position`
pub trait SpatialQuery {
    fn nearby(&self, world: &World, position: V2) -> Vec<ObjectId>;
}

/// every live object owning a collider, in creation order
#[derive(Copy, Clone, Debug, Default)]
pub struct LinearScan;

impl SpatialQuery for LinearScan {
    fn nearby(&self, world: &World, _position: V2) -> Vec<ObjectId> {
        world.objects().filter(|&id| world.has_collider(id)).collect()
    }
}

/// objects owning a collider whose position lies within `radius`
#[derive(Copy, Clone, Debug)]
pub struct WithinRadius {
    pub radius: Float,
}

impl SpatialQuery for WithinRadius {
    fn nearby(&self, world: &World, position: V2) -> Vec<ObjectId> {
        let radius_sq = self.radius * self.radius;
        world
            .objects()
            .filter(|&id| world.has_collider(id))
            .filter(|&id| (world.position(id) - position).norm_squared() <= radius_sq)
            .collect()
    }
}
