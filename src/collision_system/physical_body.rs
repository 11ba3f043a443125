use super::collider::{Collider, CollisionLayer};
use super::events::*;
use super::resolve::*;
use crate::geo::*;
use crate::object::{Component, ObjectId, World};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum MotionState {
    Idle,
    Moving,
}

/// force driven movement that is pushed out of `Block` colliders
///
/// needs a `Collider` on the same object, attached before the body. The block
/// handler stays subscribed for the lifetime of the collider. That collider
/// must be on the `Block` layer to hear walls, which also makes the body a
/// wall for other bodies.
#[derive(Clone, PartialEq, Debug)]
pub struct PhysicalBody {
    normal_force: V2,
    move_direction: V2,
    move_speed: Float,
    max_force: V2,
    damping: Float,
    stop_decay: Float,
    subscription: Option<HandlerId>,
}

impl Default for PhysicalBody {
    fn default() -> Self {
        PhysicalBody::new(1.0)
    }
}

impl PhysicalBody {
    /// the force cap, damping and stop decay are taken from the world config on attach
    pub fn new(move_speed: Float) -> PhysicalBody {
        PhysicalBody {
            normal_force: V2::zeros(),
            move_direction: V2::zeros(),
            move_speed,
            max_force: V2::new(10.0, 10.0),
            damping: 0.95,
            stop_decay: 0.8,
            subscription: None,
        }
    }

    pub fn normal_force(&self) -> V2 {
        self.normal_force
    }

    pub fn set_normal_force(&mut self, force: V2) {
        self.normal_force = force;
    }

    /// unit direction of the last update, y pointing up
    pub fn move_direction(&self) -> V2 {
        self.move_direction
    }

    pub fn move_speed(&self) -> Float {
        self.move_speed
    }

    pub fn set_move_speed(&mut self, move_speed: Float) {
        self.move_speed = move_speed;
    }

    pub fn max_force(&self) -> V2 {
        self.max_force
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn motion_state(&self) -> MotionState {
        if self.normal_force.norm() < EPSILON {
            MotionState::Idle
        } else {
            MotionState::Moving
        }
    }

    /// adds an impulse scaled by the move speed
    pub fn move_by(&mut self, dx: Float, dy: Float) {
        self.normal_force += V2::new(dx, dy) * self.move_speed;
    }

    /// decays the force, an axis below unit magnitude snaps to zero
    pub fn stop(&mut self) {
        let k = self.stop_decay;
        let decay = |f: Float| if f.abs() < 1.0 { 0.0 } else { f * k };
        self.normal_force = V2::new(decay(self.normal_force.x), decay(self.normal_force.y));
    }

    fn zero_axis(&mut self, axis: Axis) {
        match axis {
            Axis::X => self.normal_force.x = 0.0,
            Axis::Y => self.normal_force.y = 0.0,
        }
    }

    /// pushes the owner out of the block it ran into and cancels the force
    /// along the resolved axis, the other axis keeps sliding
    pub fn on_block_collision(world: &mut World, event: &CollisionEvent) {
        let own = event.collider.world_bounds(world.transforms());
        let other = match world.collider_rect(event.other) {
            Some(rect) => rect.get_bounds(),
            None => return,
        };
        let correction = match resolve_overlap(&own, &other) {
            Some(correction) => correction,
            None => return,
        };
        log::trace!(
            "resolving {} out of {} along {:?} by {}",
            event.owner,
            event.other,
            correction.axis,
            correction.amount
        );
        world.translate(event.owner, correction.displacement());
        if let Some(body) = world.get_component_mut::<PhysicalBody>(event.owner) {
            body.zero_axis(correction.axis);
        }
    }
}

impl Component for PhysicalBody {
    fn init(&mut self, world: &mut World, owner: ObjectId) {
        let config = world.config();
        self.max_force = config.max_force;
        self.damping = config.damping;
        self.stop_decay = config.stop_decay;
        match world.collider_mut(owner) {
            Some(collider) => {
                let id = collider.subscribe(CollisionType::Block, PhysicalBody::on_block_collision);
                self.subscription = Some(id);
            }
            None => log::warn!(
                "physical body on {} has no collider, collisions will not be resolved",
                owner
            ),
        }
    }

    fn update(&mut self, world: &mut World, owner: ObjectId, dt: Float) {
        self.normal_force = clamp_box(self.normal_force, self.max_force);
        self.move_direction =
            normalize_or_zero(V2::new(self.normal_force.x, -self.normal_force.y));
        self.normal_force *= self.damping;
        world.translate(owner, self.normal_force * dt);
    }
}

/// whether the cached collider of `id` blocks physical bodies
pub fn is_solid(world: &World, id: ObjectId) -> bool {
    world
        .collider(id)
        .map_or(false, |c: &Collider| c.has_layer(CollisionLayer::Block))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::object::GameObjectDesc;
    use crate::render::Texture;

    fn spawn(world: &mut World, position: V2) -> ObjectId {
        world
            .create(GameObjectDesc::new(position, Texture::new(1, 16, 16)))
            .unwrap()
    }

    #[test]
    fn stop_snaps_small_forces() {
        let mut body = PhysicalBody::new(1.0);
        body.stop();
        assert_eq!(body.normal_force(), V2::zeros());
        assert_eq!(body.motion_state(), MotionState::Idle);

        body.set_normal_force(V2::new(0.5, -0.99));
        body.stop();
        assert_eq!(body.normal_force(), V2::zeros());

        body.set_normal_force(V2::new(5.0, 0.5));
        body.stop();
        assert_eq!(body.normal_force(), V2::new(4.0, 0.0));
        assert_eq!(body.motion_state(), MotionState::Moving);
    }

    #[test]
    fn stop_eventually_idles() {
        let mut body = PhysicalBody::new(1.0);
        body.set_normal_force(V2::new(-9.0, 7.0));
        for _ in 0..20 {
            body.stop();
        }
        assert_eq!(body.motion_state(), MotionState::Idle);
    }

    #[quickcheck]
    fn force_is_clamped_after_update(moves: Vec<(i8, i8)>) -> bool {
        let mut world = World::new();
        let id = spawn(&mut world, V2::zeros());
        world.attach_component(id, PhysicalBody::new(3.0)).unwrap();
        for (dx, dy) in moves {
            world
                .get_component_mut::<PhysicalBody>(id)
                .unwrap()
                .move_by(dx as Float, dy as Float);
            world.update_all(0.016);
        }
        let body = world.get_component::<PhysicalBody>(id).unwrap();
        let f = body.normal_force();
        f.x.abs() <= body.max_force().x && f.y.abs() <= body.max_force().y
    }

    #[test]
    fn update_integrates_damped_force() {
        let mut world = World::new();
        let id = spawn(&mut world, V2::new(1.0, 1.0));
        world.attach_component(id, PhysicalBody::new(2.0)).unwrap();
        world
            .get_component_mut::<PhysicalBody>(id)
            .unwrap()
            .move_by(10.0, 1.0);
        world.update_all(1.0);
        let body = world.get_component::<PhysicalBody>(id).unwrap();
        // (20, 2) is clamped to (10, 2) and damped
        assert!((body.normal_force() - V2::new(9.5, 1.9)).norm() < EPSILON);
        assert!((world.position(id) - V2::new(10.5, 2.9)).norm() < EPSILON);
        let dir = body.move_direction();
        assert!((dir.norm() - 1.0).abs() < EPSILON);
        assert!(dir.x > 0.0 && dir.y < 0.0);
    }

    #[test]
    fn config_drives_the_limits() {
        let config = EngineConfig {
            max_force: V2::new(2.0, 3.0),
            damping: 1.0,
            ..EngineConfig::default()
        };
        let mut world = World::with_config(config);
        let id = spawn(&mut world, V2::zeros());
        world.attach_component(id, PhysicalBody::new(1.0)).unwrap();
        world
            .get_component_mut::<PhysicalBody>(id)
            .unwrap()
            .move_by(-50.0, 50.0);
        world.update_all(1.0);
        assert_eq!(
            world.get_component::<PhysicalBody>(id).unwrap().normal_force(),
            V2::new(-2.0, 3.0)
        );
        assert_eq!(world.position(id), V2::new(-2.0, 3.0));
    }

    #[test]
    fn body_without_collider_is_not_subscribed() {
        let mut world = World::new();
        let id = spawn(&mut world, V2::zeros());
        world.attach_component(id, PhysicalBody::new(1.0)).unwrap();
        assert!(!world.get_component::<PhysicalBody>(id).unwrap().is_subscribed());
        assert!(!is_solid(&world, id));
    }

    #[test]
    fn block_collision_pushes_out_along_shallow_axis() {
        let mut world = World::new();
        // collider rect (0, 0, 10, 10) is bottom anchored, so these give
        // world bounds [0,0]-[10,10] and [8,2]-[18,12]
        let a = spawn(&mut world, V2::new(0.0, 10.0));
        let wall = spawn(&mut world, V2::new(8.0, 12.0));
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        world
            .attach_component(a, Collider::with_rect(rect, vec![CollisionLayer::Block]))
            .unwrap();
        world.attach_component(a, PhysicalBody::new(1.0)).unwrap();
        world
            .attach_component(wall, Collider::with_rect(rect, vec![CollisionLayer::Block]))
            .unwrap();
        assert!(is_solid(&world, wall));

        let body = world.get_component_mut::<PhysicalBody>(a).unwrap();
        assert!(body.is_subscribed());
        body.set_normal_force(V2::new(4.0, 6.0));

        // resolve directly so integration does not blur the numbers
        let event = CollisionEvent {
            owner: a,
            other: wall,
            kind: CollisionType::Block,
            collider: world.collider(a).unwrap().info().unwrap(),
        };
        PhysicalBody::on_block_collision(&mut world, &event);
        assert_eq!(world.position(a), V2::new(-2.0, 10.0));
        assert_eq!(
            world.get_component::<PhysicalBody>(a).unwrap().normal_force(),
            V2::new(0.0, 6.0)
        );

        // no longer overlapping, so a second resolution does nothing
        PhysicalBody::on_block_collision(&mut world, &event);
        assert_eq!(world.position(a), V2::new(-2.0, 10.0));
    }
}
