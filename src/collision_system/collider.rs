use super::events::*;
use crate::geo::*;
use crate::object::{Component, ObjectId, World};
use crate::transform::{TransformId, TransformTree};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// semantic category a collider belongs to
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum CollisionLayer {
    Block,
    Entity,
}

impl CollisionLayer {
    pub fn collision_type(self) -> CollisionType {
        match self {
            CollisionLayer::Block => CollisionType::Block,
            CollisionLayer::Entity => CollisionType::Entity,
        }
    }
}

/// local rectangle bound to a transform
///
/// the local origin is bottom anchored: the world rectangle starts `height`
/// above `transform.position + (rect.x, rect.y)`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ColliderInfo {
    pub transform: TransformId,
    pub rect: Rect,
}

impl ColliderInfo {
    pub fn new(transform: TransformId, rect: Rect) -> ColliderInfo {
        ColliderInfo { transform, rect }
    }

    /// `Rect::EMPTY` once the transform is gone
    pub fn world_rect(&self, transforms: &TransformTree) -> Rect {
        if !transforms.contains(self.transform) {
            return Rect::EMPTY;
        }
        let p = transforms.position(self.transform);
        Rect {
            x: p.x + self.rect.x,
            y: p.y + self.rect.y - self.rect.height,
            width: self.rect.width,
            height: self.rect.height,
        }
    }

    pub fn world_bounds(&self, transforms: &TransformTree) -> Bounds {
        self.world_rect(transforms).get_bounds()
    }
}

/// collision component: a rectangle, the layers it lives on and the
/// handlers interested in what it touches
#[derive(Default)]
pub struct Collider {
    info: Option<ColliderInfo>,
    rect: Rect,
    layers: BTreeSet<CollisionLayer>,
    events: ColliderEventSystem,
}

impl Collider {
    /// a `size` rectangle centered on the owner's position
    pub fn new<I>(size: V2, layers: I) -> Collider
    where
        I: IntoIterator<Item = CollisionLayer>,
    {
        let rect = Rect::new(-size.x * 0.5, size.y * 0.5, size.x, size.y);
        Collider::with_rect(rect, layers)
    }

    pub fn with_rect<I>(rect: Rect, layers: I) -> Collider
    where
        I: IntoIterator<Item = CollisionLayer>,
    {
        Collider {
            info: None,
            rect,
            layers: layers.into_iter().collect(),
            events: ColliderEventSystem::new(),
        }
    }

    /// `None` until the collider is attached to a game object
    pub fn info(&self) -> Option<ColliderInfo> {
        self.info
    }

    pub fn local_rect(&self) -> Rect {
        self.rect
    }

    pub fn layers(&self) -> &BTreeSet<CollisionLayer> {
        &self.layers
    }

    pub fn has_layer(&self, layer: CollisionLayer) -> bool {
        self.layers.contains(&layer)
    }

    pub fn shared_layers(&self, other: &Collider) -> Vec<CollisionLayer> {
        self.layers.intersection(&other.layers).copied().collect()
    }

    pub fn world_rect(&self, transforms: &TransformTree) -> Rect {
        self.info
            .map(|info| info.world_rect(transforms))
            .unwrap_or(Rect::EMPTY)
    }

    pub fn events(&self) -> &ColliderEventSystem {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut ColliderEventSystem {
        &mut self.events
    }

    pub fn subscribe<F>(&mut self, kind: CollisionType, handler: F) -> HandlerId
    where
        F: FnMut(&mut World, &CollisionEvent) + 'static,
    {
        self.events.subscribe(kind, handler)
    }

    pub fn unsubscribe(&mut self, kind: CollisionType, id: HandlerId) -> bool {
        self.events.unsubscribe(kind, id)
    }
}

impl Component for Collider {
    fn init(&mut self, world: &mut World, owner: ObjectId) {
        if let Some(object) = world.object(owner) {
            self.info = Some(ColliderInfo::new(object.transform(), self.rect));
        }
    }

    /// tests the candidates of the broad phase and fires the typed event
    /// followed by `All` for every overlapping one
    ///
    /// typed events follow the layers both colliders are on, so a collider
    /// only hears `Block` from a wall when it is on the `Block` layer itself.
    /// Candidates sharing no layer fire nothing, not even `All`.
    fn update(&mut self, world: &mut World, owner: ObjectId, _dt: Float) {
        let info = match self.info {
            Some(info) => info,
            None => return,
        };
        let own = info.world_rect(world.transforms());
        if own.is_empty() {
            return;
        }
        let center = own.get_bounds().center();
        for other in world.nearby(center) {
            if other == owner {
                continue;
            }
            let shared = match world.collider(other) {
                Some(collider) => self.shared_layers(collider),
                None => continue,
            };
            if shared.is_empty() {
                continue;
            }
            let other_rect = match world.collider_rect(other) {
                Some(rect) => rect,
                None => continue,
            };
            // an earlier handler may have moved us
            let own = info.world_rect(world.transforms());
            if !own.does_collide(&other_rect) {
                continue;
            }
            log::trace!("collision between {} and {}", owner, other);
            let event = CollisionEvent {
                owner,
                other,
                kind: CollisionType::All,
                collider: info,
            };
            for layer in shared {
                self.events.fire(layer.collision_type(), world, &event);
            }
            self.events.fire(CollisionType::All, world, &event);
        }
    }

    fn as_collider(&self) -> Option<&Collider> {
        Some(self)
    }

    fn as_collider_mut(&mut self) -> Option<&mut Collider> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::GameObjectDesc;
    use crate::render::Texture;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn spawn(world: &mut World, position: V2) -> ObjectId {
        world
            .create(GameObjectDesc::new(position, Texture::new(1, 16, 16)))
            .unwrap()
    }

    #[test]
    fn world_rect_is_bottom_anchored() {
        let mut transforms = TransformTree::new();
        let t = transforms.spawn(V2::new(3.0, 10.0), V2::new(1.0, 1.0));
        let info = ColliderInfo::new(t, Rect::new(1.0, 2.0, 4.0, 5.0));
        assert_eq!(info.world_rect(&transforms), Rect::new(4.0, 7.0, 4.0, 5.0));
        transforms.despawn(t);
        assert_eq!(info.world_rect(&transforms), Rect::EMPTY);
    }

    #[test]
    fn world_rect_round_trip() {
        let mut rng = rand::thread_rng();
        let mut transforms = TransformTree::new();
        for _ in 0..1000 {
            let p: V2 = rng.gen::<V2>() * 100.0;
            let r: Rect = rng.gen();
            let t = transforms.spawn(p, V2::new(1.0, 1.0));
            let world = ColliderInfo::new(t, r).world_rect(&transforms);
            assert_eq!(world, Rect {
                x: r.x + p.x,
                y: r.y + p.y - r.height,
                width: r.width,
                height: r.height,
            });
            transforms.despawn(t);
        }
    }

    #[test]
    fn centered_collider() {
        let mut world = World::new();
        let id = spawn(&mut world, V2::new(10.0, 10.0));
        world
            .attach_component(id, Collider::new(V2::new(4.0, 2.0), vec![CollisionLayer::Block]))
            .unwrap();
        let rect = world.collider_rect(id).unwrap();
        assert_eq!(rect.get_bounds().center(), V2::new(10.0, 10.0));
        assert_eq!(rect.size(), V2::new(4.0, 2.0));
    }

    #[test]
    fn layers_are_deduplicated() {
        let collider = Collider::new(
            V2::new(1.0, 1.0),
            vec![CollisionLayer::Block, CollisionLayer::Entity, CollisionLayer::Block],
        );
        assert_eq!(collider.layers().len(), 2);
        assert!(collider.has_layer(CollisionLayer::Entity));
    }

    #[test]
    fn unbound_collider_is_empty() {
        let collider = Collider::new(V2::new(5.0, 5.0), vec![CollisionLayer::Block]);
        assert!(collider.info().is_none());
        assert!(collider.world_rect(&TransformTree::new()).is_empty());
    }

    #[test]
    fn typed_event_fires_before_all() {
        let mut world = World::new();
        let a = spawn(&mut world, V2::new(0.0, 0.0));
        let b = spawn(&mut world, V2::new(1.0, 0.0));
        let far = spawn(&mut world, V2::new(100.0, 0.0));
        let layers = vec![CollisionLayer::Block];
        world
            .attach_component(a, Collider::new(V2::new(4.0, 4.0), layers.clone()))
            .unwrap();
        world
            .attach_component(b, Collider::new(V2::new(4.0, 4.0), layers.clone()))
            .unwrap();
        world
            .attach_component(far, Collider::new(V2::new(4.0, 4.0), layers))
            .unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        for kind in [CollisionType::All, CollisionType::Block, CollisionType::Entity] {
            let seen = seen.clone();
            world.collider_mut(a).unwrap().subscribe(kind, move |_, ev| {
                seen.borrow_mut().push((ev.kind, ev.other))
            });
        }
        world.update_all(0.016);
        assert_eq!(
            *seen.borrow(),
            vec![(CollisionType::Block, b), (CollisionType::All, b)]
        );
    }

    #[test]
    fn typed_events_follow_shared_layers() {
        let mut world = World::new();
        let body = spawn(&mut world, V2::zeros());
        let wall = spawn(&mut world, V2::new(1.0, 0.0));
        world
            .attach_component(
                body,
                Collider::new(V2::new(4.0, 4.0), vec![CollisionLayer::Entity, CollisionLayer::Block]),
            )
            .unwrap();
        world
            .attach_component(wall, Collider::new(V2::new(4.0, 4.0), vec![CollisionLayer::Block]))
            .unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        for kind in [CollisionType::All, CollisionType::Block, CollisionType::Entity] {
            let seen = seen.clone();
            world.collider_mut(body).unwrap().subscribe(kind, move |_, ev| {
                seen.borrow_mut().push(ev.kind)
            });
        }
        world.update_all(0.016);
        assert_eq!(*seen.borrow(), vec![CollisionType::Block, CollisionType::All]);
    }

    #[test]
    fn disjoint_layers_do_not_collide() {
        let mut world = World::new();
        let a = spawn(&mut world, V2::zeros());
        let b = spawn(&mut world, V2::zeros());
        world
            .attach_component(a, Collider::new(V2::new(4.0, 4.0), vec![CollisionLayer::Block]))
            .unwrap();
        world
            .attach_component(b, Collider::new(V2::new(4.0, 4.0), vec![CollisionLayer::Entity]))
            .unwrap();
        let hits = Rc::new(RefCell::new(0));
        let counter = hits.clone();
        world
            .collider_mut(a)
            .unwrap()
            .subscribe(CollisionType::All, move |_, _| *counter.borrow_mut() += 1);
        world.update_all(0.016);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn empty_collider_never_collides() {
        let mut world = World::new();
        let a = spawn(&mut world, V2::zeros());
        let b = spawn(&mut world, V2::zeros());
        world
            .attach_component(a, Collider::new(V2::new(4.0, 4.0), vec![CollisionLayer::Block]))
            .unwrap();
        world
            .attach_component(b, Collider::new(V2::zeros(), vec![CollisionLayer::Block]))
            .unwrap();
        let hits = Rc::new(RefCell::new(0));
        let counter = hits.clone();
        world
            .collider_mut(a)
            .unwrap()
            .subscribe(CollisionType::All, move |_, _| *counter.borrow_mut() += 1);
        world.update_all(0.016);
        assert_eq!(*hits.borrow(), 0);
    }
}
