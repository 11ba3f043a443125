use super::*;
use crate::collision_system::{Collider, LinearScan, SpatialQuery};
use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::render::{Camera, Renderer, SpriteDraw, Texture};
use crate::transform::{TransformId, TransformTree};
use std::cmp::Ordering;

/// owns every live game object together with its transform and components
///
/// objects are updated in creation order. Destroying objects while
/// `update_all` runs should go through `queue_destroy`, the queue is flushed
/// at the end of the pass.
pub struct World {
    config: EngineConfig,
    transforms: TransformTree,
    ids: IdAllocator,
    objects: Vec<Option<GameObject>>,
    order: Vec<ObjectId>,
    pending_destroy: Vec<ObjectId>,
    spatial: Box<dyn SpatialQuery>,
}

impl Default for World {
    fn default() -> Self {
        World::with_config(EngineConfig::default())
    }
}

impl World {
    pub fn new() -> World {
        World::default()
    }

    pub fn with_config(config: EngineConfig) -> World {
        World {
            config,
            transforms: TransformTree::new(),
            ids: IdAllocator::new(),
            objects: Vec::new(),
            order: Vec::new(),
            pending_destroy: Vec::new(),
            spatial: Box::new(LinearScan),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// replaces the broad phase used by colliders to find candidates
    pub fn set_spatial_query(&mut self, spatial: Box<dyn SpatialQuery>) {
        self.spatial = spatial;
    }

    /// candidates for collision tests around `position`
    pub fn nearby(&self, position: V2) -> Vec<ObjectId> {
        self.spatial.nearby(self, position)
    }

    pub fn transforms(&self) -> &TransformTree {
        &self.transforms
    }

    pub fn transforms_mut(&mut self) -> &mut TransformTree {
        &mut self.transforms
    }

    pub fn create(&mut self, desc: GameObjectDesc) -> Result<ObjectId> {
        let texture = match desc.texture {
            Some(texture) => texture,
            None => {
                log::error!("refusing to create a game object without a texture");
                return Err(EngineError::MissingTexture);
            }
        };
        let id = self.ids.allocate();
        let transform = self
            .transforms
            .spawn(desc.position, desc.sprite_size(&texture));
        self.transforms.set_visible(transform, desc.visible);
        let object = GameObject::new(id, transform, texture, &desc);
        let ix = id.index() as usize;
        if ix >= self.objects.len() {
            self.objects.resize_with(ix + 1, || None);
        }
        self.objects[ix] = Some(object);
        self.order.push(id);
        log::debug!("created game object {}", id);
        Ok(id)
    }

    /// removes the object, frees its identity and its transform
    ///
    /// the returned object is marked destroyed. Destroying a dead id does nothing.
    pub fn destroy(&mut self, id: ObjectId) -> Option<GameObject> {
        if !self.ids.release(id) {
            log::debug!("ignoring destroy of dead game object {}", id);
            return None;
        }
        let mut object = self.objects.get_mut(id.index() as usize)?.take()?;
        self.order.retain(|&live| live != id);
        self.transforms.despawn(object.transform());
        object.mark_destroyed();
        log::debug!("destroyed game object {}", id);
        Some(object)
    }

    pub fn queue_destroy(&mut self, id: ObjectId) {
        if !self.pending_destroy.contains(&id) {
            self.pending_destroy.push(id);
        }
    }

    pub fn flush_destroyed(&mut self) {
        for id in std::mem::take(&mut self.pending_destroy) {
            self.destroy(id);
        }
    }

    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.ids.is_live(id)
    }

    pub fn object(&self, id: ObjectId) -> Option<&GameObject> {
        self.objects
            .get(id.index() as usize)
            .and_then(|o| o.as_ref())
            .filter(|o| o.id() == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut GameObject> {
        self.objects
            .get_mut(id.index() as usize)
            .and_then(|o| o.as_mut())
            .filter(|o| o.id() == id)
    }

    /// live objects in creation order
    pub fn objects(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.order.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn transform_of(&self, id: ObjectId) -> Option<TransformId> {
        self.object(id).map(|o| o.transform())
    }

    pub fn position(&self, id: ObjectId) -> V2 {
        self.transform_of(id)
            .map(|t| self.transforms.position(t))
            .unwrap_or_else(V2::zeros)
    }

    pub fn set_position(&mut self, id: ObjectId, position: V2) {
        if let Some(t) = self.transform_of(id) {
            self.transforms.set_position(t, position);
        }
    }

    pub fn translate(&mut self, id: ObjectId, delta: V2) {
        if let Some(t) = self.transform_of(id) {
            self.transforms.translate(t, delta);
        }
    }

    pub fn size(&self, id: ObjectId) -> V2 {
        self.transform_of(id)
            .map(|t| self.transforms.size(t))
            .unwrap_or_else(V2::zeros)
    }

    pub fn set_size(&mut self, id: ObjectId, size: V2) {
        if let Some(t) = self.transform_of(id) {
            self.transforms.set_size(t, size);
        }
    }

    pub fn bounds(&self, id: ObjectId) -> Bounds {
        self.transform_of(id)
            .map(|t| self.transforms.bounds(t))
            .unwrap_or_default()
    }

    pub fn is_visible(&self, id: ObjectId) -> bool {
        self.transform_of(id)
            .map_or(false, |t| self.transforms.is_visible(t))
    }

    pub fn set_visible(&mut self, id: ObjectId, visible: bool) {
        if let Some(t) = self.transform_of(id) {
            self.transforms.set_visible(t, visible);
        }
    }

    /// attaches the transform of `child` below the transform of `parent`
    pub fn attach(&mut self, parent: ObjectId, child: ObjectId) {
        if let (Some(p), Some(c)) = (self.transform_of(parent), self.transform_of(child)) {
            self.transforms.add_child(p, c);
        }
    }

    pub fn detach(&mut self, parent: ObjectId, child: ObjectId) {
        if let (Some(p), Some(c)) = (self.transform_of(parent), self.transform_of(child)) {
            self.transforms.remove_child(p, c);
        }
    }

    pub fn texture(&self, id: ObjectId) -> Texture {
        self.object(id).map(|o| o.texture()).unwrap_or_default()
    }

    pub fn tint(&self, id: ObjectId) -> Color {
        self.object(id).map(|o| o.tint()).unwrap_or_default()
    }

    pub fn set_tint(&mut self, id: ObjectId, tint: Color) {
        if let Some(o) = self.object_mut(id) {
            o.set_tint(tint);
        }
    }

    pub fn flip(&self, id: ObjectId) -> bool {
        self.object(id).map_or(false, |o| o.flip())
    }

    pub fn set_flip(&mut self, id: ObjectId, flip: bool) {
        if let Some(o) = self.object_mut(id) {
            o.set_flip(flip);
        }
    }

    pub fn source_rect(&self, id: ObjectId) -> Option<Rect> {
        self.object(id).and_then(|o| o.source_rect())
    }

    pub fn set_source_rect(&mut self, id: ObjectId, source_rect: Option<Rect>) {
        if let Some(o) = self.object_mut(id) {
            o.set_source_rect(source_rect);
        }
    }

    pub fn add_component<T: Component + Default>(&mut self, owner: ObjectId) -> Result<ComponentKey> {
        self.attach_component(owner, T::default())
    }

    pub fn attach_component<T: Component>(&mut self, owner: ObjectId, component: T) -> Result<ComponentKey> {
        self.attach_boxed(owner, Box::new(component))
    }

    /// appends the component, runs its `init` and updates the capability caches
    ///
    /// the latest collider replaces the cached one, a second drawable is
    /// reported and the first one stays cached.
    pub fn attach_boxed(&mut self, owner: ObjectId, mut component: Box<dyn Component>) -> Result<ComponentKey> {
        let key = match self.object_mut(owner) {
            Some(object) => {
                let key = object.next_key();
                object.components.push(ComponentSlot::lifted(key, &*component));
                key
            }
            None => return Err(EngineError::UnknownObject(owner.index())),
        };
        component.init(self, owner);

        let is_collider = component.as_collider().is_some();
        let is_drawable = component.as_drawable().is_some();
        let object = match self.object_mut(owner) {
            Some(object) => object,
            None => return Ok(key),
        };
        match object.slot_mut(key) {
            Some(slot) => slot.component = Some(component),
            None => return Ok(key),
        }
        if is_collider && object.collider.replace(key).is_some() {
            log::debug!("game object {} replaced its cached collider", owner);
        }
        if is_drawable {
            if object.drawable.is_some() {
                log::error!(
                    "game object {} already has a drawable component, keeping the first one",
                    owner
                );
            } else {
                object.drawable = Some(key);
            }
        }
        Ok(key)
    }

    /// first component of type `T`, in attachment order
    pub fn get_component<T: Component>(&self, owner: ObjectId) -> Option<&T> {
        self.object(owner)?
            .components
            .iter()
            .filter_map(|slot| slot.get())
            .find_map(|c| c.as_any().downcast_ref::<T>())
    }

    pub fn get_component_mut<T: Component>(&mut self, owner: ObjectId) -> Option<&mut T> {
        self.object_mut(owner)?
            .components
            .iter_mut()
            .filter_map(|slot| slot.get_mut())
            .find_map(|c| c.as_any_mut().downcast_mut::<T>())
    }

    pub fn has_component<T: Component>(&self, owner: ObjectId) -> bool {
        self.get_component::<T>(owner).is_some()
    }

    pub fn component(&self, owner: ObjectId, key: ComponentKey) -> Option<&dyn Component> {
        self.object(owner)?.slot(key)?.get()
    }

    /// removes the first component of type `T`
    ///
    /// a cache is only cleared when the removed component is the cached one.
    /// A component removing itself from `init` or `update` is not returned,
    /// it is dropped once it finishes running.
    pub fn remove_component<T: Component>(&mut self, owner: ObjectId) -> Option<T> {
        let object = self.object_mut(owner)?;
        let ix = object.components.iter().position(|slot| slot.is::<T>())?;
        let slot = object.components.remove(ix);
        if object.collider == Some(slot.key) {
            object.collider = None;
        }
        if object.drawable == Some(slot.key) {
            object.drawable = None;
        }
        match slot.component {
            Some(component) => component.into_any().downcast::<T>().ok().map(|c| *c),
            None => {
                log::debug!("running component of {} removed itself", owner);
                None
            }
        }
    }

    /// the cached collider of `owner`
    pub fn collider(&self, owner: ObjectId) -> Option<&Collider> {
        let object = self.object(owner)?;
        object.slot(object.collider?)?.get()?.as_collider()
    }

    pub fn collider_mut(&mut self, owner: ObjectId) -> Option<&mut Collider> {
        let object = self.object_mut(owner)?;
        let key = object.collider?;
        object.slot_mut(key)?.get_mut()?.as_collider_mut()
    }

    pub fn has_collider(&self, owner: ObjectId) -> bool {
        self.object(owner).map_or(false, |o| o.collider.is_some())
    }

    /// world rectangle of the cached collider of `owner`
    pub fn collider_rect(&self, owner: ObjectId) -> Option<Rect> {
        self.collider(owner).map(|c| c.world_rect(&self.transforms))
    }

    fn take_component(&mut self, owner: ObjectId, key: ComponentKey) -> Option<Box<dyn Component>> {
        self.object_mut(owner)?.slot_mut(key)?.component.take()
    }

    fn restore_component(&mut self, owner: ObjectId, key: ComponentKey, component: Box<dyn Component>) {
        // the slot is gone when the component removed itself or its owner died
        if let Some(slot) = self.object_mut(owner).and_then(|o| o.slot_mut(key)) {
            slot.component = Some(component);
        }
    }

    /// updates every component of every live object, then flushes queued destroys
    pub fn update_all(&mut self, dt: Float) {
        let order = self.order.clone();
        for id in order {
            let keys = match self.object(id) {
                Some(object) => object.component_keys(),
                None => continue,
            };
            for key in keys {
                if let Some(mut component) = self.take_component(id, key) {
                    component.update(self, id, dt);
                    self.restore_component(id, key, component);
                }
            }
        }
        self.flush_destroyed();
    }

    /// back to front sort key: objects further down the screen are drawn later
    pub fn depth(&self, id: ObjectId) -> Float {
        match self.object(id) {
            Some(object) => {
                -self.position(id).y + object.sprite_height() / self.config.depth_divisor
            }
            None => 0.0,
        }
    }

    /// visible objects in the order `draw_all` draws them
    pub fn draw_order(&self, camera: &dyn Camera) -> Vec<ObjectId> {
        let mut visible: Vec<(Float, ObjectId)> = self
            .order
            .iter()
            .filter(|&&id| self.is_visible(id) && camera.is_position_visible(self.position(id)))
            .map(|&id| (self.depth(id), id))
            .collect();
        visible.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
        visible.into_iter().map(|(_, id)| id).collect()
    }

    pub fn draw_all(&self, dt: Float, renderer: &mut dyn Renderer, camera: &dyn Camera) {
        for id in self.draw_order(camera) {
            let object = match self.object(id) {
                Some(object) => object,
                None => continue,
            };
            let drawable = object
                .drawable
                .and_then(|key| object.slot(key))
                .and_then(|slot| slot.get())
                .and_then(|c| c.as_drawable());
            match drawable {
                Some(drawable) => drawable.draw(self, id, renderer, camera, dt),
                None => self.draw_sprite(object, renderer, camera),
            }
        }
    }

    fn draw_sprite(&self, object: &GameObject, renderer: &mut dyn Renderer, camera: &dyn Camera) {
        let id = object.id();
        renderer.draw_sprite(&SpriteDraw {
            texture: object.texture(),
            position: camera.world_to_screen(self.position(id)),
            source: object.source_rect(),
            tint: object.tint(),
            scale: V2::new(1.0, 1.0),
            flip: object.flip(),
            depth: self.depth(id),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision_system::{CollisionLayer, PhysicalBody};
    use crate::render::ViewportCamera;
    use std::cell::Cell;
    use std::rc::Rc;

    fn spawn(world: &mut World, position: V2) -> ObjectId {
        world
            .create(GameObjectDesc::new(position, Texture::new(1, 16, 16)))
            .unwrap()
    }

    struct Recorder(Vec<SpriteDraw>);

    impl Renderer for Recorder {
        fn draw_sprite(&mut self, sprite: &SpriteDraw) {
            self.0.push(*sprite);
        }
    }

    /// draws its owner with a fixed texture id
    #[derive(Default)]
    struct Outline(u32);

    impl Component for Outline {
        fn as_drawable(&self) -> Option<&dyn Drawable> {
            Some(self)
        }
    }

    impl Drawable for Outline {
        fn draw(
            &self,
            world: &World,
            owner: ObjectId,
            renderer: &mut dyn Renderer,
            camera: &dyn Camera,
            _dt: Float,
        ) {
            renderer.draw_sprite(&SpriteDraw {
                texture: Texture::new(self.0, 1, 1),
                position: camera.world_to_screen(world.position(owner)),
                source: None,
                tint: Color::BLACK,
                scale: V2::new(1.0, 1.0),
                flip: false,
                depth: world.depth(owner),
            });
        }
    }

    /// queues its owner for destruction on the first update
    #[derive(Default)]
    struct SelfDestruct {
        updates: u32,
    }

    impl Component for SelfDestruct {
        fn update(&mut self, world: &mut World, owner: ObjectId, _dt: Float) {
            self.updates += 1;
            world.queue_destroy(owner);
        }
    }

    #[test]
    fn creation_requires_a_texture() {
        let mut world = World::new();
        let desc = GameObjectDesc {
            position: V2::new(1.0, 2.0),
            ..GameObjectDesc::default()
        };
        assert!(matches!(world.create(desc), Err(EngineError::MissingTexture)));
        assert!(world.is_empty());
    }

    #[test]
    fn identities_are_recycled_with_a_new_generation() {
        let mut world = World::new();
        let a = spawn(&mut world, V2::new(3.0, 4.0));
        assert!(world.destroy(a).unwrap().is_destroyed());
        assert!(world.destroy(a).is_none());

        let b = spawn(&mut world, V2::new(7.0, 8.0));
        assert_eq!(a.index(), b.index());
        assert_ne!(a, b);
        assert!(!world.is_alive(a));
        assert!(world.object(a).is_none());
        assert_eq!(world.position(b), V2::new(7.0, 8.0));
    }

    #[test]
    fn dead_objects_read_as_defaults() {
        let mut world = World::new();
        let id = spawn(&mut world, V2::new(3.0, 4.0));
        world.set_tint(id, Color::BLACK);
        world.destroy(id);

        world.set_position(id, V2::new(9.0, 9.0));
        world.set_visible(id, true);
        assert_eq!(world.position(id), V2::zeros());
        assert_eq!(world.size(id), V2::zeros());
        assert_eq!(world.tint(id), Color::WHITE);
        assert_eq!(world.texture(id), Texture::default());
        assert!(!world.is_visible(id));
        assert!(!world.flip(id));
        assert!(world.source_rect(id).is_none());
        assert!(world.collider_rect(id).is_none());
        assert!(world
            .attach_component(id, SelfDestruct::default())
            .is_err());
    }

    #[test]
    fn sprite_sheet_region_sizes_the_transform() {
        let mut world = World::new();
        let desc = GameObjectDesc::new(V2::zeros(), Texture::new(2, 64, 64))
            .with_source_rect(Rect::new(16.0, 0.0, 16.0, 32.0))
            .flipped(true);
        let id = world.create(desc).unwrap();
        assert_eq!(world.size(id), V2::new(16.0, 32.0));
        assert!(world.flip(id));
    }

    #[test]
    fn latest_collider_is_cached() {
        let mut world = World::new();
        let id = spawn(&mut world, V2::zeros());
        world
            .attach_component(id, Collider::new(V2::new(4.0, 4.0), vec![CollisionLayer::Block]))
            .unwrap();
        world
            .attach_component(id, Collider::new(V2::new(8.0, 8.0), vec![CollisionLayer::Entity]))
            .unwrap();
        let cached = world.collider(id).unwrap();
        assert_eq!(cached.local_rect().size(), V2::new(8.0, 8.0));
        assert!(cached.has_layer(CollisionLayer::Entity));
        assert_eq!(
            world.collider_rect(id),
            Some(Rect::new(-4.0, -4.0, 8.0, 8.0))
        );
    }

    #[test]
    fn removing_an_uncached_component_keeps_the_cache() {
        let mut world = World::new();
        let id = spawn(&mut world, V2::zeros());
        world
            .attach_component(id, Collider::new(V2::new(4.0, 4.0), vec![CollisionLayer::Block]))
            .unwrap();
        world
            .attach_component(id, Collider::new(V2::new(8.0, 8.0), vec![CollisionLayer::Block]))
            .unwrap();

        // the first collider is not the cached one
        let removed = world.remove_component::<Collider>(id).unwrap();
        assert_eq!(removed.local_rect().size(), V2::new(4.0, 4.0));
        assert!(world.has_collider(id));
        assert_eq!(
            world.collider(id).unwrap().local_rect().size(),
            V2::new(8.0, 8.0)
        );

        assert!(world.remove_component::<Collider>(id).is_some());
        assert!(!world.has_collider(id));
        assert!(world.collider(id).is_none());
        assert!(world.remove_component::<Collider>(id).is_none());
    }

    #[test]
    fn first_drawable_wins() {
        let mut world = World::new();
        let id = spawn(&mut world, V2::new(10.0, 10.0));
        world.attach_component(id, Outline(7)).unwrap();
        world.attach_component(id, Outline(8)).unwrap();

        let camera = ViewportCamera::new(V2::zeros(), V2::new(320.0, 240.0));
        let mut recorder = Recorder(Vec::new());
        world.draw_all(0.016, &mut recorder, &camera);
        assert_eq!(recorder.0.len(), 1);
        assert_eq!(recorder.0[0].texture.id, 7);

        world.remove_component::<Outline>(id);
        let mut recorder = Recorder(Vec::new());
        world.draw_all(0.016, &mut recorder, &camera);
        assert_eq!(recorder.0[0].texture.id, 1);
    }

    #[test]
    fn draws_back_to_front_skipping_hidden_and_culled() {
        let mut world = World::new();
        let low = spawn(&mut world, V2::new(10.0, 50.0));
        let high = spawn(&mut world, V2::new(10.0, 10.0));
        let middle = spawn(&mut world, V2::new(10.0, 30.0));
        let hidden = spawn(&mut world, V2::new(10.0, 20.0));
        world.set_visible(hidden, false);
        spawn(&mut world, V2::new(1000.0, 20.0));

        let camera = ViewportCamera::new(V2::zeros(), V2::new(320.0, 240.0));
        assert_eq!(world.draw_order(&camera), vec![high, middle, low]);
        assert_eq!(world.depth(high), -10.0 + 1.0);

        let mut recorder = Recorder(Vec::new());
        world.draw_all(0.016, &mut recorder, &camera);
        let ys: Vec<Float> = recorder.0.iter().map(|s| s.position.y).collect();
        assert_eq!(ys, vec![10.0, 30.0, 50.0]);
    }

    #[test]
    fn hidden_parent_hides_attached_children() {
        let mut world = World::new();
        let parent = spawn(&mut world, V2::new(10.0, 10.0));
        let child = spawn(&mut world, V2::new(20.0, 10.0));
        world.attach(parent, child);
        world.set_visible(parent, false);
        assert!(!world.is_visible(child));

        world.set_position(parent, V2::new(0.0, 0.0));
        assert_eq!(world.position(child), V2::new(10.0, 0.0));

        world.detach(parent, child);
        assert!(world.is_visible(child));
    }

    /// removes itself from its owner on the first update
    struct OneShot {
        runs: Rc<Cell<u32>>,
    }

    impl Component for OneShot {
        fn update(&mut self, world: &mut World, owner: ObjectId, _dt: Float) {
            self.runs.set(self.runs.get() + 1);
            assert!(world.remove_component::<OneShot>(owner).is_none());
        }
    }

    #[test]
    fn running_component_can_remove_itself() {
        let mut world = World::new();
        let id = spawn(&mut world, V2::zeros());
        let runs = Rc::new(Cell::new(0));
        world
            .attach_component(id, OneShot { runs: runs.clone() })
            .unwrap();
        assert!(world.has_component::<OneShot>(id));

        world.update_all(0.016);
        assert_eq!(runs.get(), 1);
        assert!(!world.has_component::<OneShot>(id));
        assert!(world.object(id).unwrap().component_keys().is_empty());

        world.update_all(0.016);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn removal_by_type_skips_other_types() {
        let mut world = World::new();
        let id = spawn(&mut world, V2::zeros());
        world.attach_component(id, Outline(3)).unwrap();
        world.add_component::<SelfDestruct>(id).unwrap();
        assert!(world.remove_component::<Collider>(id).is_none());
        assert!(world.remove_component::<SelfDestruct>(id).is_some());
        assert_eq!(world.get_component::<Outline>(id).map(|o| o.0), Some(3));
        assert_eq!(world.object(id).unwrap().component_keys().len(), 1);
    }

    #[test]
    fn queued_destroys_run_after_the_pass() {
        let mut world = World::new();
        let doomed = spawn(&mut world, V2::zeros());
        let survivor = spawn(&mut world, V2::zeros());
        world.add_component::<SelfDestruct>(doomed).unwrap();
        world.update_all(0.016);
        assert!(!world.is_alive(doomed));
        assert!(world.is_alive(survivor));
        assert_eq!(world.objects().collect::<Vec<_>>(), vec![survivor]);
    }

    #[test]
    fn body_slides_along_a_wall() {
        let config = EngineConfig {
            damping: 1.0,
            ..EngineConfig::default()
        };
        let mut world = World::with_config(config);
        let square = Rect::new(0.0, 0.0, 10.0, 10.0);
        // bounds [0,0]-[10,10] next to a tall wall at [12,0]-[22,100]
        let body = spawn(&mut world, V2::new(0.0, 10.0));
        let wall = spawn(&mut world, V2::new(12.0, 100.0));
        world
            .attach_component(body, Collider::with_rect(square, vec![CollisionLayer::Block]))
            .unwrap();
        world.attach_component(body, PhysicalBody::new(1.0)).unwrap();
        world
            .attach_component(
                wall,
                Collider::with_rect(Rect::new(0.0, 0.0, 10.0, 100.0), vec![CollisionLayer::Block]),
            )
            .unwrap();
        world
            .get_component_mut::<PhysicalBody>(body)
            .unwrap()
            .move_by(4.0, 3.0);

        world.update_all(1.0);
        assert_eq!(world.position(body), V2::new(4.0, 13.0));

        // pushed back by 2 along x, keeps moving along y
        world.update_all(1.0);
        assert_eq!(world.position(body), V2::new(2.0, 16.0));
        assert_eq!(
            world.get_component::<PhysicalBody>(body).unwrap().normal_force(),
            V2::new(0.0, 3.0)
        );
    }

    #[test]
    fn worlds_are_independent() {
        let mut first = World::new();
        let mut second = World::new();
        let a = spawn(&mut first, V2::new(1.0, 1.0));
        let b = spawn(&mut second, V2::new(2.0, 2.0));
        assert_eq!(a, b);
        first.destroy(a);
        assert!(second.is_alive(b));
        assert_eq!(second.position(b), V2::new(2.0, 2.0));
        assert_eq!(first.len(), 0);
        assert_eq!(second.len(), 1);
    }
}
