use super::*;
use crate::collision_system::Collider;
use crate::render::{Camera, Renderer};
use std::any::{Any, TypeId};

/// handle of a component inside its owner, unique per game object
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ComponentKey(pub(crate) u32);

pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// behaviour attached to a game object
///
/// while `init` or `update` runs, the component is lifted out of its owner, so
/// it can freely borrow the world mutably. Looking itself up through the world
/// during that time yields nothing.
pub trait Component: AsAny + 'static {
    fn init(&mut self, _world: &mut World, _owner: ObjectId) {}

    fn update(&mut self, _world: &mut World, _owner: ObjectId, _dt: Float) {}

    /// collider capability, cached by the owner on attach
    fn as_collider(&self) -> Option<&Collider> {
        None
    }

    fn as_collider_mut(&mut self) -> Option<&mut Collider> {
        None
    }

    /// custom draw capability, cached by the owner on attach
    fn as_drawable(&self) -> Option<&dyn Drawable> {
        None
    }
}

/// replaces the default sprite draw of its owner
pub trait Drawable {
    fn draw(
        &self,
        world: &World,
        owner: ObjectId,
        renderer: &mut dyn Renderer,
        camera: &dyn Camera,
        dt: Float,
    );
}

/// the component is `None` while it is lifted out to run, its type stays known
pub(crate) struct ComponentSlot {
    pub(crate) key: ComponentKey,
    pub(crate) type_id: TypeId,
    pub(crate) component: Option<Box<dyn Component>>,
}

impl ComponentSlot {
    /// slot for `component` while it is still outside of it
    pub(crate) fn lifted(key: ComponentKey, component: &dyn Component) -> ComponentSlot {
        ComponentSlot {
            key,
            type_id: component.as_any().type_id(),
            component: None,
        }
    }

    pub(crate) fn get(&self) -> Option<&dyn Component> {
        self.component.as_deref()
    }

    pub(crate) fn get_mut(&mut self) -> Option<&mut (dyn Component + 'static)> {
        self.component.as_deref_mut()
    }

    pub(crate) fn is<T: Component>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }
}
