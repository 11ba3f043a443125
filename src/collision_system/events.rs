use super::collider::ColliderInfo;
use crate::object::{ObjectId, World};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum CollisionType {
    /// fired for every collision, after the typed event
    All,
    Block,
    Entity,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct HandlerId(u64);

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CollisionEvent {
    /// object whose collider detected the overlap
    pub owner: ObjectId,
    pub other: ObjectId,
    pub kind: CollisionType,
    /// collider of `owner`, its world rectangle is read from the live transform
    pub collider: ColliderInfo,
}

pub type CollisionHandler = Box<dyn FnMut(&mut World, &CollisionEvent)>;

/// ordered multicast handler lists, one per collision type
#[derive(Default)]
pub struct ColliderEventSystem {
    next_id: u64,
    handlers: BTreeMap<CollisionType, Vec<(HandlerId, CollisionHandler)>>,
}

impl ColliderEventSystem {
    pub fn new() -> ColliderEventSystem {
        ColliderEventSystem::default()
    }

    pub fn subscribe<F>(&mut self, kind: CollisionType, handler: F) -> HandlerId
    where
        F: FnMut(&mut World, &CollisionEvent) + 'static,
    {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers
            .entry(kind)
            .or_default()
            .push((id, Box::new(handler)));
        id
    }

    /// removing a handler that is not subscribed to `kind` does nothing
    pub fn unsubscribe(&mut self, kind: CollisionType, id: HandlerId) -> bool {
        match self.handlers.get_mut(&kind) {
            Some(list) => {
                let before = list.len();
                list.retain(|(h, _)| *h != id);
                before != list.len()
            }
            None => false,
        }
    }

    pub fn handler_count(&self, kind: CollisionType) -> usize {
        self.handlers.get(&kind).map_or(0, |list| list.len())
    }

    /// calls every handler of `kind` in subscription order
    pub fn fire(&mut self, kind: CollisionType, world: &mut World, event: &CollisionEvent) {
        if let Some(list) = self.handlers.get_mut(&kind) {
            let event = CollisionEvent { kind, ..*event };
            for (_, handler) in list.iter_mut() {
                handler(world, &event);
            }
        }
    }
}
