//! Transform hierarchy.
//!
//! Transforms live in a [`TransformTree`] arena and refer to each other by
//! [`TransformId`]. A parent never owns its children: despawning a parent
//! orphans them, it does not despawn them.

use crate::geo::*;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct TransformId {
    index: u32,
    generation: u32,
}

impl TransformId {
    pub fn index(&self) -> u32 {
        self.index
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Transform {
    position: V2,
    size: V2,
    visible: bool,
    bounds: Bounds,
    children: Vec<TransformId>,
    parent: Option<TransformId>,
}

impl Transform {
    fn new(position: V2, size: V2) -> Transform {
        Transform {
            position,
            size,
            visible: true,
            bounds: Bounds::from_center_size(position, size),
            children: Vec::new(),
            parent: None,
        }
    }

    fn recompute_bounds(&mut self) {
        self.bounds = Bounds::from_center_size(self.position, self.size);
    }

    pub fn position(&self) -> V2 {
        self.position
    }

    pub fn size(&self) -> V2 {
        self.size
    }

    /// the node's own flag, ignoring its ancestors
    pub fn own_visible(&self) -> bool {
        self.visible
    }

    pub fn children(&self) -> &[TransformId] {
        &self.children
    }

    pub fn parent(&self) -> Option<TransformId> {
        self.parent
    }

    /// `position ± size / 2`, top is the smaller y
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}


struct Slot {
    generation: u32,
    transform: Option<Transform>,
}

#[derive(Default)]
pub struct TransformTree {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl TransformTree {
    pub fn new() -> TransformTree {
        TransformTree::default()
    }

    pub fn spawn(&mut self, position: V2, size: V2) -> TransformId {
        let transform = Some(Transform::new(position, size));
        match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                slot.transform = transform;
                TransformId {
                    index,
                    generation: slot.generation,
                }
            }
            None => {
                self.slots.push(Slot {
                    generation: 0,
                    transform,
                });
                TransformId {
                    index: (self.slots.len() - 1) as u32,
                    generation: 0,
                }
            }
        }
    }

    /// removes a node, detaching it from its parent and orphaning its children
    pub fn despawn(&mut self, id: TransformId) -> Option<Transform> {
        let parent = self.get(id)?.parent;
        if let Some(parent) = parent {
            self.remove_child(parent, id);
        }
        let slot = &mut self.slots[id.index as usize];
        let mut transform = slot.transform.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index);
        for child in transform.children.drain(..) {
            if let Some(c) = self.get_mut(child) {
                c.parent = None;
            }
        }
        Some(transform)
    }

    pub fn get(&self, id: TransformId) -> Option<&Transform> {
        self.slots
            .get(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.transform.as_ref())
    }

    fn get_mut(&mut self, id: TransformId) -> Option<&mut Transform> {
        self.slots
            .get_mut(id.index as usize)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.transform.as_mut())
    }

    pub fn contains(&self, id: TransformId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn position(&self, id: TransformId) -> V2 {
        self.get(id).map(|t| t.position).unwrap_or_else(V2::zeros)
    }

    pub fn size(&self, id: TransformId) -> V2 {
        self.get(id).map(|t| t.size).unwrap_or_else(V2::zeros)
    }

    pub fn bounds(&self, id: TransformId) -> Bounds {
        self.get(id).map(Transform::bounds).unwrap_or_default()
    }

    /// moves the node to `position` and shifts every descendant by the same delta
    ///
    /// there is no cycle detection, a node attached below itself recurses forever
    pub fn set_position(&mut self, id: TransformId, position: V2) {
        let (delta, children) = match self.get_mut(id) {
            Some(t) => {
                let delta = position - t.position;
                t.position = position;
                t.recompute_bounds();
                (delta, t.children.clone())
            }
            None => return,
        };
        for child in children {
            self.translate(child, delta);
        }
    }

    pub fn translate(&mut self, id: TransformId, delta: V2) {
        if let Some(t) = self.get(id) {
            let position = t.position + delta;
            self.set_position(id, position);
        }
    }

    /// resizes the node, children are not affected
    pub fn set_size(&mut self, id: TransformId, size: V2) {
        if let Some(t) = self.get_mut(id) {
            t.size = size;
            t.recompute_bounds();
        }
    }

    pub fn set_visible(&mut self, id: TransformId, visible: bool) {
        if let Some(t) = self.get_mut(id) {
            t.visible = visible;
        }
    }

    /// effective visibility: false as soon as any ancestor is hidden
    pub fn is_visible(&self, id: TransformId) -> bool {
        let mut current = self.get(id);
        while let Some(t) = current {
            if !t.visible {
                return false;
            }
            current = t.parent.and_then(|p| self.get(p));
        }
        self.contains(id)
    }

    pub fn add_child(&mut self, parent: TransformId, child: TransformId) {
        if parent == child || !self.contains(parent) || !self.contains(child) {
            return;
        }
        if let Some(old) = self.get(child).and_then(|c| c.parent) {
            self.remove_child(old, child);
        }
        if let Some(p) = self.get_mut(parent) {
            p.children.push(child);
        }
        if let Some(c) = self.get_mut(child) {
            c.parent = Some(parent);
        }
    }

    pub fn remove_child(&mut self, parent: TransformId, child: TransformId) {
        let removed = match self.get_mut(parent) {
            Some(p) => match p.children.iter().position(|&c| c == child) {
                Some(ix) => {
                    p.children.remove(ix);
                    true
                }
                None => false,
            },
            None => false,
        };
        if removed {
            if let Some(c) = self.get_mut(child) {
                c.parent = None;
            }
        }
    }

    /// every node below `id`, depth first, not including `id`
    pub fn descendants(&self, id: TransformId) -> Vec<TransformId> {
        let mut result = Vec::new();
        let mut stack: Vec<TransformId> = self
            .get(id)
            .map(|t| t.children.iter().rev().copied().collect())
            .unwrap_or_default();
        while let Some(next) = stack.pop() {
            result.push(next);
            if let Some(t) = self.get(next) {
                stack.extend(t.children.iter().rev().copied());
            }
        }
        result
    }

    pub fn intersects(&self, a: TransformId, b: TransformId) -> bool {
        self.bounds(a).does_collide(&self.bounds(b))
    }
}
