//! Retained UI widget tree.
//!
//! Widgets get their identity from a fixed pool sized by
//! [`EngineConfig::ui_pool_capacity`]. Running out of identities is a capacity
//! bug in the game and panics; looking up an unknown widget is reported and
//! skipped.

pub mod nine_slice;

pub use nine_slice::*;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::geo::*;
use crate::render::{Renderer, SpriteDraw};
use crate::transform::{TransformId, TransformTree};

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct WidgetId(u32);

impl WidgetId {
    pub fn index(&self) -> u32 {
        self.0
    }
}

#[derive(Clone, Debug)]
pub struct Widget {
    id: WidgetId,
    transform: TransformId,
    parent: Option<WidgetId>,
    children: Vec<WidgetId>,
    style: Option<NineSlice>,
    tint: Color,
}

impl Widget {
    pub fn id(&self) -> WidgetId {
        self.id
    }

    pub fn transform(&self) -> TransformId {
        self.transform
    }

    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    pub fn style(&self) -> Option<&NineSlice> {
        self.style.as_ref()
    }

    pub fn tint(&self) -> Color {
        self.tint
    }
}

pub struct UiTree {
    transforms: TransformTree,
    widgets: Vec<Option<Widget>>,
    free: Vec<u32>,
    roots: Vec<WidgetId>,
}

impl UiTree {
    pub fn new(capacity: u32) -> UiTree {
        UiTree {
            transforms: TransformTree::new(),
            widgets: (0..capacity).map(|_| None).collect(),
            free: (0..capacity).rev().collect(),
            roots: Vec::new(),
        }
    }

    pub fn from_config(config: &EngineConfig) -> UiTree {
        UiTree::new(config.ui_pool_capacity)
    }

    pub fn capacity(&self) -> usize {
        self.widgets.len()
    }

    pub fn len(&self) -> usize {
        self.widgets.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn transforms(&self) -> &TransformTree {
        &self.transforms
    }

    fn get(&self, id: WidgetId) -> Result<&Widget> {
        match self.widgets.get(id.0 as usize).and_then(|w| w.as_ref()) {
            Some(widget) => Ok(widget),
            None => {
                log::error!("unknown ui widget {}", id.0);
                Err(EngineError::UnknownWidget(id.0))
            }
        }
    }

    fn get_mut(&mut self, id: WidgetId) -> Result<&mut Widget> {
        match self.widgets.get_mut(id.0 as usize).and_then(|w| w.as_mut()) {
            Some(widget) => Ok(widget),
            None => {
                log::error!("unknown ui widget {}", id.0);
                Err(EngineError::UnknownWidget(id.0))
            }
        }
    }

    pub fn widget(&self, id: WidgetId) -> Result<&Widget> {
        self.get(id)
    }

    pub fn contains(&self, id: WidgetId) -> bool {
        self.widgets
            .get(id.0 as usize)
            .map_or(false, |w| w.is_some())
    }

    /// creates a widget at `offset` from its parent, or from the screen origin
    ///
    /// # Panics
    ///
    /// when every identity of the pool is in use.
    pub fn add_widget(&mut self, parent: Option<WidgetId>, offset: V2, size: V2) -> Result<WidgetId> {
        let origin = match parent {
            Some(p) => self.transforms.position(self.get(p)?.transform),
            None => V2::zeros(),
        };
        let index = match self.free.pop() {
            Some(index) => index,
            None => panic!(
                "ui widget pool exhausted, all {} identities are in use",
                self.widgets.len()
            ),
        };
        let id = WidgetId(index);
        let transform = self.transforms.spawn(origin + offset, size);
        match parent {
            Some(p) => {
                let parent_transform = self.get(p)?.transform;
                self.transforms.add_child(parent_transform, transform);
                self.get_mut(p)?.children.push(id);
            }
            None => self.roots.push(id),
        }
        self.widgets[index as usize] = Some(Widget {
            id,
            transform,
            parent,
            children: Vec::new(),
            style: None,
            tint: Color::WHITE,
        });
        Ok(id)
    }

    /// removes the widget and all of its descendants, returning their identities to the pool
    pub fn remove_widget(&mut self, id: WidgetId) -> Result<()> {
        let parent = self.get(id)?.parent;
        match parent {
            Some(p) => {
                if let Ok(parent) = self.get_mut(p) {
                    parent.children.retain(|&c| c != id);
                }
            }
            None => self.roots.retain(|&r| r != id),
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(widget) = self.widgets[next.0 as usize].take() {
                stack.extend(widget.children.iter().copied());
                self.transforms.despawn(widget.transform);
                self.free.push(next.0);
            }
        }
        Ok(())
    }

    pub fn set_style(&mut self, id: WidgetId, style: NineSlice) -> Result<()> {
        self.get_mut(id)?.style = Some(style);
        Ok(())
    }

    pub fn set_tint(&mut self, id: WidgetId, tint: Color) -> Result<()> {
        self.get_mut(id)?.tint = tint;
        Ok(())
    }

    pub fn set_visible(&mut self, id: WidgetId, visible: bool) -> Result<()> {
        let transform = self.get(id)?.transform;
        self.transforms.set_visible(transform, visible);
        Ok(())
    }

    /// effective visibility, hidden ancestors hide the widget
    pub fn is_visible(&self, id: WidgetId) -> bool {
        self.widgets
            .get(id.0 as usize)
            .and_then(|w| w.as_ref())
            .map_or(false, |w| self.transforms.is_visible(w.transform))
    }

    /// moves the widget's center, descendants follow
    pub fn move_to(&mut self, id: WidgetId, position: V2) -> Result<()> {
        let transform = self.get(id)?.transform;
        self.transforms.set_position(transform, position);
        Ok(())
    }

    pub fn resize(&mut self, id: WidgetId, size: V2) -> Result<()> {
        let transform = self.get(id)?.transform;
        self.transforms.set_size(transform, size);
        Ok(())
    }

    /// screen rectangle of the widget
    pub fn rect(&self, id: WidgetId) -> Result<Rect> {
        let transform = self.get(id)?.transform;
        Ok(Rect::from_bounds(&self.transforms.bounds(transform)))
    }

    /// every widget, parents before children, siblings in creation order
    pub fn draw_order(&self) -> Vec<WidgetId> {
        let mut order = Vec::with_capacity(self.len());
        let mut stack: Vec<WidgetId> = self.roots.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            order.push(id);
            if let Some(Some(widget)) = self.widgets.get(id.0 as usize) {
                stack.extend(widget.children.iter().rev().copied());
            }
        }
        order
    }

    /// topmost visible widget under `point`
    pub fn hit_test(&self, point: V2) -> Option<WidgetId> {
        self.draw_order()
            .into_iter()
            .rev()
            .filter(|&id| self.is_visible(id))
            .find(|&id| self.rect(id).map_or(false, |r| r.contains(&point)))
    }

    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for id in self.draw_order() {
            if !self.is_visible(id) {
                continue;
            }
            let widget = match self.widgets[id.0 as usize].as_ref() {
                Some(widget) => widget,
                None => continue,
            };
            let style = match widget.style {
                Some(style) => style,
                None => continue,
            };
            let target = Rect::from_bounds(&self.transforms.bounds(widget.transform));
            for patch in style.patches(&target).iter() {
                if let Some(scale) = patch.scale() {
                    renderer.draw_sprite(&SpriteDraw {
                        texture: style.texture,
                        position: patch.target.position(),
                        source: Some(patch.source),
                        tint: widget.tint,
                        scale,
                        flip: false,
                        depth: 0.0,
                    });
                }
            }
        }
    }
}
