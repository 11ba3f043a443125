use super::*;
use crate::render::Texture;
use crate::transform::TransformId;

/// everything needed to create a game object
#[derive(Clone, PartialEq, Debug)]
pub struct GameObjectDesc {
    pub position: V2,
    /// a game object cannot exist without a texture, `None` makes creation fail
    pub texture: Option<Texture>,
    /// region of a sprite sheet, `None` uses the whole texture
    pub source_rect: Option<Rect>,
    pub tint: Color,
    pub flip: bool,
    pub visible: bool,
}

impl Default for GameObjectDesc {
    fn default() -> Self {
        GameObjectDesc {
            position: V2::zeros(),
            texture: None,
            source_rect: None,
            tint: Color::WHITE,
            flip: false,
            visible: true,
        }
    }
}

impl GameObjectDesc {
    pub fn new(position: V2, texture: Texture) -> GameObjectDesc {
        GameObjectDesc {
            position,
            texture: Some(texture),
            ..GameObjectDesc::default()
        }
    }

    pub fn with_source_rect(mut self, source_rect: Rect) -> Self {
        self.source_rect = Some(source_rect);
        self
    }

    pub fn with_tint(mut self, tint: Color) -> Self {
        self.tint = tint;
        self
    }

    pub fn flipped(mut self, flip: bool) -> Self {
        self.flip = flip;
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// transform size: the sprite sheet region if any, else the texture
    pub(crate) fn sprite_size(&self, texture: &Texture) -> V2 {
        self.source_rect
            .map(|r| r.size())
            .unwrap_or_else(|| texture.size())
    }
}

/// a textured entity with an ordered list of components
///
/// once destroyed, setters do nothing and getters return defaults.
pub struct GameObject {
    id: ObjectId,
    transform: TransformId,
    texture: Texture,
    source_rect: Option<Rect>,
    flip: bool,
    tint: Color,
    pub(crate) components: Vec<ComponentSlot>,
    pub(crate) collider: Option<ComponentKey>,
    pub(crate) drawable: Option<ComponentKey>,
    next_key: u32,
    destroyed: bool,
}

impl GameObject {
    pub(crate) fn new(
        id: ObjectId,
        transform: TransformId,
        texture: Texture,
        desc: &GameObjectDesc,
    ) -> GameObject {
        GameObject {
            id,
            transform,
            texture,
            source_rect: desc.source_rect,
            flip: desc.flip,
            tint: desc.tint,
            components: Vec::new(),
            collider: None,
            drawable: None,
            next_key: 0,
            destroyed: false,
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn transform(&self) -> TransformId {
        self.transform
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn texture(&self) -> Texture {
        if self.destroyed {
            return Texture::default();
        }
        self.texture
    }

    pub fn set_texture(&mut self, texture: Texture) {
        if !self.destroyed {
            self.texture = texture;
        }
    }

    pub fn source_rect(&self) -> Option<Rect> {
        if self.destroyed {
            return None;
        }
        self.source_rect
    }

    pub fn set_source_rect(&mut self, source_rect: Option<Rect>) {
        if !self.destroyed {
            self.source_rect = source_rect;
        }
    }

    pub fn flip(&self) -> bool {
        !self.destroyed && self.flip
    }

    pub fn set_flip(&mut self, flip: bool) {
        if !self.destroyed {
            self.flip = flip;
        }
    }

    pub fn tint(&self) -> Color {
        if self.destroyed {
            return Color::default();
        }
        self.tint
    }

    pub fn set_tint(&mut self, tint: Color) {
        if !self.destroyed {
            self.tint = tint;
        }
    }

    /// height of the drawn sprite, used for depth sorting
    pub fn sprite_height(&self) -> Float {
        match self.source_rect() {
            Some(r) => r.height,
            None => self.texture().height as Float,
        }
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn component_keys(&self) -> Vec<ComponentKey> {
        self.components.iter().map(|slot| slot.key).collect()
    }

    pub fn collider_key(&self) -> Option<ComponentKey> {
        self.collider
    }

    pub fn drawable_key(&self) -> Option<ComponentKey> {
        self.drawable
    }

    pub(crate) fn next_key(&mut self) -> ComponentKey {
        let key = ComponentKey(self.next_key);
        self.next_key += 1;
        key
    }

    pub(crate) fn slot(&self, key: ComponentKey) -> Option<&ComponentSlot> {
        self.components.iter().find(|slot| slot.key == key)
    }

    pub(crate) fn slot_mut(&mut self, key: ComponentKey) -> Option<&mut ComponentSlot> {
        self.components.iter_mut().find(|slot| slot.key == key)
    }

    pub(crate) fn mark_destroyed(&mut self) {
        self.destroyed = true;
    }
}
