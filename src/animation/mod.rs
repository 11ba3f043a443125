//! Frame based sprite animation driven as a component.

use crate::geo::*;
use serde::{Deserialize, Serialize};
use crate::object::{Component, ObjectId, World};
use std::collections::HashMap;

/// frames of a sprite sheet shown one after another
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Animation {
    pub frames: Vec<Rect>,
    /// seconds each frame is shown
    pub frame_time: Float,
    pub looping: bool,
}

impl Animation {
    pub fn new(frames: Vec<Rect>, frame_time: Float, looping: bool) -> Animation {
        Animation {
            frames,
            frame_time,
            looping,
        }
    }

    /// `count` frames of `frame_size` laid out left to right starting at `origin`
    pub fn strip(origin: V2, frame_size: V2, count: usize, frame_time: Float, looping: bool) -> Animation {
        let frames = (0..count)
            .map(|i| {
                Rect::new(
                    origin.x + frame_size.x * i as Float,
                    origin.y,
                    frame_size.x,
                    frame_size.y,
                )
            })
            .collect();
        Animation::new(frames, frame_time, looping)
    }
}

/// animation state machine
///
/// each state is a named animation. A non looping state may name a follow up
/// state that starts once it finished. The current frame is written into the
/// owner's source rectangle every update.
#[derive(Clone, Debug, Default)]
pub struct Animator {
    states: HashMap<String, Animation>,
    next: HashMap<String, String>,
    current: Option<String>,
    frame: usize,
    timer: Float,
    finished: bool,
}

impl Animator {
    pub fn new() -> Animator {
        Animator::default()
    }

    pub fn with_state(mut self, name: impl Into<String>, animation: Animation) -> Self {
        self.add_state(name, animation);
        self
    }

    /// the first state added becomes the current one
    pub fn add_state(&mut self, name: impl Into<String>, animation: Animation) {
        let name = name.into();
        if self.current.is_none() {
            self.current = Some(name.clone());
        }
        self.states.insert(name, animation);
    }

    /// plays `to` once `from` finished
    pub fn with_transition(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.next.insert(from.into(), to.into());
        self
    }

    /// switches state; an unknown name is ignored and replaying the current state does not restart it
    pub fn play(&mut self, name: &str) {
        if !self.states.contains_key(name) {
            log::warn!("unknown animation state {}", name);
            return;
        }
        if self.current.as_deref() == Some(name) {
            return;
        }
        self.current = Some(name.to_string());
        self.frame = 0;
        self.timer = 0.0;
        self.finished = false;
    }

    pub fn current_state(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn animation(&self) -> Option<&Animation> {
        self.current.as_ref().and_then(|name| self.states.get(name))
    }

    pub fn frame_index(&self) -> usize {
        self.frame
    }

    pub fn current_frame(&self) -> Option<Rect> {
        self.animation()
            .and_then(|a| a.frames.get(self.frame))
            .copied()
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn advance(&mut self, dt: Float) {
        let (len, frame_time, looping) = match self.animation() {
            Some(a) if !a.frames.is_empty() && a.frame_time > 0.0 => {
                (a.frames.len(), a.frame_time, a.looping)
            }
            _ => return,
        };
        if self.finished {
            return;
        }
        self.timer += dt;
        while self.timer >= frame_time {
            self.timer -= frame_time;
            if self.frame + 1 < len {
                self.frame += 1;
            } else if looping {
                self.frame = 0;
            } else {
                self.finished = true;
                self.timer = 0.0;
                break;
            }
        }
        if self.finished {
            let follow_up = self
                .current
                .as_ref()
                .and_then(|name| self.next.get(name))
                .cloned();
            if let Some(next) = follow_up {
                self.play(&next);
            }
        }
    }
}

impl Component for Animator {
    fn init(&mut self, world: &mut World, owner: ObjectId) {
        if let Some(frame) = self.current_frame() {
            world.set_source_rect(owner, Some(frame));
        }
    }

    fn update(&mut self, world: &mut World, owner: ObjectId, dt: Float) {
        self.advance(dt);
        if let Some(frame) = self.current_frame() {
            world.set_source_rect(owner, Some(frame));
        }
    }
}
