//! Edge triggered callbacks on top of a polled input state.

use crate::utils::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct KeyCode(pub u32);

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Input {
    Key(KeyCode),
    Mouse(MouseButton),
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Trigger {
    /// up last frame, down now
    Pressed,
    /// down last frame, up now
    Released,
    /// down now, regardless of last frame
    Held,
}

/// current keyboard and mouse state, provided by the framework
pub trait InputState {
    fn is_key_down(&self, key: KeyCode) -> bool;
    fn is_button_down(&self, button: MouseButton) -> bool;
    fn mouse_position(&self) -> V2;

    fn is_down(&self, input: Input) -> bool {
        match input {
            Input::Key(key) => self.is_key_down(key),
            Input::Mouse(button) => self.is_button_down(button),
        }
    }
}

/// plain input state, filled in by whoever polls the device
#[derive(Clone, Debug, PartialEq)]
pub struct InputSnapshot {
    pub keys: HashSet<KeyCode>,
    pub buttons: HashSet<MouseButton>,
    pub mouse: V2,
}

impl Default for InputSnapshot {
    fn default() -> Self {
        InputSnapshot {
            keys: HashSet::new(),
            buttons: HashSet::new(),
            mouse: V2::zeros(),
        }
    }
}

impl InputSnapshot {
    pub fn press(&mut self, input: Input) {
        match input {
            Input::Key(key) => {
                self.keys.insert(key);
            }
            Input::Mouse(button) => {
                self.buttons.insert(button);
            }
        }
    }

    pub fn release(&mut self, input: Input) {
        match input {
            Input::Key(key) => {
                self.keys.remove(&key);
            }
            Input::Mouse(button) => {
                self.buttons.remove(&button);
            }
        }
    }
}

impl InputState for InputSnapshot {
    fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    fn mouse_position(&self) -> V2 {
        self.mouse
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct BindingId(u64);

pub type InputCallback<C> = Box<dyn FnMut(&mut C, Input)>;

struct Binding<C> {
    id: BindingId,
    input: Input,
    trigger: Trigger,
    callback: InputCallback<C>,
}

/// registered input callbacks, fired in registration order
pub struct InputEvents<C> {
    next_id: u64,
    bindings: Vec<Binding<C>>,
    previous: HashSet<Input>,
}

impl<C> Default for InputEvents<C> {
    fn default() -> Self {
        InputEvents {
            next_id: 0,
            bindings: Vec::new(),
            previous: HashSet::new(),
        }
    }
}

impl<C> InputEvents<C> {
    pub fn new() -> InputEvents<C> {
        InputEvents::default()
    }

    pub fn register<F>(&mut self, input: Input, trigger: Trigger, callback: F) -> BindingId
    where
        F: FnMut(&mut C, Input) + 'static,
    {
        let id = BindingId(self.next_id);
        self.next_id += 1;
        self.bindings.push(Binding {
            id,
            input,
            trigger,
            callback: Box::new(callback),
        });
        id
    }

    /// removing an unknown binding does nothing
    pub fn unregister(&mut self, id: BindingId) -> bool {
        match self.bindings.iter().position(|b| b.id == id) {
            Some(ix) => {
                self.bindings.remove(ix);
                true
            }
            None => {
                log::debug!("no input binding {:?} to remove", id);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// compares `state` with the previous frame and fires matching bindings
    pub fn update(&mut self, state: &dyn InputState, ctx: &mut C) {
        let current: HashSet<Input> = self
            .bindings
            .iter()
            .map(|b| b.input)
            .filter(|&input| state.is_down(input))
            .collect();
        for binding in self.bindings.iter_mut() {
            let was = self.previous.contains(&binding.input);
            let now = current.contains(&binding.input);
            let fire = match binding.trigger {
                Trigger::Pressed => now && !was,
                Trigger::Released => was && !now,
                Trigger::Held => now,
            };
            if fire {
                (binding.callback)(ctx, binding.input);
            }
        }
        self.previous = current;
    }
}
