//! A small 2d tile and sprite engine core: game objects with pluggable
//! components, axis aligned collision with push-out resolution, a transform
//! hierarchy, timers, input bindings, animation and a retained UI tree.

pub mod animation;
pub mod collision_system;
pub mod config;
pub mod error;
pub mod geo;
pub mod input;
pub mod object;
pub mod render;
pub mod timer;
pub mod transform;
pub mod ui;
pub mod utils;

pub use config::EngineConfig;
pub use error::{EngineError, Result};
pub use object::{Component, GameObjectDesc, ObjectId, World};

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
