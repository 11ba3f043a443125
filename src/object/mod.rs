//! Game objects and the world that owns them.

pub mod component;
pub mod game_object;
pub mod ids;
pub mod world;

pub use crate::geo::*;
pub use component::*;
pub use game_object::*;
pub use ids::*;
pub use world::*;
