pub mod broad_phase;
pub mod collider;
pub mod events;
pub mod physical_body;
pub mod resolve;

pub use broad_phase::*;
pub use collider::*;
pub use events::*;
pub use physical_body::*;
pub use resolve::*;
