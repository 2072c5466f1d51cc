pub mod config;
pub mod constants;
pub mod drag;
pub mod projector;
pub mod rotation;
pub mod sphere;
pub mod state;

pub use config::*;
pub use drag::*;
pub use projector::*;
pub use rotation::*;
pub use sphere::*;
pub use state::*;
