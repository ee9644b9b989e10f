pub mod constants;
pub mod error;
pub mod mapper;
pub mod movement;
pub mod params;
pub mod rotation;
pub mod scene;
pub mod transform;
pub mod widget;

pub use constants::*;
pub use error::*;
pub use mapper::*;
pub use movement::*;
pub use params::*;
pub use rotation::*;
pub use scene::*;
pub use transform::*;
pub use widget::*;
