pub mod catalog;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod material;
pub mod persist;
pub mod scene;
pub mod session;
pub mod share;
pub mod store;

pub use catalog::*;
pub use color::*;
pub use config::*;
pub use error::*;
pub use material::*;
pub use persist::*;
pub use scene::*;
pub use session::*;
pub use share::*;
pub use store::*;
