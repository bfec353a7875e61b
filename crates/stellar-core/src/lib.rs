pub mod background;
pub mod config;
pub mod constants;
pub mod parallax;
pub mod scene;
pub mod star;

pub use background::*;
pub use config::*;
pub use constants::*;
pub use parallax::*;
pub use scene::*;
pub use star::*;
