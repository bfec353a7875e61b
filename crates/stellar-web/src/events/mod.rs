pub mod pointer;
pub mod slider;

pub use pointer::wire_parallax;
pub use slider::wire_star_model;
