mod component;
pub use component::*;

mod matrix;
pub use matrix::*;
