pub mod curve;
pub mod info;
pub mod screen;
