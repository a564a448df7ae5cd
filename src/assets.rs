pub mod font;
pub mod image;
