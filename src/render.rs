pub mod blur;
pub mod painters;
pub mod pipeline;
pub mod surface;
