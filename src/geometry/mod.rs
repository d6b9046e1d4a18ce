pub mod command;
pub mod sampler;
pub mod shapes;
pub mod svg;
