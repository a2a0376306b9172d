mod params;
pub mod resolver;

pub use params::{Match, Params};
pub use resolver::Probe;
