mod guards;
mod tracing_layer;

pub use guards::*;
pub use tracing_layer::*;
