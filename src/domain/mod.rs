// Domain layer: wire models and ports (interfaces). No behavior beyond serde shapes.

pub mod model;
pub mod ports;
