// Domain layer: plan models and the ports the core is built against.

pub mod model;
pub mod ports;
