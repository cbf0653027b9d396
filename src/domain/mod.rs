// Domain layer: data model and ports. No process or filesystem access here.

pub mod model;
pub mod ports;
