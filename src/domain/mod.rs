// Domain layer: advisory models and ports (interfaces). No HTTP or UI types here.

pub mod model;
pub mod ports;
