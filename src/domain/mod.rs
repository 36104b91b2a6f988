// Domain layer: sample record, analysis outcomes and ports (interfaces).

pub mod model;
pub mod ports;
