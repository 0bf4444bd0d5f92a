// Domain layer: vehicle records, ranking output and ports. No I/O here.

pub mod model;
pub mod ports;
