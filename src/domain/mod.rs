// Domain layer: slot model, allocation table and ports. No I/O.

pub mod coercion;
pub mod model;
pub mod ports;
