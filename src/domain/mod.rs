// Domain layer: ticket model, transport value types and the transport port.

pub mod model;
pub mod ports;
