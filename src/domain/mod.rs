// Domain layer: purchase model, tariff rules and ports (interfaces).

pub mod model;
pub mod ports;
