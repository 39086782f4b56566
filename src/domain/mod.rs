// Domain layer: point/evaluation models and the ports the evaluator depends on.

pub mod model;
pub mod ports;
