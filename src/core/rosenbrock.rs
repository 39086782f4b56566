use crate::domain::model::Point;

/// Rosenbrock banana function `100 (y - x^2)^2 + (1 - x)^2`.
///
/// Global minimum `0.0` at `(1, 1)`.
pub fn rosenbrock(x: f64, y: f64) -> f64 {
    100.0 * (y - x.powi(2)).powi(2) + (1.0 - x).powi(2)
}

pub fn rosenbrock_at(point: &Point) -> f64 {
    rosenbrock(point.x, point.y)
}
