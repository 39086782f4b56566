pub mod evaluator;
pub mod params;
pub mod rosenbrock;
pub mod target;

pub use crate::domain::model::{Evaluation, Parameter, Point};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
