pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{
    evaluator::Evaluator,
    params::{parse_point, update_parameter},
    rosenbrock::rosenbrock,
    target::read_target,
};
pub use domain::model::{Evaluation, Parameter, Point};
pub use utils::error::{EvalError, Result};
