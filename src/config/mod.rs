pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct_paths, validate_path, Validate};
use std::path::{Path, PathBuf};

#[cfg(feature = "cli")]
use clap::Parser;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "cli", derive(Parser))]
#[cfg_attr(feature = "cli", command(name = "rosenbrock"))]
#[cfg_attr(
    feature = "cli",
    command(about = "Evaluate the Rosenbrock function at the point read from a parameter file")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(long, default_value = "test.in"))]
    pub input: PathBuf,

    #[cfg_attr(feature = "cli", arg(long, default_value = "test.out"))]
    pub output: PathBuf,

    /// Directory relative input and output paths are resolved against
    #[cfg_attr(feature = "cli", arg(long, default_value = "."))]
    pub work_dir: PathBuf,

    #[cfg_attr(feature = "cli", arg(short, long, help = "Enable verbose output"))]
    pub verbose: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("test.in"),
            output: PathBuf::from("test.out"),
            work_dir: PathBuf::from("."),
            verbose: false,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &Path {
        &self.input
    }

    fn output_path(&self) -> &Path {
        &self.output
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)?;
        validate_path("output", &self.output)?;
        validate_path("work_dir", &self.work_dir)?;
        validate_distinct_paths("output", &self.work_dir, &self.input, &self.output)?;
        Ok(())
    }
}
