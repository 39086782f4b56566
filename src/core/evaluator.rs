use crate::core::params::parse_point;
use crate::core::rosenbrock::rosenbrock_at;
use crate::core::{ConfigProvider, Evaluation, Storage};
use crate::utils::error::Result;
use std::io::Write;

pub struct Evaluator<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> Evaluator<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    /// Runs one evaluation and prints the banner and result to stdout.
    pub fn run(&self) -> Result<Evaluation> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// 讀取 → 計算 → 印出 → 寫檔
    ///
    /// Nothing is computed or written when the input cannot be read or parsed.
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<Evaluation> {
        let input_path = self.config.input_path();
        let output_path = self.config.output_path();

        tracing::info!("📥 Reading point from {}", input_path.display());
        let content = self.storage.read_file(input_path)?;
        let point = parse_point(&content)?;

        let evaluation = Evaluation {
            point,
            value: rosenbrock_at(&point),
        };
        tracing::debug!("Evaluated {:?}", evaluation);
        if !evaluation.is_finite() {
            tracing::warn!(
                "⚠️ Non-finite result {} at x = {}, y = {}",
                evaluation,
                point.x,
                point.y
            );
        }

        writeln!(out, "Rosenbrock function evaluation")?;
        writeln!(out, "x = {:?}, y = {:?}", point.x, point.y)?;
        writeln!(out, "fun = {}", evaluation)?;
        out.flush()?;

        self.storage
            .write_file(output_path, format!("{}\n", evaluation).as_bytes())?;
        tracing::info!("📁 Result written to {}", output_path.display());

        Ok(evaluation)
    }
}
