use crate::utils::error::{EvalError, Result};
use crate::utils::text_file::read_text;
use std::path::Path;

/// 讀回輸出檔第一行的目標值
pub fn read_target(path: &Path) -> Result<f64> {
    parse_target(&read_text(path)?)
}

pub fn parse_target(content: &str) -> Result<f64> {
    let line = content.lines().next().unwrap_or("").trim();
    if line.is_empty() {
        return Err(EvalError::parse("<empty>", "output holds no value"));
    }
    line.parse::<f64>()
        .map_err(|e| EvalError::parse(line, format!("not a floating-point value ({})", e)))
}
