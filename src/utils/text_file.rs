use crate::utils::error::{EvalError, Result};
use std::fs;
use std::path::Path;

/// 讀取文字檔: 開檔失敗與內容非 UTF-8 分開回報
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|source| EvalError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    String::from_utf8(bytes)
        .map_err(|_| EvalError::parse(path.display().to_string(), "input is not valid UTF-8"))
}
