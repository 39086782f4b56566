use crate::domain::model::{Parameter, Point};
use crate::utils::error::{EvalError, Result};
use crate::utils::text_file::read_text;
use regex::Regex;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// 一行一個參數: 前導空白、名稱、分隔空白、數值
static SPACE_SEPARATED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)(\w+)(\s+)([\w\s.,;\[\]+\-]+)$").expect("space-separated pattern is valid")
});

/// Formats a value the way parameter files store it: fixed point, 15 decimals.
pub fn format_parameter_value(value: f64) -> String {
    format!("{:.15}", value)
}

/// 解析 `label value` 成對的參數，以空白分隔
pub fn parse_parameters(text: &str) -> Result<Vec<Parameter>> {
    let mut tokens = text.split_whitespace();
    let mut parameters = Vec::new();

    while let Some(label) = tokens.next() {
        let raw = tokens
            .next()
            .ok_or_else(|| EvalError::parse(label, "label has no value"))?;
        let value = raw
            .parse::<f64>()
            .map_err(|e| EvalError::parse(raw, format!("not a floating-point value ({})", e)))?;
        parameters.push(Parameter::new(label, value));
    }

    Ok(parameters)
}

/// Reads the evaluation point from the first two entries; labels are ignored
/// and anything after the second entry is left unread.
pub fn parse_point(text: &str) -> Result<Point> {
    let mut tokens = text.split_whitespace();
    let mut values = [0.0_f64; 2];

    for (index, slot) in values.iter_mut().enumerate() {
        let name = if index == 0 { "x" } else { "y" };
        let label = tokens
            .next()
            .ok_or_else(|| EvalError::parse("<end of input>", format!("missing entry for {}", name)))?;
        let raw = tokens
            .next()
            .ok_or_else(|| EvalError::parse(label, "label has no value"))?;
        *slot = raw
            .parse::<f64>()
            .map_err(|e| EvalError::parse(raw, format!("not a floating-point value ({})", e)))?;
        tracing::debug!("Read {} from entry '{}' = {}", name, label, slot);
    }

    Ok(Point::new(values[0], values[1]))
}

pub fn render_parameters(parameters: &[Parameter]) -> String {
    parameters
        .iter()
        .map(|p| format!("{} {}\n", p.label, format_parameter_value(p.value)))
        .collect()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".tmp");
    PathBuf::from(name)
}

/// 先寫入暫存檔再改名覆蓋; 改名失敗時移除暫存檔
fn replace_contents(path: &Path, contents: &str) -> Result<()> {
    let tmp = tmp_path(path);
    fs::write(&tmp, contents)?;
    if let Err(e) = fs::rename(&tmp, path) {
        if let Err(cleanup) = fs::remove_file(&tmp) {
            tracing::warn!("Could not remove {}: {}", tmp.display(), cleanup);
        }
        return Err(e.into());
    }
    Ok(())
}

/// 更新參數檔中指定名稱的值
///
/// The file is rewritten through `<path>.tmp` and renamed into place. Blank
/// lines are dropped, every other line keeps its spacing. Fails with
/// [`EvalError::ParameterNotFound`] when no line carries `label`; the rewritten
/// file is still in place in that case.
pub fn update_parameter(path: &Path, label: &str, value: f64) -> Result<()> {
    let content = read_text(path)?;

    let new_value = format_parameter_value(value);
    let mut found = false;
    let mut rewritten = String::with_capacity(content.len());

    for line in content.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            continue;
        }

        let caps = SPACE_SEPARATED
            .captures(line)
            .ok_or_else(|| EvalError::parse(line, "expected 'label value'"))?;
        let var = &caps[2];
        let old_value = &caps[4];
        tracing::debug!("Read variable '{}' with value '{}'", var, old_value);

        let value = if var == label {
            found = true;
            new_value.as_str()
        } else {
            old_value
        };
        rewritten.push_str(&caps[1]);
        rewritten.push_str(var);
        rewritten.push_str(&caps[3]);
        rewritten.push_str(value);
        rewritten.push('\n');
    }

    replace_contents(path, &rewritten)?;

    if !found {
        tracing::error!("Parameter '{}' not found in {}", label, path.display());
        return Err(EvalError::ParameterNotFound {
            label: label.to_string(),
            path: path.to_path_buf(),
        });
    }

    tracing::debug!("Set {} = {} in {}", label, new_value, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_point_ignores_labels() {
        let point = parse_point("x 2.0\ny 3.0\n").unwrap();
        assert_eq!(point, Point::new(2.0, 3.0));

        let point = parse_point("a 1.5 b -0.5").unwrap();
        assert_eq!(point, Point::new(1.5, -0.5));
    }

    #[test]
    fn test_parse_point_ignores_trailing_entries() {
        let point = parse_point("x 1\ny 1\nz garbage").unwrap();
        assert_eq!(point, Point::new(1.0, 1.0));
    }

    #[test]
    fn test_parse_point_missing_second_entry() {
        let err = parse_point("x 1.0\n").unwrap_err();
        assert!(matches!(err, EvalError::ParseError { .. }));
        assert!(err.to_string().contains("missing entry for y"));
    }

    #[test]
    fn test_parse_point_rejects_non_numeric() {
        let err = parse_point("x one\ny 1.0").unwrap_err();
        match err {
            EvalError::ParseError { token, .. } => assert_eq!(token, "one"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_parameters_dangling_label() {
        let params = parse_parameters("x1 0.5\nx2 -1.25\n").unwrap();
        assert_eq!(params, vec![Parameter::new("x1", 0.5), Parameter::new("x2", -1.25)]);

        assert!(parse_parameters("x1 0.5 x2").is_err());
        assert!(parse_parameters("").unwrap().is_empty());
    }

    #[test]
    fn test_render_parameters() {
        let text = render_parameters(&[Parameter::new("x", 1.5), Parameter::new("y", -2.0)]);
        assert_eq!(text, "x 1.500000000000000\ny -2.000000000000000\n");
    }

    #[test]
    fn test_update_parameter_rewrites_only_target() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.in");
        fs::write(&path, "x   1.0\n\ny 1.0\n").unwrap();

        update_parameter(&path, "y", 0.25).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "x   1.0\ny 0.250000000000000\n");
        assert!(!tmp_path(&path).exists());
    }

    #[test]
    fn test_update_parameter_unknown_label() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.in");
        fs::write(&path, "x 1.0\ny 2.0\n").unwrap();

        let err = update_parameter(&path, "z", 5.0).unwrap_err();
        assert!(matches!(err, EvalError::ParameterNotFound { ref label, .. } if label == "z"));
        assert_eq!(parse_point(&fs::read_to_string(&path).unwrap()).unwrap(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_update_parameter_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = update_parameter(&dir.path().join("absent.in"), "x", 1.0).unwrap_err();
        assert!(matches!(err, EvalError::InputUnavailable { .. }));
    }

    #[test]
    fn test_failed_rename_leaves_no_tmp_file() {
        let dir = TempDir::new().unwrap();
        // 目標是非空目錄，改名必定失敗
        let target = dir.path().join("stage");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep"), "x 1.0\n").unwrap();

        let err = replace_contents(&target, "x 2.0\n").unwrap_err();
        assert!(matches!(err, EvalError::IoError(_)));
        assert!(!tmp_path(&target).exists());
        assert!(target.join("keep").exists());
    }

    #[test]
    fn test_update_parameter_rejects_malformed_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test.in");
        fs::write(&path, "x=1.0\n").unwrap();
        assert!(matches!(
            update_parameter(&path, "x", 2.0),
            Err(EvalError::ParseError { .. })
        ));
    }
}
