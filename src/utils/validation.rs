use crate::utils::error::{EvalError, Result};
use std::path::{Component, Path, PathBuf};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let raw = path.to_string_lossy();

    if raw.is_empty() {
        return Err(EvalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if raw.contains('\0') {
        return Err(EvalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: raw.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Joins `path` onto `base` (and a relative `base` onto the current
/// directory), then drops `.` and folds `..` components lexically.
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    let base = if base.is_absolute() {
        base.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(base))
            .unwrap_or_else(|_| base.to_path_buf())
    };

    let mut resolved = PathBuf::new();
    for component in base.join(path).components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if matches!(resolved.components().next_back(), Some(Component::Normal(_))) {
                    resolved.pop();
                } else {
                    resolved.push(component);
                }
            }
            other => resolved.push(other),
        }
    }
    resolved
}

pub fn validate_distinct_paths(
    field_name: &str,
    base: &Path,
    first: &Path,
    second: &Path,
) -> Result<()> {
    if resolve_path(base, first) == resolve_path(base, second) {
        return Err(EvalError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: second.display().to_string(),
            reason: "Output path must differ from the input path".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", Path::new("test.in")).is_ok());
        assert!(validate_path("input", Path::new("")).is_err());
        assert!(validate_path("input", Path::new("bad\0name")).is_err());
    }

    #[test]
    fn test_validate_distinct_paths() {
        let base = Path::new("/stage");
        assert!(validate_distinct_paths("output", base, Path::new("test.in"), Path::new("test.out")).is_ok());
        assert!(validate_distinct_paths("output", base, Path::new("test.in"), Path::new("test.in")).is_err());
    }

    #[test]
    fn test_same_file_spelled_differently_is_rejected() {
        let base = Path::new("/stage");
        let input = Path::new("test.in");
        for output in ["./test.in", "/stage/test.in", "output/../test.in", "/stage/./test.in"] {
            assert!(
                validate_distinct_paths("output", base, input, Path::new(output)).is_err(),
                "{} should clash with test.in",
                output
            );
        }
    }

    #[test]
    fn test_resolve_path() {
        let base = Path::new("/stage/run");
        assert_eq!(resolve_path(base, Path::new("./test.in")), PathBuf::from("/stage/run/test.in"));
        assert_eq!(resolve_path(base, Path::new("../test.in")), PathBuf::from("/stage/test.in"));
        assert_eq!(resolve_path(base, Path::new("/abs/test.out")), PathBuf::from("/abs/test.out"));

        let relative = resolve_path(Path::new("."), Path::new("test.in"));
        assert!(relative.is_absolute());
        assert!(relative.ends_with("test.in"));
    }
}
