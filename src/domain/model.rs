use std::fmt;

/// 一組 `label value` 參數
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub label: String,
    pub value: f64,
}

impl Parameter {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub point: Point,
    pub value: f64,
}

impl Evaluation {
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

/// Renders the value so that it parses back to the same `f64`.
impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)
    }
}
