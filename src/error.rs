use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RulerError {
    #[error("Unknown unit {unit}. Use one of: {}", .valid.join(", "))]
    UnknownUnit {
        unit: String,
        valid: Vec<&'static str>,
    },

    #[error("Invalid shape: {0}")]
    Shape(String),
}
