//! Error type for configuration loading and control input.

use thiserror::Error;

/// Errors raised around the solvers: configuration files and control inputs.
///
/// The solvers themselves never fail; they clamp or return NaN.
#[derive(Error, Debug)]
pub enum ArmError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid link length {name} = {value}: must be finite and positive")]
    InvalidLinkLength { name: &'static str, value: f64 },

    #[error("invalid range for {control}: min {min}, max {max}, step {step}")]
    InvalidRange {
        control: String,
        min: f64,
        max: f64,
        step: f64,
    },

    #[error("non-finite value {value} for {control}")]
    NonFiniteInput { control: String, value: f64 },
}

pub type Result<T> = std::result::Result<T, ArmError>;
