use thiserror::Error;

use converter::ConversionError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UnitconvError {
    /// Error returned by the conversion engine.
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    /// `UNITCONV_PRESET` names no known preset.
    #[error("invalid preset: {0} (expected si, engineering or imperial)")]
    InvalidPreset(String),

    /// A `UNITCONV_UNIT_*` variable could not be applied.
    #[error("invalid variable {key}: {reason}")]
    InvalidVariable { key: String, reason: String },
}

pub type Result<T> = std::result::Result<T, UnitconvError>;
