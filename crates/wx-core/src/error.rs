use thiserror::Error;

pub type WxResult<T> = Result<T, WxError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WxError {
    #[error(
        "Unsupported vapor pressure formula '{received}': expected one of {}",
        .expected.join(", ")
    )]
    InvalidFormula {
        received: String,
        expected: &'static [&'static str],
    },

    #[error("Operands could not be broadcast together with shapes {shapes:?}")]
    ShapeMismatch { shapes: Vec<Vec<usize>> },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
