use thiserror::Error;

#[derive(Debug, Error)]
#[error(transparent)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        self.0.as_ref()
    }

    /// A benchmark case whose parameters break `condition`.
    pub fn invalid_case(case: impl Into<String>, condition: impl Into<String>) -> Error {
        ErrorKind::InvalidCase {
            case: case.into(),
            condition: condition.into(),
        }
        .into()
    }

    /// A benchmark case whose final sequence length does not fit in `usize`.
    pub fn length_overflow(case: impl Into<String>) -> Error {
        ErrorKind::LengthOverflow { case: case.into() }.into()
    }
}

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error("invalid benchmark case '{case}': expected {condition}")]
    InvalidCase { case: String, condition: String },

    #[error("benchmark case '{case}' produces a sequence longer than usize::MAX")]
    LengthOverflow { case: String },
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error(kind.into())
    }
}
