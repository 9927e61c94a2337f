use crate::io::IoError;
use crate::parsing::ParseError;

/// Any failure that stops a conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Io(#[from] IoError),
}
