use thiserror::Error;

use crate::EXPECTED_CLASS_NAME;

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Output filename must be {EXPECTED_CLASS_NAME:?}, got: {0:?}")]
    WrongOutputName(String),
    #[error("Resulting commandline is too long ({0} bytes)")]
    CommandLineTooLong(usize),
}
