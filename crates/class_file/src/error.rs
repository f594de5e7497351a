use std::io;

use thiserror::Error;

use crate::constant_pool;

#[derive(Error, Debug)]
pub enum ClassFileError {
    #[error(transparent)]
    IOError(io::Error),
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("Invalid magic identifier: 0x{0:X}")]
    InvalidMagicIdentifier(u32),
    #[error("Invalid constant pool count: 0")]
    EmptyConstantPool,
    #[error("Invalid cp info tag: {0}")]
    InvalidCpInfoTag(u8),
    #[error("Invalid UTF-8 in constant pool entry: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("Constant pool index out of range: {0}")]
    ConstantPoolIndexOutOfRange(u16),
    #[error("Expected {0}, found {1:?}")]
    UnexpectedConstantPoolEntry(&'static str, constant_pool::CpInfo),
}

// Every length field in the format is authoritative, so a short read
// means the input itself is truncated.
impl From<io::Error> for ClassFileError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => ClassFileError::UnexpectedEndOfInput,
            _ => ClassFileError::IOError(e),
        }
    }
}
