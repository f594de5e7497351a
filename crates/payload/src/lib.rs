// https://docs.oracle.com/javase/specs/jvms/se19/html/jvms-4.html#jvms-4.4.7

mod error;
mod obfuscate;
mod template;

pub use error::PayloadError;
pub use obfuscate::obfuscate;
pub use template::{Payload, TemplateBuilder, EXPECTED_CLASS_NAME};

pub type Result<T, E = PayloadError> = std::result::Result<T, E>;
