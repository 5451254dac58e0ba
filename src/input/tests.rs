use std::io::{Read, Write};

use assert_matches::assert_matches;

use super::*;

#[test]
fn test_from_arg() {
    assert_eq!(InputReference::from_arg("-".into()), InputReference::Stdin);
    assert_eq!(
        InputReference::from_arg("a.log".into()),
        InputReference::File("a.log".into())
    );
}

#[test]
fn test_description() {
    assert_eq!(InputReference::Stdin.description(), "<stdin>");
    assert_eq!(InputReference::File("a.log".into()).description(), "a.log");
}

#[test]
fn test_open_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"line\n").unwrap();

    let mut content = String::new();
    InputReference::File(file.path().into())
        .open()
        .unwrap()
        .read_to_string(&mut content)
        .unwrap();
    assert_eq!(content, "line\n");
}

#[test]
fn test_open_missing_file() {
    let result = InputReference::File("/nonexistent/input.log".into()).open().map(|_| ());
    assert_matches!(result, Err(Error::FileNotFound { filename }) if filename == "/nonexistent/input.log");
}
