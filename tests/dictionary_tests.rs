use std::io::{Cursor, Write};

use tempfile::NamedTempFile;
use wordle_reducer::{load_dictionary, parse_dictionary, DictionaryError, Session};

#[test]
fn test_load_dictionary_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "could\nmoult\nwould\nwound\nyoung\nyouth").unwrap();

    let words = load_dictionary(file.path()).unwrap();
    assert_eq!(words.len(), 6);
    assert_eq!(words[0].as_str(), "could");
    assert_eq!(words[5].as_str(), "youth");
}

#[test]
fn test_missing_dictionary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("five_letter_words.txt");

    match load_dictionary(&path) {
        Err(DictionaryError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an io error, got {:?}", other),
    }
}

#[test]
fn test_skips_blank_and_invalid_lines() {
    let input = "  crane \n\nslate\ncranes\nab3de\nToast\r\n";
    let words = parse_dictionary(Cursor::new(input)).unwrap();

    let texts: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
    assert_eq!(texts, ["crane", "slate", "Toast"]);
}

#[test]
fn test_keeps_duplicates_in_order() {
    let words = parse_dictionary(Cursor::new("snoop\nraven\nsnoop\n")).unwrap();
    let texts: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
    assert_eq!(texts, ["snoop", "raven", "snoop"]);
}

#[test]
fn test_empty_dictionary() {
    assert!(matches!(
        parse_dictionary(Cursor::new("\n\ntoolong\n")),
        Err(DictionaryError::Empty)
    ));
}

#[test]
fn test_session_from_dictionary() {
    let input = "could\nmoult\nwould\nwound\nyoung\nyouth\n";
    let mut session = Session::new(parse_dictionary(Cursor::new(input)).unwrap());

    session.apply_str("nobly", "_G_G_").unwrap();
    let texts: Vec<&str> = session.candidates().iter().map(|w| w.as_str()).collect();
    assert_eq!(texts, ["could", "moult", "would"]);
}
