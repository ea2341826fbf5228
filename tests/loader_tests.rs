use foldcmp::error::CompareError;
use foldcmp::table::{load_table, load_table_from_reader};
use std::io::{Cursor, Write};
use tempfile::NamedTempFile;

#[test]
fn test_loader_parses_tab_and_space_columns() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "1e1x\t1.163").unwrap();
    writeln!(file, "1e2k   2.835").unwrap();
    writeln!(file, "1yc4 \t 3.072").unwrap();

    let table = load_table(file.path()).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.get("1e1x"), Some(1.163));
    assert_eq!(table.get("1e2k"), Some(2.835));
    assert_eq!(table.get("1yc4"), Some(3.072));
}

#[test]
fn test_loader_skips_comments_and_blank_lines() {
    let data = "# pdb_id rmsd\n\n1e2k\t2.322\n   \n  # indented comment\n1yc4\t4.095\n";
    let table = load_table_from_reader(Cursor::new(data)).unwrap();
    let ids: Vec<_> = table.ids().collect();
    assert_eq!(ids, vec!["1e2k", "1yc4"]);
}

#[test]
fn test_loader_ignores_extra_columns() {
    let data = "1e2k\t-3.138\t0.512\textra\n";
    let table = load_table_from_reader(Cursor::new(data)).unwrap();
    assert_eq!(table.get("1e2k"), Some(-3.138));
}

#[test]
fn test_loader_rejects_non_numeric_value() {
    let data = "1e2k\t2.322\n1yc4\tn/a\n";
    match load_table_from_reader(Cursor::new(data)) {
        Err(CompareError::Parse { line, message }) => {
            assert_eq!(line, 2);
            assert!(message.contains("n/a"), "{message}");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_loader_rejects_missing_value() {
    let data = "1e2k\n";
    assert!(matches!(
        load_table_from_reader(Cursor::new(data)),
        Err(CompareError::Parse { line: 1, .. })
    ));
}

#[test]
fn test_loader_rejects_nan() {
    let data = "1e2k\tNaN\n";
    assert!(matches!(
        load_table_from_reader(Cursor::new(data)),
        Err(CompareError::Parse { .. })
    ));
}

#[test]
fn test_loader_rejects_duplicate_identifier() {
    let data = "1e2k\t2.322\n1yc4\t4.095\n1e2k\t1.000\n";
    match load_table_from_reader(Cursor::new(data)) {
        Err(CompareError::DuplicateIdentifier { id, line }) => {
            assert_eq!(id, "1e2k");
            assert_eq!(line, 3);
        }
        other => panic!("expected duplicate error, got {other:?}"),
    }
}

#[test]
fn test_loader_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_table(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, CompareError::Io(_)));
}
