use std::io::Write as _;

use tabq::io::{parse_delimiter, read_table, read_table_from_reader, ReaderOptions};

fn read_str(data: &str, options: &ReaderOptions) -> tabq::Table {
    read_table_from_reader(data.as_bytes(), options).unwrap()
}

#[test]
fn test_read_with_header() {
    let table = read_str(
        "id,age,status\n1,30,active\n2,20,inactive\n",
        &ReaderOptions::default(),
    );

    let header = table.header().unwrap();
    assert_eq!(header.fields(), &["id", "age", "status"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.rows()[0].get(1), Some("30"));
}

#[test]
fn test_read_without_header() {
    let options = ReaderOptions {
        has_header: false,
        ..ReaderOptions::default()
    };
    let table = read_str("1,30\n2,20\n", &options);

    assert!(table.header().is_none());
    assert_eq!(table.row_count(), 2);
}

#[test]
fn test_skip_first_row() {
    let options = ReaderOptions {
        has_header: false,
        skip_first_row: true,
        ..ReaderOptions::default()
    };
    let table = read_str("id,age\n1,30\n2,20\n", &options);

    assert!(table.header().is_none());
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[0].get(0), Some("1"));
}

#[test]
fn test_comment_lines_skipped() {
    let table = read_str(
        "# generated file\nid,age\n# a comment\n1,30\n",
        &ReaderOptions::default(),
    );

    assert_eq!(table.header().unwrap().get(0), Some("id"));
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_custom_delimiter() {
    let options = ReaderOptions {
        delimiter: b';',
        ..ReaderOptions::default()
    };
    let table = read_str("a;b\n1;2\n", &options);

    assert_eq!(table.header().unwrap().fields(), &["a", "b"]);
    assert_eq!(table.rows()[0].get(1), Some("2"));
}

#[test]
fn test_short_rows_stay_short() {
    let table = read_str("a,b,c\n1,2,3\n1,2\n", &ReaderOptions::default());

    assert_eq!(table.rows()[0].len(), 3);
    assert_eq!(table.rows()[1].len(), 2);
    assert_eq!(table.rows()[1].get(2), None);
}

#[test]
fn test_quoted_fields() {
    let table = read_str(
        "name,note\n\"Smith, John\",\"said \"\"hi\"\"\"\n",
        &ReaderOptions::default(),
    );

    let row = &table.rows()[0];
    assert_eq!(row.get(0), Some("Smith, John"));
    assert_eq!(row.get(1), Some("said \"hi\""));
}

#[test]
fn test_read_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "id,name").unwrap();
    writeln!(file, "1,Alice").unwrap();
    writeln!(file, "2,Bob").unwrap();
    file.flush().unwrap();

    let table = read_table(file.path(), &ReaderOptions::default()).unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows()[1].get(1), Some("Bob"));
}

#[test]
fn test_missing_file_is_an_error() {
    let result = read_table("/no/such/file.csv", &ReaderOptions::default());
    assert!(matches!(result, Err(tabq::Error::Io(_))));
}

#[test]
fn test_empty_input() {
    let table = read_str("", &ReaderOptions::default());
    assert!(table.header().is_none());
    assert_eq!(table.row_count(), 0);
}

#[test]
fn test_parse_delimiter() {
    assert_eq!(parse_delimiter(","), b',');
    assert_eq!(parse_delimiter(";"), b';');
    assert_eq!(parse_delimiter("\\t"), b'\t');
    assert_eq!(parse_delimiter("\t"), b'\t');
    assert_eq!(parse_delimiter(""), b',');
}
