use converter::{convert, convert_file, ConversionSummary, ConvertError};
use pretty_assertions::assert_eq;
use std::fs;
use test_utils::{write_sql_fixture, SAMPLE_DDL};

const SAMPLE_YAML: &str = "\
collections:
  users:
    columns:
      id:
        type: int
        lower: 0
        upper: 100
      DeviceId:
        type: string
        private_id: true
      email:
        type: string
      score:
        type: float
        lower: 0
        upper: 100
      active:
        type: boolean
      created_at:
        type: datetime
      avatar:
        type: null
  sessions:
    columns:
      session_id:
        type: int
        lower: 0
        upper: 100
      deviceid:
        type: string
        private_id: true
      started:
        type: datetime
";

#[test]
fn test_convert_writes_expected_yaml() {
    let (dir, sql_path) = write_sql_fixture("schema.sql", SAMPLE_DDL);
    let yaml_path = dir.path().join("output.yaml");

    convert(&sql_path, &yaml_path).expect("convert sample");

    assert_eq!(fs::read_to_string(&yaml_path).unwrap(), SAMPLE_YAML);
}

#[test]
fn test_convert_file_reports_summary() {
    let (dir, sql_path) = write_sql_fixture("schema.sql", SAMPLE_DDL);

    let summary = convert_file(&sql_path, dir.path().join("out.yaml")).unwrap();

    assert_eq!(
        summary,
        ConversionSummary {
            tables: 2,
            columns: 10,
            private_columns: 2,
            untyped_columns: 1,
        }
    );
}

#[test]
fn test_convert_is_deterministic() {
    let (dir, sql_path) = write_sql_fixture("schema.sql", SAMPLE_DDL);
    let first = dir.path().join("first.yaml");
    let second = dir.path().join("second.yaml");

    convert(&sql_path, &first).unwrap();
    convert(&sql_path, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn test_convert_overwrites_existing_destination() {
    let (dir, sql_path) = write_sql_fixture("t.sql", "CREATE TABLE t (a TEXT);");
    let yaml_path = dir.path().join("out.yaml");
    fs::write(&yaml_path, "stale: content\nthat: is much longer than the new output\n").unwrap();

    convert(&sql_path, &yaml_path).unwrap();

    assert_eq!(
        fs::read_to_string(&yaml_path).unwrap(),
        "collections:\n  t:\n    columns:\n      a:\n        type: string\n"
    );
}

#[test]
fn test_empty_input_writes_empty_collections() {
    let (dir, sql_path) = write_sql_fixture("empty.sql", "");
    let yaml_path = dir.path().join("out.yaml");

    convert(&sql_path, &yaml_path).unwrap();

    assert_eq!(fs::read_to_string(&yaml_path).unwrap(), "collections: {}\n");
}

#[test]
fn test_missing_source_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let yaml_path = dir.path().join("out.yaml");

    let err = convert(dir.path().join("missing.sql"), &yaml_path).unwrap_err();

    assert!(matches!(err, ConvertError::Io { .. }));
    assert!(err.to_string().contains("missing.sql"));
    assert!(!yaml_path.exists());
}

#[test]
fn test_unwritable_destination_is_io_error() {
    let (dir, sql_path) = write_sql_fixture("t.sql", "CREATE TABLE t (a INT);");
    let yaml_path = dir.path().join("no_such_dir").join("out.yaml");

    let err = convert(&sql_path, &yaml_path).unwrap_err();

    assert!(matches!(err, ConvertError::Io { .. }));
}

#[test]
fn test_malformed_column_fails_and_writes_nothing() {
    let (dir, sql_path) = write_sql_fixture("bad.sql", "CREATE TABLE t (id INT, broken);");
    let yaml_path = dir.path().join("out.yaml");

    let err = convert(&sql_path, &yaml_path).unwrap_err();

    assert!(matches!(err, ConvertError::MalformedColumn { .. }));
    assert!(!yaml_path.exists());
}

#[test]
fn test_tables_keep_source_order() {
    let sql = "CREATE TABLE zulu (a INT);\nCREATE TABLE alpha (b INT);\nCREATE TABLE mike (c INT);";
    let (dir, sql_path) = write_sql_fixture("order.sql", sql);
    let yaml_path = dir.path().join("out.yaml");

    convert(&sql_path, &yaml_path).unwrap();

    let yaml = fs::read_to_string(&yaml_path).unwrap();
    let zulu = yaml.find("zulu:").unwrap();
    let alpha = yaml.find("alpha:").unwrap();
    let mike = yaml.find("mike:").unwrap();
    assert!(zulu < alpha && alpha < mike);
}
