use roster_core::{parse, serialize, PersistenceError, RecordFields, RecordFile, RecordStore};
use std::fs;

fn sample_store() -> RecordStore {
    RecordStore::from_fields([
        RecordFields::new("Al", "CS", "2", "Math"),
        RecordFields::new("Bo", "EE", "1", "Phys"),
        RecordFields::new("Al", "CS", "2", "Math"),
        RecordFields::new("Ümit", "", " spaced ", "Ökonomie"),
    ])
}

fn field_values(store: &RecordStore) -> Vec<RecordFields> {
    store.all().iter().map(|record| record.fields.clone()).collect()
}

#[test]
fn serialize_then_parse_reproduces_fields_in_order() {
    let store = sample_store();
    let parsed = parse(&serialize(store.all()));

    assert_eq!(parsed.records, field_values(&store));
    assert_eq!(parsed.skipped_lines, 0);
}

#[test]
fn parse_skips_lines_with_three_or_five_parts() {
    let contents = "Al,CS,2,Math\nshort,line,only\nBo,EE,1,Phys\ntoo,many,parts,in,here\n\nCy,ME,3,Art\n";
    let parsed = parse(contents);

    assert_eq!(
        parsed.records,
        vec![
            RecordFields::new("Al", "CS", "2", "Math"),
            RecordFields::new("Bo", "EE", "1", "Phys"),
            RecordFields::new("Cy", "ME", "3", "Art"),
        ]
    );
    assert_eq!(parsed.skipped_lines, 3);
}

#[test]
fn parse_of_empty_input_is_empty() {
    assert!(parse("").records.is_empty());
}

#[test]
fn parse_keeps_last_line_without_trailing_newline() {
    let parsed = parse("Al,CS,2,Math\nBo,EE,1,Phys");
    assert_eq!(parsed.records.len(), 2);
    assert_eq!(parsed.records[1].name, "Bo");
}

#[test]
fn missing_file_loads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let file = RecordFile::new(dir.path().join("students.txt"));

    assert!(file.load().unwrap().is_empty());
}

#[test]
fn save_overwrites_and_load_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.txt");
    fs::write(&path, "stale,row,that,is\nlonger,than,the,new\nthird,stale,row,x\n").unwrap();
    let file = RecordFile::new(&path);

    let store = RecordStore::from_fields([RecordFields::new("Al", "CS", "2", "Math")]);
    assert_eq!(file.save(store.all()).unwrap(), 1);

    assert_eq!(fs::read_to_string(&path).unwrap(), "Al,CS,2,Math\n");
    assert_eq!(file.load().unwrap(), field_values(&store));
}

#[test]
fn unreadable_path_is_a_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = RecordFile::new(dir.path());

    let err = file.load().unwrap_err();
    assert!(matches!(err, PersistenceError::Read { .. }));
    assert_eq!(err.path(), dir.path());
}

#[test]
fn unwritable_path_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let file = RecordFile::new(dir.path().join("missing").join("students.txt"));
    let store = RecordStore::from_fields([RecordFields::new("Al", "CS", "2", "Math")]);

    let err = file.save(store.all()).unwrap_err();
    assert!(matches!(err, PersistenceError::Write { .. }));
    assert!(err.to_string().contains("failed to write"));
}
