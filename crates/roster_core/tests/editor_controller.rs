use roster_core::{
    EditorController, EditorError, RecordColumn, RecordFields, RecordFile, RecordStore,
    ALL_FIELDS_REQUIRED, NO_RECORD_SELECTED,
};
use std::fs;
use std::path::Path;

fn open_with(path: &Path, contents: &str) -> EditorController {
    fs::write(path, contents).unwrap();
    EditorController::open(RecordFile::new(path))
}

fn field_values(editor: &EditorController) -> Vec<RecordFields> {
    editor
        .store()
        .all()
        .iter()
        .map(|record| record.fields.clone())
        .collect()
}

#[test]
fn add_trims_inputs_appends_and_clears_form() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = EditorController::open(RecordFile::new(dir.path().join("students.txt")));
    assert!(editor.store().is_empty());

    editor.set_inputs(RecordFields::new(" Al ", "CS ", " 2", "Math"));
    let id = editor.add().unwrap();

    assert_eq!(
        editor.store().get(id).unwrap().fields,
        RecordFields::new("Al", "CS", "2", "Math")
    );
    assert_eq!(editor.inputs(), &RecordFields::default());
}

#[test]
fn add_with_any_blank_field_is_rejected_and_store_unchanged() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_with(&dir.path().join("students.txt"), "Al,CS,2,Math\n");
    let before = field_values(&editor);

    for column in RecordColumn::ALL {
        let mut inputs = RecordFields::new("Bo", "EE", "1", "Phys");
        inputs.set(column, "   ");
        editor.set_inputs(inputs.clone());

        let err = editor.add().unwrap_err();
        assert!(matches!(err, EditorError::Validation(ALL_FIELDS_REQUIRED)));
        assert_eq!(field_values(&editor), before);
        assert_eq!(editor.inputs(), &inputs, "inputs kept for re-prompt");
    }
}

#[test]
fn update_and_delete_without_selection_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_with(&dir.path().join("students.txt"), "Al,CS,2,Math\n");
    editor.set_inputs(RecordFields::new("Bo", "EE", "1", "Phys"));
    let revision = editor.store().revision();

    let err = editor.update().unwrap_err();
    assert!(matches!(err, EditorError::Selection(NO_RECORD_SELECTED)));
    assert_eq!(err.to_string(), "no record selected");

    let err = editor.delete().unwrap_err();
    assert!(matches!(err, EditorError::Selection(NO_RECORD_SELECTED)));

    assert_eq!(editor.store().revision(), revision);
    assert_eq!(field_values(&editor), vec![RecordFields::new("Al", "CS", "2", "Math")]);
}

#[test]
fn select_mirrors_record_into_inputs() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_with(
        &dir.path().join("students.txt"),
        "Al,CS,2,Math\nBo,EE,1,Phys\n",
    );
    let bo = editor.store().all()[1].id;

    editor.select(Some(bo)).unwrap();

    assert_eq!(editor.selection(), Some(bo));
    assert_eq!(editor.inputs(), &RecordFields::new("Bo", "EE", "1", "Phys"));
}

#[test]
fn update_writes_trimmed_inputs_without_empty_check() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_with(&dir.path().join("students.txt"), "Al,CS,2,Math\n");
    let id = editor.store().all()[0].id;
    editor.select(Some(id)).unwrap();

    editor.set_input(RecordColumn::Name, "  Alice ");
    editor.set_input(RecordColumn::Course, "   ");
    assert_eq!(editor.update().unwrap(), id);

    assert_eq!(
        editor.store().get(id).unwrap().fields,
        RecordFields::new("Alice", "CS", "2", "")
    );
    assert_eq!(editor.inputs(), &RecordFields::default());
    assert_eq!(editor.selection(), Some(id));
}

#[test]
fn update_targets_selected_record_after_resort() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_with(
        &dir.path().join("students.txt"),
        "Cy,CS,2,Math\nAl,EE,1,Phys\nBo,ME,3,Art\n",
    );
    editor.set_sort(RecordColumn::Name, true);
    let picked = editor.view()[0].id;
    editor.select(Some(picked)).unwrap();

    editor.set_sort(RecordColumn::Name, false);
    editor.set_input(RecordColumn::Year, "9");
    editor.update().unwrap();

    assert_eq!(editor.store().all()[1].fields, RecordFields::new("Al", "EE", "9", "Phys"));
}

#[test]
fn delete_removes_selected_and_clears_state() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_with(
        &dir.path().join("students.txt"),
        "Al,CS,2,Math\nAl,CS,2,Math\n",
    );
    let second = editor.store().all()[1].id;
    editor.select(Some(second)).unwrap();

    let removed = editor.delete().unwrap();

    assert_eq!(removed.id, second);
    assert_eq!(editor.store().len(), 1);
    assert_ne!(editor.store().all()[0].id, second);
    assert_eq!(editor.selection(), None);
    assert_eq!(editor.inputs(), &RecordFields::default());
}

#[test]
fn view_tracks_search_sort_and_mutations() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_with(
        &dir.path().join("students.txt"),
        "Al,CS,2,Math\nBo,EE,1,Phys\n",
    );

    editor.set_search_text("cs");
    assert_eq!(editor.view().len(), 1);

    editor.set_inputs(RecordFields::new("Cy", "CS", "3", "Art"));
    editor.add().unwrap();
    editor.search();
    let names = editor
        .view()
        .into_iter()
        .map(|record| record.fields.name.clone())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Al", "Cy"]);

    editor.set_search_text("");
    editor.set_sort(RecordColumn::Name, false);
    let names = editor
        .view()
        .into_iter()
        .map(|record| record.fields.name.clone())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Cy", "Bo", "Al"]);

    editor.clear_sort();
    assert_eq!(editor.view()[0].fields.name, "Al");
}

#[test]
fn save_then_open_reproduces_records_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("students.txt");
    let mut editor = EditorController::open(RecordFile::new(&path));
    editor.set_inputs(RecordFields::new("Al", "CS", "2", "Math"));
    editor.add().unwrap();
    editor.set_inputs(RecordFields::new("Bo", "EE", "1", "Phys"));
    editor.add().unwrap();

    assert_eq!(editor.save().unwrap(), 2);

    let reopened = EditorController::open(RecordFile::new(&path));
    assert!(reopened.load_error().is_none());
    assert_eq!(field_values(&reopened), field_values(&editor));
    assert_eq!(fs::read_to_string(&path).unwrap(), "Al,CS,2,Math\nBo,EE,1,Phys\n");
}

#[test]
fn save_failure_is_reported_and_store_kept() {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::from_fields([RecordFields::new("Al", "CS", "2", "Math")]);
    let editor = EditorController::with_store(
        store,
        RecordFile::new(dir.path().join("no-such-dir").join("students.txt")),
    );

    let err = editor.save().unwrap_err();
    assert!(matches!(err, EditorError::Persistence(_)));
    assert_eq!(editor.store().len(), 1);
}

#[test]
fn unreadable_data_file_starts_empty_and_degraded() {
    let dir = tempfile::tempdir().unwrap();
    let editor = EditorController::open(RecordFile::new(dir.path()));

    assert!(editor.store().is_empty());
    assert!(editor.load_error().is_some());
}

#[test]
fn subscribers_are_notified_of_editor_mutations() {
    use std::cell::Cell;
    use std::rc::Rc;

    let dir = tempfile::tempdir().unwrap();
    let mut editor = open_with(&dir.path().join("students.txt"), "Al,CS,2,Math\n");
    let count = Rc::new(Cell::new(0));
    let sink = Rc::clone(&count);
    editor.subscribe(move |_| sink.set(sink.get() + 1));

    editor.set_inputs(RecordFields::new("Bo", "EE", "1", "Phys"));
    let id = editor.add().unwrap();
    editor.select(Some(id)).unwrap();
    editor.update().unwrap();
    editor.delete().unwrap();

    assert_eq!(count.get(), 3);
}
