use contactbook_model::{Contact, ContactFields, ContactId, Field};
use contactbook_store::{ContactStore, JsonFileStore, MemoryStore, StorageError};
use contactbook_test_utils::{colliding_pair, sample_collection, temp_json_store};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

#[test]
fn test_load_returns_saved_collection_in_order() {
    let contacts = sample_collection();
    let (_dir, store) = temp_json_store(&contacts);
    assert_eq!(store.load().unwrap(), contacts);
}

#[test]
fn test_colliding_ids_survive_round_trip() {
    let contacts = colliding_pair();
    assert_eq!(contacts[0].id(), contacts[1].id());

    let (_dir, store) = temp_json_store(&contacts);
    assert_eq!(store.load().unwrap().len(), 2);
}

#[test]
fn test_reads_document_written_by_other_tools() {
    // Compact separators with spaces, keys in any order
    let doc = r#"[{"id": "0a1b2c3d", "name": "Ana", "lastname": "Silva", "birth": "",
        "email": "ana@example.com", "phone": "123", "occupation": "", "city": "Lisbon",
        "country": "Portugal"}]"#;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    std::fs::write(&path, doc).unwrap();

    let contacts = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].id(), &ContactId::from_stored("0a1b2c3d"));
    assert_eq!(contacts[0].get(Field::City), "Lisbon");
}

#[test]
fn test_record_missing_a_field_is_malformed() {
    let doc = r#"[{"name": "Ana", "lastname": "Silva", "id": "0a1b2c3d"}]"#;
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    std::fs::write(&path, doc).unwrap();

    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert!(matches!(err, StorageError::Malformed { .. }), "{err}");
}

#[test]
fn test_save_into_missing_directory_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonFileStore::new(dir.path().join("nope").join("contacts.json"));
    let err = store.save(&sample_collection()).unwrap_err();
    assert!(matches!(err, StorageError::Write { .. }));
    assert!(!err.is_read_error());
}

#[test]
fn test_memory_and_file_stores_agree() {
    let contacts = sample_collection();
    let (_dir, file) = temp_json_store(&contacts);
    let memory = MemoryStore::with_contacts(contacts);
    assert_eq!(file.load().unwrap(), memory.load().unwrap());
}

fn arb_contact() -> impl Strategy<Value = Contact> {
    (
        prop::collection::vec(".*", 8),
        prop::option::of("[0-9a-f]{8}"),
    )
        .prop_map(|(values, stored_id)| {
            let fields = ContactFields::from_inputs(values);
            match stored_id {
                Some(id) => Contact::from_parts(fields, ContactId::from_stored(id)),
                None => Contact::create(fields),
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_load_after_save_is_identity(contacts in prop::collection::vec(arb_contact(), 0..6)) {
        let (_dir, store) = temp_json_store(&contacts);
        prop_assert_eq!(store.load().unwrap(), contacts);
    }
}

#[cfg(unix)]
#[test]
fn test_save_keeps_existing_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.json");
    std::fs::write(&path, "[]").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();

    let mut store = JsonFileStore::new(&path);
    store.save(&sample_collection()).unwrap();
    store.save(&[]).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644);
}
