use super::{create_language, create_test_storage};

#[test]
fn test_create_and_find_language() {
    let (storage, _temp_dir) = create_test_storage();
    let en = create_language(&storage, "en");

    let by_code = storage.find_language_by_code("en").unwrap().unwrap();
    assert_eq!(by_code.id, en.id);
    assert_eq!(by_code.name, "Language en");

    let by_id = storage.get_language(en.id).unwrap().unwrap();
    assert_eq!(by_id.code, "en");

    assert!(storage.find_language_by_code("zz").unwrap().is_none());
}

#[test]
fn test_duplicate_language_code() {
    let (storage, _temp_dir) = create_test_storage();
    create_language(&storage, "fa");
    let err = storage.create_language("fa", "Persian").unwrap_err();
    assert!(err.is_duplicate(), "expected duplicate, got {err:?}");
}

#[test]
fn test_language_code_check_constraint() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(storage.create_language("EN", "English").is_err());
    assert!(storage.create_language("", "Nothing").is_err());
}

#[test]
fn test_list_languages_ordered_by_code() {
    let (storage, _temp_dir) = create_test_storage();
    create_language(&storage, "fa");
    create_language(&storage, "de");
    create_language(&storage, "en");
    let codes: Vec<String> =
        storage.list_languages().unwrap().into_iter().map(|l| l.code).collect();
    assert_eq!(codes, ["de", "en", "fa"]);
}
