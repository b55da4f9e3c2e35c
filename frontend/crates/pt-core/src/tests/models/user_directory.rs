use crate::UserDirectory;
use crate::tests::directory;

#[test]
fn test_filter_matches_full_name_case_insensitively() {
    let matches = directory().filter_users("LOVE");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].id, "3");
}

#[test]
fn test_filter_matches_username() {
    let matches = directory().filter_users("ghop");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].full_name, "Grace Hopper");
}

#[test]
fn test_filter_preserves_directory_order() {
    let ids: Vec<_> = directory()
        .filter_users("a")
        .into_iter()
        .map(|user| user.id)
        .collect();
    assert_eq!(ids, vec!["3", "7", "9"]);
}

#[test]
fn test_filter_no_match_is_empty() {
    assert!(directory().filter_users("zzz").is_empty());
}

#[test]
fn test_from_json_accepts_numeric_and_string_ids() {
    let directory = UserDirectory::from_json(
        r#"[
            {"id": 3, "full_name": "Ada Lovelace", "username": "ada"},
            {"id": "7", "full_name": "Grace Hopper", "username": "ghopper"}
        ]"#,
    )
    .unwrap();

    assert_eq!(directory.len(), 2);
    assert_eq!(directory.find("3").unwrap().username, "ada");
    assert!(directory.find("7").is_some());
    assert!(directory.find("8").is_none());
}

#[test]
fn test_from_json_rejects_malformed_input() {
    assert!(UserDirectory::from_json("{not json").is_err());
}

#[test]
fn test_clones_share_entries() {
    let original = directory();
    let clone = original.clone();
    assert_eq!(original.len(), clone.len());
    assert!(!clone.is_empty());
}
