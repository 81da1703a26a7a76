//! Tests for the text-in, text-out operations

use ini_content::{
    Entry, Error, IniObject, KeyPath, edit_string, get_item, make_settings, set_batch, set_item,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const DB: &str = "[db]\nhost=localhost\nport=5432\n\n[cache]\nttl=60\n";

#[test]
fn test_get_section_key() {
    assert_eq!(
        get_item("[db]\nhost=localhost\n", "db.host").unwrap(),
        Some(Entry::from("localhost"))
    );
}

#[test]
fn test_set_section_key() {
    let out = set_item("[db]\nhost=localhost\n", "db.host", "remote").unwrap();
    assert_eq!(out, "[db]\nhost=remote\n");
}

#[test]
fn test_get_missing_is_none() {
    assert_eq!(get_item(DB, "db.user").unwrap(), None);
    assert_eq!(get_item(DB, "missing").unwrap(), None);
    assert_eq!(get_item(DB, "nope.key").unwrap(), None);
}

#[test]
fn test_get_single_segment_section_returns_whole_section() {
    let entry = get_item(DB, "cache").unwrap().unwrap();
    let section = entry.as_section().unwrap();
    assert_eq!(section.get("ttl").map(String::as_str), Some("60"));
}

#[test]
fn test_set_leaves_siblings_and_other_sections() {
    let out = set_item(DB, "db.port", "6543").unwrap();
    let object = IniObject::parse(&out).unwrap();

    let db = object.section("db").unwrap();
    assert_eq!(db.get("host").map(String::as_str), Some("localhost"));
    assert_eq!(db.get("port").map(String::as_str), Some("6543"));
    assert_eq!(object.section("cache"), IniObject::parse(DB).unwrap().section("cache"));
}

#[test]
fn test_set_does_not_modify_input() {
    let input = String::from(DB);
    let _ = set_item(&input, "db.host", "remote").unwrap();
    assert_eq!(input, DB);
}

#[test]
fn test_set_compound_key_without_section() {
    let out = set_item("", "a.b.c", "x").unwrap();
    assert_eq!(out, "a.b.c=x\n");

    let object = IniObject::parse(&out).unwrap();
    assert_eq!(object.entry("a.b.c"), Some(&Entry::from("x")));
    assert!(object.entry("a").is_none());
}

#[rstest]
#[case::existing_section("[a]\nk=1\n", "a.b.c", "[a]\nk=1\nb.c=x\n")]
#[case::scalar_not_a_section("a=1\n", "a.b", "a=1\na.b=x\n")]
#[case::top_level("[s]\nk=v\n", "top", "top=x\n\n[s]\nk=v\n")]
#[case::new_key_in_section("[s]\nk=v\n", "s.n", "[s]\nk=v\nn=x\n")]
fn test_set_resolution(#[case] input: &str, #[case] key: &str, #[case] expected: &str) {
    assert_eq!(set_item(input, key, "x").unwrap(), expected);
}

#[test]
fn test_set_single_segment_replaces_section() {
    let out = set_item(DB, "cache", "off").unwrap();
    let object = IniObject::parse(&out).unwrap();
    assert_eq!(object.entry("cache"), Some(&Entry::from("off")));
}

#[test]
fn test_blank_key_removed_when_section_touched_by_get() {
    let mut object = IniObject::parse("[s]\n=value\nk=v\n").unwrap();
    object.get(&KeyPath::parse("s.k")).unwrap();
    assert!(!object.section("s").unwrap().contains_key(""));
}

#[test]
fn test_blank_key_removed_when_section_touched_by_set() {
    let out = set_item("[s]\n=value\nk=v\n[t]\n=keep\n", "s.k", "w").unwrap();
    assert_eq!(out, "[s]\nk=w\n\n[t]\n=keep\n");
}

#[test]
fn test_batch_last_write_wins() {
    let batch = make_settings([("db.host", "first"), ("db.host", "second")]);
    let out = edit_string(DB, &batch).unwrap();
    assert_eq!(get_item(&out, "db.host").unwrap(), Some(Entry::from("second")));
}

#[test]
fn test_set_batch_from_json_settings() {
    let settings = r#"[
        {"path": ["db", "host"], "value": "remote"},
        {"path": ["cache", "ttl"], "value": "120"}
    ]"#;

    let out = set_batch(DB, settings).unwrap();
    assert_eq!(get_item(&out, "db.host").unwrap(), Some(Entry::from("remote")));
    assert_eq!(get_item(&out, "cache.ttl").unwrap(), Some(Entry::from("120")));
}

#[test]
fn test_set_batch_rejects_malformed_settings() {
    assert!(matches!(set_batch(DB, "[{\"path\": 1}]"), Err(Error::Json(_))));
}

#[test]
fn test_get_ignores_byte_order_mark() {
    assert_eq!(
        get_item("\u{feff}[db]\nhost=h\n", "db.host").unwrap(),
        Some(Entry::from("h"))
    );
}

#[test]
fn test_set_empty_key_in_section_is_rejected() {
    let result = set_item("[a]\nk=1\n", "a.", "x");
    assert!(matches!(result, Err(Error::InvalidPath { .. })));
}

#[test]
fn test_section_name_with_carriage_return_is_parse_error() {
    assert!(matches!(
        set_item("[a\rb]\nk=v\n", "a", "x"),
        Err(Error::Parse { .. })
    ));
}

#[test]
fn test_malformed_ini_is_parse_error() {
    assert!(matches!(get_item("[db\n", "db.host"), Err(Error::Parse { .. })));
    assert!(matches!(set_item("[]\n", "a", "b"), Err(Error::Parse { .. })));
}
