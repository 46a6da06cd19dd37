use listdiff::{diff, diff_sectioned, DiffOptions, EditScript, SectionedPatch, SectionedSequence};

#[test]
fn edit_script_json() {
    let script = diff(&[1, 2, 3], &[2, 3, 4]);
    let json = serde_json::to_string(&script).unwrap();
    assert_eq!(
        json,
        r#"{"deletions":[{"Delete":{"index":0,"value":1}}],"insertions":[{"Insert":{"index":2,"value":4}}]}"#
    );
    let back: EditScript<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, script);
}

#[test]
fn sectioned_sequence_json_is_a_list_of_sections() {
    let s: SectionedSequence<String, i32> = [("a".to_string(), vec![1])].into_iter().collect();
    let json = serde_json::to_string(&s).unwrap();
    assert_eq!(json, r#"[{"key":"a","values":[1]}]"#);
    let back: SectionedSequence<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}

#[test]
fn sectioned_patch_json() {
    let lhs: SectionedSequence<String, i32> = [("a".to_string(), vec![1])].into_iter().collect();
    let rhs: SectionedSequence<String, i32> = [("b".to_string(), vec![1])].into_iter().collect();
    let patch = diff_sectioned(&lhs, &rhs);
    let json = serde_json::to_string(&patch).unwrap();
    let back: SectionedPatch<String, i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, patch);
}

#[test]
fn options_json() {
    let json = serde_json::to_string(&DiffOptions::default()).unwrap();
    assert_eq!(json, r#"{"tie_break":"PreferInsert"}"#);
}
