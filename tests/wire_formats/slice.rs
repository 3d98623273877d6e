//! Slice Wire Format Tests
//!
//! JSON and array-literal round trips preserving order and duplicates.

use crate::*;

const A: &str = "00000000-0000-0000-0000-00000000000a";
const B: &str = "00000000-0000-0000-0000-00000000000b";
const C: &str = "00000000-0000-0000-0000-00000000000c";
const D: &str = "00000000-0000-0000-0000-00000000000d";

// =============================================================================
// SORTING
// =============================================================================

#[test]
fn test_sort_d_b_c_a() -> uuidcol::Result<()> {
    let mut s = Slice::from_strings(Some(&[D, B, C, A][..]))?;
    s.sort();
    assert_eq!(s.strings(), vec![A, B, C, D]);
    Ok(())
}

#[test]
fn test_from_strings_failure_has_no_partial_result() {
    let err: uuidcol::Error = Slice::from_strings(Some(&[A, "nope", B][..]))
        .unwrap_err()
        .into();
    match err {
        uuidcol::Error::ElementParse { index, .. } => assert_eq!(index, 1),
        other => panic!("Expected ElementParse, got {:?}", other),
    }
}

// =============================================================================
// JSON
// =============================================================================

#[test]
fn test_duplicates_marshal_as_two_elements() -> uuidcol::Result<()> {
    let s = Slice::must_from_strings(&[A, A]);
    let json: serde_json::Value = serde_json::from_str(&s.to_json()?)?;
    assert_eq!(json.as_array().map(Vec::len), Some(2));
    Ok(())
}

#[test]
fn test_json_roundtrip_preserves_order() -> uuidcol::Result<()> {
    let s = Slice::must_from_strings(&[C, A, C, B]);
    let back = Slice::from_json(s.to_json()?.as_bytes())?;
    assert_eq!(back, s);
    Ok(())
}

#[test]
fn test_json_nil_vs_empty() -> uuidcol::Result<()> {
    assert_eq!(Slice::nil().to_json()?, "null");
    assert_eq!(Slice::new().to_json()?, "[]");
    assert!(Slice::from_json(b"null")?.is_nil());
    assert!(!Slice::from_json(b"[]")?.is_nil());
    Ok(())
}

#[test]
fn test_json_field_in_struct() {
    #[derive(serde::Serialize, serde::Deserialize, Debug)]
    struct Doc {
        ids: Slice,
    }

    let doc: Doc = serde_json::from_str(&format!(r#"{{"ids":["{}","{}"]}}"#, B, A)).unwrap();
    assert_eq!(doc.ids, Slice::must_from_strings(&[B, A]));

    let doc: Doc = serde_json::from_str(r#"{"ids":null}"#).unwrap();
    assert!(doc.ids.is_nil());
    assert_eq!(serde_json::to_string(&doc).unwrap(), r#"{"ids":null}"#);
}

#[test]
fn test_json_bad_element_leaves_receiver() {
    let mut s = Slice::must_from_strings(&[A]);
    let err: uuidcol::Error = s
        .unmarshal_json(format!(r#"["{}",42]"#, B).as_bytes())
        .unwrap_err()
        .into();
    assert!(matches!(err, uuidcol::Error::Serialization(_)));
    assert_eq!(s, Slice::must_from_strings(&[A]));
}

// =============================================================================
// ARRAY LITERAL
// =============================================================================

#[test]
fn test_array_literal_preserves_order_and_duplicates() -> uuidcol::Result<()> {
    let s = Slice::must_from_strings(&[D, A, D]);
    let mut back = Slice::nil();
    back.scan(&s.value())?;
    assert_eq!(back, s);
    Ok(())
}

#[test]
fn test_array_literal_accepts_driver_output() -> uuidcol::Result<()> {
    // Unquoted elements, as returned for uuid[] columns
    let mut s = Slice::nil();
    s.scan(&SqlValue::from(format!("{{{},{}}}", B, A).into_bytes()))?;
    assert_eq!(s, Slice::must_from_strings(&[B, A]));
    Ok(())
}

#[test]
fn test_malformed_literal_keeps_previous_content() {
    let mut s = Slice::must_from_strings(&[A, B]);
    let err: uuidcol::Error = s.scan(&SqlValue::from("not-an-array")).unwrap_err().into();
    assert!(err.is_format());
    assert_eq!(s, Slice::must_from_strings(&[A, B]));
}

#[test]
fn test_malformed_literal_keeps_nil() {
    let mut s = Slice::nil();
    let err: uuidcol::Error = s.scan(&SqlValue::from("not-an-array")).unwrap_err().into();
    assert!(err.is_format());
    assert!(s.is_nil());
}

// =============================================================================
// QUERIES
// =============================================================================

#[test]
fn test_contains_queries() {
    let s = Slice::must_from_strings(&[A, B]);
    let set = Slice::must_from_strings(&[C, B]).to_set();

    assert!(s.contains(&Uuid::parse_str(A).unwrap()));
    assert!(s.contains_any(&Slice::must_from_strings(&[D, A])));
    assert!(s.contains_any_from_set(&set));
    assert!(!s.contains_any_from_set(&Set::nil()));
}
