//! JSON support for document snapshots.
//!
//! Snapshots use the rich-text editor's JSON shape (`type`, `attrs`,
//! `content`, `text`, `marks`). A snapshot that is `null` or `{}` (the
//! storage default for a document never written) is absent.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::algo::{diff_with_config, DiffConfig};
use crate::error::{DocError, DocResult};
use crate::node::Node;

/// Parse a JSON document that must be present.
pub fn parse_document(json: &str) -> DocResult<Node> {
    let value: Value = serde_json::from_str(json)?;
    if !value.is_object() {
        return Err(DocError::not_an_object(&value));
    }
    Ok(serde_json::from_value(value)?)
}

/// Parse a JSON snapshot; `null` and `{}` mean the document did not exist.
pub fn parse_snapshot(json: &str) -> DocResult<Option<Node>> {
    snapshot_from_value(serde_json::from_str(json)?)
}

/// Convert an already parsed JSON value into an optional snapshot.
pub fn snapshot_from_value(value: Value) -> DocResult<Option<Node>> {
    match &value {
        Value::Null => return Ok(None),
        Value::Object(map) if map.is_empty() => return Ok(None),
        Value::Object(_) => {}
        other => return Err(DocError::not_an_object(other)),
    }
    Ok(Some(serde_json::from_value(value)?))
}

/// Serialize a node to compact JSON.
pub fn to_json_string(node: &Node) -> DocResult<String> {
    Ok(serde_json::to_string(node)?)
}

/// Serialize a node to a JSON value.
pub fn to_json_value(node: &Node) -> DocResult<Value> {
    Ok(serde_json::to_value(node)?)
}

/// Parse two JSON snapshots, diff them with the default config, and return
/// the merged document as JSON.
pub fn diff_json(old: &str, new: &str) -> DocResult<String> {
    diff_json_with_config(old, new, &DiffConfig::default())
}

/// [`diff_json`] with an explicit config.
pub fn diff_json_with_config(old: &str, new: &str, config: &DiffConfig) -> DocResult<String> {
    let old = parse_snapshot(old)?;
    let new = parse_snapshot(new)?;
    let result = diff_with_config(old.as_ref(), new.as_ref(), config);
    to_json_string(&result.document)
}

/// Deserialize `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::attr::{AttrValue, AttrsExt};
    use crate::node::{kind, Mark};
    use crate::status::DiffStatus;

    const DOC: &str = r#"{
        "type": "doc",
        "content": [
            {"type": "heading", "attrs": {"level": 2, "textAlign": null},
             "content": [{"type": "text", "text": "Plan"}]},
            {"type": "paragraph",
             "content": [{"type": "text", "text": "see ",
                          "marks": [{"type": "link", "attrs": {"href": "https://a.example"}}]}]},
            {"type": "horizontalRule"}
        ]
    }"#;

    #[test]
    fn test_parse_document_shape() {
        let doc = parse_document(DOC).unwrap();
        assert!(doc.is_kind(kind::DOC));
        assert_eq!(doc.content().len(), 3);

        let heading = &doc.content()[0];
        assert_eq!(heading.attrs.get_attr("level"), Some(&AttrValue::from(2i64)));
        assert_eq!(heading.attrs.get_attr("textAlign"), Some(&AttrValue::Null));
        assert_eq!(heading.text_content(), "Plan");

        let run = &doc.content()[1].content()[0];
        assert_eq!(
            run.mark_list(),
            &[Mark::new("link").attr("href", "https://a.example")]
        );

        let rule = &doc.content()[2];
        assert!(rule.children.is_none());
        assert!(rule.attrs.is_empty());
    }

    #[test]
    fn test_roundtrip_preserves_absent_fields() {
        let doc = parse_document(DOC).unwrap();
        let value = to_json_value(&doc).unwrap();
        assert_eq!(value["content"][2], json!({"type": "horizontalRule"}));
        assert_eq!(value["content"][1]["content"][0]["text"], json!("see "));
        assert_eq!(parse_document(&to_json_string(&doc).unwrap()).unwrap(), doc);
    }

    #[test]
    fn test_null_attrs_are_empty() {
        let node = parse_document(r#"{"type": "paragraph", "attrs": null}"#).unwrap();
        assert!(node.attrs.is_empty());
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_document("[1]"), Err(DocError::NotAnObject { found: "array" })));
        assert!(matches!(parse_document("{\"text\": \"x\"}"), Err(DocError::Json(_))));
        assert!(matches!(parse_document("{"), Err(DocError::Json(_))));
        assert!(matches!(parse_snapshot("3"), Err(DocError::NotAnObject { found: "number" })));
    }

    #[test]
    fn test_absent_snapshots() {
        assert_eq!(parse_snapshot("null").unwrap(), None);
        assert_eq!(parse_snapshot("{}").unwrap(), None);
        assert!(parse_snapshot(DOC).unwrap().is_some());
    }

    #[test]
    fn test_diff_json_status_markers() {
        let old = r#"{"type":"doc","content":[
            {"type":"paragraph","content":[{"type":"text","text":"a"}]},
            {"type":"paragraph","content":[{"type":"text","text":"b"}]}]}"#;
        let new = r#"{"type":"doc","content":[
            {"type":"paragraph","content":[{"type":"text","text":"a"}]},
            {"type":"paragraph","content":[{"type":"text","text":"c"}]}]}"#;

        let out: Value = serde_json::from_str(&diff_json(old, new).unwrap()).unwrap();
        assert_eq!(out["type"], json!("doc"));
        let content = out["content"].as_array().unwrap();
        assert_eq!(content.len(), 3);
        assert!(content[0].get("attrs").is_none());
        assert_eq!(content[1]["attrs"]["diffStatus"], json!("removed"));
        assert_eq!(content[1]["content"][0]["attrs"]["diffStatus"], json!("removed"));
        assert_eq!(content[2]["attrs"]["diffStatus"], json!("added"));
    }

    #[test]
    fn test_diff_json_unchanged_is_identity() {
        let src = r#"{"type":"doc","content":[
            {"type":"heading","attrs":{"id":9007199254740993,"level":2,"ratio":0.5}},
            {"type":"image","attrs":{"width":-12,"scale":2.0}}]}"#;
        let out: Value = serde_json::from_str(&diff_json(src, src).unwrap()).unwrap();
        assert_eq!(out, serde_json::from_str::<Value>(src).unwrap());
        assert_eq!(out["content"][0]["attrs"]["level"], json!(2));
        assert_eq!(out["content"][0]["attrs"]["id"], json!(9007199254740993u64));
    }

    #[test]
    fn test_diff_json_detects_large_integer_change() {
        let old = r#"{"type":"doc","content":[
            {"type":"heading","attrs":{"id":9007199254740992}}]}"#;
        let new = r#"{"type":"doc","content":[
            {"type":"heading","attrs":{"id":9007199254740993}}]}"#;
        let out = parse_document(&diff_json(old, new).unwrap()).unwrap();
        let statuses: Vec<_> = out.content().iter().map(Node::status).collect();
        assert_eq!(statuses, [Some(DiffStatus::Removed), Some(DiffStatus::Added)]);
    }

    #[test]
    fn test_diff_json_absent_sides() {
        let out = diff_json("null", "null").unwrap();
        assert_eq!(
            serde_json::from_str::<Value>(&out).unwrap(),
            json!({"type": "doc", "content": []})
        );

        let out = diff_json("{}", DOC).unwrap();
        let merged = parse_document(&out).unwrap();
        assert_eq!(merged.count_status(DiffStatus::Added), merged.node_count() - 1);
    }
}
