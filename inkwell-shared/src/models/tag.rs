use serde::{Deserialize, Serialize};

/// A content tag. Tags form a one-level hierarchy through `parent_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Tag {
    pub id: i64,
    pub parent_id: Option<i64>,
    pub name: String,
}

/// Body for `POST /tag/create`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagCreateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_deserializes_with_null_parent() {
        let tag: Tag = serde_json::from_str(r#"{"id":7,"parent_id":null,"name":"rust"}"#).unwrap();
        assert_eq!(tag.id, 7);
        assert_eq!(tag.parent_id, None);
        assert_eq!(tag.name, "rust");
    }

    #[test]
    fn create_request_omits_absent_parent() {
        let request = TagCreateRequest {
            parent_id: None,
            name: "wasm".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"name":"wasm"}"#
        );
    }
}
