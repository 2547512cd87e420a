//! Typed request/response payloads for the Notion pages API.
//!
//! Only the slice of the API surface that the two-phase write touches is
//! modeled: create-page (parent database, title/select properties, one
//! paragraph child) and update-page (select/rich_text properties).

use serde::{Deserialize, Serialize};

use musebox_core::{NewRecord, RecordPatch};

/// A single rich-text span of type `text`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichText {
    #[serde(rename = "type")]
    pub kind: String,
    pub text: TextContent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextContent {
    pub content: String,
}

impl RichText {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            kind: "text".to_string(),
            text: TextContent {
                content: content.into(),
            },
        }
    }
}

/// A `title` property value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleProperty {
    pub title: Vec<RichText>,
}

impl TitleProperty {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            title: vec![RichText::text(content)],
        }
    }
}

/// A `rich_text` property value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RichTextProperty {
    pub rich_text: Vec<RichText>,
}

impl RichTextProperty {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            rich_text: vec![RichText::text(content)],
        }
    }
}

/// A `select` property value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectProperty {
    pub select: SelectOption,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

impl SelectProperty {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            select: SelectOption { name: name.into() },
        }
    }
}

/// Parent pointer for page creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parent {
    pub database_id: String,
}

/// A paragraph content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub object: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub paragraph: Paragraph,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    pub rich_text: Vec<RichText>,
}

impl Block {
    pub fn paragraph(content: impl Into<String>) -> Self {
        Self {
            object: "block".to_string(),
            kind: "paragraph".to_string(),
            paragraph: Paragraph {
                rich_text: vec![RichText::text(content)],
            },
        }
    }
}

/// Properties written at creation (phase A).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePageProperties {
    #[serde(rename = "Name")]
    pub name: TitleProperty,
    #[serde(rename = "Status")]
    pub status: SelectProperty,
}

/// `POST /v1/pages` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: CreatePageProperties,
    pub children: Vec<Block>,
}

impl CreatePageRequest {
    /// Build the phase-A payload: truncated title, `pending` status, and
    /// the full untruncated content as a paragraph body block.
    pub fn from_record(database_id: &str, record: &NewRecord) -> Self {
        Self {
            parent: Parent {
                database_id: database_id.to_string(),
            },
            properties: CreatePageProperties {
                name: TitleProperty::new(&record.title),
                status: SelectProperty::new(record.status.as_str()),
            },
            children: vec![Block::paragraph(&record.body)],
        }
    }
}

/// Properties written at enrichment (phase B): always all three together.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePageProperties {
    #[serde(rename = "Priority")]
    pub priority: SelectProperty,
    #[serde(rename = "Advice")]
    pub advice: RichTextProperty,
    #[serde(rename = "Status")]
    pub status: SelectProperty,
}

/// `PATCH /v1/pages/{id}` request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePageRequest {
    pub properties: UpdatePageProperties,
}

impl UpdatePageRequest {
    pub fn from_patch(patch: &RecordPatch) -> Self {
        Self {
            properties: UpdatePageProperties {
                priority: SelectProperty::new(&patch.priority),
                advice: RichTextProperty::new(&patch.advice),
                status: SelectProperty::new(patch.status.as_str()),
            },
        }
    }
}

/// The slice of a page response we read back: the assigned id.
#[derive(Debug, Clone, Deserialize)]
pub struct PageResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use musebox_core::{EvaluationRequest, NewRecord, RecordPatch};
    use serde_json::json;

    fn request() -> EvaluationRequest {
        EvaluationRequest {
            inspiration_content: "Build a faster cache".to_string(),
            priority_result: "high".to_string(),
            suggestion_detail: "Prototype an LRU layer".to_string(),
        }
    }

    #[test]
    fn test_create_page_wire_shape() {
        let record = NewRecord::from_request(&request());
        let payload = CreatePageRequest::from_record("db-1", &record);

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "parent": {"database_id": "db-1"},
                "properties": {
                    "Name": {"title": [{"type": "text", "text": {"content": "Build a faster cache"}}]},
                    "Status": {"select": {"name": "pending"}}
                },
                "children": [{
                    "object": "block",
                    "type": "paragraph",
                    "paragraph": {
                        "rich_text": [{"type": "text", "text": {"content": "Build a faster cache"}}]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_create_page_body_holds_untruncated_content() {
        let mut req = request();
        req.inspiration_content = "a".repeat(250);
        let record = NewRecord::from_request(&req);
        let payload = CreatePageRequest::from_record("db-1", &record);

        // Title is truncated, body block is not
        assert!(payload.properties.name.title[0].text.content.ends_with("..."));
        assert_eq!(
            payload.children[0].paragraph.rich_text[0].text.content,
            req.inspiration_content
        );
    }

    #[test]
    fn test_update_page_wire_shape() {
        let patch = RecordPatch::from_request(&request());
        let payload = UpdatePageRequest::from_patch(&patch);

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({
                "properties": {
                    "Priority": {"select": {"name": "high"}},
                    "Advice": {"rich_text": [{"type": "text", "text": {"content": "Prototype an LRU layer"}}]},
                    "Status": {"select": {"name": "processed"}}
                }
            })
        );
    }

    #[test]
    fn test_page_response_parses_id() {
        let parsed: PageResponse =
            serde_json::from_str(r#"{"id": "page-9", "object": "page", "archived": false}"#)
                .unwrap();
        assert_eq!(parsed.id, "page-9");
    }
}
