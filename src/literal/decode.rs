use crate::error::{context_window, MigrateError, CONTEXT_RADIUS};
use crate::models::Topic;

/// Parse normalized JSON into topics.
///
/// On failure the error carries a window of the normalized text around the
/// offending position.
pub fn decode_topics(json: &str) -> Result<Vec<Topic>, MigrateError> {
    serde_json::from_str(json).map_err(|source| {
        let offset = error_offset(json, &source);
        MigrateError::Decode {
            context: context_window(json, offset, CONTEXT_RADIUS).to_string(),
            offset,
            source,
        }
    })
}

/// Encode topics as JSON indented by two spaces.
pub fn encode_topics(topics: &[Topic]) -> Result<String, MigrateError> {
    serde_json::to_string_pretty(topics).map_err(MigrateError::Encode)
}

/// Byte offset of a serde_json error, from its 1-based line and column.
fn error_offset(text: &str, err: &serde_json::Error) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(err.line().saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + err.column().saturating_sub(1)).min(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SectionKind, TopicId};

    const TOPICS: &str = r#"[
  {
    "id": "topic-1",
    "title": "Cardio",
    "icon": "Heart_ICON",
    "slug": "cardio-basics",
    "totalEstimatedTime": 30,
    "sessions": [
      {
        "id": "cardio-1",
        "title": "Intro",
        "description": "Basics",
        "sections": [
          {
            "id": "cardio-1-1",
            "title": "Pulse",
            "type": "content",
            "content": "Feel it",
            "estimatedTime": 30
          }
        ]
      }
    ],
    "color": "bg-red-500"
  }
]"#;

    #[test]
    fn test_decodes_topics() {
        let topics = decode_topics(TOPICS).expect("decode");
        assert_eq!(topics.len(), 1);
        let topic = &topics[0];
        assert_eq!(topic.id, TopicId::Text("topic-1".to_string()));
        assert_eq!(topic.icon, Some(Some("Heart_ICON".to_string())));
        assert_eq!(topic.total_estimated_time.as_u64(), Some(30));
        assert_eq!(topic.sessions[0].sections[0].kind, SectionKind::Content);
        assert_eq!(topic.sessions[0].estimated_time(), 30.0);
        assert_eq!(topic.extra["color"], "bg-red-500");
    }

    #[test]
    fn test_encode_matches_pretty_input() {
        let topics = decode_topics(TOPICS).expect("decode");
        assert_eq!(encode_topics(&topics).expect("encode"), TOPICS);
    }

    #[test]
    fn test_syntax_error_reports_context() {
        let json = "[\n  {\"slug\": \"a\",, \"title\": \"b\"}\n]";
        let err = decode_topics(json).expect_err("syntax error");
        match err {
            MigrateError::Decode { offset, context, .. } => {
                assert!((16..=18).contains(&offset), "offset {offset}");
                assert!(context.contains(",,"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_field_is_a_decode_error() {
        let json = r#"[{"id": 1, "title": "No slug", "totalEstimatedTime": 0, "sessions": []}]"#;
        let err = decode_topics(json).expect_err("missing slug");
        assert!(err.to_string().contains("slug"));
    }

    #[test]
    fn test_error_offset_counts_lines() {
        let text = "[1,\n 2,\n x]";
        let err = serde_json::from_str::<serde_json::Value>(text).expect_err("bare x");
        assert_eq!(err.line(), 3);
        assert_eq!(&text[error_offset(text, &err)..], "x]");
    }
}
