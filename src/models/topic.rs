use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::{present, ExtraFields, Session};

/// A learning topic as declared in the content file.
///
/// Field order matches the order the content file declares them in, so
/// encoded output reads the same as hand-written entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    /// `None` when the key is absent, `Some(None)` for an explicit `null`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    /// Icon reference. Holds the sentinel token while the topic is in transit.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub icon: Option<Option<String>>,
    pub slug: String,
    /// Sum of the estimated minutes of every session. Any JSON number.
    pub total_estimated_time: Number,
    pub sessions: Vec<Session>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl Topic {
    /// First hyphen-delimited segment of the slug.
    ///
    /// `"history-taking-communication"` yields `"history"`.
    pub fn slug_prefix(&self) -> &str {
        self.slug.split('-').next().unwrap_or(&self.slug)
    }
}

/// Topic identifiers appear both as numbers and as strings across content files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TopicId {
    Number(u64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn topic_with_slug(slug: &str) -> Topic {
        Topic {
            id: TopicId::Number(1),
            title: "Cardio".to_string(),
            description: None,
            icon: None,
            slug: slug.to_string(),
            total_estimated_time: Number::from(0),
            sessions: vec![],
            extra: ExtraFields::new(),
        }
    }

    #[test]
    fn test_slug_prefix_takes_first_segment() {
        assert_eq!(topic_with_slug("cardio-basics").slug_prefix(), "cardio");
        assert_eq!(topic_with_slug("wound-care-101").slug_prefix(), "wound");
    }

    #[test]
    fn test_slug_prefix_without_hyphen() {
        assert_eq!(topic_with_slug("ethics").slug_prefix(), "ethics");
        assert_eq!(topic_with_slug("").slug_prefix(), "");
    }

    #[test]
    fn test_id_accepts_number_or_string() {
        let n: TopicId = serde_json::from_str("7").expect("numeric id");
        let s: TopicId = serde_json::from_str("\"topic-7\"").expect("string id");
        assert_eq!(n, TopicId::Number(7));
        assert_eq!(s, TopicId::Text("topic-7".to_string()));
    }

    #[test]
    fn test_null_description_survives_round_trip() {
        let json = r#"{"id":3,"title":"Ethics","description":null,"icon":"Scale_ICON","slug":"ethics","totalEstimatedTime":0,"sessions":[]}"#;
        let topic: Topic = serde_json::from_str(json).expect("decode topic");
        assert_eq!(topic.description, Some(None));
        assert_eq!(serde_json::to_string(&topic).expect("encode topic"), json);
    }

    #[test]
    fn test_absent_description_stays_absent() {
        let json = r#"{"id":3,"title":"Ethics","slug":"ethics","totalEstimatedTime":12.5,"sessions":[]}"#;
        let topic: Topic = serde_json::from_str(json).expect("decode topic");
        assert_eq!(topic.description, None);
        assert_eq!(serde_json::to_string(&topic).expect("encode topic"), json);
    }
}
