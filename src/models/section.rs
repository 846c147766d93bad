use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::ExtraFields;

/// The smallest unit of learning content.
///
/// Kind-specific payloads (`quizQuestions`, `caseQuestions`, `videoUrl`,
/// `externalUrl`, ...) stay in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SectionKind,
    pub content: String,
    /// Minutes. Any JSON number.
    pub estimated_time: Number,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

/// The presentation type of a section.
///
/// - `Content`: Markdown body text
/// - `Quiz`: Multiple-choice questions
/// - `CaseStudy`: Clinical case with open questions
/// - `Video`: Embedded video
/// - `ExternalLink`: Pointer to an outside resource
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Content,
    Quiz,
    CaseStudy,
    Video,
    ExternalLink,
}

impl SectionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Content => "content",
            Self::Quiz => "quiz",
            Self::CaseStudy => "case-study",
            Self::Video => "video",
            Self::ExternalLink => "external-link",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_str_matches_serialized_tag() {
        for kind in [
            SectionKind::Content,
            SectionKind::Quiz,
            SectionKind::CaseStudy,
            SectionKind::Video,
            SectionKind::ExternalLink,
        ] {
            let json = serde_json::to_string(&kind).expect("serialize");
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&SectionKind::CaseStudy).expect("serialize");
        assert_eq!(json, "\"case-study\"");
    }

    #[test]
    fn test_unmodelled_fields_survive() {
        let json = r#"{"id":"q-1","title":"Check","type":"quiz","content":"","estimatedTime":5,"quizQuestions":[{"id":"a"}]}"#;
        let section: Section = serde_json::from_str(json).expect("decode section");
        assert_eq!(section.kind, SectionKind::Quiz);
        assert!(section.extra.contains_key("quizQuestions"));
        assert_eq!(serde_json::to_string(&section).expect("encode section"), json);
    }
}
