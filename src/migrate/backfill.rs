use std::fmt;

use serde_json::Number;

use crate::config::SessionTemplate;
use crate::models::{add_minutes, ExtraFields, Section, SectionKind, Session, Topic};

/// Outcome of a backfill pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub topics: usize,
    /// Topics that received a second session.
    pub extended: usize,
    /// Topics with zero or several sessions, left as they were.
    pub untouched: usize,
    pub minutes_added: u32,
}

impl fmt::Display for MigrationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} topics: {} extended, {} untouched, {} minutes added",
            self.topics, self.extended, self.untouched, self.minutes_added
        )
    }
}

/// The session appended after a topic's only session.
pub fn follow_up_session(topic: &Topic, template: &SessionTemplate) -> Session {
    let id = format!("{}-2", topic.slug_prefix());
    Session {
        title: format!("Advanced {} Concepts", topic.title),
        description: format!(
            "Delving deeper into {} for comprehensive understanding.",
            topic.title
        ),
        sections: vec![Section {
            id: format!("{id}-1"),
            title: format!("In-depth {} Analysis", topic.title),
            kind: SectionKind::Content,
            content: template.placeholder_content.clone(),
            estimated_time: Number::from(template.time_increment),
            extra: ExtraFields::new(),
        }],
        id,
        extra: ExtraFields::new(),
    }
}

/// Append a follow-up session to every topic that has exactly one.
///
/// Topics with zero or several sessions are not touched, so a second pass
/// over the result changes nothing.
pub fn extend_topics(topics: &mut [Topic], template: &SessionTemplate) -> MigrationReport {
    let mut report = MigrationReport {
        topics: topics.len(),
        ..Default::default()
    };

    for topic in topics.iter_mut() {
        if topic.sessions.len() != 1 {
            if topic.sessions.is_empty() {
                tracing::warn!(slug = %topic.slug, "topic has no sessions, skipping");
            } else {
                tracing::debug!(
                    slug = %topic.slug,
                    sessions = topic.sessions.len(),
                    "topic already has several sessions"
                );
            }
            report.untouched += 1;
            continue;
        }

        let session = follow_up_session(topic, template);
        let kinds: Vec<&str> = session.sections.iter().map(|s| s.kind.as_str()).collect();
        tracing::debug!(
            slug = %topic.slug,
            session = %session.id,
            kinds = ?kinds,
            minutes = session.estimated_time(),
            "appending session"
        );
        topic.total_estimated_time =
            add_minutes(&topic.total_estimated_time, template.time_increment);
        topic.sessions.push(session);

        report.extended += 1;
        report.minutes_added += template.time_increment;
    }

    report
}
