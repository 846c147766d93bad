use learning_migrate::literal::{
    decode_topics, encode_topics, unescape, scan::Quote, DialectNormalizer, Restorer,
};
use learning_migrate::*;
use speculate2::speculate;

const TOPIC: &str = r#"[
  {
    id: 4,
    title: 'Wound Care',
    icon: Shield,
    slug: 'wound-care',
    totalEstimatedTime: 20,
    sessions: [
      {
        id: 'wound-1',
        title: 'Dressings',
        description: "Choosing a dressing",
        sections: [
          {
            id: 'wound-1-1',
            title: 'Types',
            type: 'video',
            content: `Line one
Line two with a \` backtick`,
            estimatedTime: 20,
            videoUrl: 'https://example.com/v',
          },
        ],
      },
    ],
  },
]"#;

speculate! {
    before {
        let icons = IconTable::default();
    }

    describe "icon sentinels" {
        it "round-trip to the original identifiers" {
            for name in icons.names() {
                let literal = format!("[{{ icon: {name} }}]");
                let json = DialectNormalizer::new(&icons).normalize(&literal).expect("normalize");
                let restored = Restorer::new(&icons, "", TemplateRestore::Placeholder).restore(&json);
                assert_eq!(restored, format!("[{{ \"icon\": {name} }}]"));
            }
        }

        it "do not touch icon names inside content text" {
            let literal = "[{ title: 'Heart failure', note: `Brain and Users` }]";
            let json = DialectNormalizer::new(&icons).normalize(literal).expect("normalize");
            assert!(!json.contains("_ICON"));
        }
    }

    describe "decoding" {
        it "reads every quoting style and keeps unknown fields" {
            let json = DialectNormalizer::new(&icons).normalize(TOPIC).expect("normalize");
            let topics = decode_topics(&json).expect("decode");

            let section = &topics[0].sessions[0].sections[0];
            assert_eq!(topics[0].id, models::TopicId::Number(4));
            assert_eq!(topics[0].icon, Some(Some("Shield_ICON".to_string())));
            assert_eq!(section.kind, models::SectionKind::Video);
            assert_eq!(section.content, "Line one\nLine two with a ` backtick");
            assert_eq!(section.extra["videoUrl"], "https://example.com/v");
        }
    }

    describe "multiline restoration" {
        it "writes multi-line values back as templates" {
            let json = DialectNormalizer::new(&icons).normalize(TOPIC).expect("normalize");
            let topics = decode_topics(&json).expect("decode");
            let encoded = encode_topics(&topics).expect("encode");

            let restored = Restorer::new(&icons, "", TemplateRestore::Multiline).restore(&encoded);

            let template = "`Line one\nLine two with a \\` backtick`";
            assert!(restored.contains(&format!("\"content\": {template}")));
            assert_eq!(
                unescape(template, Quote::Backtick).expect("valid template"),
                "Line one\nLine two with a ` backtick"
            );
            assert!(restored.contains("\"icon\": Shield,"));
        }

        it "survives a full migration and a second pass" {
            let source = format!(
                "export const learningContent: LearningTopic[] = {TOPIC};\n"
            );
            let migrator = Migrator::new(MigrationConfig {
                restore_templates: TemplateRestore::Multiline,
                ..Default::default()
            }).expect("Failed to build migrator");

            let first = migrator.migrate_source(&source).expect("first pass");
            let second = migrator.migrate_source(&first.content).expect("second pass");

            assert_eq!(first.report.extended, 1);
            assert_eq!(second.report.extended, 0);
            assert_eq!(first.content, second.content);
            assert!(first.content.contains("\"id\": \"wound-2\""));
        }
    }
}
