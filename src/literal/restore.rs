use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::escape::to_template;
use crate::config::TemplateRestore;
use crate::icons::IconTable;

/// A complete JSON string token.
static JSON_STRING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:[^"\\]|\\.)*""#).unwrap());

/// Turns encoded JSON back into the literal dialect.
///
/// Icon sentinels become bare identifiers again and selected string values
/// are written as backtick templates. Object keys are left as quoted keys.
pub struct Restorer<'a> {
    icons: &'a IconTable,
    placeholder: &'a str,
    mode: TemplateRestore,
}

impl<'a> Restorer<'a> {
    pub fn new(icons: &'a IconTable, placeholder: &'a str, mode: TemplateRestore) -> Self {
        Self {
            icons,
            placeholder,
            mode,
        }
    }

    pub fn restore(&self, json: &str) -> String {
        JSON_STRING_RE
            .replace_all(json, |caps: &Captures| {
                let token = &caps[0];
                let end = caps.get(0).map_or(json.len(), |m| m.end());
                if json[end..].trim_start().starts_with(':') {
                    return token.to_string();
                }

                let Ok(value) = serde_json::from_str::<String>(token) else {
                    return token.to_string();
                };
                if let Some(name) = self.icons.name_for_sentinel(&value) {
                    name.to_string()
                } else if self.wants_template(&value) {
                    to_template(&value)
                } else {
                    token.to_string()
                }
            })
            .into_owned()
    }

    fn wants_template(&self, value: &str) -> bool {
        value == self.placeholder
            || (self.mode == TemplateRestore::Multiline && value.contains('\n'))
    }
}
