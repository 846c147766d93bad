//! Bidirectional table between bare icon identifiers and sentinel strings.
//!
//! The content file references icons as bare identifiers (`icon: Heart`),
//! which strict JSON cannot hold. While topics are decoded each identifier
//! stands in as the string `Heart_ICON`, and is put back on the way out.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::error::MigrateError;

/// Suffix turning an icon name into its sentinel.
pub const SENTINEL_SUFFIX: &str = "_ICON";

/// Icons imported by the learning content file.
pub const DEFAULT_ICONS: &[&str] = &[
    "Stethoscope",
    "Heart",
    "Pill",
    "Shield",
    "Activity",
    "Zap",
    "UserCheck",
    "FileText",
    "Scale",
    "Globe",
    "Brain",
    "Users",
    "ClipboardList",
    "TrendingUp",
];

#[derive(Debug, Clone)]
pub struct IconTable {
    names: Vec<String>,
    /// Matches any known name as a whole identifier, capturing a following
    /// colon so object keys can be told apart from values.
    pattern: Option<Regex>,
}

impl IconTable {
    /// Build a table from identifier names.
    ///
    /// Names must be valid identifiers and unique, otherwise the mapping
    /// would not be bijective.
    pub fn new<I, S>(names: I) -> Result<Self, MigrateError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();

        for (i, name) in names.iter().enumerate() {
            if !is_identifier(name) {
                return Err(MigrateError::Config(format!(
                    "icon name {name:?} is not an identifier"
                )));
            }
            if names[..i].contains(name) {
                return Err(MigrateError::Config(format!("icon name {name} is listed twice")));
            }
        }

        let pattern = if names.is_empty() {
            None
        } else {
            let alternatives: Vec<String> = names.iter().map(|n| regex::escape(n)).collect();
            let source = format!(r"\b(?:{})\b(\s*:)?", alternatives.join("|"));
            Some(Regex::new(&source).map_err(|e| MigrateError::Config(e.to_string()))?)
        };

        Ok(Self { names, pattern })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Sentinel string standing in for `name`.
    pub fn sentinel(name: &str) -> String {
        format!("{name}{SENTINEL_SUFFIX}")
    }

    /// Icon name whose sentinel equals `value`, if any.
    pub fn name_for_sentinel(&self, value: &str) -> Option<&str> {
        let name = value.strip_suffix(SENTINEL_SUFFIX)?;
        self.names.iter().find(|n| *n == name).map(String::as_str)
    }

    pub fn is_sentinel(&self, value: &str) -> bool {
        self.name_for_sentinel(value).is_some()
    }

    /// Replace every bare icon identifier in value position with its quoted
    /// sentinel. Identifiers directly followed by `:` are object keys and are
    /// left alone.
    ///
    /// `code` must not contain string literals.
    pub fn quote_identifiers<'t>(&self, code: &'t str) -> Cow<'t, str> {
        let Some(pattern) = &self.pattern else {
            return Cow::Borrowed(code);
        };
        pattern.replace_all(code, |caps: &Captures| {
            if caps.get(1).is_some() {
                caps[0].to_string()
            } else {
                format!("\"{}\"", Self::sentinel(&caps[0]))
            }
        })
    }
}

impl Default for IconTable {
    fn default() -> Self {
        Self::new(DEFAULT_ICONS.iter().copied())
            .expect("default icon names are valid identifiers")
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
