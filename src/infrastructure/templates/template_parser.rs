use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::locales;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$(?:(\$)|\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
        .expect("placeholder pattern is valid")
});

/// Resolves prompt templates for the configured language.
#[derive(Debug, Clone)]
pub struct TemplateParser {
    language: String,
    default_language: String,
}

impl TemplateParser {
    pub fn new(language: &str, default_language: &str) -> Self {
        let mut parser = Self {
            language: default_language.to_string(),
            default_language: default_language.to_string(),
        };
        parser.set_language(language);
        parser
    }

    /// Switches to `language`, or to the default language when no locale
    /// exists for it.
    pub fn set_language(&mut self, language: &str) {
        if locales::has_language(language) {
            self.language = language.to_string();
        } else {
            tracing::warn!(
                requested = %language,
                fallback = %self.default_language,
                "No templates for language, using default"
            );
            self.language = self.default_language.clone();
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Renders `group.key`, substituting `vars`. Placeholders without a value
    /// are left as written.
    pub fn get(&self, group: &str, key: &str, vars: &HashMap<&str, String>) -> Option<String> {
        let template = locales::lookup(&self.language, group, key)
            .or_else(|| locales::lookup(&self.default_language, group, key))?;

        Some(substitute(template, vars))
    }
}

fn substitute(template: &str, vars: &HashMap<&str, String>) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures| {
            if caps.get(1).is_some() {
                return "$".to_string();
            }
            let name = caps
                .get(2)
                .or_else(|| caps.get(3))
                .map(|m| m.as_str())
                .unwrap_or_default();
            vars.get(name)
                .cloned()
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}
