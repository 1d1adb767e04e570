use std::collections::HashMap;

use bevy_ecs::resource::Resource;

use super::{BUILTIN_LOCALE, ContentError};

/// Localized string table with named placeholder substitution.
///
/// Understands the subset of Fluent the game content uses: `key = value`
/// lines, `#` comments, indented continuation lines, and the placeables
/// `{ $var }` and `{ CAPITALIZE($var) }`.
#[derive(Resource, Debug, Clone, Default)]
pub struct Localization {
    strings: HashMap<String, String>,
}

impl Localization {
    pub fn new() -> Self {
        Self::default()
    }

    /// The compiled-in English bundle.
    pub fn builtin() -> Self {
        // The bundled file is covered by a unit test; a parse failure here is a build defect.
        Self::from_ftl(BUILTIN_LOCALE).unwrap_or_default()
    }

    pub fn from_ftl(source: &str) -> Result<Self, ContentError> {
        let mut loc = Self::new();
        loc.extend_from_ftl(source)?;
        Ok(loc)
    }

    /// Merge entries from `source`, overriding existing keys.
    pub fn extend_from_ftl(&mut self, source: &str) -> Result<(), ContentError> {
        let mut current: Option<String> = None;

        for (idx, raw) in source.lines().enumerate() {
            let trimmed = raw.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                current = None;
                continue;
            }

            if raw.starts_with(char::is_whitespace) {
                if let Some(value) = current.as_ref().and_then(|key| self.strings.get_mut(key)) {
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(trimmed);
                    continue;
                }
            }

            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(ContentError::MalformedLocale {
                    line: idx + 1,
                    text: raw.to_string(),
                });
            };
            let key = key.trim();
            if key.is_empty() {
                return Err(ContentError::MalformedLocale {
                    line: idx + 1,
                    text: raw.to_string(),
                });
            }
            self.strings.insert(key.to_string(), value.trim().to_string());
            current = Some(key.to_string());
        }
        Ok(())
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// Raw template for `key`, or the key itself when it is unknown.
    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Resolve `key` and substitute `args` into its placeables.
    pub fn format(&self, key: &str, args: &[(&str, &str)]) -> String {
        render(self.get(key), args)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

fn render(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        match eval(after[..close].trim(), args) {
            Some(value) => out.push_str(&value),
            // Unresolved placeables render verbatim, like Fluent does.
            None => out.push_str(&rest[open..open + close + 2]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

fn eval(expr: &str, args: &[(&str, &str)]) -> Option<String> {
    if let Some(name) = expr.strip_prefix('$') {
        return lookup(name.trim(), args).map(str::to_string);
    }
    let inner = expr.strip_prefix("CAPITALIZE(")?.strip_suffix(')')?;
    let name = inner.trim().strip_prefix('$')?;
    lookup(name.trim(), args).map(capitalize)
}

fn lookup<'a>(name: &str, args: &[(&str, &'a str)]) -> Option<&'a str> {
    args.iter().find(|(k, _)| *k == name).map(|(_, v)| *v)
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}
