//! UI strings. The portal ships a single English bundle; lookups fall back to the key.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::BTreeMap;

static BUNDLE: Lazy<Value> = Lazy::new(|| {
    serde_json::from_str(include_str!("../static/i18n/en.json"))
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()))
});

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

/// Translate a key.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key, substituting `{name}` placeholders.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    let Some(mut text) = get_nested_value(&BUNDLE, key)
        .and_then(Value::as_str)
        .map(str::to_string)
    else {
        return key.to_string();
    };
    if let Some(args) = args {
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
    }
    text
}

/// Shorthand for a single placeholder.
#[must_use]
pub fn tr1(key: &str, name: &str, value: &str) -> String {
    let mut args = BTreeMap::new();
    args.insert(name, value);
    tr(key, Some(&args))
}

/// Whether a key exists in the bundle.
#[must_use]
pub fn has(key: &str) -> bool {
    get_nested_value(&BUNDLE, key).is_some_and(Value::is_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::{InfoPage, Role, sections_for};

    #[test]
    fn missing_keys_fall_back_to_key() {
        assert_eq!(t("missing.key"), "missing.key");
        assert_eq!(t("app"), "app");
    }

    #[test]
    fn placeholders_are_substituted() {
        assert_eq!(tr1("notice.welcome_back", "name", "Asha"), "Welcome back, Asha!");
    }

    #[test]
    fn every_info_page_has_copy() {
        for page in InfoPage::ALL {
            assert!(has(&format!("info.{}.title", page.key())), "{page:?}");
            assert!(has(&format!("info.{}.body", page.key())), "{page:?}");
        }
    }

    #[test]
    fn every_non_default_section_has_a_description() {
        for role in Role::ALL {
            for section in sections_for(role).iter().skip(1) {
                assert!(has(&format!("dashboard.sections.{}", section.id)), "{}", section.id);
            }
        }
    }
}
