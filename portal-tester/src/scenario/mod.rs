use anyhow::Result;

pub mod catalog;

use catalog::CATALOG;

/// One deterministic walk through the portal. Failures carry the broken expectation.
#[derive(Clone, Copy)]
pub struct Scenario {
    pub key: &'static str,
    pub description: &'static str,
    pub run: fn() -> Result<Vec<String>>,
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario").field("key", &self.key).finish()
    }
}

#[must_use]
pub fn get_scenario(key: &str) -> Option<Scenario> {
    CATALOG.iter().copied().find(|s| s.key == key)
}

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|s| (s.key, s.description)).collect()
}

/// Split a comma-separated selection, expanding `all` in place of itself.
#[must_use]
pub fn expand_scenarios(selection: &str) -> Vec<String> {
    let mut keys = Vec::new();
    for token in split_csv(selection) {
        if token == "all" {
            keys.extend(CATALOG.iter().map(|s| s.key.to_string()));
        } else {
            keys.push(token);
        }
    }
    let mut seen = std::collections::HashSet::new();
    keys.retain(|k| seen.insert(k.clone()));
    keys
}

#[must_use]
pub fn split_csv(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_expands_to_the_whole_catalog_once() {
        let keys = expand_scenarios("round-trip,all");
        assert_eq!(keys.len(), CATALOG.len());
        assert_eq!(keys[0], "round-trip");
    }

    #[test]
    fn unknown_keys_are_kept_for_reporting() {
        assert_eq!(expand_scenarios(" nope , ,fresh-load"), vec!["nope", "fresh-load"]);
        assert!(get_scenario("nope").is_none());
        assert!(get_scenario("fresh-load").is_some());
    }

    #[test]
    fn catalog_keys_are_unique() {
        let listed = list_scenarios();
        let unique: std::collections::HashSet<_> = listed.iter().map(|(k, _)| k).collect();
        assert_eq!(unique.len(), listed.len());
    }
}
