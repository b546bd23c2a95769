use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenario::get_scenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub failure: Option<String>,
    pub steps: Vec<String>,
    #[serde(with = "duration_serde")]
    pub duration: Duration,
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        u64::try_from(duration.as_micros())
            .unwrap_or(u64::MAX)
            .serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u64::deserialize(deserializer)?;
        Ok(Duration::from_micros(micros))
    }
}

pub struct ScenarioRunner {
    verbose: bool,
}

impl ScenarioRunner {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// Run the named scenarios in order. Unknown names are reported as failures.
    #[must_use]
    pub fn run_all(&self, keys: &[String]) -> Vec<ScenarioResult> {
        keys.iter().map(|key| self.run(key)).collect()
    }

    #[must_use]
    pub fn run(&self, key: &str) -> ScenarioResult {
        let Some(scenario) = get_scenario(key) else {
            eprintln!("⚠️  Unknown scenario: {}", key.yellow());
            return ScenarioResult {
                scenario_name: key.to_string(),
                passed: false,
                failure: Some("unknown scenario".to_string()),
                steps: Vec::new(),
                duration: Duration::ZERO,
            };
        };

        log::info!("running {key}");
        let start = Instant::now();
        let outcome = (scenario.run)();
        let duration = start.elapsed();

        let result = match outcome {
            Ok(steps) => ScenarioResult {
                scenario_name: key.to_string(),
                passed: true,
                failure: None,
                steps,
                duration,
            },
            Err(err) => ScenarioResult {
                scenario_name: key.to_string(),
                passed: false,
                failure: Some(format!("{err:#}")),
                steps: Vec::new(),
                duration,
            },
        };

        if result.passed {
            println!("✅ {} - {:?}", key.green(), duration);
        } else {
            eprintln!(
                "❌ {} - {:?}: {}",
                key.red(),
                duration,
                result.failure.as_deref().unwrap_or_default()
            );
        }
        if self.verbose {
            for step in &result.steps {
                println!("   {}", step.dimmed());
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scenarios_fail_without_running() {
        let result = ScenarioRunner::new(false).run("does-not-exist");
        assert!(!result.passed);
        assert_eq!(result.failure.as_deref(), Some("unknown scenario"));
    }

    #[test]
    fn known_scenarios_record_their_steps() {
        let result = ScenarioRunner::new(false).run("fresh-load");
        assert!(result.passed, "{:?}", result.failure);
        assert!(result.steps.iter().any(|s| s.starts_with("load /")));
    }

    #[test]
    fn results_serialize_durations_as_micros() {
        let result = ScenarioResult {
            scenario_name: "x".to_string(),
            passed: true,
            failure: None,
            steps: vec![],
            duration: Duration::from_millis(2),
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["duration"], 2000);
    }
}
