//! Fixture loader
//!
//! Deserializes `scenarios.json` into typed test cases.
use serde::Deserialize;

const SCENARIOS: &str = include_str!("scenarios.json");

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum TestCase {
    /// Text to scan and the matches expected in order
    Extract {
        input: String,
        matches: Vec<ExpectedMatch>,
    },
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExpectedMatch {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub scheme: String,
    #[serde(default)]
    pub userinfo: Option<String>,
    pub host_kind: String,
    pub host: String,
    #[serde(default)]
    pub port: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub fragment: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct FixtureResult {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<FixtureFailure>,
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub case_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl FixtureResult {
    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}

pub fn load_scenarios() -> Vec<TestCase> {
    serde_json::from_str(SCENARIOS).expect("scenarios.json should deserialize")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_scenarios() {
        let cases = load_scenarios();
        let extract_cases = cases
            .iter()
            .filter(|case| matches!(case, TestCase::Extract { .. }))
            .count();
        assert!(extract_cases >= 20);
        assert!(matches!(cases[0], TestCase::Comment(_)));
    }
}
