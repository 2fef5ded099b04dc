//! Scenario execution and reporting.
//!
//! A scenario is one named sequence of checks; the report records every
//! outcome with its group label and duration. Steps run sequentially —
//! recovery policy (keep going vs abort) belongs to whoever drives the
//! report, not to the steps themselves.

use std::future::Future;
use std::time::Instant;

use serde_json::json;

use crate::error::Error;

/// Output format for run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        };
        f.write_str(label)
    }
}

/// Outcome of one executed scenario.
#[derive(Debug)]
pub struct ScenarioResult {
    pub group: String,
    pub name: String,
    pub outcome: Result<(), Error>,
    pub duration_ms: u128,
}

/// Accumulates scenario outcomes for one run.
#[derive(Debug, Default)]
pub struct RunReport {
    results: Vec<ScenarioResult>,
}

impl RunReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drive one scenario to completion and record its outcome.
    pub async fn run_step<F>(&mut self, group: &str, name: &str, step: F)
    where
        F: Future<Output = Result<(), Error>>,
    {
        let started = Instant::now();
        let outcome = step.await;
        let duration_ms = started.elapsed().as_millis();

        match &outcome {
            Ok(()) => {
                tracing::info!(group, name, duration_ms = duration_ms as u64, "scenario passed");
            }
            Err(err) => {
                tracing::warn!(
                    group,
                    name,
                    duration_ms = duration_ms as u64,
                    error = %err,
                    "scenario failed"
                );
            }
        }

        self.results.push(ScenarioResult {
            group: group.to_string(),
            name: name.to_string(),
            outcome,
            duration_ms,
        });
    }

    pub fn results(&self) -> &[ScenarioResult] {
        &self.results
    }

    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => self.render_text(),
            OutputFormat::Json => self.render_json(),
        }
    }

    fn render_text(&self) -> String {
        let mut out = String::new();
        for result in &self.results {
            match &result.outcome {
                Ok(()) => out.push_str(&format!(
                    "PASS [{}] {} ({} ms)\n",
                    result.group, result.name, result.duration_ms
                )),
                Err(err) => out.push_str(&format!(
                    "FAIL [{}] {}: {} ({} ms)\n",
                    result.group, result.name, err, result.duration_ms
                )),
            }
        }
        out.push_str(&format!(
            "\n{} scenarios, {} passed, {} failed\n",
            self.total(),
            self.passed(),
            self.failed()
        ));
        out
    }

    fn render_json(&self) -> String {
        let results: Vec<_> = self
            .results
            .iter()
            .map(|result| {
                json!({
                    "group": result.group,
                    "name": result.name,
                    "passed": result.outcome.is_ok(),
                    "error": result.outcome.as_ref().err().map(|err| err.to_string()),
                    "durationMs": result.duration_ms as u64,
                })
            })
            .collect();

        json!({
            "total": self.total(),
            "passed": self.passed(),
            "failed": self.failed(),
            "results": results,
        })
        .to_string()
    }
}
