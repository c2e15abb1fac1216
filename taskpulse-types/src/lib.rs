use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Outcome reported for a task. Serialized as `"success"` / `"failure"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Success,
    Failure,
}

impl TaskStatus {
    /// Pick either status with equal probability.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_bool(0.5) {
            TaskStatus::Success
        } else {
            TaskStatus::Failure
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Success => "success",
            TaskStatus::Failure => "failure",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One task's status as reported by the server. Generated fresh per request,
/// never stored. `random_status` is the wire field name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStatusRecord {
    pub id: u32,
    pub random_status: TaskStatus,
}

/// Response envelope for `GET /status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusReport {
    pub tasks: Vec<TaskStatusRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&TaskStatus::Success).unwrap();
        assert_eq!(json, "\"success\"");
        let json = serde_json::to_string(&TaskStatus::Failure).unwrap();
        assert_eq!(json, "\"failure\"");
    }

    #[test]
    fn test_display_matches_wire_form() {
        assert_eq!(TaskStatus::Success.to_string(), "success");
        assert_eq!(TaskStatus::Failure.to_string(), "failure");
    }

    #[test]
    fn test_report_parses_literal_payload() {
        let payload = r#"{"tasks":[{"id":1,"random_status":"success"},{"id":2,"random_status":"failure"}]}"#;
        let report: StatusReport = serde_json::from_str(payload).unwrap();
        assert_eq!(report.tasks.len(), 2);
        assert_eq!(report.tasks[0].id, 1);
        assert_eq!(report.tasks[0].random_status, TaskStatus::Success);
        assert_eq!(report.tasks[1].id, 2);
        assert_eq!(report.tasks[1].random_status, TaskStatus::Failure);
    }

    #[test]
    fn test_report_rejects_unknown_status() {
        let payload = r#"{"tasks":[{"id":1,"random_status":"pending"}]}"#;
        let result: Result<StatusReport, _> = serde_json::from_str(payload);
        assert!(result.is_err());
    }

    #[test]
    fn test_random_produces_both_variants() {
        let mut rng = rand::thread_rng();
        let mut saw_success = false;
        let mut saw_failure = false;
        // 1000 fair coin flips missing a side is ~1e-300 territory.
        for _ in 0..1000 {
            match TaskStatus::random(&mut rng) {
                TaskStatus::Success => saw_success = true,
                TaskStatus::Failure => saw_failure = true,
            }
            if saw_success && saw_failure {
                break;
            }
        }
        assert!(saw_success, "never sampled success");
        assert!(saw_failure, "never sampled failure");
    }
}
