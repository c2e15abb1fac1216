use axum::response::Json;

use taskpulse_types::{StatusReport, TaskStatus, TaskStatusRecord};

/// The fixed set of task ids reported by `/status`.
const TASK_IDS: [u32; 2] = [1, 2];

/// Liveness placeholder at `/`.
pub async fn hello() -> &'static str {
    "Hello World!"
}

/// `GET /status`: two task records with freshly sampled statuses.
pub async fn get_status() -> Json<StatusReport> {
    let mut rng = rand::thread_rng();
    let tasks = TASK_IDS
        .iter()
        .map(|&id| TaskStatusRecord {
            id,
            random_status: TaskStatus::random(&mut rng),
        })
        .collect();
    Json(StatusReport { tasks })
}
