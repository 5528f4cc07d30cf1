//! Session-only backend that keeps created task requests in memory.

use super::{BackendError, TaskRequestBackend};
use crate::task_request::NewTaskRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Mutex;
use tokio::time::{sleep, Duration};
use uuid::Uuid;

/// A task request accepted by the [`MemoryBackend`]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedTaskRequest {
    pub id: String,
    #[serde(flatten)]
    pub request: NewTaskRequest,
    pub created_at: DateTime<Utc>,
}

/// In-process backend issuing UUID identifiers.
///
/// Nothing outlives the process; the optional latency only exists so the
/// loading state is visible.
pub struct MemoryBackend {
    backend_id: String,
    latency: Duration,
    created: Mutex<Vec<CreatedTaskRequest>>,
}

impl MemoryBackend {
    pub fn new(latency_ms: u64) -> Self {
        Self {
            backend_id: "memory".to_string(),
            latency: Duration::from_millis(latency_ms),
            created: Mutex::new(Vec::new()),
        }
    }

    /// Requests created so far, oldest first
    pub fn created_requests(&self) -> Vec<CreatedTaskRequest> {
        match self.created.lock() {
            Ok(created) => created.clone(),
            Err(e) => {
                log::warn!("Backend '{}': created requests unavailable: {}", self.backend_id, e);
                Vec::new()
            }
        }
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new(0)
    }
}

#[async_trait]
impl TaskRequestBackend for MemoryBackend {
    fn backend_id(&self) -> &str {
        &self.backend_id
    }

    async fn create_task_request(&self, request: &NewTaskRequest) -> Result<String, BackendError> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }

        if request.draft.ends_on < request.draft.started_on {
            return Err(BackendError::InvalidRequest(
                "end date must not be before start date".to_string(),
            ));
        }

        let created = CreatedTaskRequest {
            id: Uuid::new_v4().to_string(),
            request: request.clone(),
            created_at: Utc::now(),
        };

        if let Ok(json) = serde_json::to_string(&created) {
            log::debug!("Backend '{}': stored task request {}", self.backend_id, json);
        }

        let id = created.id.clone();
        self.created
            .lock()
            .map_err(|e| BackendError::OperationFailed(self.backend_id.clone(), e.to_string()))?
            .push(created);

        Ok(id)
    }
}
