//! Backend abstraction for creating task requests.
//!
//! The form never talks to a backend directly: the host application hands the
//! submitted draft to a [`TaskRequestBackend`] on a background task and feeds
//! the outcome back to the form as an action.

use crate::task_request::NewTaskRequest;
use async_trait::async_trait;

pub mod memory;

pub use memory::MemoryBackend;

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Invalid task request: {0}")]
    InvalidRequest(String),

    #[error("Backend '{0}' operation failed: {1}")]
    OperationFailed(String, String),

    #[error("Backend '{0}' is unavailable")]
    Unavailable(String),
}

/// The injected task-request creation operation.
#[async_trait]
pub trait TaskRequestBackend: Send + Sync {
    /// Stable identifier of this backend, used in logs
    fn backend_id(&self) -> &str;

    /// Create a task request and return its tracking identifier
    async fn create_task_request(&self, request: &NewTaskRequest) -> Result<String, BackendError>;
}
