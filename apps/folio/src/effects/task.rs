use std::future::Future;

use tokio::task::JoinHandle;
use tracing::debug;

/// Handle to one running effect loop.
///
/// Cancelling is idempotent, and dropping the handle cancels the task, so a
/// handle that goes out of scope can never leak a timer.
#[derive(Debug)]
pub struct TaskHandle {
    name: &'static str,
    handle: Option<JoinHandle<()>>,
}

impl TaskHandle {
    pub fn spawn<F>(name: &'static str, task: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        Self {
            name,
            handle: Some(tokio::spawn(task)),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            debug!(effect = self.name, "Effect cancelled");
        }
    }

    /// True once the task has completed or been cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map(JoinHandle::is_finished).unwrap_or(true)
    }

    /// Waits for the task to run to completion.
    pub async fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.await;
        }
    }
}

impl Drop for TaskHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}
