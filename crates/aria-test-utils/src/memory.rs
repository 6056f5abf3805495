use aria_memory::{MemoryError, MemoryGateway, MemoryRecord};
use aria_protocol::ChatMessage;
use async_trait::async_trait;
use parking_lot::Mutex;

/// Scripted memory gateway recording every commit it receives.
#[derive(Default)]
pub struct StubGateway {
    fetch_records: Vec<MemoryRecord>,
    fail_fetch: bool,
    fail_commit: bool,
    commits: Mutex<Vec<(Vec<ChatMessage>, String)>>,
}

impl StubGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway returning the given records on fetch.
    pub fn with_fetch(fetch_records: Vec<MemoryRecord>) -> Self {
        Self {
            fetch_records,
            ..Self::default()
        }
    }

    /// Gateway whose fetch fails with a network error.
    pub fn failing_fetch() -> Self {
        Self {
            fail_fetch: true,
            ..Self::default()
        }
    }

    /// Make commits fail with a network error.
    pub fn with_failing_commit(mut self) -> Self {
        self.fail_commit = true;
        self
    }

    /// Every commit received so far, in order.
    pub fn commits(&self) -> Vec<(Vec<ChatMessage>, String)> {
        self.commits.lock().clone()
    }
}

#[async_trait]
impl MemoryGateway for StubGateway {
    async fn fetch_all(&self, _user_id: &str) -> Result<Vec<MemoryRecord>, MemoryError> {
        if self.fail_fetch {
            return Err(MemoryError::RemoteUnavailable(
                "stub network failure".to_string(),
            ));
        }
        Ok(self.fetch_records.clone())
    }

    async fn commit(&self, batch: &[ChatMessage], user_id: &str) -> Result<(), MemoryError> {
        self.commits
            .lock()
            .push((batch.to_vec(), user_id.to_string()));
        if self.fail_commit {
            return Err(MemoryError::RemoteUnavailable(
                "stub network failure".to_string(),
            ));
        }
        Ok(())
    }
}
