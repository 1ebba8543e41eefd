use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;
use routeros_metrics::client::{Reply, RouterOsClient};
use routeros_metrics::error::{Error, Result};

/// A scripted RouterOS client: answers calls in order and records them.
#[derive(Default)]
pub struct FakeClient {
    replies: Mutex<VecDeque<Result<Reply>>>,
    calls: Mutex<Vec<(String, Vec<String>)>>,
}

impl FakeClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reply(self, reply: Reply) -> Self {
        self.replies.lock().push_back(Ok(reply));
        self
    }

    pub fn with_error(self, error: Error) -> Self {
        self.replies.lock().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl RouterOsClient for FakeClient {
    async fn run(&self, command: &str, args: &[String]) -> Result<Reply> {
        self.calls.lock().push((command.to_string(), args.to_vec()));
        self.replies
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(Error::protocol(format!("no scripted reply for {}", command))))
    }
}
