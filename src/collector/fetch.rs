use tracing::{debug, error};

use crate::client::ReplyRow;
use crate::error::Result;

use super::context::CollectorContext;
use super::types::CollectorConfig;

/// Issues the monitoring command for one collector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyFetcher {
    command: String,
    args: Vec<String>,
}

impl ReplyFetcher {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn from_config(config: &CollectorConfig) -> Self {
        Self::new(config.command.clone(), config.command_args())
    }

    /// Runs the command once. Errors are logged and returned as-is; there is
    /// no retry and no partial result.
    pub async fn fetch(&self, ctx: &CollectorContext) -> Result<Vec<ReplyRow>> {
        match ctx.client.run(&self.command, &self.args).await {
            Ok(reply) => {
                debug!(
                    device = %ctx.device.name,
                    command = %self.command,
                    rows = reply.rows.len(),
                    "fetched reply"
                );
                Ok(reply.rows)
            }
            Err(err) => {
                error!(
                    device = %ctx.device.name,
                    command = %self.command,
                    error = %err,
                    "error fetching metrics"
                );
                Err(err)
            }
        }
    }
}
