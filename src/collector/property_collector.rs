use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;
use crate::metrics::{DescriptorSink, MetricDescriptor};

use super::context::CollectorContext;
use super::emit::{EmitSummary, RowEmitter};
use super::fetch::ReplyFetcher;
use super::types::CollectorConfig;
use super::Collector;

/// A collector driven entirely by a [`CollectorConfig`]: one command, one
/// property table, one label schema.
#[derive(Debug, Clone)]
pub struct PropertyCollector {
    name: String,
    fetcher: ReplyFetcher,
    emitter: RowEmitter,
}

impl PropertyCollector {
    /// Validates the config and builds the descriptors.
    pub fn new(config: CollectorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            fetcher: ReplyFetcher::from_config(&config),
            emitter: RowEmitter::from_config(&config),
            name: config.name,
        })
    }

    pub fn descriptors(&self) -> &BTreeMap<String, Arc<MetricDescriptor>> {
        self.emitter.descriptors()
    }

    /// Fetches and emits, returning per-value counts alongside the result.
    pub async fn collect_with_summary(&self, ctx: &CollectorContext) -> Result<EmitSummary> {
        let rows = self.fetcher.fetch(ctx).await?;

        let mut summary = EmitSummary::default();
        for row in &rows {
            summary.merge(self.emitter.emit(row, ctx));
        }

        debug!(
            device = %ctx.device.name,
            collector = %self.name,
            rows = rows.len(),
            emitted = summary.emitted,
            malformed = summary.malformed,
            "collect finished"
        );
        Ok(summary)
    }
}

#[async_trait]
impl Collector for PropertyCollector {
    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self, sink: &DescriptorSink) -> usize {
        self.descriptors()
            .values()
            .take_while(|descriptor| sink.send(Arc::clone(*descriptor)).is_ok())
            .count()
    }

    async fn collect(&self, ctx: &CollectorContext) -> Result<()> {
        self.collect_with_summary(ctx).await.map(|_| ())
    }
}
