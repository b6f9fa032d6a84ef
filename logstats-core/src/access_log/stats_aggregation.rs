use crate::access_log::constants::{RESPONSE_SIZE_PERCENTILE, TOP_RESOURCES_LIMIT};
use crate::access_log::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::access_log::metrics::{average, percent};
use crate::access_log::stats::{
    DailyRequests, ResourceCount, ResponseCodeCount, ResponseSizeStats, Stats,
};
use crate::access_log::types::LogRecord;
use crate::access_log::window::DateWindow;
use ahash::{AHashMap, AHashSet};
use chrono::NaiveDate;
use std::borrow::Borrow;
use std::collections::BTreeMap;
use std::hash::Hash;
use std::sync::Arc;

/// Occurrence counter that remembers when each key was first seen, so that
/// equal counts always come out in the order they first appeared.
struct Tally<K> {
    counts: AHashMap<K, (u64, usize)>,
}

impl<K: Eq + Hash + Clone> Tally<K> {
    fn new() -> Self {
        Self {
            counts: AHashMap::new(),
        }
    }

    fn increment<Q>(&mut self, key: &Q)
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ToOwned<Owned = K> + ?Sized,
    {
        let next_seen = self.counts.len();
        match self.counts.get_mut(key) {
            Some((count, _)) => *count += 1,
            None => {
                self.counts.insert(key.to_owned(), (1, next_seen));
            }
        }
    }

    fn len(&self) -> usize {
        self.counts.len()
    }

    /// Highest count first, ties in first-seen order.
    fn ranked(&self, limit: Option<usize>) -> Vec<(K, u64)> {
        let mut entries: Vec<_> = self
            .counts
            .iter()
            .map(|(key, (count, seen))| (key, *count, *seen))
            .collect();

        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

        if let Some(limit) = limit {
            entries.truncate(limit);
        }

        entries
            .into_iter()
            .map(|(key, count, _)| (key.clone(), count))
            .collect()
    }
}

/// Folds [`LogRecord`]s into running statistics.
///
/// Records dated outside the window are dropped without touching any counter.
/// Every accepted response size is retained so the percentile in [`Stats`] is
/// exact; memory grows linearly with the number of accepted records.
pub struct StatsAggregator {
    window: DateWindow,
    sink: Arc<dyn DiagnosticSink>,

    files: Vec<String>,
    total_requests: u64,

    // Response sizes
    total_response_size: u128,
    response_sizes: Vec<u64>,
    max_response_size: u64,

    // Distributions
    resources: Tally<String>,
    response_codes: Tally<u16>,
    requests_per_date: BTreeMap<NaiveDate, u64>,
    // Membership set plus first-seen order.
    seen_protocols: AHashSet<String>,
    protocols: Vec<String>,
}

impl StatsAggregator {
    pub fn new(window: DateWindow) -> Self {
        Self::with_sink(window, Arc::new(TracingSink))
    }

    pub fn with_sink(window: DateWindow, sink: Arc<dyn DiagnosticSink>) -> Self {
        sink.record(Diagnostic::WindowConfigured {
            from: window.from(),
            to: window.to(),
        });

        Self {
            window,
            sink,
            files: Vec::new(),
            total_requests: 0,
            total_response_size: 0,
            response_sizes: Vec::new(),
            max_response_size: 0,
            resources: Tally::new(),
            response_codes: Tally::new(),
            requests_per_date: BTreeMap::new(),
            seen_protocols: AHashSet::new(),
            protocols: Vec::new(),
        }
    }

    pub fn window(&self) -> DateWindow {
        self.window
    }

    /// Registers a processed source. Has no effect on the numbers.
    pub fn add_source(&mut self, name: impl Into<String>) {
        self.files.push(name.into());
    }

    pub fn collect(&mut self, record: &LogRecord) {
        let date = record.date();
        if !self.window.contains(date) {
            self.sink.record(Diagnostic::OutsideWindow { date });
            return;
        }

        self.total_requests += 1;

        let size = record.body_bytes_sent();
        self.total_response_size += u128::from(size);
        self.response_sizes.push(size);
        self.max_response_size = self.max_response_size.max(size);

        *self.requests_per_date.entry(date).or_insert(0) += 1;
        self.resources.increment(record.request_resource());
        self.response_codes.increment(&record.status());

        if let Some(protocol) = record.request_protocol() {
            if !self.seen_protocols.contains(protocol) {
                self.seen_protocols.insert(protocol.to_string());
                self.protocols.push(protocol.to_string());
            }
        }
    }

    /// Derives the summary from the current state. Calling this repeatedly without
    /// collecting in between returns the same result.
    pub fn finalize(&self) -> Stats {
        // The only copy of the retained sizes; sorted in place by the percentile.
        let sizes: Vec<f64> = self.response_sizes.iter().map(|&s| s as f64).collect();

        let stats = Stats {
            files: self.files.clone(),
            total_requests_count: self.total_requests,
            response_size_in_bytes: ResponseSizeStats {
                average: average(self.total_response_size as f64, self.total_requests),
                max: self.max_response_size,
                p95: RESPONSE_SIZE_PERCENTILE.of_owned(sizes),
            },
            resources: self
                .resources
                .ranked(Some(TOP_RESOURCES_LIMIT))
                .into_iter()
                .map(|(resource, total_requests_count)| ResourceCount {
                    resource,
                    total_requests_count,
                })
                .collect(),
            response_codes: self
                .response_codes
                .ranked(None)
                .into_iter()
                .map(|(code, total_responses_count)| ResponseCodeCount {
                    code,
                    total_responses_count,
                })
                .collect(),
            requests_per_date: self.requests_per_date(),
            unique_protocols: self.protocols.clone(),
        };

        self.sink.record(Diagnostic::Finalized {
            total_requests: stats.total_requests_count,
            resources: self.resources.len(),
            dates: stats.requests_per_date.len(),
            protocols: stats.unique_protocols.len(),
        });

        stats
    }

    fn requests_per_date(&self) -> Vec<DailyRequests> {
        if self.total_requests == 0 {
            return Vec::new();
        }

        self.requests_per_date
            .iter()
            .map(|(date, count)| DailyRequests {
                date: *date,
                weekday: date.format("%A").to_string(),
                total_requests_count: *count,
                total_requests_percentage: percent(*count, self.total_requests),
            })
            .collect()
    }
}
