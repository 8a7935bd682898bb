use crate::matcher::Fields;
use crate::record::{Record, RecordError};
use crate::stats::{CounterPair, MessageId};
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// Accumulates severity counters for one processing run.
///
/// Records must be fed in log order: the first occurrence of a message is
/// the one that is not counted as a duplicate.
#[derive(Debug)]
pub struct StatsAggregator {
    global: CounterPair,
    charms: Vec<(String, CounterPair)>,
    charm_index: HashMap<String, usize>,
    seen: HashSet<MessageId>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self {
            global: CounterPair::new(),
            charms: Vec::new(),
            charm_index: HashMap::new(),
            seen: HashSet::new(),
        }
    }

    pub fn observe(&mut self, record: &Record) {
        // `insert` returns false when the message was already registered.
        let is_duplicate = !self.seen.insert(MessageId::of(record));

        trace!(
            charm = %record.charm,
            severity = %record.severity,
            duplicate = is_duplicate,
            "observed record"
        );

        self.global.record(record.severity, is_duplicate);
        self.charm_mut(&record.charm)
            .record(record.severity, is_duplicate);
    }

    /// Validates raw matcher output before observing it.
    pub fn observe_fields(&mut self, fields: &Fields) -> Result<(), RecordError> {
        let record = Record::from_fields(fields)?;
        self.observe(&record);
        Ok(())
    }

    /// Observes records in order and stops at the first error.
    ///
    /// Records before the failing item stay counted. Returns how many
    /// records were observed.
    pub fn observe_batch<I, E>(&mut self, records: I) -> Result<u64, E>
    where
        I: IntoIterator<Item = Result<Record, E>>,
    {
        let mut observed = 0;

        for record in records {
            self.observe(&record?);
            observed += 1;
        }

        Ok(observed)
    }

    pub fn global(&self) -> &CounterPair {
        &self.global
    }

    pub fn charm(&self, name: &str) -> Option<&CounterPair> {
        self.charm_index.get(name).map(|&i| &self.charms[i].1)
    }

    /// Charms in the order they were first observed.
    pub fn charms(&self) -> impl Iterator<Item = (&str, &CounterPair)> {
        self.charms.iter().map(|(name, pair)| (name.as_str(), pair))
    }

    pub fn charm_count(&self) -> usize {
        self.charms.len()
    }

    pub fn seen_messages(&self) -> &HashSet<MessageId> {
        &self.seen
    }

    fn charm_mut(&mut self, name: &str) -> &mut CounterPair {
        let index = match self.charm_index.get(name) {
            Some(&i) => i,
            None => {
                let i = self.charms.len();
                self.charms.push((name.to_string(), CounterPair::new()));
                self.charm_index.insert(name.to_string(), i);
                i
            }
        };

        &mut self.charms[index].1
    }
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self::new()
    }
}
