use crate::record::Severity;

/// Count per severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityCounts {
    counts: [u64; Severity::COUNT],
}

impl SeverityCounts {
    fn zeroed() -> Self {
        Self {
            counts: [0; Severity::COUNT],
        }
    }

    pub fn get(&self, severity: Severity) -> u64 {
        self.counts[severity.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Levels with their counts, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Severity, u64)> + '_ {
        Severity::ALL.into_iter().map(|s| (s, self.get(s)))
    }

    fn increment(&mut self, severity: Severity) {
        self.counts[severity.index()] += 1;
    }
}

/// Every occurrence alongside the ones recognized as repeats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterPair {
    all: SeverityCounts,
    duplicates: SeverityCounts,
}

impl CounterPair {
    pub(crate) fn new() -> Self {
        Self {
            all: SeverityCounts::zeroed(),
            duplicates: SeverityCounts::zeroed(),
        }
    }

    pub fn all(&self) -> &SeverityCounts {
        &self.all
    }

    pub fn duplicates(&self) -> &SeverityCounts {
        &self.duplicates
    }

    pub(crate) fn record(&mut self, severity: Severity, is_duplicate: bool) {
        self.all.increment(severity);

        if is_duplicate {
            self.duplicates.increment(severity);
        }
    }
}
