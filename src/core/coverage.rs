//! Coverage statistics
//!
//! Aggregates feature records into per-type counts/lengths and a
//! deduplicated base count. Unique coverage merges the observed
//! intervals per sequence id with a sort-then-sweep pass, so overlapping
//! and adjacent features count each reference position once.

use crate::core::record::FeatureRecord;
use std::collections::HashMap;

/// Per-feature-type accumulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCoverage {
    pub feature_type: String,
    /// Number of records of this type
    pub records: usize,
    /// Summed interval lengths, overlaps double-counted
    pub total_bases: i64,
}

/// Aggregate statistics over one pass of feature records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageSummary {
    /// Total records observed
    pub records: usize,
    /// Summed interval lengths over all records, overlaps double-counted
    pub total_bases: i64,
    /// Reference positions covered by at least one feature, counted once
    pub unique_bases: i64,
    /// Per-type rows, sorted by feature type
    pub per_type: Vec<TypeCoverage>,
}

/// Transient accumulator for one statistics pass
#[derive(Debug, Default)]
pub struct CoverageBuilder {
    intervals: HashMap<String, Vec<(i64, i64)>>,
    per_type: HashMap<String, (usize, i64)>,
    records: usize,
    total_bases: i64,
}

impl CoverageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one record into the accumulator
    pub fn observe(&mut self, record: &FeatureRecord) {
        let span = record.span();
        self.records += 1;
        self.total_bases += span;

        self.intervals
            .entry(record.seqid.clone())
            .or_default()
            .push((record.start, record.stop));

        let entry = self
            .per_type
            .entry(record.feature_type.clone())
            .or_insert((0, 0));
        entry.0 += 1;
        entry.1 += span;
    }

    /// Merge intervals and produce the summary, consuming the accumulator
    pub fn finish(self) -> CoverageSummary {
        let unique_bases = self
            .intervals
            .into_values()
            .map(|mut intervals| merged_span(&mut intervals))
            .sum();

        let mut per_type: Vec<TypeCoverage> = self
            .per_type
            .into_iter()
            .map(|(feature_type, (records, total_bases))| TypeCoverage {
                feature_type,
                records,
                total_bases,
            })
            .collect();
        per_type.sort_by(|a, b| a.feature_type.cmp(&b.feature_type));

        CoverageSummary {
            records: self.records,
            total_bases: self.total_bases,
            unique_bases,
            per_type,
        }
    }
}

/// Summarize any pass of records
pub fn summarize<'a, I>(records: I) -> CoverageSummary
where
    I: IntoIterator<Item = &'a FeatureRecord>,
{
    let mut builder = CoverageBuilder::new();
    for record in records {
        builder.observe(record);
    }
    builder.finish()
}

/// Total bases covered by a set of 1-based inclusive intervals.
///
/// Sorts by start, then sweeps once left to right: an interval starting
/// at or before `current end + 1` (overlap or adjacency, no gap between
/// 1-based positions) extends the open interval, anything else closes it.
/// Interval lengths clamp at zero, so inverted pairs contribute nothing.
/// O(n log n); the sort dominates.
pub fn merged_span(intervals: &mut [(i64, i64)]) -> i64 {
    if intervals.is_empty() {
        return 0;
    }

    intervals.sort_unstable_by_key(|&(start, _)| start);

    let (mut cur_start, mut cur_end) = intervals[0];
    let mut total = 0;

    for &(start, end) in &intervals[1..] {
        if start <= cur_end + 1 {
            cur_end = cur_end.max(end);
        } else {
            total += (cur_end - cur_start + 1).max(0);
            cur_start = start;
            cur_end = end;
        }
    }

    total + (cur_end - cur_start + 1).max(0)
}
