//! In-memory feature set with secondary indexes
//!
//! Materializes one pass of a feature stream into an arena of records
//! plus two positional indexes (by seqid, by feature type). Built once,
//! read-only afterwards; safe to share across threads.

use crate::core::coverage::{self, CoverageSummary};
use crate::core::error::ReadResult;
use crate::core::record::FeatureRecord;
use crate::core::stream::FeatureReader;
use log::debug;
use std::collections::{HashMap, HashSet};
use std::io::BufRead;
use std::path::Path;

/// Inclusion filter applied while loading a feature set
///
/// An empty set means "no restriction"; when both sets are non-empty a
/// record must match both to be retained.
#[derive(Debug, Clone, Default)]
pub struct LoadFilter {
    seqids: HashSet<String>,
    feature_types: HashSet<String>,
}

impl LoadFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given sequence ids
    pub fn with_seqids<I, S>(mut self, seqids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seqids.extend(seqids.into_iter().map(Into::into));
        self
    }

    /// Restrict to the given feature types
    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_types.extend(types.into_iter().map(Into::into));
        self
    }

    /// Whether a record passes both inclusion sets
    pub fn matches(&self, record: &FeatureRecord) -> bool {
        (self.seqids.is_empty() || self.seqids.contains(&record.seqid))
            && (self.feature_types.is_empty()
                || self.feature_types.contains(&record.feature_type))
    }
}

/// Indexed collection of feature records
///
/// Records keep their source-file order. Index lists hold positions into
/// the record arena; every stored record appears in both indexes exactly
/// once, under its own seqid and feature type.
#[derive(Debug, Default)]
pub struct FeatureSet {
    records: Vec<FeatureRecord>,
    by_seqid: HashMap<String, Vec<usize>>,
    by_type: HashMap<String, Vec<usize>>,
}

impl FeatureSet {
    /// Load every feature record from a file
    pub fn load<P: AsRef<Path>>(path: P) -> ReadResult<Self> {
        Self::load_filtered(path, &LoadFilter::new())
    }

    /// Load a file, retaining only records that pass the filter
    pub fn load_filtered<P: AsRef<Path>>(path: P, filter: &LoadFilter) -> ReadResult<Self> {
        let set = Self::from_reader(FeatureReader::from_path(path.as_ref())?, filter)?;
        debug!(
            "loaded {} records ({} seqids, {} feature types) from {}",
            set.len(),
            set.by_seqid.len(),
            set.by_type.len(),
            path.as_ref().display()
        );
        Ok(set)
    }

    /// Drive a feature stream to exhaustion, indexing retained records.
    ///
    /// Stream errors propagate unchanged; a parse failure anywhere in the
    /// source means no feature set is produced.
    pub fn from_reader<R: BufRead>(
        reader: FeatureReader<R>,
        filter: &LoadFilter,
    ) -> ReadResult<Self> {
        let mut set = FeatureSet::default();
        for record in reader {
            let record = record?;
            if filter.matches(&record) {
                set.push(record);
            }
        }
        Ok(set)
    }

    fn push(&mut self, record: FeatureRecord) {
        let position = self.records.len();
        self.by_seqid
            .entry(record.seqid.clone())
            .or_default()
            .push(position);
        self.by_type
            .entry(record.feature_type.clone())
            .or_default()
            .push(position);
        self.records.push(record);
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in source order
    pub fn records(&self) -> &[FeatureRecord] {
        &self.records
    }

    /// Records on a sequence id, in source order; empty for unknown ids
    pub fn by_seqid(&self, seqid: &str) -> Vec<&FeatureRecord> {
        self.positions_to_records(self.by_seqid.get(seqid))
    }

    /// Records of a feature type, in source order; empty for unknown types
    pub fn by_type(&self, feature_type: &str) -> Vec<&FeatureRecord> {
        self.positions_to_records(self.by_type.get(feature_type))
    }

    fn positions_to_records(&self, positions: Option<&Vec<usize>>) -> Vec<&FeatureRecord> {
        positions
            .map(|ps| ps.iter().map(|&p| &self.records[p]).collect())
            .unwrap_or_default()
    }

    /// All sequence ids with at least one record
    pub fn seqids(&self) -> impl Iterator<Item = &str> {
        self.by_seqid.keys().map(|s| s.as_str())
    }

    /// All feature types with at least one record
    pub fn feature_types(&self) -> impl Iterator<Item = &str> {
        self.by_type.keys().map(|s| s.as_str())
    }

    /// Aggregate coverage statistics over the stored records
    pub fn coverage(&self) -> CoverageSummary {
        coverage::summarize(&self.records)
    }
}
