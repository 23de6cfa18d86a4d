//! GffTally - GFF feature-table parsing, indexing, and coverage statistics
//!
//! Parses 9-column tab-delimited annotation records, streams them lazily
//! or loads them into an indexed in-memory set, and computes per-type and
//! unique-base coverage statistics.
//!
//! # Features
//!
//! - Streaming, single-pass record reader with positioned errors
//! - Comment/blank skipping and `##FASTA` section termination
//! - Indexed queries by sequence id and feature type
//! - Unique base coverage via sort-and-sweep interval merging
//!
//! # Example
//!
//! ```ignore
//! use gff_tally::{FeatureSet, LoadFilter};
//!
//! let filter = LoadFilter::new().with_seqids(["chr1"]);
//! let set = FeatureSet::load_filtered("annotations.gff3", &filter)?;
//!
//! for gene in set.by_type("gene") {
//!     println!("{}: {}-{}", gene.seqid, gene.start, gene.stop);
//! }
//!
//! let stats = set.coverage();
//! println!("{} unique bases covered", stats.unique_bases);
//! ```

pub mod core;

// Re-export commonly used types
pub use crate::core::{
    merged_span, parse_attributes, summarize, CoverageBuilder, CoverageSummary, FeatureReader,
    FeatureRecord, FeatureSet, GffReadError, LoadFilter, ParseResult, ReadResult,
    RecordParseError, TypeCoverage,
};
