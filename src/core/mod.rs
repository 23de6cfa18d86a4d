//! Core feature-table functionality
//!
//! This module contains the line parser, attribute parser, streaming
//! reader, indexed dataset, and coverage aggregation.

pub mod attributes;
mod coverage;
mod dataset;
mod error;
pub mod io;
mod record;
mod stream;

pub use attributes::parse_attributes;
pub use coverage::{merged_span, summarize, CoverageBuilder, CoverageSummary, TypeCoverage};
pub use dataset::{FeatureSet, LoadFilter};
pub use error::{GffReadError, ParseResult, ReadResult, RecordParseError};
pub use io::{
    LineIterator, SmartReader, DEFAULT_BUFFER_SIZE, LARGE_BUFFER_SIZE, MMAP_THRESHOLD,
};
pub use record::{FeatureRecord, FIELD_COUNT};
pub use stream::FeatureReader;
