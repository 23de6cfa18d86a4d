//! Feature record parsing
//!
//! Parses one 9-column tab-delimited annotation line into a typed record.
//! GFF uses 1-based coordinates, closed interval [start, stop].
//!
//! The parser is deliberately permissive where the format is permissive:
//! seqid/source/type may be empty, coordinates only need to be integers
//! (no ordering check), and strand/phase accept any first character.

use crate::core::attributes::parse_attributes;
use crate::core::error::{ParseResult, RecordParseError};
use memchr::memchr;
use std::fmt;

/// Number of tab-separated columns in a feature line
pub const FIELD_COUNT: usize = 9;

/// One annotated genomic feature
///
/// Columns: seqid, source, type, start, end, score, strand, phase, attributes.
/// Immutable once parsed; a record is never partially constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureRecord {
    /// Reference sequence (chromosome/contig) the feature is located on
    pub seqid: String,
    /// Annotation source (program or database), may be empty
    pub source: String,
    /// Feature type (gene, exon, CDS, ...)
    pub feature_type: String,
    /// Start position (1-based by convention)
    pub start: i64,
    /// End position (1-based, inclusive; no ordering enforced against start)
    pub stop: i64,
    /// Score column, verbatim ("." conventionally means absent)
    pub score: String,
    /// Strand character ('+', '-', '.', or whatever the column started with)
    pub strand: char,
    /// Phase character, handled like strand
    pub phase: char,
    /// Attribute column, verbatim, parsed lazily on access
    pub attributes: String,
}

impl FeatureRecord {
    /// Parse a feature line.
    ///
    /// The caller is expected to hand in a trimmed, non-empty, non-comment
    /// line; this function only checks the column grammar.
    pub fn parse(line: &str) -> ParseResult<FeatureRecord> {
        let bytes = line.as_bytes();

        // Find field boundaries using memchr for tab characters
        let mut field_bounds = Vec::with_capacity(FIELD_COUNT);
        let mut start_pos = 0;
        while let Some(tab_pos) = memchr(b'\t', &bytes[start_pos..]) {
            field_bounds.push((start_pos, start_pos + tab_pos));
            start_pos += tab_pos + 1;
        }
        field_bounds.push((start_pos, bytes.len()));

        if field_bounds.len() != FIELD_COUNT {
            return Err(RecordParseError::FieldCount {
                expected: FIELD_COUNT,
                found: field_bounds.len(),
            });
        }

        let field = |idx: usize| -> &str {
            let (start, end) = field_bounds[idx];
            &line[start..end]
        };

        let start = parse_coordinate(field(3), "start")?;
        let stop = parse_coordinate(field(4), "stop")?;

        Ok(FeatureRecord {
            seqid: field(0).to_string(),
            source: field(1).to_string(),
            feature_type: field(2).to_string(),
            start,
            stop,
            score: field(5).to_string(),
            strand: first_char_or_dot(field(6)),
            phase: first_char_or_dot(field(7)),
            attributes: field(8).to_string(),
        })
    }

    /// Interval length in 1-based inclusive coordinates, clamped at zero
    pub fn span(&self) -> i64 {
        (self.stop - self.start + 1).max(0)
    }

    /// Look up a single attribute value.
    ///
    /// Re-parses the attribute column on every call, O(column length).
    /// Callers doing repeated lookups on one record should call
    /// [`parse_attributes`] once and reuse the mapping.
    pub fn attribute(&self, key: &str) -> Option<String> {
        parse_attributes(&self.attributes).swap_remove(key)
    }

    /// Look up an attribute value, falling back to `default` when absent
    pub fn attribute_or(&self, key: &str, default: &str) -> String {
        self.attribute(key)
            .unwrap_or_else(|| default.to_string())
    }
}

impl fmt::Display for FeatureRecord {
    /// Renders the record as a tab-joined line, format-compatible with the
    /// input grammar.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.seqid,
            self.source,
            self.feature_type,
            self.start,
            self.stop,
            self.score,
            self.strand,
            self.phase,
            self.attributes
        )
    }
}

fn parse_coordinate(value: &str, field: &'static str) -> ParseResult<i64> {
    value
        .parse::<i64>()
        .map_err(|_| RecordParseError::InvalidCoordinate {
            field,
            value: value.to_string(),
        })
}

fn first_char_or_dot(field: &str) -> char {
    field.chars().next().unwrap_or('.')
}
