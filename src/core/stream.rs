//! Streaming feature reader
//!
//! Pull-based, forward-only pass over a line source: comments and blank
//! lines are skipped, a `##FASTA` sentinel ends the feature section, and
//! the first malformed line aborts the stream with its position. A fresh
//! reader must be constructed to re-scan a source.

use crate::core::error::{GffReadError, ReadResult};
use crate::core::io::{LineIterator, SmartReader};
use crate::core::record::FeatureRecord;
use std::io::BufRead;
use std::path::Path;

/// Marker line: feature data has ended, raw sequence data follows
const FASTA_SENTINEL: &str = "##FASTA";

/// Lazy iterator of feature records over a line source
///
/// Yields `Ok(record)` per feature line. After yielding an `Err` the
/// iterator is fused: every subsequent call returns `None`. Silent
/// partial ingestion is not possible by construction.
#[derive(Debug)]
pub struct FeatureReader<R: BufRead> {
    lines: LineIterator<R>,
    line_number: usize,
    done: bool,
}

impl FeatureReader<SmartReader> {
    /// Open a feature file.
    ///
    /// Fails with [`GffReadError::SourceUnavailable`] before any line is
    /// read if the file cannot be opened.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ReadResult<Self> {
        let reader = SmartReader::open(path.as_ref()).map_err(|e| {
            GffReadError::SourceUnavailable {
                path: path.as_ref().to_path_buf(),
                source: e,
            }
        })?;
        Ok(Self::new(reader))
    }
}

impl<R: BufRead> FeatureReader<R> {
    /// Wrap an already-open line source
    pub fn new(reader: R) -> Self {
        Self {
            lines: LineIterator::new(reader),
            line_number: 0,
            done: false,
        }
    }

    /// 1-based number of physical lines read so far, skipped lines included
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Drive the stream to exhaustion and collect all records
    pub fn records(self) -> ReadResult<Vec<FeatureRecord>> {
        self.collect()
    }
}

impl<R: BufRead> Iterator for FeatureReader<R> {
    type Item = ReadResult<FeatureRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        loop {
            let line = match self.lines.next_line() {
                None => {
                    self.done = true;
                    return None;
                }
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(GffReadError::Io(e)));
                }
                Some(Ok(line)) => line,
            };
            self.line_number += 1;

            let trimmed = line.trim();
            if trimmed == FASTA_SENTINEL {
                // Everything after the sentinel is sequence data, not features
                self.done = true;
                return None;
            }
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            return match FeatureRecord::parse(trimmed) {
                Ok(record) => Some(Ok(record)),
                Err(e) => {
                    self.done = true;
                    Some(Err(GffReadError::at_line(self.line_number, trimmed, e)))
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::RecordParseError;
    use std::io::Cursor;

    fn reader(text: &str) -> FeatureReader<Cursor<Vec<u8>>> {
        FeatureReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn test_skips_comments_and_blanks() {
        let text = "\
##gff-version 3
chr1\tsrc\tgene\t100\t200\t.\t+\t.\tID=g1

# free comment
chr1\tsrc\texon\t120\t180\t.\t+\t.\tID=e1
chr2\tsrc\tgene\t1\t50\t.\t-\t.\tID=g2
";
        let records = reader(text).records().unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].seqid, "chr1");
        assert_eq!(records[0].start, 100);
        assert_eq!(records[0].stop, 200);
        assert_eq!(records[2].seqid, "chr2");
    }

    #[test]
    fn test_fasta_sentinel_terminates() {
        let text = "\
chr1\tsrc\tgene\t100\t200\t.\t+\t.\tID=g1
##FASTA
>chr1
ACGTACGT
chr9\tsrc\tgene\t1\t2\t.\t+\t.\tID=never
";
        let records = reader(text).records().unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_field_count_error_carries_line_number() {
        let text = "\
# header
chr1\tsrc\tgene\t100\t200\t.\t+\t.\tID=g1
chr1\tAUGUSTUS\tgene\t1000
";
        let mut stream = reader(text);
        assert!(stream.next().unwrap().is_ok());
        let err = stream.next().unwrap().unwrap_err();
        assert_eq!(err.line_number(), Some(3));
        match err {
            GffReadError::Line { source, .. } => assert_eq!(
                source,
                RecordParseError::FieldCount {
                    expected: 9,
                    found: 4
                }
            ),
            _ => panic!("expected Line error"),
        }
        // Stream is fused after the error
        assert!(stream.next().is_none());
    }

    #[test]
    fn test_invalid_coordinate_aborts() {
        let text = "chr1\tAUGUSTUS\tgene\tABC\t2000\t.\t+\t.\tID=x\n";
        let err = reader(text).records().unwrap_err();
        match err {
            GffReadError::Line { source, .. } => assert!(matches!(
                source,
                RecordParseError::InvalidCoordinate { field: "start", .. }
            )),
            _ => panic!("expected Line error"),
        }
    }

    #[test]
    fn test_missing_final_newline() {
        let text = "chr1\tsrc\tgene\t100\t200\t.\t+\t.\tID=g1";
        let records = reader(text).records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].attributes, "ID=g1");
    }

    #[test]
    fn test_source_unavailable() {
        let err = FeatureReader::from_path("/no/such/file.gff").unwrap_err();
        assert!(matches!(err, GffReadError::SourceUnavailable { .. }));
    }

    #[test]
    fn test_line_counter_counts_skipped_lines() {
        let text = "# one\n\n# three\nchr1\tsrc\tgene\t1\t2\t.\t+\t.\t.\n";
        let mut stream = reader(text);
        stream.next().unwrap().unwrap();
        assert_eq!(stream.line_number(), 4);
    }
}
