//! Line-oriented I/O layer
//!
//! Provides buffered file reading with tuned buffer sizes and optional
//! memory mapping for large annotation files, behind a single `BufRead`
//! implementation so the feature stream never cares which strategy is
//! in use.

use memmap2::Mmap;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Default buffer size for BufReader (128KB)
pub const DEFAULT_BUFFER_SIZE: usize = 128 * 1024;

/// Large buffer size for high-throughput I/O (1MB)
pub const LARGE_BUFFER_SIZE: usize = 1024 * 1024;

/// Threshold for using memory mapping (100MB)
pub const MMAP_THRESHOLD: u64 = 100 * 1024 * 1024;

/// A reader that selects its I/O strategy from the file size
#[derive(Debug)]
pub enum SmartReader {
    /// Buffered reader for smaller files or streaming
    Buffered(BufReader<File>),
    /// Memory-mapped reader for large files
    Mapped(MappedReader),
}

/// Memory-mapped file reader
#[derive(Debug)]
pub struct MappedReader {
    mmap: Mmap,
    position: usize,
}

impl MappedReader {
    /// Create a new memory-mapped reader
    pub fn new(file: &File) -> io::Result<Self> {
        // SAFETY: We assume the file won't be modified while mapped
        let mmap = unsafe { Mmap::map(file)? };
        Ok(Self { mmap, position: 0 })
    }
}

impl Read for MappedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let remaining = &self.mmap[self.position..];
        let to_read = std::cmp::min(buf.len(), remaining.len());
        buf[..to_read].copy_from_slice(&remaining[..to_read]);
        self.position += to_read;
        Ok(to_read)
    }
}

impl BufRead for MappedReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(&self.mmap[self.position..])
    }

    fn consume(&mut self, amt: usize) {
        self.position = std::cmp::min(self.position + amt, self.mmap.len());
    }
}

impl SmartReader {
    /// Open a file, choosing buffered or mapped reading by file size
    pub fn open<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::open(path.as_ref())?;
        let file_size = file.metadata()?.len();

        if file_size >= MMAP_THRESHOLD {
            Ok(SmartReader::Mapped(MappedReader::new(&file)?))
        } else {
            let buf_size = if file_size > 10 * 1024 * 1024 {
                LARGE_BUFFER_SIZE
            } else {
                DEFAULT_BUFFER_SIZE
            };
            Ok(SmartReader::Buffered(BufReader::with_capacity(
                buf_size, file,
            )))
        }
    }

    /// Check if using memory mapping
    pub fn is_mapped(&self) -> bool {
        matches!(self, SmartReader::Mapped(_))
    }
}

impl Read for SmartReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            SmartReader::Buffered(reader) => reader.read(buf),
            SmartReader::Mapped(reader) => reader.read(buf),
        }
    }
}

impl BufRead for SmartReader {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        match self {
            SmartReader::Buffered(reader) => reader.fill_buf(),
            SmartReader::Mapped(reader) => reader.fill_buf(),
        }
    }

    fn consume(&mut self, amt: usize) {
        match self {
            SmartReader::Buffered(reader) => reader.consume(amt),
            SmartReader::Mapped(reader) => reader.consume(amt),
        }
    }
}

/// Line iterator that reuses a buffer to avoid allocations
///
/// Strips trailing `\n` / `\r\n`. A final line without a trailing newline
/// is still yielded as a valid line.
#[derive(Debug)]
pub struct LineIterator<R: BufRead> {
    reader: R,
    buffer: String,
}

impl<R: BufRead> LineIterator<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: String::with_capacity(1024),
        }
    }

    /// Read the next line into the internal buffer
    /// Returns None at EOF, Some(Ok(&str)) on success, Some(Err) on error
    pub fn next_line(&mut self) -> Option<io::Result<&str>> {
        self.buffer.clear();
        match self.reader.read_line(&mut self.buffer) {
            Ok(0) => None, // EOF
            Ok(_) => {
                if self.buffer.ends_with('\n') {
                    self.buffer.pop();
                    if self.buffer.ends_with('\r') {
                        self.buffer.pop();
                    }
                }
                Some(Ok(&self.buffer))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_smart_reader_small_file_buffered() -> io::Result<()> {
        let mut temp = NamedTempFile::new()?;
        writeln!(temp, "chr1\tsrc\tgene\t1\t2\t.\t+\t.\t.")?;

        let reader = SmartReader::open(temp.path())?;
        assert!(!reader.is_mapped());
        Ok(())
    }

    #[test]
    fn test_line_iterator() -> io::Result<()> {
        let mut temp = NamedTempFile::new()?;
        writeln!(temp, "line1")?;
        writeln!(temp, "line2")?;
        writeln!(temp, "line3")?;
        temp.flush()?;

        let file = File::open(temp.path())?;
        let reader = BufReader::new(file);
        let mut iter = LineIterator::new(reader);

        assert_eq!(iter.next_line().unwrap()?, "line1");
        assert_eq!(iter.next_line().unwrap()?, "line2");
        assert_eq!(iter.next_line().unwrap()?, "line3");
        assert!(iter.next_line().is_none());
        Ok(())
    }

    #[test]
    fn test_line_iterator_crlf_and_no_final_newline() -> io::Result<()> {
        let mut temp = NamedTempFile::new()?;
        temp.write_all(b"line1\r\nline2")?;
        temp.flush()?;

        let file = File::open(temp.path())?;
        let mut iter = LineIterator::new(BufReader::new(file));

        assert_eq!(iter.next_line().unwrap()?, "line1");
        assert_eq!(iter.next_line().unwrap()?, "line2");
        assert!(iter.next_line().is_none());
        Ok(())
    }
}
