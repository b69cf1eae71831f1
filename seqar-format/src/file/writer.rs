use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::{
    error::{Error, Result},
    record::RecordHeader,
    ser::Serialize,
};

use super::{transfer, TransferError};

/// Streams records into any [`Write`] sink, one file at a time.
///
/// Nothing is buffered beyond a single transfer chunk; wrap the sink in a
/// `BufWriter` if it is unbuffered.
#[derive(Debug)]
pub struct ArchiveWriter<W: Write> {
    writer: W,
    records: u64,
}

impl<W: Write> ArchiveWriter<W> {
    pub fn new(writer: W) -> ArchiveWriter<W> {
        ArchiveWriter { writer, records: 0 }
    }

    /// Number of records written so far.
    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Flushes the sink and hands it back.
    pub fn finish(mut self) -> Result<W> {
        self.writer
            .flush()
            .map_err(|source| Error::WriteArchive { source })?;
        Ok(self.writer)
    }

    /// Appends the file at `path`, stored under `path` verbatim.
    ///
    /// The length is captured once from the open handle and is authoritative:
    /// a file that grows meanwhile is cut at that length, and one that shrinks
    /// fails with [`Error::SourceTruncated`].
    pub fn append_file<P: AsRef<Path>>(&mut self, path: P) -> Result<RecordHeader> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|source| Error::OpenFile {
            path: path.to_path_buf(),
            source,
        })?;

        let meta = file.metadata().map_err(|source| Error::StatFile {
            path: path.to_path_buf(),
            source,
        })?;

        if meta.is_dir() {
            return Err(Error::IsDirectory {
                path: path.to_path_buf(),
            });
        }

        let name = path.to_str().ok_or_else(|| Error::UnrepresentableName {
            name: path.display().to_string(),
        })?;
        let header = RecordHeader::new(name, meta.len())?;

        self.write_record(&header, &mut file, path)?;
        Ok(header)
    }

    /// Appends a record whose content is exactly `length` bytes of `reader`.
    pub fn append<S, R>(&mut self, name: S, length: u64, reader: &mut R) -> Result<RecordHeader>
    where
        S: Into<String>,
        R: Read,
    {
        let header = RecordHeader::new(name, length)?;
        let path = PathBuf::from(&header.name);
        self.write_record(&header, reader, &path)?;
        Ok(header)
    }

    fn write_record<R: Read>(
        &mut self,
        header: &RecordHeader,
        reader: &mut R,
        path: &Path,
    ) -> Result<()> {
        header
            .write(&mut self.writer)
            .map_err(|source| Error::WriteArchive { source })?;

        transfer(reader, &mut self.writer, header.length).map_err(|e| match e {
            TransferError::Read(source) => Error::ReadFile {
                path: path.to_path_buf(),
                source,
            },
            TransferError::Write(source) => Error::WriteArchive { source },
            TransferError::UnexpectedEof { copied } => Error::SourceTruncated {
                path: path.to_path_buf(),
                expected: header.length,
                copied,
            },
        })?;

        self.records += 1;
        tracing::debug!(
            name = %header.name,
            length = header.length,
            bytes = header.encoded_len() + header.length,
            "serialized record"
        );
        Ok(())
    }
}

/// Writes one record per path, in order, and returns the flushed sink.
/// Stops at the first failure.
pub fn encode<W, I, P>(paths: I, writer: W) -> Result<W>
where
    W: Write,
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut archive = ArchiveWriter::new(writer);
    for path in paths {
        archive.append_file(path)?;
    }
    archive.finish()
}
