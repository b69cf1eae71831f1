use std::fs::{File, OpenOptions};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use crate::{
    de::read_header,
    error::{Error, Result},
    record::RecordHeader,
};

use super::{transfer, TransferError};

/// Pulls records off a [`Read`] source in stream order.
#[derive(Debug)]
pub struct ArchiveReader<R: Read> {
    reader: R,
    /// Header of an entry handed out but never consumed.
    unread: Option<RecordHeader>,
    records: u64,
}

/// A record whose header has been read and whose content is next in the
/// stream. Consume it with [`Entry::extract`], [`Entry::copy_to`] or
/// [`Entry::skip`]; dropping it leaves the content to be skipped by the next
/// call to [`ArchiveReader::next_entry`].
#[derive(Debug)]
pub struct Entry<'a, R: Read> {
    header: RecordHeader,
    archive: &'a mut ArchiveReader<R>,
}

impl<R: Read> ArchiveReader<R> {
    pub fn new(reader: R) -> ArchiveReader<R> {
        ArchiveReader {
            reader,
            unread: None,
            records: 0,
        }
    }

    /// Number of records whose header has been read.
    pub fn records(&self) -> u64 {
        self.records
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads the next header. `Ok(None)` is the clean end of the archive;
    /// a stream ending anywhere else is an error.
    pub fn next_entry(&mut self) -> Result<Option<Entry<'_, R>>> {
        if let Some(header) = self.unread.take() {
            self.consume(&header, &mut std::io::sink(), Path::new(&header.name))?;
        }

        let header = match read_header(&mut self.reader)? {
            Some(header) => header,
            None => return Ok(None),
        };

        self.records += 1;
        self.unread = Some(header.clone());
        Ok(Some(Entry {
            header,
            archive: self,
        }))
    }

    /// Extracts every remaining record under `dest`, returning how many were
    /// written.
    pub fn extract_all<P: AsRef<Path>>(&mut self, dest: P) -> Result<u64> {
        let dest = dest.as_ref();
        let mut count = 0;
        while let Some(entry) = self.next_entry()? {
            entry.extract(dest)?;
            count += 1;
        }
        Ok(count)
    }

    fn consume<W: Write + ?Sized>(
        &mut self,
        header: &RecordHeader,
        writer: &mut W,
        path: &Path,
    ) -> Result<()> {
        transfer(&mut self.reader, writer, header.length).map_err(|e| match e {
            TransferError::Read(source) => Error::ReadArchive { source },
            TransferError::Write(source) => Error::WriteFile {
                path: path.to_path_buf(),
                source,
            },
            TransferError::UnexpectedEof { copied } => Error::ContentTruncated {
                name: header.name.clone(),
                expected: header.length,
                copied,
            },
        })
    }
}

impl<'a, R: Read> Entry<'a, R> {
    pub fn header(&self) -> &RecordHeader {
        &self.header
    }

    pub fn name(&self) -> &str {
        &self.header.name
    }

    pub fn length(&self) -> u64 {
        self.header.length
    }

    /// Streams the content into `writer`.
    pub fn copy_to<W: Write + ?Sized>(self, writer: &mut W) -> Result<()> {
        let path = PathBuf::from(&self.header.name);
        self.finish(writer, &path)
    }

    /// Reads past the content without keeping it.
    pub fn skip(self) -> Result<()> {
        self.copy_to(&mut std::io::sink())
    }

    /// Writes the content to `dest` joined with the stored name, replacing
    /// any existing file. The name is used verbatim: separators, `..` and
    /// absolute paths are not filtered. If the content is cut short, the
    /// partial file stays on disk holding every byte received.
    pub fn extract<P: AsRef<Path>>(self, dest: P) -> Result<PathBuf> {
        let path = dest.as_ref().join(&self.header.name);

        let mut file = create_output(&path).map_err(|source| Error::CreateFile {
            path: path.clone(),
            source,
        })?;

        self.finish(&mut file, &path)?;
        tracing::debug!(path = %path.display(), "extracted file");
        Ok(path)
    }

    fn finish<W: Write + ?Sized>(self, writer: &mut W, path: &Path) -> Result<()> {
        let Entry { header, archive } = self;
        archive.unread = None;
        archive.consume(&header, writer, path)
    }
}

fn create_output(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o644);
    }

    options.open(path)
}

/// Extracts every record of `reader` under `dest`, in stream order.
/// Stops at the first failure.
pub fn decode<R: Read, P: AsRef<Path>>(reader: R, dest: P) -> Result<u64> {
    ArchiveReader::new(reader).extract_all(dest)
}
