use std::path::PathBuf;
use std::string::FromUtf8Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot open file '{}'", .path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot stat file '{}'", .path.display())]
    StatFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot archive '{}': is a directory", .path.display())]
    IsDirectory { path: PathBuf },

    #[error("cannot encode file name '{name}'")]
    UnrepresentableName { name: String },

    #[error("file '{name}' is too large ({length} bytes)")]
    FileTooLarge { name: String, length: u64 },

    #[error("cannot read file '{}'", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected EOF reading '{}'", .path.display())]
    SourceTruncated {
        path: PathBuf,
        expected: u64,
        copied: u64,
    },

    #[error("cannot write archive")]
    WriteArchive {
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read archive")]
    ReadArchive {
        #[source]
        source: std::io::Error,
    },

    #[error("corrupted archive (incomplete filename length)")]
    IncompleteNameLength,

    #[error("corrupted archive (invalid filename length)")]
    InvalidNameLength,

    #[error("corrupted archive (incomplete filename)")]
    IncompleteName { expected: u32, actual: usize },

    #[error("corrupted archive (filename encoding)")]
    NameEncoding {
        #[source]
        source: FromUtf8Error,
    },

    #[error("corrupted archive (incomplete file size)")]
    IncompleteContentLength,

    #[error("corrupted archive (invalid file size)")]
    InvalidContentLength { length: u64 },

    #[error("cannot create output file '{}'", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write file '{}'", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupted archive (unexpected EOF in file data)")]
    ContentTruncated {
        name: String,
        expected: u64,
        copied: u64,
    },
}

impl Error {
    /// Whether the error comes from malformed archive framing rather than I/O.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            Error::IncompleteNameLength
                | Error::InvalidNameLength
                | Error::IncompleteName { .. }
                | Error::NameEncoding { .. }
                | Error::IncompleteContentLength
                | Error::InvalidContentLength { .. }
                | Error::ContentTruncated { .. }
        )
    }
}
