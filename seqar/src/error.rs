use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Archive(#[from] seqar_format::Error),

    #[error("cannot create directory '{}'", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write listing")]
    WriteListing {
        #[source]
        source: std::io::Error,
    },
}
