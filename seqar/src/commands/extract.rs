use std::path::PathBuf;

use seqar_format::ArchiveReader;

use crate::cli::ExtractArgs;
use crate::error::{Error, Result};

pub fn run(args: ExtractArgs, verbose: bool) -> Result<()> {
    // An empty path joins to the stored name unchanged, i.e. the current directory.
    let output_path = match args.output {
        Some(path) => {
            std::fs::create_dir_all(&path).map_err(|source| Error::CreateDirectory {
                path: path.clone(),
                source,
            })?;
            path
        }
        None => PathBuf::new(),
    };

    let stdin = std::io::stdin();
    let mut archive = ArchiveReader::new(stdin.lock());

    while let Some(entry) = archive.next_entry()? {
        if verbose {
            eprintln!("{}", entry.name());
        }
        entry.extract(&output_path)?;
    }

    tracing::debug!(records = archive.records(), "archive extracted");
    Ok(())
}
