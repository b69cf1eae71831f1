use std::io::{BufWriter, Write};

use seqar_format::ArchiveReader;

use crate::error::{Error, Result};

pub fn run() -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut archive = ArchiveReader::new(stdin.lock());

    while let Some(entry) = archive.next_entry()? {
        writeln!(out, "{}\t{}", entry.length(), entry.name())
            .map_err(|source| Error::WriteListing { source })?;
        entry.skip()?;
    }

    out.flush().map_err(|source| Error::WriteListing { source })?;
    Ok(())
}
