use std::io::BufWriter;

use seqar_format::ArchiveWriter;

use crate::cli::CreateArgs;
use crate::error::Result;

pub fn run(args: CreateArgs, verbose: bool) -> Result<()> {
    let stdout = std::io::stdout();
    let mut archive = ArchiveWriter::new(BufWriter::new(stdout.lock()));

    for path in &args.files {
        let header = archive.append_file(path)?;
        if verbose {
            eprintln!("{}", header.name());
        }
    }

    tracing::debug!(records = archive.records(), "archive written");
    archive.finish()?;
    Ok(())
}
