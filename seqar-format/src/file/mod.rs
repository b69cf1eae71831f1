use std::io::{ErrorKind, Read, Write};

use crate::record::constants::BUF_SIZE;

pub mod reader;
pub mod writer;

/// Why a content transfer stopped short.
#[derive(Debug)]
pub(crate) enum TransferError {
    Read(std::io::Error),
    Write(std::io::Error),
    /// The source ran dry after `copied` bytes.
    UnexpectedEof { copied: u64 },
}

/// Copies exactly `length` bytes from `reader` to `writer` through a fixed
/// buffer. Every chunk is handed to `writer` as soon as it is read, so on
/// failure the writer holds everything received up to that point.
pub(crate) fn transfer<R, W>(
    reader: &mut R,
    writer: &mut W,
    length: u64,
) -> std::result::Result<(), TransferError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mut buf = [0u8; BUF_SIZE];
    let mut remaining = length;

    while remaining > 0 {
        let want = remaining.min(BUF_SIZE as u64) as usize;
        let n = match reader.read(&mut buf[..want]) {
            Ok(0) => {
                return Err(TransferError::UnexpectedEof {
                    copied: length - remaining,
                })
            }
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(TransferError::Read(e)),
        };

        writer.write_all(&buf[..n]).map_err(TransferError::Write)?;
        remaining -= n as u64;
    }

    Ok(())
}
