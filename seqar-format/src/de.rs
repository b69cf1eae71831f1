use std::io::{ErrorKind, Read};

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Error, Result};
use crate::record::{constants::*, RecordHeader};

/// Fills `buf` from `reader`, stopping early only at end of stream.
/// Returns the number of bytes read.
pub(crate) fn read_full<R: Read + ?Sized>(
    reader: &mut R,
    buf: &mut [u8],
) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Reads the next record header. `Ok(None)` means the stream ended cleanly on
/// a record boundary.
pub(crate) fn read_header<R: Read>(reader: &mut R) -> Result<Option<RecordHeader>> {
    let mut name_length = [0u8; NAME_LENGTH_SIZE];
    match read_full(reader, &mut name_length).map_err(|source| Error::ReadArchive { source })? {
        0 => return Ok(None),
        NAME_LENGTH_SIZE => {}
        _ => return Err(Error::IncompleteNameLength),
    }

    let name_length = BigEndian::read_u32(&name_length);
    if name_length == 0 {
        return Err(Error::InvalidNameLength);
    }

    // Grow with what actually arrives rather than trusting the declared length.
    let mut name = Vec::with_capacity((name_length as usize).min(BUF_SIZE));
    reader
        .by_ref()
        .take(u64::from(name_length))
        .read_to_end(&mut name)
        .map_err(|source| Error::ReadArchive { source })?;

    if name.len() < name_length as usize {
        return Err(Error::IncompleteName {
            expected: name_length,
            actual: name.len(),
        });
    }

    let name = String::from_utf8(name).map_err(|source| Error::NameEncoding { source })?;

    let mut length = [0u8; CONTENT_LENGTH_SIZE];
    if read_full(reader, &mut length).map_err(|source| Error::ReadArchive { source })?
        < CONTENT_LENGTH_SIZE
    {
        return Err(Error::IncompleteContentLength);
    }

    let length = BigEndian::read_u64(&length);
    if length > MAX_CONTENT_LENGTH {
        return Err(Error::InvalidContentLength { length });
    }

    tracing::debug!(%name, name_length, length, "deserialized RecordHeader");

    Ok(Some(RecordHeader { name, length }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn header_bytes(name: &[u8], length: u64) -> Vec<u8> {
        let mut buf = (name.len() as u32).to_be_bytes().to_vec();
        buf.extend_from_slice(name);
        buf.extend_from_slice(&length.to_be_bytes());
        buf
    }

    #[test]
    fn empty_stream_is_clean_eof() {
        let mut cursor = Cursor::new(Vec::<u8>::new());
        assert!(read_header(&mut cursor).unwrap().is_none());
    }

    #[test]
    fn reads_header() {
        let mut cursor = Cursor::new(header_bytes(b"hello.txt", 8));
        let header = read_header(&mut cursor).unwrap().unwrap();
        assert_eq!(header.name(), "hello.txt");
        assert_eq!(header.length(), 8);
        assert_eq!(cursor.position(), header.encoded_len());
    }

    #[test]
    fn short_name_length() {
        for len in 1..NAME_LENGTH_SIZE {
            let mut cursor = Cursor::new(vec![0u8; len]);
            let err = read_header(&mut cursor).unwrap_err();
            assert!(matches!(err, Error::IncompleteNameLength), "{} bytes", len);
        }
    }

    #[test]
    fn zero_name_length() {
        let mut bytes = header_bytes(b"", 0);
        bytes.extend_from_slice(b"whatever");
        let err = read_header(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, Error::InvalidNameLength));
        assert_eq!(err.to_string(), "corrupted archive (invalid filename length)");
    }

    #[test]
    fn short_name() {
        let mut cursor = Cursor::new(vec![0, 0, 0, 10, b'a', b'b']);
        let err = read_header(&mut cursor).unwrap_err();
        assert!(matches!(
            err,
            Error::IncompleteName {
                expected: 10,
                actual: 2
            }
        ));
    }

    #[test]
    fn huge_name_length_does_not_preallocate() {
        let mut cursor = Cursor::new(vec![0xff, 0xff, 0xff, 0xff, b'x']);
        let err = read_header(&mut cursor).unwrap_err();
        assert!(matches!(err, Error::IncompleteName { actual: 1, .. }));
    }

    #[test]
    fn invalid_utf8_name() {
        let bytes = header_bytes(b"\xff\xfe.txt", 0);
        let err = read_header(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, Error::NameEncoding { .. }));
        assert_eq!(err.to_string(), "corrupted archive (filename encoding)");
    }

    #[test]
    fn short_content_length() {
        let mut bytes = header_bytes(b"a", 0);
        bytes.truncate(bytes.len() - 3);
        let err = read_header(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, Error::IncompleteContentLength));
    }

    #[test]
    fn content_length_with_high_bit_set() {
        let bytes = header_bytes(b"a", 1 << 63);
        let err = read_header(&mut Cursor::new(bytes)).unwrap_err();
        assert!(matches!(err, Error::InvalidContentLength { length } if length == 1 << 63));
        assert_eq!(err.to_string(), "corrupted archive (invalid file size)");
    }
}
