use crate::error::{Error, Result};

pub mod constants {
    /// Width of the name length field.
    pub const NAME_LENGTH_SIZE: usize = 4;
    /// Width of the content length field.
    pub const CONTENT_LENGTH_SIZE: usize = 8;
    /// Size of the chunk buffer used to stream record content.
    pub const BUF_SIZE: usize = 4096;
    /// Largest content length accepted in either direction. Anything above
    /// this cannot be a file offset, and reads as negative to a signed decoder.
    pub const MAX_CONTENT_LENGTH: u64 = i64::MAX as u64;
}

use self::constants::*;

/// The fixed part of a record: everything that precedes the content bytes.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RecordHeader {
    pub(crate) name: String,
    pub(crate) length: u64,
}

impl RecordHeader {
    /// Builds a header, rejecting names and lengths the format cannot carry.
    pub fn new<S: Into<String>>(name: S, length: u64) -> Result<RecordHeader> {
        let name = name.into();

        if name.is_empty() || name.len() > u32::MAX as usize {
            return Err(Error::UnrepresentableName { name });
        }

        if length > MAX_CONTENT_LENGTH {
            return Err(Error::FileTooLarge { name, length });
        }

        Ok(RecordHeader { name, length })
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared content length.
    #[inline(always)]
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Number of bytes the header occupies on the wire.
    #[inline(always)]
    pub fn encoded_len(&self) -> u64 {
        (NAME_LENGTH_SIZE + self.name.len() + CONTENT_LENGTH_SIZE) as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_name() {
        let err = RecordHeader::new("", 0).unwrap_err();
        assert!(matches!(err, Error::UnrepresentableName { .. }));
    }

    #[test]
    fn rejects_oversized_length() {
        let err = RecordHeader::new("big.bin", MAX_CONTENT_LENGTH + 1).unwrap_err();
        assert!(matches!(err, Error::FileTooLarge { length, .. } if length == MAX_CONTENT_LENGTH + 1));
        assert!(RecordHeader::new("big.bin", MAX_CONTENT_LENGTH).is_ok());
    }

    #[test]
    fn encoded_len_counts_bytes_not_chars() {
        let header = RecordHeader::new("ünïcödé.txt", 3).unwrap();
        assert_eq!(header.encoded_len(), 4 + "ünïcödé.txt".len() as u64 + 8);
        assert_eq!(header.name().chars().count(), 11);
    }
}
