use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::record::RecordHeader;

pub(crate) trait Serialize {
    fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()>;
}

impl Serialize for RecordHeader {
    fn write<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        // Length is checked against u32::MAX when the header is built.
        writer.write_u32::<BigEndian>(self.name.len() as u32)?;
        writer.write_all(self.name.as_bytes())?;
        writer.write_u64::<BigEndian>(self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_big_endian() {
        let header = RecordHeader::new("a.txt", 0x0102).unwrap();
        let mut buf = vec![];
        header.write(&mut buf).unwrap();

        assert_eq!(
            buf,
            b"\x00\x00\x00\x05a.txt\x00\x00\x00\x00\x00\x00\x01\x02".to_vec()
        );
        assert_eq!(buf.len() as u64, header.encoded_len());
    }
}
