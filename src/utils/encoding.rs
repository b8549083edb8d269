use std::io::{self, Read, Write};

/// Write a single byte
pub fn write_u8<W: Write>(writer: &mut W, value: u8) -> io::Result<()> {
    writer.write_all(&[value])
}

/// Read a single byte
pub fn read_u8<R: Read>(reader: &mut R) -> io::Result<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Write a u16 in little-endian format
pub fn write_u16_le<W: Write>(writer: &mut W, value: u16) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

/// Read a u16 in little-endian format
pub fn read_u16_le<R: Read>(reader: &mut R) -> io::Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

/// Write a u32 in little-endian format
pub fn write_u32_le<W: Write>(writer: &mut W, value: u32) -> io::Result<()> {
    writer.write_all(&value.to_le_bytes())
}

/// Read a u32 in little-endian format
pub fn read_u32_le<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_u8_roundtrip() {
        let values = [0u8, 1, b'a', b'z', 0xFF];
        for value in values {
            let mut buf = Vec::new();
            write_u8(&mut buf, value).unwrap();
            assert_eq!(read_u8(&mut Cursor::new(&buf)).unwrap(), value);
        }
    }

    #[test]
    fn test_u16_roundtrip() {
        let values = [0u16, 1, 255, 256, u16::MAX];
        for value in values {
            let mut buf = Vec::new();
            write_u16_le(&mut buf, value).unwrap();
            assert_eq!(buf.len(), 2);
            assert_eq!(read_u16_le(&mut Cursor::new(&buf)).unwrap(), value);
        }
    }

    #[test]
    fn test_u32_roundtrip() {
        let values = [0u32, 1, 0xFF, 0x1_0000, u32::MAX];
        for value in values {
            let mut buf = Vec::new();
            write_u32_le(&mut buf, value).unwrap();
            assert_eq!(buf.len(), 4);
            assert_eq!(read_u32_le(&mut Cursor::new(&buf)).unwrap(), value);
        }
    }

    #[test]
    fn test_little_endian_layout() {
        let mut buf = Vec::new();
        write_u32_le(&mut buf, 0x0403_0201).unwrap();
        assert_eq!(buf, [0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_read_past_end() {
        let buf = [0x01u8];
        assert!(read_u32_le(&mut Cursor::new(&buf)).is_err());
        assert!(read_u16_le(&mut Cursor::new(&[] as &[u8])).is_err());
    }
}
