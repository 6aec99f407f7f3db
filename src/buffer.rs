use byteorder::{BigEndian, ByteOrder};
use bytes::{Bytes, BytesMut};
use tracing::debug;

use crate::{DnsError, Result};

/// Cursor over a received message.
///
/// Reads hand out views borrowed from the source region rather than copies,
/// so the source cannot be mutated while a returned slice is alive.
#[derive(Debug, Clone)]
pub struct ReadBuffer<'a> {
    data: &'a [u8],
    current: usize,
}

impl<'a> ReadBuffer<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, current: 0 }
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.current
    }

    /// Returns the next `length` bytes and advances past them.
    ///
    /// On failure nothing is consumed.
    pub fn read(&mut self, length: usize) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if length > remaining {
            debug!(length, remaining, "read past end of buffer");
            return Err(DnsError::OutOfBounds {
                requested: length,
                remaining,
            });
        }

        let start = self.current;
        self.current += length;
        Ok(&self.data[start..self.current])
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        Ok(self.read(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.read(2)?))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(BigEndian::read_u32(self.read(4)?))
    }

    /// Moves the cursor to an absolute offset, e.g. to follow a compression
    /// pointer back into the message.
    pub fn set_position(&mut self, position: usize) -> Result<()> {
        if position > self.data.len() {
            return Err(DnsError::OutOfBounds {
                requested: position,
                remaining: self.data.len(),
            });
        }

        self.current = position;
        Ok(())
    }
}

/// Fixed-capacity region for building an outgoing message.
#[derive(Debug, Clone)]
pub struct WriteBuffer {
    data: BytesMut,
    current: usize,
}

impl WriteBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: BytesMut::zeroed(capacity),
            current: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    pub fn position(&self) -> usize {
        self.current
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.current
    }

    /// Copies `bytes` in at the cursor. Nothing is written if they don't fit.
    pub fn write(&mut self, bytes: &[u8]) -> Result<()> {
        let remaining = self.remaining();
        if bytes.len() > remaining {
            debug!(length = bytes.len(), remaining, "write past end of buffer");
            return Err(DnsError::OutOfBounds {
                requested: bytes.len(),
                remaining,
            });
        }

        let end = self.current + bytes.len();
        self.data[self.current..end].copy_from_slice(bytes);
        self.current = end;
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        let mut raw = [0; 2];
        BigEndian::write_u16(&mut raw, value);
        self.write(&raw)
    }

    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        let mut raw = [0; 4];
        BigEndian::write_u32(&mut raw, value);
        self.write(&raw)
    }

    /// The bytes written so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.current]
    }

    /// Consumes the buffer, keeping only the written prefix.
    pub fn freeze(mut self) -> Bytes {
        self.data.truncate(self.current);
        self.data.freeze()
    }
}

#[cfg(test)]
mod tests {
    use super::{ReadBuffer, WriteBuffer};
    use crate::DnsError;

    const MESSAGE: [u8; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12];

    #[test]
    fn new_write_buffer_is_empty() {
        let buf = WriteBuffer::new(8);
        assert_eq!(buf.capacity(), 8);
        assert_eq!(buf.position(), 0);
        assert!(buf.as_slice().is_empty());
        assert_eq!(buf.freeze().len(), 0);
    }

    #[test]
    fn split_reads_match_single_read() {
        let mut whole = ReadBuffer::new(&MESSAGE);
        let all = whole.read(12).unwrap();

        let mut split = ReadBuffer::new(&MESSAGE);
        let first = split.read(4).unwrap();
        let second = split.read(8).unwrap();

        assert_eq!(first, &all[..4]);
        assert_eq!(second, &all[4..]);
        assert_eq!(split.remaining(), 0);
    }

    #[test]
    fn failed_read_leaves_cursor() {
        let mut buf = ReadBuffer::new(&MESSAGE);
        buf.read(10).unwrap();

        assert_eq!(
            buf.read(3),
            Err(DnsError::OutOfBounds {
                requested: 3,
                remaining: 2
            })
        );
        assert_eq!(buf.position(), 10);

        assert_eq!(buf.read(2).unwrap(), &[11, 12]);
        assert_eq!(buf.position(), 12);
    }

    #[test]
    fn zero_length_read_at_end() {
        let mut buf = ReadBuffer::new(&MESSAGE);
        buf.read(12).unwrap();
        assert_eq!(buf.read(0).unwrap(), &[] as &[u8]);
        assert!(buf.read_u8().is_err());
    }

    #[test]
    fn reads_big_endian() {
        let mut buf = ReadBuffer::new(&MESSAGE);
        assert_eq!(buf.read_u8().unwrap(), 0x01);
        assert_eq!(buf.read_u16().unwrap(), 0x0203);
        assert_eq!(buf.read_u32().unwrap(), 0x0405_0607);
        assert_eq!(buf.position(), 7);
    }

    #[test]
    fn seek() {
        let mut buf = ReadBuffer::new(&MESSAGE);
        buf.read(6).unwrap();

        buf.set_position(2).unwrap();
        assert_eq!(buf.read_u8().unwrap(), 3);

        assert!(buf.set_position(13).is_err());
        assert_eq!(buf.position(), 3);

        buf.set_position(12).unwrap();
        assert_eq!(buf.remaining(), 0);
    }

    #[test]
    fn write_respects_capacity() {
        let mut buf = WriteBuffer::new(4);
        buf.write_u16(0xabcd).unwrap();

        assert_eq!(
            buf.write_u32(1),
            Err(DnsError::OutOfBounds {
                requested: 4,
                remaining: 2
            })
        );
        assert_eq!(buf.position(), 2);

        buf.write_u8(0x01).unwrap();
        buf.write(&[0x02]).unwrap();
        assert_eq!(buf.remaining(), 0);
        assert_eq!(&buf.freeze()[..], &[0xab, 0xcd, 0x01, 0x02]);
    }
}
