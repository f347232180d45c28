//! Sequential byte input.
//!
//! The decode loop reads its input one byte at a time and must tell a clean
//! end of data apart from a failing reader. [`ByteStream`] wraps any
//! [`Read`] for that.

use std::io::{self, ErrorKind, Read};

/// Single-pass byte reader over any [`Read`] implementation.
///
/// Wrap unbuffered sources such as `File` in a `BufReader` first; every
/// byte is a separate `read` call.
#[derive(Debug)]
pub struct ByteStream<R> {
    inner: R,
    consumed: u64,
}

impl<R: Read> ByteStream<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, consumed: 0 }
    }

    /// Read the next byte, or `None` at end of data.
    pub fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.inner.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.consumed += 1;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Read bytes into `out` until it holds `count` more bytes.
    ///
    /// Returns `false` if the data ran out first; the bytes that were read are
    /// still appended.
    pub fn read_into(&mut self, out: &mut Vec<u8>, count: usize) -> io::Result<bool> {
        for _ in 0..count {
            match self.next_byte()? {
                Some(b) => out.push(b),
                None => return Ok(false),
            }
        }
        Ok(true)
    }

    /// Total bytes read so far.
    pub fn consumed(&self) -> u64 {
        self.consumed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_byte_until_end() {
        let mut stream = ByteStream::new(&[0xA9, 0x42][..]);
        assert_eq!(stream.next_byte().unwrap(), Some(0xA9));
        assert_eq!(stream.next_byte().unwrap(), Some(0x42));
        assert_eq!(stream.next_byte().unwrap(), None);
        assert_eq!(stream.consumed(), 2);
    }

    #[test]
    fn test_read_into_short() {
        let mut stream = ByteStream::new(&[1, 2][..]);
        let mut out = vec![0];
        assert!(!stream.read_into(&mut out, 3).unwrap());
        assert_eq!(out, vec![0, 1, 2]);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(ErrorKind::Other, "device gone"))
        }
    }

    #[test]
    fn test_read_error_propagates() {
        let mut stream = ByteStream::new(FailingReader);
        assert!(stream.next_byte().is_err());
    }
}
