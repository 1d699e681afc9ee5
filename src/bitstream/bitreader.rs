//! BitReader: reads the packed payload of a huffzip container one bit at a time.
//!
//! Bits are read most significant bit first within each byte. The reader is given
//! the number of valid bits, so zero padding in the final byte is never handed out
//! as data.
//!

const BIT_MASK: u8 = 0xff;

/// Reads a bit-packed byte slice.
#[derive(Debug)]
pub struct BitReader<'a> {
    buffer: &'a [u8],
    cursor: usize,
    bit_index: usize,
    bit_limit: usize,
}

impl<'a> BitReader<'a> {
    /// Creates a reader over the first `bit_limit` bits of `buffer`. The limit is clamped
    /// to the bits actually present.
    pub fn new(buffer: &'a [u8], bit_limit: usize) -> Self {
        Self {
            buffer,
            cursor: 0,
            bit_index: 0,
            bit_limit: bit_limit.min(buffer.len() * 8),
        }
    }

    /// Creates a reader that hands out every bit of `buffer`, padding included.
    pub fn whole(buffer: &'a [u8]) -> Self {
        Self::new(buffer, buffer.len() * 8)
    }

    /// Number of bits consumed so far.
    pub fn position(&self) -> usize {
        self.cursor * 8 + self.bit_index
    }

    /// Number of valid bits not yet consumed.
    pub fn bits_left(&self) -> usize {
        self.bit_limit - self.position()
    }

    /// Return bit as Option<usize> (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> Option<usize> {
        if self.position() >= self.bit_limit {
            return None;
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        Some(bit as usize)
    }

    /// Return Option<Bool> *true* if the next bit is 1, *false* if 0, consuming the bit,
    /// or None if there is no more data to read
    pub fn bool_bit(&mut self) -> Option<bool> {
        self.bit().map(|bit| bit == 1)
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

#[cfg(test)]
mod test {
    use super::BitReader;

    #[test]
    fn basic_test() {
        let x = [0b10000001_u8];
        let mut br = BitReader::whole(&x);
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(0));
        assert_eq!(br.bit(), Some(1));
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn bit_limit_test() {
        let x = [0b11111111_u8, 0b11000000];
        let mut br = BitReader::new(&x, 10);
        assert_eq!(br.bits_left(), 10);
        for _ in 0..10 {
            assert_eq!(br.bool_bit(), Some(true));
        }
        assert_eq!(br.bits_left(), 0);
        assert_eq!(br.bool_bit(), None);
        assert_eq!(br.position(), 10);
    }

    #[test]
    fn limit_clamped_test() {
        let x = [0_u8];
        let mut br = BitReader::new(&x, 64);
        assert_eq!(br.bits_left(), 8);
        for _ in 0..8 {
            assert!(br.bit().is_some());
        }
        assert_eq!(br.bit(), None);
    }

    #[test]
    fn loc_test() {
        let x = "Hello, world!".as_bytes();
        let mut br = BitReader::whole(x);
        for _ in 0..41 {
            br.bit();
        }
        assert_eq!(br.loc(), "[5.1]");
    }

    #[test]
    fn bool_bit_test() {
        let x = [0b01010000];
        let mut br = BitReader::whole(&x);
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(true));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), Some(false));
        assert_eq!(br.bool_bit(), None);
    }

    #[test]
    fn empty_test() {
        let mut br = BitReader::whole(&[]);
        assert_eq!(br.bits_left(), 0);
        assert_eq!(br.bit(), None);
    }
}
