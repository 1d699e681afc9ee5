use log::error;

use crate::huffman_coding::code_table::Code;

/// Packs variable length codes into bytes, most significant bit first.
pub struct BitPacker {
    pub output: Vec<u8>,
    /// Zero bits added to the final byte by flush().
    pub padding: u8,
    queue: u64,
    q_bits: u8,
    bit_count: usize,
}

impl BitPacker {
    /// Create a new BitPacker with an output buffer of size specified. Suggest the
    /// size be set to the expected payload size. Call flush() to flush the bit queue
    /// to the buffer before taking the output.
    pub fn new(size: usize) -> Self {
        Self {
            output: Vec::with_capacity(size),
            padding: 0,
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// Internal bitstream write function common to all out functions.
    fn write_stream(&mut self) {
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte); //push the packed byte out
            self.q_bits -= 8; //adjust the count of bits left in the queue
        }
    }

    /// Puts a single bit on the stream.
    pub fn out_bit(&mut self, bit: bool) {
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
        self.bit_count += 1;
        self.write_stream();
    }

    /// Puts every bit of a code on the stream, first bit of the code first.
    pub fn out_code(&mut self, code: &Code) {
        code.iter().for_each(|bit| self.out_bit(bit));
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// significant bits. Records how many padding bits were added.
    pub fn flush(&mut self) {
        self.padding = 0;
        if self.q_bits > 0 {
            self.padding = 8 - self.q_bits;
            self.queue <<= self.padding; //pad the queue with zeros
            self.q_bits += self.padding;
            self.write_stream(); // write out all that is left
            if self.q_bits > 0 {
                error!("Stuff left in the BitPacker queue.");
            }
        }
    }

    /// Number of real (non padding) bits put on the stream so far.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Debugging function to return the number of bytes.bits output so far
    pub fn loc(&self) -> String {
        format! {"[{}.{}]",((self.output.len() * 8) + self.q_bits as usize)/8, ((self.output.len() * 8) + self.q_bits as usize)%8}
    }
}

#[cfg(test)]
mod test {
    use super::BitPacker;
    use crate::huffman_coding::code_table::Code;

    #[test]
    fn out_bit_test() {
        let mut bp = BitPacker::new(100);
        for bit in [false, false, true, false, false, false, false, true] {
            bp.out_bit(bit);
        }
        bp.flush();
        assert_eq!(bp.output, "!".as_bytes());
        assert_eq!(bp.padding, 0);
        assert_eq!(bp.bit_count(), 8);
    }

    #[test]
    fn flush_pads_low_bits_test() {
        let mut bp = BitPacker::new(100);
        bp.out_code(&Code::from_bits(&[true, false, true]));
        assert_eq!("[0.3]", &bp.loc());
        bp.flush();
        assert_eq!(bp.output, [0b1010_0000]);
        assert_eq!(bp.padding, 5);
        assert_eq!(bp.bit_count(), 3);
        assert_eq!("[1.0]", &bp.loc());
    }

    #[test]
    fn long_code_test() {
        // Codes can be far longer than the 64 bit queue
        let bits = vec![true; 200];
        let mut bp = BitPacker::new(100);
        bp.out_code(&Code::from_bits(&bits));
        bp.out_bit(false);
        bp.flush();
        assert_eq!(bp.output.len(), 26);
        assert!(bp.output[..25].iter().all(|&b| b == 0xff));
        assert_eq!(bp.output[25], 0);
        assert_eq!(bp.padding, 7);
        assert_eq!(bp.bit_count(), 201);
    }

    #[test]
    fn empty_flush_test() {
        let mut bp = BitPacker::new(0);
        bp.flush();
        assert!(bp.output.is_empty());
        assert_eq!(bp.padding, 0);
    }
}
