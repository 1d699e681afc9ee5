/// Byte histogram, indexed by byte value.
pub type Histogram = [u64; 256];

/// Returns a frequency count of the input data. An empty input gives an all-zero count.
pub fn freqs(data: &[u8]) -> Histogram {
    let mut freqs = [0_u64; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

/// Number of byte values that occur at least once.
pub fn distinct_symbols(freqs: &Histogram) -> usize {
    freqs.iter().filter(|&&f| f > 0).count()
}
