//! Conversions between bytes, word indices and binary-digit strings.
//!
//! Bit strings hold one ASCII `'0'`/`'1'` per bit, most significant bit first.
//! Callers guarantee the length contracts; they are only debug-asserted here.

/// Bits per word index.
pub const BITS_PER_WORD: usize = 11;

/// Render each byte as 8 binary digits, zero-padded on the left.
pub fn bytes_to_bits(bytes: &[u8]) -> String {
    let mut bits = String::with_capacity(bytes.len() * 8);
    for byte in bytes {
        bits.push_str(&format!("{byte:08b}"));
    }
    bits
}

/// Parse 8-bit chunks back into bytes.
pub fn bits_to_bytes(bits: &str) -> Vec<u8> {
    debug_assert!(bits.len() % 8 == 0, "bit string length {} not a multiple of 8", bits.len());
    bits.as_bytes()
        .chunks(8)
        .map(|chunk| parse_bits(chunk) as u8)
        .collect()
}

/// Parse 11-bit chunks into word-list indices (0..=2047).
pub fn bits_to_indices(bits: &str) -> Vec<u16> {
    debug_assert!(
        bits.len() % BITS_PER_WORD == 0,
        "bit string length {} not a multiple of 11",
        bits.len()
    );
    bits.as_bytes()
        .chunks(BITS_PER_WORD)
        .map(parse_bits)
        .collect()
}

/// Render a word index as 11 binary digits.
pub fn index_to_bits(index: u16) -> String {
    debug_assert!(index < 2048, "word index {index} out of range");
    format!("{index:011b}")
}

fn parse_bits(chunk: &[u8]) -> u16 {
    chunk.iter().fold(0u16, |acc, digit| {
        debug_assert!(matches!(digit, b'0' | b'1'), "non-binary digit in bit string");
        (acc << 1) | u16::from(*digit == b'1')
    })
}
