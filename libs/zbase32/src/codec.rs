//! Bit-packing encoder and decoder over the z-base32 alphabet.

use std::cmp::Ordering;

use crate::DecodeError;

/// The z-base32 alphabet, indexed by 5-bit symbol value.
///
/// The order is part of the wire format.
pub const ALPHABET: &[u8; 32] = b"ybndrfg8ejkmcpqxot1uwisza345h769";

const BITS_PER_SYMBOL: u32 = 5;

/// Marker for bytes that are not alphabet symbols.
const INVALID: u8 = 0xFF;

/// Reverse lookup from ASCII byte to symbol value.
const SYMBOL_VALUES: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Returns the number of symbols produced by encoding `bytes` bytes.
#[must_use]
pub const fn encoded_len(bytes: usize) -> usize {
    (bytes * 8).div_ceil(BITS_PER_SYMBOL as usize)
}

/// Returns the number of bytes produced by decoding `symbols` symbols.
#[must_use]
pub const fn decoded_len(symbols: usize) -> usize {
    symbols * BITS_PER_SYMBOL as usize / 8
}

/// Encodes bytes as z-base32 text.
///
/// Encoding never fails. Every input byte is consumed MSB-first; a byte may
/// contribute to two symbols when a symbol boundary falls inside it, and a
/// trailing partial symbol is zero-padded.
#[must_use]
pub fn encode(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(encoded_len(input.len()));

    // `shift` is how far the current byte must move right to line its
    // unconsumed high bits up with the low end of the next symbol.
    let mut shift: u32 = 3;
    let mut carry: u32 = 0;

    for &byte in input {
        let byte = u32::from(byte);

        out.push(symbol(carry | (byte >> shift)));

        if shift > BITS_PER_SYMBOL {
            shift -= BITS_PER_SYMBOL;
            out.push(symbol(byte >> shift));
        }

        shift = BITS_PER_SYMBOL - shift;
        carry = (byte << shift) & 0xFF;
        shift = 8 - shift;
    }

    if shift != 3 {
        out.push(symbol(carry));
    }

    out
}

/// Decodes z-base32 text into bytes.
///
/// The alphabet is lowercase only. Padding bits left over from the final
/// symbol are discarded.
pub fn decode(input: &str) -> Result<Vec<u8>, DecodeError> {
    let mut out = Vec::with_capacity(decoded_len(input.len()));

    // Number of bits still free in the byte being assembled, minus the
    // width of the symbol just read.
    let mut shift: i32 = 8;
    let mut carry: u32 = 0;

    for (position, symbol) in input.chars().enumerate() {
        let index = value_of(symbol).ok_or(DecodeError::UnknownSymbol { symbol, position })?;

        shift -= BITS_PER_SYMBOL as i32;

        match shift.cmp(&0) {
            Ordering::Greater => {
                carry |= index << shift.unsigned_abs();
            }
            Ordering::Less => {
                out.push(low_byte(carry | (index >> shift.unsigned_abs())));
                shift += 8;
                carry = (index << shift.unsigned_abs()) & 0xFF;
            }
            Ordering::Equal => {
                out.push(low_byte(carry | index));
                shift = 8;
                carry = 0;
            }
        }
    }

    Ok(out)
}

fn symbol(index: u32) -> char {
    char::from(ALPHABET[(index & 0x1F) as usize])
}

fn value_of(symbol: char) -> Option<u32> {
    let ascii = u8::try_from(symbol).ok().filter(u8::is_ascii)?;
    match SYMBOL_VALUES[ascii as usize] {
        INVALID => None,
        value => Some(u32::from(value)),
    }
}

fn low_byte(value: u32) -> u8 {
    (value & 0xFF) as u8
}
