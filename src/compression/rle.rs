use crate::error::{Error, Result};

/// Result of a run-length encode: the encoded text and the percentage of the
/// input size saved.
#[derive(Debug, Clone, PartialEq)]
pub struct RleEncoded {
    pub encoded: String,
    pub compression_ratio: f64,
}

/// Compresses text with run-length encoding.
///
/// Maximal runs of identical consecutive symbols are scanned left to right.
/// A run of length `n` of symbol `c` is emitted as `c` alone when `n == 1`,
/// otherwise as the decimal count immediately followed by the symbol.
///
/// The compression ratio is `(1 - encoded_len / input_len) * 100`, counting
/// characters; an empty input encodes to an empty string with ratio `0.0`.
///
/// Lossless round-tripping requires that no run of length 1 starts with a
/// decimal digit symbol, since [`decode`] reads leading digits as a count.
/// Text that may contain digits should use a different codec.
///
/// # Example
///
/// ```
/// use algoviz::compression::rle;
///
/// let out = rle::encode("AAAABBBCCDAABBB");
/// assert_eq!(out.encoded, "4A3B2CD2A3B");
/// assert!(out.compression_ratio > 0.0);
/// ```
pub fn encode(input: &str) -> RleEncoded {
    let mut encoded = String::new();
    let mut chars = input.chars().peekable();
    let mut input_len = 0usize;

    while let Some(symbol) = chars.next() {
        let mut run = 1usize;
        while chars.peek() == Some(&symbol) {
            chars.next();
            run += 1;
        }
        input_len += run;
        if run > 1 {
            encoded.push_str(&run.to_string());
        }
        encoded.push(symbol);
    }

    let compression_ratio = if input_len == 0 {
        0.0
    } else {
        let encoded_len = encoded.chars().count();
        (1.0 - encoded_len as f64 / input_len as f64) * 100.0
    };

    RleEncoded {
        encoded,
        compression_ratio,
    }
}

/// Decompresses run-length encoded text produced by [`encode`].
///
/// Leading decimal digits accumulate into a repeat count (absent digits mean
/// a count of 1); the single following character is the symbol to repeat.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if a count has no following symbol or a
/// count of zero is given.
///
/// # Example
///
/// ```
/// use algoviz::compression::rle;
///
/// assert_eq!(rle::decode("4A3B2CD2A3B").unwrap(), "AAAABBBCCDAABBB");
/// assert!(rle::decode("12").is_err());
/// ```
pub fn decode(encoded: &str) -> Result<String> {
    let mut output = String::new();
    let mut chars = encoded.chars().peekable();

    while chars.peek().is_some() {
        let mut count = 0usize;
        let mut has_count = false;
        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            chars.next();
            count = count
                .checked_mul(10)
                .and_then(|c| c.checked_add(digit as usize))
                .ok_or_else(|| Error::invalid_input("run count overflows"))?;
            has_count = true;
        }
        let symbol = chars
            .next()
            .ok_or_else(|| Error::invalid_input("run count without a symbol"))?;
        if has_count && count == 0 {
            return Err(Error::invalid_input("run count of zero"));
        }
        let count = if has_count { count } else { 1 };
        for _ in 0..count {
            output.push(symbol);
        }
    }

    Ok(output)
}
