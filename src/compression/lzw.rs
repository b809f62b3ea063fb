use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};

/// Result of an LZW encode.
#[derive(Debug, Clone, PartialEq)]
pub struct LzwEncoded {
    /// Emitted phrase codes, in order.
    pub codes: Vec<u32>,
    /// Final phrase dictionary: the 256 seed entries plus one entry per
    /// phrase inserted during the scan. Decoding does not need it — the
    /// decoder regrows its own — but callers can display its growth.
    pub dictionary: HashMap<Vec<u8>, u32>,
    /// Percentage saved against 8 bits per input byte, with every code
    /// counted at the uniform width `ceil(log2(dictionary.len()))`.
    pub compression_ratio: f64,
}

/// Compresses bytes with LZW.
///
/// The dictionary is seeded with the 256 single-byte phrases under codes
/// 0–255. The current phrase is greedily extended while `phrase + next` is
/// still a dictionary entry; on the first miss the phrase's code is
/// emitted, `phrase + next` is inserted under the next free code, and the
/// phrase restarts at `next`. The final phrase is flushed after the scan.
///
/// The decoder rebuilds the same dictionary from the codes alone, so only
/// [`LzwEncoded::codes`] needs to travel.
///
/// # Example
///
/// ```
/// use algoviz::compression::lzw;
///
/// let out = lzw::encode(b"TOBEORNOTTOBEORTOBEORNOT");
/// assert!(out.codes.len() < 24);
/// assert_eq!(lzw::decode(&out.codes).unwrap(), b"TOBEORNOTTOBEORTOBEORNOT");
/// ```
pub fn encode(input: &[u8]) -> LzwEncoded {
    let mut dict: HashMap<Vec<u8>, u32> = HashMap::with_capacity(512);
    for byte in 0..=255u8 {
        dict.insert(vec![byte], byte as u32);
    }
    let mut next_code = 256u32;

    let mut codes = Vec::new();
    let mut phrase: Vec<u8> = Vec::new();
    for &byte in input {
        phrase.push(byte);
        if !dict.contains_key(&phrase) {
            let new_entry = phrase.clone();
            phrase.pop();
            codes.push(dict[&phrase]);
            dict.insert(new_entry, next_code);
            next_code += 1;
            phrase.clear();
            phrase.push(byte);
        }
    }
    if !phrase.is_empty() {
        codes.push(dict[&phrase]);
    }

    let compression_ratio = if input.is_empty() {
        0.0
    } else {
        let bits_per_code = bits_for(dict.len());
        let compressed_bits = codes.len() * bits_per_code;
        (1.0 - compressed_bits as f64 / (input.len() as f64 * 8.0)) * 100.0
    };
    debug!(
        "lzw: {} bytes -> {} codes, dictionary {}",
        input.len(),
        codes.len(),
        dict.len()
    );

    LzwEncoded {
        codes,
        dictionary: dict,
        compression_ratio,
    }
}

/// Uniform code width for a dictionary of `size` entries.
fn bits_for(size: usize) -> usize {
    let mut bits = 0;
    while (1usize << bits) < size {
        bits += 1;
    }
    bits
}

/// Decompresses an LZW code sequence produced by [`encode`].
///
/// The dictionary is regrown from the 256 seed entries as codes are read.
/// A code equal to the current dictionary length is the one case where the
/// encoder referenced an entry it had only just created; the entry is then
/// the previous phrase extended by its own first byte.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for any code beyond the dictionary
/// entries reconstructible at that point.
pub fn decode(codes: &[u32]) -> Result<Vec<u8>> {
    let mut dict: Vec<Vec<u8>> = (0..=255u8).map(|byte| vec![byte]).collect();
    let mut output = Vec::new();

    let Some(&first) = codes.first() else {
        return Ok(output);
    };
    let mut phrase = dict
        .get(first as usize)
        .cloned()
        .ok_or_else(|| Error::invalid_input(format!("code {} before any entry", first)))?;
    output.extend_from_slice(&phrase);

    for &code in &codes[1..] {
        let entry = if (code as usize) < dict.len() {
            dict[code as usize].clone()
        } else if code as usize == dict.len() {
            let mut entry = phrase.clone();
            entry.push(phrase[0]);
            entry
        } else {
            return Err(Error::invalid_input(format!(
                "code {} exceeds dictionary of {}",
                code,
                dict.len()
            )));
        };
        output.extend_from_slice(&entry);
        phrase.push(entry[0]);
        dict.push(phrase);
        phrase = entry;
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        let out = encode(b"");
        assert!(out.codes.is_empty());
        assert_eq!(out.compression_ratio, 0.0);
        assert_eq!(decode(&out.codes).unwrap(), b"");
    }

    #[test]
    fn test_single_byte() {
        let out = encode(b"A");
        assert_eq!(out.codes, vec![65]);
        assert_eq!(decode(&out.codes).unwrap(), b"A");
    }

    #[test]
    fn test_round_trip() {
        for input in [
            b"TOBEORNOTTOBEORTOBEORNOT".as_slice(),
            b"abracadabra abracadabra abracadabra",
            b"aaaaaaaaaaaaaaaaaaaaaaaa",
            b"no repeats here!",
        ] {
            let out = encode(input);
            assert_eq!(decode(&out.codes).unwrap(), input);
        }
    }

    #[test]
    fn test_kwkwk_pattern() {
        // "ABABABA" forces the decoder to resolve a code it has not yet
        // inserted: phrase + phrase[0].
        let out = encode(b"ABABABA");
        assert_eq!(decode(&out.codes).unwrap(), b"ABABABA");
    }

    #[test]
    fn test_kwkwk_long() {
        let input: Vec<u8> = b"AB".iter().cycle().take(200).copied().collect();
        let out = encode(&input);
        assert_eq!(decode(&out.codes).unwrap(), input);
    }

    #[test]
    fn test_non_ascii_bytes() {
        let input = "这是一段测试 这是一段测试".as_bytes();
        let out = encode(input);
        assert_eq!(decode(&out.codes).unwrap(), input);
    }

    #[test]
    fn test_repetitive_input_compresses() {
        let input: Vec<u8> = b"the rain in spain ".iter().cycle().take(720).copied().collect();
        let out = encode(&input);
        assert!(out.compression_ratio > 0.0);
        assert!(out.codes.len() < input.len());
    }

    #[test]
    fn test_dictionary_growth() {
        // One insertion per emitted code except the final flush.
        let out = encode(b"TOBEORNOT");
        assert_eq!(out.dictionary.len(), 256 + out.codes.len() - 1);
        assert_eq!(out.dictionary[b"TO".as_slice()], 256);
    }

    #[test]
    fn test_invalid_code_is_error() {
        assert!(decode(&[65, 9999]).is_err());
        assert!(decode(&[300]).is_err());
    }
}
