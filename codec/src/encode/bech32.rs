use log::debug;

use super::bits::convert_bits;
use super::error::EncodeError;

/// Separator between the human-readable prefix and the data part.
pub const SEPARATOR: char = '1';

/// Maximum length of an encoded string, separator and checksum included.
pub const MAX_LENGTH: usize = 90;

pub const CHECKSUM_LENGTH: usize = 6;

pub const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// Reverse of [`CHARSET`], indexed by lowercase ASCII code. -1 marks characters outside the alphabet.
const CHARSET_REV: [i8; 128] = [
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1,
    15, -1, 10, 17, 21, 20, 26, 30,  7,  5, -1, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
    -1, 29, -1, 24, 13, 25,  9,  8, 23, -1, 18, 22, 31, 27, 19, -1,
     1,  0,  3, 16, 11, 28, 12, 14,  6,  4,  2, -1, -1, -1, -1, -1,
];

/// BCH checksum accumulator over GF(32). A valid `hrp_expand(hrp) ++ data ++ checksum`
/// leaves a residue of 1.
pub fn polymod<I>(values: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let mut chk: u32 = 1;
    for value in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ff_ffff) << 5) ^ value;
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// High bits of every prefix character, a zero, then the low five bits of every character.
pub fn hrp_expand(hrp: &str) -> Vec<u32> {
    hrp.chars()
        .map(|c| c as u32 >> 5)
        .chain(std::iter::once(0))
        .chain(hrp.chars().map(|c| c as u32 & 31))
        .collect()
}

pub fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let values = hrp_expand(hrp)
        .into_iter()
        .chain(data.iter().map(|v| u32::from(*v)))
        .chain([0; CHECKSUM_LENGTH]);
    let residue = polymod(values) ^ 1;

    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, symbol) in checksum.iter_mut().enumerate() {
        *symbol = ((residue >> (5 * (5 - i))) & 31) as u8;
    }
    checksum
}

/// `data` must still carry its trailing checksum symbols.
pub fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    let values = hrp_expand(hrp)
        .into_iter()
        .chain(data.iter().map(|v| u32::from(*v)));
    polymod(values) == 1
}

/// Encodes 5-bit `data` under `hrp`. The prefix is used as given, neither validated nor case-folded.
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, EncodeError> {
    if let Some(value) = data.iter().find(|v| **v >> 5 != 0) {
        return Err(EncodeError::invalid_input_width(*value, 5));
    }

    let checksum = create_checksum(hrp, data);

    let mut encoded = String::with_capacity(hrp.len() + 1 + data.len() + CHECKSUM_LENGTH);
    encoded.push_str(hrp);
    encoded.push(SEPARATOR);
    encoded.extend(
        data.iter()
            .chain(checksum.iter())
            .map(|v| CHARSET[*v as usize] as char),
    );

    Ok(encoded)
}

/// Decodes a bech32 string into its lowercase prefix and 5-bit data, checksum stripped.
///
/// Checks run in order and the first failure is returned:
/// printable ASCII, case purity, separator placement and length, alphabet, checksum.
/// The separator is the last `1`, so a prefix may itself contain `1`.
pub fn decode(input: &str) -> Result<(String, Vec<u8>), EncodeError> {
    if let Some((position, character)) = input
        .chars()
        .enumerate()
        .find(|(_, c)| !(33..=126).contains(&(*c as u32)))
    {
        debug!("bech32 rejected: non-printable character at {}", position);
        return Err(EncodeError::invalid_character_set(character, position));
    }

    let lower = input.to_ascii_lowercase();
    if lower != input && input.to_ascii_uppercase() != input {
        return Err(EncodeError::mixed_case());
    }

    let pos = match lower.rfind(SEPARATOR) {
        Some(pos) if pos >= 1 => pos,
        _ => return Err(EncodeError::missing_or_misplaced_separator()),
    };
    if pos + CHECKSUM_LENGTH + 1 > lower.len() {
        return Err(EncodeError::data_too_short(lower.len() - pos - 1));
    }
    if lower.len() > MAX_LENGTH {
        return Err(EncodeError::length_exceeded(lower.len(), MAX_LENGTH));
    }

    let (hrp, data_part) = (&lower[..pos], &lower[pos + 1..]);

    let mut data = Vec::with_capacity(data_part.len());
    for (offset, c) in data_part.bytes().enumerate() {
        let value = CHARSET_REV[c as usize];
        if value < 0 {
            return Err(EncodeError::invalid_character_set(c as char, pos + 1 + offset));
        }
        data.push(value as u8);
    }

    if !verify_checksum(hrp, &data) {
        debug!("bech32 rejected: checksum mismatch for prefix {}", hrp);
        return Err(EncodeError::checksum_mismatch(hrp.to_string()));
    }

    data.truncate(data.len() - CHECKSUM_LENGTH);
    Ok((hrp.to_string(), data))
}

/// Packs raw bytes into 5-bit groups and encodes them under `hrp`.
pub fn encode_bytes(hrp: &str, bytes: &[u8]) -> Result<String, EncodeError> {
    let data = convert_bits(bytes, 8, 5, true)?;
    encode(hrp, &data)
}

/// Inverse of [`encode_bytes`]. Non-zero padding in the data part is rejected.
pub fn decode_bytes(input: &str) -> Result<(String, Vec<u8>), EncodeError> {
    let (hrp, data) = decode(input)?;
    let bytes = convert_bits(&data, 5, 8, false)?;
    Ok((hrp, bytes))
}
