use flex_error::{define_error, TraceError};
use subtle_encoding::Error as HexError;

define_error! {
    EncodeError {
        InvalidCharacterSet
            { character: char, position: usize }
            |e| { format!("invalid character {:?} at position {}", e.character, e.position) },
        MixedCase
            |_| { "mixed-case bech32 string" },
        MissingOrMisplacedSeparator
            |_| { "missing separator or empty human-readable prefix" },
        LengthExceeded
            { length: usize, max: usize }
            |e| { format!("bech32 string length {} exceeds maximum {}", e.length, e.max) },
        DataTooShort
            { length: usize }
            |e| { format!("data part of {} characters is too short for the checksum", e.length) },
        ChecksumMismatch
            { hrp: String }
            |e| { format!("invalid checksum for prefix: {}", e.hrp) },
        InvalidInputWidth
            { value: u8, bits: u32 }
            |e| { format!("value {} does not fit in {} bits", e.value, e.bits) },
        InvalidBitWidth
            { bits: u32 }
            |e| { format!("bit width {} is outside 1..=8", e.bits) },
        InvalidPadding
            { bits: u32 }
            |e| { format!("invalid padding in the trailing {} bits", e.bits) },
        HexDecode
            [ TraceError<HexError> ]
            |_| { "decode hex error" },
    }
}
