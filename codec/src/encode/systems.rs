use subtle_encoding::hex;

use super::error::EncodeError;

pub fn hex_encode<B: AsRef<[u8]>>(bytes: B) -> String {
    // hex::encode only emits [0-9a-f]
    hex::encode(bytes).into_iter().map(char::from).collect()
}

/// Accepts upper and lower case digits.
pub fn hex_decode<B: AsRef<[u8]>>(input: B) -> Result<Vec<u8>, EncodeError> {
    hex::decode(input.as_ref().to_ascii_lowercase()).map_err(EncodeError::hex_decode)
}

#[cfg(test)]
pub mod systems_test {
    use super::{hex_decode, hex_encode};

    #[test]
    pub fn hex_works() {
        assert_eq!(hex_encode([0x00, 0xab, 0x7f]), "00ab7f");
        assert_eq!(hex_decode("00AB7f").unwrap(), vec![0x00, 0xab, 0x7f]);
    }

    #[test]
    pub fn hex_decode_rejected() {
        assert!(hex_decode("abc").is_err());
        assert!(hex_decode("zz").is_err());
    }
}
