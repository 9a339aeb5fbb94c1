use flex_error::define_error;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

pub const SHA256: i32 = 1;
pub const RIPEMD160: i32 = 2;

pub fn do_hash(hash_op: i32, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
    match hash_op {
        SHA256 => {
            let mut hasher = Sha256::new();
            hasher.update(data);
            Ok(hasher.finalize().to_vec())
        }
        RIPEMD160 => {
            let mut hasher = Ripemd160::new();
            hasher.update(data);
            Ok(hasher.finalize().to_vec())
        }
        _ => Err(CryptoError::hash_op_not_exist(hash_op)),
    }
}

/// RIPEMD160(SHA256(data)), the 20-byte account address of a secp256k1 public key.
pub fn hash160(data: &[u8]) -> Result<Vec<u8>, CryptoError> {
    do_hash(RIPEMD160, &do_hash(SHA256, data)?)
}

define_error! {
    CryptoError {
        HashOpNotExist
            { hash_op: i32 }
            |e| { format!("hash op {} is not exist", e.hash_op) },
    }
}

#[cfg(test)]
pub mod crypto_test {
    use crate::encode::systems::hex_encode;

    use super::{do_hash, hash160, RIPEMD160, SHA256};

    #[test]
    pub fn do_hash_works() {
        let sha = do_hash(SHA256, b"").unwrap();
        assert_eq!(hex_encode(sha), "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855");

        let ripe = do_hash(RIPEMD160, b"").unwrap();
        assert_eq!(hex_encode(ripe), "9c1185a5c5e9fc54612808977ee8f548b2258d31");

        assert!(do_hash(3, b"").is_err());
    }

    #[test]
    pub fn hash160_works() {
        let pubkey = [
            0x02, 0x79, 0xbe, 0x66, 0x7e, 0xf9, 0xdc, 0xbb, 0xac, 0x55, 0xa0, 0x62, 0x95, 0xce, 0x87, 0x0b, 0x07,
            0x02, 0x9b, 0xfc, 0xdb, 0x2d, 0xce, 0x28, 0xd9, 0x59, 0xf2, 0x81, 0x5b, 0x16, 0xf8, 0x17, 0x98,
        ];
        assert_eq!(hex_encode(hash160(&pubkey).unwrap()), "751e76e8199196d454941c45d1b3a323f1433bd6");
    }
}
