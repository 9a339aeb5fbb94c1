use codec::crypto::hash160;
use codec::encode::{bech32, bits::convert_bits, systems};
use log::debug;

use crate::config::KeyringConfig;
use crate::error::Error;

const HEX_ADDRESS_LENGTH: usize = 40;

/// True for `0x`-prefixed input or a bare 40-digit hex string.
pub fn is_hex_address(address: &str) -> bool {
    address.starts_with("0x")
        || (address.len() == HEX_ADDRESS_LENGTH && address.chars().all(|c| c.is_ascii_hexdigit()))
}

pub fn hex_to_bech32(hex_address: &str, prefix: &str) -> Result<String, Error> {
    let lower = hex_address.to_ascii_lowercase();
    let clean = lower.strip_prefix("0x").unwrap_or(&lower);
    if clean.len() != HEX_ADDRESS_LENGTH {
        return Err(Error::invalid_hex_address(hex_address.to_string()));
    }

    let raw = systems::hex_decode(clean).map_err(|e| Error::hex_address_decode(hex_address.to_string(), e))?;

    encode_bech32_address(prefix, &raw)
}

/// Re-encodes the payload of `address` under `prefix`.
pub fn bech32_to_bech32(address: &str, prefix: &str) -> Result<String, Error> {
    let (_, data) = bech32::decode(address).map_err(|e| Error::invalid_bech32_address(address.to_string(), e))?;

    bech32::encode(prefix, &data).map_err(|e| Error::address_bech32_encode(prefix.to_string(), e))
}

pub fn convert_address(address: &str, prefix: &str) -> Result<String, Error> {
    let address = address.trim();
    let prefix = prefix.trim();
    debug!("converting {} to prefix {}", address, prefix);

    if is_hex_address(address) {
        hex_to_bech32(address, prefix)
    } else {
        bech32_to_bech32(address, prefix)
    }
}

/// [`convert_address`] under the prefix from `prefix`, or the config's `default_prefix` when absent.
pub fn convert_address_with_config(
    address: &str,
    prefix: Option<&str>,
    config: &KeyringConfig,
) -> Result<String, Error> {
    convert_address(address, prefix.unwrap_or(config.default_prefix.as_str()))
}

/// `0x`-prefixed lowercase hex of the bytes carried by a bech32 address.
pub fn bech32_to_hex(address: &str) -> Result<String, Error> {
    let address_bytes = decode_bech32_address(address)?;

    Ok(format!("0x{}", systems::hex_encode(address_bytes)))
}

pub fn decode_bech32_address(address: &str) -> Result<Vec<u8>, Error> {
    let (_, data) = bech32::decode(address).map_err(|e| Error::invalid_bech32_address(address.to_string(), e))?;

    convert_bits(&data, 5, 8, false).map_err(|e| Error::address_bits_convert(address.to_string(), e))
}

pub fn encode_bech32_address(address_prefix: &str, address_bytes: &[u8]) -> Result<String, Error> {
    bech32::encode_bytes(address_prefix, address_bytes)
        .map_err(|e| Error::address_bech32_encode(address_prefix.to_string(), e))
}

/// Account address of a compressed secp256k1 public key: bech32 of RIPEMD160(SHA256(pubkey)).
pub fn pubkey_to_bech32(public_key: &[u8], hrp: &str) -> Result<String, Error> {
    let address_bytes = hash160(public_key).map_err(Error::public_key_hash)?;

    encode_bech32_address(hrp, &address_bytes)
}
