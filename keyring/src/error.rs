use codec::crypto::CryptoError;
use codec::encode::error::EncodeError;
use codec::file::error::FileError;
use flex_error::{define_error, TraceError};
use serde_json::Error as SjError;

define_error! {
    Error {
        InvalidHexAddress
            { address: String }
            |e| { format!("hex address must be 20 bytes (40 hex chars): {}", e.address) },
        HexAddressDecode
            { address: String }
            [ TraceError<EncodeError> ]
            |e| { format!("failed to decode hex address: {}", e.address) },
        InvalidBech32Address
            { address: String }
            [ TraceError<EncodeError> ]
            |e| { format!("invalid bech32 address: {}", e.address) },
        AddressBech32Encode
            { prefix: String }
            [ TraceError<EncodeError> ]
            |e| { format!("failed to encode address with prefix: {}", e.prefix) },
        AddressBitsConvert
            { address: String }
            [ TraceError<EncodeError> ]
            |e| { format!("failed to convert address bits: {}", e.address) },
        PublicKeyHash
            [ TraceError<CryptoError> ]
            |_| { "failed to hash public key" },
        UnsupportedVm
            { vm: String }
            |e| { format!("unsupported vm: {}", e.vm) },
        UnsupportedDaLayer
            { da: String }
            |e| { format!("unsupported da layer: {}", e.da) },
        MnemonicsRequireOutput
            |_| { "including mnemonics requires an output file to avoid leaking secrets to stdout" },
        MissingRoleKey
            { role: String }
            |e| { format!("no key supplied for role: {}", e.role) },
        LoadKeyringConfig
            [ TraceError<FileError> ]
            |_| { "load keyring config error" },
        SerdeJson
            [ TraceError<SjError> ]
            |_| { "serde json error" },
    }
}
