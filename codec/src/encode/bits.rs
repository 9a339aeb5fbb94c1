use log::trace;

use super::error::EncodeError;

/// Regroups `data`, a big-endian bitstream of `from_bits`-wide symbols, into
/// `to_bits`-wide symbols.
///
/// With `pad` set, leftover bits are left-aligned into one final zero-padded
/// symbol. Without it, leftover bits must be fewer than `from_bits` and all zero.
pub fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>, EncodeError> {
    for bits in [from_bits, to_bits] {
        if !(1..=8).contains(&bits) {
            return Err(EncodeError::invalid_bit_width(bits));
        }
    }

    let max_value: u32 = (1 << to_bits) - 1;
    let max_acc: u32 = (1 << (from_bits + to_bits - 1)) - 1;

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);

    for &value in data {
        if u32::from(value) >> from_bits != 0 {
            return Err(EncodeError::invalid_input_width(value, from_bits));
        }
        acc = ((acc << from_bits) | u32::from(value)) & max_acc;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            ret.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            ret.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits || (acc << (to_bits - bits)) & max_value != 0 {
        trace!("rejecting {} leftover bits while converting {} -> {}", bits, from_bits, to_bits);
        return Err(EncodeError::invalid_padding(bits));
    }

    Ok(ret)
}

#[cfg(test)]
pub mod bits_test {
    use super::convert_bits;
    use crate::encode::error::EncodeErrorDetail;

    #[test]
    pub fn bytes_to_base32_works() {
        assert_eq!(convert_bits(&[0xff], 8, 5, true).unwrap(), vec![31, 28]);
        assert_eq!(convert_bits(&[0xff, 0xff], 8, 5, true).unwrap(), vec![31, 31, 31, 16]);
        assert_eq!(convert_bits(&[], 8, 5, true).unwrap(), Vec::<u8>::new());
    }

    #[test]
    pub fn base32_to_bytes_works() {
        assert_eq!(convert_bits(&[31; 8], 5, 8, false).unwrap(), vec![0xff; 5]);
        assert_eq!(convert_bits(&[0, 0], 5, 8, false).unwrap(), vec![0]);
        assert_eq!(convert_bits(&[31, 28], 5, 8, false).unwrap(), vec![0xff]);
    }

    #[test]
    pub fn address_bytes_round_trip_works() {
        let raw: Vec<u8> = (0u8..20).map(|i| i.wrapping_mul(37).wrapping_add(11)).collect();
        let base32 = convert_bits(&raw, 8, 5, true).unwrap();
        assert_eq!(base32.len(), 32);
        assert!(base32.iter().all(|v| *v < 32));

        assert_eq!(convert_bits(&base32, 5, 8, false).unwrap(), raw);
    }

    #[test]
    pub fn nonzero_padding_rejected() {
        let err = convert_bits(&[31, 31], 5, 8, false).unwrap_err();
        assert!(matches!(err.detail(), EncodeErrorDetail::InvalidPadding(_)));

        let err = convert_bits(&[31, 29], 5, 8, false).unwrap_err();
        assert!(matches!(err.detail(), EncodeErrorDetail::InvalidPadding(_)));
    }

    #[test]
    pub fn whole_leftover_symbol_rejected() {
        // 9 * 5 = 45 bits leaves 5 unconsumed bits, a full input symbol
        let err = convert_bits(&[0; 9], 5, 8, false).unwrap_err();
        assert!(matches!(err.detail(), EncodeErrorDetail::InvalidPadding(_)));

        let err = convert_bits(&[0], 5, 8, false).unwrap_err();
        assert!(matches!(err.detail(), EncodeErrorDetail::InvalidPadding(_)));
    }

    #[test]
    pub fn out_of_range_symbol_rejected() {
        let err = convert_bits(&[3, 32], 5, 8, true).unwrap_err();
        match err.detail() {
            EncodeErrorDetail::InvalidInputWidth(e) => {
                assert_eq!(e.value, 32);
                assert_eq!(e.bits, 5);
            }
            _ => panic!("unexpected error: {}", err),
        }
    }

    #[test]
    pub fn invalid_bit_width_rejected() {
        assert!(convert_bits(&[1], 0, 5, true).is_err());
        assert!(convert_bits(&[1], 8, 9, true).is_err());
    }

    #[test]
    pub fn arbitrary_widths_works() {
        // 0b101 0b011 -> 0b10 0b10 0b11
        assert_eq!(convert_bits(&[0b101, 0b011], 3, 2, false).unwrap(), vec![0b10, 0b10, 0b11]);
        assert_eq!(convert_bits(&[1, 0, 1, 1, 0, 0, 1, 0], 1, 8, false).unwrap(), vec![0b1011_0010]);
        assert_eq!(convert_bits(&[0b1011_0010], 8, 1, false).unwrap(), vec![1, 0, 1, 1, 0, 0, 1, 0]);
    }
}
