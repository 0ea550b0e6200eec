//! Property tests for the z-base32 codec.

use opaque_zbase32::{decode, decoded_len, encode, encoded_len, ALPHABET};
use proptest::prelude::*;

proptest! {
    #[test]
    fn decode_inverts_encode(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = encode(&bytes);
        prop_assert_eq!(decode(&encoded).unwrap(), bytes);
    }

    #[test]
    fn encoded_length_rounds_up(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let encoded = encode(&bytes);
        prop_assert_eq!(encoded.len(), encoded_len(bytes.len()));
        prop_assert_eq!(decoded_len(encoded.len()), bytes.len());
    }

    #[test]
    fn encoded_text_stays_in_alphabet(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let encoded = encode(&bytes);
        prop_assert!(encoded.bytes().all(|b| ALPHABET.contains(&b)));
    }

    #[test]
    fn any_alphabet_string_decodes(symbols in "[ybndrfg8ejkmcpqxot1uwisza345h769]{0,64}") {
        let decoded = decode(&symbols).unwrap();
        prop_assert_eq!(decoded.len(), decoded_len(symbols.len()));
    }
}
