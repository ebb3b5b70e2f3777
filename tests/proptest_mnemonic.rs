use proptest::prelude::*;

use rust_mnemonic::binary::{bits_to_bytes, bytes_to_bits};
use rust_mnemonic::checksum::checksum_bits;
use rust_mnemonic::{Bip39Error, Mnemonic, Wordlist, WORD_BIT_LEN};

fn entropy_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::sample::select(vec![16usize, 20, 24, 28, 32])
        .prop_flat_map(|len| prop::collection::vec(any::<u8>(), len))
}

/// Turn a packed bit stream back into words.
fn words_from_bits(bits: &str, wordlist: &Wordlist) -> String {
    bits.as_bytes()
        .chunks(WORD_BIT_LEN)
        .map(|group| {
            let index = u16::from_str_radix(std::str::from_utf8(group).unwrap(), 2).unwrap();
            wordlist.lookup_word(index)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn flip(bits: &str, i: usize) -> String {
    bits.char_indices()
        .map(|(j, c)| if j == i { if c == '0' { '1' } else { '0' } } else { c })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn entropy_mnemonic_roundtrip(entropy in entropy_strategy()) {
        let wl = Wordlist::english();
        let m = Mnemonic::from_entropy(&entropy, &wl).unwrap();
        prop_assert_eq!(m.word_count(), (entropy.len() * 8 + entropy.len() / 4) / 11);
        prop_assert_eq!(m.to_entropy(&wl).unwrap(), entropy);
    }

    #[test]
    fn single_bit_flip_is_caught_by_checksum(
        entropy in entropy_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let wl = Wordlist::english();
        let entropy_bits = bytes_to_bits(&entropy);
        let checksum = checksum_bits(&entropy);
        let stream = format!("{}{}", entropy_bits, checksum);

        let i = pick.index(stream.len());
        let flipped = flip(&stream, i);
        let tampered = Mnemonic::from_text(&words_from_bits(&flipped, &wl));

        let flipped_entropy = bits_to_bytes(&flipped[..entropy_bits.len()]).unwrap();
        let embedded = &flipped[entropy_bits.len()..];
        if checksum_bits(&flipped_entropy) == embedded {
            // entropy flip whose digest prefix happens to collide
            prop_assert!(i < entropy_bits.len());
            prop_assert_eq!(tampered.to_entropy(&wl).unwrap(), flipped_entropy);
        } else {
            let result = tampered.validate(&wl);
            prop_assert!(
                matches!(result, Err(Bip39Error::ChecksumMismatch)),
                "unexpected {:?}",
                result
            );
        }
    }

    #[test]
    fn checksum_bit_flip_always_fails(
        entropy in entropy_strategy(),
        pick in any::<prop::sample::Index>(),
    ) {
        let wl = Wordlist::english();
        let entropy_bits = bytes_to_bits(&entropy);
        let checksum = checksum_bits(&entropy);
        let stream = format!("{}{}", entropy_bits, checksum);

        let i = entropy_bits.len() + pick.index(checksum.len());
        let tampered = Mnemonic::from_text(&words_from_bits(&flip(&stream, i), &wl));
        let result = tampered.validate(&wl);
        prop_assert!(
            matches!(result, Err(Bip39Error::ChecksumMismatch)),
            "unexpected {:?}",
            result
        );
    }

    #[test]
    fn word_count_gate(
        count in (0usize..40).prop_filter("non-standard", |c| ![12, 15, 18, 21, 24].contains(c)),
    ) {
        let wl = Wordlist::english();
        let text = vec!["abandon"; count].join(" ");
        let result = Mnemonic::from_text(&text).validate(&wl);
        // zero words still splits into one empty token
        let expected = count.max(1);
        prop_assert!(
            matches!(result, Err(Bip39Error::InvalidWordsCount(c)) if c == expected),
            "unexpected {:?}",
            result
        );
    }

    #[test]
    fn unknown_word_rejected(entropy in entropy_strategy(), pick in any::<prop::sample::Index>()) {
        let wl = Wordlist::english();
        let m = Mnemonic::from_entropy(&entropy, &wl).unwrap();
        let mut words: Vec<String> = m.words().map(|w| w.to_string()).collect();
        let pos = pick.index(words.len());
        words[pos] = "notinthelist".to_string();
        let result = Mnemonic::from_text(&words.join(" ")).to_entropy(&wl);
        prop_assert!(
            matches!(result, Err(Bip39Error::InvalidWord { position, .. }) if position == pos),
            "unexpected {:?}",
            result
        );
    }

    #[test]
    fn seed_is_deterministic(entropy in entropy_strategy(), passphrase in "[a-zA-Z0-9]{0,16}") {
        let wl = Wordlist::english();
        let m = Mnemonic::from_entropy(&entropy, &wl).unwrap();
        let a = m.generate_seed(&passphrase, &wl).unwrap();
        let b = m.generate_seed(&passphrase, &wl).unwrap();
        prop_assert_eq!(a, b);
        let other = m.generate_seed(&format!("{}!", passphrase), &wl).unwrap();
        prop_assert_ne!(a, other);
    }
}
