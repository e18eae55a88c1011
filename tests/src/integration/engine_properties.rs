//! # Engine Property Tests
//!
//! Exercises the cipher invariants over generated input:
//!
//! 1. **Bijection**: every key is a permutation; encode/decode invert
//! 2. **Round trip**: `decrypt(encrypt(s)) == s` for arbitrary strings
//! 3. **Case preservation**: letter case survives both directions
//! 4. **Non-letter identity**: everything outside `a-z`/`A-Z` is untouched
//! 5. **Name substitution**: pass-through identity and directionality

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use keymask_engine::{
        NameDictionary, NameDirection, SubstitutionCipher, SubstitutionKey, ALPHABET_LEN,
    };

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn engine(seed: u64) -> SubstitutionCipher {
        SubstitutionCipher::with_seed(seed, NameDictionary::with_default_names())
            .expect("seeded engine construction should not fail")
    }

    /// A key where 'a' maps to 'q': rotation by 16, so the whole table is a
    /// known, easily checked bijection.
    fn known_key() -> SubstitutionKey {
        let mut table = [0u8; ALPHABET_LEN];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = ((i + 16) % ALPHABET_LEN) as u8;
        }
        SubstitutionKey::from_permutation(&table).expect("rotation is a valid permutation")
    }

    // =============================================================================
    // PROPERTY TESTS: LETTER CIPHER
    // =============================================================================

    proptest! {
        #[test]
        fn prop_round_trip_any_string(seed in any::<u64>(), text in ".*") {
            let cipher = engine(seed);
            prop_assert_eq!(cipher.decrypt(&cipher.encrypt(&text)), text.clone());
            prop_assert_eq!(cipher.encrypt(&cipher.decrypt(&text)), text);
        }

        #[test]
        fn prop_key_is_bijective(seed in any::<u64>()) {
            let cipher = engine(seed);
            let alphabet: String = ('a'..='z').collect();
            let image = cipher.encrypt(&alphabet);

            let mut seen = [false; ALPHABET_LEN];
            for c in image.chars() {
                prop_assert!(c.is_ascii_lowercase());
                let index = (c as u8 - b'a') as usize;
                prop_assert!(!seen[index], "two letters share image {}", c);
                seen[index] = true;
            }
        }

        #[test]
        fn prop_case_preserved(seed in any::<u64>(), text in "[a-zA-Z]{0,64}") {
            let cipher = engine(seed);
            let encrypted = cipher.encrypt(&text);
            for (orig, enc) in text.chars().zip(encrypted.chars()) {
                prop_assert_eq!(orig.is_ascii_uppercase(), enc.is_ascii_uppercase());
                prop_assert_eq!(orig.is_ascii_lowercase(), enc.is_ascii_lowercase());
            }
        }

        #[test]
        fn prop_non_letters_are_identity(seed in any::<u64>(), text in "[0-9 \\.,;:!\\?'\"\\-]{0,64}") {
            let cipher = engine(seed);
            prop_assert_eq!(cipher.encrypt(&text), text.clone());
            prop_assert_eq!(cipher.decrypt(&text), text);
        }

        #[test]
        fn prop_length_preserved(seed in any::<u64>(), text in ".*") {
            let cipher = engine(seed);
            prop_assert_eq!(cipher.encrypt(&text).chars().count(), text.chars().count());
        }
    }

    // =============================================================================
    // PROPERTY TESTS: NAME SUBSTITUTION
    // =============================================================================

    proptest! {
        #[test]
        fn prop_substitution_identity_without_dictionary_tokens(
            text in "[0-9xyz \\.,!]{0,64}"
        ) {
            // x/y/z fragments never form dictionary tokens
            let cipher = engine(7);
            prop_assert_eq!(
                cipher.substitute_names(&text, NameDirection::Forward),
                text.clone()
            );
            prop_assert_eq!(
                cipher.substitute_names(&text, NameDirection::Reverse),
                text
            );
        }

        #[test]
        fn prop_directionality_inverse_over_dictionary_domain(
            indices in proptest::collection::vec(0usize..9, 1..8)
        ) {
            let canonical = ["alice", "bob", "carol", "dave", "eve", "mallory", "peggy", "trent", "victor"];
            let text = indices
                .iter()
                .map(|&i| canonical[i])
                .collect::<Vec<_>>()
                .join(" ");

            let cipher = engine(7);
            let masked = cipher.substitute_names(&text, NameDirection::Reverse);
            prop_assert_eq!(cipher.substitute_names(&masked, NameDirection::Forward), text);
        }
    }

    // =============================================================================
    // SCENARIO TESTS
    // =============================================================================

    /// Known-key scenario: with 'a' -> 'q', the whole phrase transforms
    /// predictably and the round trip restores it.
    #[test]
    fn test_known_key_scenario() {
        let cipher = SubstitutionCipher::from_parts(known_key(), NameDictionary::empty());

        assert_eq!(cipher.encrypt("a"), "q");
        let encrypted = cipher.encrypt("Attack at dawn!");
        assert_eq!(encrypted, "Qjjqsa qj tqmd!");
        assert_eq!(cipher.decrypt(&encrypted), "Attack at dawn!");
    }

    #[test]
    fn test_full_decrypt_equals_decrypt_plus_forward_names() {
        let cipher = engine(1234);
        let ciphertext = cipher.encrypt("tempest called AURORA twice");

        let manual = cipher.substitute_names(&cipher.decrypt(&ciphertext), NameDirection::Forward);
        assert_eq!(cipher.full_decrypt(&ciphertext), manual);
        assert_eq!(manual, "trent called ALICE twice");
    }
}
