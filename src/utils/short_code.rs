use nanoid::nanoid;

/// Digits and letters without the look-alikes 0/O/o and 1/I/l
pub const ALPHABET: [char; 56] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'i', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub const CODE_LENGTH: usize = 8;

// Codes identify links, they are not secrets
fn random_bytes(size: usize) -> Vec<u8> {
    (0..size).map(|_| rand::random::<u8>()).collect()
}

/// Generate a random short code. Uniqueness is checked by whoever stores it.
pub fn generate_short_code() -> String {
    nanoid!(CODE_LENGTH, &ALPHABET, random_bytes)
}

pub fn is_valid_short_code(code: &str) -> bool {
    code.chars().count() == CODE_LENGTH && code.chars().all(|c| ALPHABET.contains(&c))
}

fn join(base: &str, prefix: &str, code: &str) -> String {
    format!("{}/{}/{}", base.trim_end_matches('/'), prefix, code)
}

/// Short link that forwards a scan, e.g. `https://qrg.app/r/Ab3dEf7h`
pub fn redirect_url(base: &str, code: &str) -> String {
    join(base, "r", code)
}

/// Hosted landing page of a code
pub fn landing_url(base: &str, code: &str) -> String {
    join(base, "c", code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn alphabet_has_no_ambiguous_glyphs() {
        let unique: HashSet<_> = ALPHABET.iter().collect();
        assert_eq!(unique.len(), 56);
        for c in ['0', '1', 'I', 'O', 'l', 'o'] {
            assert!(!ALPHABET.contains(&c));
        }
        let joined: String = ALPHABET.iter().collect();
        assert_eq!(
            joined,
            "23456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnpqrstuvwxyz"
        );
    }

    #[test]
    fn generated_codes_are_always_valid() {
        for _ in 0..10_000 {
            let code = generate_short_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(is_valid_short_code(&code), "invalid code {}", code);
        }
    }

    #[test]
    fn generated_codes_vary() {
        let codes: HashSet<_> = (0..100).map(|_| generate_short_code()).collect();
        assert!(codes.len() > 90);
    }

    #[test]
    fn every_symbol_gets_drawn() {
        let mut seen = HashSet::new();
        for _ in 0..2_000 {
            seen.extend(generate_short_code().chars());
        }
        assert_eq!(seen.len(), ALPHABET.len());
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(!is_valid_short_code(""));
        assert!(!is_valid_short_code("Ab3dEf7"));
        assert!(!is_valid_short_code("Ab3dEf7hJ"));
    }

    #[test]
    fn rejects_ambiguous_or_foreign_characters() {
        assert!(is_valid_short_code("Ab3dEf7h"));
        for bad in ["Ab3dEf70", "Ab3dEf71", "Ab3dEf7I", "Ab3dEf7O", "Ab3dEf7l", "Ab3dEf7o"] {
            assert!(!is_valid_short_code(bad), "{} should be rejected", bad);
        }
        assert!(!is_valid_short_code("Ab3d-f7h"));
        // eight chars but more than eight bytes
        assert!(!is_valid_short_code("Ab3dEf7é"));
    }

    #[test]
    fn builds_links() {
        assert_eq!(
            redirect_url("https://qrg.app/", "Ab3dEf7h"),
            "https://qrg.app/r/Ab3dEf7h"
        );
        assert_eq!(
            landing_url("http://localhost:8080", "Ab3dEf7h"),
            "http://localhost:8080/c/Ab3dEf7h"
        );
    }
}
