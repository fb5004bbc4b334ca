//! Booking reference codes
//!
//! Format: `<PREFIX>-<YYYY>-<9 uppercase alphanumerics>`, e.g.
//! `TC-BKG-2024-7QX2M0KDA`.

use chrono::{DateTime, Datelike, Utc};
use rand::distributions::Uniform;
use rand::Rng;

pub const DEFAULT_REFERENCE_PREFIX: &str = "TC-BKG";

const SUFFIX_LEN: usize = 9;
const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Generate a reference for a booking created at `now`.
pub fn generate_reference<R: Rng + ?Sized>(prefix: &str, now: DateTime<Utc>, rng: &mut R) -> String {
    let dist = Uniform::from(0..ALPHABET.len());
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.sample(dist)] as char)
        .collect();
    format!("{}-{}-{}", prefix, now.year(), suffix)
}

/// Check whether `s` looks like a reference produced with `prefix`.
pub fn is_reference(prefix: &str, s: &str) -> bool {
    let Some(rest) = s.strip_prefix(prefix).and_then(|r| r.strip_prefix('-')) else {
        return false;
    };
    let mut parts = rest.splitn(2, '-');
    let (Some(year), Some(suffix)) = (parts.next(), parts.next()) else {
        return false;
    };
    year.len() == 4
        && year.bytes().all(|b| b.is_ascii_digit())
        && suffix.len() == SUFFIX_LEN
        && suffix.bytes().all(|b| ALPHABET.contains(&b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn reference_has_expected_shape() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        let reference = generate_reference(DEFAULT_REFERENCE_PREFIX, now, &mut rng);

        assert!(reference.starts_with("TC-BKG-2024-"));
        assert_eq!(reference.len(), "TC-BKG-2024-".len() + SUFFIX_LEN);
        assert!(is_reference(DEFAULT_REFERENCE_PREFIX, &reference));
    }

    #[test]
    fn references_do_not_repeat() {
        let mut rng = rand::thread_rng();
        let now = Utc::now();
        let refs: HashSet<_> = (0..1000)
            .map(|_| generate_reference(DEFAULT_REFERENCE_PREFIX, now, &mut rng))
            .collect();
        assert_eq!(refs.len(), 1000);
    }

    #[test]
    fn rejects_foreign_codes() {
        assert!(!is_reference(DEFAULT_REFERENCE_PREFIX, "TC-CRG-2024-ABCDEFGHI"));
        assert!(!is_reference(DEFAULT_REFERENCE_PREFIX, "TC-BKG-24-ABCDEFGHI"));
        assert!(!is_reference(DEFAULT_REFERENCE_PREFIX, "TC-BKG-2024-abcdefghi"));
        assert!(!is_reference(DEFAULT_REFERENCE_PREFIX, "TC-BKG-2024-SHORT"));
        assert!(!is_reference(DEFAULT_REFERENCE_PREFIX, "KCA 123A"));
    }
}
