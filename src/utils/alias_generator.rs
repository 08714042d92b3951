//! Random alias generation.

use rand::distr::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length of generated aliases.
pub const ALIAS_LENGTH: usize = 6;

/// Generates a random alias of `length` characters drawn uniformly from
/// `[A-Za-z0-9]`.
///
/// A fresh generator seeded from the operating system is used for every call.
///
/// # Examples
///
/// ```ignore
/// let alias = generate_alias(ALIAS_LENGTH);
/// assert_eq!(alias.len(), 6);
/// ```
pub fn generate_alias(length: usize) -> String {
    StdRng::from_os_rng()
        .sample_iter(Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
