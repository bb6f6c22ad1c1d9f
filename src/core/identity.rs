//! Stable pseudonyms for message authors.
//!
//! A username maps to a version-3 UUID built from the MD5 digest of its raw
//! bytes, with no namespace prefix. This matches the name-based UUIDs other
//! exporters of the same transcripts produce. The mapping is a pure
//! function: no registry, no per-run seed, so the same name yields the same
//! identifier in every export.

use uuid::{Builder, Uuid};

/// Returns the pseudonymous identifier for `username`.
pub fn pseudonym(username: &str) -> Uuid {
    Builder::from_md5_bytes(md5::compute(username.as_bytes()).0).into_uuid()
}

/// Returns the pseudonym for `username` in lowercase hyphenated form.
///
/// # Example
///
/// ```
/// use chatexport::core::identity::obfuscate_username;
///
/// assert_eq!(obfuscate_username("bob"), "9f9d51bc-70ef-31ca-9c14-f307980a29d8");
/// assert_ne!(obfuscate_username("bob"), obfuscate_username("Bob"));
/// ```
pub fn obfuscate_username(username: &str) -> String {
    pseudonym(username).hyphenated().to_string()
}
