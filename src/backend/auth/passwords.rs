/**
 * Password Hashing
 *
 * Thin wrappers over bcrypt. The cost comes from `AppConfig::bcrypt_cost`
 * so tests can use the minimum cost.
 */

use bcrypt::BcryptError;

/// Hash a plaintext password
///
/// # Arguments
/// * `password` - Plaintext password
/// * `cost` - bcrypt cost factor (4..=31)
pub fn hash_password(password: &str, cost: u32) -> Result<String, BcryptError> {
    bcrypt::hash(password, cost)
}

/// Check a plaintext password against a stored hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, BcryptError> {
    bcrypt::verify(password, hash)
}
