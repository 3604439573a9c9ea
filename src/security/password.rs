use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher as Argon2Hasher, PasswordVerifier, SaltString},
};
use rand::rngs::OsRng;

use crate::config::auth::AuthConfig;

/// Input hashed once at construction to back [`PasswordHasher::verify_dummy`]
const DUMMY_PASSWORD: &str = "gatehouse-dummy-password";

/// Argon2id password hasher
///
/// The cost parameters come from [`AuthConfig`] and are fixed for the
/// lifetime of the hasher. Hashes are PHC strings, so salt and parameters
/// travel with the hash and older hashes keep verifying after the
/// configuration changes.
///
/// # Example
/// ```no_run
/// use gatehouse::config::auth::AuthConfig;
/// use gatehouse::security::PasswordHasher;
///
/// let hasher = PasswordHasher::from_config(&AuthConfig::default()).unwrap();
/// let hash = hasher.hash("my_secure_password").unwrap();
///
/// assert!(hasher.verify("my_secure_password", &hash).unwrap());
/// ```
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    dummy_hash: String,
}

impl PasswordHasher {
    /// Build the hasher from the configured Argon2 parameters
    ///
    /// # Errors
    /// Returns error if the parameters are rejected by Argon2 (e.g. memory
    /// cost below 8 KiB per lane).
    #[tracing::instrument(skip(config))]
    pub fn from_config(config: &AuthConfig) -> Result<Self, argon2::password_hash::Error> {
        let params = Params::new(
            config.argon2.memory_cost,
            config.argon2.time_cost,
            config.argon2.parallelism,
            Some(config.argon2.hash_length as usize),
        )?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let salt = SaltString::generate(&mut OsRng);
        let dummy_hash = argon2
            .hash_password(DUMMY_PASSWORD.as_bytes(), &salt)?
            .to_string();

        Ok(Self { argon2, dummy_hash })
    }

    /// Hash a password with a fresh random salt
    ///
    /// Produces `$argon2id$v=19$m=...,t=...,p=...$<salt>$<hash>`.
    #[tracing::instrument(skip(self, password))]
    pub fn hash(&self, password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self.argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// Verify a password against a PHC hash
    ///
    /// * `Ok(true)` - password matches
    /// * `Ok(false)` - password does not match
    /// * `Err(_)` - the hash cannot be parsed
    #[tracing::instrument(skip(self, password, hash))]
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
        let parsed_hash = PasswordHash::new(hash)?;
        match self.argon2.verify_password(password.as_bytes(), &parsed_hash) {
            Ok(_) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Spend the same work as a real verification and report a mismatch
    ///
    /// Used when no account matches the email, so an unknown email costs as
    /// much as a wrong password.
    #[tracing::instrument(skip(self, password))]
    pub fn verify_dummy(&self, password: &str) -> bool {
        // Real passwords could equal the dummy; the outcome is discarded.
        let _ = self.verify(password, &self.dummy_hash);
        false
    }

    /// Whether `hash` was produced with parameters other than the current ones
    #[tracing::instrument(skip(self, hash))]
    pub fn needs_rehash(&self, hash: &str) -> Result<bool, argon2::password_hash::Error> {
        let parsed_hash = PasswordHash::new(hash)?;

        if parsed_hash.algorithm.as_str() != "argon2id" {
            return Ok(true);
        }

        let m_cost = parsed_hash.params.get_decimal("m").unwrap_or(0);
        let t_cost = parsed_hash.params.get_decimal("t").unwrap_or(0);
        let p_cost = parsed_hash.params.get_decimal("p").unwrap_or(0);

        let version = parsed_hash.version.unwrap_or(0);
        let output_len = parsed_hash.hash.map(|output| output.len()).unwrap_or(0);

        let current = self.argon2.params();
        let current_output_len = current.output_len().unwrap_or(Params::DEFAULT_OUTPUT_LEN);

        Ok(m_cost != current.m_cost()
            || t_cost != current.t_cost()
            || p_cost != current.p_cost()
            || version != Version::V0x13 as u32
            || output_len != current_output_len)
    }
}
