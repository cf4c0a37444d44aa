use crate::config::Argon2Config;
use crate::errors::AttendanceError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// 哈希密码
pub fn hash_password(password: &str, config: &Argon2Config) -> Result<String, AttendanceError> {
    let params = Params::new(
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        None,
    )
    .map_err(|e| AttendanceError::password_hashing(format!("Invalid Argon2 parameters: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AttendanceError::password_hashing(format!("Password hashing failed: {e}")))?;
    Ok(hash.to_string())
}

/// 验证密码，参数从哈希串中读取
#[cfg(test)]
pub(crate) fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed_hash) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cheap_params() -> Argon2Config {
        Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("s3cret-pass", &cheap_params()).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password("s3cret-pass", &hash));
        assert!(!verify_password("wrong", &hash));
    }

    #[test]
    fn test_empty_hash_never_verifies() {
        assert!(!verify_password("", ""));
        assert!(!verify_password("anything", ""));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = Argon2Config {
            memory_cost: 1,
            time_cost: 0,
            parallelism: 0,
        };
        let err = hash_password("pw", &params).unwrap_err();
        assert!(matches!(err, AttendanceError::PasswordHashing(_)));
        assert_eq!(err.code(), "E007");
    }
}
