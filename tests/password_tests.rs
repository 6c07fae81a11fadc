use gozamadrid_backend::util::password::{PasswordUtils, PasswordUtilsImpl};

#[test]
fn test_hash_produces_unique_salts() {
    let first = PasswordUtilsImpl::hash_password("SecurePass123!").expect("hash failed");
    let second = PasswordUtilsImpl::hash_password("SecurePass123!").expect("hash failed");

    // Argon2 salts are random, so the encoded hashes differ
    assert_ne!(first, second);
    assert!(PasswordUtilsImpl::verify_password("SecurePass123!", &first).expect("verify failed"));
    assert!(PasswordUtilsImpl::verify_password("SecurePass123!", &second).expect("verify failed"));
}

#[test]
fn test_verify_rejects_wrong_password() {
    let hash = PasswordUtilsImpl::hash_password("SecurePass123!").expect("hash failed");
    let ok = PasswordUtilsImpl::verify_password("WrongPass456!", &hash).expect("verify failed");
    assert!(!ok);
}

#[test]
fn test_password_strength_rules() {
    assert!(PasswordUtilsImpl::validate_password_strength("SecurePass123!").is_ok());

    // Too short
    assert!(PasswordUtilsImpl::validate_password_strength("Sp1!").is_err());
    // No digit
    assert!(PasswordUtilsImpl::validate_password_strength("SecurePass!").is_err());
    // No uppercase
    assert!(PasswordUtilsImpl::validate_password_strength("securepass123!").is_err());
}
