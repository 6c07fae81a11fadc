use gozamadrid_backend::config::JwtConfig;
use gozamadrid_backend::util::jwt::*;
use chrono::Utc;

// Helper function to create JWT utils for testing
fn create_test_jwt_utils() -> JwtTokenUtilsImpl {
    JwtTokenUtilsImpl::new(JwtConfig::default())
}

#[test]
fn test_generate_and_validate_access_token() {
    let jwt_utils = create_test_jwt_utils();

    let token = jwt_utils
        .generate_access_token("user123", "user@example.com", "USER")
        .expect("access token generation failed");

    let claims = jwt_utils
        .validate_access_token(&token)
        .expect("access token validation failed");

    assert_eq!(claims.sub, "user123");
    assert_eq!(claims.email, "user@example.com");
    assert_eq!(claims.role, "USER");
    assert_eq!(claims.token_type, TokenType::Access.as_str());
    assert!(claims.exp > Utc::now().timestamp());
}

#[test]
fn test_generate_and_validate_refresh_token() {
    let jwt_utils = create_test_jwt_utils();

    let token = jwt_utils
        .generate_refresh_token("user123", "user@example.com", "ADMIN")
        .expect("refresh token generation failed");

    let claims = jwt_utils
        .validate_refresh_token(&token)
        .expect("refresh token validation failed");

    assert_eq!(claims.role, "ADMIN");
    assert_eq!(claims.token_type, TokenType::Refresh.as_str());
}

#[test]
fn test_token_types_are_not_interchangeable() {
    let jwt_utils = create_test_jwt_utils();

    let pair = jwt_utils
        .generate_token_pair("user123", "user@example.com", "USER")
        .expect("token pair generation failed");

    // A refresh token must not pass access validation and vice versa
    assert!(jwt_utils.validate_access_token(&pair.refresh_token).is_err());
    assert!(jwt_utils.validate_refresh_token(&pair.access_token).is_err());
}

#[test]
fn test_validate_rejects_tampered_token() {
    let jwt_utils = create_test_jwt_utils();

    let token = jwt_utils
        .generate_access_token("user123", "user@example.com", "USER")
        .expect("access token generation failed");

    let mut tampered = token.clone();
    tampered.push('x');
    assert!(jwt_utils.validate_access_token(&tampered).is_err());
}

#[test]
fn test_extract_token_from_header() {
    let jwt_utils = create_test_jwt_utils();

    let token = jwt_utils
        .extract_token_from_header("Bearer abc.def.ghi")
        .expect("extraction failed");
    assert_eq!(token, "abc.def.ghi");

    assert!(jwt_utils.extract_token_from_header("abc.def.ghi").is_err());
    assert!(jwt_utils.extract_token_from_header("").is_err());
}

#[test]
fn test_token_pair_has_distinct_jti() {
    let jwt_utils = create_test_jwt_utils();

    let pair = jwt_utils
        .generate_token_pair("user123", "user@example.com", "USER")
        .expect("token pair generation failed");

    let access_claims = jwt_utils
        .validate_access_token(&pair.access_token)
        .expect("access claims");
    let refresh_claims = jwt_utils
        .validate_refresh_token(&pair.refresh_token)
        .expect("refresh claims");

    assert_ne!(access_claims.jti, refresh_claims.jti);
}
