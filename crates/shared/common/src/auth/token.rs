//! JWT issuance and verification.
//!
//! A token is valid iff its signature matches the shared secret and its `exp`
//! claim is strictly after the verification instant. Expiry is checked here
//! rather than by `jsonwebtoken` so there is no leeway.

use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, JwtConfig};
use crate::error::{AuthError, AuthResult, InvalidTokenKind};

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub exp: i64,
    #[serde(default)]
    pub iat: i64,
}

impl Claims {
    /// Subject claim, treating an empty string as absent.
    pub fn subject(&self) -> Option<&str> {
        self.sub.as_deref().filter(|s| !s.is_empty())
    }
}

/// Parse a configured algorithm name. Only HMAC algorithms work with a shared secret.
pub fn parse_algorithm(name: &str) -> Result<Algorithm, ConfigError> {
    match Algorithm::from_str(name.trim()) {
        Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(alg),
        _ => Err(ConfigError::UnsupportedAlgorithm(name.to_string())),
    }
}

fn check_secret(secret: &str) -> Result<(), ConfigError> {
    if secret.trim().is_empty() {
        return Err(ConfigError::Empty("JWT_SECRET"));
    }
    Ok(())
}

impl From<&ErrorKind> for InvalidTokenKind {
    fn from(kind: &ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidSignature => InvalidTokenKind::BadSignature,
            ErrorKind::ExpiredSignature => InvalidTokenKind::Expired,
            _ => InvalidTokenKind::Malformed,
        }
    }
}

/// Signs access tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    key: EncodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create an issuer. An empty secret is a configuration error.
    pub fn new(secret: &str, algorithm: Algorithm) -> Result<Self, ConfigError> {
        check_secret(secret)?;
        Ok(Self {
            key: EncodingKey::from_secret(secret.as_bytes()),
            algorithm,
        })
    }

    /// Create an issuer from the shared JWT configuration.
    pub fn from_config(config: &JwtConfig) -> Result<Self, ConfigError> {
        Self::new(&config.secret, parse_algorithm(&config.algorithm)?)
    }

    /// Issue a token for `subject` that expires `ttl` from now.
    pub fn issue(&self, subject: &str, ttl: Duration) -> AuthResult<String> {
        self.issue_at(subject, ttl, Utc::now())
    }

    fn issue_at(&self, subject: &str, ttl: Duration, now: DateTime<Utc>) -> AuthResult<String> {
        if subject.is_empty() {
            return Err(AuthError::Issuance("subject must not be empty".to_string()));
        }
        if ttl <= Duration::zero() {
            return Err(AuthError::Issuance("ttl must be positive".to_string()));
        }

        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::Issuance("ttl out of range".to_string()))?;

        let claims = Claims {
            sub: Some(subject.to_string()),
            exp: expires_at.timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.key)
            .map_err(|e| AuthError::Issuance(e.to_string()))
    }
}

/// Validates access tokens and extracts their claims.
#[derive(Clone)]
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a verifier. An empty secret is a configuration error.
    pub fn new(secret: &str, algorithm: Algorithm) -> Result<Self, ConfigError> {
        check_secret(secret)?;

        let mut validation = Validation::new(algorithm);
        validation.validate_exp = false;
        validation.leeway = 0;

        Ok(Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Create a verifier from the shared JWT configuration.
    pub fn from_config(config: &JwtConfig) -> Result<Self, ConfigError> {
        Self::new(&config.secret, parse_algorithm(&config.algorithm)?)
    }

    /// Verify `token` against the current time.
    pub fn verify(&self, token: &str) -> AuthResult<Claims> {
        self.verify_at(token, Utc::now())
    }

    fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<Claims> {
        let claims = decode::<Claims>(token, &self.key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(InvalidTokenKind::from(e.kind())))?
            .claims;

        if claims.exp <= now.timestamp() {
            return Err(AuthError::InvalidToken(InvalidTokenKind::Expired));
        }

        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-for-testing-only";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, Algorithm::HS256).unwrap()
    }

    fn verifier() -> TokenVerifier {
        TokenVerifier::new(SECRET, Algorithm::HS256).unwrap()
    }

    #[test]
    fn test_issue_then_verify_yields_subject() {
        let token = issuer().issue("alice", Duration::minutes(30)).unwrap();
        let claims = verifier().verify(&token).unwrap();

        assert_eq!(claims.subject(), Some("alice"));
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let now = Utc::now();
        let token = issuer()
            .issue_at("alice", Duration::minutes(30), now)
            .unwrap();

        let later = now + Duration::minutes(31);
        assert_eq!(
            verifier().verify_at(&token, later),
            Err(AuthError::InvalidToken(InvalidTokenKind::Expired))
        );
    }

    #[test]
    fn test_token_at_exact_expiry_is_rejected() {
        let now = Utc::now();
        let token = issuer().issue_at("alice", Duration::seconds(60), now).unwrap();

        let at_expiry = now + Duration::seconds(60);
        assert!(verifier().verify_at(&token, at_expiry).is_err());
        assert!(verifier()
            .verify_at(&token, at_expiry - Duration::seconds(1))
            .is_ok());
    }

    #[test]
    fn test_token_issued_in_the_past_has_expired() {
        let token = issuer()
            .issue_at("alice", Duration::minutes(30), Utc::now() - Duration::hours(1))
            .unwrap();

        assert_eq!(
            verifier().verify(&token),
            Err(AuthError::InvalidToken(InvalidTokenKind::Expired))
        );
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = TokenIssuer::new("another-secret", Algorithm::HS256)
            .unwrap()
            .issue("alice", Duration::minutes(30))
            .unwrap();

        assert_eq!(
            verifier().verify(&token),
            Err(AuthError::InvalidToken(InvalidTokenKind::BadSignature))
        );
    }

    #[test]
    fn test_algorithm_mismatch_is_rejected() {
        let token = TokenIssuer::new(SECRET, Algorithm::HS512)
            .unwrap()
            .issue("alice", Duration::minutes(30))
            .unwrap();

        assert!(matches!(
            verifier().verify(&token),
            Err(AuthError::InvalidToken(_))
        ));
    }

    #[test]
    fn test_garbage_is_malformed() {
        assert_eq!(
            verifier().verify("not-a-jwt"),
            Err(AuthError::InvalidToken(InvalidTokenKind::Malformed))
        );
        assert!(verifier().verify("").is_err());
    }

    #[test]
    fn test_token_without_subject_decodes_without_subject() {
        let claims = Claims {
            sub: None,
            exp: (Utc::now() + Duration::minutes(5)).timestamp(),
            iat: Utc::now().timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let decoded = verifier().verify(&token).unwrap();
        assert_eq!(decoded.subject(), None);
    }

    #[test]
    fn test_issue_rejects_bad_inputs() {
        assert!(issuer().issue("", Duration::minutes(30)).is_err());
        assert!(issuer().issue("alice", Duration::zero()).is_err());
        assert!(issuer().issue("alice", Duration::minutes(-1)).is_err());
    }

    #[test]
    fn test_issue_with_overflowing_ttl_is_an_error() {
        let err = issuer().issue("alice", Duration::MAX).unwrap_err();
        assert!(matches!(err, AuthError::Issuance(_)));
    }

    #[test]
    fn test_empty_secret_is_configuration_error() {
        assert_eq!(
            TokenIssuer::new("", Algorithm::HS256).err(),
            Some(ConfigError::Empty("JWT_SECRET"))
        );
        assert!(TokenVerifier::new("", Algorithm::HS256).is_err());
        assert_eq!(
            TokenIssuer::new("   ", Algorithm::HS256).err(),
            Some(ConfigError::Empty("JWT_SECRET"))
        );
        assert!(TokenVerifier::new(" \t", Algorithm::HS256).is_err());
    }

    #[test]
    fn test_parse_algorithm() {
        assert_eq!(parse_algorithm("HS256").unwrap(), Algorithm::HS256);
        assert_eq!(parse_algorithm("HS512").unwrap(), Algorithm::HS512);
        assert!(matches!(
            parse_algorithm("RS256"),
            Err(ConfigError::UnsupportedAlgorithm(_))
        ));
        assert!(parse_algorithm("nope").is_err());
    }

    #[test]
    fn test_from_config_uses_configured_algorithm() {
        let config = JwtConfig {
            secret: SECRET.to_string(),
            algorithm: "HS384".to_string(),
            access_token_expire_minutes: 30,
        };

        let token = TokenIssuer::from_config(&config)
            .unwrap()
            .issue("johndoe", Duration::minutes(1))
            .unwrap();
        let claims = TokenVerifier::from_config(&config)
            .unwrap()
            .verify(&token)
            .unwrap();

        assert_eq!(claims.subject(), Some("johndoe"));
    }
}
