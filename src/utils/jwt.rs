use std::{collections::HashSet, env};

use crate::routes::auth::claims::Claims;
use jsonwebtoken::{
    decode, encode, errors::Error, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header,
    TokenData, Validation,
};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Session lifetime. Long-lived by design: the frontend re-authenticates
/// rarely and role changes are picked up from the store on every request
/// anyway, so a short access-token window buys nothing here.
pub const TOKEN_TTL_DAYS: i64 = 365;

/// Minimum acceptable size for the signing secret in bytes.
pub const MIN_SECRET_LENGTH: usize = 32;
/// Minimum number of unique bytes expected, to reject trivially guessable values.
const MIN_UNIQUE_SECRET_BYTES: usize = 8;

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("ACCESS_TOKEN_SECRET must be set")]
    Missing,
    #[error("ACCESS_TOKEN_SECRET must be at least {required} bytes, but {actual} bytes were provided")]
    TooShort { actual: usize, required: usize },
    #[error(
        "ACCESS_TOKEN_SECRET must contain sufficient entropy (at least {required} unique bytes); only {actual} unique bytes found"
    )]
    LowEntropy { actual: usize, required: usize },
}

#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl std::fmt::Debug for JwtKeys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtKeys").finish_non_exhaustive()
    }
}

impl JwtKeys {
    /// Reads the signing secret once at process start. A missing or weak
    /// secret is a fatal startup condition, never a per-request error.
    pub fn from_env() -> Result<Self, SigningError> {
        let value = env::var("ACCESS_TOKEN_SECRET").map_err(|_| SigningError::Missing)?;
        Self::from_secret(value)
    }

    pub fn from_secret(secret: impl AsRef<[u8]>) -> Result<Self, SigningError> {
        let bytes = secret.as_ref();
        validate_secret(bytes)?;

        Ok(Self {
            encoding: EncodingKey::from_secret(bytes),
            decoding: DecodingKey::from_secret(bytes),
        })
    }

    pub fn encoding_key(&self) -> &EncodingKey {
        &self.encoding
    }

    pub fn decoding_key(&self) -> &DecodingKey {
        &self.decoding
    }
}

fn validate_secret(secret: &[u8]) -> Result<(), SigningError> {
    if secret.len() < MIN_SECRET_LENGTH {
        return Err(SigningError::TooShort {
            actual: secret.len(),
            required: MIN_SECRET_LENGTH,
        });
    }

    let unique = secret.iter().copied().collect::<HashSet<_>>().len();
    if unique < MIN_UNIQUE_SECRET_BYTES {
        return Err(SigningError::LowEntropy {
            actual: unique,
            required: MIN_UNIQUE_SECRET_BYTES,
        });
    }

    Ok(())
}

/// Mints a signed bearer token from an identity claim. Pure computation; the
/// caller is trusted to have already authenticated the identity.
pub fn issue_token(claims: &Claims, keys: &JwtKeys) -> Result<String, Error> {
    encode(&Header::default(), claims, keys.encoding_key())
}

/// Validates signature and expiry. Callers collapse every failure here into
/// one uniform rejection so the response never reveals WHY a token failed.
pub fn decode_token(token: &str, keys: &JwtKeys) -> Result<TokenData<Claims>, Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.required_spec_claims.insert("exp".to_string());
    let data = decode::<Claims>(token, keys.decoding_key(), &validation)?;

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| Error::from(ErrorKind::InvalidToken))?
        .as_secs();

    if (data.claims.exp as u64) <= now {
        return Err(Error::from(ErrorKind::ExpiredSignature));
    }

    Ok(data)
}
