//! # Admin Authentication Module
//!
//! Gate for the administrative reconciliation surface. Callers present a
//! bearer token; the middleware verifies it against an Argon2 PHC hash
//! held in configuration. Handlers behind the gate never see credentials;
//! route placement is the only privilege signal the booking core trusts.
//!
//! The token hash is produced offline (see [`hash_token`]) and supplied
//! via `ADMIN_TOKEN_HASH`. When the hash is absent, the admin surface
//! rejects every request.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHasher, PasswordVerifier,
};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use eyre::Result;
use slotbook_core::errors::BookingError;

use crate::{middleware::error_handling::AppError, ApiState};

/// Hashes an admin token using the Argon2 algorithm, producing a PHC
/// string suitable for the `ADMIN_TOKEN_HASH` environment variable.
pub fn hash_token(token: &str) -> Result<String> {
    // Generate a fresh, random salt
    let salt = SaltString::generate(&mut OsRng);

    // Create default Argon2 instance
    let argon2 = Argon2::default();

    // Hash the token with salt
    let token_hash = argon2
        .hash_password(token.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing token: {}", e))?
        .to_string();

    Ok(token_hash)
}

/// Verifies a presented token against a stored Argon2 PHC hash.
pub fn verify_token(token: &str, hash: &str) -> Result<bool> {
    let parsed_hash = argon2::PasswordHash::new(hash)
        .map_err(|e| eyre::eyre!("Invalid token hash: {}", e))?;
    let is_valid = Argon2::default()
        .verify_password(token.as_bytes(), &parsed_hash)
        .is_ok();
    Ok(is_valid)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Axum middleware guarding the admin routes. Fails closed: a missing
/// header, an invalid token, or an unconfigured hash all yield 401.
pub async fn require_admin(
    State(state): State<Arc<ApiState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(hash) = state.admin_token_hash.as_deref() else {
        return Err(AppError(BookingError::Authentication(
            "Admin access is not configured".to_string(),
        )));
    };

    let token = bearer_token(&request).ok_or_else(|| {
        AppError(BookingError::Authentication(
            "Missing bearer token".to_string(),
        ))
    })?;

    let is_valid = verify_token(token, hash).map_err(BookingError::Database)?;
    if !is_valid {
        return Err(AppError(BookingError::Authentication(
            "Invalid admin token".to_string(),
        )));
    }

    Ok(next.run(request).await)
}
