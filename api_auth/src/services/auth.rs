use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use common::{
    error::{AppError, Res},
    format,
};
use db::models::user::{AccountType, AuthUser};
use sqlx::PgPool;

use crate::dtos::auth::{LoginRequest, SignupRequest};

/// Signup form rules, enforced server-side. First failing rule wins; the
/// messages mirror the ones shown in the web client.
pub fn validate_signup(req: &SignupRequest) -> Res<()> {
    if req.email.trim().is_empty() {
        return Err(AppError::BadRequest(
            "E-Mail-Adresse ist erforderlich".to_string(),
        ));
    }
    if !format::is_valid_email(&req.email) {
        return Err(AppError::BadRequest(
            "Ungültige E-Mail-Adresse".to_string(),
        ));
    }
    if req.password.is_empty() {
        return Err(AppError::BadRequest("Passwort ist erforderlich".to_string()));
    }
    if req.password.chars().count() < 6 {
        return Err(AppError::BadRequest(
            "Passwort muss mindestens 6 Zeichen lang sein".to_string(),
        ));
    }
    if req.name.trim().is_empty() {
        return Err(AppError::BadRequest("Name ist erforderlich".to_string()));
    }
    if req.account_type.parse::<AccountType>().is_err() {
        return Err(AppError::BadRequest(
            "Ungültiger Kontotyp".to_string(),
        ));
    }
    Ok(())
}

pub fn hash_password(password: &str) -> Res<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))
}

/// Authenticates an existing user.
/// Unknown email returns 400, wrong password 401.
pub async fn authenticate_user(pool: &PgPool, login_data: &LoginRequest) -> Res<AuthUser> {
    let user = db::user::get_by_email(pool, &login_data.email)
        .await?
        .ok_or_else(|| {
            AppError::BadRequest("Kein Konto mit dieser E-Mail-Adresse gefunden".to_string())
        })?;

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|e| AppError::Internal(format!("Stored password hash is invalid: {}", e)))?;
    let is_valid = Argon2::default()
        .verify_password(login_data.password.as_bytes(), &parsed_hash)
        .is_ok();

    if is_valid {
        Ok(user)
    } else {
        Err(AppError::Unauthorized(
            "Ungültige Anmeldedaten".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_request() -> SignupRequest {
        SignupRequest {
            email: "a@b.ch".to_string(),
            password: "secret1".to_string(),
            name: "Acme AG".to_string(),
            account_type: "company".to_string(),
        }
    }

    #[test]
    fn accepts_valid_signup() {
        assert!(validate_signup(&signup_request()).is_ok());

        let mut req = signup_request();
        req.account_type = "individual".to_string();
        assert!(validate_signup(&req).is_ok());
    }

    #[test]
    fn rejects_unknown_account_type_with_form_message() {
        let mut req = signup_request();
        req.account_type = "agency".to_string();
        let err = validate_signup(&req).unwrap_err();
        assert!(err.to_string().contains("Ungültiger Kontotyp"));
    }

    #[test]
    fn rejects_short_password() {
        let mut req = signup_request();
        req.password = "kurz".to_string();
        let err = validate_signup(&req).unwrap_err();
        assert!(err.to_string().contains("mindestens 6 Zeichen"));
    }

    #[test]
    fn rejects_bad_email_and_blank_name() {
        let mut req = signup_request();
        req.email = "not-an-email".to_string();
        assert!(validate_signup(&req).is_err());

        let mut req = signup_request();
        req.name = "   ".to_string();
        assert!(validate_signup(&req).is_err());
    }

    #[test]
    fn password_hash_round_trips() {
        let hash = hash_password("secret1").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"secret1", &parsed)
                .is_ok()
        );
        assert!(
            Argon2::default()
                .verify_password(b"wrong", &parsed)
                .is_err()
        );
    }
}
