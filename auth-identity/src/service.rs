use std::sync::Arc;

use argon2::password_hash::{rand_core::OsRng, SaltString};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{config::*, error::*, models::*, repository::*};

pub struct IdentityService {
    account_repo: Arc<dyn AccountRepository>,
    config: IdentityConfig,
    argon2: Argon2<'static>,
}

impl IdentityService {
    pub fn new(account_repo: Arc<dyn AccountRepository>, config: IdentityConfig) -> Self {
        Self {
            account_repo,
            config,
            argon2: Argon2::default(),
        }
    }

    pub fn create_user(&self, username: &str, password: &str, role: Role) -> Result<StaffAccount> {
        self.register(CreateUserRequest {
            username: username.to_string(),
            password: password.to_string(),
            role,
        })
    }

    pub fn register(&self, request: CreateUserRequest) -> Result<StaffAccount> {
        self.validate_username(&request.username)?;
        self.validate_password(&request.password)?;

        if self.account_repo.find_by_username(&request.username).is_some() {
            warn!(username = %request.username, "username already in use");
            return Err(IdentityError::UsernameTaken(request.username));
        }

        let password_hash = self.hash_password(&request.password)?;
        let account = StaffAccount {
            id: Uuid::new_v4(),
            username: request.username,
            role: request.role,
            password_hash,
            created_at: Utc::now(),
        };

        // The repository re-checks uniqueness atomically
        let account = self.account_repo.create_account(account)?;
        info!(username = %account.username, role = %account.role, "staff account created");
        Ok(account)
    }

    pub fn authenticate(&self, username: &str, password: &str) -> Result<StaffAccount> {
        let account = self
            .account_repo
            .find_by_username(username)
            .ok_or(IdentityError::InvalidCredentials)?;

        self.verify_password(password, &account.password_hash)?;
        Ok(account)
    }

    /// Accounts ordered by username
    pub fn list(&self) -> Vec<StaffAccount> {
        self.account_repo.list_accounts()
    }

    fn hash_password(&self, password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|_| IdentityError::HashingError)?
            .to_string();
        Ok(password_hash)
    }

    fn verify_password(&self, password: &str, hash: &str) -> Result<()> {
        let parsed_hash = PasswordHash::new(hash).map_err(|_| IdentityError::HashingError)?;

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| IdentityError::InvalidCredentials)
    }

    fn validate_username(&self, username: &str) -> Result<()> {
        if username.is_empty() || username.len() > self.config.username_max_length {
            return Err(IdentityError::InvalidUsername(format!(
                "must be 1 to {} characters",
                self.config.username_max_length
            )));
        }

        if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(IdentityError::InvalidUsername(
                "only letters and digits are allowed".to_string(),
            ));
        }

        Ok(())
    }

    fn validate_password(&self, password: &str) -> Result<()> {
        if password.chars().count() < self.config.password_min_length {
            return Err(IdentityError::WeakPassword(format!(
                "must be at least {} characters",
                self.config.password_min_length
            )));
        }

        if self.config.password_require_uppercase && !password.chars().any(|c| c.is_uppercase()) {
            return Err(IdentityError::WeakPassword(
                "needs an uppercase letter".to_string(),
            ));
        }

        if self.config.password_require_numbers && !password.chars().any(|c| c.is_ascii_digit()) {
            return Err(IdentityError::WeakPassword("needs a digit".to_string()));
        }

        if self.config.password_require_special_chars
            && !password.chars().any(|c| !c.is_alphanumeric())
        {
            return Err(IdentityError::WeakPassword(
                "needs a special character".to_string(),
            ));
        }

        Ok(())
    }
}
