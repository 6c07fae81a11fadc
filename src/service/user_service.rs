use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::model::user::{User, UserRole};
use crate::repository::user_repo::UserRepository;
use crate::util::error::ServiceError;
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl, TokenPair};
use crate::util::password::{PasswordUtils, PasswordUtilsImpl};

#[derive(Debug, Clone, serde::Serialize)]
pub struct UserWithoutPassword {
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<User> for UserWithoutPassword {
    fn from(user: User) -> Self {
        UserWithoutPassword {
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct UserAuthResponse {
    pub user: UserWithoutPassword,
    pub tokens: TokenPair,
}

#[async_trait]
pub trait UserService: Send + Sync {
    async fn register(&self, user: User, password: String) -> Result<UserAuthResponse, ServiceError>;
    async fn login(&self, email: String, password: String) -> Result<UserAuthResponse, ServiceError>;
    async fn refresh_token(&self, refresh_token: String) -> Result<TokenPair, ServiceError>;
}

pub struct UserServiceImpl {
    pub user_repo: Arc<dyn UserRepository>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl UserServiceImpl {
    pub fn new(user_repo: Arc<dyn UserRepository>, jwt_utils: Arc<JwtTokenUtilsImpl>) -> Self {
        Self {
            user_repo,
            jwt_utils,
        }
    }

    fn token_pair_for(&self, user: &User) -> Result<TokenPair, ServiceError> {
        let user_id = user
            .id
            .map(|id| id.to_hex())
            .ok_or_else(|| ServiceError::InternalError("User has no id".to_string()))?;
        self.jwt_utils
            .generate_token_pair(&user_id, &user.email, &user.role.to_string())
            .map_err(|e| ServiceError::InternalError(format!("Token generation error: {}", e)))
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, user, password), fields(username = %user.username, email = %user.email))]
    async fn register(
        &self,
        mut user: User,
        password: String,
    ) -> Result<UserAuthResponse, ServiceError> {
        info!("Registering new user");

        if let Err(problems) = PasswordUtilsImpl::validate_password_strength(&password) {
            return Err(ServiceError::InvalidInput(problems.join("; ")));
        }
        if self.user_repo.find_by_email(&user.email).await?.is_some() {
            return Err(ServiceError::Conflict(format!(
                "A user with email {} already exists",
                user.email
            )));
        }

        let hash = PasswordUtilsImpl::hash_password(&password)
            .map_err(|e| ServiceError::InternalError(format!("Password hash error: {}", e)))?;
        user.password_hash = hash;

        let inserted = self.user_repo.insert(user).await.map_err(|e| {
            error!("Failed to insert user: {e}");
            ServiceError::from(e)
        })?;
        info!("User inserted successfully");

        let tokens = self.token_pair_for(&inserted)?;
        Ok(UserAuthResponse {
            user: inserted.into(),
            tokens,
        })
    }

    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(
        &self,
        email: String,
        password: String,
    ) -> Result<UserAuthResponse, ServiceError> {
        info!("User login attempt");

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ServiceError::InvalidInput("Invalid email or password".to_string()))?;

        let valid = PasswordUtilsImpl::verify_password(&password, &user.password_hash)
            .map_err(|e| ServiceError::InternalError(format!("Password verify error: {}", e)))?;
        if !valid {
            return Err(ServiceError::InvalidInput(
                "Invalid email or password".to_string(),
            ));
        }

        let tokens = self.token_pair_for(&user)?;
        info!("Login successful");
        Ok(UserAuthResponse {
            user: user.into(),
            tokens,
        })
    }

    #[instrument(skip(self, refresh_token))]
    async fn refresh_token(&self, refresh_token: String) -> Result<TokenPair, ServiceError> {
        let claims = self
            .jwt_utils
            .validate_refresh_token(&refresh_token)
            .map_err(|e| ServiceError::InvalidInput(format!("Invalid refresh token: {}", e)))?;

        let id = ObjectId::parse_str(&claims.sub)
            .map_err(|_| ServiceError::InvalidInput("Invalid subject in token".to_string()))?;
        let user = self
            .user_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("User no longer exists".to_string()))?;

        self.token_pair_for(&user)
    }
}
