// ============================================================================
// Job Board Core - Authentication Service
// File: crates/jobboard-core/src/services/auth_service.rs
// ============================================================================
//! Registration, login and admin account provisioning

use std::sync::Arc;

use jobboard_security::{JwtService, PasswordService};
use jobboard_shared::utils::{mask_email, non_blank, normalize_email};
use tracing::{info, warn};
use validator::ValidateEmail;

use crate::domain::{Actor, Gender, NewProfile, NewUser, Role, User, UserInfo};
use crate::dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::DomainError;
use crate::repositories::{ProfileRepository, UserRepository};

/// Authentication service for handling user login/register flows
#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserRepository>,
    profiles: Arc<dyn ProfileRepository>,
    jwt: Arc<JwtService>,
}

/// Outcome of `ensure_admin`
#[derive(Debug, Clone)]
pub struct AdminProvision {
    pub user: User,
    pub created: bool,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        profiles: Arc<dyn ProfileRepository>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self {
            users,
            profiles,
            jwt,
        }
    }

    /// Register a new CANDIDATE or EMPLOYER account
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, DomainError> {
        let (email, password, name) = match (
            non_blank(request.email),
            request.password.filter(|p| !p.is_empty()),
            non_blank(request.name),
        ) {
            (Some(email), Some(password), Some(name)) => (email, password, name),
            _ => {
                return Err(DomainError::validation(
                    "Email, password, and name are required",
                ))
            }
        };

        if !email.validate_email() {
            return Err(DomainError::validation("Invalid email format"));
        }

        let role = match non_blank(request.role) {
            None => Role::default(),
            Some(raw) => Role::from_str(&raw)
                .filter(Role::is_self_assignable)
                .ok_or_else(|| {
                    DomainError::validation("Invalid role. Must be CANDIDATE or EMPLOYER")
                })?,
        };

        let gender = parse_gender(request.gender)?;
        let email = normalize_email(&email);
        info!("Registration attempt for email: {}", mask_email(&email));

        if self.users.find_by_email(&email).await?.is_some() {
            warn!("Registration failed: email already exists: {}", mask_email(&email));
            return Err(DomainError::EmailAlreadyExists(email));
        }

        let username = non_blank(request.username);
        if let Some(username) = &username {
            if self.users.find_by_username(username).await?.is_some() {
                warn!("Registration failed: username already taken: {}", username);
                return Err(DomainError::UsernameAlreadyExists(username.clone()));
            }
        }

        let password_hash = hash_password(password).await?;

        let mut new_user = NewUser::new(email, password_hash, name, role);
        new_user.username = username;
        new_user.gender = gender;
        new_user.phone_number = non_blank(request.phone_number);
        new_user.location = non_blank(request.location);

        let user = self.users.create(&new_user).await?;
        self.profiles.create(&NewProfile::empty(user.id)).await?;

        info!(user_id = user.id, role = %user.role, "Registration successful");
        self.issue(&user)
    }

    /// Login with email and password
    pub async fn login(&self, request: LoginRequest) -> Result<AuthResponse, DomainError> {
        let (email, password) = match (
            non_blank(request.email),
            request.password.filter(|p| !p.is_empty()),
        ) {
            (Some(email), Some(password)) => (normalize_email(&email), password),
            _ => return Err(DomainError::validation("Email and password are required")),
        };

        let user = self.users.find_by_email(&email).await?.ok_or_else(|| {
            warn!("Login failed: email not found: {}", mask_email(&email));
            DomainError::InvalidCredentials
        })?;

        let stored_hash = user.password_hash.clone();
        let password_valid = tokio::task::spawn_blocking(move || {
            PasswordService::verify(&password, &stored_hash)
        })
        .await
        .map_err(|e| DomainError::InternalError(e.to_string()))?
        .map_err(|e| {
            warn!("Login failed: stored hash unusable for user {}: {}", user.id, e);
            DomainError::InvalidCredentials
        })?;

        if !password_valid {
            warn!("Login failed: invalid password for: {}", mask_email(&email));
            return Err(DomainError::InvalidCredentials);
        }

        info!(user_id = user.id, "Login successful");
        self.issue(&user)
    }

    /// The caller's public summary, as stored now
    pub async fn current_user(&self, actor: &Actor) -> Result<UserInfo, DomainError> {
        self.users
            .find_by_id(actor.user_id)
            .await?
            .map(|user| UserInfo::from(&user))
            .ok_or(DomainError::UserNotFound)
    }

    /// Create an ADMIN account, or promote and reset the password of an
    /// existing account with that email.
    pub async fn ensure_admin(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<AdminProvision, DomainError> {
        let email = normalize_email(email);
        if !email.validate_email() || password.is_empty() || name.trim().is_empty() {
            return Err(DomainError::validation(
                "A valid email, a password and a name are required",
            ));
        }

        let password_hash = hash_password(password.to_string()).await?;

        match self.users.find_by_email(&email).await? {
            Some(mut user) => {
                user.password_hash = password_hash;
                user.role = Role::Admin;
                user.updated_at = chrono::Utc::now();
                let user = self.users.update(&user).await?;
                info!(user_id = user.id, "Existing account promoted to admin");
                Ok(AdminProvision {
                    user,
                    created: false,
                })
            }
            None => {
                let new_user =
                    NewUser::new(email, password_hash, name.trim().to_string(), Role::Admin);
                let user = self.users.create(&new_user).await?;
                self.profiles.create(&NewProfile::empty(user.id)).await?;
                info!(user_id = user.id, "Admin account created");
                Ok(AdminProvision {
                    user,
                    created: true,
                })
            }
        }
    }

    fn issue(&self, user: &User) -> Result<AuthResponse, DomainError> {
        let token = self
            .jwt
            .generate_token(user.id, user.role.as_str())
            .map_err(|e| DomainError::TokenGenerationError(e.to_string()))?;

        Ok(AuthResponse {
            token,
            user: UserInfo::from(user),
        })
    }
}

pub(crate) fn parse_gender(raw: Option<String>) -> Result<Option<Gender>, DomainError> {
    match non_blank(raw) {
        None => Ok(None),
        Some(raw) => Gender::from_str(&raw).map(Some).ok_or_else(|| {
            DomainError::validation("Invalid gender. Must be MALE, FEMALE or OTHER")
        }),
    }
}

/// Hash on the blocking pool so bcrypt never stalls a runtime worker
async fn hash_password(password: String) -> Result<String, DomainError> {
    tokio::task::spawn_blocking(move || PasswordService::hash(&password))
        .await
        .map_err(|e| DomainError::InternalError(e.to_string()))?
        .map_err(|e| DomainError::PasswordHashError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Profile;
    use crate::repositories::{MockProfileRepository, MockUserRepository};
    use chrono::Utc;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::Fake;

    fn jwt() -> Arc<JwtService> {
        Arc::new(JwtService::new("test-secret", 86_400))
    }

    fn stored_user(id: i32, email: &str, password: &str, role: Role) -> User {
        let now = Utc::now();
        User {
            id,
            email: email.to_string(),
            password_hash: PasswordService::hash(password).unwrap(),
            name: Name().fake(),
            username: None,
            gender: None,
            role,
            headline: None,
            bio: None,
            location: None,
            phone_number: None,
            skills: None,
            profile_picture: None,
            github_url: None,
            linkedin_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn created_from(new_user: &NewUser, id: i32) -> User {
        let now = Utc::now();
        User {
            id,
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            name: new_user.name.clone(),
            username: new_user.username.clone(),
            gender: new_user.gender,
            role: new_user.role,
            headline: None,
            bio: None,
            location: new_user.location.clone(),
            phone_number: new_user.phone_number.clone(),
            skills: None,
            profile_picture: None,
            github_url: None,
            linkedin_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn empty_profile(user_id: i32) -> Profile {
        let now = Utc::now();
        Profile {
            id: 1,
            user_id,
            bio: None,
            resume_url: None,
            skills: vec![],
            company_name: None,
            company_url: None,
            work_experience: vec![],
            job_preferences: Default::default(),
            profile_stats: Default::default(),
            created_at: now,
            updated_at: now,
        }
    }

    fn register_request(email: &str) -> RegisterRequest {
        RegisterRequest {
            email: Some(email.to_string()),
            password: Some("x".to_string()),
            name: Some(Name().fake()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_register_creates_user_and_profile() {
        let email: String = SafeEmail().fake();
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|u| u.role == Role::Candidate && u.password_hash.starts_with("$2"))
            .times(1)
            .returning(|u| Ok(created_from(u, 42)));
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_create()
            .withf(|p| p.user_id == 42)
            .times(1)
            .returning(|p| Ok(empty_profile(p.user_id)));

        let service = AuthService::new(Arc::new(users), Arc::new(profiles), jwt());
        let response = service.register(register_request(&email)).await.unwrap();

        assert_eq!(response.user.id, 42);
        assert_eq!(response.user.role, Role::Candidate);
        let claims = jwt().validate_token(&response.token).unwrap();
        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.role, "CANDIDATE");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_register_hashes_off_the_runtime_thread() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users.expect_create().returning(|u| Ok(created_from(u, 7)));
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_create()
            .returning(|p| Ok(empty_profile(p.user_id)));
        let service = AuthService::new(Arc::new(users), Arc::new(profiles), jwt());

        let timer = tokio::spawn(async {
            tokio::time::sleep(std::time::Duration::from_millis(1)).await;
            std::time::Instant::now()
        });
        service.register(register_request("slow@hash.test")).await.unwrap();
        let registered_at = std::time::Instant::now();

        let timer_fired_at = timer.await.unwrap();
        assert!(timer_fired_at < registered_at);
    }

    #[tokio::test]
    async fn test_hash_password_produces_verifiable_hash() {
        let hash = hash_password("secret123".to_string()).await.unwrap();
        assert!(PasswordService::verify("secret123", &hash).unwrap());
    }

    #[tokio::test]
    async fn test_register_lowercases_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .withf(|email| email == "jane@example.com")
            .returning(|_| Ok(None));
        users
            .expect_create()
            .withf(|u| u.email == "jane@example.com")
            .returning(|u| Ok(created_from(u, 1)));
        let mut profiles = MockProfileRepository::new();
        profiles
            .expect_create()
            .returning(|p| Ok(empty_profile(p.user_id)));

        let service = AuthService::new(Arc::new(users), Arc::new(profiles), jwt());
        let response = service
            .register(register_request("  Jane@Example.COM "))
            .await
            .unwrap();
        assert_eq!(response.user.email, "jane@example.com");
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let service = AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockProfileRepository::new()),
            jwt(),
        );
        let mut request = register_request("a@b.com");
        request.name = Some("   ".into());

        let err = service.register(request).await.unwrap_err();
        assert_eq!(err.to_string(), "Email, password, and name are required");
    }

    #[tokio::test]
    async fn test_register_rejects_admin_role() {
        let service = AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockProfileRepository::new()),
            jwt(),
        );
        let mut request = register_request("a@b.com");
        request.role = Some("ADMIN".into());

        let err = service.register(request).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid role. Must be CANDIDATE or EMPLOYER");
    }

    #[tokio::test]
    async fn test_register_rejects_bad_email() {
        let service = AuthService::new(
            Arc::new(MockUserRepository::new()),
            Arc::new(MockProfileRepository::new()),
            jwt(),
        );
        let err = service
            .register(register_request("not-an-email"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(1, email, "pw", Role::Candidate))));
        users.expect_create().never();

        let service = AuthService::new(
            Arc::new(users),
            Arc::new(MockProfileRepository::new()),
            jwt(),
        );
        let err = service
            .register(register_request("a@b.com"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "User already exists");
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        users
            .expect_find_by_username()
            .returning(|_| Ok(Some(stored_user(1, "x@y.com", "pw", Role::Candidate))));
        users.expect_create().never();

        let service = AuthService::new(
            Arc::new(users),
            Arc::new(MockProfileRepository::new()),
            jwt(),
        );
        let mut request = register_request("a@b.com");
        request.username = Some("taken".into());

        let err = service.register(request).await.unwrap_err();
        assert_eq!(err.to_string(), "Username already taken");
    }

    #[tokio::test]
    async fn test_login_success_and_wrong_password() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(5, email, "secret", Role::Employer))));

        let service = AuthService::new(
            Arc::new(users),
            Arc::new(MockProfileRepository::new()),
            jwt(),
        );

        let ok = service
            .login(LoginRequest::new("boss@corp.com", "secret"))
            .await
            .unwrap();
        assert_eq!(ok.user.role, Role::Employer);

        let err = service
            .login(LoginRequest::new("boss@corp.com", "wrong"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
    }

    #[tokio::test]
    async fn test_login_unknown_email_and_missing_fields() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_email().returning(|_| Ok(None));
        let service = AuthService::new(
            Arc::new(users),
            Arc::new(MockProfileRepository::new()),
            jwt(),
        );

        let err = service
            .login(LoginRequest::new("ghost@nowhere.com", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::InvalidCredentials));

        let err = service.login(LoginRequest::default()).await.unwrap_err();
        assert_eq!(err.to_string(), "Email and password are required");
    }

    #[tokio::test]
    async fn test_ensure_admin_promotes_existing_account() {
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_email()
            .returning(|email| Ok(Some(stored_user(3, email, "old", Role::Candidate))));
        users
            .expect_update()
            .withf(|u| u.role == Role::Admin)
            .times(1)
            .returning(|u| Ok(u.clone()));

        let service = AuthService::new(
            Arc::new(users),
            Arc::new(MockProfileRepository::new()),
            jwt(),
        );
        let outcome = service
            .ensure_admin("root@example.com", "new-password", "Root")
            .await
            .unwrap();

        assert!(!outcome.created);
        assert!(outcome.user.is_admin());
        assert!(PasswordService::verify("new-password", &outcome.user.password_hash).unwrap());
    }
}
