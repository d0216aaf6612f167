/// Authentication API routes
use crate::{
    error::{Result, ServerError},
    services::Registration,
    state::AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use lumina_core::UserProfile;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub branch: Option<String>,
    pub class_name: Option<String>,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            password: req.password,
            role: req.role,
            branch: req.branch,
            class_name: req.class_name,
        }
    }
}

/// Envelope shared by login and register
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserProfile>,
}

impl AuthResponse {
    fn ok(message: &str, user: UserProfile) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            user: Some(user),
        }
    }
}

/// POST /login
pub async fn login(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>> {
    let Json(req) = body.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    let user = app_state
        .credentials
        .login(
            req.email.as_deref().unwrap_or_default(),
            req.password.as_deref().unwrap_or_default(),
        )
        .await?;

    Ok(Json(AuthResponse::ok("Login successful", user.profile())))
}

/// POST /register
pub async fn register(
    State(app_state): State<AppState>,
    body: std::result::Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>> {
    let Json(req) = body.map_err(|e| ServerError::BadRequest(e.body_text()))?;

    let user = app_state.credentials.register(req.into()).await?;

    Ok(Json(AuthResponse::ok("User Registered", user.profile())))
}
