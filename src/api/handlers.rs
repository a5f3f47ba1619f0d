use crate::{
    api::models::*,
    core::{
        aggregate::DailyTotal,
        errors::HydrologError,
        models::entry::WaterLogEntry,
        service::{HydrologService, NewUser, TodaySummary},
    },
    infrastructure::{logging::in_memory::InMemoryAuditLog, storage::in_memory::InMemoryStorage},
};
use axum::{
    Extension, Json, Router,
    extract::{Request, State},
    http::StatusCode,
    middleware::{self, Next},
    response::IntoResponse,
};
use http::header;

use crate::auth::jwt::Claims;
use std::sync::Arc;

// Middleware to resolve the bearer credential to a user identity
async fn auth_middleware(
    State(service): State<Arc<HydrologService<InMemoryAuditLog, InMemoryStorage>>>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<impl IntoResponse, ApiError> {
    let auth_header = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| HydrologError::Unauthorized("Missing Authorization header".to_string()))?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(|| HydrologError::Unauthorized("Invalid Authorization header".to_string()))?;

    let claims = service.validate_token(token)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

// Define API routes
pub fn api_routes(service: Arc<HydrologService<InMemoryAuditLog, InMemoryStorage>>) -> Router {
    let protected_routes = Router::new()
        .route("/user/me", axum::routing::get(get_profile))
        .route("/water/add", axum::routing::post(add_water))
        .route("/water/today", axum::routing::get(get_today))
        .route("/water/history", axum::routing::get(get_history))
        .route_layer(middleware::from_fn_with_state(service.clone(), auth_middleware));

    Router::new()
        .route("/", axum::routing::get(|| async { "OK" }))
        .route("/user/register", axum::routing::post(register)) // Unprotected
        .route("/user/login", axum::routing::post(login))
        .merge(protected_routes)
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/user/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully"),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 409, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn register(
    State(service): State<Arc<HydrologService<InMemoryAuditLog, InMemoryStorage>>>,
    Json(req): Json<RegisterRequest>,
) -> Result<StatusCode, ApiError> {
    service
        .register_user(NewUser {
            name: req.name,
            email: req.email,
            password: req.password,
            daily_goal: req.daily_goal,
            unit_preference: req.unit_preference,
        })
        .await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    post,
    path = "/user/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn login(
    State(service): State<Arc<HydrologService<InMemoryAuditLog, InMemoryStorage>>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let token = service.authenticate(&req.email, &req.password).await?;
    Ok(Json(LoginResponse { token }))
}

#[utoipa::path(
    get,
    path = "/user/me",
    responses(
        (status = 200, description = "Profile retrieved successfully", body = UserProfile),
        (status = 401, description = "Missing or invalid credential", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_profile(
    State(service): State<Arc<HydrologService<InMemoryAuditLog, InMemoryStorage>>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UserProfile>, ApiError> {
    let user = service
        .get_user(&claims.sub)
        .await?
        .ok_or_else(|| HydrologError::UserNotFound(claims.sub))?;
    Ok(Json(UserProfile::from(user)))
}

#[utoipa::path(
    post,
    path = "/water/add",
    request_body = AddWaterRequest,
    responses(
        (status = 201, description = "Entry logged successfully", body = WaterLogEntry),
        (status = 400, description = "Amount is not a positive integer", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credential", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn add_water(
    State(service): State<Arc<HydrologService<InMemoryAuditLog, InMemoryStorage>>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<AddWaterRequest>,
) -> Result<(StatusCode, Json<WaterLogEntry>), ApiError> {
    let entry = service.log_water(&claims.sub, req.amount).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

#[utoipa::path(
    get,
    path = "/water/today",
    responses(
        (status = 200, description = "Today's entries and total", body = TodaySummary),
        (status = 401, description = "Missing or invalid credential", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_today(
    State(service): State<Arc<HydrologService<InMemoryAuditLog, InMemoryStorage>>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<TodaySummary>, ApiError> {
    let summary = service.today_summary(&claims.sub).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    get,
    path = "/water/history",
    responses(
        (status = 200, description = "Per-day totals, most recent first", body = Vec<DailyTotal>),
        (status = 401, description = "Missing or invalid credential", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("Bearer" = []))
)]
pub async fn get_history(
    State(service): State<Arc<HydrologService<InMemoryAuditLog, InMemoryStorage>>>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<Vec<DailyTotal>>, ApiError> {
    let history = service.daily_history(&claims.sub).await?;
    Ok(Json(history))
}
