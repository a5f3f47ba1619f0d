use utoipa::OpenApi;

use crate::{
    api::models::{AddWaterRequest, ErrorResponse, LoginRequest, LoginResponse, RegisterRequest, UserProfile},
    core::{
        aggregate::DailyTotal, models::entry::WaterLogEntry, service::TodaySummary,
        units::VolumeUnit,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::register,
        super::handlers::login,
        super::handlers::get_profile,
        super::handlers::add_water,
        super::handlers::get_today,
        super::handlers::get_history
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        LoginResponse,
        AddWaterRequest,
        UserProfile,
        ErrorResponse,
        WaterLogEntry,
        TodaySummary,
        DailyTotal,
        VolumeUnit
    )),
    info(
        title = "Hydrolog API",
        description = "API for logging water intake and viewing daily totals",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
