//! Exoplanet handlers
//!
//! Endpoints for the exoplanet catalogue and trip fuel estimates.

use std::str::FromStr;

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Exoplanet, ExoplanetId};
use crate::domain::validation::validate_exoplanet;
use crate::error::AppError;
use crate::AppState;

/// Query parameters for fuel estimates
#[derive(Debug, Deserialize)]
pub struct FuelQuery {
    /// Crew capacity; kept as text so malformed values can be handled per config
    pub crew: Option<String>,
}

/// Response for fuel estimates
#[derive(Debug, Serialize, Deserialize)]
pub struct FuelResponse {
    pub fuel: f64,
}

/// Parse an integer request parameter.
///
/// In strict mode malformed input is a bad request. Otherwise it becomes the
/// type's zero value, which for ids never matches a stored record.
fn parse_param<T>(name: &str, raw: &str, strict: bool) -> Result<T, AppError>
where
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    match raw.trim().parse() {
        Ok(value) => Ok(value),
        Err(_) if !strict => Ok(T::default()),
        Err(e) => Err(AppError::BadRequest(format!(
            "Invalid {} '{}': {}",
            name, raw, e
        ))),
    }
}

fn parse_id(state: &AppState, raw: &str) -> Result<ExoplanetId, AppError> {
    parse_param("exoplanet id", raw, state.config.strict_params).map(ExoplanetId)
}

/// POST /exoplanets
///
/// Validate and store a new exoplanet. Any client-supplied id is ignored.
pub async fn create_exoplanet(
    State(state): State<AppState>,
    payload: Result<Json<Exoplanet>, JsonRejection>,
) -> Result<Json<Exoplanet>, AppError> {
    let Json(mut exoplanet) = payload?;
    validate_exoplanet(&exoplanet)?;

    exoplanet.id = state.exoplanet_service.add(exoplanet.clone()).await?;
    tracing::info!(id = %exoplanet.id, name = %exoplanet.name, "Exoplanet created");

    Ok(Json(exoplanet))
}

/// GET /exoplanets
///
/// List every stored exoplanet, in no particular order.
pub async fn list_exoplanets(
    State(state): State<AppState>,
) -> Result<Json<Vec<Exoplanet>>, AppError> {
    let exoplanets = state.exoplanet_service.list().await?;
    Ok(Json(exoplanets))
}

/// GET /exoplanets/:id
pub async fn get_exoplanet(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Exoplanet>, AppError> {
    let id = parse_id(&state, &raw_id)?;
    let exoplanet = state.exoplanet_service.get(&id).await?;
    Ok(Json(exoplanet))
}

/// PUT /exoplanets/:id
///
/// Replace an exoplanet. The path id wins over any id in the body, and
/// fields left out of the body are not carried over from the stored record.
pub async fn update_exoplanet(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<Exoplanet>, JsonRejection>,
) -> Result<Json<Exoplanet>, AppError> {
    let id = parse_id(&state, &raw_id)?;
    let Json(mut exoplanet) = payload?;
    exoplanet.id = id;

    validate_exoplanet(&exoplanet)?;

    let updated = state.exoplanet_service.update(exoplanet).await?;
    tracing::info!(id = %updated.id, "Exoplanet updated");

    Ok(Json(updated))
}

/// DELETE /exoplanets/:id
pub async fn delete_exoplanet(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&state, &raw_id)?;
    state.exoplanet_service.delete(&id).await?;
    tracing::info!(id = %id, "Exoplanet deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /exoplanets/:id/fuel?crew=N
///
/// Estimate fuel for a trip with the given crew. A missing crew counts as 0.
pub async fn estimate_fuel(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Query(query): Query<FuelQuery>,
) -> Result<Json<FuelResponse>, AppError> {
    let id = parse_id(&state, &raw_id)?;
    let crew = match query.crew.as_deref() {
        None | Some("") => 0,
        Some(raw) => parse_param::<i64>("crew", raw, state.config.strict_params)?,
    };

    let fuel = state.exoplanet_service.estimate_fuel(&id, crew).await?;
    tracing::debug!(id = %id, crew, fuel, "Fuel estimated");

    Ok(Json(FuelResponse { fuel }))
}
