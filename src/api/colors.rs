use axum::{
    Json, Router,
    extract::{
        Query,
        rejection::{JsonRejection, QueryRejection},
    },
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::color::Rgb;
use crate::services::{
    brightness::adjust_brightness, hash_color::string_to_color_value,
    random_color::generate_random_color,
};
use crate::utils::error::AppResult;

#[derive(Deserialize)]
struct HashColorRequest {
    #[serde(default)]
    input: Value,
}

#[derive(Serialize)]
struct HashColorResponse {
    input: String,
    color: String,
}

#[derive(Serialize)]
struct ColorResponse {
    color: String,
}

#[derive(Deserialize)]
struct DarkQuery {
    color: String,
}

#[derive(Serialize)]
struct DarkResponse {
    color: String,
    is_dark: bool,
    brightness: f64,
}

#[derive(Deserialize)]
struct AdjustQuery {
    color: String,
    percent: f64,
}

#[derive(Serialize)]
struct AdjustResponse {
    color: String,
    percent: f64,
    adjusted: String,
}

async fn hash_color(
    req: Result<Json<HashColorRequest>, JsonRejection>,
) -> AppResult<Json<HashColorResponse>> {
    let Json(req) = req?;
    let color = string_to_color_value(&req.input)?;
    let input = req.input.as_str().unwrap_or_default().to_string();

    Ok(Json(HashColorResponse { input, color }))
}

async fn random_color() -> Json<ColorResponse> {
    Json(ColorResponse {
        color: generate_random_color(),
    })
}

async fn dark_color(
    query: Result<Query<DarkQuery>, QueryRejection>,
) -> AppResult<Json<DarkResponse>> {
    let Query(query) = query?;
    let rgb = Rgb::from_hex(&query.color)?;

    Ok(Json(DarkResponse {
        color: query.color,
        is_dark: rgb.is_dark(),
        brightness: rgb.brightness(),
    }))
}

async fn adjust_color(
    query: Result<Query<AdjustQuery>, QueryRejection>,
) -> AppResult<Json<AdjustResponse>> {
    let Query(query) = query?;
    let adjusted = adjust_brightness(&query.color, query.percent)?;

    Ok(Json(AdjustResponse {
        color: query.color,
        percent: query.percent,
        adjusted,
    }))
}

pub fn routes() -> Router {
    Router::new()
        .route("/hash", post(hash_color))
        .route("/random", get(random_color))
        .route("/dark", get(dark_color))
        .route("/adjust", get(adjust_color))
}
