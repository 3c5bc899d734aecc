//! Extractor configs that report payload failures through the error catalog.
//!
//! Register them with `App::app_data` so rejected JSON bodies, paths and
//! query strings come back as catalog errors instead of actix defaults.

use actix_web::web;
use keeper_core::ApiError;

use crate::config::WebConfig;
use crate::error::ApiErrorResponse;

/// JSON body failures become [`ApiError::ParsingBody`].
pub fn json_config(config: &WebConfig) -> web::JsonConfig {
    let expose = config.expose_internal_errors;
    web::JsonConfig::default().error_handler(move |err, _req| {
        ApiErrorResponse::new(ApiError::parsing_body(&err), expose).into()
    })
}

/// Path segment failures become [`ApiError::ParsingUri`].
pub fn path_config(config: &WebConfig) -> web::PathConfig {
    let expose = config.expose_internal_errors;
    web::PathConfig::default().error_handler(move |err, _req| {
        ApiErrorResponse::new(ApiError::parsing_uri(&err), expose).into()
    })
}

/// Query string failures become [`ApiError::ParsingUri`].
pub fn query_config(config: &WebConfig) -> web::QueryConfig {
    let expose = config.expose_internal_errors;
    web::QueryConfig::default().error_handler(move |err, _req| {
        ApiErrorResponse::new(ApiError::parsing_uri(&err), expose).into()
    })
}
