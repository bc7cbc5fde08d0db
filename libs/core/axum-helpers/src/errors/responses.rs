//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorResponse;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": "Internal Server Error",
        "message": "Something went wrong on the server",
        "statusCode": 500
    })
)]
pub struct InternalServerErrorResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": "Validation Error",
        "message": "Name is required and must be a non-empty string",
        "statusCode": 400
    })
)]
pub struct BadRequestValidationResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid path identifier",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": "Validation Error",
        "message": "Invalid item ID",
        "statusCode": 400
    })
)]
pub struct BadRequestIdResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": "Not Found",
        "message": "Item with id 99999 not found",
        "statusCode": 404
    })
)]
pub struct NotFoundResponse(pub ErrorResponse);

#[derive(ToResponse)]
#[response(
    description = "Request body exceeds the size limit",
    content_type = "application/json",
    example = json!({
        "success": false,
        "error": "Payload Too Large",
        "message": "Failed to buffer the request body: length limit exceeded",
        "statusCode": 413
    })
)]
pub struct PayloadTooLargeResponse(pub ErrorResponse);
