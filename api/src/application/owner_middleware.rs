use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::warn;
use uuid::Uuid;

use crate::application::http::server::{api_entities::api_error::ApiError, app_state::AppState};

pub const OWNER_HEADER: &str = "x-owner-id";

/// Owner whose records the request reads and writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OwnerContext {
    pub owner_id: Uuid,
}

/// Reads `X-Owner-Id` into an [`OwnerContext`] extension. Requests without
/// the header act as the configured demo owner.
pub async fn owner_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let owner_id = match req.headers().get(OWNER_HEADER) {
        None => state.args.demo.owner_id,
        Some(value) => value
            .to_str()
            .ok()
            .and_then(|v| Uuid::parse_str(v.trim()).ok())
            .ok_or_else(|| {
                warn!(header = ?value, "malformed owner header");
                ApiError::BadRequest("Invalid X-Owner-Id header".to_string())
            })?,
    };

    req.extensions_mut().insert(OwnerContext { owner_id });

    Ok(next.run(req).await)
}
