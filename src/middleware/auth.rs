use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::{error::AppError, routes::AppState};

pub const USER_ID_HEADER: &str = "x-user-id";

/// The caller, resolved from the `X-User-ID` header.
#[derive(Clone, Debug)]
pub struct Auth {
    pub user_id: String,
}

/// Rejects the request with 401 unless `X-User-ID` names an existing user.
///
/// The header is trusted as-is: there is no session or token behind it.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Response {
    let user_id = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned);

    let Some(user_id) = user_id else {
        return AppError::Unauthorized("User not authenticated.".to_owned()).into_response();
    };

    match state.user_query.exists(&user_id).await {
        Ok(true) => {
            req.extensions_mut().insert(Auth { user_id });
            next.run(req).await
        }
        Ok(false) => {
            tracing::warn!(%user_id, "unknown user in X-User-ID header");
            AppError::Unauthorized("User not authenticated.".to_owned()).into_response()
        }
        Err(e) => AppError::from(e).into_response(),
    }
}
