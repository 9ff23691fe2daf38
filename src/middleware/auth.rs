use axum::RequestPartsExt;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use chrono::Utc;
use headers::{Authorization, authorization::Bearer};

use crate::error::StudioError;
use crate::router::StudioState;

/// Admin identity proven by a live session token.
///
/// Handlers that mutate content take this as an extractor argument; the
/// token comes from `Authorization: Bearer <token>` and must name a
/// stored, unexpired session. Expired sessions are deleted on sight so
/// the table does not accumulate dead rows.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
}

impl FromRequestParts<StudioState> for AdminSession {
    type Rejection = StudioError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &StudioState,
    ) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| StudioError::Unauthorized)?;

        let Some(session) = state.storage.get_session(bearer.token()).await? else {
            return Err(StudioError::Unauthorized);
        };

        if session.is_expired(Utc::now()) {
            state.storage.delete_session(&session.token).await?;
            return Err(StudioError::Unauthorized);
        }

        Ok(AdminSession {
            username: session.username,
        })
    }
}
