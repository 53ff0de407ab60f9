// Access-token management.

use relaydeck_api::types::{TokenUpdate, TokenWrite};
use relaydeck_api::{ApiClient, Error};

use super::{ensure_ok, lenient_page, unwrap_data, validation};
use crate::model::{AccessToken, CreatedToken, Page, TokenDraft};

pub async fn page(api: &ApiClient, current: u64, size: u64) -> Result<Page<AccessToken>, Error> {
    let envelope = api.list_tokens(current, size).await?;
    Ok(lenient_page(envelope, current, size))
}

/// Mint a token. The returned [`CreatedToken`] is the only place the
/// secret ever appears — later reads carry the mask alone.
pub async fn create(api: &ApiClient, draft: &TokenDraft) -> Result<CreatedToken, Error> {
    if draft.name.trim().is_empty() {
        return Err(validation("token name must not be empty"));
    }

    let body = TokenWrite {
        name: draft.name.clone(),
        expires_at: draft.expires_at,
    };
    let mut dto = unwrap_data(api.create_token(&body).await?)?;
    let secret = dto.token.take().ok_or_else(|| Error::Decode {
        message: "token create response carried no secret".into(),
        body: String::new(),
    })?;
    Ok(CreatedToken {
        secret,
        record: AccessToken::from(dto),
    })
}

pub async fn set_enabled(api: &ApiClient, id: &str, enabled: bool) -> Result<AccessToken, Error> {
    let body = TokenUpdate {
        is_enabled: enabled,
    };
    unwrap_data(api.update_token(id, &body).await?).map(AccessToken::from)
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<(), Error> {
    let envelope = api.delete_token(id).await?;
    ensure_ok(&envelope)
}
