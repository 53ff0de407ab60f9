// Upstream provider management.

use secrecy::ExposeSecret;

use relaydeck_api::{ApiClient, Error};

use super::{ensure_ok, lenient_page, unwrap_data, validation};
use crate::convert;
use crate::model::{Page, Provider, ProviderDraft};

pub async fn page(
    api: &ApiClient,
    current: u64,
    size: u64,
    name: Option<&str>,
) -> Result<Page<Provider>, Error> {
    let envelope = api.list_providers(current, size, name).await?;
    Ok(lenient_page(envelope, current, size))
}

/// The full provider list (dashboard, group target pickers).
pub async fn list(api: &ApiClient) -> Result<Vec<Provider>, Error> {
    let envelope = api.all_providers().await?.into_envelope();
    let records = unwrap_data(envelope)?;
    Ok(records.into_iter().map(Provider::from).collect())
}

pub async fn create(api: &ApiClient, draft: &ProviderDraft) -> Result<Provider, Error> {
    validate(draft)?;
    let envelope = api.create_provider(&convert::provider_to_wire(draft)).await?;
    unwrap_data(envelope).map(Provider::from)
}

pub async fn update(api: &ApiClient, id: &str, draft: &ProviderDraft) -> Result<Provider, Error> {
    validate(draft)?;
    let envelope = api
        .update_provider(id, &convert::provider_to_wire(draft))
        .await?;
    unwrap_data(envelope).map(Provider::from)
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<(), Error> {
    let envelope = api.delete_provider(id).await?;
    ensure_ok(&envelope)
}

/// Ask the gateway to re-pull the provider's model catalog upstream.
pub async fn sync_models(api: &ApiClient, id: &str) -> Result<Vec<String>, Error> {
    let envelope = api.sync_provider_models(id).await?;
    unwrap_data(envelope)
}

/// Rejects obviously incomplete drafts before any network round trip.
fn validate(draft: &ProviderDraft) -> Result<(), Error> {
    if draft.name.trim().is_empty() {
        return Err(validation("provider name must not be empty"));
    }
    if draft.base_url.trim().is_empty() {
        return Err(validation("provider base URL must not be empty"));
    }
    if draft.api_key.expose_secret().trim().is_empty() {
        return Err(validation("provider credential must not be empty"));
    }
    if !draft.models.iter().any(|model| !model.trim().is_empty()) {
        return Err(validation("provider must expose at least one model"));
    }
    Ok(())
}
