// Model catalog reads.

use relaydeck_api::{ApiClient, Error};

use super::unwrap_data;
use crate::model::GatewayModel;

/// Every model currently routable through the gateway. The endpoint may
/// answer bare or enveloped; both shapes land here normalized.
pub async fn list(api: &ApiClient) -> Result<Vec<GatewayModel>, Error> {
    let envelope = api.list_models().await?.into_envelope();
    let records = unwrap_data(envelope)?;
    Ok(records.into_iter().map(GatewayModel::from).collect())
}
