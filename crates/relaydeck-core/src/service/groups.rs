// Routing group management.

use relaydeck_api::{ApiClient, Error};

use super::{ensure_ok, lenient_page, unwrap_data, validation};
use crate::convert;
use crate::model::{Group, GroupDraft, Page};

pub async fn page(api: &ApiClient, current: u64, size: u64) -> Result<Page<Group>, Error> {
    let envelope = api.list_groups(current, size).await?;
    Ok(lenient_page(envelope, current, size))
}

pub async fn list(api: &ApiClient) -> Result<Vec<Group>, Error> {
    let envelope = api.all_groups().await?.into_envelope();
    let records = unwrap_data(envelope)?;
    Ok(records.into_iter().map(Group::from).collect())
}

pub async fn create(api: &ApiClient, draft: &GroupDraft) -> Result<Group, Error> {
    validate(draft)?;
    let envelope = api.create_group(&convert::group_to_wire(draft)).await?;
    unwrap_data(envelope).map(Group::from)
}

pub async fn update(api: &ApiClient, id: &str, draft: &GroupDraft) -> Result<Group, Error> {
    validate(draft)?;
    let envelope = api.update_group(id, &convert::group_to_wire(draft)).await?;
    unwrap_data(envelope).map(Group::from)
}

pub async fn delete(api: &ApiClient, id: &str) -> Result<(), Error> {
    let envelope = api.delete_group(id).await?;
    ensure_ok(&envelope)
}

fn validate(draft: &GroupDraft) -> Result<(), Error> {
    if draft.name.trim().is_empty() {
        return Err(validation("group name must not be empty"));
    }
    if draft.targets.is_empty() {
        return Err(validation("group must route to at least one target"));
    }
    Ok(())
}
