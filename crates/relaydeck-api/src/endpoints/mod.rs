// Endpoint surface of the gateway admin API, one module per entity.
// Each module adds inherent methods to `ApiClient` that name paths and
// parameters; envelope interpretation stays out of this crate.

mod auth;
mod breakers;
mod groups;
pub(crate) mod logs;
mod models;
mod providers;
mod tokens;
