use serde::{Deserialize, Serialize};

use crate::model::provider::Provider;

/// Load-distribution strategy of a routing group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BalanceMode {
    RoundRobin,
    Random,
    Weighted,
    Failover,
    /// Success-and-performance adaptive routing — the gateway's default.
    Sapr,
}

/// One (provider, model) pair a group routes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupTarget {
    pub provider_id: String,
    pub model: String,
}

/// Why a target does (or does not) resolve against the loaded providers.
///
/// Computed client-side on demand, never persisted — the backend happily
/// keeps groups pointing at deleted providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetValidity {
    Valid,
    /// The provider id resolves nowhere in the loaded list.
    ProviderMissing,
    /// The provider exists but no longer offers the model.
    ModelMissing,
}

impl TargetValidity {
    pub fn is_valid(self) -> bool {
        self == Self::Valid
    }
}

impl GroupTarget {
    /// Resolve this target against the currently loaded provider list.
    pub fn validity(&self, providers: &[Provider]) -> TargetValidity {
        let Some(provider) = providers.iter().find(|p| p.id == self.provider_id) else {
            return TargetValidity::ProviderMissing;
        };
        if provider.models.iter().any(|m| m == &self.model) {
            TargetValidity::Valid
        } else {
            TargetValidity::ModelMissing
        }
    }
}

/// A routing group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub mode: BalanceMode,
    pub enabled: bool,
    pub targets: Vec<GroupTarget>,
}

impl Group {
    /// Indices and reasons of targets that no longer resolve.
    pub fn orphaned_targets(&self, providers: &[Provider]) -> Vec<(usize, TargetValidity)> {
        self.targets
            .iter()
            .enumerate()
            .filter_map(|(index, target)| {
                let validity = target.validity(providers);
                (!validity.is_valid()).then_some((index, validity))
            })
            .collect()
    }
}

/// Operator input for creating or updating a group.
///
/// `mode` is optional on purpose: an absent mode is sent as the backend's
/// own default (SAPR) rather than guessed here.
#[derive(Debug, Clone)]
pub struct GroupDraft {
    pub name: String,
    pub mode: Option<BalanceMode>,
    pub targets: Vec<GroupTarget>,
}
