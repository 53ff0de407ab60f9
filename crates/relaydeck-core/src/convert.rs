// ── Wire-to-domain conversions ──
//
// Bridges raw `relaydeck_api` DTOs into canonical domain types and builds
// the write payloads going the other way. The enum tables here mirror the
// gateway's own constants; both directions are total.

use secrecy::ExposeSecret;

use relaydeck_api::types::{
    BreakerDto, GroupDto, GroupItemDto, GroupWrite, LogDto, ModelDto, PageDto, ProviderDto,
    ProviderWrite, TokenDto,
};

use crate::model::{
    AccessToken, BalanceMode, BreakerHealth, BreakerStatus, CircuitState, GatewayModel, Group,
    GroupDraft, GroupTarget, ManualOverride, Page, Provider, ProviderDraft, ProviderKind,
    ProviderStatus, RequestLog,
};

// ── Balance mode ───────────────────────────────────────────────────

/// Map a wire balance-mode code into the domain enum.
///
/// Unrecognized codes fall back to round robin — the gateway's own
/// inbound default. Note the asymmetry with [`balance_mode_to_wire`]:
/// this is observed backend behavior, preserved, not corrected.
pub fn balance_mode_from_wire(code: i64) -> BalanceMode {
    match code {
        2 => BalanceMode::Random,
        3 => BalanceMode::Weighted,
        4 => BalanceMode::Failover,
        5 => BalanceMode::Sapr,
        _ => BalanceMode::RoundRobin,
    }
}

/// Map a domain balance mode (possibly absent) onto its wire code.
///
/// A missing mode is sent as SAPR (5), the gateway's default strategy.
pub fn balance_mode_to_wire(mode: Option<BalanceMode>) -> i64 {
    match mode {
        Some(BalanceMode::RoundRobin) => 1,
        Some(BalanceMode::Random) => 2,
        Some(BalanceMode::Weighted) => 3,
        Some(BalanceMode::Failover) => 4,
        Some(BalanceMode::Sapr) | None => 5,
    }
}

// ── Provider type ──────────────────────────────────────────────────

impl ProviderKind {
    /// Decode the wire type code. Unknown codes are kept, not coerced.
    pub fn from_wire(code: i64) -> Self {
        match code {
            0 => Self::OpenAiChat,
            1 => Self::OpenAiResponse,
            2 => Self::Anthropic,
            3 => Self::Gemini,
            4 => Self::NewApi,
            other => Self::Other(other),
        }
    }

    /// The wire code. [`Other`](Self::Other) passes its code through
    /// unchanged so a round trip never rewrites backend data.
    pub fn wire_code(self) -> i64 {
        match self {
            Self::OpenAiChat => 0,
            Self::OpenAiResponse => 1,
            Self::Anthropic => 2,
            Self::Gemini => 3,
            Self::NewApi => 4,
            Self::Other(code) => code,
        }
    }
}

// ── Model list ─────────────────────────────────────────────────────

/// Split the wire's comma-joined model list.
///
/// Lossy if a model name itself contains a comma — a known limitation of
/// the wire format, not corrected here.
pub fn split_models(raw: Option<&str>) -> Vec<String> {
    let Some(joined) = raw else {
        return Vec::new();
    };
    joined
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join a model list back into the wire format.
pub fn join_models(models: &[String]) -> String {
    models.join(",")
}

// ── Pagination ─────────────────────────────────────────────────────

fn non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

/// Convert a wire page, mapping each record into its domain type.
pub(crate) fn page_from_dto<D, T: From<D>>(dto: PageDto<D>) -> Page<T> {
    Page {
        records: dto.records.into_iter().map(T::from).collect(),
        total: non_negative(dto.total),
        size: non_negative(dto.size),
        current: non_negative(dto.current),
        pages: non_negative(dto.pages),
    }
}

// ── Provider ───────────────────────────────────────────────────────

impl From<ProviderDto> for Provider {
    fn from(dto: ProviderDto) -> Self {
        Provider {
            id: dto.id,
            name: dto.name,
            kind: ProviderKind::from_wire(dto.kind),
            base_url: dto.base_url,
            api_key: dto.api_key,
            models: split_models(dto.model_name.as_deref()),
            status: ProviderStatus::from_enabled(dto.is_enabled),
            created_at: dto.created_at,
        }
    }
}

/// Build the provider write payload from operator input.
pub(crate) fn provider_to_wire(draft: &ProviderDraft) -> ProviderWrite {
    ProviderWrite {
        name: draft.name.clone(),
        kind: draft.kind.wire_code(),
        base_url: draft.base_url.clone(),
        api_key: draft.api_key.expose_secret().to_owned(),
        model_name: join_models(&draft.models),
        is_enabled: draft.enabled,
    }
}

// ── Group ──────────────────────────────────────────────────────────

impl From<GroupDto> for Group {
    fn from(dto: GroupDto) -> Self {
        Group {
            id: dto.id,
            name: dto.name,
            mode: balance_mode_from_wire(dto.balance_mode),
            enabled: dto.is_enabled,
            targets: dto
                .group_items
                .into_iter()
                .map(|item| GroupTarget {
                    provider_id: item.provider_id,
                    model: item.model_name,
                })
                .collect(),
        }
    }
}

/// Build the group write payload from operator input.
///
/// Weight and priority are always defaulted (1, 0) by this layer — the
/// console never edits them.
pub(crate) fn group_to_wire(draft: &GroupDraft) -> GroupWrite {
    GroupWrite {
        name: draft.name.clone(),
        balance_mode: balance_mode_to_wire(draft.mode),
        group_items: draft
            .targets
            .iter()
            .map(|target| GroupItemDto {
                provider_id: target.provider_id.clone(),
                model_name: target.model.clone(),
                weight: 1,
                priority: 0,
            })
            .collect(),
    }
}

// ── Circuit breaker ────────────────────────────────────────────────

impl From<BreakerDto> for BreakerStatus {
    fn from(dto: BreakerDto) -> Self {
        let manual_override = dto.manual_override.then(|| ManualOverride {
            operator: dto.override_operator,
            reason: dto.override_reason,
            until: dto.override_until,
        });

        BreakerStatus {
            provider_id: dto.provider_id,
            provider_name: dto.provider_name,
            state: CircuitState::from_wire(&dto.circuit_state),
            health: BreakerHealth {
                failure_count: non_negative(dto.failure_count),
                success_count: non_negative(dto.success_count),
                failure_rate: dto.failure_rate,
                last_failure_at: dto.last_failure_at,
                opened_at: dto.opened_at,
            },
            manual_override,
        }
    }
}

// ── Access token ───────────────────────────────────────────────────

impl From<TokenDto> for AccessToken {
    fn from(dto: TokenDto) -> Self {
        // The secret `token` field is intentionally dropped here: it only
        // exists on the create path, which handles it separately.
        AccessToken {
            id: dto.id,
            name: dto.name,
            masked_token: dto.masked_token,
            enabled: dto.is_enabled,
            expires_at: dto.expires_at,
            created_at: dto.created_at,
            last_used_at: dto.last_used_at,
        }
    }
}

// ── Request log ────────────────────────────────────────────────────

impl From<LogDto> for RequestLog {
    fn from(dto: LogDto) -> Self {
        RequestLog {
            id: dto.id,
            provider_id: dto.provider_id,
            provider_name: dto.provider_name,
            group_name: dto.group_name,
            model: dto.model_name,
            status_code: dto.status_code.and_then(|code| u16::try_from(code).ok()),
            success: dto.success,
            latency_ms: dto.latency_ms.and_then(|ms| u64::try_from(ms).ok()),
            prompt_tokens: dto.prompt_tokens.and_then(|n| u64::try_from(n).ok()),
            completion_tokens: dto.completion_tokens.and_then(|n| u64::try_from(n).ok()),
            total_tokens: dto.total_tokens.and_then(|n| u64::try_from(n).ok()),
            cost: dto.cost,
            created_at: dto.created_at,
        }
    }
}

// ── Model catalog ──────────────────────────────────────────────────

impl From<ModelDto> for GatewayModel {
    fn from(dto: ModelDto) -> Self {
        GatewayModel {
            name: dto.name,
            provider_id: dto.provider_id,
            provider_name: dto.provider_name,
        }
    }
}
