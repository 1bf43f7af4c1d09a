//! Relay hooks: configuration and the recipient capability interface.
//!
//! A hooks configuration is a bitmask over the closed set {PreMint, PostMint}
//! with one opaque payload per bit. It travels on the wire as
//! [`HooksConfig`] and is validated into a [`HookSet`] before use; bits
//! outside the defined set are rejected at that point, and payloads for
//! disabled bits are dropped.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Addr, Binary, StdResult, Uint128};
use thiserror::Error;

#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum HookKind {
    PreMint,
    PostMint,
}

impl HookKind {
    pub const ALL: [HookKind; 2] = [HookKind::PreMint, HookKind::PostMint];

    pub const fn bit(self) -> u8 {
        match self {
            HookKind::PreMint => 0b01,
            HookKind::PostMint => 0b10,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            HookKind::PreMint => "pre_mint",
            HookKind::PostMint => "post_mint",
        }
    }
}

/// Every bit a hooks configuration may set.
pub const DEFINED_HOOK_BITS: u8 = HookKind::PreMint.bit() | HookKind::PostMint.bit();

#[derive(Error, Debug, PartialEq)]
pub enum HookConfigError {
    #[error("Invalid hook config: undefined bits set in flags {flags:#04x}")]
    UndefinedBits { flags: u8 },
}

/// Hooks configuration as carried on the wire.
#[cw_serde]
#[derive(Default)]
pub struct HooksConfig {
    pub flags: u8,
    pub pre_mint_data: Binary,
    pub post_mint_data: Binary,
}

impl HooksConfig {
    pub fn validate(&self) -> Result<HookSet, HookConfigError> {
        HookSet::try_from(self.clone())
    }
}

/// Validated hooks: one optional payload per defined hook point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HookSet {
    pre_mint: Option<Binary>,
    post_mint: Option<Binary>,
}

impl HookSet {
    pub fn payload(&self, kind: HookKind) -> Option<&Binary> {
        match kind {
            HookKind::PreMint => self.pre_mint.as_ref(),
            HookKind::PostMint => self.post_mint.as_ref(),
        }
    }

    pub fn is_enabled(&self, kind: HookKind) -> bool {
        self.payload(kind).is_some()
    }

    pub fn flags(&self) -> u8 {
        HookKind::ALL
            .iter()
            .filter(|kind| self.is_enabled(**kind))
            .fold(0, |flags, kind| flags | kind.bit())
    }

    pub fn to_config(&self) -> HooksConfig {
        HooksConfig {
            flags: self.flags(),
            pre_mint_data: self.pre_mint.clone().unwrap_or_default(),
            post_mint_data: self.post_mint.clone().unwrap_or_default(),
        }
    }
}

impl TryFrom<HooksConfig> for HookSet {
    type Error = HookConfigError;

    fn try_from(config: HooksConfig) -> Result<Self, Self::Error> {
        if config.flags & !DEFINED_HOOK_BITS != 0 {
            return Err(HookConfigError::UndefinedBits {
                flags: config.flags,
            });
        }
        let enabled = |kind: HookKind| config.flags & kind.bit() != 0;
        Ok(HookSet {
            pre_mint: enabled(HookKind::PreMint).then(|| config.pre_mint_data.clone()),
            post_mint: enabled(HookKind::PostMint).then(|| config.post_mint_data.clone()),
        })
    }
}

// ============================================================================
// Recipient capability interface
// ============================================================================

/// Arguments passed to every recipient capability.
#[cw_serde]
pub struct RelayHookMsg {
    pub token: String,
    pub from: String,
    pub to: String,
    pub amount: Uint128,
    pub data: Binary,
}

/// Execute interface a recipient may implement. All calls are best-effort:
/// the bridge ignores both their result and their absence.
#[cw_serde]
pub enum RecipientExecuteMsg {
    BeforeRelay(RelayHookMsg),
    AfterRelay(RelayHookMsg),
    RelayCallback(RelayHookMsg),
}

impl RecipientExecuteMsg {
    pub fn label(&self) -> &'static str {
        match self {
            RecipientExecuteMsg::BeforeRelay(_) => "before_relay",
            RecipientExecuteMsg::AfterRelay(_) => "after_relay",
            RecipientExecuteMsg::RelayCallback(_) => "relay_callback",
        }
    }

    pub fn hook(kind: HookKind, args: RelayHookMsg) -> Self {
        match kind {
            HookKind::PreMint => RecipientExecuteMsg::BeforeRelay(args),
            HookKind::PostMint => RecipientExecuteMsg::AfterRelay(args),
        }
    }

    pub fn to_binary(&self) -> StdResult<Binary> {
        to_json_binary(self)
    }
}

impl RelayHookMsg {
    pub fn new(token: &Addr, from: &str, to: &Addr, amount: Uint128, data: Binary) -> Self {
        Self {
            token: token.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            amount,
            data,
        }
    }
}
