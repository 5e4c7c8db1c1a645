//! Wire protocol for Raidlink.
//!
//! This crate defines what comes *back* from the backend and how it is
//! interpreted:
//!
//! - **Error codes** ([`ErrorCode`]) — the uniform error signal every
//!   result carries, spanning transport failures, server failures, and
//!   business failures.
//! - **Typed results** ([`ServiceResult`] and the concrete `*Result`
//!   structs) — the decoded response shapes, one per action family.
//! - **Decoding** ([`decode_outcome`]) — the mapping from a transport
//!   [`RawOutcome`](raidlink_transport::RawOutcome) to a typed result.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw bodies) and the facade
//! (typed action methods). It never touches the network itself.
//!
//! ```text
//! Transport (RawOutcome) → Protocol (typed result) → Facade caller
//! ```

mod codes;
mod decode;
mod results;

pub use codes::ErrorCode;
pub use decode::decode_outcome;
pub use results::{
    AchievementListResult, AckResult, AvailableIapPackageListResult,
    AvailableLootBoxListResult, BattleOutcome, ClearStageListResult,
    CurrencyListResult, CurrencyResult, EarnAchievementResult,
    FinishDuelResult, FinishStageResult, FormationListResult,
    FormationType, FriendListResult, ItemListResult, ItemResult, Player,
    PlayerAchievement, PlayerClearStage, PlayerCurrency, PlayerFormation,
    PlayerItem, PlayerResult, PlayerStamina, ServiceResult,
    ServiceTimeResult, StaminaListResult, StartDuelResult,
    StartStageResult, UnlockItemListResult,
};
