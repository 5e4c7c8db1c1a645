//! Typed result shapes for every backend action.
//!
//! Every result carries the uniform `errorCode` field; the rest is
//! action-specific domain data. All shapes are default-constructible to a
//! zero value so the decoder can synthesize an error-only instance when
//! the exchange failed and no domain data exists.
//!
//! Wire fields are camelCase; missing fields fall back to their zero
//! value rather than failing the decode (`#[serde(default)]` at the
//! container level).

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::ErrorCode;

/// Capability set shared by every decoded action result.
///
/// The two requirements are exactly what the decoder needs:
/// a zero-value constructor (`Default`) so transport failures can produce
/// an error-only instance, and an error-code field so the failure signal
/// is uniform across all result shapes.
pub trait ServiceResult:
    Default + DeserializeOwned + Send + 'static
{
    /// The error code carried by this result.
    fn error_code(&self) -> ErrorCode;

    /// Overwrites the error code (used by the decoder when synthesizing
    /// failure results).
    fn set_error_code(&mut self, code: ErrorCode);

    /// A result is successful iff no error code is set.
    fn success(&self) -> bool {
        self.error_code() == ErrorCode::None
    }

    /// Builds a zero-value instance carrying only `code`.
    fn from_error(code: ErrorCode) -> Self {
        let mut result = Self::default();
        result.set_error_code(code);
        result
    }
}

/// Wires up [`ServiceResult`] for result structs with an `error_code`
/// field.
macro_rules! impl_service_result {
    ($($ty:ty),+ $(,)?) => {
        $(impl ServiceResult for $ty {
            fn error_code(&self) -> ErrorCode {
                self.error_code
            }

            fn set_error_code(&mut self, code: ErrorCode) {
                self.error_code = code;
            }
        })+
    };
}

// ---------------------------------------------------------------------------
// Domain entities
// ---------------------------------------------------------------------------

/// A player profile as the backend reports it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Player {
    pub id: String,
    pub profile_name: String,
    /// Present only in login-family responses; empty elsewhere.
    pub login_token: String,
    pub exp: i32,
    pub selected_formation: String,
    pub selected_arena_formation: String,
    pub arena_score: i32,
    pub highest_arena_rank: i32,
}

/// An item (or character) instance owned by a player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerItem {
    pub id: String,
    pub data_id: String,
    pub amount: i32,
    pub exp: i32,
    /// Id of the equipment attached to this character, if any.
    pub equip_item_id: String,
    pub equip_position: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerCurrency {
    pub data_id: String,
    pub amount: i32,
    pub purchased_amount: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStamina {
    pub data_id: String,
    pub amount: i32,
    /// Unix timestamp of the last recovery tick.
    pub recovered_time: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerAchievement {
    pub data_id: String,
    pub progress: i32,
    pub earned: bool,
}

/// One slot assignment in a named formation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerFormation {
    pub data_id: String,
    pub position: i32,
    pub item_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerClearStage {
    pub data_id: String,
    pub best_rating: i32,
}

/// How a battle ended, as reported by the client when finishing a stage
/// or duel.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleOutcome {
    /// Abandoned or still undecided.
    #[default]
    None,
    Lose,
    Win,
}

/// Which formation slot set an action targets.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FormationType {
    #[default]
    Stage,
    Arena,
}

// ---------------------------------------------------------------------------
// Results — one struct per action family
// ---------------------------------------------------------------------------

/// Result for actions that return nothing beyond the error signal
/// (friend requests, accepts, declines, deletes).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AckResult {
    pub error_code: ErrorCode,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceTimeResult {
    pub error_code: ErrorCode,
    /// Server-side Unix timestamp, for client clock correction.
    pub service_time: i64,
}

/// Result for login-family and profile actions. The player's fields are
/// flattened into the top level of the JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerResult {
    pub error_code: ErrorCode,
    #[serde(flatten)]
    pub player: Player,
}

/// Result for actions that mutate the player's item box. The backend
/// reports the delta, not the full inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemResult {
    pub error_code: ErrorCode,
    pub created_items: Vec<PlayerItem>,
    pub updated_items: Vec<PlayerItem>,
    pub deleted_item_ids: Vec<String>,
    pub updated_currencies: Vec<PlayerCurrency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyResult {
    pub error_code: ErrorCode,
    pub updated_currencies: Vec<PlayerCurrency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ItemListResult {
    pub error_code: ErrorCode,
    pub items: Vec<PlayerItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CurrencyListResult {
    pub error_code: ErrorCode,
    pub currencies: Vec<PlayerCurrency>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaminaListResult {
    pub error_code: ErrorCode,
    pub staminas: Vec<PlayerStamina>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AchievementListResult {
    pub error_code: ErrorCode,
    pub achievements: Vec<PlayerAchievement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormationListResult {
    pub error_code: ErrorCode,
    pub formations: Vec<PlayerFormation>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnlockItemListResult {
    pub error_code: ErrorCode,
    pub unlock_item_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClearStageListResult {
    pub error_code: ErrorCode,
    pub clear_stages: Vec<PlayerClearStage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailableLootBoxListResult {
    pub error_code: ErrorCode,
    pub loot_box_ids: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailableIapPackageListResult {
    pub error_code: ErrorCode,
    pub iap_package_ids: Vec<String>,
}

/// Result for helper, friend, friend-request, opponent, and player-search
/// listings — all of them return player profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FriendListResult {
    pub error_code: ErrorCode,
    pub friends: Vec<Player>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartStageResult {
    pub error_code: ErrorCode,
    /// Battle session handle, echoed back when finishing the stage.
    pub session: String,
    pub stamina: PlayerStamina,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinishStageResult {
    pub error_code: ErrorCode,
    pub rating: i32,
    pub reward_player_exp: i32,
    pub reward_soft_currency: i32,
    pub reward_items: Vec<PlayerItem>,
    pub clear_stage: PlayerClearStage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartDuelResult {
    pub error_code: ErrorCode,
    pub session: String,
    pub stamina: PlayerStamina,
    pub opponent: Player,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinishDuelResult {
    pub error_code: ErrorCode,
    pub reward_soft_currency: i32,
    pub updated_arena_score: i32,
    pub reward_items: Vec<PlayerItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EarnAchievementResult {
    pub error_code: ErrorCode,
    pub reward_player_exp: i32,
    pub reward_currencies: Vec<PlayerCurrency>,
    pub reward_items: Vec<PlayerItem>,
    pub achievement: PlayerAchievement,
}

impl_service_result!(
    AckResult,
    ServiceTimeResult,
    PlayerResult,
    ItemResult,
    CurrencyResult,
    ItemListResult,
    CurrencyListResult,
    StaminaListResult,
    AchievementListResult,
    FormationListResult,
    UnlockItemListResult,
    ClearStageListResult,
    AvailableLootBoxListResult,
    AvailableIapPackageListResult,
    FriendListResult,
    StartStageResult,
    FinishStageResult,
    StartDuelResult,
    FinishDuelResult,
    EarnAchievementResult,
);
