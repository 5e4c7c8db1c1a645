//! The uniform error signal carried by every typed result.

use serde::{Deserialize, Serialize};

/// Error code attached to every action result.
///
/// Three origins, one taxonomy:
///
/// - `Network`, `UnknownServer`, and `DecodeError` are assigned locally by
///   the decoder when the exchange or the body failed.
/// - Everything else is parsed from the backend's JSON payload: business
///   failures arrive inside an otherwise successful response.
/// - `None` means success.
///
/// The wire format is SCREAMING_SNAKE_CASE strings
/// (`"NONE"`, `"NOT_ENOUGH_SOFT_CURRENCY"`, ...). A code this client
/// doesn't know yet deserializes as [`ErrorCode::Unrecognized`] rather
/// than failing the whole decode — backends add codes faster than
/// clients update.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Success; no error.
    #[default]
    None,

    // -- Assigned locally by the decoder --
    /// The network exchange could not be established or completed.
    Network,
    /// The server answered, but with an HTTP-layer failure and no
    /// parseable domain payload.
    UnknownServer,
    /// The success body could not be parsed as the expected result shape.
    DecodeError,

    // -- Parsed from the backend payload --
    InvalidUsernameOrPassword,
    UsernameAlreadyExists,
    InvalidLoginToken,
    InvalidProfileName,
    PlayerNotFound,
    NotEnoughSoftCurrency,
    NotEnoughHardCurrency,
    NotEnoughStageStamina,
    NotEnoughArenaStamina,
    NotEnoughItems,
    InvalidItemData,
    InvalidEquipPosition,
    InvalidStageData,
    StageNotAvailable,
    InvalidFormationData,
    InvalidLootBoxData,
    InvalidIapPackageData,
    InvalidIapReceipt,
    InvalidAchievementData,
    AchievementNotCleared,
    AchievementRewardAlreadyEarned,
    InvalidBattleSession,
    CharactersNotDead,
    FriendRequestAlreadySent,

    /// A backend code this client build doesn't know.
    #[serde(other)]
    Unrecognized,
}

impl ErrorCode {
    /// Returns `true` when the code was assigned locally (transport or
    /// decode failure) rather than parsed from a backend payload.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Network | Self::UnknownServer | Self::DecodeError
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_none() {
        assert_eq!(ErrorCode::default(), ErrorCode::None);
    }

    #[test]
    fn test_serializes_as_screaming_snake_case() {
        assert_eq!(
            serde_json::to_string(&ErrorCode::None).unwrap(),
            "\"NONE\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::Network).unwrap(),
            "\"NETWORK\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::UnknownServer).unwrap(),
            "\"UNKNOWN_SERVER\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::DecodeError).unwrap(),
            "\"DECODE_ERROR\""
        );
        assert_eq!(
            serde_json::to_string(&ErrorCode::NotEnoughSoftCurrency)
                .unwrap(),
            "\"NOT_ENOUGH_SOFT_CURRENCY\""
        );
    }

    #[test]
    fn test_deserializes_known_codes() {
        let code: ErrorCode =
            serde_json::from_str("\"INVALID_LOGIN_TOKEN\"").unwrap();
        assert_eq!(code, ErrorCode::InvalidLoginToken);
    }

    #[test]
    fn test_unknown_code_becomes_unrecognized() {
        // A backend newer than this client must not break decoding.
        let code: ErrorCode =
            serde_json::from_str("\"SHINY_NEW_FAILURE\"").unwrap();
        assert_eq!(code, ErrorCode::Unrecognized);
    }

    #[test]
    fn test_is_local_covers_decoder_assigned_codes_only() {
        assert!(ErrorCode::Network.is_local());
        assert!(ErrorCode::UnknownServer.is_local());
        assert!(ErrorCode::DecodeError.is_local());
        assert!(!ErrorCode::None.is_local());
        assert!(!ErrorCode::NotEnoughHardCurrency.is_local());
        assert!(!ErrorCode::Unrecognized.is_local());
    }
}
