//! One thin method per backend action.
//!
//! Every method here is mechanical: build the payload object from typed
//! arguments, delegate to the shared pipeline in `client.rs`, return the
//! typed result. Action names and payload field names are the backend's
//! wire contract; the grouping mirrors the backend's own service areas.

use std::collections::HashMap;

use raidlink_protocol::{
    AchievementListResult, AckResult, AvailableIapPackageListResult,
    AvailableLootBoxListResult, BattleOutcome, ClearStageListResult,
    CurrencyListResult, CurrencyResult, EarnAchievementResult,
    FinishDuelResult, FinishStageResult, FormationListResult,
    FormationType, FriendListResult, ItemListResult, ItemResult,
    PlayerResult, ServiceResult, ServiceTimeResult, StaminaListResult,
    StartDuelResult, StartStageResult, UnlockItemListResult,
};
use serde_json::json;

use crate::ServiceClient;

impl ServiceClient {
    // -----------------------------------------------------------------------
    // Listing
    // -----------------------------------------------------------------------

    /// Fetches the backend's current time, for client clock correction.
    /// Unauthenticated.
    pub async fn get_service_time(&self) -> ServiceTimeResult {
        self.get_decoded("service-time", "").await
    }

    /// Fetches the player's achievement progress.
    pub async fn get_achievement_list(
        &self,
        token: &str,
    ) -> AchievementListResult {
        self.get_decoded("achievements", token).await
    }

    /// Fetches the player's item box (items and characters).
    pub async fn get_item_list(&self, token: &str) -> ItemListResult {
        self.get_decoded("items", token).await
    }

    /// Fetches the player's currency balances.
    pub async fn get_currency_list(
        &self,
        token: &str,
    ) -> CurrencyListResult {
        self.get_decoded("currencies", token).await
    }

    /// Fetches the player's stamina pools.
    pub async fn get_stamina_list(
        &self,
        token: &str,
    ) -> StaminaListResult {
        self.get_decoded("staminas", token).await
    }

    /// Fetches the player's formation slot assignments.
    pub async fn get_formation_list(
        &self,
        token: &str,
    ) -> FormationListResult {
        self.get_decoded("formations", token).await
    }

    /// Fetches the content the player has unlocked.
    pub async fn get_unlock_item_list(
        &self,
        token: &str,
    ) -> UnlockItemListResult {
        self.get_decoded("unlock-items", token).await
    }

    /// Fetches the stages the player has cleared, with best ratings.
    pub async fn get_clear_stage_list(
        &self,
        token: &str,
    ) -> ClearStageListResult {
        self.get_decoded("clear-stages", token).await
    }

    // -----------------------------------------------------------------------
    // Auth
    // -----------------------------------------------------------------------

    /// Logs in with username and password. Unauthenticated; the result
    /// carries the fresh login token.
    pub async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> PlayerResult {
        let payload = json!({
            "username": username,
            "password": password,
        });
        self.post_decoded("login", payload, "").await
    }

    /// Creates a new account. Unauthenticated.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> PlayerResult {
        let payload = json!({
            "username": username,
            "password": password,
        });
        self.post_decoded("register", payload, "").await
    }

    /// Registers, then logs in with the same credentials.
    ///
    /// The login is only issued if registration succeeds; a failing
    /// registration result is forwarded unchanged and no login request
    /// goes out.
    pub async fn register_or_login(
        &self,
        username: &str,
        password: &str,
    ) -> PlayerResult {
        let registered = self.register(username, password).await;
        if !registered.success() {
            return registered;
        }
        self.login(username, password).await
    }

    /// Logs in (or lazily creates) a guest account keyed by device id.
    pub async fn guest_login(&self, device_id: &str) -> PlayerResult {
        let payload = json!({ "deviceId": device_id });
        self.post_decoded("guest-login", payload, "").await
    }

    /// Checks a stored token against the backend, optionally rotating it.
    pub async fn validate_login_token(
        &self,
        token: &str,
        refresh_token: bool,
    ) -> PlayerResult {
        let payload = json!({ "refreshToken": refresh_token });
        self.post_decoded("validate-login-token", payload, token)
            .await
    }

    /// Sets the player's public profile name.
    pub async fn set_profile_name(
        &self,
        token: &str,
        profile_name: &str,
    ) -> PlayerResult {
        let payload = json!({ "profileName": profile_name });
        self.post_decoded("set-profile-name", payload, token).await
    }

    // -----------------------------------------------------------------------
    // Item
    // -----------------------------------------------------------------------

    /// Levels an item up by consuming material items.
    pub async fn levelup_item(
        &self,
        token: &str,
        item_id: &str,
        materials: &HashMap<String, i32>,
    ) -> ItemResult {
        let payload = json!({
            "itemId": item_id,
            "materials": materials,
        });
        self.post_decoded("levelup-item", payload, token).await
    }

    /// Evolves an item into its next form, consuming materials.
    pub async fn evolve_item(
        &self,
        token: &str,
        item_id: &str,
        materials: &HashMap<String, i32>,
    ) -> ItemResult {
        let payload = json!({
            "itemId": item_id,
            "materials": materials,
        });
        self.post_decoded("evolve-item", payload, token).await
    }

    /// Sells items for soft currency. Keys are item ids, values amounts.
    pub async fn sell_items(
        &self,
        token: &str,
        items: &HashMap<String, i32>,
    ) -> ItemResult {
        let payload = json!({ "items": items });
        self.post_decoded("sell-items", payload, token).await
    }

    /// Equips an equipment item on a character at a position.
    pub async fn equip_item(
        &self,
        token: &str,
        character_id: &str,
        equipment_id: &str,
        equip_position: &str,
    ) -> ItemResult {
        let payload = json!({
            "characterId": character_id,
            "equipmentId": equipment_id,
            "equipPosition": equip_position,
        });
        self.post_decoded("equip-item", payload, token).await
    }

    /// Removes an equipment item from whoever carries it.
    pub async fn unequip_item(
        &self,
        token: &str,
        equipment_id: &str,
    ) -> ItemResult {
        let payload = json!({ "equipmentId": equipment_id });
        self.post_decoded("unequip-item", payload, token).await
    }

    /// Fetches which loot boxes are currently purchasable.
    /// Unauthenticated.
    pub async fn get_available_loot_box_list(
        &self,
    ) -> AvailableLootBoxListResult {
        self.get_decoded("available-lootboxes", "").await
    }

    /// Fetches which IAP packages are currently purchasable.
    /// Unauthenticated.
    pub async fn get_available_iap_package_list(
        &self,
    ) -> AvailableIapPackageListResult {
        self.get_decoded("available-iap-packages", "").await
    }

    /// Opens a loot box; `pack_index` picks the purchase pack.
    pub async fn open_loot_box(
        &self,
        token: &str,
        loot_box_data_id: &str,
        pack_index: i32,
    ) -> ItemResult {
        let payload = json!({
            "lootBoxDataId": loot_box_data_id,
            "packIndex": pack_index,
        });
        self.post_decoded("open-lootbox", payload, token).await
    }

    /// Claims the reward of a cleared achievement.
    pub async fn earn_achievement_reward(
        &self,
        token: &str,
        achievement_id: &str,
    ) -> EarnAchievementResult {
        let payload = json!({ "achievementId": achievement_id });
        self.post_decoded("earn-achievement-reward", payload, token)
            .await
    }

    // -----------------------------------------------------------------------
    // Social
    // -----------------------------------------------------------------------

    /// Fetches players who can assist in stage battles.
    pub async fn get_helper_list(&self, token: &str) -> FriendListResult {
        self.get_decoded("helpers", token).await
    }

    /// Fetches the player's friends.
    pub async fn get_friend_list(&self, token: &str) -> FriendListResult {
        self.get_decoded("friends", token).await
    }

    /// Fetches pending incoming friend requests.
    pub async fn get_friend_request_list(
        &self,
        token: &str,
    ) -> FriendListResult {
        self.get_decoded("friend-requests", token).await
    }

    /// Searches players by profile name.
    pub async fn find_player(
        &self,
        token: &str,
        profile_name: &str,
    ) -> FriendListResult {
        let payload = json!({ "profileName": profile_name });
        self.post_decoded("find-player", payload, token).await
    }

    /// Sends a friend request to another player.
    pub async fn friend_request(
        &self,
        token: &str,
        target_player_id: &str,
    ) -> AckResult {
        let payload = json!({ "targetPlayerId": target_player_id });
        self.post_decoded("friend-request", payload, token).await
    }

    /// Accepts a pending friend request.
    pub async fn friend_accept(
        &self,
        token: &str,
        target_player_id: &str,
    ) -> AckResult {
        let payload = json!({ "targetPlayerId": target_player_id });
        self.post_decoded("friend-accept", payload, token).await
    }

    /// Declines a pending friend request.
    pub async fn friend_decline(
        &self,
        token: &str,
        target_player_id: &str,
    ) -> AckResult {
        let payload = json!({ "targetPlayerId": target_player_id });
        self.post_decoded("friend-decline", payload, token).await
    }

    /// Removes an existing friend.
    pub async fn friend_delete(
        &self,
        token: &str,
        target_player_id: &str,
    ) -> AckResult {
        let payload = json!({ "targetPlayerId": target_player_id });
        self.post_decoded("friend-delete", payload, token).await
    }

    // -----------------------------------------------------------------------
    // Battle
    // -----------------------------------------------------------------------

    /// Starts a stage battle, optionally borrowing a helper's character.
    pub async fn start_stage(
        &self,
        token: &str,
        stage_data_id: &str,
        helper_player_id: &str,
    ) -> StartStageResult {
        let payload = json!({
            "stageDataId": stage_data_id,
            "helperPlayerId": helper_player_id,
        });
        self.post_decoded("start-stage", payload, token).await
    }

    /// Reports a stage battle's outcome and collects rewards.
    pub async fn finish_stage(
        &self,
        token: &str,
        session: &str,
        battle_outcome: BattleOutcome,
        dead_characters: i32,
    ) -> FinishStageResult {
        let payload = json!({
            "session": session,
            "battleResult": battle_outcome,
            "deadCharacters": dead_characters,
        });
        self.post_decoded("finish-stage", payload, token).await
    }

    /// Revives the party mid-battle for hard currency.
    pub async fn revive_characters(&self, token: &str) -> CurrencyResult {
        self.post_decoded("revive-characters", json!({}), token)
            .await
    }

    /// Selects which named formation the player fights with.
    pub async fn select_formation(
        &self,
        token: &str,
        formation_name: &str,
        formation_type: FormationType,
    ) -> PlayerResult {
        let payload = json!({
            "formationName": formation_name,
            "formationType": formation_type,
        });
        self.post_decoded("select-formation", payload, token).await
    }

    /// Places a character into a formation slot.
    pub async fn set_formation(
        &self,
        token: &str,
        character_id: &str,
        formation_name: &str,
        position: i32,
    ) -> FormationListResult {
        let payload = json!({
            "characterId": character_id,
            "formationName": formation_name,
            "position": position,
        });
        self.post_decoded("set-formation", payload, token).await
    }

    // -----------------------------------------------------------------------
    // Arena
    // -----------------------------------------------------------------------

    /// Fetches arena opponents near the player's score.
    pub async fn get_opponent_list(
        &self,
        token: &str,
    ) -> FriendListResult {
        self.get_decoded("opponents", token).await
    }

    /// Starts an arena duel against another player.
    pub async fn start_duel(
        &self,
        token: &str,
        target_player_id: &str,
    ) -> StartDuelResult {
        let payload = json!({ "targetPlayerId": target_player_id });
        self.post_decoded("start-duel", payload, token).await
    }

    /// Reports a duel's outcome and collects rewards.
    pub async fn finish_duel(
        &self,
        token: &str,
        session: &str,
        battle_outcome: BattleOutcome,
        dead_characters: i32,
    ) -> FinishDuelResult {
        let payload = json!({
            "session": session,
            "battleResult": battle_outcome,
            "deadCharacters": dead_characters,
        });
        self.post_decoded("finish-duel", payload, token).await
    }

    // -----------------------------------------------------------------------
    // IAP
    // -----------------------------------------------------------------------

    /// Redeems an App Store purchase receipt for package contents.
    pub async fn buy_goods_ios(
        &self,
        token: &str,
        iap_package_data_id: &str,
        receipt: &str,
    ) -> ItemResult {
        let payload = json!({
            "iapPackageDataId": iap_package_data_id,
            "receipt": receipt,
        });
        self.post_decoded("ios-buy-goods", payload, token).await
    }

    /// Redeems a Google Play purchase (signed payload) for package
    /// contents.
    pub async fn buy_goods_google_play(
        &self,
        token: &str,
        iap_package_data_id: &str,
        data: &str,
        signature: &str,
    ) -> ItemResult {
        let payload = json!({
            "iapPackageDataId": iap_package_data_id,
            "data": data,
            "signature": signature,
        });
        self.post_decoded("google-play-buy-goods", payload, token)
            .await
    }
}
