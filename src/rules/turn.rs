//! Turn commands: ability use, drawing, selecting, spending, ending a turn.
//!
//! All of these need `Stage::Playing`. Drawing, spending and the ability
//! act for the current player; selection names its player because either
//! side may mark a card in their own hand.

use crate::cards::{SelectError, ShrineCard, SpentShrine};
use crate::core::{Command, MatchState, PlayerId, Rejection, ShuffleSource, Stage};
use crate::deities::{AbilityUse, Deity};

impl<S: ShuffleSource> MatchState<S> {
    /// Use the current player's secondary ability.
    pub fn use_secondary_ability(&mut self) -> Result<AbilityUse, Rejection> {
        let player = self.current_player;
        self.run(
            player,
            Command::UseSecondaryAbility,
            |state| state.apply_ability(player),
            |state, used| state.describe_ability(player, *used),
        )
    }

    /// Draw a shrine for the current player. It is usable from next turn.
    pub fn draw_shrine_card(&mut self) -> Result<ShrineCard, Rejection> {
        let player = self.current_player;
        self.run(
            player,
            Command::DrawShrineCard,
            |state| {
                state.require_stage(Stage::Playing)?;
                let turn = state.turn_number;
                state.draw_into_hand(player, turn)
            },
            |_, card| {
                format!(
                    "{player} picked shrine {} (usable after this turn).",
                    card.shrine
                )
            },
        )
    }

    /// Mark the card at `index` in `player`'s hand as selected. Only usable
    /// cards can be selected.
    pub fn select_hand_card(
        &mut self,
        player: PlayerId,
        index: usize,
    ) -> Result<ShrineCard, Rejection> {
        self.run(
            player,
            Command::SelectHandCard { player, index },
            |state| {
                state.require_stage(Stage::Playing)?;
                let turn = state.turn_number;
                state.players[player]
                    .hand
                    .select(index, turn)
                    .copied()
                    .map_err(|err| match err {
                        SelectError::NotFound => Rejection::CardNotFound { player, index },
                        SelectError::NotUsable => Rejection::CardNotUsable { player, index },
                    })
            },
            |_, card| format!("{player} selected shrine card {}", card.shrine),
        )
    }

    /// Spend the current player's selected card, or failing that their
    /// oldest usable card. Spent cards are gone for good.
    pub fn spend_selected_or_eligible_card(&mut self) -> Result<SpentShrine, Rejection> {
        let player = self.current_player;
        self.run(
            player,
            Command::SpendSelectedOrEligibleCard,
            |state| {
                state.require_stage(Stage::Playing)?;
                let turn = state.turn_number;
                let enhanced = state.deity(player).is_some_and(Deity::enhances_shrines);
                let card = state.players[player]
                    .hand
                    .take_for_spend(turn)
                    .ok_or(Rejection::NoUsableCard { player })?;
                Ok(SpentShrine {
                    shrine: card.shrine,
                    enhanced,
                })
            },
            |_, spent| {
                let enhancement = if spent.enhanced {
                    " (Demeter-enhanced)"
                } else {
                    ""
                };
                format!(
                    "{player} used shrine card {}{enhancement} (one-time).",
                    spent.shrine
                )
            },
        )
    }

    /// End the current turn.
    ///
    /// Recharges cooldowns and ages clones for both players, clears the
    /// ending player's selection, then passes the turn. Returns the player
    /// whose turn it now is.
    pub fn end_turn(&mut self) -> Result<PlayerId, Rejection> {
        let player = self.current_player;
        self.run(
            player,
            Command::EndTurn,
            |state| {
                state.require_stage(Stage::Playing)?;
                let cooldown = state.config.cooldown_turns;
                for (_, ps) in state.players.iter_mut() {
                    if let Some(patron) = ps.patron.as_mut() {
                        patron.ability.advance_turn(cooldown);
                    }
                }
                state.players[player].hand.clear_selection();

                state.current_player = player.other();
                state.turn_number += 1;
                Ok(state.current_player)
            },
            |state, next| format!("Switched to {next} (Turn {}).", state.turn_number),
        )
    }

    fn apply_ability(&mut self, player: PlayerId) -> Result<AbilityUse, Rejection> {
        self.require_stage(Stage::Playing)?;
        let cooldown = self.config.cooldown_turns;
        let patron = self.players[player]
            .patron
            .as_mut()
            .ok_or(Rejection::NoDeity { player })?;
        let deity = patron.deity;
        patron
            .ability
            .activate(cooldown)
            .map_err(|turns_left| Rejection::AbilityNotReady { deity, turns_left })
    }

    fn describe_ability(&self, player: PlayerId, used: AbilityUse) -> String {
        let deity = self.deity(player).map_or("", Deity::name);
        match used {
            AbilityUse::Activated => format!(
                "{player} used {deity}'s ability! (Recharges in {} turns)",
                self.config.cooldown_turns
            ),
            AbilityUse::CloneSpawned => {
                format!("{player} spawned {deity} clone! (Active until despawned)")
            }
            AbilityUse::CloneDespawned => format!("{player} despawned {deity} clone!"),
            AbilityUse::AlwaysOn if self.deity(player) == Some(Deity::Apollo) => {
                format!("{player} has {deity}'s sight (always active)")
            }
            AbilityUse::AlwaysOn => format!("{player} has {deity}'s enhancement (always active)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{MatchConfig, MatchState, PlayerId, Rejection, Stage};
    use crate::deities::{AbilityUse, Deity};

    fn playing(one: Deity, two: Deity) -> MatchState {
        let mut state = MatchState::new(MatchConfig::new().with_seed(7)).unwrap();
        state.select_deity(PlayerId::ONE, one).unwrap();
        state.select_deity(PlayerId::TWO, two).unwrap();
        assert_eq!(state.stage(), Stage::Playing);
        state
    }

    #[test]
    fn test_turn_commands_rejected_before_play() {
        let mut state = MatchState::new(MatchConfig::default()).unwrap();

        let wrong_stage = Rejection::WrongStage {
            expected: Stage::Playing,
            actual: Stage::GodSelection,
        };
        assert_eq!(state.end_turn(), Err(wrong_stage.clone()));
        assert_eq!(state.draw_shrine_card(), Err(wrong_stage.clone()));
        assert_eq!(state.use_secondary_ability(), Err(wrong_stage));
        assert_eq!(state.turn_number(), 1);
        assert_eq!(state.pool_remaining(), 18);
    }

    #[test]
    fn test_ability_messages() {
        let mut state = playing(Deity::Hestia, Deity::Hera);

        assert_eq!(state.use_secondary_ability(), Ok(AbilityUse::Activated));
        assert_eq!(
            state.last_action(),
            "Player 1 used Hestia's ability! (Recharges in 3 turns)"
        );

        state.end_turn().unwrap();
        assert_eq!(state.use_secondary_ability(), Ok(AbilityUse::CloneSpawned));
        assert_eq!(
            state.last_action(),
            "Player 2 spawned Hera clone! (Active until despawned)"
        );

        state.end_turn().unwrap();
        assert!(state.use_secondary_ability().is_err());
        assert_eq!(
            state.last_action(),
            "Player 1: Hestia ability not ready, 1 turns left"
        );
    }

    #[test]
    fn test_passive_ability_messages() {
        let mut state = MatchState::new(MatchConfig::default()).unwrap();
        state.select_deity(PlayerId::ONE, Deity::Apollo).unwrap();
        state.select_deity(PlayerId::TWO, Deity::Demeter).unwrap();
        state
            .select_apollo_starting_shrine(PlayerId::ONE, Deity::Ares)
            .unwrap();

        assert_eq!(state.use_secondary_ability(), Ok(AbilityUse::AlwaysOn));
        assert_eq!(
            state.last_action(),
            "Player 1 has Apollo's sight (always active)"
        );
        state.end_turn().unwrap();
        assert_eq!(state.use_secondary_ability(), Ok(AbilityUse::AlwaysOn));
        assert_eq!(
            state.last_action(),
            "Player 2 has Demeter's enhancement (always active)"
        );
    }

    #[test]
    fn test_demeter_spend_is_enhanced() {
        let mut state = playing(Deity::Demeter, Deity::Ares);

        let spent = state.spend_selected_or_eligible_card().unwrap();
        assert!(spent.enhanced);
        assert!(state.last_action().contains("(Demeter-enhanced)"));
        assert!(state.hand(PlayerId::ONE).is_empty());
    }

    #[test]
    fn test_end_turn_clears_only_ending_selection() {
        let mut state = playing(Deity::Demeter, Deity::Demeter);

        state.select_hand_card(PlayerId::ONE, 0).unwrap();
        state.select_hand_card(PlayerId::TWO, 0).unwrap();
        state.end_turn().unwrap();

        assert_eq!(state.selected_card(PlayerId::ONE), None);
        assert_eq!(state.selected_card(PlayerId::TWO), Some(0));
        assert_eq!(state.last_action(), "Switched to Player 2 (Turn 2).");
    }

    #[test]
    fn test_spend_with_nothing_usable() {
        let mut state = playing(Deity::Ares, Deity::Athena);
        state.draw_shrine_card().unwrap();

        assert_eq!(
            state.spend_selected_or_eligible_card(),
            Err(Rejection::NoUsableCard {
                player: PlayerId::ONE
            })
        );
        assert_eq!(state.hand(PlayerId::ONE).len(), 1);
    }
}
