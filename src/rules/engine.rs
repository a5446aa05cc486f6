//! Command dispatch and legal-command enumeration.
//!
//! Hosts that drive a match from serialized input (replays, a network peer,
//! a scripted test) send `Command` values through [`MatchState::apply`]
//! instead of calling each method. `legal_commands` lists what would be
//! accepted right now:
//! - deity picks for the selector during god selection
//! - every shrine for the front Apollo player during Apollo selection
//! - ability, draw, hand selection, spend and end turn during play

use crate::core::{Command, MatchState, Outcome, PlayerId, Rejection, ShuffleSource, Stage};
use crate::deities::Deity;

impl<S: ShuffleSource> MatchState<S> {
    /// Apply a command.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, Rejection> {
        match command {
            Command::SelectDeity { player, deity } => self
                .select_deity(player, deity)
                .map(|stage| Outcome::DeitySelected { stage }),
            Command::SelectApolloStartingShrine { player, shrine } => self
                .select_apollo_starting_shrine(player, shrine)
                .map(|stage| Outcome::ApolloShrineSelected { stage }),
            Command::UseSecondaryAbility => self.use_secondary_ability().map(Outcome::AbilityUsed),
            Command::DrawShrineCard => self.draw_shrine_card().map(Outcome::ShrineDrawn),
            Command::SelectHandCard { player, index } => self
                .select_hand_card(player, index)
                .map(Outcome::HandCardSelected),
            Command::SpendSelectedOrEligibleCard => self
                .spend_selected_or_eligible_card()
                .map(Outcome::ShrineSpent),
            Command::EndTurn => self
                .end_turn()
                .map(|next_player| Outcome::TurnEnded { next_player }),
        }
    }
}

impl<S> MatchState<S> {
    /// Every command `apply` would accept in the current state.
    ///
    /// Returns empty only if the match is broken, which a validated config
    /// never allows.
    #[must_use]
    pub fn legal_commands(&self) -> Vec<Command> {
        match self.stage {
            Stage::GodSelection => {
                let player = self.selector;
                Deity::ALL
                    .iter()
                    .map(|&deity| Command::SelectDeity { player, deity })
                    .collect()
            }
            Stage::ApolloSelection => {
                let Some(&player) = self.apollo_queue.first() else {
                    return Vec::new();
                };
                Deity::ALL
                    .iter()
                    .map(|&shrine| Command::SelectApolloStartingShrine { player, shrine })
                    .collect()
            }
            Stage::Playing => self.legal_turn_commands(),
        }
    }

    fn legal_turn_commands(&self) -> Vec<Command> {
        let current = self.current_player;
        let mut commands = Vec::new();

        if self.can_use_secondary_ability(current) {
            commands.push(Command::UseSecondaryAbility);
        }
        if !self.pool.is_empty() {
            commands.push(Command::DrawShrineCard);
        }
        for player in PlayerId::both() {
            let usable = self.players[player].hand.usable(self.turn_number);
            commands.extend(usable.map(|(index, _)| Command::SelectHandCard { player, index }));
        }
        if self.players[current]
            .hand
            .usable(self.turn_number)
            .next()
            .is_some()
        {
            commands.push(Command::SpendSelectedOrEligibleCard);
        }
        commands.push(Command::EndTurn);
        commands
    }
}
