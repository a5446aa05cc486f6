//! Selection phase: deity picks, Apollo's starting shrine, match start.

use crate::cards::{ShrineCard, STARTING_TURN};
use crate::core::{Command, MatchState, Patron, PlayerId, Rejection, ShuffleSource, Stage};
use crate::deities::Deity;

impl<S: ShuffleSource> MatchState<S> {
    /// Record `player`'s deity.
    ///
    /// Player 1 picks first, then player 2. After player 2, the match moves
    /// to Apollo's starting-shrine pick if anyone chose Apollo, otherwise
    /// straight into play. Returns the stage after the pick.
    pub fn select_deity(&mut self, player: PlayerId, deity: Deity) -> Result<Stage, Rejection> {
        self.run(
            player,
            Command::SelectDeity { player, deity },
            |state| state.apply_deity_pick(player, deity),
            |state, _| state.selection_prompt(),
        )
    }

    /// Grant the front Apollo player a usable starting shrine.
    ///
    /// One copy of `shrine` leaves the pool if there is one; if not, the card
    /// is granted anyway. Returns the stage after the pick.
    pub fn select_apollo_starting_shrine(
        &mut self,
        player: PlayerId,
        shrine: Deity,
    ) -> Result<Stage, Rejection> {
        self.run(
            player,
            Command::SelectApolloStartingShrine { player, shrine },
            |state| state.apply_apollo_pick(player, shrine),
            |state, _| state.selection_prompt(),
        )
    }

    fn apply_deity_pick(&mut self, player: PlayerId, deity: Deity) -> Result<Stage, Rejection> {
        self.require_stage(Stage::GodSelection)?;
        if player != self.selector {
            return Err(Rejection::NotYourPick { player });
        }

        self.players[player].patron = Some(Patron::new(deity));
        if deity.picks_starting_shrine() {
            self.apollo_queue.push(player);
        }

        if player == PlayerId::ONE {
            self.selector = PlayerId::TWO;
        } else if let Some(&front) = self.apollo_queue.first() {
            self.stage = Stage::ApolloSelection;
            self.selector = front;
            tracing::info!(selector = %front, "waiting for Apollo starting shrine");
        } else {
            self.start_match();
        }
        Ok(self.stage)
    }

    fn apply_apollo_pick(&mut self, player: PlayerId, shrine: Deity) -> Result<Stage, Rejection> {
        self.require_stage(Stage::ApolloSelection)?;
        if self.apollo_queue.first() != Some(&player) {
            return Err(Rejection::NotYourPick { player });
        }

        if !self.pool.remove_one(shrine) {
            tracing::debug!(%player, %shrine, "starting shrine not in pool, granted anyway");
        }
        self.players[player].hand.push(ShrineCard::starting(shrine));
        self.apollo_queue.remove(0);

        match self.apollo_queue.first() {
            Some(&front) => self.selector = front,
            None => self.start_match(),
        }
        Ok(self.stage)
    }

    /// Begin play: player 1 on turn 1, Demeter players get a usable shrine.
    fn start_match(&mut self) {
        self.stage = Stage::Playing;
        self.current_player = PlayerId::ONE;
        self.turn_number = 1;

        for player in PlayerId::both() {
            let demeter = self.deity(player).is_some_and(Deity::enhances_shrines);
            if !demeter {
                continue;
            }
            match self.draw_into_hand(player, STARTING_TURN) {
                Ok(card) => {
                    tracing::debug!(%player, shrine = %card.shrine, "Demeter starting shrine");
                }
                Err(rejection) => {
                    tracing::warn!(%player, %rejection, "no Demeter starting shrine");
                }
            }
        }

        tracing::info!(
            player_one = ?self.deity(PlayerId::ONE),
            player_two = ?self.deity(PlayerId::TWO),
            pool = self.pool.len(),
            "match started"
        );
    }

    /// Status line for whatever the selection phase is waiting on.
    fn selection_prompt(&self) -> String {
        match self.stage {
            Stage::GodSelection => format!("{}, select your god!", self.selector),
            Stage::ApolloSelection => format!(
                "{} (Apollo), choose your starting shrine card!",
                self.selector
            ),
            Stage::Playing => format!(
                "Game starts! Player 1 ({}) vs Player 2 ({})",
                deity_name(self.deity(PlayerId::ONE)),
                deity_name(self.deity(PlayerId::TWO)),
            ),
        }
    }
}

fn deity_name(deity: Option<Deity>) -> &'static str {
    deity.map_or("none", Deity::name)
}
