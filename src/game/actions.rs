use crate::error::{AdvanceError, DrawError};
use crate::result::DrawOutcome;

use super::{Game, GameState};

impl Game {
    /// Draws the top card for the active player.
    ///
    /// The returned outcome carries the King signal for this draw only.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not waiting for a draw or the deck is
    /// empty. The game is left unchanged.
    pub fn draw(&mut self) -> Result<DrawOutcome, DrawError> {
        let GameState::AwaitingDraw { player } = self.state else {
            return Err(DrawError::InvalidTransition);
        };

        let card = self.deck.draw().ok_or(DrawError::NoCards)?;
        self.state = GameState::CardRevealed { player, card };

        let king = card.is_king();
        if king {
            log::debug!("player {player} drew a king");
        } else {
            log::debug!("player {player} drew {card}");
        }

        Ok(DrawOutcome {
            player_index: player,
            card,
            king,
        })
    }

    /// Passes the turn once the revealed card has been read.
    ///
    /// Returns the new state: the next player awaiting a draw, or
    /// [`GameState::Ended`] when the deck is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if no card is revealed. The game is left unchanged.
    pub fn advance(&mut self) -> Result<GameState, AdvanceError> {
        let GameState::CardRevealed { player, .. } = self.state else {
            return Err(AdvanceError::InvalidTransition);
        };

        self.state = if self.deck.is_empty() {
            log::debug!("deck exhausted, game over");
            GameState::Ended
        } else {
            GameState::AwaitingDraw {
                player: (player + 1) % self.roster.len(),
            }
        };

        Ok(self.state)
    }
}
