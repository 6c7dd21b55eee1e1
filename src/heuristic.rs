//! Static evaluation of board positions by line counting

use crate::position::{Player, Position};

/// The numeric value of a position, positive when the maximizing player
/// is ahead
pub type Score = i64;

// weight of a single line, strictly increasing in the line length so that
// one near-complete line outweighs any pile of shorter ones
pub(crate) const fn line_weight(length: usize) -> Score {
    (length as Score).pow(5)
}

/// Scores `position` from the perspective of `maximizing_player`
///
/// Every line length from the win threshold down to 2 is counted for both
/// players and weighted by its length; isolated single pieces carry no
/// information about connection threats and are ignored. A board with no
/// lines of any countable length scores 0. Works unchanged on terminal
/// positions: a completed winning line simply dominates the total.
pub fn evaluate(position: &Position, maximizing_player: Player) -> Score {
    let opponent = maximizing_player.opponent();

    let mut score = 0;
    for length in (2..=position.winning()).rev() {
        let advantage = position.num_lines(length, maximizing_player) as Score
            - position.num_lines(length, opponent) as Score;
        score += line_weight(length) * advantage;
    }
    score
}
