//! Depth-limited adversarial search over board positions

use anyhow::{anyhow, Result};
use rayon::prelude::*;
use static_assertions::const_assert;

use crate::heuristic::{evaluate, line_weight, Score};
use crate::position::{Player, Position};
use crate::{DEFAULT_SEARCH_DEPTH, HEIGHT, WIDTH, WIN_LENGTH};

/// Seed for max-folds, strictly below any score `evaluate` can produce
pub const MIN_SCORE: Score = -10_000_000;
/// Seed for min-folds, strictly above any score `evaluate` can produce
pub const MAX_SCORE: Score = 10_000_000;

// generous bound on the heuristic's magnitude: a player cannot hold more
// than WIDTH * HEIGHT lines of any one length, and each counted length
// weighs at most line_weight(WIN_LENGTH)
const HEURISTIC_BOUND: Score =
    (WIDTH * HEIGHT) as Score * (WIN_LENGTH as Score - 1) * line_weight(WIN_LENGTH);
const_assert!(HEURISTIC_BOUND < MAX_SCORE);

/// A fixed-depth game tree searcher
///
/// # Notes
/// The search perspective (`maximizing_player`) names whose advantage is
/// positive and stays fixed for a whole search; the player whose turn it
/// is alternates with every ply and is read off each position. Conflating
/// the two is the classic minimax bug, so they are kept as separate
/// parameters everywhere.
pub struct Searcher {
    depth: u32,

    /// The number of positions expanded by this `Searcher` so far
    /// (for diagnostics only)
    pub node_count: usize,

    /// The number of leaf evaluations performed by this `Searcher` so far
    /// (for diagnostics only)
    pub eval_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` that explores `depth` plies from the root
    pub fn new(depth: u32) -> Self {
        Self {
            depth,
            node_count: 0,
            eval_count: 0,
        }
    }

    /// Chooses the best column for the player to move at `position`
    ///
    /// Every legal move is scored with the alpha-beta search at the
    /// configured depth, with the maximizing player fixed to the mover at
    /// the root. The strictly greatest score wins; equal scores keep the
    /// first column encountered, so repeated calls pick the same move.
    ///
    /// Fails if the position has no legal moves (won or full board).
    pub fn choose_move(&mut self, position: &Position) -> Result<usize> {
        let mover = position.next_move_player();

        let mut best: Option<(usize, Score)> = None;
        for column in position.legal_moves() {
            let successor = position.play(column)?;
            let value = self.minimax_alpha_beta(&successor, self.depth, mover);
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((column, value));
            }
        }

        best.map(|(column, _)| column)
            .ok_or_else(|| anyhow!("no legal moves, the game is already over"))
    }

    /// Scores `position` with an exhaustive depth-limited minimax search
    ///
    /// `maximizing_player` is handed down the whole recursive call tree
    /// unchanged; at each level the fold direction depends only on whose
    /// turn it is at that position.
    pub fn minimax(&mut self, position: &Position, depth: u32, maximizing_player: Player) -> Score {
        self.node_count += 1;

        let successors = position.next_states();
        if depth == 0 || successors.is_empty() {
            self.eval_count += 1;
            return evaluate(position, maximizing_player);
        }

        if position.next_move_player() == maximizing_player {
            let mut best = MIN_SCORE;
            for successor in &successors {
                best = best.max(self.minimax(successor, depth - 1, maximizing_player));
            }
            best
        } else {
            let mut best = MAX_SCORE;
            for successor in &successors {
                best = best.min(self.minimax(successor, depth - 1, maximizing_player));
            }
            best
        }
    }

    /// Scores `position` with alpha-beta pruning
    ///
    /// Returns exactly the same value as [`minimax`](Self::minimax) for
    /// every input; pruning only skips subtrees that cannot influence the
    /// value at the root, which shows up as a lower
    /// [`eval_count`](Self::eval_count).
    pub fn minimax_alpha_beta(
        &mut self,
        position: &Position,
        depth: u32,
        maximizing_player: Player,
    ) -> Score {
        self.alpha_beta(position, depth, MIN_SCORE, MAX_SCORE, maximizing_player)
    }

    fn alpha_beta(
        &mut self,
        position: &Position,
        depth: u32,
        mut alpha: Score,
        mut beta: Score,
        maximizing_player: Player,
    ) -> Score {
        self.node_count += 1;

        let successors = position.next_states();
        if depth == 0 || successors.is_empty() {
            self.eval_count += 1;
            return evaluate(position, maximizing_player);
        }

        if position.next_move_player() == maximizing_player {
            let mut best = MIN_SCORE;
            for successor in &successors {
                // alpha is the best value the maximizer can already
                // guarantee on this path
                alpha = alpha.max(best);
                if alpha > beta {
                    return best;
                }
                best = best.max(self.alpha_beta(
                    successor,
                    depth - 1,
                    alpha,
                    beta,
                    maximizing_player,
                ));
            }
            best
        } else {
            let mut best = MAX_SCORE;
            for successor in &successors {
                // beta is the best value the minimizer can already
                // guarantee on this path
                beta = beta.min(best);
                if alpha > beta {
                    return best;
                }
                best = best.min(self.alpha_beta(
                    successor,
                    depth - 1,
                    alpha,
                    beta,
                    maximizing_player,
                ));
            }
            best
        }
    }
}

/// Scores `position` with an exhaustive minimax search to `depth` plies
pub fn minimax(position: &Position, depth: u32, maximizing_player: Player) -> Score {
    let mut searcher = Searcher::new(depth);
    searcher.minimax(position, depth, maximizing_player)
}

/// Scores `position` with alpha-beta pruning; value-identical to
/// [`minimax`]
pub fn minimax_alpha_beta(position: &Position, depth: u32, maximizing_player: Player) -> Score {
    let mut searcher = Searcher::new(depth);
    searcher.minimax_alpha_beta(position, depth, maximizing_player)
}

/// Chooses the best column for the player to move at `position`, searching
/// at [`DEFAULT_SEARCH_DEPTH`]
pub fn choose_move(position: &Position) -> Result<usize> {
    let mut searcher = Searcher::new(DEFAULT_SEARCH_DEPTH);
    searcher.choose_move(position)
}

/// Like [`Searcher::choose_move`], but scores the root candidate moves in
/// parallel, one task per legal move
///
/// Each subtree searches an independently owned copy of the position, and
/// the reduction picks the highest score with the lowest column breaking
/// ties, so the answer is the same as the serial selector's regardless of
/// task ordering.
pub fn choose_move_parallel(position: &Position, depth: u32) -> Result<usize> {
    let mover = position.next_move_player();

    let mut candidates = Vec::new();
    for column in position.legal_moves() {
        candidates.push((column, position.play(column)?));
    }

    candidates
        .par_iter()
        .map(|(column, successor)| {
            let mut searcher = Searcher::new(depth);
            (
                *column,
                searcher.minimax_alpha_beta(successor, depth, mover),
            )
        })
        .reduce_with(|left, right| {
            if right.1 > left.1 || (right.1 == left.1 && right.0 < left.0) {
                right
            } else {
                left
            }
        })
        .map(|(column, _)| column)
        .ok_or_else(|| anyhow!("no legal moves, the game is already over"))
}
