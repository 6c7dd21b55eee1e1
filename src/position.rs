use anyhow::{anyhow, Result};

use crate::{HEIGHT, WIDTH, WIN_LENGTH};

// line directions as (column, row) steps: horizontal, vertical and the
// two diagonals
const DIRECTIONS: [(i32, i32); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// One of the two players, also used to tag the search perspective
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// An immutable snapshot of the board plus the player to move
///
/// Every transition produces a new `Position`; the original stays valid,
/// so the tree search can explore many branches from one ancestor without
/// undo bookkeeping.
#[derive(Copy, Clone, Debug)]
pub struct Position {
    // cells are stored left-to-right, bottom-to-top
    cells: [Option<Player>; WIDTH * HEIGHT],
    heights: [usize; WIDTH],
    next_move_player: Player,
    num_moves: usize,
}

impl Position {
    /// An empty board with X to move
    pub fn new() -> Self {
        Self {
            cells: [None; WIDTH * HEIGHT],
            heights: [0; WIDTH],
            next_move_player: Player::X,
            num_moves: 0,
        }
    }

    /// Replays a string of 1-indexed column digits, e.g. `"112233"`
    ///
    /// The winning move itself is accepted, so finished positions can be
    /// built; any move after that is rejected.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut position = Self::new();

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column @ 1..=WIDTH) => {
                    position = position.play(column - 1)?;
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(position)
    }

    /// The player who moves next at this position
    pub fn next_move_player(&self) -> Player {
        self.next_move_player
    }

    /// The line length that wins the game
    pub fn winning(&self) -> usize {
        WIN_LENGTH
    }

    pub fn num_moves(&self) -> usize {
        self.num_moves
    }

    /// The owner of the cell at `column`, `row` (row 0 is the bottom)
    ///
    /// Both coordinates must be on the board.
    pub fn cell(&self, column: usize, row: usize) -> Option<Player> {
        self.cells[column + WIDTH * row]
    }

    // cell lookup tolerating out-of-board coordinates, for line walks
    fn cell_at(&self, column: i32, row: i32) -> Option<Player> {
        if column < 0 || column >= WIDTH as i32 || row < 0 || row >= HEIGHT as i32 {
            return None;
        }
        self.cells[column as usize + WIDTH * row as usize]
    }

    pub fn playable(&self, column: usize) -> bool {
        column < WIDTH && self.heights[column] < HEIGHT
    }

    fn is_full(&self) -> bool {
        self.num_moves == WIDTH * HEIGHT
    }

    /// Columns a piece can currently be dropped into, in ascending order
    ///
    /// Empty once the game is won or the board is full.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_full() || self.winner().is_some() {
            return Vec::new();
        }
        (0..WIDTH).filter(|&column| self.playable(column)).collect()
    }

    /// Returns the position after dropping a piece into `column`
    ///
    /// Pure: `self` is unaffected and remains valid.
    pub fn play(&self, column: usize) -> Result<Self> {
        if column >= WIDTH {
            return Err(anyhow!(
                "Invalid move, column {} out of range. Columns must be between 1 and {}",
                column + 1,
                WIDTH
            ));
        }
        if self.winner().is_some() || self.is_full() {
            return Err(anyhow!("Invalid move, the game is already over"));
        }
        if !self.playable(column) {
            return Err(anyhow!("Invalid move, column {} full", column + 1));
        }

        let mut next = *self;
        next.cells[column + WIDTH * next.heights[column]] = Some(self.next_move_player);
        next.heights[column] += 1;
        next.num_moves += 1;
        next.next_move_player = self.next_move_player.opponent();
        Ok(next)
    }

    /// All successor positions, one per legal move, in ascending column order
    ///
    /// An empty sequence signals a terminal position (win or full board).
    pub fn next_states(&self) -> Vec<Self> {
        let mut states = Vec::new();
        for column in self.legal_moves() {
            // the move came from legal_moves, so play cannot fail
            if let Ok(next) = self.play(column) {
                states.push(next);
            }
        }
        states
    }

    /// Counts `player`'s maximal contiguous runs of exactly `length` cells
    /// along any row, column or diagonal
    pub fn num_lines(&self, length: usize, player: Player) -> usize {
        self.line_lengths(player)
            .iter()
            .filter(|&&line| line == length)
            .count()
    }

    /// The player holding a line at least [`WIN_LENGTH`] long, if any
    ///
    /// A drop can join two runs, so a winning run may be longer than the
    /// threshold itself.
    pub fn winner(&self) -> Option<Player> {
        for &player in [Player::X, Player::O].iter() {
            if self
                .line_lengths(player)
                .iter()
                .any(|&line| line >= WIN_LENGTH)
            {
                return Some(player);
            }
        }
        None
    }

    // the length of every maximal same-owner run belonging to `player`,
    // walking each of the four directions from the first cell of each run
    fn line_lengths(&self, player: Player) -> Vec<usize> {
        let mut lengths = Vec::new();
        for &(dc, dr) in DIRECTIONS.iter() {
            for column in 0..WIDTH as i32 {
                for row in 0..HEIGHT as i32 {
                    if self.cell_at(column, row) != Some(player) {
                        continue;
                    }
                    // only the first cell of a run starts a count
                    if self.cell_at(column - dc, row - dr) == Some(player) {
                        continue;
                    }
                    let mut length = 0;
                    let (mut c, mut r) = (column, row);
                    while self.cell_at(c, r) == Some(player) {
                        length += 1;
                        c += dc;
                        r += dr;
                    }
                    lengths.push(length);
                }
            }
        }
        lengths
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}
