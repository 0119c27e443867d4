//! Board structure with capture tracking and exact undo

use std::fmt;

use super::{BoardSnapshot, Move, Point, Stone, ZobristTable, MAX_SIZE};
use crate::error::BoardError;
use crate::rules::{self, CAPTURE_WIN};

/// Outcome of a terminal test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Won(Stone),
    Draw,
}

/// Record of one played move, enough to undo it exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// Color that made the move (and made any captures)
    pub color: Stone,
    /// Player to move before this move was played
    pub prev_player: Stone,
    /// Opponent stones removed by this move
    pub captured: Vec<Point>,
}

/// Game board with capture tracking and move history.
///
/// `play` and `undo` are exact inverses: after `k` undos the board compares
/// equal to the board `k` plays earlier, hash included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    /// Row stride of the padded grid (`size + 2`)
    stride: usize,
    grid: Vec<Stone>,
    empty_count: usize,
    current_player: Stone,
    black_captures: u32,
    white_captures: u32,
    last_move: Option<Move>,
    second_last_move: Option<Move>,
    history: Vec<MoveRecord>,
    /// Plies since the last `mark_search_root`
    depth: i32,
    hash: u64,
}

impl Board {
    /// Create an empty board. Panics on an unsupported size; use
    /// [`Board::try_new`] for untrusted input.
    #[must_use]
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(board) => board,
            Err(err) => panic!("{err}"),
        }
    }

    /// Create an empty board of the given size (2..=MAX_SIZE).
    pub fn try_new(size: usize) -> Result<Self, BoardError> {
        if !(2..=MAX_SIZE).contains(&size) {
            return Err(BoardError::InvalidSize { size });
        }
        let stride = size + 2;
        let mut grid = vec![Stone::Border; stride * stride];
        for row in 1..=size {
            let start = row * stride + 1;
            grid[start..start + size].fill(Stone::Empty);
        }
        let zt = ZobristTable::global();
        // Black to move, zero captures
        let hash = zt.side() ^ zt.capture_count(Stone::Black, 0) ^ zt.capture_count(Stone::White, 0);
        Ok(Self {
            size,
            stride,
            grid,
            empty_count: size * size,
            current_player: Stone::Black,
            black_captures: 0,
            white_captures: 0,
            last_move: None,
            second_last_move: None,
            history: Vec::with_capacity(size * size),
            depth: 0,
            hash,
        })
    }

    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row stride of the padded grid
    #[inline]
    #[must_use]
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Length of the padded grid
    #[inline]
    #[must_use]
    pub fn max_point(&self) -> usize {
        self.grid.len()
    }

    /// Point for a 1-based (row, col) coordinate.
    #[inline]
    #[must_use]
    pub fn point(&self, row: usize, col: usize) -> Point {
        debug_assert!((1..=self.size).contains(&row) && (1..=self.size).contains(&col));
        Point((row * self.stride + col) as u16)
    }

    /// Checked variant of [`Board::point`]
    pub fn try_point(&self, row: usize, col: usize) -> Result<Point, BoardError> {
        if (1..=self.size).contains(&row) && (1..=self.size).contains(&col) {
            Ok(self.point(row, col))
        } else {
            Err(BoardError::OffBoard { row, col })
        }
    }

    /// 1-based (row, col) of a point; inverse of [`Board::point`]
    #[inline]
    #[must_use]
    pub fn coord(&self, point: Point) -> (usize, usize) {
        (point.index() / self.stride, point.index() % self.stride)
    }

    /// True if the point lies in the playable area
    #[inline]
    #[must_use]
    pub fn is_on_board(&self, point: Point) -> bool {
        matches!(self.get(point), Stone::Empty | Stone::Black | Stone::White)
    }

    /// Contents of a cell; anything outside the padded grid reads as border.
    #[inline]
    #[must_use]
    pub fn get(&self, point: Point) -> Stone {
        self.grid.get(point.index()).copied().unwrap_or(Stone::Border)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, point: Point) -> bool {
        self.get(point) == Stone::Empty
    }

    /// Offsets of the 8 rays: E, W, S, N, SE, NW, SW, NE
    #[inline]
    #[must_use]
    pub fn ray_offsets(&self) -> [isize; 8] {
        let ns = self.stride as isize;
        [1, -1, ns, -ns, ns + 1, -(ns + 1), ns - 1, -(ns - 1)]
    }

    /// Offsets of the 4 undirected lines: horizontal, vertical, two diagonals
    #[inline]
    #[must_use]
    pub fn line_offsets(&self) -> [isize; 4] {
        let ns = self.stride as isize;
        [1, ns, ns + 1, ns - 1]
    }

    #[inline]
    #[must_use]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    /// Override the side to move (engines are asked to play a given color).
    pub fn set_current_player(&mut self, color: Stone) {
        debug_assert!(color.is_color());
        self.set_player(color);
    }

    /// Stones captured by `color`
    #[inline]
    #[must_use]
    pub fn captures(&self, color: Stone) -> u32 {
        match color {
            Stone::Black => self.black_captures,
            Stone::White => self.white_captures,
            Stone::Empty | Stone::Border => 0,
        }
    }

    /// Position setup: overwrite a capture count.
    pub fn set_captures(&mut self, color: Stone, stones: u32) {
        let zt = ZobristTable::global();
        let old = self.captures(color);
        self.hash ^= zt.capture_count(color, old) ^ zt.capture_count(color, stones);
        match color {
            Stone::Black => self.black_captures = stones,
            Stone::White => self.white_captures = stones,
            Stone::Empty | Stone::Border => {}
        }
    }

    #[inline]
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    #[inline]
    #[must_use]
    pub fn second_last_move(&self) -> Option<Move> {
        self.second_last_move
    }

    /// Last and second-last moves that placed a stone (passes skipped)
    #[must_use]
    pub fn last_board_moves(&self) -> Vec<Point> {
        [self.last_move, self.second_last_move]
            .into_iter()
            .flatten()
            .filter_map(Move::point)
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Plies played since the last [`Board::mark_search_root`]
    #[inline]
    #[must_use]
    pub fn depth(&self) -> i32 {
        self.depth
    }

    /// Start counting plies from the current position.
    pub fn mark_search_root(&mut self) {
        self.depth = 0;
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.empty_count
    }

    /// All empty points in ascending index order
    #[must_use]
    pub fn empty_points(&self) -> Vec<Point> {
        let mut points = Vec::with_capacity(self.empty_count);
        for row in 1..=self.size {
            let start = row * self.stride + 1;
            for idx in start..start + self.size {
                if self.grid[idx] == Stone::Empty {
                    points.push(Point(idx as u16));
                }
            }
        }
        points
    }

    /// Passing is always legal; a placement needs an empty cell.
    #[must_use]
    pub fn is_legal(&self, mv: impl Into<Move>, _color: Stone) -> bool {
        match mv.into() {
            Move::Pass => true,
            Move::Place(p) => self.is_empty(p),
        }
    }

    /// Play a move for `color`.
    ///
    /// Returns false without touching the board if the point is not empty.
    /// Otherwise places the stone, removes every flanked opponent pair
    /// (`color opp opp color` along any of the 8 rays), credits the mover
    /// 2 per pair and records everything needed by [`Board::undo`].
    pub fn play(&mut self, mv: impl Into<Move>, color: Stone) -> bool {
        let mv = mv.into();
        debug_assert!(color.is_color());

        let captured = match mv {
            Move::Pass => Vec::new(),
            Move::Place(p) => {
                if !self.is_empty(p) {
                    return false;
                }
                self.set_stone(p, color);
                let captured = rules::captured_by(self, p, color);
                for &c in &captured {
                    self.clear_stone(c);
                }
                captured
            }
        };

        if !captured.is_empty() {
            let total = self.captures(color) + captured.len() as u32;
            self.set_captures(color, total);
        }

        let prev_player = self.current_player;
        self.set_player(color.opponent());
        self.second_last_move = self.last_move;
        self.last_move = Some(mv);
        self.history.push(MoveRecord {
            mv,
            color,
            prev_player,
            captured,
        });
        self.depth += 1;
        true
    }

    /// [`Board::play`] with the failure reported as an error
    pub fn try_play(&mut self, mv: impl Into<Move>, color: Stone) -> Result<(), BoardError> {
        let mv = mv.into();
        if self.play(mv, color) {
            Ok(())
        } else {
            Err(BoardError::Occupied {
                point: mv.point().map_or(0, |p| p.0),
            })
        }
    }

    /// Take back the last move.
    ///
    /// # Panics
    ///
    /// Panics when there is no move to undo; that is a caller bug.
    pub fn undo(&mut self) {
        let Some(record) = self.history.pop() else {
            panic!("undo called with an empty move history");
        };

        if let Move::Place(p) = record.mv {
            self.clear_stone(p);
        }
        let victim = record.color.opponent();
        for &c in &record.captured {
            self.set_stone(c, victim);
        }
        if !record.captured.is_empty() {
            let total = self.captures(record.color) - record.captured.len() as u32;
            self.set_captures(record.color, total);
        }

        self.set_player(record.prev_player);
        let n = self.history.len();
        self.last_move = n.checked_sub(1).map(|i| self.history[i].mv);
        self.second_last_move = n.checked_sub(2).map(|i| self.history[i].mv);
        self.depth -= 1;
    }

    /// Terminal test: five through the last move, capture win, full board,
    /// or two consecutive passes.
    #[must_use]
    pub fn terminal_status(&self) -> GameStatus {
        let winner = rules::detect_five_in_row(self);
        if winner != Stone::Empty {
            return GameStatus::Won(winner);
        }
        if self.black_captures >= CAPTURE_WIN {
            return GameStatus::Won(Stone::Black);
        }
        if self.white_captures >= CAPTURE_WIN {
            return GameStatus::Won(Stone::White);
        }
        if self.empty_count == 0 {
            return GameStatus::Draw;
        }
        if self.last_move == Some(Move::Pass) && self.second_last_move == Some(Move::Pass) {
            return GameStatus::Draw;
        }
        GameStatus::Ongoing
    }

    /// `(is_terminal, winner)`; a draw is `(true, Stone::Empty)`.
    #[must_use]
    pub fn is_terminal(&self) -> (bool, Stone) {
        match self.terminal_status() {
            GameStatus::Ongoing => (false, Stone::Empty),
            GameStatus::Won(color) => (true, color),
            GameStatus::Draw => (true, Stone::Empty),
        }
    }

    /// Five-in-a-row through the last move (`Stone::Empty` if none)
    #[must_use]
    pub fn detect_five_in_row(&self) -> Stone {
        rules::detect_five_in_row(self)
    }

    /// Five-in-a-row anywhere on the board; slow, for verification
    #[must_use]
    pub fn full_board_five_in_row(&self) -> Stone {
        rules::full_board_five_in_row(self)
    }

    #[must_use]
    pub fn detect_open_four(&self, point: Point, color: Stone) -> bool {
        rules::detect_open_four(self, point, color)
    }

    #[must_use]
    pub fn detect_open_three(&self, point: Point, color: Stone) -> bool {
        rules::detect_open_three(self, point, color)
    }

    #[must_use]
    pub fn count_stones_in_row(&self, point: Point, color: Stone) -> usize {
        rules::count_stones_in_row(self, point, color)
    }

    #[must_use]
    pub fn moves_for_n_in_a_row(&self, color: Stone, n: usize) -> Vec<Point> {
        rules::moves_for_n_in_a_row(self, color, n)
    }

    /// Full-board view for status display and serialization
    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        let rows = (1..=self.size)
            .map(|row| {
                (1..=self.size)
                    .map(|col| self.grid[row * self.stride + col])
                    .collect()
            })
            .collect();
        BoardSnapshot {
            size: self.size,
            rows,
            current_player: self.current_player,
            black_captures: self.black_captures,
            white_captures: self.white_captures,
        }
    }

    #[inline]
    fn set_stone(&mut self, point: Point, color: Stone) {
        debug_assert_eq!(self.grid[point.index()], Stone::Empty);
        self.grid[point.index()] = color;
        self.empty_count -= 1;
        self.hash ^= ZobristTable::global().stone(point, color);
    }

    #[inline]
    fn clear_stone(&mut self, point: Point) {
        let old = self.grid[point.index()];
        debug_assert!(old.is_color());
        self.grid[point.index()] = Stone::Empty;
        self.empty_count += 1;
        self.hash ^= ZobristTable::global().stone(point, old);
    }

    #[inline]
    fn set_player(&mut self, color: Stone) {
        if (self.current_player == Stone::Black) != (color == Stone::Black) {
            self.hash ^= ZobristTable::global().side();
        }
        self.current_player = color;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(super::DEFAULT_SIZE)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.size).rev() {
            write!(f, "{row:>2} ")?;
            for col in 1..=self.size {
                write!(f, "{}", self.grid[row * self.stride + col].to_char())?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for col in 1..=self.size {
            write!(f, "{}", super::coord::column_letter(col))?;
        }
        writeln!(f)?;
        write!(
            f,
            "captures: X={} O={}  to move: {}",
            self.black_captures,
            self.white_captures,
            self.current_player.to_char()
        )
    }
}
