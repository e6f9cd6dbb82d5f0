//! Game state module - the turn state machine and round lifecycle
//!
//! `GameState` owns everything that lives for one session: the validated board
//! configuration, the seeded RNG, the current round's board and revealed grid,
//! and the turn state. The frame loop feeds it selections and elapsed time; it
//! never sleeps. Every pause of the classic game (mismatch, win flash, new round)
//! is a timed state that counts down in [`GameState::tick`], and selections that
//! arrive while one of them is running are ignored.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::Board;
use crate::config::BoardConfig;
use crate::revealed::{has_won, RevealedGrid};
use crate::sweep::{Sweep, SweepCells, SweepKind};
use crate::types::*;

/// Total time spent in [`TurnState::Won`] before the board is replaced
pub const WIN_TOTAL_MS: u32 = WIN_FLASH_INTERVAL_MS * WIN_FLASH_COUNT + WIN_HOLD_MS;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Start-of-round preview: each group is swept open and closed in turn.
    Intro { groups: Vec<SweepCells>, index: usize },
    /// Waiting for the first tile of a turn.
    Idle,
    /// One tile revealed, waiting for the second.
    Pending(CellPos),
    /// Two different icons are showing; both get covered when the pause ends.
    MismatchPause {
        first: CellPos,
        second: CellPos,
        remaining_ms: u32,
    },
    /// Every tile is revealed.
    Won { elapsed_ms: u32 },
    /// A fresh, fully covered board is on screen.
    RoundPause { remaining_ms: u32 },
}

/// Result of offering a tile to [`GameState::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Busy, outside the board, or the tile is already face up.
    Ignored,
    FirstReveal,
    Matched { won: bool },
    Mismatch { first: CellPos, second: CellPos },
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, SelectOutcome::Ignored)
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    config: BoardConfig,
    board: Board,
    revealed: RevealedGrid,
    turn: TurnState,
    sweep: Option<Sweep>,
    rng: StdRng,
    seed: u64,
    intro_enabled: bool,
    started: bool,
    /// Monotonic round number (starts at 1, increments on win or restart).
    round: u32,
    /// Completed turns (second tile selected) in the current round.
    attempts: u32,
    pairs_found: u32,
    rounds_won: u32,
}

impl GameState {
    /// Create a session with a randomly generated first board.
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let board = Board::generate(&config, &mut rng);
        Self::from_parts(board, rng, seed)
    }

    /// Create a session whose first round uses a fixed board.
    ///
    /// Later rounds are generated from `seed`.
    pub fn with_board(board: Board, seed: u64) -> Self {
        Self::from_parts(board, StdRng::seed_from_u64(seed), seed)
    }

    fn from_parts(board: Board, rng: StdRng, seed: u64) -> Self {
        let config = *board.config();
        Self {
            config,
            revealed: RevealedGrid::new(config.width(), config.height(), false),
            board,
            turn: TurnState::Idle,
            sweep: None,
            rng,
            seed,
            intro_enabled: false,
            started: false,
            round: 1,
            attempts: 0,
            pairs_found: 0,
            rounds_won: 0,
        }
    }

    /// Preview every round's board before play starts.
    pub fn with_intro(mut self, enabled: bool) -> Self {
        self.intro_enabled = enabled;
        self
    }

    /// Start the first round (runs the intro when enabled).
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        debug!("round {} started (seed {})", self.round, self.seed);
        self.begin_play();
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn revealed(&self) -> &RevealedGrid {
        &self.revealed
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn sweep(&self) -> Option<&Sweep> {
        self.sweep.as_ref()
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn pairs_found(&self) -> u32 {
        self.pairs_found
    }

    pub fn total_pairs(&self) -> u32 {
        self.config.pair_count() as u32
    }

    pub fn rounds_won(&self) -> u32 {
        self.rounds_won
    }

    /// The first tile of the current turn, if one is waiting for its partner.
    pub fn pending(&self) -> Option<CellPos> {
        match self.turn {
            TurnState::Pending(pos) => Some(pos),
            _ => None,
        }
    }

    /// True while an animation or a timed pause is running.
    pub fn is_busy(&self) -> bool {
        self.sweep.is_some() || !matches!(self.turn, TurnState::Idle | TurnState::Pending(_))
    }

    pub fn is_won(&self) -> bool {
        matches!(self.turn, TurnState::Won { .. })
    }

    /// Whether the win celebration currently shows the light background.
    pub fn win_flash_on(&self) -> bool {
        match self.turn {
            TurnState::Won { elapsed_ms } if elapsed_ms < WIN_FLASH_INTERVAL_MS * WIN_FLASH_COUNT => {
                (elapsed_ms / WIN_FLASH_INTERVAL_MS) % 2 == 1
            }
            _ => false,
        }
    }

    /// The tile to highlight under the pointer, if it can be selected.
    pub fn highlight(&self, hover: Option<CellPos>) -> Option<CellPos> {
        let pos = hover?;
        if self.is_busy() || !self.board.contains(pos) || self.revealed.is_revealed(pos) {
            return None;
        }
        Some(pos)
    }

    /// Offer a tile as the next selection of the current turn.
    pub fn select(&mut self, pos: CellPos) -> SelectOutcome {
        // The first tile of a turn is already revealed, so this also rejects
        // picking the same tile twice.
        if self.is_busy() || !self.board.contains(pos) || self.revealed.is_revealed(pos) {
            return SelectOutcome::Ignored;
        }

        self.revealed.reveal(pos);
        self.sweep = Some(Sweep::reveal(&[pos]));

        match self.turn {
            TurnState::Pending(first) => self.resolve_pair(first, pos),
            _ => {
                self.turn = TurnState::Pending(pos);
                SelectOutcome::FirstReveal
            }
        }
    }

    fn resolve_pair(&mut self, first: CellPos, second: CellPos) -> SelectOutcome {
        self.attempts += 1;

        if self.board.icon(first) != self.board.icon(second) {
            debug!("mismatch {:?} / {:?}", first, second);
            self.turn = TurnState::MismatchPause {
                first,
                second,
                remaining_ms: MISMATCH_PAUSE_MS,
            };
            return SelectOutcome::Mismatch { first, second };
        }

        self.pairs_found += 1;
        debug!(
            "pair {}/{} found at {:?} / {:?}",
            self.pairs_found,
            self.total_pairs(),
            first,
            second
        );

        if has_won(&self.revealed) {
            self.rounds_won += 1;
            info!("round {} won in {} attempts", self.round, self.attempts);
            self.turn = TurnState::Won { elapsed_ms: 0 };
            SelectOutcome::Matched { won: true }
        } else {
            self.turn = TurnState::Idle;
            SelectOutcome::Matched { won: false }
        }
    }

    /// Advance timers by `elapsed_ms`.
    ///
    /// Running sweeps are advanced first, chaining into the next one when the
    /// intro starts it; whatever time is left over then counts down the timed
    /// state. Returns true when anything changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        let mut remaining = elapsed_ms;
        let mut changed = false;

        while let Some(sweep) = self.sweep.as_mut() {
            changed = true;
            remaining = sweep.advance(remaining);
            if !sweep.is_finished() {
                return true;
            }
            if let Some(done) = self.sweep.take() {
                self.on_sweep_finished(&done);
            }
            if remaining == 0 {
                return true;
            }
        }

        self.tick_timed_state(remaining) || changed
    }

    fn tick_timed_state(&mut self, elapsed_ms: u32) -> bool {
        match self.turn {
            TurnState::MismatchPause {
                first,
                second,
                remaining_ms,
            } => {
                let remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
                if remaining_ms == 0 {
                    self.revealed.cover(first);
                    self.revealed.cover(second);
                    self.sweep = Some(Sweep::cover(&[first, second]));
                    self.turn = TurnState::Idle;
                } else {
                    self.turn = TurnState::MismatchPause {
                        first,
                        second,
                        remaining_ms,
                    };
                }
                true
            }
            TurnState::Won { elapsed_ms: so_far } => {
                let elapsed_ms = so_far.saturating_add(elapsed_ms);
                if elapsed_ms >= WIN_TOTAL_MS {
                    self.next_round();
                    self.turn = TurnState::RoundPause {
                        remaining_ms: NEW_ROUND_PAUSE_MS,
                    };
                } else {
                    self.turn = TurnState::Won { elapsed_ms };
                }
                true
            }
            TurnState::RoundPause { remaining_ms } => {
                let remaining_ms = remaining_ms.saturating_sub(elapsed_ms);
                if remaining_ms == 0 {
                    self.begin_play();
                } else {
                    self.turn = TurnState::RoundPause { remaining_ms };
                }
                true
            }
            TurnState::Intro { .. } | TurnState::Idle | TurnState::Pending(_) => false,
        }
    }

    /// Abandon the current round and deal a fresh board.
    pub fn restart(&mut self) {
        self.next_round();
        self.started = true;
        self.begin_play();
    }

    fn on_sweep_finished(&mut self, done: &Sweep) {
        let TurnState::Intro { groups, index } = &mut self.turn else {
            return;
        };

        match done.kind() {
            SweepKind::Reveal => {
                self.sweep = Some(Sweep::cover(done.cells()));
            }
            SweepKind::Cover => {
                *index += 1;
                let next = groups.get(*index).map(|group| Sweep::reveal(group));
                match next {
                    Some(sweep) => self.sweep = Some(sweep),
                    None => self.turn = TurnState::Idle,
                }
            }
        }
    }

    /// Replace the board and reset per-round state.
    fn next_round(&mut self) {
        self.board = Board::generate(&self.config, &mut self.rng);
        self.revealed.set_all(false);
        self.sweep = None;
        self.turn = TurnState::Idle;
        self.round = self.round.wrapping_add(1);
        self.attempts = 0;
        self.pairs_found = 0;
        debug!("round {} dealt", self.round);
    }

    fn begin_play(&mut self) {
        if !self.intro_enabled {
            self.turn = TurnState::Idle;
            return;
        }

        let mut cells: Vec<CellPos> = self.board.positions().collect();
        cells.shuffle(&mut self.rng);
        let groups: Vec<SweepCells> = cells
            .chunks(INTRO_GROUP_SIZE)
            .map(|chunk| chunk.iter().copied().collect())
            .collect();

        match groups.first() {
            Some(group) => {
                self.sweep = Some(Sweep::reveal(group));
                self.turn = TurnState::Intro { groups, index: 0 };
            }
            None => self.turn = TurnState::Idle,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(BoardConfig::default(), 1)
    }
}
