//! Game state management for the Tic-Tac-Toe GUI

use crate::{Board, LevelConfig, LevelOutcome, Mark, Pos, SearchAgent, SessionStats, LEVELS};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use std::time::{Duration, Instant};

/// Short pause before the agent replies, so its move is visible as a
/// separate event.
const AGENT_MOVE_DELAY: Duration = Duration::from_millis(200);

/// How long the finished board stays on screen before the flow moves on
const RESULT_DISPLAY_TIME: Duration = Duration::from_millis(1500);

/// Helps available per session
const HELPS_PER_SESSION: u32 = 5;

/// Agent computation state
pub enum AgentState {
    Idle,
    Thinking {
        receiver: Receiver<(Option<Pos>, Duration)>,
        start_time: Instant,
    },
}

/// State for the level currently being played, plus the session-wide
/// statistics and help budget that survive level changes.
pub struct GameState {
    pub board: Board,
    pub level_index: usize,
    pub config: LevelConfig,
    pub human_turn: bool,
    pub outcome: Option<LevelOutcome>,
    pub winner: Option<Mark>,
    pub help_remaining: u32,
    pub help_position: Option<Pos>,
    pub stats: SessionStats,

    agent_state: AgentState,
    finished_at: Option<Instant>,
    human_move_start: Instant,
    human_times: Vec<Duration>,
    agent_times: Vec<Duration>,
}

impl GameState {
    /// Fresh session starting at level 1
    pub fn new() -> Self {
        let config = LEVELS[0];
        Self {
            board: Board::new(config.size),
            level_index: 0,
            config,
            human_turn: true,
            outcome: None,
            winner: None,
            help_remaining: HELPS_PER_SESSION,
            help_position: None,
            stats: SessionStats::new(),
            agent_state: AgentState::Idle,
            finished_at: None,
            human_move_start: Instant::now(),
            human_times: Vec::new(),
            agent_times: Vec::new(),
        }
    }

    /// Discard the current board and start the given level. Session
    /// statistics and the help budget carry over.
    pub fn start_level(&mut self, level_index: usize) {
        let config = LEVELS[level_index];
        self.board = Board::new(config.size);
        self.level_index = level_index;
        self.config = config;
        self.human_turn = true;
        self.outcome = None;
        self.winner = None;
        self.help_position = None;
        self.agent_state = AgentState::Idle;
        self.finished_at = None;
        self.human_move_start = Instant::now();
        self.human_times.clear();
        self.agent_times.clear();
    }

    /// Replay the level that was just lost or drawn
    pub fn replay_level(&mut self) {
        self.start_level(self.level_index);
    }

    /// Move on to the next level. Returns `false` when the last level has
    /// been beaten.
    pub fn advance_level(&mut self) -> bool {
        if self.level_index + 1 >= LEVELS.len() {
            return false;
        }
        self.start_level(self.level_index + 1);
        true
    }

    /// The agent configured for the current level
    fn agent(&self) -> SearchAgent {
        SearchAgent::new(Mark::Nought, self.config.depth_limit)
    }

    /// Check if the agent is currently searching
    pub fn is_agent_thinking(&self) -> bool {
        matches!(self.agent_state, AgentState::Thinking { .. })
    }

    /// True once the finished board has been shown long enough
    pub fn result_display_done(&self) -> bool {
        self.finished_at
            .is_some_and(|t| t.elapsed() >= RESULT_DISPLAY_TIME)
    }

    /// Attempt to place the human's mark at the given position
    pub fn try_place_mark(&mut self, pos: Pos) -> Result<(), String> {
        if self.outcome.is_some() {
            return Err("Game is over".to_string());
        }
        if self.is_agent_thinking() {
            return Err("Agent is thinking".to_string());
        }
        if !self.human_turn {
            return Err("Not your turn".to_string());
        }
        if !self.board.is_empty(pos) {
            return Err("Cell is occupied".to_string());
        }

        self.human_times.push(self.human_move_start.elapsed());
        self.board.mark(pos, Mark::Cross);
        self.help_position = None;
        self.human_turn = false;

        self.check_level_end();
        Ok(())
    }

    /// Kick off the agent's search on a background thread.
    ///
    /// The search itself is synchronous and blocking; the thread only keeps
    /// the UI responsive while it runs.
    pub fn start_agent_thinking(&mut self) {
        if self.human_turn || self.is_agent_thinking() || self.outcome.is_some() {
            return;
        }

        let board = self.board.clone();
        let agent = self.agent();
        let win_len = self.config.win_len;
        let (tx, rx) = channel();

        thread::spawn(move || {
            thread::sleep(AGENT_MOVE_DELAY);
            let search_start = Instant::now();
            let pos = agent.choose_move(&board, win_len);
            let _ = tx.send((pos, search_start.elapsed()));
        });

        self.agent_state = AgentState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
        };
    }

    /// Poll for a finished agent search and apply its move
    pub fn check_agent_result(&mut self) {
        let result = match &self.agent_state {
            AgentState::Thinking { receiver, .. } => match receiver.try_recv() {
                Ok(result) => Some(result),
                Err(std::sync::mpsc::TryRecvError::Empty) => None,
                Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                    self.agent_state = AgentState::Idle;
                    return;
                }
            },
            AgentState::Idle => None,
        };

        if let Some((pos, search_time)) = result {
            self.agent_state = AgentState::Idle;
            self.agent_times.push(search_time);

            if let Some(pos) = pos {
                self.board.mark(pos, Mark::Nought);
            }
            self.human_turn = true;
            self.human_move_start = Instant::now();

            self.check_level_end();
        }
    }

    /// Suggest a square via the same search the agent uses. Costs one help.
    pub fn request_help(&mut self) {
        if !self.human_turn || self.outcome.is_some() || self.is_agent_thinking() {
            return;
        }
        if self.help_remaining == 0 {
            println!("[HELP] No helps remaining!");
            return;
        }

        let suggestion = self.agent().choose_move(&self.board, self.config.win_len);
        self.help_position = suggestion;
        self.help_remaining -= 1;
        println!(
            "[HELP] Suggested move: {:?} | Remaining helps: {}",
            suggestion.map(|p| (p.row, p.col)),
            self.help_remaining
        );
    }

    /// After a move, close out the level if it is decided.
    fn check_level_end(&mut self) {
        let winner = crate::rules::check_winner(&self.board, self.config.win_len);
        if winner.is_none() && !self.board.is_full() {
            return;
        }

        let outcome = match winner {
            Some(Mark::Cross) => LevelOutcome::HumanWin,
            Some(Mark::Nought) => LevelOutcome::AgentWin,
            _ => LevelOutcome::Draw,
        };
        self.winner = winner;
        self.outcome = Some(outcome);
        self.finished_at = Some(Instant::now());

        self.stats
            .record_level(&self.config, outcome, &self.human_times, &self.agent_times);
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_mark_switches_turn() {
        let mut state = GameState::new();
        assert!(state.try_place_mark(Pos::new(0, 0)).is_ok());
        assert!(!state.human_turn);
        assert_eq!(state.board.get(Pos::new(0, 0)), Mark::Cross);
    }

    #[test]
    fn test_place_mark_rejected_out_of_turn() {
        let mut state = GameState::new();
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        assert!(state.try_place_mark(Pos::new(0, 1)).is_err());
    }

    #[test]
    fn test_place_mark_rejected_on_occupied_cell() {
        let mut state = GameState::new();
        state.try_place_mark(Pos::new(1, 1)).unwrap();
        state.human_turn = true;
        assert!(state.try_place_mark(Pos::new(1, 1)).is_err());
    }

    #[test]
    fn test_human_win_ends_level() {
        let mut state = GameState::new();
        // Hand-play a winning row for the human, alternating turns manually
        state.board.mark(Pos::new(0, 0), Mark::Cross);
        state.board.mark(Pos::new(1, 0), Mark::Nought);
        state.board.mark(Pos::new(0, 1), Mark::Cross);
        state.board.mark(Pos::new(1, 1), Mark::Nought);
        state.try_place_mark(Pos::new(0, 2)).unwrap();

        assert_eq!(state.outcome, Some(LevelOutcome::HumanWin));
        assert_eq!(state.winner, Some(Mark::Cross));
        assert_eq!(state.stats.wins, 1);
    }

    #[test]
    fn test_moves_rejected_after_level_end() {
        let mut state = GameState::new();
        state.board.mark(Pos::new(0, 0), Mark::Cross);
        state.board.mark(Pos::new(0, 1), Mark::Cross);
        state.try_place_mark(Pos::new(0, 2)).unwrap();

        assert!(state.outcome.is_some());
        state.human_turn = true;
        assert!(state.try_place_mark(Pos::new(2, 2)).is_err());
    }

    #[test]
    fn test_advance_level_walks_all_levels() {
        let mut state = GameState::new();
        assert_eq!(state.config.size, 3);
        assert!(state.advance_level());
        assert_eq!(state.config.size, 4);
        assert!(state.advance_level());
        assert_eq!(state.config.size, 5);
        assert!(!state.advance_level());
    }

    #[test]
    fn test_replay_keeps_session_stats_and_helps() {
        let mut state = GameState::new();
        state.board.mark(Pos::new(0, 0), Mark::Cross);
        state.board.mark(Pos::new(0, 1), Mark::Cross);
        state.try_place_mark(Pos::new(0, 2)).unwrap();
        state.request_help(); // no-op, game over — budget untouched

        state.replay_level();
        assert_eq!(state.stats.games, 1);
        assert_eq!(state.help_remaining, 5);
        assert_eq!(state.board.filled(), 0);
        assert!(state.outcome.is_none());
    }

    #[test]
    fn test_help_decrements_and_marks_square() {
        let mut state = GameState::new();
        state.request_help();
        assert_eq!(state.help_remaining, 4);
        assert!(state.help_position.is_some());

        // Placing a mark clears the suggestion
        let pos = state.help_position.unwrap();
        state.try_place_mark(pos).unwrap();
        assert!(state.help_position.is_none());
    }

    #[test]
    fn test_agent_thread_round_trip() {
        let mut state = GameState::new();
        state.try_place_mark(Pos::new(0, 0)).unwrap();
        state.start_agent_thinking();
        assert!(state.is_agent_thinking());

        // The 3x3 full-depth search finishes well within this window
        let deadline = Instant::now() + Duration::from_secs(30);
        while state.is_agent_thinking() && Instant::now() < deadline {
            state.check_agent_result();
            thread::sleep(Duration::from_millis(10));
        }

        assert!(!state.is_agent_thinking());
        assert_eq!(state.board.filled(), 2);
        assert!(state.human_turn);
        assert_eq!(state.agent_times.len(), 1);
    }
}
