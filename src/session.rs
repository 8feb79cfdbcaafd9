//! Level configurations and session statistics
//!
//! The statistics that the original presentation kept in process-wide
//! globals live here as an explicit [`SessionStats`] value, created with the
//! session and read back when a summary is printed.

use std::time::Duration;

/// Per-level configuration tuple: board size, win length, and the agent's
/// depth limit (`None` searches the full tree).
#[derive(Debug, Clone, Copy)]
pub struct LevelConfig {
    pub label: &'static str,
    pub size: usize,
    pub win_len: usize,
    pub depth_limit: Option<u32>,
}

/// The three escalating levels. Only level 1 is small enough for an
/// unlimited search.
pub const LEVELS: [LevelConfig; 3] = [
    LevelConfig {
        label: "Level 1 - Easy (3x3)",
        size: 3,
        win_len: 3,
        depth_limit: None,
    },
    LevelConfig {
        label: "Level 2 - Medium (4x4)",
        size: 4,
        win_len: 4,
        depth_limit: Some(4),
    },
    LevelConfig {
        label: "Level 3 - Hard (5x5)",
        size: 5,
        win_len: 5,
        depth_limit: Some(3),
    },
];

/// How a level ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelOutcome {
    HumanWin,
    AgentWin,
    Draw,
}

impl LevelOutcome {
    fn as_str(self) -> &'static str {
        match self {
            LevelOutcome::HumanWin => "HUMAN_WIN",
            LevelOutcome::AgentWin => "AGENT_WIN",
            LevelOutcome::Draw => "DRAW",
        }
    }
}

/// Running win/loss/draw counters and timing history for one session
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub human_moves: u32,
    pub agent_moves: u32,
    pub human_move_times: Vec<Duration>,
    pub agent_move_times: Vec<Duration>,
}

fn mean_ms(times: &[Duration]) -> f64 {
    if times.is_empty() {
        return 0.0;
    }
    total_ms(times) / times.len() as f64
}

fn total_ms(times: &[Duration]) -> f64 {
    times.iter().map(|t| t.as_secs_f64() * 1000.0).sum()
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one finished level into the session counters and print its
    /// console summary.
    pub fn record_level(
        &mut self,
        config: &LevelConfig,
        outcome: LevelOutcome,
        human_times: &[Duration],
        agent_times: &[Duration],
    ) {
        self.games += 1;
        match outcome {
            LevelOutcome::HumanWin => self.wins += 1,
            LevelOutcome::AgentWin => self.losses += 1,
            LevelOutcome::Draw => self.draws += 1,
        }
        self.human_moves += human_times.len() as u32;
        self.agent_moves += agent_times.len() as u32;
        self.human_move_times.extend_from_slice(human_times);
        self.agent_move_times.extend_from_slice(agent_times);

        print_level_summary(config, outcome, human_times, agent_times);
    }

    /// Fraction of games the human won, in percent
    pub fn human_accuracy(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64 * 100.0
        }
    }

    /// Fraction of games the agent won, in percent
    pub fn agent_accuracy(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.losses as f64 / self.games as f64 * 100.0
        }
    }

    /// Print the overall console summary for the session.
    pub fn print_final_summary(&self) {
        println!("\n===== OVERALL PERFORMANCE =====");
        println!("Games Played: {}", self.games);
        println!(
            "Wins: {} | Losses: {} | Draws: {}",
            self.wins, self.losses, self.draws
        );
        println!(
            "Total Human Moves: {} | Total Agent Moves: {}",
            self.human_moves, self.agent_moves
        );
        println!(
            "Accuracy (Human): {:.2}% | Accuracy (Agent): {:.2}%",
            self.human_accuracy(),
            self.agent_accuracy()
        );
        println!("================================");
    }
}

fn print_level_summary(
    config: &LevelConfig,
    outcome: LevelOutcome,
    human_times: &[Duration],
    agent_times: &[Duration],
) {
    println!("\n--- {} Summary ---", config.label);
    println!(
        "Human Avg: {:.2} ms | Total: {:.2} ms",
        mean_ms(human_times),
        total_ms(human_times)
    );
    println!(
        "Agent Avg: {:.2} ms | Total: {:.2} ms",
        mean_ms(agent_times),
        total_ms(agent_times)
    );
    println!(
        "Human Moves: {} | Agent Moves: {}",
        human_times.len(),
        agent_times.len()
    );
    println!("Winner: {}", outcome.as_str());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_configs() {
        assert_eq!(LEVELS.len(), 3);
        for config in &LEVELS {
            assert!(config.win_len <= config.size);
            assert_eq!(config.win_len, config.size);
        }
        assert_eq!(LEVELS[0].depth_limit, None);
        assert_eq!(LEVELS[1].depth_limit, Some(4));
        assert_eq!(LEVELS[2].depth_limit, Some(3));
    }

    #[test]
    fn test_record_level_updates_counters() {
        let mut stats = SessionStats::new();
        let human = [Duration::from_millis(120), Duration::from_millis(80)];
        let agent = [Duration::from_millis(40)];

        stats.record_level(&LEVELS[0], LevelOutcome::HumanWin, &human, &agent);
        stats.record_level(&LEVELS[0], LevelOutcome::Draw, &human, &agent);

        assert_eq!(stats.games, 2);
        assert_eq!(stats.wins, 1);
        assert_eq!(stats.draws, 1);
        assert_eq!(stats.losses, 0);
        assert_eq!(stats.human_moves, 4);
        assert_eq!(stats.agent_moves, 2);
        assert_eq!(stats.human_move_times.len(), 4);
    }

    #[test]
    fn test_accuracy_percentages() {
        let mut stats = SessionStats::new();
        assert_eq!(stats.human_accuracy(), 0.0);
        assert_eq!(stats.agent_accuracy(), 0.0);

        stats.record_level(&LEVELS[0], LevelOutcome::HumanWin, &[], &[]);
        stats.record_level(&LEVELS[0], LevelOutcome::AgentWin, &[], &[]);
        stats.record_level(&LEVELS[0], LevelOutcome::AgentWin, &[], &[]);
        stats.record_level(&LEVELS[0], LevelOutcome::Draw, &[], &[]);

        assert_eq!(stats.human_accuracy(), 25.0);
        assert_eq!(stats.agent_accuracy(), 50.0);
    }
}
