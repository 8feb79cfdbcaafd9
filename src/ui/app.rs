//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, Frame, RichText, TopBottomPanel};

use crate::rules::find_horizontal_run;
use crate::LevelOutcome;
use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;

/// Which screen is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    MainMenu,
    Playing,
    LevelFailed,
    Completed,
}

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    screen: Screen,
    state: GameState,
    board_view: BoardView,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            screen: Screen::MainMenu,
            state: GameState::new(),
            board_view: BoardView::default(),
        }
    }
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    fn quit(&self, ctx: &Context) {
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    /// Full-window message screen: a title plus key-bound prompt lines
    fn render_message_screen(&self, ctx: &Context, title: &str, lines: &[&str]) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                ui.add_space(ui.available_height() * 0.35);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).size(32.0).strong().color(TEXT_PRIMARY));
                    for line in lines {
                        ui.add_space(24.0);
                        ui.label(RichText::new(*line).size(22.0).color(TEXT_PRIMARY));
                    }
                });
            });
    }

    fn render_main_menu(&mut self, ctx: &Context) {
        self.render_message_screen(
            ctx,
            "Multi-Level Tic-Tac-Toe",
            &["Press ENTER to Start", "Press Q to Quit"],
        );

        // Read keys first: viewport commands must not be sent while the
        // input lock is held
        let (start, quit) =
            ctx.input(|i| (i.key_pressed(egui::Key::Enter), i.key_pressed(egui::Key::Q)));
        if start {
            self.state = GameState::new();
            self.screen = Screen::Playing;
        }
        if quit {
            self.quit(ctx);
        }
    }

    fn render_level_failed(&mut self, ctx: &Context) {
        let title = format!("You lost or drew {}!", self.state.config.label);
        self.render_message_screen(
            ctx,
            &title,
            &["Press Y to play again", "Press Q to quit"],
        );

        let (replay, quit) =
            ctx.input(|i| (i.key_pressed(egui::Key::Y), i.key_pressed(egui::Key::Q)));
        if replay {
            self.state.replay_level();
            self.screen = Screen::Playing;
        }
        if quit {
            self.state.stats.print_final_summary();
            self.quit(ctx);
        }
    }

    fn render_completed(&mut self, ctx: &Context) {
        let stats = format!(
            "Wins: {}  Losses: {}  Draws: {}",
            self.state.stats.wins, self.state.stats.losses, self.state.stats.draws
        );
        self.render_message_screen(
            ctx,
            "You completed all levels!",
            &[&stats, "Press Q to quit"],
        );

        if ctx.input(|i| i.key_pressed(egui::Key::Q)) {
            self.quit(ctx);
        }
    }

    /// Render the status panel below the board
    fn render_status_panel(&self, ctx: &Context) {
        TopBottomPanel::bottom("status_panel")
            .exact_height(PANEL_HEIGHT)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                ui.label(
                    RichText::new(self.state.config.label)
                        .size(16.0)
                        .strong()
                        .color(TEXT_PRIMARY),
                );

                let line = match self.state.outcome {
                    Some(LevelOutcome::HumanWin) => "You WIN!".to_string(),
                    Some(LevelOutcome::AgentWin) => "Agent WINS!".to_string(),
                    Some(LevelOutcome::Draw) => "Draw!".to_string(),
                    None => format!(
                        "Wins:{}  Losses:{}  Draws:{}",
                        self.state.stats.wins, self.state.stats.losses, self.state.stats.draws
                    ),
                };
                ui.label(RichText::new(line).size(14.0).color(TEXT_PRIMARY));

                if self.state.outcome.is_none() {
                    let help = if self.state.is_agent_thinking() {
                        "Agent thinking...".to_string()
                    } else {
                        format!("Helps left: {} (press H)", self.state.help_remaining)
                    };
                    ui.label(RichText::new(help).size(14.0).color(TEXT_MUTED));
                }
            });
    }

    fn render_playing(&mut self, ctx: &Context) {
        // H asks the agent for a suggestion
        if ctx.input(|i| i.key_pressed(egui::Key::H)) {
            self.state.request_help();
        }

        self.state.check_agent_result();
        if !self.state.human_turn && !self.state.is_agent_thinking() && self.state.outcome.is_none()
        {
            self.state.start_agent_thinking();
        }

        self.render_status_panel(ctx);

        let win_run = self.state.winner.and_then(|winner| {
            find_horizontal_run(&self.state.board, self.state.config.win_len, winner)
        });
        let interactive = self.state.human_turn
            && !self.state.is_agent_thinking()
            && self.state.outcome.is_none();

        let mut clicked = None;
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    interactive,
                    self.state.help_position,
                    win_run,
                );
            });

        if let Some(pos) = clicked {
            let _ = self.state.try_place_mark(pos);
        }

        // Leave the finished board up briefly, then move the flow along
        if self.state.outcome.is_some() && self.state.result_display_done() {
            if self.state.outcome == Some(LevelOutcome::HumanWin) {
                if self.state.advance_level() {
                    self.screen = Screen::Playing;
                } else {
                    self.state.stats.print_final_summary();
                    self.screen = Screen::Completed;
                }
            } else {
                self.screen = Screen::LevelFailed;
            }
        }

        // Keep polling while the agent searches or the result pause runs
        if self.state.is_agent_thinking() || self.state.outcome.is_some() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::MainMenu => self.render_main_menu(ctx),
            Screen::Playing => self.render_playing(ctx),
            Screen::LevelFailed => self.render_level_failed(ctx),
            Screen::Completed => self.render_completed(ctx),
        }
    }
}
