//! Multi-Level Tic-Tac-Toe GUI
//!
//! A graphical interface for playing Tic-Tac-Toe against the search agent
//! across three escalating levels.

use tictactoe::ui::TicTacToeApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 700.0])
            .with_min_inner_size([400.0, 500.0])
            .with_title("Multi-Level Tic-Tac-Toe"),
        ..Default::default()
    };

    eframe::run_native(
        "Multi-Level Tic-Tac-Toe",
        options,
        Box::new(|cc| Ok(Box::new(TicTacToeApp::new(cc)))),
    )
}
