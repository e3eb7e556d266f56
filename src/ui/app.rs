//! Main application for the Gomoku GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, RichText, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::GameConfig;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
}

impl GomokuApp {
    /// Create a new app from the loaded configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(&config),
            board_view: BoardView::default(),
        }
    }

    /// Render the control row: restart, AI toggle and status
    fn render_controls(&mut self, ctx: &Context) {
        TopBottomPanel::bottom("controls").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Restart").clicked() {
                    self.state.reset();
                }

                let mut ai_enabled = self.state.ai_enabled;
                if ui.checkbox(&mut ai_enabled, "AI opponent").changed() {
                    self.state.set_ai_enabled(ai_enabled);
                }

                ui.separator();
                self.render_status(ui);
            });

            if let Some(result) = &self.state.last_ai_result {
                ui.label(
                    RichText::new(format!(
                        "AI: {} | score {} | {} candidates, {} tied | {}ms",
                        result.best_move, result.score, result.candidates, result.ties, result.time_ms
                    ))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
                );
            }

            if let Some(msg) = &self.state.message {
                ui.label(RichText::new(msg).size(11.0).color(STATUS_WARNING));
            }
            ui.add_space(6.0);
        });
    }

    /// Render turn / result status
    fn render_status(&self, ui: &mut egui::Ui) {
        let text = if let Some(result) = self.state.result_text() {
            RichText::new(result).strong().color(WIN_HIGHLIGHT)
        } else if self.state.is_ai_pending() {
            RichText::new("AI thinking...").color(STATUS_WARNING)
        } else if let Some(turn) = self.state.board.turn() {
            RichText::new(format!("{} to move", turn.name()))
        } else {
            RichText::new("")
        };
        ui.label(text);

        ui.label(
            RichText::new(format!("Move #{}", self.state.board.stone_count()))
                .size(11.0)
                .color(TEXT_SECONDARY),
        );
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let interactive = !self.state.board.is_over() && !self.state.is_ai_turn();

                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    self.state.last_move,
                    self.state.winning_line,
                    interactive,
                );

                if let Some(pos) = clicked {
                    if let Err(msg) = self.state.try_place_stone(pos) {
                        self.state.message = Some(msg);
                    }
                }
            });
        });
    }

    /// Announce the result once the game has ended
    fn render_game_over(&mut self, ctx: &Context) {
        let Some(result) = self.state.result_text() else {
            return;
        };

        egui::Window::new("Game over")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(result).size(18.0).strong());
                    ui.add_space(8.0);
                    if ui.button("New Game").clicked() {
                        self.state.reset();
                    }
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // N - New game
        if ctx.input(|i| i.key_pressed(egui::Key::N)) {
            self.state.reset();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Play the computer's move once its delay is up
        self.state.poll_ai(Instant::now());

        self.render_controls(ctx);
        self.render_board(ctx);
        self.render_game_over(ctx);

        if let Some(wait) = self.state.time_until_ai(Instant::now()) {
            ctx.request_repaint_after(wait);
        }
    }
}
