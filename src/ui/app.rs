//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::info;

use super::board_view::{BoardView, Overlay};
use super::game_state::{GameResult, GameState, WinType};
use super::theme::*;
use crate::{EngineConfig, GameError, Pos, Stone};

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
    show_heatmap: bool,
}

impl GomokuApp {
    /// Create the app for the given engine settings
    pub fn new(_cc: &eframe::CreationContext<'_>, config: EngineConfig) -> Result<Self, GameError> {
        Ok(Self {
            state: GameState::new(config)?,
            board_view: BoardView::default(),
            show_debug: true,
            show_heatmap: false,
        })
    }

    fn quit(ctx: &Context) {
        info!("quit requested");
        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play Black)").clicked() {
                        self.state.restart_as(Stone::White);
                        ui.close_menu();
                    }
                    if ui.button("New Game (play White)").clicked() {
                        self.state.restart_as(Stone::Black);
                        ui.close_menu();
                    }
                    if ui.button("Restart (N)").clicked() {
                        self.state.restart();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Surrender (S)").clicked() {
                        self.state.surrender();
                        ui.close_menu();
                    }
                    if ui.button("Quit").clicked() {
                        Self::quit(ui.ctx());
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                    ui.checkbox(&mut self.show_heatmap, "Score Heatmap (M)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.state.game.board().size();
                    ui.label(format!("You: {} - {size}x{size}", self.state.game.human_stone().name()));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_moves_card(ui);
                ui.add_space(10.0);

                self.render_session_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over.clone() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new().fill(CARD_BG).corner_radius(CornerRadius::same(8)).inner_margin(12.0)
    }

    fn card_heading(ui: &mut egui::Ui, text: &str) {
        ui.label(RichText::new(text).size(10.0).color(TEXT_MUTED));
        ui.add_space(6.0);
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn();
            let (stone_char, accent, glyph) = match turn {
                Stone::Black => ("●", TURN_BLACK, TEXT_PRIMARY),
                Stone::White => ("○", TURN_WHITE, BLACK_STONE),
                Stone::Empty => ("-", CARD_BG, TEXT_MUTED),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    stone_char,
                    egui::FontId::proportional(28.0),
                    glyph,
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = if turn.is_player() { turn.name().to_uppercase() } else { "-".to_string() };
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_turn() {
                        ("AI thinking...", STATUS_WARN)
                    } else {
                        ("Your turn", STATUS_OK)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    /// Move counters for the current game
    fn render_moves_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_heading(ui, "MOVES");
            let game = &self.state.game;
            ui.label(
                RichText::new(format!("Total: {}", game.history().len()))
                    .size(14.0)
                    .color(TEXT_PRIMARY),
            );
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("● {}", game.moves_by(Stone::Black))).size(12.0).color(TEXT_SECONDARY));
                ui.add_space(12.0);
                ui.label(RichText::new(format!("○ {}", game.moves_by(Stone::White))).size(12.0).color(TEXT_SECONDARY));
            });
            ui.label(
                RichText::new(format!("{:.1}s", self.state.elapsed().as_secs_f32()))
                    .size(10.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Wins and win ratio across finished games
    fn render_session_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_heading(ui, "SESSION");
            let stats = &self.state.stats;
            ui.label(RichText::new(format!("Games: {}", stats.games().len())).size(12.0).color(TEXT_PRIMARY));
            ui.label(
                RichText::new(format!(
                    "Black {} - White {}",
                    stats.wins(Stone::Black),
                    stats.wins(Stone::White)
                ))
                .size(12.0)
                .color(TEXT_SECONDARY),
            );
            if let Some((black, white)) = stats.win_ratio() {
                ui.label(
                    RichText::new(format!("Win ratio: {black:.0}% / {white:.0}%"))
                        .size(11.0)
                        .color(STATUS_INFO),
                );
            }
            if let Some(last) = stats.games().last() {
                ui.label(
                    RichText::new(format!(
                        "Last: {} moves in {:.0}s",
                        last.total_moves,
                        last.duration.as_secs_f32()
                    ))
                    .size(10.0)
                    .color(TEXT_MUTED),
                );
            }
        });
    }

    fn action_button(ui: &mut egui::Ui, label: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(egui::Label::new(RichText::new(label).size(12.0).color(TEXT_PRIMARY)).sense(egui::Sense::click()))
                    .clicked()
            })
            .inner
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_heading(ui, "ACTIONS");

            ui.horizontal(|ui| {
                if Self::action_button(ui, "Restart") {
                    self.state.restart();
                }
                if Self::action_button(ui, "Surrender") {
                    self.state.surrender();
                }
            });
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                if Self::action_button(ui, "Hint") {
                    self.state.request_suggestion();
                }
                if Self::action_button(ui, "Quit") {
                    Self::quit(ui.ctx());
                }
            });
        });
    }

    /// Statistics of the engine's last move
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            Self::card_heading(ui, "AI DEBUG");

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(format!("Score: {}", result.score)).size(11.0).strong().color(STATUS_OK));
                    ui.label(RichText::new(format!("{} ties", result.ties)).size(10.0).color(TEXT_SECONDARY));
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}us", result.time_us)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} cells", result.scanned)).size(10.0).color(TEXT_MUTED));
                    });
                });
            });

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("→ {}", Self::label(result.best_move)))
                    .size(12.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );
        });
    }

    /// Cell name as drawn on the board edges
    fn label(pos: Pos) -> String {
        if pos.x < 26 {
            format!("{}{}", (b'A' + pos.x) as char, pos.y as u32 + 1)
        } else {
            pos.to_string()
        }
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let (headline, detail) = match (result.winner, result.win_type) {
            (None, _) | (_, WinType::Draw) => ("DRAW".to_string(), "board full".to_string()),
            (Some(winner), win_type) => {
                let you = if winner == self.state.game.human_stone() { "You win" } else { "AI wins" };
                let how = match win_type {
                    WinType::FiveInRow => "5-in-a-row",
                    WinType::Surrender => "surrender",
                    WinType::Draw => "board full",
                };
                (format!("{} WINS!", winner.name().to_uppercase()), format!("{you} by {how}"))
            }
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);
                    if Self::action_button(ui, "New Game") {
                        self.state.restart();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("⚠").size(14.0));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let heatmap = self.show_heatmap.then(|| self.state.heatmap());
            let winning_line = self.state.game_over.as_ref().and_then(|r| r.winning_line.as_deref());
            let turn = if self.state.is_human_turn() { self.state.game.human_stone() } else { Stone::Empty };

            let overlay = Overlay {
                turn,
                last_move: self.state.game.last_move().map(|(pos, _)| pos),
                suggested_move: self.state.suggested_move,
                winning_line,
                heatmap: heatmap.as_deref(),
            };
            let clicked = self.board_view.show(ui, self.state.game.board(), &overlay);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_stone(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, surrender, debug, heatmap, hint) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::S),
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::M),
                i.key_pressed(egui::Key::H),
            )
        });

        if new_game {
            self.state.restart();
        }
        if surrender {
            self.state.surrender();
        }
        if debug {
            self.show_debug = !self.show_debug;
        }
        if heatmap {
            self.show_heatmap = !self.show_heatmap;
        }
        if hint {
            self.state.request_suggestion();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The engine answers within a frame, so it runs inline
        let ai_to_move = self.state.is_ai_turn();
        self.state.run_ai_turn();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if ai_to_move {
            ctx.request_repaint();
        }
    }
}
