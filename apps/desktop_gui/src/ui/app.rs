use crossbeam_channel::{Receiver, Sender};

use crate::controller::{
    events::UiAction,
    orchestration::dispatch_ui_action,
    reducer::{reduce, AppState},
};
use crate::ui::{panels, theme};

/// Upper bound on actions applied per frame; the rest wait for the next one.
const MAX_ACTIONS_PER_FRAME: usize = 64;

pub struct SplitBillApp {
    action_tx: Sender<UiAction>,
    action_rx: Receiver<UiAction>,
    state: AppState,
    queue_status: String,
    theme_applied: bool,
}

impl SplitBillApp {
    pub fn new(action_tx: Sender<UiAction>, action_rx: Receiver<UiAction>, state: AppState) -> Self {
        Self {
            action_tx,
            action_rx,
            state,
            queue_status: String::new(),
            theme_applied: false,
        }
    }

    fn process_ui_actions(&mut self) -> bool {
        let mut applied = false;
        for action in self.action_rx.try_iter().take(MAX_ACTIONS_PER_FRAME) {
            reduce(&mut self.state, action);
            applied = true;
        }
        applied
    }

    fn show_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("friends_sidebar")
            .resizable(false)
            .exact_width(380.0)
            .show(ctx, |ui| {
                ui.add_space(12.0);
                egui::ScrollArea::vertical()
                    .auto_shrink([false, true])
                    .max_height(ui.available_height() * 0.6)
                    .show(ui, |ui| {
                        panels::show_roster(ui, &self.state, &self.action_tx, &mut self.queue_status);
                    });

                ui.add_space(12.0);
                if self.state.session.is_add_form_open() {
                    panels::show_add_friend_form(
                        ui,
                        &self.state,
                        &self.action_tx,
                        &mut self.queue_status,
                    );
                    ui.add_space(8.0);
                }

                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    let label = self.state.session.add_form_toggle_label();
                    if ui.button(label).clicked() {
                        dispatch_ui_action(
                            &self.action_tx,
                            UiAction::ToggleAddForm,
                            &mut self.queue_status,
                        );
                    }
                });
            });
    }

    fn show_status_bar(&self, ctx: &egui::Context) {
        let message = self
            .state
            .last_error
            .as_ref()
            .map(|err| err.message().to_string())
            .or_else(|| (!self.queue_status.is_empty()).then(|| self.queue_status.clone()));

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| match message {
            Some(message) => {
                ui.colored_label(theme::OWE_RED, message);
            }
            None => {
                ui.weak(format!("{} friends", self.state.session.friends().len()));
            }
        });
    }
}

impl eframe::App for SplitBillApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            theme::apply(ctx);
            self.theme_applied = true;
        }

        if self.process_ui_actions() {
            self.queue_status.clear();
            ctx.request_repaint();
        }

        self.show_status_bar(ctx);
        self.show_sidebar(ctx);
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::show_split_form(ui, &self.state, &self.action_tx, &mut self.queue_status);
        });

        if !self.action_rx.is_empty() {
            ctx.request_repaint();
        }
    }
}
