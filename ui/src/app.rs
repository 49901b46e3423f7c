use std::time::Duration;

use crate::{state::State, widgets};

/// How often to repaint while a request or a message timer is pending.
const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

pub struct MinistackApp {
    state: State,
}

impl MinistackApp {
    /// Called once before the first frame. Kicks off the initial user load and
    /// the first health check.
    pub fn new(mut state: State) -> Self {
        state.users.activate();
        state.check_api_status();
        Self { state }
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }
}

impl eframe::App for MinistackApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.sync();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                if widgets::api_status(&self.state.api_status, ui).clicked() {
                    self.state.check_api_status();
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            widgets::user_management(&mut self.state.users, ui);
        });

        // Outcomes and the notice timer arrive off-thread; keep frames coming.
        if self.state.has_pending_work() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
