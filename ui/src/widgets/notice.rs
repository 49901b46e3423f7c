use egui::{Color32, CornerRadius, Frame, Margin, Ui};
use ministack_business::UserListState;

use crate::utils::colors::{COLOR_GREEN, COLOR_RED};

fn banner(ui: &mut Ui, fill: Color32, text: String) {
    Frame::new()
        .fill(fill)
        .inner_margin(Margin::same(8))
        .corner_radius(CornerRadius::same(4))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.colored_label(Color32::WHITE, text);
        });
}

/// Error and success alerts. Both can be visible at once.
pub fn notice_banners(state: &UserListState, ui: &mut Ui) {
    if let Some(error) = state.error() {
        banner(ui, COLOR_RED, error.to_string());
        ui.add_space(4.0);
    }
    if let Some(success) = state.success() {
        banner(ui, COLOR_GREEN, success.to_string());
        ui.add_space(4.0);
    }
}
