use egui::{Color32, Response, Ui};
use ministack_business::{APIAvailability, ApiStatus};
use ministack_states::StateCtx;

use crate::utils::colors::{COLOR_AMBER, COLOR_GREEN, COLOR_RED};

/// Radius of the status indicator circle (in pixels)
const STATUS_DOT_RADIUS: f32 = 5.0;

/// Renders a single clickable status dot with tooltip using a drawn circle
fn status_dot(ui: &mut Ui, tooltip_text: String, dot_color: Color32) -> Response {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(STATUS_DOT_RADIUS * 2.0, STATUS_DOT_RADIUS * 2.0),
        egui::Sense::click(),
    );

    let center = rect.center();
    ui.painter()
        .circle(center, STATUS_DOT_RADIUS, dot_color, egui::Stroke::NONE);

    response.on_hover_text(tooltip_text)
}

/// Tooltip and color for the last health check.
pub fn api_status_info(status: &ApiStatus) -> (String, Color32) {
    if status.is_checking() {
        return ("api: checking".to_owned(), COLOR_AMBER);
    }
    match status.api_availability() {
        APIAvailability::Available(at) => {
            let database = status.database().unwrap_or("unknown");
            // api up but database down
            let color = if status.database_healthy() {
                COLOR_GREEN
            } else {
                COLOR_AMBER
            };
            (
                format!(
                    "api: running\ndatabase: {database}\nchecked: {}",
                    at.format("%H:%M:%S")
                ),
                color,
            )
        }
        APIAvailability::Unavailable((at, err)) => (
            format!("api: {err}\nchecked: {}", at.format("%H:%M:%S")),
            COLOR_RED,
        ),
        APIAvailability::Unknown => ("api: unknown".to_owned(), COLOR_AMBER),
    }
}

/// Displays the backend status indicator. Clicking it checks again.
pub fn api_status(status_ctx: &StateCtx<ApiStatus>, ui: &mut Ui) -> Response {
    let (tooltip, color) = api_status_info(status_ctx.state());
    ui.horizontal(|ui| status_dot(ui, tooltip, color)).inner
}
