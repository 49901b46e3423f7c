use egui::{Button, Frame, Margin, RichText, ScrollArea, Ui};
use ministack_business::{User, UserId, UserListController};

use crate::utils::colors::COLOR_MUTED;

/// One card per user. Returns true if Delete was clicked.
fn user_card(user: &User, ui: &mut Ui) -> bool {
    Frame::group(ui.style())
        .inner_margin(Margin::symmetric(10, 8))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(&user.name).strong());
                    ui.label(RichText::new(&user.email).color(COLOR_MUTED));
                    ui.label(
                        RichText::new(format!("Joined: {}", user.created_at.local_date()))
                            .small()
                            .color(COLOR_MUTED),
                    );
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let clicked = ui.button("Delete").clicked();
                    ui.label(
                        RichText::new(format!("ID: {}", user.id))
                            .small()
                            .color(COLOR_MUTED),
                    );
                    clicked
                })
                .inner
            })
            .inner
        })
        .inner
}

/// "Users (N)" section with the Refresh button and the user cards.
pub fn user_list(users: &mut UserListController, ui: &mut Ui) {
    let busy = users.state().is_busy();
    let count = users.state().users().len();

    let refresh = ui
        .horizontal(|ui| {
            ui.heading(format!("Users ({count})"));
            let label = if busy { "Refreshing..." } else { "Refresh" };
            ui.add_enabled(!busy, Button::new(label)).clicked()
        })
        .inner;

    ui.add_space(4.0);

    let mut to_delete: Option<UserId> = None;
    if count == 0 {
        if busy {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading users...");
            });
        } else {
            ui.label(RichText::new("No users found. Add a user to get started.").italics());
        }
    } else {
        ScrollArea::vertical()
            .auto_shrink([false, true])
            .show(ui, |ui| {
                for user in users.state().users() {
                    if user_card(user, ui) {
                        to_delete = Some(user.id);
                    }
                    ui.add_space(4.0);
                }
            });
    }

    if refresh {
        users.refresh();
    }
    if let Some(id) = to_delete {
        users.delete_user(id);
    }
}
