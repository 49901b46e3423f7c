use egui::{Button, TextEdit, Ui};
use log::debug;
use ministack_business::UserListController;

/// New-user form. Inputs and the submit button are disabled while a request
/// is running.
pub fn user_form(users: &mut UserListController, ui: &mut Ui) {
    let busy = users.state().is_busy();

    ui.heading("Add New User");
    ui.add_space(4.0);

    let mut submit = false;
    egui::Grid::new("new_user_form")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            let draft = users.draft_mut();

            let label = ui.label("Name:");
            let name = ui
                .add_enabled(
                    !busy,
                    TextEdit::singleline(&mut draft.name).hint_text("Enter name"),
                )
                .labelled_by(label.id);
            ui.end_row();

            let label = ui.label("Email:");
            let email = ui
                .add_enabled(
                    !busy,
                    TextEdit::singleline(&mut draft.email).hint_text("Enter email"),
                )
                .labelled_by(label.id);
            ui.end_row();

            let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
            submit |= enter && (name.lost_focus() || email.lost_focus());
        });

    let label = if busy { "Adding..." } else { "Add user" };
    submit |= ui.add_enabled(!busy, Button::new(label)).clicked();

    if submit && !busy {
        if let Err(err) = users.create_user() {
            debug!("user_form: draft rejected: {err}");
        }
    }
}
