mod api_status;
mod notice;
mod user_form;
mod user_list;

pub use api_status::{api_status, api_status_info};
pub use notice::notice_banners;
pub use user_form::user_form;
pub use user_list::user_list;

use egui::Ui;
use ministack_business::UserListController;

/// The whole user-management page: alerts, the new-user form and the list.
pub fn user_management(users: &mut UserListController, ui: &mut Ui) {
    ui.heading("User Management");
    ui.add_space(8.0);

    notice_banners(users.state(), ui);

    user_form(users, ui);
    ui.separator();
    user_list(users, ui);
}
