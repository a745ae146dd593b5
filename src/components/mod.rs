//! UI Components
//!
//! Pages and the reusable pieces they are built from.

mod class_roster;
mod delete_confirm_button;
mod field_input;
mod gradebook;
mod header;
mod home;
mod login_form;
mod lookups;
mod marks_filter;
mod notification_bar;
mod pages;
mod profile;
mod resource_page;

pub use class_roster::ClassRoster;
pub use delete_confirm_button::DeleteConfirmButton;
pub use field_input::FieldInput;
pub use gradebook::Gradebook;
pub use header::Header;
pub use home::HomePage;
pub use login_form::LoginForm;
pub use lookups::use_lookups;
pub use marks_filter::MarksFilterPanel;
pub use notification_bar::NotificationBar;
pub use pages::{ClassesPage, MarksPage, RoomsPage, SettingsPage, StudentsPage, SubjectsPage, TeachersPage};
pub use profile::ProfilePage;
pub use resource_page::resource_page;
