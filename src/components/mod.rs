//! UI Components
//!
//! Leptos components for the catalog page.

mod book_form;
mod book_list;
mod delete_confirm_button;
mod filter_bar;
mod theme_toggle;

pub use book_form::BookForm;
pub use book_list::BookList;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use theme_toggle::ThemeToggle;
