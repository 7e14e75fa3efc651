pub mod add;
pub mod delete;
pub mod edit;
pub mod export;
pub mod list;
mod lookup;
pub mod show;
pub mod today;

pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use export::handle_export;
pub use list::handle_list;
pub use show::handle_show;
pub use today::handle_today;
