pub mod entry_list;
pub mod filter_bar;
pub mod new_task;
pub mod theme;
pub mod topbar;
