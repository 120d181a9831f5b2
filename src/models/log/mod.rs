pub mod controller_state;
pub mod log_entry;
