//! Command implementations for docsync-cli

pub mod opt_out;
pub mod status;
pub mod update;

pub use opt_out::run_opt_out;
pub use status::run_status;
pub use update::run_update;
