pub mod contribute_file;
pub mod launch;
pub mod list;
pub mod send_past;
pub mod status;
