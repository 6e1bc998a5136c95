pub mod check;
pub mod config;
pub mod context;
pub mod init;

pub use check::{FileOutcome, apply_cli_overrides, read_file_list, run_check, run_check_impl};
pub use config::{run_config, run_config_show_impl, run_config_validate_impl};
pub use context::{color_choice_to_mode, load_config, write_output};
pub use init::{generate_config_template, run_init, run_init_impl};
