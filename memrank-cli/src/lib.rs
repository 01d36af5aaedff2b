pub mod args;
pub mod cli;
pub mod commands;
pub mod context;
pub mod handlers;
pub mod output;
pub mod utils;

pub use cli::Cli;
pub use context::MemrankCliContext;
pub use output::{
    CliColors, error_code, error_response, format_info, format_success, format_warning,
    output_error_json, print_check_report, print_ranked_list,
};
pub use utils::{build_query, parse_records, read_json_input};
