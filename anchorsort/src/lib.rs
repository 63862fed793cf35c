pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    column_spec_from_args, load_input_files, load_rules, parse_delimiter, render_keyword_file,
    resolve_output_path,
};
