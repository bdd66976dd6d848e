pub mod line_file;

pub use line_file::{read_lines, write_lines};
