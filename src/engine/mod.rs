pub mod template;

pub use template::{apply_template, number_text};
