pub mod error;
pub mod logger;
pub mod text_file;
pub mod validation;
