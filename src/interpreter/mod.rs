pub mod error;
pub mod parser;

pub use error::ParserError;
pub use parser::{parse, parse_with_diagnostics, Interpreter};
