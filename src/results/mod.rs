pub mod format;
pub mod parser;

pub use format::render;
pub use parser::{parse, ParsedResults};
