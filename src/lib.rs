pub use crate::errors::{IdlError, Location, SourceContext};
pub use crate::syntax::{parse, parse_source, parse_str};

pub mod ast;
pub mod cli;
pub mod errors;
pub mod syntax;
