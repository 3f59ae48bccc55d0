// Core modules implementing the parser, value tree, and error modeling.
pub mod error;
pub mod parser;
pub mod value;
