//! Parsing for the craft recipe notation.
//!
//! [`grammar`] turns the token stream into the raw syntax tree, [`transform`]
//! removes the wrapper nodes the grammar's single-alternative productions
//! introduce, and [`treeviz`] renders any tree stage for inspection.

pub mod grammar;
pub mod syntax;
pub mod transform;
pub mod treeviz;

pub use grammar::{parse, ParseError};
pub use syntax::{SyntaxNode, SyntaxTag};
pub use transform::{collapse_chains, flatten_expressions};
pub use treeviz::to_treeviz_str;
