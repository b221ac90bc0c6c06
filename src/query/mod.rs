//! Single-predicate query support
//!
//! A predicate is three tokens, `attribute operator literal`, for example
//! `age > 26` or `name LIKE "smi"`. This module parses the tokens into a
//! `Condition` and evaluates it against one row at a time; the scan itself
//! lives in `Table::select`.

pub mod condition;
pub mod operator;

pub use condition::{tokenize, Condition};
pub use operator::Operator;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
