pub mod ordering;
pub mod parse;
