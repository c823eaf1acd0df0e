// Textual matching — similarity metric and best-match selection.

pub mod matcher;
pub mod similarity;
