// s5match: Smart city S5 exemplar matching and personality recommendation
//
// This is the library root. Each module corresponds to a stage of the
// matching/ranking engine.

pub mod analyzer;
pub mod catalog;
pub mod classify;
pub mod config;
pub mod keywords;
pub mod matching;
pub mod output;
pub mod ranking;
