//! Main module for agc library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod locating;
pub mod parsing;
pub mod testing;
