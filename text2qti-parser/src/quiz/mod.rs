//! Main module for quiz parsing functionality

pub mod error;
pub mod frontmatter;
pub mod lexing;
pub mod loader;
pub mod model;
pub mod parsing;
pub mod patterns;
pub mod testing;
pub mod validator;
