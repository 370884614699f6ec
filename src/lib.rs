//! Resume parser library
//!
//! The [`extraction`] module is the pure core: text in, [`ParsedResume`] out.
//! [`input`] turns files into text and [`output`] renders the results.

pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod input;
pub mod output;

pub use config::Config;
pub use error::{Result, ResumeParserError};
pub use extraction::{parse_resume, ParsedResume, ResumeParser};
