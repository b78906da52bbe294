#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod file;
pub mod memory;
