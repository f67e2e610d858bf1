//! Persistence of the log as a flat delimited text file.

pub mod timefile;

pub use timefile::TimeFile;
