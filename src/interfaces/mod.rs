//! Batch file interfaces used by the command-line front end.

pub mod csv;
