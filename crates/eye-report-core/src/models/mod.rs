//! Domain models for eye examination reports.

mod examination;
mod participants;
mod report;

pub use examination::*;
pub use participants::*;
pub use report::*;
