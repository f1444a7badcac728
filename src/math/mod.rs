//! Mathematical utilities: log returns and their summary statistics.

pub mod returns;

pub use returns::*;
