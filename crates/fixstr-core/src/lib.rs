pub mod config;
pub mod pair;
pub mod reduce;
pub mod verify;

pub use pair::{first_bad_pair, is_bad_pair, is_reduced};
pub use reduce::{fix_the_string, reduce_report, reduce_with, Reduction, Strategy};

/// Core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
