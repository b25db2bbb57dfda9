extern crate itertools;
extern crate log;

pub mod errors;
pub mod limiter;
pub mod report;
pub mod utils;
pub mod validation;

pub use errors::{LevelError, RangeError};
pub use limiter::{apply_lower_boosting, apply_upper_limiting, decibel_limiter, try_decibel_limiter, Band};
pub use utils::proportion;
pub use validation::{check_output_range, sweep, test_limiter, ValidationReport};
