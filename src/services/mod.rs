//! Services: response normalization and command normalization.

mod normalize;
mod util;

pub use normalize::{normalize, normalize_hex, strip_code_fence};
pub use util::{normalize_slash_command, parse_command, Command, CopyTarget};
