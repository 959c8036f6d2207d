pub mod batch;
pub mod probe;
pub mod result;

pub mod prelude {
    pub use super::batch::BatchRunner;
    pub use super::probe::{Prober, normalize_url};
    pub use super::result::{Category, Outcome, ProbeResult};
}

use std::fmt::Write;

/// Render an error followed by every `source()` in its chain.
pub fn error_chain(mut err: &(dyn std::error::Error + 'static)) -> String {
    let mut s = format!("{}", err);
    while let Some(src) = err.source() {
        let _ = write!(s, "\n\nCaused by: {}", src);
        err = src;
    }
    s
}
