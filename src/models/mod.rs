//! Domain models for behaviour-driven test reports.

pub mod feature;
pub mod report_stats;
pub mod scenario;
pub mod sorting_method;
pub mod status;
pub mod step;
pub mod step_object;
pub mod tag_object;
pub mod trend;

// Re-export commonly used types
pub use feature::Feature;
pub use report_stats::ReportStats;
pub use scenario::{ElementType, Scenario};
pub use sorting_method::SortingMethod;
pub use status::{Status, StatusCounter};
pub use step::{Step, StepResult};
pub use step_object::StepObject;
pub use tag_object::TagObject;
pub use trend::{Trend, Trends};

/// Encode text for use inside a page file name.
///
/// ASCII alphanumerics are kept; every other character becomes `_` followed
/// by the hex of its UTF-8 bytes, so distinct inputs never share a name.
pub fn file_name_component(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() {
            encoded.push(c);
        } else {
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                encoded.push_str(&format!("_{:02x}", byte));
            }
        }
    }
    encoded
}

/// Format a nanosecond duration for display, e.g. `1m 02s 500ms`.
pub fn format_duration(nanos: u64) -> String {
    let millis = nanos / 1_000_000;
    let (hours, rest) = (millis / 3_600_000, millis % 3_600_000);
    let (minutes, rest) = (rest / 60_000, rest % 60_000);
    let (seconds, millis) = (rest / 1_000, rest % 1_000);

    if hours > 0 {
        format!("{}h {:02}m {:02}s {:03}ms", hours, minutes, seconds, millis)
    } else if minutes > 0 {
        format!("{}m {:02}s {:03}ms", minutes, seconds, millis)
    } else {
        format!("{}s {:03}ms", seconds, millis)
    }
}
