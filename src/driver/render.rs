//! Snapshot rendering for the driver loop.

/// Default byte capacity for rendered state labels.
pub const DEFAULT_LABEL_CAPACITY: usize = 256;

/// Clamp a label to at most `capacity` bytes, cutting on a char boundary.
///
/// Rendering never produces more than the configured capacity regardless
/// of how long a state name is.
pub fn clamp(label: &str, capacity: usize) -> &str {
    if label.len() <= capacity {
        return label;
    }

    let mut end = capacity;
    while !label.is_char_boundary(end) {
        end -= 1;
    }
    &label[..end]
}

/// Format one labeled snapshot line.
///
/// The step counter is zero-padded to a minimum of two digits.
pub fn snapshot_line(step: u64, label: &str) -> String {
    format!("{step:02}: {label}")
}
