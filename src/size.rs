//! Human-readable byte sizes using IEC binary prefixes.
//!
//! ```text
//! 1        → 1.0 B
//! 3000     → 2.9 KiB
//! 3000000  → 2.9 MiB
//! 30e26    → 2481.5 YiB
//! ```

/// Prefixes walked in order; anything past `Zi` is reported as `Yi`.
const PREFIXES: &[&str] = &["", "Ki", "Mi", "Gi", "Ti", "Pi", "Ei", "Zi"];
const OVERFLOW_PREFIX: &str = "Yi";
const STEP: f64 = 1024.0;

/// Format a byte count, e.g. `human_size(1024.0) == "1.0 KiB"`.
pub fn human_size(num: f64) -> String {
    human_size_with_suffix(num, "B")
}

/// Format a count with a custom unit suffix.
///
/// The sign of `num` is preserved: `human_size(-1024.0) == "-1.0 KiB"`.
pub fn human_size_with_suffix(num: f64, suffix: &str) -> String {
    let mut value = num;
    for prefix in PREFIXES {
        if value.abs() < STEP {
            return format!("{value:.1} {prefix}{suffix}");
        }
        value /= STEP;
    }
    format!("{value:.1} {OVERFLOW_PREFIX}{suffix}")
}
