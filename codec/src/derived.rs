//! Pure calculators that turn raw wire integers into domain values.

use crate::types::SeedDecomposition;

/// Resource multiplier code reserved for "unlimited resources".
pub const UNLIMITED_RESOURCE_CODE: i64 = 99;

/// Label used for [`UNLIMITED_RESOURCE_CODE`].
pub const UNLIMITED_LABEL: &str = "Unlimited";

/// Per-tick to per-minute conversion applied to generation capacities.
pub const GENERATION_RATE_FACTOR: i64 = 60;

const GALAXY_RADIX: i64 = 100_000_000;
const STAR_RADIX: i64 = 100_000;
const RESOURCE_RADIX: i64 = 1_000;

/// Splits a packed seed into galaxy seed, star count, and resource code.
///
/// Division truncates toward zero, so negative seeds yield non-positive parts.
#[must_use]
pub const fn decompose_seed(raw_seed: i64) -> SeedDecomposition {
    SeedDecomposition {
        galaxy_seed: raw_seed / GALAXY_RADIX,
        star_count: (raw_seed / STAR_RADIX) % 1000,
        resource_code: (raw_seed / RESOURCE_RADIX) % 100,
    }
}

/// Formats a resource multiplier code with one fractional digit.
#[must_use]
pub fn format_resource_multiplier(code: i64) -> String {
    if code == UNLIMITED_RESOURCE_CODE {
        return UNLIMITED_LABEL.to_string();
    }
    #[allow(clippy::cast_precision_loss)]
    let value = code as f64 / 10.0;
    format!("{value:.1}")
}

/// Returns the label for a raw platform id.
#[must_use]
pub const fn platform_name(id: u8) -> &'static str {
    crate::types::Platform::from_raw(id).label()
}

/// Converts an integer per-tick capacity to a per-minute rate.
///
/// Overflow wraps, matching the two's-complement arithmetic of the publisher.
#[must_use]
pub const fn scale_generation_capacity(raw: i64) -> i64 {
    raw.wrapping_mul(GENERATION_RATE_FACTOR)
}

/// Converts a floating-point per-tick capacity to a per-minute rate.
///
/// The product is computed in `f32` and truncated toward zero. NaN becomes
/// zero and out-of-range values saturate.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn scale_world_capacity(capacity: f32) -> i64 {
    (capacity * GENERATION_RATE_FACTOR as f32) as i64
}
