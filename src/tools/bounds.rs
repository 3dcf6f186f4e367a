//! Saturating and periodic bounding of scalar values.
//!
//! [`bound`] models hard limits (walls, speed limits). [`wrap`] and
//! [`wrap_angle`] model circular quantities such as headings, where leaving
//! the interval on one side re-enters it on the other.

/// Restricts `v` to `[lo, hi]`.
///
/// Unlike [`f64::clamp`] this never panics: a NaN input maps to `lo` and an
/// inverted interval (`lo > hi`) saturates at `hi`.
pub fn bound(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// Maps `v` into the half-open interval `[lo, hi)` by shifting it a whole
/// number of periods `hi - lo`.
///
/// Values already inside the interval are returned untouched, so repeated
/// wrapping is lossless. Any finite `v` is accepted, however many periods away
/// it lies. Non-finite input or an empty interval yields `lo`.
pub fn wrap(v: f64, lo: f64, hi: f64) -> f64 {
    let width = hi - lo;
    if !(width > 0.0) || !v.is_finite() {
        return lo;
    }
    if v >= lo && v < hi {
        return v;
    }
    let shifted = lo + (v - lo).rem_euclid(width);
    // rem_euclid may round up to exactly `width`
    if shifted >= hi {
        lo
    } else {
        shifted
    }
}

/// Maps `v` into the upper-closed interval `(lo, hi]`.
///
/// This is the convention used for headings: with `lo = -π, hi = π` the
/// angle `-π` is reported as `π`.
pub fn wrap_angle(v: f64, lo: f64, hi: f64) -> f64 {
    if v > lo && v <= hi {
        return v;
    }
    let w = wrap(v, lo, hi);
    if w == lo {
        hi
    } else {
        w
    }
}
