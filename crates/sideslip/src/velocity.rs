//! Release-velocity estimation for flick intent.

/// One horizontal gesture sample: position and host timestamp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Sample {
    pub x: f32,
    pub time_ms: f64,
}

/// Signed release velocity in px/ms toward the open direction.
///
/// Measured between the release sample and the last move sample. When the
/// release position coincides with the last move (the finger stopped on the
/// same coordinate, which would make the time delta zero or near-zero), the
/// second-to-last sample pair is used instead. A non-positive time delta
/// after the fallback yields 0 (no flick).
pub(crate) fn release_velocity(release: Sample, last: Sample, prev: Sample, sign: f32) -> f32 {
    let reference = if release.x == last.x { prev } else { last };
    let dt = (release.time_ms - reference.time_ms) as f32;
    if dt <= 0.0 {
        return 0.0;
    }
    (release.x - reference.x) / dt * sign
}
