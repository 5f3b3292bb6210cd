//! Frame-rate constants and unit conversions.
//!
//! Configuration files author time in milliseconds, speeds per second, and
//! angles in degrees. The simulation stores frames, per-frame deltas, and
//! radians. Every conversion goes through this module so the frame rate is
//! defined exactly once.

use std::f32::consts::PI;

/// A simulation frame number.
pub type Frame = u32;

/// Sentinel wake frame for "never invoke again until explicitly woken".
pub const FOREVER: Frame = Frame::MAX;

/// The fixed logic frame rate. The simulation steps at this cadence
/// regardless of render rate.
pub const LOGIC_FRAMES_PER_SECOND: u32 = 30;

/// Duration of one logic frame in milliseconds.
pub const MSEC_PER_LOGIC_FRAME: f32 = 1000.0 / LOGIC_FRAMES_PER_SECOND as f32;

/// Convert an authored duration in milliseconds to a fractional frame count.
pub fn msec_to_frames(msec: f32) -> f32 {
    msec * LOGIC_FRAMES_PER_SECOND as f32 / 1000.0
}

/// Convert an authored duration in milliseconds to a whole frame count,
/// rounding up so a requested minimum duration is never under-satisfied.
pub fn msec_to_frames_ceil(msec: f32) -> Frame {
    msec_to_frames(msec).ceil() as Frame
}

/// Convert an authored velocity (distance per second) to distance per frame.
pub fn per_sec_to_per_frame(per_sec: f32) -> f32 {
    per_sec / LOGIC_FRAMES_PER_SECOND as f32
}

/// Convert an authored acceleration (distance per second squared) to
/// distance per frame squared.
pub fn per_sec2_to_per_frame2(per_sec2: f32) -> f32 {
    per_sec2 / (LOGIC_FRAMES_PER_SECOND * LOGIC_FRAMES_PER_SECOND) as f32
}

/// Convert an authored angle in degrees to radians.
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// Convert an authored angular velocity in degrees per second to radians
/// per frame.
pub fn deg_per_sec_to_rad_per_frame(deg_per_sec: f32) -> f32 {
    degrees_to_radians(per_sec_to_per_frame(deg_per_sec))
}
