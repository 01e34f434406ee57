//! Statistic counter animation frames
//!
//! The counters count up in fixed steps over about 1.8s at one frame per
//! 30ms, then land exactly on the target.

const DURATION_MS: u64 = 1800;
const FRAME_MS: u64 = 30;

/// Values shown frame by frame on the way to `target`
pub(crate) fn counter_frames(target: u64) -> Vec<u64> {
    let step = target.div_ceil(DURATION_MS / FRAME_MS);
    if step == 0 {
        return vec![target];
    }
    let mut frames: Vec<u64> = std::iter::successors(Some(step), |v| v.checked_add(step))
        .take_while(|&v| v < target)
        .collect();
    frames.push(target);
    frames
}
