//! Swipe-to-complete control.
//!
//! The thumb slides along a track; letting go past the completion threshold
//! finishes the task, anywhere short of it snaps the thumb back to the start.

use crate::constants::SWIPE_COMPLETION_RATIO;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    Complete,
    SnapBack,
}

#[derive(Debug, Clone)]
pub struct SwipeTrack {
    track_width: f32,
    thumb_size: f32,
    offset: f32,
    completed: bool,
}

impl SwipeTrack {
    pub fn new(track_width: f32, thumb_size: f32) -> Self {
        Self {
            track_width,
            thumb_size,
            offset: 0.0,
            completed: false,
        }
    }

    /// Furthest the thumb can travel.
    pub fn max_offset(&self) -> f32 {
        (self.track_width - self.thumb_size).max(0.0)
    }

    pub fn threshold(&self) -> f32 {
        self.max_offset() * SWIPE_COMPLETION_RATIO
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Move the thumb by `delta`, clamped to the track. Ignored once completed.
    pub fn drag(&mut self, delta: f32) {
        if self.completed {
            return;
        }
        self.offset = (self.offset + delta).clamp(0.0, self.max_offset());
    }

    pub fn release(&mut self) -> SwipeOutcome {
        if self.completed {
            return SwipeOutcome::Complete;
        }
        if self.offset >= self.threshold() {
            self.completed = true;
            SwipeOutcome::Complete
        } else {
            self.offset = 0.0;
            SwipeOutcome::SnapBack
        }
    }

    /// Share of the track covered, in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        let max = self.max_offset();
        if max <= 0.0 {
            return 0.0;
        }
        self.offset / max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_85_percent_of_travel() {
        let track = SwipeTrack::new(300.0, 64.0);
        assert!((track.max_offset() - 236.0).abs() < f32::EPSILON);
        assert!((track.threshold() - 200.6).abs() < 0.001);
    }

    #[test]
    fn test_release_below_threshold_snaps_back() {
        let mut track = SwipeTrack::new(300.0, 64.0);
        track.drag(150.0);

        assert_eq!(track.release(), SwipeOutcome::SnapBack);
        assert!(track.offset().abs() < f32::EPSILON);
        assert!(!track.is_completed());
    }

    #[test]
    fn test_release_at_threshold_completes() {
        let mut track = SwipeTrack::new(300.0, 64.0);
        track.drag(track.threshold());

        assert_eq!(track.release(), SwipeOutcome::Complete);
        assert!(track.is_completed());
    }

    #[test]
    fn test_drag_is_clamped_to_track() {
        let mut track = SwipeTrack::new(300.0, 64.0);
        track.drag(10_000.0);
        assert!((track.offset() - track.max_offset()).abs() < f32::EPSILON);

        track.drag(-20_000.0);
        assert!(track.offset().abs() < f32::EPSILON);
    }

    #[test]
    fn test_drags_ignored_after_completion() {
        let mut track = SwipeTrack::new(300.0, 64.0);
        track.drag(300.0);
        track.release();

        track.drag(-300.0);
        assert!((track.offset() - track.max_offset()).abs() < f32::EPSILON);
        assert_eq!(track.release(), SwipeOutcome::Complete);
    }

    #[test]
    fn test_thumb_wider_than_track_never_moves() {
        let mut track = SwipeTrack::new(40.0, 64.0);
        assert!(track.max_offset().abs() < f32::EPSILON);

        track.drag(10.0);
        assert!(track.offset().abs() < f32::EPSILON);
        assert!(track.progress().abs() < f32::EPSILON);
    }

    #[test]
    fn test_terminal_track_needs_seventeen_cells() {
        // 20-cell track, 1-cell thumb: 19 cells of travel, threshold 16.15.
        let mut track = SwipeTrack::new(20.0, 1.0);
        track.drag(16.0);
        assert_eq!(track.release(), SwipeOutcome::SnapBack);

        track.drag(17.0);
        assert_eq!(track.release(), SwipeOutcome::Complete);
    }
}
