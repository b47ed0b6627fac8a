use crate::config::Config;
use crate::gui::indicator::{CROSSFADE_SECS, MAX_FRAME_SECS, SNAP_BACK_EPSILON, SNAP_BACK_RATE};
use slingshot::{IndicatorSizes, Slingshot, calculate_slingshot};

/// What the shell should do after a pointer update.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragAction {
    pub should_redraw: bool,
    pub should_refresh: bool,
}

impl DragAction {
    pub fn new(should_redraw: bool, should_refresh: bool) -> Self {
        Self {
            should_redraw,
            should_refresh,
        }
    }
}

pub struct IndicatorState {
    pub sizes: IndicatorSizes,
    pub trigger: f64,
    pub offset: f64,
    pub dragging: bool,
    pub refreshing: bool,
    /// 0 = drag glyph, 1 = busy spinner.
    pub crossfade: f64,
    /// Seconds of spinner animation accumulated while refreshing.
    pub spin_phase: f64,
    snapping: bool,
    last_frame_us: Option<i64>,
}

impl IndicatorState {
    pub fn new(config: &Config) -> Self {
        Self {
            sizes: config.indicator_sizes(),
            trigger: config.trigger_distance,
            offset: 0.0,
            dragging: false,
            refreshing: false,
            crossfade: 0.0,
            spin_phase: 0.0,
            snapping: false,
            last_frame_us: None,
        }
    }

    pub fn apply_config(&mut self, config: &Config) {
        self.sizes = config.indicator_sizes();
        self.trigger = config.trigger_distance;
    }

    /// Geometry for the current frame, rebuilt from scratch on every call.
    pub fn slingshot(&self) -> Slingshot {
        calculate_slingshot(self.offset, self.trigger, self.sizes.size)
    }

    pub fn progress(&self) -> f64 {
        if self.trigger > 0.0 {
            (self.offset / self.trigger).clamp(0.0, 1.0)
        } else {
            0.0
        }
    }

    /// Pointer moved while the gesture is held. Upward drags clamp to rest;
    /// drags are ignored while a refresh is running.
    pub fn drag_to(&mut self, offset: f64) -> DragAction {
        if self.refreshing {
            return DragAction::default();
        }
        self.dragging = true;
        self.snapping = false;

        let clamped = offset.max(0.0);
        let changed = clamped != self.offset;
        self.offset = clamped;

        DragAction::new(changed, false)
    }

    /// Pointer released. Past the trigger this commits a refresh and parks
    /// the glyph at the trigger distance; otherwise the offset snaps back.
    pub fn release(&mut self) -> DragAction {
        if !self.dragging {
            return DragAction::default();
        }
        self.dragging = false;

        if self.trigger > 0.0 && self.offset >= self.trigger {
            self.refreshing = true;
            self.offset = self.trigger;
            DragAction::new(true, true)
        } else {
            self.snapping = true;
            DragAction::new(true, false)
        }
    }

    /// The external refresh operation finished.
    pub fn finish_refresh(&mut self) {
        if !self.refreshing {
            return;
        }
        self.refreshing = false;
        self.snapping = true;
    }

    pub fn is_animating(&self) -> bool {
        self.refreshing || self.snapping || self.crossfade > 0.0
    }

    /// Advances crossfade, spinner phase, and snap-back from a frame-clock
    /// timestamp (microseconds). Returns whether another frame is needed.
    pub fn tick(&mut self, frame_us: i64) -> bool {
        let dt = match self.last_frame_us {
            Some(prev) => ((frame_us - prev).max(0) as f64 / 1_000_000.0).min(MAX_FRAME_SECS),
            None => 0.0,
        };
        self.last_frame_us = Some(frame_us);

        let fade_step = dt / CROSSFADE_SECS;
        if self.refreshing {
            self.crossfade = (self.crossfade + fade_step).min(1.0);
            self.spin_phase += dt;
        } else {
            self.crossfade = (self.crossfade - fade_step).max(0.0);
            if self.crossfade == 0.0 {
                self.spin_phase = 0.0;
            }
        }

        if self.snapping && !self.dragging {
            self.offset *= (-SNAP_BACK_RATE * dt).exp();
            if self.offset < SNAP_BACK_EPSILON {
                self.offset = 0.0;
                self.snapping = false;
            }
        }

        if !self.is_animating() {
            self.last_frame_us = None;
        }
        self.is_animating()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn state() -> IndicatorState {
        IndicatorState::new(&Config::default())
    }

    fn run_until_idle(s: &mut IndicatorState, mut frame: i64) -> i64 {
        while s.tick(frame) {
            frame += 16_000;
            assert!(frame < 10_000_000, "animation never settled");
        }
        frame
    }

    #[test]
    fn release_below_trigger_snaps_back() {
        let mut s = state();
        s.drag_to(40.0);
        let action = s.release();
        assert!(action.should_redraw);
        assert!(!action.should_refresh);
        assert!(!s.refreshing);

        run_until_idle(&mut s, 0);
        assert_eq!(s.offset, 0.0);
    }

    #[test]
    fn release_past_trigger_commits_a_refresh() {
        let mut s = state();
        s.drag_to(120.0);
        let action = s.release();
        assert!(action.should_refresh);
        assert!(s.refreshing);
        assert_eq!(s.offset, s.trigger);
    }

    #[test]
    fn release_without_a_drag_is_a_no_op() {
        let mut s = state();
        let action = s.release();
        assert!(!action.should_redraw);
        assert!(!action.should_refresh);
    }

    #[test]
    fn crossfade_completes_within_its_duration() {
        let mut s = state();
        s.drag_to(120.0);
        s.release();

        s.tick(0);
        let frames = (CROSSFADE_SECS / 0.016).ceil() as i64 + 1;
        for i in 1..=frames {
            s.tick(i * 16_000);
        }
        assert_eq!(s.crossfade, 1.0);
    }

    #[test]
    fn drag_is_ignored_while_refreshing() {
        let mut s = state();
        s.drag_to(120.0);
        s.release();

        let action = s.drag_to(300.0);
        assert!(!action.should_redraw);
        assert_eq!(s.offset, s.trigger);
    }

    #[test]
    fn finish_refresh_returns_to_rest() {
        let mut s = state();
        s.drag_to(120.0);
        s.release();
        s.tick(0);
        s.tick(400_000);

        s.finish_refresh();
        run_until_idle(&mut s, 500_000);
        assert_eq!(s.offset, 0.0);
        assert_eq!(s.crossfade, 0.0);
        assert_eq!(s.spin_phase, 0.0);
    }

    #[test]
    fn grabbing_during_snap_back_resumes_the_drag() {
        let mut s = state();
        s.drag_to(60.0);
        s.release();
        s.tick(0);
        s.tick(32_000);
        assert!(s.offset < 60.0);

        let action = s.drag_to(70.0);
        assert!(action.should_redraw);
        assert_eq!(s.offset, 70.0);
        assert!(s.dragging);
    }

    #[test]
    fn negative_drag_clamps_to_rest() {
        let mut s = state();
        s.drag_to(-25.0);
        assert_eq!(s.offset, 0.0);
        assert_eq!(s.slingshot().end_trim, 0.0);
    }
}
