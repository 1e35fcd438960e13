//! Match clock
//!
//! Counts down a fixed lead-in, then the match itself. Time is recomputed from
//! the wall clock every tick (`end - now`), so dropped frames never drift it.
//! When the match runs out the timer asks for the post-game scene.

use glam::Vec2;
use log::info;

use crate::consts::{COUNTDOWN_FONT_SIZE, DRAMATIC_COUNTDOWN_MS, MATCH_LEAD_IN_MS};
use crate::renderer::{Canvas, Color, TextStyle};
use crate::scene::{Entity, Frame, SceneSwitcher};

/// Where the match clock is in its countdowns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Lead-in before the fight, fighters frozen
    Countdown,
    /// Fight in progress
    Fighting,
    /// Time ran out; the post-game scene has been requested
    Over,
}

/// Two-phase countdown that ends the match
#[derive(Debug, Clone)]
pub struct MatchTimer {
    phase: MatchPhase,
    match_length_ms: f64,
    end_time_ms: f64,
    remaining_ms: f64,
    /// Horizontal center of the readout
    x: f32,
    switcher: SceneSwitcher,
    /// Scene requested when the match ends
    finish_scene: String,
}

impl MatchTimer {
    pub fn new(
        x: f32,
        match_length_ms: f64,
        switcher: SceneSwitcher,
        finish_scene: impl Into<String>,
    ) -> Self {
        Self {
            phase: MatchPhase::Countdown,
            match_length_ms,
            end_time_ms: 0.0,
            remaining_ms: MATCH_LEAD_IN_MS,
            x,
            switcher,
            finish_scene: finish_scene.into(),
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Fighters may move only while this is true
    pub fn is_running(&self) -> bool {
        self.phase == MatchPhase::Fighting
    }

    /// Time left in the current phase, never negative
    pub fn remaining_ms(&self) -> f64 {
        self.remaining_ms
    }

    /// Whole seconds shown on the clock (rounded up)
    pub fn display_seconds(&self) -> i64 {
        (self.remaining_ms / 1000.0).ceil() as i64
    }

    /// Sub-second part of the remaining time, used to pulse the final digits
    pub fn sub_second_ms(&self) -> f64 {
        self.remaining_ms - (self.remaining_ms / 1000.0).trunc() * 1000.0
    }

    /// In the last seconds of whichever phase is running
    pub fn is_dramatic(&self) -> bool {
        self.remaining_ms <= DRAMATIC_COUNTDOWN_MS
    }
}

impl Entity for MatchTimer {
    /// Every activation restarts from the lead-in
    fn load(&mut self, frame: &Frame) {
        self.phase = MatchPhase::Countdown;
        self.end_time_ms = frame.now_ms + MATCH_LEAD_IN_MS;
        self.remaining_ms = MATCH_LEAD_IN_MS;
    }

    fn update(&mut self, frame: &Frame) {
        if self.phase == MatchPhase::Over {
            return;
        }

        let remaining = self.end_time_ms - frame.now_ms;
        if remaining > 0.0 {
            self.remaining_ms = remaining;
            return;
        }

        match self.phase {
            MatchPhase::Countdown => {
                self.end_time_ms = frame.now_ms + self.match_length_ms;
                self.remaining_ms = self.match_length_ms;
                self.phase = MatchPhase::Fighting;
                info!("Match started ({} s)", self.match_length_ms / 1000.0);
            }
            MatchPhase::Fighting => {
                self.remaining_ms = 0.0;
                self.phase = MatchPhase::Over;
                info!("Match over");
                self.switcher.request(self.finish_scene.clone());
            }
            MatchPhase::Over => {}
        }
    }

    fn render(&self, canvas: &mut dyn Canvas) {
        let size = canvas.size();
        let (style, y) = if self.is_dramatic() {
            (
                TextStyle::centered(self.sub_second_ms() as f32, "Arial", Color::ALARM),
                size.y / 2.0,
            )
        } else {
            (
                TextStyle::centered(
                    COUNTDOWN_FONT_SIZE / canvas.pixel_ratio(),
                    "Arial",
                    Color::BLACK,
                ),
                size.y / 16.0,
            )
        };
        canvas.fill_text(
            &self.display_seconds().to_string(),
            Vec2::new(self.x, y),
            &style,
            None,
        );
    }

    fn rescale_x(&mut self, old: f32, new: f32) {
        if let Some(ratio) = super::rect::scale_ratio(old, new) {
            self.x *= ratio;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::InputState;
    use crate::renderer::{DrawCommand, RecordingCanvas};

    const LENGTH: f64 = 90_000.0;

    fn tick(timer: &mut MatchTimer, now: f64) {
        let input = InputState::new();
        timer.update(&Frame::new(now, Vec2::new(800.0, 600.0), &input));
    }

    fn loaded_at(now: f64) -> (MatchTimer, SceneSwitcher) {
        let switcher = SceneSwitcher::new();
        let mut timer = MatchTimer::new(400.0, LENGTH, switcher.clone(), "postgame");
        let input = InputState::new();
        timer.load(&Frame::new(now, Vec2::new(800.0, 600.0), &input));
        (timer, switcher)
    }

    #[test]
    fn test_lead_in_then_match_then_finish_once() {
        let (mut timer, switcher) = loaded_at(10_000.0);
        assert_eq!(timer.phase(), MatchPhase::Countdown);

        tick(&mut timer, 11_000.0);
        assert_eq!(timer.remaining_ms(), 2_000.0);
        assert!(!timer.is_running());

        // Lead-in expires (a late frame overshoots)
        tick(&mut timer, 13_050.0);
        assert!(timer.is_running());
        assert_eq!(timer.remaining_ms(), LENGTH);

        tick(&mut timer, 13_050.0 + 45_000.0);
        assert_eq!(timer.remaining_ms(), 45_000.0);
        assert_eq!(switcher.pending(), 0);

        tick(&mut timer, 13_050.0 + LENGTH + 16.0);
        assert_eq!(timer.phase(), MatchPhase::Over);
        assert_eq!(timer.remaining_ms(), 0.0);
        assert_eq!(switcher.take(), vec!["postgame"]);

        // Further ticks never re-request
        tick(&mut timer, 13_050.0 + LENGTH + 500.0);
        assert_eq!(switcher.pending(), 0);
    }

    #[test]
    fn test_load_restarts_from_lead_in() {
        let (mut timer, _) = loaded_at(0.0);
        tick(&mut timer, 3_000.0);
        assert!(timer.is_running());

        let input = InputState::new();
        timer.load(&Frame::new(20_000.0, Vec2::new(800.0, 600.0), &input));
        assert_eq!(timer.phase(), MatchPhase::Countdown);
        assert_eq!(timer.remaining_ms(), MATCH_LEAD_IN_MS);
    }

    #[test]
    fn test_display_rounds_up() {
        let (mut timer, _) = loaded_at(0.0);
        tick(&mut timer, 1.0);
        assert_eq!(timer.display_seconds(), 3);
        tick(&mut timer, 1_000.0);
        assert_eq!(timer.display_seconds(), 2);
        tick(&mut timer, 1_250.0);
        assert_eq!(timer.display_seconds(), 2);
        assert_eq!(timer.sub_second_ms(), 750.0);
    }

    #[test]
    fn test_render_compact_then_dramatic() {
        let (mut timer, _) = loaded_at(0.0);
        tick(&mut timer, 3_000.0);
        let mut canvas = RecordingCanvas::new(800.0, 640.0).with_pixel_ratio(2.0);
        timer.render(&mut canvas);
        match &canvas.commands[0] {
            DrawCommand::Text {
                text, pos, style, ..
            } => {
                assert_eq!(text, "90");
                assert_eq!(*pos, Vec2::new(400.0, 40.0));
                assert_eq!(style.size, COUNTDOWN_FONT_SIZE / 2.0);
                assert_eq!(style.color, Color::BLACK);
            }
            other => panic!("unexpected {:?}", other),
        }

        // 4.6 s left
        tick(&mut timer, 3_000.0 + LENGTH - 4_600.0);
        canvas.clear();
        timer.render(&mut canvas);
        match &canvas.commands[0] {
            DrawCommand::Text {
                text, pos, style, ..
            } => {
                assert_eq!(text, "5");
                assert_eq!(*pos, Vec2::new(400.0, 320.0));
                assert!((style.size - 600.0).abs() < 1e-3);
                assert_eq!(style.color, Color::ALARM);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
