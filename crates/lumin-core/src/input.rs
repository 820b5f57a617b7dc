//! Pointer sampling and press edge detection.
//!
//! The watch reacts to presses, never to a held pointer. A host either polls
//! the pointer once per frame and feeds [`PressDetector`], or forwards its
//! raw pointer events to [`InputSampler`], which runs the same detector and
//! queues the presses for the frame.

use heapless::Vec;
use log::{debug, warn};

use crate::ui::TouchPoint;

/// Presses kept for a single frame; extras are dropped
pub const MAX_PRESSES_PER_FRAME: usize = 8;

/// Level state of the pointer at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerSample {
    pub pressed: bool,
    pub position: TouchPoint,
}

/// Raw pointer events from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    Down(TouchPoint),
    Up(TouchPoint),
    Move(TouchPoint),
}

/// Rising-edge detector: pressed now and not pressed at the previous sample.
#[derive(Debug, Default)]
pub struct PressDetector {
    was_pressed: bool,
}

impl PressDetector {
    pub const fn new() -> Self {
        Self { was_pressed: false }
    }

    /// Returns the press position on a rising edge.
    pub fn update(&mut self, sample: PointerSample) -> Option<TouchPoint> {
        let edge = sample.pressed && !self.was_pressed;
        self.was_pressed = sample.pressed;
        edge.then_some(sample.position)
    }

    pub fn is_pressed(&self) -> bool {
        self.was_pressed
    }
}

/// Everything the watch needs from the pointer for one frame.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Pointer state at the end of the frame
    pub sample: PointerSample,
    /// Press edges in arrival order
    pub presses: Vec<TouchPoint, MAX_PRESSES_PER_FRAME>,
}

/// Collects pointer events during a frame.
///
/// A press that starts and ends between two frames is still reported once,
/// which plain once-per-frame polling would miss.
///
/// A second `Down` inside the frame of a held press is a repeat. A `Down` in
/// a later frame while still held means the host lost the release, so it
/// counts as a new press.
#[derive(Debug, Default)]
pub struct InputSampler {
    detector: PressDetector,
    position: TouchPoint,
    /// A `Down` arrived since the last `finish_frame`
    down_this_frame: bool,
    presses: Vec<TouchPoint, MAX_PRESSES_PER_FRAME>,
}

impl InputSampler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: PointerEvent) {
        let pressed = match event {
            PointerEvent::Down(point) => {
                if self.detector.is_pressed() && !self.down_this_frame {
                    debug!("Release before {:?} was lost, re-arming", point);
                    self.detector.update(PointerSample {
                        pressed: false,
                        position: self.position,
                    });
                }
                self.down_this_frame = true;
                self.position = point;
                true
            }
            PointerEvent::Up(point) => {
                self.position = point;
                false
            }
            PointerEvent::Move(point) => {
                self.position = point;
                self.detector.is_pressed()
            }
        };

        let sample = PointerSample {
            pressed,
            position: self.position,
        };
        if let Some(point) = self.detector.update(sample)
            && self.presses.push(point).is_err()
        {
            warn!("Dropping press at {:?}: frame queue full", point);
        }
    }

    /// Current pointer state.
    pub fn sample(&self) -> PointerSample {
        PointerSample {
            pressed: self.detector.is_pressed(),
            position: self.position,
        }
    }

    /// Hand over this frame's presses and start a new frame.
    pub fn finish_frame(&mut self) -> FrameInput {
        self.down_this_frame = false;
        FrameInput {
            sample: self.sample(),
            presses: core::mem::take(&mut self.presses),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(pressed: bool, x: u16, y: u16) -> PointerSample {
        PointerSample {
            pressed,
            position: TouchPoint::new(x, y),
        }
    }

    #[test]
    fn test_detector_fires_once_per_hold() {
        let mut detector = PressDetector::new();
        assert_eq!(detector.update(sample(false, 0, 0)), None);
        assert_eq!(
            detector.update(sample(true, 10, 20)),
            Some(TouchPoint::new(10, 20))
        );
        for _ in 0..30 {
            assert_eq!(detector.update(sample(true, 11, 21)), None);
        }
        assert_eq!(detector.update(sample(false, 11, 21)), None);
        assert_eq!(
            detector.update(sample(true, 5, 5)),
            Some(TouchPoint::new(5, 5))
        );
    }

    #[test]
    fn test_sampler_catches_click_within_one_frame() {
        let mut sampler = InputSampler::new();
        sampler.push(PointerEvent::Down(TouchPoint::new(100, 200)));
        sampler.push(PointerEvent::Up(TouchPoint::new(100, 200)));

        let frame = sampler.finish_frame();
        assert_eq!(frame.presses.as_slice(), [TouchPoint::new(100, 200)]);
        assert!(!frame.sample.pressed);

        assert!(sampler.finish_frame().presses.is_empty());
    }

    #[test]
    fn test_sampler_ignores_repeated_down_while_held() {
        let mut sampler = InputSampler::new();
        sampler.push(PointerEvent::Down(TouchPoint::new(1, 1)));
        sampler.push(PointerEvent::Move(TouchPoint::new(2, 2)));
        sampler.push(PointerEvent::Down(TouchPoint::new(3, 3)));

        let frame = sampler.finish_frame();
        assert_eq!(frame.presses.len(), 1);
        assert!(frame.sample.pressed);
        assert_eq!(frame.sample.position, TouchPoint::new(3, 3));

        // Still held in the next frame: nothing new.
        let frame = sampler.finish_frame();
        assert!(frame.presses.is_empty());
        assert!(frame.sample.pressed);
    }

    #[test]
    fn test_down_after_lost_release_is_a_new_press() {
        let mut sampler = InputSampler::new();
        sampler.push(PointerEvent::Down(TouchPoint::new(240, 48)));
        assert_eq!(sampler.finish_frame().presses.len(), 1);

        // Up never arrives; a few frames pass with the pointer "held".
        sampler.push(PointerEvent::Move(TouchPoint::new(240, 60)));
        assert!(sampler.finish_frame().presses.is_empty());
        assert!(sampler.finish_frame().presses.is_empty());

        sampler.push(PointerEvent::Down(TouchPoint::new(240, 320)));
        let frame = sampler.finish_frame();
        assert_eq!(frame.presses.as_slice(), [TouchPoint::new(240, 320)]);
        assert!(frame.sample.pressed);
    }

    #[test]
    fn test_move_without_press_is_not_a_press() {
        let mut sampler = InputSampler::new();
        sampler.push(PointerEvent::Move(TouchPoint::new(7, 8)));
        let frame = sampler.finish_frame();
        assert!(frame.presses.is_empty());
        assert_eq!(frame.sample, sample(false, 7, 8));
    }

    #[test]
    fn test_queue_overflow_drops_extra_presses() {
        let mut sampler = InputSampler::new();
        for i in 0..(MAX_PRESSES_PER_FRAME as u16 + 3) {
            sampler.push(PointerEvent::Down(TouchPoint::new(i, i)));
            sampler.push(PointerEvent::Up(TouchPoint::new(i, i)));
        }
        let frame = sampler.finish_frame();
        assert_eq!(frame.presses.len(), MAX_PRESSES_PER_FRAME);
        assert_eq!(frame.presses[0], TouchPoint::new(0, 0));
    }
}
