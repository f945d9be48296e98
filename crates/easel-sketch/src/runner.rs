//! Headless frame driver

use crate::config::SketchConfig;
use crate::context::SketchContext;
use crate::{Result, Sketch};

/// Runs a sketch without a window.
///
/// `setup` runs on construction; its commands are dispatched with the first
/// frame.
pub struct Runner<S: Sketch> {
    sketch: S,
    context: SketchContext,
    frames_run: u64,
    redraw: bool,
}

impl<S: Sketch> Runner<S> {
    pub fn new(mut sketch: S, config: &SketchConfig) -> Result<Self> {
        let mut context = SketchContext::new(config)?;
        tracing::debug!("Sketch setup ({}x{})", config.width, config.height);
        sketch.setup(&mut context);
        Ok(Self {
            sketch,
            context,
            frames_run: 0,
            redraw: false,
        })
    }

    /// Whether the next `step` will draw a frame
    pub fn is_due(&self) -> bool {
        self.frames_run == 0 || self.redraw || self.context.is_looping()
    }

    /// Ask for one more frame even when not looping
    pub fn redraw(&mut self) {
        self.redraw = true;
    }

    /// Draw and dispatch one frame if one is due
    pub fn step(&mut self) -> bool {
        if !self.is_due() {
            return false;
        }
        self.redraw = false;

        self.sketch.draw(&mut self.context);
        self.context.dispatch();
        self.frames_run += 1;

        if !self.context.diagnostics().is_empty() {
            tracing::debug!("Frame finished with {} problems", self.context.diagnostics().len());
        }
        true
    }

    /// Step up to `frames` times, returning how many frames were drawn
    pub fn run_frames(&mut self, frames: u64) -> u64 {
        let mut drawn = 0;
        for _ in 0..frames {
            if !self.step() {
                break;
            }
            drawn += 1;
        }
        drawn
    }

    /// Frames drawn by this runner
    pub fn frames_run(&self) -> u64 {
        self.frames_run
    }

    pub fn sketch(&self) -> &S {
        &self.sketch
    }

    pub fn sketch_mut(&mut self) -> &mut S {
        &mut self.sketch
    }

    pub fn context(&self) -> &SketchContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut SketchContext {
        &mut self.context
    }

    pub fn into_parts(self) -> (S, SketchContext) {
        (self.sketch, self.context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use easel_canvas::{Color, Graphics, Rectangle};

    #[derive(Default)]
    struct Counter {
        setups: u32,
        draws: u32,
        stop_after: Option<u32>,
    }

    impl Sketch for Counter {
        fn setup(&mut self, g: &mut SketchContext) {
            self.setups += 1;
            g.background(Color::BLACK);
        }

        fn draw(&mut self, g: &mut SketchContext) {
            self.draws += 1;
            g.rectangle(Rectangle::new(0.0, 0.0, 4.0, 4.0));
            if self.stop_after == Some(self.draws) {
                g.no_loop();
            }
        }
    }

    fn config() -> SketchConfig {
        SketchConfig::new(16, 16)
    }

    #[test]
    fn test_setup_runs_once() {
        let mut runner = Runner::new(Counter::default(), &config()).unwrap();
        assert_eq!(runner.sketch().setups, 1);
        // Setup commands wait for the first frame
        assert_eq!(runner.context().canvas().pending().len(), 1);

        runner.run_frames(3);
        assert_eq!(runner.sketch().setups, 1);
        assert_eq!(runner.sketch().draws, 3);
    }

    #[test]
    fn test_no_loop_stops_after_current_frame() {
        let sketch = Counter { stop_after: Some(2), ..Counter::default() };
        let mut runner = Runner::new(sketch, &config()).unwrap();

        assert_eq!(runner.run_frames(10), 2);
        assert!(!runner.step());
        assert_eq!(runner.context().frame_count(), 3);
    }

    #[test]
    fn test_not_looping_still_draws_first_frame() {
        let mut runner = Runner::new(Counter::default(), &config().with_looping(false)).unwrap();
        assert!(runner.step());
        assert!(!runner.step());

        runner.redraw();
        assert!(runner.step());
        assert_eq!(runner.sketch().draws, 2);
    }

    #[test]
    fn test_loop_can_resume() {
        let sketch = Counter { stop_after: Some(1), ..Counter::default() };
        let mut runner = Runner::new(sketch, &config()).unwrap();
        runner.step();
        assert!(!runner.is_due());

        runner.context_mut().loop_();
        assert_eq!(runner.run_frames(4), 4);
    }
}
