//! Windowed frame driver
//!
//! One window, one softbuffer surface. Every redraw steps the sketch and
//! copies the pixmap to the window.

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::{Duration, Instant};

use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::config::SketchConfig;
use crate::runner::Runner;
use crate::{Result, Sketch, SketchError};

/// Open a window and run `sketch` until it is closed
pub fn run_windowed<S: Sketch>(sketch: S, config: SketchConfig) -> Result<()> {
    let runner = Runner::new(sketch, &config)?;

    let event_loop = EventLoop::new().map_err(|e| SketchError::EventLoop(e.to_string()))?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = SketchApp::new(runner, config);
    event_loop
        .run_app(&mut app)
        .map_err(|e| SketchError::EventLoop(e.to_string()))?;

    match app.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Sketch app state for the event loop
struct SketchApp<S: Sketch> {
    runner: Runner<S>,
    config: SketchConfig,
    window: Option<Arc<Window>>,
    surface: Option<softbuffer::Surface<Arc<Window>, Arc<Window>>>,
    frame_interval: Duration,
    next_frame: Instant,
    /// First fatal error, returned once the loop exits
    error: Option<SketchError>,
}

impl<S: Sketch> SketchApp<S> {
    fn new(runner: Runner<S>, config: SketchConfig) -> Self {
        Self {
            runner,
            frame_interval: config.frame_interval(),
            config,
            window: None,
            surface: None,
            next_frame: Instant::now(),
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: SketchError) {
        tracing::error!("{}", error);
        self.error.get_or_insert(error);
        event_loop.exit();
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(winit::dpi::PhysicalSize::new(self.config.width, self.config.height));

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| SketchError::Window(e.to_string()))?,
        );

        // Create software rendering surface
        let context = softbuffer::Context::new(window.clone())
            .map_err(|e| SketchError::Surface(e.to_string()))?;
        let surface = softbuffer::Surface::new(&context, window.clone())
            .map_err(|e| SketchError::Surface(e.to_string()))?;

        tracing::info!("Opened {}x{} window", self.config.width, self.config.height);
        self.window = Some(window);
        self.surface = Some(surface);
        Ok(())
    }

    /// Step the sketch if a frame is due, then present whatever is current
    fn render(&mut self) -> Result<()> {
        self.runner.step();

        let Some(window) = &self.window else { return Ok(()) };
        let size = window.inner_size();
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };

        let Some(surface) = &mut self.surface else { return Ok(()) };
        surface
            .resize(width, height)
            .map_err(|e| SketchError::Surface(e.to_string()))?;

        let mut buffer = surface
            .buffer_mut()
            .map_err(|e| SketchError::Surface(e.to_string()))?;

        let pixmap = self.runner.context().surface().pixmap();
        blit(pixmap, &mut buffer, size.width as usize, size.height as usize);

        buffer.present().map_err(|e| SketchError::Surface(e.to_string()))
    }
}

/// Copy premultiplied RGBA onto a `0x00RRGGBB` buffer, composited over black
fn blit(pixmap: &tiny_skia::Pixmap, buffer: &mut [u32], width: usize, height: usize) {
    buffer.fill(0);
    let src_width = pixmap.width() as usize;
    let rows = height.min(pixmap.height() as usize);
    let cols = width.min(src_width);

    for (y, row) in pixmap.pixels().chunks(src_width).take(rows).enumerate() {
        let dst = &mut buffer[y * width..y * width + cols];
        for (out, px) in dst.iter_mut().zip(row) {
            *out = (px.red() as u32) << 16 | (px.green() as u32) << 8 | px.blue() as u32;
        }
    }
}

impl<S: Sketch> ApplicationHandler for SketchApp<S> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            self.fail(event_loop, e);
            return;
        }

        self.next_frame = Instant::now();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window closed after {} frames", self.runner.frames_run());
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = self.render() {
                    self.fail(event_loop, e);
                }
            }
            WindowEvent::Resized(_) => {
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.runner.is_due() {
            event_loop.set_control_flow(ControlFlow::Wait);
            return;
        }

        let now = Instant::now();
        if now >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
            self.next_frame += self.frame_interval;
            // Skip missed frames instead of bursting to catch up
            if self.next_frame < now {
                self.next_frame = now + self.frame_interval;
            }
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
    }
}
