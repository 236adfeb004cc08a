//! Window mount for a particle field.
//!
//! [`run`] owns the whole lifecycle: event loop, window, GPU sink, pointer
//! and resize routing, redraw scheduling, and disposal on close. The loop
//! checks the field's liveness every redraw; once disposed, no further frames
//! are scheduled.

use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::config::FieldConfig;
use crate::error::{FieldError, GpuError};
use crate::field::ParticleField;
use crate::gpu::GpuState;

/// Mount a field in a window and block until the window closes.
///
/// Configuration and mount failures are returned, not panicked; the field is
/// never started in that case.
pub fn run(config: FieldConfig) -> Result<(), FieldError> {
    let field = ParticleField::new(config)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(field);
    event_loop.run_app(&mut app)?;

    app.failure.map_or(Ok(()), Err)
}

struct App {
    field: ParticleField,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    failure: Option<FieldError>,
}

impl App {
    fn new(field: ParticleField) -> Self {
        Self {
            field,
            window: None,
            gpu: None,
            failure: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: FieldError) {
        self.failure = Some(err);
        self.field.dispose();
        event_loop.exit();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("ringfield")
            .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

        let window = match event_loop.create_window(window_attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => return self.fail(event_loop, FieldError::Window(e)),
        };

        let capacity = self.field.config().count as u32;
        let color = self.field.config().color;
        let gpu = match pollster::block_on(GpuState::new(window.clone(), capacity, color)) {
            Ok(g) => g,
            Err(e) => return self.fail(event_loop, FieldError::Gpu(e)),
        };

        let size = window.inner_size();
        self.field.set_viewport(size.width, size.height);
        self.field.start();

        self.window = Some(window);
        self.gpu = Some(gpu);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.field.dispose();
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                self.field
                    .set_viewport(physical_size.width, physical_size.height);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.field
                    .pointer_moved_px(position.x as f32, position.y as f32);
            }
            WindowEvent::RedrawRequested => {
                if self.field.is_disposed() {
                    event_loop.exit();
                    return;
                }
                if let Some(gpu) = &mut self.gpu {
                    match self.field.tick(gpu) {
                        Ok(()) => {}
                        Err(GpuError::Surface(wgpu::SurfaceError::Lost)) => {
                            gpu.resize(winit::dpi::PhysicalSize {
                                width: gpu.config.width,
                                height: gpu.config.height,
                            });
                        }
                        Err(GpuError::Surface(wgpu::SurfaceError::OutOfMemory)) => {
                            return self.fail(
                                event_loop,
                                FieldError::Gpu(GpuError::Surface(
                                    wgpu::SurfaceError::OutOfMemory,
                                )),
                            );
                        }
                        Err(e) => eprintln!("Render error: {}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
