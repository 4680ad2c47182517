use crate::{hud, keys};
use anyhow::{Context, Result, anyhow};
use egui::Context as EguiContext;
use spincube_assets::TextureImage;
use spincube_common::{Lesson, WindowSpec};
use spincube_input::Action;
use spincube_render::Scene;
use spincube_render_wgpu::WgpuRenderer;
use std::path::PathBuf;
use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

/// Everything that exists only once the window is up.
struct Gpu {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    renderer: WgpuRenderer,
    egui_winit: egui_winit::State,
    egui_renderer: egui_wgpu::Renderer,
}

pub struct GpuApp {
    scene: Scene,
    window_spec: WindowSpec,
    texture: Option<TextureImage>,
    screenshot_path: PathBuf,
    gpu: Option<Gpu>,
    egui_ctx: EguiContext,
    error: Option<anyhow::Error>,
}

impl GpuApp {
    pub fn new(
        lesson: Lesson,
        window_spec: WindowSpec,
        texture: Option<TextureImage>,
        screenshot_path: PathBuf,
    ) -> Self {
        let mut scene = Scene::new(lesson);
        scene.resize(window_spec.width, window_spec.height);
        Self {
            scene,
            window_spec,
            texture,
            screenshot_path,
            gpu: None,
            egui_ctx: EguiContext::default(),
            error: None,
        }
    }

    /// Fatal error that stopped the event loop, if any.
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<Gpu> {
        let spec = self.window_spec;
        let mut attrs = Window::default_attributes()
            .with_title(spec.title)
            .with_inner_size(PhysicalSize::new(spec.width, spec.height));
        if let Some(monitor) = event_loop.primary_monitor() {
            attrs = attrs.with_position(centered_origin(
                monitor.position(),
                monitor.size(),
                spec.width,
                spec.height,
            ));
        }
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("creating window")?,
        );

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .context("creating surface")?;

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| anyhow!("no compatible GPU adapter"))?;

        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("spincube_device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))
        .context("creating device")?;

        let size = window.inner_size();
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .or_else(|| surface_caps.formats.first())
            .copied()
            .ok_or_else(|| anyhow!("surface reports no formats"))?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        self.scene.resize(config.width, config.height);

        let renderer = WgpuRenderer::new(
            &device,
            &queue,
            surface_format,
            config.width,
            config.height,
            self.scene.lesson,
            self.texture.as_ref(),
        )?;
        // The pixels live on the GPU now.
        self.texture = None;

        let egui_winit = egui_winit::State::new(
            self.egui_ctx.clone(),
            egui::ViewportId::ROOT,
            &window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let egui_renderer = egui_wgpu::Renderer::new(&device, surface_format, None, 1, false);

        tracing::info!(
            backend = adapter.get_info().backend.to_str(),
            ?surface_format,
            "GPU initialized"
        );

        Ok(Gpu {
            window,
            surface,
            device,
            queue,
            config,
            renderer,
            egui_winit,
            egui_renderer,
        })
    }

    fn redraw(&mut self) {
        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        let scene = &mut self.scene;
        scene.advance_frame();

        if scene.take_screenshot_request() {
            match gpu.renderer.capture(&gpu.device, &gpu.queue, scene) {
                Ok(shot) => {
                    tracing::info!(path = %self.screenshot_path.display(), "saving screenshot");
                    // Fire and forget: the encoder thread logs its own outcome.
                    let _ = shot.spawn_save(self.screenshot_path.clone());
                }
                Err(e) => tracing::error!("screenshot failed: {e}"),
            }
        }

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.surface.configure(&gpu.device, &gpu.config);
                return;
            }
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        gpu.renderer.render(&gpu.device, &gpu.queue, &view, scene);

        let raw_input = gpu.egui_winit.take_egui_input(&gpu.window);
        let full_output = self.egui_ctx.run(raw_input, |ctx| {
            hud::draw(ctx, scene);
        });
        gpu.egui_winit
            .handle_platform_output(&gpu.window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [gpu.config.width, gpu.config.height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            gpu.egui_renderer
                .update_texture(&gpu.device, &gpu.queue, *id, image_delta);
        }
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("hud_encoder"),
            });
        gpu.egui_renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("hud_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: &view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            gpu.egui_renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            gpu.egui_renderer.free_texture(id);
        }

        output.present();
        gpu.window.request_redraw();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }
        match self.init(event_loop) {
            Ok(gpu) => self.gpu = Some(gpu),
            Err(e) => {
                tracing::error!("initialization failed: {e:#}");
                self.error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(gpu) = self.gpu.as_mut() {
            let response = gpu.egui_winit.on_window_event(&gpu.window, &event);
            if response.consumed {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = self.gpu.as_mut() {
                    gpu.config.width = new_size.width.max(1);
                    gpu.config.height = new_size.height.max(1);
                    gpu.surface.configure(&gpu.device, &gpu.config);
                    gpu.renderer
                        .resize(&gpu.device, gpu.config.width, gpu.config.height);
                }
                self.scene.resize(new_size.width, new_size.height);
            }
            WindowEvent::KeyboardInput { event, .. } => {
                let Some((key, action)) = keys::from_event(&event) else {
                    return;
                };
                let applied = self.scene.handle_key(key, action);
                if applied != Action::Noop {
                    tracing::debug!(?key, ?action, ?applied, "key handled");
                }
                if self.scene.close_requested() {
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => self.redraw(),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}

/// Top-left corner that centers a window of the given size on a monitor.
fn centered_origin(
    monitor_pos: PhysicalPosition<i32>,
    monitor_size: PhysicalSize<u32>,
    width: u32,
    height: u32,
) -> PhysicalPosition<i32> {
    let x = (monitor_size.width as i32 - width as i32) / 2;
    let y = (monitor_size.height as i32 - height as i32) / 2;
    PhysicalPosition::new(monitor_pos.x + x, monitor_pos.y + y)
}
