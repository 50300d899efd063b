//! 三角形渲染器
//!
//! 本模块实现了固定三角形演示的渲染器：
//! 持有窗口和 GPU 资源槽，在窗口系统事件的驱动下工作。
//!
//! # 状态机
//!
//! - **绘制**：资源缺失时先整体创建，然后清屏、绑定顶点缓冲、
//!   提交一次三角形绘制并呈现
//! - **调整大小**：整体丢弃资源包（下次绘制时惰性重建）
//! - **销毁**：丢弃资源包并停止处理后续事件
//!
//! 瞬态的表面错误（丢失 / 过期 / 超时）不会向外传播：
//! 渲染器丢弃资源包，由下一次绘制恢复。

use std::sync::Arc;

use tracing::{debug, info, warn};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::core::config::Config;
use crate::core::error::{GraphicsError, Result};
use super::bundle::{BundleSlot, GpuBundle};

/// 三角形渲染器
///
/// 拥有原生窗口和一个「全有或全无」的 GPU 资源槽。
/// GPU 资源在第一次绘制时才创建；窗口本身在构造时创建。
pub struct Renderer {
    window: Arc<Window>,
    config: Config,
    slot: BundleSlot<GpuBundle>,
}

impl Renderer {
    /// 创建渲染器
    ///
    /// 只创建窗口；GPU 资源推迟到第一次 [`draw`](Renderer::draw)。
    ///
    /// # 参数
    ///
    /// * `event_loop` - winit 事件循环引用
    /// * `config` - 引擎配置
    pub fn new(event_loop: &EventLoop<()>, config: &Config) -> Result<Self> {
        debug!("Creating window");
        let window = WindowBuilder::new()
            .with_title(&config.window.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.window.width,
                config.window.height,
            ))
            .with_resizable(config.window.resizable)
            .build(event_loop)
            .map_err(|e| GraphicsError::DeviceCreation(format!("Failed to create window: {}", e)))?;

        info!(
            width = config.window.width,
            height = config.window.height,
            title = %config.window.title,
            "Window created"
        );

        Ok(Self {
            window: Arc::new(window),
            config: config.clone(),
            slot: BundleSlot::new(),
        })
    }

    /// 获取窗口引用
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// 请求重绘
    ///
    /// 销毁后是空操作。
    pub fn request_redraw(&self) {
        if !self.slot.is_destroyed() {
            self.window.request_redraw();
        }
    }

    /// 绘制一帧
    ///
    /// 资源缺失时先创建整个资源包，然后清屏并绘制三角形。
    /// 瞬态的表面错误触发资源包重建，致命错误向上传播。
    /// 销毁后是空操作。
    pub fn draw(&mut self) -> Result<()> {
        let window = self.window.clone();
        let config = &self.config;
        let bundle = match self.slot.get_or_create(|| GpuBundle::create(window, config))? {
            Some(bundle) => bundle,
            None => return Ok(()), // 已销毁
        };

        let clear_color = config.graphics.clear_color;
        match Self::render_frame(bundle, clear_color) {
            Ok(()) => Ok(()),
            Err(e) if e.is_transient() => {
                warn!("Transient surface error ({}), discarding GPU bundle", e);
                self.slot.invalidate();
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// 处理窗口大小调整
    ///
    /// 整体丢弃资源包；下一次绘制按新尺寸完整重建。
    /// 销毁后是空操作。
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.slot.invalidate() {
            debug!(width, height, "Window resized, GPU bundle discarded");
        }
    }

    /// 处理窗口销毁
    ///
    /// 丢弃资源包并锁定渲染器；之后的绘制和调整大小都被忽略。
    pub fn destroy(&mut self) {
        info!("Destroying renderer");
        self.slot.destroy();
    }

    /// 渲染器是否已销毁
    pub fn is_destroyed(&self) -> bool {
        self.slot.is_destroyed()
    }

    /// 用给定的资源包渲染一帧
    ///
    /// 清屏到配置的颜色，绑定静态顶点缓冲，
    /// 以三角形列表提交一次三顶点绘制，然后呈现。
    fn render_frame(
        bundle: &GpuBundle,
        clear_color: [f64; 4],
    ) -> std::result::Result<(), GraphicsError> {
        let frame = bundle.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = bundle
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Triangle Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: clear_color[0],
                            g: clear_color[1],
                            b: clear_color[2],
                            a: clear_color[3],
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&bundle.pipeline);
            render_pass.set_vertex_buffer(0, bundle.vertex_buffer.slice(..));
            render_pass.draw(0..3, 0..1);
        }

        bundle.queue.submit(std::iter::once(encoder.finish()));
        frame.present();

        Ok(())
    }
}
