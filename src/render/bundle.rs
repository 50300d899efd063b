//! GPU 资源包管理
//!
//! 本模块负责渲染一帧所需的全部图形资源：
//! - [`GpuBundle`]：设备、交换链表面、渲染管线和顶点缓冲组成的原子资源集
//! - [`BundleSlot`]：「全有或全无」的资源持有者
//!
//! # 不变量
//!
//! 资源包要么完整存在，要么完全不存在；
//! 绘制路径观察不到任何中间状态。创建过程中任何一步失败，
//! 已创建的部分随错误返回一起丢弃，槽位保持为空。

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};
use wgpu::util::DeviceExt;
use winit::window::Window;

use crate::core::config::Config;
use crate::core::error::{GraphicsError, Result};
use super::vertex::{Vertex, TRIANGLE_VERTICES};

/// 「全有或全无」的资源槽
///
/// 封装了渲染演示的资源状态机：
///
/// - **绘制**：[`get_or_create`](BundleSlot::get_or_create) 在资源缺失时惰性创建
/// - **调整大小**：[`invalidate`](BundleSlot::invalidate) 整体丢弃，下次绘制时重建
/// - **销毁**：[`destroy`](BundleSlot::destroy) 丢弃并锁定，之后的绘制和丢弃都是空操作
///
/// 对资源类型泛型化，状态转换因此可以脱离 GPU 测试。
#[derive(Debug, Default)]
pub struct BundleSlot<T> {
    bundle: Option<T>,
    destroyed: bool,
}

impl<T> BundleSlot<T> {
    /// 创建一个空槽
    pub fn new() -> Self {
        Self {
            bundle: None,
            destroyed: false,
        }
    }

    /// 资源包当前是否存在
    pub fn is_ready(&self) -> bool {
        self.bundle.is_some()
    }

    /// 槽位是否已销毁
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// 获取资源包，缺失时通过 `create` 创建
    ///
    /// # 返回值
    ///
    /// - `Ok(Some(_))`：资源包可用（已有或刚创建）
    /// - `Ok(None)`：槽位已销毁，不再提供资源
    /// - `Err(_)`：创建失败，槽位保持为空
    pub fn get_or_create<F>(&mut self, create: F) -> Result<Option<&mut T>>
    where
        F: FnOnce() -> Result<T>,
    {
        if self.destroyed {
            return Ok(None);
        }

        let bundle = match &mut self.bundle {
            Some(bundle) => bundle,
            slot => slot.insert(create()?),
        };
        Ok(Some(bundle))
    }

    /// 整体丢弃资源包
    ///
    /// 下一次 [`get_or_create`](BundleSlot::get_or_create) 会重新创建。
    /// 销毁后的槽位不受影响。
    ///
    /// # 返回值
    ///
    /// 本次调用是否实际丢弃了一个资源包。
    pub fn invalidate(&mut self) -> bool {
        if self.destroyed {
            return false;
        }
        self.bundle.take().is_some()
    }

    /// 丢弃资源包并锁定槽位
    ///
    /// 之后的所有操作都是空操作。
    pub fn destroy(&mut self) {
        self.bundle = None;
        self.destroyed = true;
    }
}

/// GPU 资源包
///
/// 渲染一帧所需的全部图形句柄，作为一个原子单元创建和丢弃。
pub struct GpuBundle {
    /// wgpu 实例（入口点）
    pub instance: wgpu::Instance,
    /// 窗口表面
    pub surface: wgpu::Surface<'static>,
    /// 图形适配器（GPU）
    pub adapter: wgpu::Adapter,
    /// 逻辑设备
    pub device: wgpu::Device,
    /// 命令队列
    pub queue: wgpu::Queue,
    /// 表面配置
    pub surface_config: wgpu::SurfaceConfiguration,
    /// 渲染管线
    pub pipeline: wgpu::RenderPipeline,
    /// 顶点缓冲（静态三角形）
    pub vertex_buffer: wgpu::Buffer,
}

impl GpuBundle {
    /// 创建完整的资源包
    ///
    /// 按顺序创建实例、表面、适配器、设备、渲染管线和顶点缓冲。
    /// 任何一步失败都会返回错误，不会留下部分创建的资源。
    ///
    /// # 参数
    ///
    /// * `window` - winit 窗口引用
    /// * `config` - 引擎配置（垂直同步、着色器路径）
    pub fn create(window: Arc<Window>, config: &Config) -> Result<Self> {
        info!("Creating GPU bundle");

        // 1. 创建 wgpu 实例
        debug!("Creating wgpu instance");
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            dx12_shader_compiler: Default::default(),
            flags: wgpu::InstanceFlags::default(),
            gles_minor_version: wgpu::Gles3MinorVersion::Automatic,
        });

        // 2. 创建表面
        debug!("Creating surface");
        let size = window.inner_size();
        let surface = instance
            .create_surface(window)
            .map_err(|e| GraphicsError::DeviceCreation(format!("Failed to create surface: {}", e)))?;

        // 3. 请求适配器（选择 GPU）
        debug!("Requesting adapter");
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or_else(|| GraphicsError::DeviceCreation("Failed to find suitable adapter".to_string()))?;

        info!("Selected adapter: {:?}", adapter.get_info());

        // 4. 请求设备和队列
        debug!("Requesting device and queue");
        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("Main Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
            },
            None,
        ))
        .map_err(|e| GraphicsError::DeviceCreation(format!("Failed to create device: {}", e)))?;

        // 5. 配置表面
        let surface_caps = surface.get_capabilities(&adapter);
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| matches!(f, wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb))
            .unwrap_or(surface_caps.formats[0]);

        debug!("Surface format: {:?}", surface_format);

        let present_mode = if config.graphics.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::Immediate
        };

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &surface_config);

        // 6. 按文件名加载着色器
        let shader_path = PathBuf::from(&config.graphics.shader_path);
        debug!("Loading shader: {}", shader_path.display());
        let shader_source = fs::read_to_string(&shader_path).map_err(|e| GraphicsError::ShaderLoad {
            path: shader_path.clone(),
            reason: e.to_string(),
        })?;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Triangle Shader"),
            source: wgpu::ShaderSource::Wgsl(shader_source.into()),
        });

        // 7. 创建渲染管线
        debug!("Creating render pipeline");
        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Triangle Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Triangle Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: "vs_main",
                buffers: &[Vertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
        });

        // 8. 上传静态三角形顶点
        debug!("Creating vertex buffer");
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Triangle Vertex Buffer"),
            contents: bytemuck::cast_slice(&TRIANGLE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        info!("GPU bundle created");

        Ok(Self {
            instance,
            surface,
            adapter,
            device,
            queue,
            surface_config,
            pipeline,
            vertex_buffer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::EngineError;

    fn slot() -> BundleSlot<u32> {
        BundleSlot::new()
    }

    #[test]
    fn test_lazy_creation_happens_once() {
        let mut slot = slot();
        let mut creations = 0;

        assert!(!slot.is_ready());

        // 第一次访问创建资源
        let bundle = slot
            .get_or_create(|| {
                creations += 1;
                Ok(7)
            })
            .unwrap();
        assert_eq!(bundle.copied(), Some(7));
        assert!(slot.is_ready());

        // 后续访问重用已有资源
        let bundle = slot
            .get_or_create(|| {
                creations += 1;
                Ok(8)
            })
            .unwrap();
        assert_eq!(bundle.copied(), Some(7));
        assert_eq!(creations, 1);
    }

    #[test]
    fn test_failed_creation_leaves_slot_empty() {
        let mut slot = slot();

        let result = slot.get_or_create(|| Err(EngineError::Runtime("device lost".to_string())));
        assert!(result.is_err());
        assert!(!slot.is_ready(), "a failed creation must not leave a partial bundle");

        // 失败后仍然可以重试
        assert!(slot.get_or_create(|| Ok(1)).unwrap().is_some());
    }

    #[test]
    fn test_invalidate_forces_recreation() {
        let mut slot = slot();
        slot.get_or_create(|| Ok(1)).unwrap();
        assert!(slot.is_ready());

        // 调整大小：整体丢弃
        assert!(slot.invalidate());
        assert!(!slot.is_ready());

        // 空槽上的丢弃是空操作
        assert!(!slot.invalidate());

        // 下一次绘制完整重建
        let bundle = slot.get_or_create(|| Ok(2)).unwrap();
        assert_eq!(bundle.copied(), Some(2), "stale bundle must not be reused after invalidate");
    }

    #[test]
    fn test_destroy_latches() {
        let mut slot = slot();
        slot.get_or_create(|| Ok(1)).unwrap();

        slot.destroy();
        assert!(slot.is_destroyed());
        assert!(!slot.is_ready());

        // 销毁后不再创建资源，也不再处理丢弃
        let mut created = false;
        let bundle = slot
            .get_or_create(|| {
                created = true;
                Ok(2)
            })
            .unwrap();
        assert!(bundle.is_none());
        assert!(!created);
        assert!(!slot.invalidate());
    }
}
