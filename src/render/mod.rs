//! 渲染演示模块
//!
//! 固定三角形的渲染演示：一个原生窗口加一组固定的 GPU 资源，
//! 在窗口系统事件的驱动下重绘一个静态三角形。
//!
//! # 模块组织
//!
//! - `vertex`：顶点结构体和演示三角形数据
//! - `bundle`：GPU 资源包及其「全有或全无」的持有者
//! - `renderer`：绘制 / 调整大小 / 销毁三个事件的处理

pub mod vertex;
pub mod bundle;
pub mod renderer;

pub use vertex::{Vertex, TRIANGLE_VERTICES};
pub use bundle::{BundleSlot, GpuBundle};
pub use renderer::Renderer;
