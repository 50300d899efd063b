//! HelloEngine - 最小引擎外壳与三角形渲染演示
//!
//! 两个互相独立的组件：
//!
//! - `runtime`：生命周期契约（初始化 / 逐帧推进 / 收尾）和把单个
//!   应用实例运行到完成的驱动器
//! - `render`：固定三角形的渲染演示（窗口、惰性创建的 GPU 资源包、
//!   清屏 + 绘制 + 呈现）
//!
//! # 架构概览
//!
//! ```text
//! ┌──────────────┐      ┌──────────────┐
//! │ engine_shell │      │ hello_engine │   两个入口
//! └──────┬───────┘      └──────┬───────┘
//!        │                     │
//! ┌──────▼───────┐      ┌──────▼───────┐
//! │   runtime    │      │    render    │   互相独立的组件
//! │ (生命周期)    │      │  (三角形演示) │
//! └──────┬───────┘      └──────┬───────┘
//!        │                     │
//!        └─────────┬───────────┘
//!                  │
//!           ┌──────▼───────┐
//!           │     core     │   日志 / 配置 / 错误处理
//!           └──────────────┘
//! ```

pub mod core;
pub mod runtime;
pub mod render;
