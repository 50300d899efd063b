//! 错误处理模块
//!
//! 定义了引擎中使用的统一错误类型。
//!
//! # 设计原则
//!
//! - 为每种错误类型提供清晰的上下文信息
//! - 支持错误链（error source）
//! - 图形错误按「瞬态 / 致命」分类，而不是向上传递原始状态码：
//!   瞬态错误（交换链失效等）由渲染器丢弃资源包后自行恢复，
//!   致命错误（设备创建失败、显存耗尽等）向上传播并终止程序

use std::fmt;
use std::path::PathBuf;

/// 引擎统一的 Result 类型
///
/// 所有可能返回错误的函数都应该使用这个类型。
pub type Result<T> = std::result::Result<T, EngineError>;

/// HelloEngine 的错误类型
///
/// 包含了引擎运行过程中可能遇到的各种错误情况。
#[derive(Debug)]
pub enum EngineError {
    /// 配置错误
    Config(ConfigError),

    /// 图形 API 错误
    Graphics(GraphicsError),

    /// IO 错误
    Io(std::io::Error),

    /// 初始化错误
    Initialization(String),

    /// 运行时错误
    Runtime(String),
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

/// 图形 API 相关的错误
///
/// 每个硬件调用的结果都被包装成这个类型的一个变体，
/// 通过 [`GraphicsError::is_transient`] 区分可恢复和不可恢复的失败。
#[derive(Debug)]
pub enum GraphicsError {
    /// 设备创建失败
    DeviceCreation(String),

    /// 着色器加载失败
    ShaderLoad { path: PathBuf, reason: String },

    /// 资源创建失败
    ResourceCreation(String),

    /// 交换链表面已丢失（瞬态，重建资源包后可恢复）
    SurfaceLost,

    /// 交换链表面已过期（瞬态，通常发生在窗口调整大小时）
    SurfaceOutdated,

    /// 获取帧超时（瞬态）
    SurfaceTimeout,

    /// 显存耗尽（致命）
    OutOfMemory,
}

impl GraphicsError {
    /// 判断错误是否为瞬态错误
    ///
    /// 瞬态错误不应终止程序：渲染器丢弃整个资源包，
    /// 在下一次绘制时重新创建。
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GraphicsError::SurfaceLost
                | GraphicsError::SurfaceOutdated
                | GraphicsError::SurfaceTimeout
        )
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Config(e) => write!(f, "Configuration error: {}", e),
            EngineError::Graphics(e) => write!(f, "Graphics error: {}", e),
            EngineError::Io(e) => write!(f, "IO error: {}", e),
            EngineError::Initialization(msg) => write!(f, "Initialization error: {}", msg),
            EngineError::Runtime(msg) => write!(f, "Runtime error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphicsError::DeviceCreation(msg) => write!(f, "Device creation failed: {}", msg),
            GraphicsError::ShaderLoad { path, reason } => {
                write!(f, "Failed to load shader '{}': {}", path.display(), reason)
            }
            GraphicsError::ResourceCreation(msg) => write!(f, "Resource creation failed: {}", msg),
            GraphicsError::SurfaceLost => write!(f, "Surface lost"),
            GraphicsError::SurfaceOutdated => write!(f, "Surface outdated"),
            GraphicsError::SurfaceTimeout => write!(f, "Timed out acquiring surface frame"),
            GraphicsError::OutOfMemory => write!(f, "Out of GPU memory"),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for GraphicsError {}

// 实现 From trait 以便于错误转换
impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err)
    }
}

impl From<ConfigError> for EngineError {
    fn from(err: ConfigError) -> Self {
        EngineError::Config(err)
    }
}

impl From<GraphicsError> for EngineError {
    fn from(err: GraphicsError) -> Self {
        EngineError::Graphics(err)
    }
}

impl From<wgpu::SurfaceError> for GraphicsError {
    fn from(err: wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost => GraphicsError::SurfaceLost,
            wgpu::SurfaceError::Outdated => GraphicsError::SurfaceOutdated,
            wgpu::SurfaceError::Timeout => GraphicsError::SurfaceTimeout,
            wgpu::SurfaceError::OutOfMemory => GraphicsError::OutOfMemory,
        }
    }
}
