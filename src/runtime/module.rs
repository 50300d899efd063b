//! 生命周期契约定义
//!
//! 定义了引擎中所有运行时模块共享的最小生命周期接口。

use crate::core::error::Result;

/// 运行时模块
///
/// 引擎的基本扩展点：一个具有「初始化 / 逐帧推进 / 收尾」生命周期的单元。
///
/// # 调用约定
///
/// 由模块的所有者（通常是 [`driver::run`](crate::runtime::driver::run)）保证：
///
/// - `initialize` 恰好被调用一次，且先于其他所有方法
/// - `initialize` 失败后，`tick` 和 `finalize` 永远不会被调用
/// - `tick` 被反复调用，直到所有者观察到退出条件
/// - `finalize` 在最后一次 `tick` 之后恰好被调用一次
pub trait RuntimeModule {
    /// 初始化模块
    ///
    /// 解析配置、分配资源、初始化所有子模块。
    /// 失败时返回错误，模块的其余生命周期不会被执行。
    fn initialize(&mut self) -> Result<()>;

    /// 推进一个主循环周期
    ///
    /// 在这一层假定不会失败；任何内部错误由模块自行处理。
    fn tick(&mut self);

    /// 收尾清理
    ///
    /// 释放资源、清理运行时临时状态。同样假定不会失败。
    fn finalize(&mut self);
}
