//! 应用程序契约与默认实现
//!
//! [`Application`] 在 [`RuntimeModule`] 之上增加了退出查询，
//! 是驱动器能够运行到完成的最小接口。
//! [`BaseApplication`] 是它的空白实现，可以直接运行，
//! 也可以作为具体应用的起点。

use tracing::debug;

use crate::core::error::Result;
use super::module::RuntimeModule;

/// 应用程序
///
/// 在运行时模块的生命周期之上增加退出条件查询。
/// 驱动器在每次 `tick` 之后轮询 [`is_quit`](Application::is_quit)，
/// 一旦返回 `true`，循环在下一次 `tick` 之前终止。
pub trait Application: RuntimeModule {
    /// 查询应用是否请求退出
    fn is_quit(&self) -> bool;
}

/// 空白应用程序
///
/// 所有生命周期方法均为空操作，`initialize` 总是成功并清除退出标志。
/// 在调用 [`request_quit`](BaseApplication::request_quit) 之前不会退出。
#[derive(Debug, Default)]
pub struct BaseApplication {
    quit: bool,
}

impl BaseApplication {
    /// 创建一个新的空白应用程序
    pub fn new() -> Self {
        Self { quit: false }
    }

    /// 请求退出
    ///
    /// 驱动器在当前 `tick` 结束后观察到该标志并退出主循环。
    pub fn request_quit(&mut self) {
        debug!("Quit requested");
        self.quit = true;
    }
}

impl RuntimeModule for BaseApplication {
    // 解析命令行、读取配置、初始化所有子模块
    fn initialize(&mut self) -> Result<()> {
        self.quit = false;
        Ok(())
    }

    // 一个主循环周期
    fn tick(&mut self) {}

    // 收尾所有子模块并清理运行时临时状态
    fn finalize(&mut self) {}
}

impl Application for BaseApplication {
    fn is_quit(&self) -> bool {
        self.quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialize_clears_quit_flag() {
        let mut app = BaseApplication::new();
        app.request_quit();
        assert!(app.is_quit());

        // initialize 重置退出标志
        app.initialize().unwrap();
        assert!(!app.is_quit());
    }

    #[test]
    fn test_request_quit() {
        let mut app = BaseApplication::new();
        app.initialize().unwrap();
        assert!(!app.is_quit());

        app.request_quit();
        assert!(app.is_quit());
    }
}
