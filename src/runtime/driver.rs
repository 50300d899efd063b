//! 生命周期驱动器
//!
//! 拥有唯一的应用实例，并把它同步地运行到完成。
//! 没有重试、没有超时、没有并发：一条单线程的调用链。

use tracing::{error, info};

use crate::core::error::Result;
use super::application::Application;

/// 把一个应用程序运行到完成
///
/// 驱动器通过值接收应用，即它是应用的唯一所有者；
/// 返回时应用被析构。
///
/// # 调用顺序
///
/// 1. `initialize()`：失败时记录日志并返回错误，
///    不会进入主循环，也不会调用 `finalize`
/// 2. 循环：`tick()`，然后轮询 `is_quit()`，
///    首次观察到 `true` 时在下一次 `tick` 之前退出
/// 3. `finalize()`：循环退出后无条件调用恰好一次
///
/// # 返回值
///
/// 干净关闭返回 `Ok(())`，初始化失败返回对应的错误。
pub fn run<A: Application>(mut app: A) -> Result<()> {
    info!("Initializing application");
    if let Err(e) = app.initialize() {
        error!("Application initialize failed: {}", e);
        return Err(e);
    }

    info!("Entering main loop");
    loop {
        app.tick();
        if app.is_quit() {
            break;
        }
    }

    app.finalize();
    info!("Application finalized, shutting down");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::{EngineError, Result};
    use crate::runtime::application::BaseApplication;
    use crate::runtime::module::RuntimeModule;
    use std::cell::Cell;
    use std::rc::Rc;

    /// 生命周期调用计数，与测试共享
    ///
    /// `run` 按值消费应用，测试通过 `Rc` 保留观测句柄。
    #[derive(Default)]
    struct Counters {
        initialized: Cell<u32>,
        ticks: Cell<u32>,
        finalized: Cell<u32>,
        ticks_after_finalize: Cell<u32>,
    }

    /// 记录生命周期调用的测试应用
    ///
    /// `quit_after` 控制在第几次 tick 之后 `is_quit` 返回 true。
    struct CountingApp {
        counters: Rc<Counters>,
        fail_initialize: bool,
        quit_after: u32,
    }

    impl CountingApp {
        fn new(quit_after: u32) -> (Self, Rc<Counters>) {
            let counters = Rc::new(Counters::default());
            let app = Self {
                counters: counters.clone(),
                fail_initialize: false,
                quit_after,
            };
            (app, counters)
        }

        fn failing() -> (Self, Rc<Counters>) {
            let (mut app, counters) = Self::new(1);
            app.fail_initialize = true;
            (app, counters)
        }
    }

    impl RuntimeModule for CountingApp {
        fn initialize(&mut self) -> Result<()> {
            self.counters.initialized.set(self.counters.initialized.get() + 1);
            if self.fail_initialize {
                return Err(EngineError::Initialization("subsystem refused".to_string()));
            }
            Ok(())
        }

        fn tick(&mut self) {
            self.counters.ticks.set(self.counters.ticks.get() + 1);
            if self.counters.finalized.get() > 0 {
                self.counters
                    .ticks_after_finalize
                    .set(self.counters.ticks_after_finalize.get() + 1);
            }
        }

        fn finalize(&mut self) {
            self.counters.finalized.set(self.counters.finalized.get() + 1);
        }
    }

    impl Application for CountingApp {
        fn is_quit(&self) -> bool {
            self.counters.ticks.get() >= self.quit_after
        }
    }

    #[test]
    fn test_initialize_failure_skips_loop_and_finalize() {
        let (app, counters) = CountingApp::failing();
        let result = run(app);

        assert!(result.is_err());
        assert_eq!(counters.initialized.get(), 1);
        assert_eq!(counters.ticks.get(), 0, "tick must not run after a failed initialize");
        assert_eq!(counters.finalized.get(), 0, "finalize must not run after a failed initialize");
    }

    #[test]
    fn test_finalize_called_exactly_once_after_last_tick() {
        let (app, counters) = CountingApp::new(5);
        let result = run(app);

        assert!(result.is_ok());
        assert_eq!(counters.initialized.get(), 1);
        assert_eq!(counters.ticks.get(), 5);
        assert_eq!(counters.finalized.get(), 1);
        assert_eq!(counters.ticks_after_finalize.get(), 0, "no tick may follow finalize");
    }

    #[test]
    fn test_quit_polled_after_every_tick() {
        // is_quit 在第一次 tick 之后即为 true：恰好一次 tick
        let (app, counters) = CountingApp::new(1);
        let result = run(app);

        assert!(result.is_ok());
        assert_eq!(counters.ticks.get(), 1);
        assert_eq!(counters.finalized.get(), 1);
    }

    #[test]
    fn test_run_completes_with_self_quitting_application() {
        // 一个在第一次 tick 里就请求退出的应用也要走完整的生命周期
        struct QuitNow(BaseApplication);
        impl RuntimeModule for QuitNow {
            fn initialize(&mut self) -> Result<()> {
                self.0.initialize()
            }
            fn tick(&mut self) {
                self.0.request_quit();
            }
            fn finalize(&mut self) {
                self.0.finalize();
            }
        }
        impl Application for QuitNow {
            fn is_quit(&self) -> bool {
                self.0.is_quit()
            }
        }

        assert!(run(QuitNow(BaseApplication::new())).is_ok());
    }
}
