//! HelloEngine - 生命周期外壳入口
//!
//! 没有命令行参数：创建一个空白应用，交给驱动器运行到完成。
//! 干净关闭时退出码为 0，初始化失败时为非零。
//!
//! 空白应用永远不请求退出，所以这个外壳会一直运行，
//! 直到进程被外部终止；具体应用通过替换 [`BaseApplication`]
//! 并在 `tick` 中请求退出来结束主循环。

use hello_engine::core::log;
use hello_engine::runtime::{self, BaseApplication};
use tracing::error;

fn main() {
    log::init_simple();

    let app = BaseApplication::new();
    if let Err(e) = runtime::run(app) {
        error!("Shutting down after initialize failure");
        eprintln!("App initialize failed, will exit now: {}", e);
        std::process::exit(1);
    }
}
