//! 运行时模块
//!
//! 本模块定义了引擎的生命周期契约和驱动器。
//! 任何需要参与主循环的子系统都实现 [`RuntimeModule`]；
//! 顶层的可执行单元额外实现 [`Application`]，由 [`run`] 驱动到完成。
//!
//! # 生命周期
//!
//! ```text
//! initialize() ──成功──▶ loop { tick(); is_quit()? } ──▶ finalize()
//!      │
//!      └──失败──▶ 直接返回错误（不会进入循环，也不会调用 finalize）
//! ```

pub mod module;
pub mod application;
pub mod driver;

pub use module::RuntimeModule;
pub use application::{Application, BaseApplication};
pub use driver::run;
