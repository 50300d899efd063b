//! HelloEngine - 三角形渲染演示入口
//!
//! 打开一个窗口，用 wgpu 绘制一个静态的彩色三角形。
//!
//! # 初始化流程
//!
//! 1. 加载配置文件（config.toml，缺失时使用默认配置）
//! 2. 应用命令行参数覆盖
//! 3. 初始化日志系统
//! 4. 创建事件循环和渲染器（GPU 资源推迟到第一次绘制）
//! 5. 启动主循环
//!
//! # 命令行参数
//!
//! - `--width <value>`: 设置窗口宽度
//! - `--height <value>`: 设置窗口高度
//! - `--no-vsync`: 关闭垂直同步
//!
//! # 事件处理
//!
//! - `CloseRequested`：销毁渲染器并退出
//! - `Resized`：整体丢弃 GPU 资源包（下次绘制时重建）
//! - `RedrawRequested`：绘制一帧；致命的图形错误终止程序

use hello_engine::core::{log, Config};
use hello_engine::render::Renderer;
use tracing::{debug, error, info};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};

fn main() {
    // 1. 加载配置（在初始化日志之前）
    let mut config = Config::from_file_or_default("config.toml");

    // 2. 应用命令行参数
    config.apply_args(std::env::args());

    // 3. 验证配置
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    // 4. 初始化日志系统（使用配置中的设置）
    let log_file = if config.logging.file_output {
        Some(config.logging.log_file.as_str())
    } else {
        None
    };
    log::init_logger(config.logging.level, config.logging.file_output, log_file);
    info!("HelloEngine starting...");
    info!(version = env!("CARGO_PKG_VERSION"), "Application initialized");

    info!(
        width = config.window.width,
        height = config.window.height,
        vsync = config.graphics.vsync,
        shader = %config.graphics.shader_path,
        "Graphics configuration"
    );

    // 5. 创建事件循环
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            error!("Failed to create event loop: {}", e);
            eprintln!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    // 6. 创建渲染器（只创建窗口，GPU 资源惰性创建）
    let mut renderer = match Renderer::new(&event_loop, &config) {
        Ok(r) => r,
        Err(e) => {
            error!("Failed to initialize renderer: {}", e);
            eprintln!("Failed to initialize renderer: {}", e);
            std::process::exit(1);
        }
    };

    info!("Renderer initialized successfully");
    info!("Entering main loop...");

    // 7. 启动事件循环
    let result = event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent { event, .. } => match event {
                // 窗口关闭事件
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    renderer.destroy();
                    elwt.exit();
                }
                // 窗口大小调整事件
                WindowEvent::Resized(new_size) => {
                    debug!(
                        width = new_size.width,
                        height = new_size.height,
                        "Window resized"
                    );
                    renderer.resize(new_size.width, new_size.height);
                }
                // 绘制一帧
                WindowEvent::RedrawRequested => {
                    if let Err(e) = renderer.draw() {
                        error!("Draw failed: {}", e);
                        eprintln!("Draw failed: {}", e);
                        renderer.destroy();
                        elwt.exit();
                    }
                }
                // 忽略其他事件
                _ => (),
            },
            // 准备绘制下一帧
            Event::AboutToWait => renderer.request_redraw(),
            _ => (),
        }
    });

    if let Err(e) = result {
        error!("Event loop error: {}", e);
        std::process::exit(1);
    }
}
