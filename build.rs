/// Build script for HelloEngine
///
/// # Shader Strategy:
/// - WGSL shaders are loaded from disk at runtime when the GPU bundle is
///   (re)created; nothing is compiled at build time.
fn main() {
    // Trigger rebuild if shader files change
    println!("cargo:rerun-if-changed=shaders/triangle.wgsl");
}
