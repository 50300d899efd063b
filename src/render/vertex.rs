//! 顶点数据定义
//!
//! 本模块定义了渲染管线使用的顶点结构体和演示三角形的顶点数据。
//!
//! # 设计说明
//!
//! - 使用 `#[repr(C)]` 确保内存布局与着色器一致
//! - 实现 `Pod` 和 `Zeroable` trait 以支持零拷贝传输到 GPU

use bytemuck::{Pod, Zeroable};
use std::mem;

/// 顶点结构体
///
/// 定义了每个顶点的属性数据，包括位置和颜色。
/// 这个结构体会被直接传输到 GPU 的顶点缓冲区。
///
/// # 内存布局
///
/// - `position`：前 12 字节（3 个 f32）
/// - `color`：后 16 字节（4 个 f32）
///
/// 总大小：28 字节
#[repr(C)]
#[derive(Default, Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// 顶点位置（3D 坐标）
    pub position: [f32; 3],
    /// 顶点颜色（RGBA，范围 0.0-1.0）
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x4];

    /// 创建一个新顶点
    pub fn new(position: [f32; 3], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// 顶点缓冲区布局
    ///
    /// 告诉渲染管线如何从顶点缓冲区读取属性：
    /// location 0 为位置，location 1 为颜色，逐顶点步进。
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// 演示三角形的顶点数据
///
/// 三个顶点分别为红色、绿色和蓝色，
/// 颜色在光栅化阶段自动插值形成渐变。
pub const TRIANGLE_VERTICES: [Vertex; 3] = [
    Vertex { position: [0.0, 0.5, 0.0], color: [1.0, 0.0, 0.0, 1.0] },   // 顶部，红色
    Vertex { position: [0.45, -0.5, 0.0], color: [0.0, 1.0, 0.0, 1.0] }, // 右下，绿色
    Vertex { position: [-0.45, -0.5, 0.0], color: [0.0, 0.0, 1.0, 1.0] }, // 左下，蓝色
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_layout() {
        // 验证顶点结构的大小和对齐
        assert_eq!(mem::size_of::<Vertex>(), 28, "Vertex size should be 28 bytes");
        assert_eq!(mem::align_of::<Vertex>(), 4, "Vertex alignment should be 4 bytes");

        // 验证字段偏移量
        let vertex = Vertex::default();
        let vertex_ptr = &vertex as *const Vertex as usize;
        let position_ptr = &vertex.position as *const [f32; 3] as usize;
        let color_ptr = &vertex.color as *const [f32; 4] as usize;

        assert_eq!(position_ptr - vertex_ptr, 0, "position should be at offset 0");
        assert_eq!(color_ptr - vertex_ptr, 12, "color should be at offset 12");
    }

    #[test]
    fn test_buffer_layout_matches_struct() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 28);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x4);
    }

    #[test]
    fn test_triangle_vertices() {
        assert_eq!(TRIANGLE_VERTICES.len(), 3);

        // 验证可以转换为字节切片上传到 GPU
        let bytes: &[u8] = bytemuck::cast_slice(&TRIANGLE_VERTICES);
        assert_eq!(bytes.len(), 28 * 3);
    }

    #[test]
    fn test_vertex_new() {
        let vertex = Vertex::new([1.0, 2.0, 3.0], [1.0, 0.5, 0.0, 1.0]);
        assert_eq!(vertex.position, [1.0, 2.0, 3.0]);
        assert_eq!(vertex.color, [1.0, 0.5, 0.0, 1.0]);
    }
}
