/// CPU 侧的网格数据
///
/// 模型的一个子网格，渲染时可以被单独排除在描边之外。
#[derive(Default)]
pub struct Mesh {
    pub name: String,
    pub vertex_count: u32,
    pub triangle_count: u32,
}

/// CPU 侧的模型数据
///
/// 由若干个子网格组成；注册进场景之后网格数量不再变化。
#[derive(Default)]
pub struct Model {
    pub name: String,
    pub meshes: Vec<Mesh>,
}

impl Model {
    pub fn new(name: impl Into<String>, meshes: Vec<Mesh>) -> Self {
        Self {
            name: name.into(),
            meshes,
        }
    }

    #[inline]
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }
}
