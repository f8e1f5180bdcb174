//! 场景数据管理
//!
//! 在 CPU 侧维护场景中的模型数据，以及模型的描边（outline）配置。
//! 渲染层在每帧 draw call 之前通过 `OutlineManager` 查询某个模型
//! 是否需要描边、描边的宽度与颜色、以及哪些子网格被排除。

pub mod components;
pub mod guid_new_type;
pub mod outline_manager;
pub mod scene_manager;
