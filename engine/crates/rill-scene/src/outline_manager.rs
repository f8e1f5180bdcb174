//! 模型描边配置管理
//!
//! 维护「模型 -> 描边配置」的关联表。渲染层在每帧 draw call 之前查询
//! 模型是否需要描边、描边的宽度与颜色、以及哪些子网格被排除。
//! 本模块只负责关联表本身，不包含任何渲染逻辑。

use crate::components::model::Model;
use crate::guid_new_type::ModelHandle;
use crate::scene_manager::SceneManager;
use indexmap::IndexMap;
use slotmap::Key;

/// 单个模型的描边配置
///
/// 纯数据值，本模块不做合法性校验（负的宽度也会原样存下）。
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OutlineConfig {
    /// 是否启用描边
    pub enabled: bool,
    /// 描边宽度（世界空间单位）
    pub width: f32,
    /// 描边颜色（RGBA）
    pub color: glam::Vec4,
}
impl Default for OutlineConfig {
    /// 隐式注册时使用的默认配置：禁用描边，宽度 0.05，不透明黑色
    fn default() -> Self {
        Self {
            enabled: false,
            width: 0.05,
            color: glam::vec4(0.0, 0.0, 0.0, 1.0),
        }
    }
}

/// 注册表内部存储的条目
struct OutlineEntry {
    config: OutlineConfig,

    /// 被排除的子网格标记，惰性分配；None 表示没有任何排除。
    /// 长度等于分配时模型的网格数量，分配之后不再变化。
    excluded_meshes: Option<Box<[bool]>>,
}

/// `get_config` 返回的只读视图
#[derive(Clone, Copy)]
pub struct OutlineDesc<'a> {
    pub config: OutlineConfig,
    /// None 表示没有排除任何子网格
    pub excluded_meshes: Option<&'a [bool]>,
}
impl OutlineDesc<'_> {
    /// 指定子网格是否被排除在描边之外（越界视为未排除）
    #[inline]
    pub fn is_mesh_excluded(&self, mesh_index: usize) -> bool {
        self.excluded_meshes.is_some_and(|mask| mask.get(mesh_index).copied().unwrap_or(false))
    }
}

/// 某个模型在当帧需要绘制的描边数据
pub struct OutlineRenderData {
    pub model: ModelHandle,
    pub config: OutlineConfig,
    /// 需要绘制描边的子网格下标（已应用排除标记）
    pub mesh_indices: Vec<usize>,
}

/// 模型描边注册表
///
/// 每个模型至多对应一个条目。所有修改操作都不会 panic：
/// 非法参数（空句柄、越界的网格下标）记录 warning 之后忽略，
/// 返回值指示操作是否生效。
///
/// 单线程使用：由渲染循环独占持有；跨线程访问需要调用方自行加锁。
#[derive(Default)]
pub struct OutlineManager {
    entries: IndexMap<ModelHandle, OutlineEntry>,
}
// new & init
impl OutlineManager {
    pub fn new() -> Self {
        Self::default()
    }
}
// getter
impl OutlineManager {
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 查询模型的描边配置
    ///
    /// # 返回
    /// - `Some(desc)`: 模型已注册，返回配置和排除标记的只读视图
    /// - `None`: 空句柄，或模型未注册（正常情况，不是错误）
    pub fn get_config(&self, model: ModelHandle) -> Option<OutlineDesc<'_>> {
        if model.is_null() {
            return None;
        }
        self.entries.get(&model).map(|entry| OutlineDesc {
            config: entry.config,
            excluded_meshes: entry.excluded_meshes.as_deref(),
        })
    }

    /// 模型是否需要绘制描边
    ///
    /// 未注册或 enabled 为 false 的模型一律不绘制描边。
    #[inline]
    pub fn should_outline(&self, model: ModelHandle) -> bool {
        self.get_config(model).is_some_and(|desc| desc.config.enabled)
    }
}
// tools
impl OutlineManager {
    /// 设置模型的描边配置
    ///
    /// 已注册的模型原地覆盖配置，排除标记保持不变；未注册的模型新建条目。
    ///
    /// # 返回
    /// 配置是否写入成功（空句柄会被拒绝）
    pub fn set_config(&mut self, model: ModelHandle, config: OutlineConfig) -> bool {
        if model.is_null() {
            log::warn!("Cannot set outline config for null model handle");
            return false;
        }

        match self.entries.entry(model) {
            indexmap::map::Entry::Occupied(mut occupied) => {
                occupied.get_mut().config = config;
            }
            indexmap::map::Entry::Vacant(vacant) => {
                vacant.insert(OutlineEntry {
                    config,
                    excluded_meshes: None,
                });
            }
        }
        true
    }

    /// 将模型的某个子网格排除在描边之外
    ///
    /// 未注册的模型会先以默认配置隐式注册（描边初始为禁用状态）。
    /// 排除标记在第一次调用时按模型当前的网格数量分配，之后不再变化。
    /// 对同一个下标重复调用与调用一次效果相同。
    ///
    /// # 参数
    /// - `model`: 模型句柄，必须与 `model_data` 对应
    /// - `model_data`: 模型数据，只用于读取网格数量做越界检查
    /// - `mesh_index`: 要排除的子网格下标，要求 `mesh_index < mesh_count`
    pub fn add_excluded_mesh(&mut self, model: ModelHandle, model_data: &Model, mesh_index: usize) -> bool {
        if model.is_null() {
            log::warn!("Cannot exclude mesh for null model handle");
            return false;
        }
        let mesh_count = model_data.mesh_count();
        if mesh_index >= mesh_count {
            log::warn!(
                "Excluded mesh index {} out of bounds (mesh count: {}) for model {:?}",
                mesh_index,
                mesh_count,
                model
            );
            return false;
        }

        let entry = self.entries.entry(model).or_insert_with(|| OutlineEntry {
            config: OutlineConfig::default(),
            excluded_meshes: None,
        });
        let mask = entry.excluded_meshes.get_or_insert_with(|| vec![false; mesh_count].into_boxed_slice());
        if let Some(flag) = mask.get_mut(mesh_index) {
            *flag = true;
        }
        true
    }

    /// 移除模型的描边配置（包括排除标记）
    ///
    /// 空句柄或未注册的模型是 no-op；其余条目不受影响。
    /// 内部用 swap_remove 压实存储，条目之间的相对顺序不保证。
    pub fn remove_config(&mut self, model: ModelHandle) -> bool {
        if model.is_null() {
            return false;
        }
        self.entries.swap_remove(&model).is_some()
    }

    /// 构建当帧的描边绘制列表（每帧调用）
    ///
    /// 只收集 enabled 且模型仍然存活的条目；被排除的子网格不会出现在
    /// `mesh_indices` 里。模型已销毁但条目未移除的情况会被直接跳过。
    pub fn prepare_outline_data(&self, scene: &SceneManager) -> Vec<OutlineRenderData> {
        let _span = tracy_client::span!("OutlineManager::prepare_outline_data");

        let mut result = Vec::new();
        for (&model, entry) in self.entries.iter() {
            if !entry.config.enabled {
                continue;
            }
            let Some(model_data) = scene.get_model(model) else {
                continue;
            };

            let mask = entry.excluded_meshes.as_deref();
            let mesh_indices = (0..model_data.mesh_count())
                .filter(|&i| !mask.is_some_and(|m| m.get(i).copied().unwrap_or(false)))
                .collect();

            result.push(OutlineRenderData {
                model,
                config: entry.config,
                mesh_indices,
            });
        }
        result
    }
}
impl Drop for OutlineManager {
    fn drop(&mut self) {
        log::info!("OutlineManager dropped.");
    }
}
// destroy
impl OutlineManager {
    pub fn destroy(self) {}
    /// 释放所有条目（包括排除标记），实例可以继续复用
    pub fn destroy_mut(&mut self) {
        self.entries.clear();
    }
}
