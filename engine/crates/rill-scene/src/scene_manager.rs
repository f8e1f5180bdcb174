use crate::components::model::Model;
use crate::guid_new_type::ModelHandle;
use slotmap::SlotMap;

/// 在 CPU 侧管理场景中的模型
#[derive(Default)]
pub struct SceneManager {
    all_models: SlotMap<ModelHandle, Model>,
}
// new & init
impl SceneManager {
    pub fn new() -> Self {
        Self::default()
    }
}
// getter
impl SceneManager {
    #[inline]
    pub fn model_map(&self) -> &SlotMap<ModelHandle, Model> {
        &self.all_models
    }
    #[inline]
    pub fn get_model(&self, handle: ModelHandle) -> Option<&Model> {
        self.all_models.get(handle)
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.all_models.is_empty()
    }
}
// tools
impl SceneManager {
    /// 向场景中添加模型
    pub fn register_model(&mut self, model: Model) -> ModelHandle {
        self.all_models.insert(model)
    }

    /// 从场景中移除模型
    ///
    /// 模型的所有者负责在移除模型时一并调用 `OutlineManager::remove_config`，
    /// 否则描边条目会一直占用内存，直到显式移除
    /// （句柄是代际式的，残留条目只会被每帧的快照跳过，不会错误地命中新模型）。
    pub fn remove_model(&mut self, handle: ModelHandle) -> Option<Model> {
        self.all_models.remove(handle)
    }
}
impl Drop for SceneManager {
    fn drop(&mut self) {
        log::info!("SceneManager dropped.");
    }
}
// destroy
impl SceneManager {
    pub fn destroy(self) {}
    pub fn destroy_mut(&mut self) {
        self.all_models.clear();
    }
}
