//! 描边配置演示
//!
//! 构建一个小场景，为其中的模型设置描边配置和子网格排除，
//! 然后模拟一帧渲染，打印描边绘制列表。

use rill_crate_tools::init_log::init_log;
use rill_scene::components::model::{Mesh, Model};
use rill_scene::outline_manager::{OutlineConfig, OutlineManager};
use rill_scene::scene_manager::SceneManager;

fn make_model(name: &str, mesh_names: &[&str]) -> Model {
    let meshes = mesh_names
        .iter()
        .map(|mesh_name| Mesh {
            name: (*mesh_name).into(),
            ..Default::default()
        })
        .collect();
    Model::new(name, meshes)
}

fn main() {
    init_log();
    tracy_client::Client::start();

    let mut scene = SceneManager::new();
    let mut outlines = OutlineManager::new();

    let knight = scene.register_model(make_model("knight", &["body", "helmet", "sword", "shield", "cape"]));
    let rock = scene.register_model(make_model("rock", &["rock"]));

    // 选中的角色：红色描边，披风不参与
    outlines.set_config(
        knight,
        OutlineConfig {
            enabled: true,
            width: 0.1,
            color: glam::vec4(1.0, 0.0, 0.0, 1.0),
        },
    );
    if let Some(model) = scene.get_model(knight) {
        outlines.add_excluded_mesh(knight, model, 4);
    }

    // 石头注册了配置但没有启用描边
    outlines.set_config(rock, OutlineConfig::default());

    // 模拟一帧：收集描边绘制列表
    for draw in outlines.prepare_outline_data(&scene) {
        let name = scene.get_model(draw.model).map(|m| m.name.as_str()).unwrap_or("<stale>");
        log::info!(
            "outline draw: model={} width={} color={:?} meshes={:?}",
            name,
            draw.config.width,
            draw.config.color,
            draw.mesh_indices
        );
    }

    // 模型销毁时要一并移除描边配置
    scene.remove_model(rock);
    outlines.remove_config(rock);

    log::info!("outline entries remaining: {}", outlines.len());
}
