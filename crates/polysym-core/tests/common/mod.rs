use polysym_core::MemoryScene;

/// Scene with two plain meshes and two weighted deformers
#[allow(dead_code)]
pub fn deformer_scene() -> MemoryScene {
    let mut scene = MemoryScene::new();
    scene.add_mesh("meshA");
    scene.add_mesh("meshB");
    scene.add_operator("clusterA");
    scene.add_operator("clusterB");
    scene
}

/// Scene with three meshes, two of them skinned
///
/// `propC` deliberately has no binder so skip paths can be exercised.
#[allow(dead_code)]
pub fn skinned_scene() -> MemoryScene {
    let mut scene = MemoryScene::new();
    scene.add_skinned_mesh("bodyA", "skinA");
    scene.add_skinned_mesh("bodyB", "skinB");
    scene.add_mesh("propC");
    scene
}

#[allow(dead_code)]
pub fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
