use std::cell::RefCell;
use std::collections::HashSet;

use polysym_core::{InfluencePattern, MemoryScene, NodeHandle, TransferMode, WeightTransferRequest};
use polysym_engine::{EngineError, EngineResult, WeightTransferEngine};

/// One recorded engine invocation
#[derive(Debug, Clone, PartialEq)]
#[allow(dead_code)]
pub enum EngineCall {
    DeformerTransfer {
        source_operator: String,
        source_mesh: String,
        destination_operator: String,
        destination_mesh: String,
        mode: TransferMode,
        direction: i32,
        normalize: bool,
    },
    SkinTransfer {
        source_mesh: String,
        source_binder: String,
        destination_mesh: String,
        destination_binder: String,
        mode: TransferMode,
        direction: i32,
        normalize: bool,
        influence: Option<(String, String)>,
    },
    FlipMesh {
        mesh: String,
    },
    MirrorMesh {
        base: String,
        target: String,
    },
    SetSymmetry {
        skin: String,
        left: String,
        right: String,
    },
    QuerySymmetry {
        skin: String,
    },
}

/// Engine fake that records calls and fails on demand
///
/// `fail_for` marks a destination mesh (or flip/mirror target, or binder for
/// symmetry calls) whose engine call reports failure; everything else
/// succeeds silently, like the real opaque commands.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    calls: RefCell<Vec<EngineCall>>,
    fail_targets: RefCell<HashSet<String>>,
    symmetry_pairs: Vec<(String, String)>,
}

#[allow(dead_code)]
impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine whose symmetry queries report the given influence pairs
    pub fn with_symmetry_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            symmetry_pairs: pairs
                .iter()
                .map(|(l, r)| (l.to_string(), r.to_string()))
                .collect(),
            ..Self::default()
        }
    }

    /// Make every call targeting `target` fail
    pub fn fail_for(&self, target: &str) {
        self.fail_targets.borrow_mut().insert(target.to_string());
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.calls.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Calls that mutate the scene (everything except symmetry queries)
    pub fn mutation_count(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|c| !matches!(c, EngineCall::QuerySymmetry { .. }))
            .count()
    }

    fn record(&self, call: EngineCall) {
        self.calls.borrow_mut().push(call);
    }

    fn result_for(&self, target: &str) -> EngineResult {
        if self.fail_targets.borrow().contains(target) {
            Err(EngineError::new(format!("engine rejected '{}'", target)))
        } else {
            Ok(())
        }
    }
}

impl WeightTransferEngine for ScriptedEngine {
    fn transfer_deformer_weights(&self, request: &WeightTransferRequest) -> EngineResult {
        self.record(EngineCall::DeformerTransfer {
            source_operator: request.source_operator.name().to_string(),
            source_mesh: request.source_mesh.name().to_string(),
            destination_operator: request.destination_operator.name().to_string(),
            destination_mesh: request.destination_mesh.name().to_string(),
            mode: request.mode,
            direction: request.settings.direction.wire_value(),
            normalize: request.settings.normalize,
        });
        self.result_for(request.destination_mesh.name())
    }

    fn transfer_skin_weights(&self, request: &WeightTransferRequest) -> EngineResult {
        self.record(EngineCall::SkinTransfer {
            source_mesh: request.source_mesh.name().to_string(),
            source_binder: request.source_operator.name().to_string(),
            destination_mesh: request.destination_mesh.name().to_string(),
            destination_binder: request.destination_operator.name().to_string(),
            mode: request.mode,
            direction: request.settings.direction.wire_value(),
            normalize: request.settings.normalize,
            influence: request
                .settings
                .influence_symmetry
                .as_ref()
                .map(|p| (p.left.clone(), p.right.clone())),
        });
        self.result_for(request.destination_mesh.name())
    }

    fn flip_mesh(&self, mesh: &NodeHandle) -> EngineResult {
        self.record(EngineCall::FlipMesh {
            mesh: mesh.name().to_string(),
        });
        self.result_for(mesh.name())
    }

    fn mirror_mesh(&self, base: &NodeHandle, target: &NodeHandle) -> EngineResult {
        self.record(EngineCall::MirrorMesh {
            base: base.name().to_string(),
            target: target.name().to_string(),
        });
        self.result_for(target.name())
    }

    fn set_influence_symmetry(
        &self,
        skin: &NodeHandle,
        pattern: &InfluencePattern,
    ) -> EngineResult {
        self.record(EngineCall::SetSymmetry {
            skin: skin.name().to_string(),
            left: pattern.left.clone(),
            right: pattern.right.clone(),
        });
        self.result_for(skin.name())
    }

    fn influence_symmetry(
        &self,
        skin: &NodeHandle,
    ) -> std::result::Result<Vec<(String, String)>, EngineError> {
        self.record(EngineCall::QuerySymmetry {
            skin: skin.name().to_string(),
        });
        self.result_for(skin.name())?;
        Ok(self.symmetry_pairs.clone())
    }
}

/// Scene with two meshes and two weighted deformers
#[allow(dead_code)]
pub fn deformer_scene() -> MemoryScene {
    let mut scene = MemoryScene::new();
    scene.add_mesh("meshA");
    scene.add_mesh("meshB");
    scene.add_operator("clusterA");
    scene.add_operator("clusterB");
    scene
}

/// Scene with two skinned meshes and one unskinned prop
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
