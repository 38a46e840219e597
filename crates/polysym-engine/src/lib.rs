//! polysym Engine - transactional batch execution and command façade
//!
//! This crate drives validated batch plans against the host:
//! - The `WeightTransferEngine` boundary wrapping the native engine commands
//! - The `UndoHost` boundary and the RAII `UndoChunk` transaction guard
//! - The transactional batch executor with per-item ok/skipped/failed
//!   classification
//! - The command façade: the public operations the (excluded) menu layer
//!   calls, with typed per-command options merged from persisted profiles
//!
//! Resolution and validation come from `polysym-core`; profile persistence
//! from `polysym-store`.

pub mod commands;
pub mod engine;
pub mod executor;
pub mod undo;

// Re-export commonly used types
pub use commands::{
    apply_menu_command, copy_deformer_weights, copy_skin_weights, flip_deformer_weights,
    flip_mesh, mirror_deformer_weights, mirror_mesh, mirror_skin_weights,
    print_influence_symmetry, set_influence_symmetry, Action, DeformerWeightsOptions,
    InfluenceSymmetryOptions, MenuCommand, SkinWeightsOptions, PROFILE_DEFORMER_WEIGHTS,
    PROFILE_INFLUENCE_SYMMETRY, PROFILE_SKIN_WEIGHTS,
};
pub use engine::{EngineError, EngineResult, NoopEngine, WeightTransferEngine};
pub use executor::execute;
pub use undo::{NoopUndoHost, RecordingUndoHost, UndoChunk, UndoHost};
