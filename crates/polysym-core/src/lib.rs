//! polysym Core - selection-driven batch operation kernel
//!
//! This crate provides the scene-facing foundation for the polysym weight
//! transfer toolset, including:
//! - Node handles, capabilities, and ordered operand groups
//! - The `ObjectQuery` scene boundary and an in-memory reference scene
//! - Selection resolution from explicit names or the active selection
//! - Cardinality validation and batch plan construction per operation kind
//! - The error taxonomy shared by every polysym crate
//!
//! Execution of a plan (undo scoping, engine dispatch) lives in
//! `polysym-engine`; options persistence lives in `polysym-store`.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod pairing;
pub mod resolver;
pub mod scene;

// Re-export commonly used types
pub use errors::{Result, SymError};
pub use model::{
    BatchPlan, BatchReport, Capability, Direction, InfluencePattern, ItemOutcome, ItemStatus,
    NodeHandle, OperandGroup, OperationKind, PlanItem, PlannedOp, TransferMode, TransferSettings,
    WeightTransferRequest,
};
pub use pairing::validate;
pub use resolver::{resolve, resolve_meshes, resolve_operators};
pub use scene::{MemoryScene, ObjectQuery};
