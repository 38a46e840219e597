//! Command façade
//!
//! The public operations the (excluded) menu layer calls. Every operation
//! accepts an optional explicit operand list and otherwise falls back to the
//! active selection; errors surface as a single displayable message.

pub mod deformer_weights;
pub mod influence;
pub mod menu_command;
pub mod mesh;
pub mod options;
pub mod skin_weights;

pub use deformer_weights::{
    copy_deformer_weights, flip_deformer_weights, mirror_deformer_weights,
};
pub use influence::{print_influence_symmetry, set_influence_symmetry};
pub use menu_command::{apply_menu_command, MenuCommand};
pub use mesh::{flip_mesh, mirror_mesh};
pub use options::{
    Action, DeformerWeightsOptions, InfluenceSymmetryOptions, SkinWeightsOptions,
    PROFILE_DEFORMER_WEIGHTS, PROFILE_INFLUENCE_SYMMETRY, PROFILE_SKIN_WEIGHTS,
};
pub use skin_weights::{copy_skin_weights, mirror_skin_weights};
