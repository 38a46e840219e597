//! Menu-level command dispatch
//!
//! One variant per public operation. The dispatcher fills omitted parameters
//! from the command's persisted profile, layers explicit per-call overrides
//! independently on top, runs the operation, and writes the effective
//! options back after a successful invocation. Profile defaults and per-call
//! overrides merge independently: passing one override never disables the
//! profile for the rest.

use polysym_core::{BatchReport, Direction, InfluencePattern, ObjectQuery, Result};
use polysym_store::{load_options, save_options, OptionVars};

use crate::commands::options::{
    Action, DeformerWeightsOptions, InfluenceSymmetryOptions, SkinWeightsOptions,
    PROFILE_DEFORMER_WEIGHTS, PROFILE_INFLUENCE_SYMMETRY, PROFILE_SKIN_WEIGHTS,
};
use crate::commands::{
    copy_deformer_weights, copy_skin_weights, flip_deformer_weights, flip_mesh,
    mirror_deformer_weights, mirror_mesh, mirror_skin_weights, print_influence_symmetry,
    set_influence_symmetry,
};
use crate::engine::WeightTransferEngine;
use crate::undo::UndoHost;

/// Public operations exposed to the menu layer
///
/// `names` is the optional explicit operand list; empty means the active
/// selection. The `Option` fields are per-call overrides on top of the
/// command's persisted profile.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuCommand {
    CopyDeformerWeights {
        names: Vec<String>,
    },
    FlipDeformerWeights {
        names: Vec<String>,
    },
    MirrorDeformerWeights {
        names: Vec<String>,
        direction: Option<Direction>,
    },
    FlipMesh {
        names: Vec<String>,
    },
    MirrorMesh {
        names: Vec<String>,
    },
    CopySkinWeights {
        names: Vec<String>,
        normalize: Option<bool>,
    },
    MirrorSkinWeights {
        names: Vec<String>,
        direction: Option<Direction>,
        normalize: Option<bool>,
        influence_symmetry: Option<InfluencePattern>,
    },
    SetInfluenceSymmetry {
        names: Vec<String>,
        pattern: Option<InfluencePattern>,
    },
    PrintInfluenceSymmetry {
        names: Vec<String>,
    },
}

/// Apply a menu command with profile-backed option defaulting
///
/// The relevant profile is read once, merged under hard-coded defaults and
/// under the command's overrides, and written back only when the invocation
/// succeeds. Commands without repeatable parameters touch no profile.
///
/// # Errors
///
/// Resolution and shape errors from the underlying operation; all of them
/// abort before any mutation.
pub fn apply_menu_command(
    cmd: MenuCommand,
    scene: &dyn ObjectQuery,
    engine: &dyn WeightTransferEngine,
    undo: &dyn UndoHost,
    vars: &mut dyn OptionVars,
) -> Result<BatchReport> {
    match cmd {
        MenuCommand::CopyDeformerWeights { names } => {
            let mut options =
                DeformerWeightsOptions::from_profile(&load_options(vars, PROFILE_DEFORMER_WEIGHTS));
            options.action = Action::Copy;

            let report = copy_deformer_weights(scene, engine, undo, &names)?;
            save_options(vars, PROFILE_DEFORMER_WEIGHTS, &options.to_profile());
            Ok(report)
        }

        MenuCommand::FlipDeformerWeights { names } => {
            let mut options =
                DeformerWeightsOptions::from_profile(&load_options(vars, PROFILE_DEFORMER_WEIGHTS));
            options.action = Action::Flip;

            let report = flip_deformer_weights(scene, engine, undo, &names)?;
            save_options(vars, PROFILE_DEFORMER_WEIGHTS, &options.to_profile());
            Ok(report)
        }

        MenuCommand::MirrorDeformerWeights { names, direction } => {
            let mut options =
                DeformerWeightsOptions::from_profile(&load_options(vars, PROFILE_DEFORMER_WEIGHTS));
            options.action = Action::Mirror;
            if let Some(direction) = direction {
                options.direction = direction;
            }

            let report = mirror_deformer_weights(scene, engine, undo, &names, options.direction)?;
            save_options(vars, PROFILE_DEFORMER_WEIGHTS, &options.to_profile());
            Ok(report)
        }

        MenuCommand::FlipMesh { names } => flip_mesh(scene, engine, undo, &names),

        MenuCommand::MirrorMesh { names } => mirror_mesh(scene, engine, undo, &names),

        MenuCommand::CopySkinWeights { names, normalize } => {
            let mut options =
                SkinWeightsOptions::from_profile(&load_options(vars, PROFILE_SKIN_WEIGHTS));
            options.action = Action::Copy;
            if let Some(normalize) = normalize {
                options.normalize = normalize;
            }

            let report = copy_skin_weights(scene, engine, undo, &names, &options)?;
            save_options(vars, PROFILE_SKIN_WEIGHTS, &options.to_profile());
            Ok(report)
        }

        MenuCommand::MirrorSkinWeights {
            names,
            direction,
            normalize,
            influence_symmetry,
        } => {
            let mut options =
                SkinWeightsOptions::from_profile(&load_options(vars, PROFILE_SKIN_WEIGHTS));
            options.action = Action::Mirror;
            if let Some(direction) = direction {
                options.direction = direction;
            }
            if let Some(normalize) = normalize {
                options.normalize = normalize;
            }
            if let Some(pattern) = influence_symmetry {
                options.use_influence_pattern = true;
                options.left_pattern = pattern.left;
                options.right_pattern = pattern.right;
            }

            let report = mirror_skin_weights(scene, engine, undo, &names, &options)?;
            save_options(vars, PROFILE_SKIN_WEIGHTS, &options.to_profile());
            Ok(report)
        }

        MenuCommand::SetInfluenceSymmetry { names, pattern } => {
            let mut options = InfluenceSymmetryOptions::from_profile(&load_options(
                vars,
                PROFILE_INFLUENCE_SYMMETRY,
            ));
            if let Some(pattern) = pattern {
                options.left_pattern = pattern.left;
                options.right_pattern = pattern.right;
            }

            let report = set_influence_symmetry(scene, engine, undo, &names, &options)?;
            save_options(vars, PROFILE_INFLUENCE_SYMMETRY, &options.to_profile());
            Ok(report)
        }

        MenuCommand::PrintInfluenceSymmetry { names } => {
            print_influence_symmetry(scene, engine, &names)
        }
    }
}
