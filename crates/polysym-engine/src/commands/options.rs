//! Typed per-command options
//!
//! Each command with repeatable parameters reads its profile once per
//! interactive invocation and merges persisted values under hard-coded
//! defaults; explicit per-call overrides then layer independently on top.
//! The wire values (action 1|2|3, direction 1|2) match what the host's
//! option boxes have always stored.

use polysym_core::{Direction, InfluencePattern, TransferSettings};
use polysym_store::ProfileMap;
use serde_json::json;

/// Profile name for the deformer-weights command family
pub const PROFILE_DEFORMER_WEIGHTS: &str = "polyDeformerWeights";
/// Profile name for the skin-weights command family
pub const PROFILE_SKIN_WEIGHTS: &str = "polySkinWeights";
/// Profile name for the influence-symmetry command
pub const PROFILE_INFLUENCE_SYMMETRY: &str = "influenceSymmetry";

/// Action choice shared by the deformer- and skin-weights option boxes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Copy,
    Flip,
    Mirror,
}

impl Action {
    /// Profile wire value (radio choice 1|2|3)
    pub fn wire_value(&self) -> i64 {
        match self {
            Action::Copy => 1,
            Action::Flip => 2,
            Action::Mirror => 3,
        }
    }

    /// Parse a profile wire value; unknown values yield `None`
    pub fn from_wire(value: i64) -> Option<Self> {
        match value {
            1 => Some(Action::Copy),
            2 => Some(Action::Flip),
            3 => Some(Action::Mirror),
            _ => None,
        }
    }
}

impl Default for Action {
    fn default() -> Self {
        Action::Mirror
    }
}

/// Profile wire value for a direction (radio choice 1|2)
fn direction_wire(direction: Direction) -> i64 {
    match direction {
        Direction::Forward => 1,
        Direction::Reverse => 2,
    }
}

fn direction_from_wire(value: i64) -> Option<Direction> {
    match value {
        1 => Some(Direction::Forward),
        2 => Some(Direction::Reverse),
        _ => None,
    }
}

fn wire_int(profile: &ProfileMap, key: &str) -> Option<i64> {
    profile.get(key).and_then(|v| v.as_i64())
}

fn wire_bool(profile: &ProfileMap, key: &str) -> Option<bool> {
    profile.get(key).and_then(|v| v.as_bool())
}

fn wire_str(profile: &ProfileMap, key: &str) -> Option<String> {
    profile.get(key).and_then(|v| v.as_str().map(String::from))
}

/// Options for the deformer-weights command family
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeformerWeightsOptions {
    pub action: Action,
    pub direction: Direction,
}

impl DeformerWeightsOptions {
    /// Merge persisted values under the hard-coded defaults
    ///
    /// Absent or wrong-typed keys keep their default; the profile is never
    /// read field-by-field from two different sources.
    pub fn from_profile(profile: &ProfileMap) -> Self {
        let defaults = Self::default();
        Self {
            action: wire_int(profile, "action")
                .and_then(Action::from_wire)
                .unwrap_or(defaults.action),
            direction: wire_int(profile, "direction")
                .and_then(direction_from_wire)
                .unwrap_or(defaults.direction),
        }
    }

    /// The profile payload persisted after a successful apply
    pub fn to_profile(&self) -> ProfileMap {
        let mut profile = ProfileMap::new();
        profile.insert("action".into(), json!(self.action.wire_value()));
        profile.insert("direction".into(), json!(direction_wire(self.direction)));
        profile
    }
}

/// Options for the skin-weights command family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkinWeightsOptions {
    pub action: Action,
    pub direction: Direction,
    pub normalize: bool,
    pub use_influence_pattern: bool,
    pub left_pattern: String,
    pub right_pattern: String,
}

impl Default for SkinWeightsOptions {
    fn default() -> Self {
        Self {
            action: Action::Mirror,
            direction: Direction::Forward,
            normalize: false,
            use_influence_pattern: true,
            left_pattern: "L_*".to_string(),
            right_pattern: "R_*".to_string(),
        }
    }
}

impl SkinWeightsOptions {
    /// Merge persisted values under the hard-coded defaults
    pub fn from_profile(profile: &ProfileMap) -> Self {
        let defaults = Self::default();
        Self {
            action: wire_int(profile, "action")
                .and_then(Action::from_wire)
                .unwrap_or(defaults.action),
            direction: wire_int(profile, "direction")
                .and_then(direction_from_wire)
                .unwrap_or(defaults.direction),
            normalize: wire_bool(profile, "normalize").unwrap_or(defaults.normalize),
            use_influence_pattern: wire_bool(profile, "useInfluencePattern")
                .unwrap_or(defaults.use_influence_pattern),
            left_pattern: wire_str(profile, "leftPattern").unwrap_or(defaults.left_pattern),
            right_pattern: wire_str(profile, "rightPattern").unwrap_or(defaults.right_pattern),
        }
    }

    /// The profile payload persisted after a successful apply
    pub fn to_profile(&self) -> ProfileMap {
        let mut profile = ProfileMap::new();
        profile.insert("action".into(), json!(self.action.wire_value()));
        profile.insert("direction".into(), json!(direction_wire(self.direction)));
        profile.insert("normalize".into(), json!(self.normalize));
        profile.insert(
            "useInfluencePattern".into(),
            json!(self.use_influence_pattern),
        );
        profile.insert("leftPattern".into(), json!(self.left_pattern));
        profile.insert("rightPattern".into(), json!(self.right_pattern));
        profile
    }

    /// The influence pairing patterns, when enabled
    pub fn influence_symmetry(&self) -> Option<InfluencePattern> {
        self.use_influence_pattern
            .then(|| InfluencePattern::new(self.left_pattern.clone(), self.right_pattern.clone()))
    }

    /// Transfer settings carried by every request in the batch
    pub fn settings(&self) -> TransferSettings {
        TransferSettings {
            direction: self.direction,
            normalize: self.normalize,
            influence_symmetry: self.influence_symmetry(),
        }
    }
}

/// Options for the influence-symmetry command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfluenceSymmetryOptions {
    pub left_pattern: String,
    pub right_pattern: String,
}

impl Default for InfluenceSymmetryOptions {
    fn default() -> Self {
        Self {
            left_pattern: "L_*".to_string(),
            right_pattern: "R_*".to_string(),
        }
    }
}

impl InfluenceSymmetryOptions {
    /// Merge persisted values under the hard-coded defaults
    pub fn from_profile(profile: &ProfileMap) -> Self {
        let defaults = Self::default();
        Self {
            left_pattern: wire_str(profile, "leftPattern").unwrap_or(defaults.left_pattern),
            right_pattern: wire_str(profile, "rightPattern").unwrap_or(defaults.right_pattern),
        }
    }

    /// The profile payload persisted after a successful apply
    pub fn to_profile(&self) -> ProfileMap {
        let mut profile = ProfileMap::new();
        profile.insert("leftPattern".into(), json!(self.left_pattern));
        profile.insert("rightPattern".into(), json!(self.right_pattern));
        profile
    }

    pub fn pattern(&self) -> InfluencePattern {
        InfluencePattern::new(self.left_pattern.clone(), self.right_pattern.clone())
    }
}
