//! Options-profile persistence
//!
//! Each command persists its last-used parameters as one JSON object under a
//! `"{command}OptionVar"` key. Loading never fails: an absent or corrupt
//! payload yields an empty mapping and a non-fatal warning, so callers can
//! always merge persisted values under their hard-coded defaults.

use std::collections::BTreeMap;

use tracing::warn;

use crate::vars::OptionVars;

/// A named options profile: option key to JSON scalar/tuple value
pub type ProfileMap = BTreeMap<String, serde_json::Value>;

/// The option-var key a command's profile is stored under
pub fn option_var_name(command: &str) -> String {
    format!("{}OptionVar", command)
}

/// Load the persisted options for `command`
///
/// Returns the persisted mapping, or an empty one if nothing is stored or
/// the stored payload fails to deserialize. Deserialization and backend
/// faults are reported as warnings, never raised: the caller always receives
/// a usable mapping.
pub fn load_options(vars: &dyn OptionVars, command: &str) -> ProfileMap {
    let key = option_var_name(command);

    let stored = match vars.get(&key) {
        Ok(stored) => stored,
        Err(err) => {
            warn!("Error loading options for '{}' - {}", command, err);
            return ProfileMap::new();
        }
    };

    let Some(payload) = stored else {
        return ProfileMap::new();
    };

    match serde_json::from_str(&payload) {
        Ok(options) => options,
        Err(err) => {
            warn!("Error loading options for '{}' - {}", command, err);
            ProfileMap::new()
        }
    }
}

/// Persist the options for `command`
///
/// The save is all-or-nothing: if the mapping cannot be serialized or the
/// backend write fails, a warning is reported and the previously persisted
/// value, if any, is left untouched.
pub fn save_options(vars: &mut dyn OptionVars, command: &str, options: &ProfileMap) {
    let payload = match serde_json::to_string(options) {
        Ok(payload) => payload,
        Err(err) => {
            warn!("Error saving options for '{}' - {}", command, err);
            return;
        }
    };

    if let Err(err) = vars.set(&option_var_name(command), &payload) {
        warn!("Error saving options for '{}' - {}", command, err);
    }
}

/// Remove the persisted options for `command`
///
/// Idempotent: removing an absent profile is not an error. Returns whether a
/// profile was present.
pub fn delete_options(vars: &mut dyn OptionVars, command: &str) -> bool {
    match vars.remove(&option_var_name(command)) {
        Ok(removed) => removed,
        Err(err) => {
            warn!("Error resetting options for '{}' - {}", command, err);
            false
        }
    }
}
