//! Reading and writing member profiles as JSON.

use crate::error::{PurpleError, PurpleResult};
use crate::member::MemberProfile;
use std::path::Path;
use tracing::debug;

/// Load a profile from a JSON file. Missing fields take their defaults.
pub fn load_profile(path: impl AsRef<Path>) -> PurpleResult<MemberProfile> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|e| {
        PurpleError::Profile(format!("cannot read {}: {}", path.display(), e))
    })?;
    let profile = parse_profile(&raw)?;
    debug!(path = %path.display(), "Profile loaded");
    Ok(profile)
}

pub fn parse_profile(raw: &str) -> PurpleResult<MemberProfile> {
    Ok(serde_json::from_str(raw)?)
}

pub fn profile_to_json(profile: &MemberProfile) -> PurpleResult<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}
