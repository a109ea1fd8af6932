//! CLI output: error mapping from domain errors to the CLI surface.

use crate::error::GardenError;

/// Map domain errors to a string for CLI output, with a hint where one helps.
pub fn map_error(e: &GardenError) -> String {
    match e {
        GardenError::RemoteHashes(_) => format!(
            "{}\nExport the site's note hashes to the path configured as vault.remote_hashes.",
            e
        ),
        GardenError::PathNotInVault(_) => {
            format!("{}\nPaths are resolved relative to the vault root.", e)
        }
        _ => e.to_string(),
    }
}
