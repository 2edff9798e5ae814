use hidden_grid_core::PlayerProfile;
use std::fs;
use std::path::PathBuf;

/// Owns the single persisted player profile.
///
/// Loading is parse-or-default: a missing or malformed file yields a fresh
/// default profile, and fields absent from an older file fall back
/// individually via the profile's serde defaults. Saving writes the whole
/// profile and swallows failures; the in-memory copy still serves the
/// session even when the disk copy is stale.
pub struct ProfileStore {
    path: PathBuf,
    profile: PlayerProfile,
}

impl ProfileStore {
    fn default_path() -> PathBuf {
        dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("hidden_grid_profile.json")
    }

    /// Load the profile from the platform data directory.
    pub fn load() -> Self {
        Self::load_from(Self::default_path())
    }

    /// Load the profile from an explicit path.
    pub fn load_from(path: PathBuf) -> Self {
        let profile = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                log::warn!(
                    "profile at {} unreadable ({err}), starting fresh",
                    path.display()
                );
                PlayerProfile::default()
            }),
            Err(_) => PlayerProfile::default(),
        };
        Self { path, profile }
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    /// Apply a pure transaction to the profile and persist the result.
    pub fn update<F>(&mut self, transform: F)
    where
        F: FnOnce(&PlayerProfile) -> PlayerProfile,
    {
        self.profile = transform(&self.profile);
        self.save();
    }

    fn save(&self) {
        if let Ok(json) = serde_json::to_string_pretty(&self.profile) {
            if let Err(err) = fs::write(&self.path, json) {
                log::warn!("could not persist profile to {}: {err}", self.path.display());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hidden-grid-{}-{name}.json", std::process::id()))
    }

    #[test]
    fn missing_file_yields_default_profile() {
        let store = ProfileStore::load_from(temp_path("missing"));
        assert_eq!(store.profile(), &PlayerProfile::default());
    }

    #[test]
    fn malformed_file_yields_default_profile() {
        let path = temp_path("malformed");
        fs::write(&path, "{ this is not json").unwrap();
        let store = ProfileStore::load_from(path.clone());
        assert_eq!(store.profile(), &PlayerProfile::default());
        let _ = fs::remove_file(path);
    }

    #[test]
    fn update_persists_and_reloads() {
        let path = temp_path("roundtrip");
        let mut store = ProfileStore::load_from(path.clone());
        store.update(|profile| {
            let mut next = profile.clone();
            next.xp = 500;
            next.total_solved = 3;
            next
        });

        let reloaded = ProfileStore::load_from(path.clone());
        assert_eq!(reloaded.profile().xp, 500);
        assert_eq!(reloaded.profile().total_solved, 3);
        let _ = fs::remove_file(path);
    }
}
