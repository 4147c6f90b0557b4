//! Zone resolution: maps file paths to forbidden-token zones.

use std::path::Path;

use crate::config::ZoneDef;
use crate::utils::paths::normalize_path;

/// Resolves file paths to zone names.
///
/// Resolution uses longest-prefix-match so that more specific directories
/// take priority over broader ones.
pub struct ZoneResolver {
    /// (path_prefix, zone_index) sorted by prefix length descending.
    map: Vec<(String, usize)>,
}

impl ZoneResolver {
    /// Build a resolver from zone definitions.
    #[must_use]
    pub fn new(zones: &[ZoneDef]) -> Self {
        let mut map: Vec<(String, usize)> = Vec::new();
        for (index, zone) in zones.iter().enumerate() {
            for prefix in &zone.paths {
                map.push((prefix.replace('\\', "/"), index));
            }
        }
        // Longest prefix first; the stable sort keeps config order on ties
        map.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { map }
    }

    /// Which zone (by index into the definitions) does this path belong to?
    #[must_use]
    pub fn resolve(&self, path: &Path) -> Option<usize> {
        let normalized = normalize_path(path);
        self.map
            .iter()
            .find(|(prefix, _)| !prefix.is_empty() && normalized.starts_with(prefix.as_str()))
            .map(|(_, index)| *index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zones() -> Vec<ZoneDef> {
        vec![
            ZoneDef::new("frontend", ["apps/frontend/"], ["apps/backend"]),
            ZoneDef::new("shared", ["packages/shared/"], ["apps/frontend"]),
            ZoneDef::new("legacy-ui", ["apps/frontend/legacy/"], ["core/"]),
        ]
    }

    #[test]
    fn resolves_prefix() {
        let r = ZoneResolver::new(&zones());
        assert_eq!(r.resolve(Path::new("apps/frontend/src/App.tsx")), Some(0));
        assert_eq!(r.resolve(Path::new("packages/shared/api.ts")), Some(1));
    }

    #[test]
    fn resolves_longest_prefix() {
        let r = ZoneResolver::new(&zones());
        assert_eq!(r.resolve(Path::new("apps/frontend/legacy/Old.tsx")), Some(2));
    }

    #[test]
    fn resolves_windows_separators() {
        let r = ZoneResolver::new(&zones());
        assert_eq!(r.resolve(Path::new(r"apps\frontend\src\App.tsx")), Some(0));
    }

    #[test]
    fn unknown_path_returns_none() {
        let r = ZoneResolver::new(&zones());
        assert_eq!(r.resolve(Path::new("apps/backend/main.py")), None);
    }

    #[test]
    fn no_partial_directory_match() {
        let r = ZoneResolver::new(&zones());
        // "apps/frontend-admin" should NOT match "apps/frontend/"
        assert_eq!(r.resolve(Path::new("apps/frontend-admin/x.ts")), None);
    }
}
