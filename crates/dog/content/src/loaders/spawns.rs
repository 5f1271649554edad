//! Dog spawn list loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::spawn::DogSpawnSpec;

/// Loader for dog spawn lists from RON files.
pub struct SpawnLoader;

impl SpawnLoader {
    /// Load a spawn list from a RON file.
    ///
    /// RON format: `Vec<DogSpawnSpec>`
    ///
    /// ```ron
    /// [
    ///     (position: (x: 0.0, y: 0.0, z: 0.0), index: 3, path: Some(1)),
    ///     (position: (x: 40.0, y: 0.0, z: -12.0), index: 4),
    /// ]
    /// ```
    pub fn load(path: &Path) -> LoadResult<Vec<DogSpawnSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<DogSpawnSpec>> {
        let specs: Vec<DogSpawnSpec> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse spawn list RON: {}", e))?;

        for (position, spec) in specs.iter().enumerate() {
            if spec.params().is_none() {
                anyhow::bail!(
                    "Spawn entry {} out of range: index {} path {:?}",
                    position,
                    spec.index,
                    spec.path
                );
            }
        }

        Ok(specs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dog_core::Vec3f;

    #[test]
    fn parses_entries_with_optional_path() {
        let specs = SpawnLoader::parse(
            r#"[
                (position: (x: 1.0, y: 0.0, z: 2.0), index: 3, path: Some(1)),
                (position: (x: 0.0, y: 0.0, z: 0.0), index: 4),
            ]"#,
        )
        .unwrap();

        assert_eq!(specs.len(), 2);
        assert_eq!(specs[0].position, Vec3f::new(1.0, 0.0, 2.0));
        assert_eq!(specs[0].path, Some(1));
        assert_eq!(specs[1].path, None);
    }

    #[test]
    fn rejects_out_of_range_index() {
        let list = r#"[(position: (x: 0.0, y: 0.0, z: 0.0), index: 40)]"#;

        let err = SpawnLoader::parse(list).unwrap_err();

        assert!(err.to_string().contains("Spawn entry 0"));
    }
}
