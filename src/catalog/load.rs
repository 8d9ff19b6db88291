use crate::catalog::model::Catalog;
use crate::error::LoadError;
use crate::library::logger::interface::Logger;
use crate::ripeness::RipenessCategory;
use std::path::Path;

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let mut catalog: Catalog = serde_json::from_str(json)?;
        for entry in catalog.fruits.iter_mut() {
            entry.name = entry.name.trim().to_lowercase();
            for variant in entry.variants.iter_mut() {
                *variant = variant.trim().to_lowercase();
            }
        }
        Ok(catalog)
    }

    pub fn read(path: &Path) -> Result<Self, LoadError> {
        let json = std::fs::read_to_string(path).map_err(|e| LoadError::Catalog {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_json(&json).map_err(|e| LoadError::Catalog {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Never fails: an unreadable or malformed document yields an empty catalog.
    pub fn load(path: &Path, logger: &dyn Logger) -> Self {
        match Self::read(path) {
            Ok(catalog) => {
                let _ = logger.info(&format!(
                    "Loaded {} fruit entries from {}",
                    catalog.fruits.len(),
                    path.display()
                ));
                catalog
            }
            Err(e) => {
                let _ = logger.warn(&format!("{}. Using generic fruit text", e));
                Catalog::empty()
            }
        }
    }

    /// Warns when the document describes a model the pipeline was not configured for.
    /// Returns true when nothing disagrees.
    pub fn check_model_metadata(&self, input_size: u32, logger: &dyn Logger) -> bool {
        let Some(metadata) = &self.metadata else {
            return true;
        };
        let mut consistent = true;

        if let Some([width, height]) = metadata.input_size {
            if width != input_size || height != input_size {
                consistent = false;
                let _ = logger.warn(&format!(
                    "Catalog expects {}x{} model input, pipeline normalizes to {}x{}",
                    width, height, input_size, input_size
                ));
            }
        }

        for (index, name) in &metadata.class_mapping {
            let expected = index
                .parse::<usize>()
                .ok()
                .and_then(RipenessCategory::from_index);
            let actual = RipenessCategory::parse(name);
            if expected.is_none() || expected != actual {
                consistent = false;
                let _ = logger.warn(&format!(
                    "Catalog maps class {} to '{}', which differs from the canonical order",
                    index, name
                ));
            }
        }

        consistent
    }
}
