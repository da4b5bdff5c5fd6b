use super::ModelStoreError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// suffix appended to a model name to produce its file name
pub const MODEL_FILE_SUFFIX: &str = "_model.json";

/// file-based persistence for trained models. each model is stored as a JSON document
/// named `<name>_model.json` inside a single directory.
#[derive(Clone, Debug)]
pub struct ModelStore {
    directory: PathBuf,
}

impl ModelStore {
    /// opens a store at the given directory, creating it (and any parents) if needed.
    pub fn new<P: AsRef<Path>>(directory: P) -> Result<ModelStore, ModelStoreError> {
        let directory = directory.as_ref().to_path_buf();
        if !directory.is_dir() {
            std::fs::create_dir_all(&directory).map_err(|e| ModelStoreError::Write {
                path: directory.clone(),
                message: format!("unable to create model directory: {e}"),
            })?;
        }
        Ok(ModelStore { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// the file path a model with this name is stored at
    pub fn model_path(&self, name: &str) -> Result<PathBuf, ModelStoreError> {
        validate_name(name)?;
        Ok(self.directory.join(format!("{name}{MODEL_FILE_SUFFIX}")))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.model_path(name).map(|p| p.is_file()).unwrap_or(false)
    }

    /// writes a model to disk, replacing any previous model with the same name.
    /// returns the path of the written file.
    pub fn save<T: Serialize>(&self, name: &str, model: &T) -> Result<PathBuf, ModelStoreError> {
        let path = self.model_path(name)?;
        let file = File::create(&path).map_err(|e| ModelStoreError::Write {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, model).map_err(|source| {
            ModelStoreError::Serialize {
                name: name.to_string(),
                source,
            }
        })?;
        writer.flush().map_err(|e| ModelStoreError::Write {
            path: path.clone(),
            message: e.to_string(),
        })?;
        log::info!("saved model '{name}' to {}", path.display());
        Ok(path)
    }

    /// reads a model from disk. a missing file is reported as [`ModelStoreError::NotFound`].
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<T, ModelStoreError> {
        let path = self.model_path(name)?;
        if !path.is_file() {
            return Err(ModelStoreError::NotFound(name.to_string()));
        }
        let file = File::open(&path).map_err(|e| ModelStoreError::Read {
            path: path.clone(),
            message: e.to_string(),
        })?;
        let reader = BufReader::new(file);
        let model = serde_json::from_reader(reader)
            .map_err(|source| ModelStoreError::Deserialize { path: path.clone(), source })?;
        log::debug!("loaded model '{name}' from {}", path.display());
        Ok(model)
    }

    /// lists stored models as a mapping from model name to file path.
    pub fn list(&self) -> Result<BTreeMap<String, PathBuf>, ModelStoreError> {
        let entries = std::fs::read_dir(&self.directory).map_err(|e| ModelStoreError::Read {
            path: self.directory.clone(),
            message: e.to_string(),
        })?;
        let mut models = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| ModelStoreError::Read {
                path: self.directory.clone(),
                message: e.to_string(),
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let name = path
                .file_name()
                .and_then(|f| f.to_str())
                .and_then(|f| f.strip_suffix(MODEL_FILE_SUFFIX))
                .filter(|n| !n.is_empty())
                .map(String::from);
            if let Some(name) = name {
                models.insert(name, path);
            }
        }
        Ok(models)
    }

    /// removes a stored model. returns false if no model with this name existed.
    pub fn delete(&self, name: &str) -> Result<bool, ModelStoreError> {
        let path = self.model_path(name)?;
        if !path.is_file() {
            return Ok(false);
        }
        std::fs::remove_file(&path).map_err(|e| ModelStoreError::Write {
            path: path.clone(),
            message: format!("unable to delete model: {e}"),
        })?;
        log::info!("deleted model '{name}' at {}", path.display());
        Ok(true)
    }
}

/// model names become file names, so they are limited to ascii letters, digits,
/// '-', '_' and '.', and may not start with '.'.
fn validate_name(name: &str) -> Result<(), ModelStoreError> {
    let invalid = |message: &str| ModelStoreError::InvalidName {
        name: name.to_string(),
        message: message.to_string(),
    };
    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name may not start with '.'"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    {
        return Err(invalid("only ascii letters, digits, '-', '_' and '.' are allowed"));
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use serde::Deserialize;

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Weights {
        values: Vec<f64>,
    }

    #[test]
    fn test_save_load_list_delete() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("models")).unwrap();
        assert!(store.directory().is_dir());
        assert!(store.list().unwrap().is_empty());

        let model = Weights {
            values: vec![1.0, 2.5],
        };
        let path = store.save("denver", &model).unwrap();
        assert!(path.ends_with("denver_model.json"));
        assert!(store.contains("denver"));

        let loaded: Weights = store.load("denver").unwrap();
        assert_eq!(loaded, model);

        store.save("front_range", &model).unwrap();
        let listed = store.list().unwrap();
        assert_eq!(
            listed.keys().cloned().collect::<Vec<_>>(),
            vec!["denver".to_string(), "front_range".to_string()]
        );

        assert!(store.delete("denver").unwrap());
        assert!(!store.delete("denver").unwrap());
        assert!(!store.contains("denver"));
    }

    #[test]
    fn test_load_missing_model() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path()).unwrap();
        let result: Result<Weights, _> = store.load("nowhere");
        assert!(matches!(result, Err(ModelStoreError::NotFound(name)) if name == "nowhere"));
    }

    #[test]
    fn test_list_ignores_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path()).unwrap();
        std::fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        std::fs::write(dir.path().join("_model.json"), "{}").unwrap();
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_path_like_names() {
        let dir = tempfile::tempdir().unwrap();
        let store = ModelStore::new(dir.path()).unwrap();
        let model = Weights { values: vec![] };
        assert!(matches!(
            store.save("../escape", &model),
            Err(ModelStoreError::InvalidName { .. })
        ));
        assert!(matches!(
            store.save("", &model),
            Err(ModelStoreError::InvalidName { .. })
        ));
    }
}
