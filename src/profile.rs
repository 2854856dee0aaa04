use crate::exceptions::ContribError;
use crate::flow::ProfileWriter;
use serde_json::{Map, Value};
use std::path::PathBuf;

pub fn get_default_profile_path() -> Result<PathBuf, ContribError> {
    Ok(crate::utils::get_app_config_dir()?.join(crate::consts::DEFAULT_PROFILE_PATH))
}

/// A user profile stored as a flat JSON object.
#[derive(Debug, Clone)]
pub struct JsonProfile {
    path: PathBuf,
}

impl JsonProfile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn load(&self) -> Result<Map<String, Value>, ContribError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }

        match crate::fs::read_json::<Value>(&self.path)? {
            Value::Object(map) => Ok(map),
            _ => Err(ContribError::Profile(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))),
        }
    }
}

impl ProfileWriter for JsonProfile {
    fn write_key(&mut self, key: &str, value: Value) -> Result<(), ContribError> {
        let mut map = self.load()?;
        map.insert(key.to_string(), value);
        crate::fs::atomic_write_json(&self.path, &map)?;
        tracing::debug!(profile = %self.path.display(), key, "updated profile");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_key_preserves_other_keys() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("profiles").join("default.json");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, r#"{"model": "gpt-4", "contribute_conversation": false}"#).unwrap();

        let mut profile = JsonProfile::new(path.clone());
        profile
            .write_key("contribute_conversation", Value::Bool(true))
            .unwrap();

        let map = profile.load().unwrap();
        assert_eq!(map.get("model"), Some(&json!("gpt-4")));
        assert_eq!(map.get("contribute_conversation"), Some(&json!(true)));
    }

    #[test]
    fn test_write_key_creates_missing_profile() {
        let temp = tempfile::tempdir().unwrap();
        let mut profile = JsonProfile::new(temp.path().join("new").join("p.json"));

        profile.write_key("k", json!(1)).unwrap();

        assert_eq!(profile.load().unwrap().get("k"), Some(&json!(1)));
    }

    #[test]
    fn test_non_object_profile_is_rejected() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("p.json");
        std::fs::write(&path, "[1, 2]").unwrap();

        let mut profile = JsonProfile::new(path);
        let err = profile.write_key("k", json!(true)).unwrap_err();
        assert!(matches!(err, ContribError::Profile(_)));
    }
}
