pub mod config {
    use std::fs;
    use std::path::Path;

    use serde::Deserialize;

    /// Local settings for the live smoke tests, read from `secrets.json`.
    #[derive(Debug, Deserialize)]
    pub struct Secrets {
        pub api_key: String,
        #[serde(default)]
        pub host: Option<String>,
        pub sample_dataset_id: u64,
    }

    pub fn load_secrets() -> Result<Secrets, String> {
        let mut path = std::env::current_dir().map_err(|e| e.to_string())?;
        path.push("secrets.json");
        read_secrets(&path)
    }

    fn read_secrets(path: &Path) -> Result<Secrets, String> {
        let contents = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read secrets.json: {e}"))?;
        serde_json::from_str(&contents).map_err(|e| format!("Invalid secrets.json: {e}"))
    }
}
