use std::env;

use serde::Deserialize;

pub static DEFAULT_CREDENTIALS_PATH: &str = "serviceAccountKey.json";

#[derive(Debug, Clone, Deserialize)]
pub struct Envy {
    #[serde(default = "default_app_env")]
    pub app_env: String,
    pub port: Option<u16>,

    pub firebase_credentials_path: Option<String>,
    pub firebase_project_id: Option<String>,
    pub firebase_storage_bucket: Option<String>,
}

impl Envy {
    pub fn credentials_path(&self) -> &str {
        self.firebase_credentials_path
            .as_deref()
            .unwrap_or(DEFAULT_CREDENTIALS_PATH)
    }
}

fn default_app_env() -> String {
    "development".to_string()
}

pub fn load() -> Result<Envy, envy::Error> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| default_app_env());
    let _ = dotenvy::from_filename(format!(".env.{}", app_env));

    envy::from_env::<Envy>()
}
