pub static FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub static DEFAULT_DATABASE: &str = "(default)";
pub static DATASTORE_SCOPE: &str = "https://www.googleapis.com/auth/datastore";
pub static JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
pub static ASSERTION_LIFETIME_SECS: u64 = 3600;
