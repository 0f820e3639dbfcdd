pub static PUBLIC_KEYS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";
pub static ISSUER_PREFIX: &str = "https://securetoken.google.com/";
pub static OAUTH_TOKEN_URL: &str = "https://www.googleapis.com/oauth2/v4/token";

pub static DEFAULT_KEYS_MAX_AGE: u64 = 3600;
pub static CLOCK_SKEW_SECS: u64 = 0;
pub static MAX_UID_LENGTH: usize = 128;

pub fn issuer_for(project_id: &str) -> String {
    [ISSUER_PREFIX, project_id].concat()
}
