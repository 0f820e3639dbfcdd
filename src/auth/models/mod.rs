pub mod bearer_token;
pub mod verified_identity;
