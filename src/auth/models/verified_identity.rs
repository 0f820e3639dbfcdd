use serde::Serialize;

use crate::auth::firebase::claims::FirebaseClaims;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedIdentity {
    pub uid: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub auth_time: Option<u64>,
    pub iat: u64,
    pub exp: u64,
}

impl From<FirebaseClaims> for VerifiedIdentity {
    fn from(claims: FirebaseClaims) -> Self {
        VerifiedIdentity {
            uid: claims.sub,
            email: claims.email,
            phone_number: claims.phone_number,
            auth_time: claims.auth_time,
            iat: claims.iat,
            exp: claims.exp,
        }
    }
}
