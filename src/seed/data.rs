//! Sample beneficiaries, loans and spending records for a fresh project.

use chrono::{DateTime, Utc};

use super::models::field_value::{record, FieldValue, Fields};

pub static USERS_COLLECTION: &str = "users";
pub static LOANS_COLLECTION: &str = "loans";
pub static TRANSACTIONS_COLLECTION: &str = "transactions";

pub static USER_ID_FIELD: &str = "uid";
pub static LOAN_ID_FIELD: &str = "loan_id";
pub static TRANSACTION_ID_FIELD: &str = "transaction_id";

pub fn users(now: DateTime<Utc>) -> Vec<Fields> {
    vec![
        record([
            ("uid", "user_001".into()),
            ("name", "Rajesh Kumar".into()),
            ("phone", "+919876543210".into()),
            ("district", "Vellore".into()),
            ("risk_profile", "low".into()),
            ("created_at", now.into()),
        ]),
        record([
            ("uid", "user_002".into()),
            ("name", "Anita Desai".into()),
            ("phone", "+919876543211".into()),
            ("district", "Kanchipuram".into()),
            ("risk_profile", "medium".into()),
            ("created_at", now.into()),
        ]),
    ]
}

pub fn loans(now: DateTime<Utc>) -> Vec<Fields> {
    vec![
        record([
            ("loan_id", "loan_101".into()),
            ("beneficiary_uid", "user_001".into()),
            ("scheme_name", "PM Mudra Yojana".into()),
            ("sanctioned_amount", FieldValue::Integer(50000)),
            ("balance_amount", FieldValue::Integer(50000)),
            ("status", "active".into()),
            ("approved_category", vec!["equipment", "raw_material"].into()),
            ("disbursement_date", now.into()),
        ]),
        record([
            ("loan_id", "loan_102".into()),
            ("beneficiary_uid", "user_002".into()),
            ("scheme_name", "Agri-Infrastructure Fund".into()),
            ("sanctioned_amount", FieldValue::Integer(100000)),
            // 5000 already spent, see tx_555
            ("balance_amount", FieldValue::Integer(95000)),
            ("status", "active".into()),
            ("approved_category", vec!["machinery", "seeds"].into()),
            ("disbursement_date", now.into()),
        ]),
    ]
}

pub fn transactions(now: DateTime<Utc>) -> Vec<Fields> {
    vec![record([
        ("transaction_id", "tx_555".into()),
        ("loan_id", "loan_102".into()),
        ("amount", FieldValue::Integer(5000)),
        ("vendor_name", "Vellore Agro Supplies".into()),
        ("category", "seeds".into()),
        ("status", "verified".into()),
        ("timestamp", now.into()),
        (
            "geo_location",
            record([
                ("lat", FieldValue::Double(12.9165)),
                ("lng", FieldValue::Double(79.1325)),
            ])
            .into(),
        ),
    ])]
}
