
use pt_core::FixedClock;

use std::sync::Arc;

use chrono::NaiveDate;

pub(crate) fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock(NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()))
}

pub(crate) const USERS_JSON: &str = r#"[
    {"id": 3, "full_name": "Ada Lovelace", "username": "ada"},
    {"id": 7, "full_name": "Grace Hopper", "username": "ghopper"},
    {"id": 9, "full_name": "Alan Turing", "username": "aturing"}
]"#;
