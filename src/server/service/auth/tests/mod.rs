mod sign_in;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use roster_test_utils::prelude::*;

use crate::{
    model::auth::CredentialsDto,
    server::{
        data::token::TokenRepository,
        error::{auth::AuthError, Error},
        service::auth::AuthService,
    },
};

fn credentials(email: &str, password: &str) -> CredentialsDto {
    CredentialsDto {
        email: email.to_string(),
        password: password.to_string(),
    }
}

fn noon() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap()
}
