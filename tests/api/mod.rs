mod account;
mod athlete;
mod auth;
mod club;
mod coach;
mod organizer;

use serde_json::{json, Value};

pub fn club_body(name: &str) -> Value {
    json!({
        "name": name,
        "country": "Indonesia",
        "province": "DKI Jakarta",
        "district": "Menteng",
        "establish_date": "2001-05-14",
        "logo": "logo.png",
        "address": "Jl. Merdeka 1",
        "pic": "Budi",
        "email_pic": "budi@example.com",
        "discipline": "Athletics",
        "phone_number": "0812000000",
        "active": "TRUE"
    })
}
