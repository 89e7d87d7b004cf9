use crate::{
    model::coach::CreateCoachDto,
    server::{
        error::request::RequestError,
        model::db::CoachModel,
        validation::{present, FieldReport},
    },
};

/// Validates a coach creation request. `dob` is free text and only checked for presence.
pub fn validate_create(id: String, dto: CreateCoachDto) -> Result<CoachModel, RequestError> {
    let mut report = FieldReport::new();

    report.require("name", &dto.name);
    report.require("dob", &dto.dob);
    report.require("phone_number", &dto.phone_number);
    let gender = report.require_gender("gender", &dto.gender);
    report.require("email", &dto.email);
    report.require("discipline", &dto.discipline);
    let register_date = report.require_date("register_date", &dto.register_date);
    let active = report.optional_active(&dto.active);

    report.finish()?;

    Ok(CoachModel {
        id,
        name: dto.name,
        dob: dto.dob,
        phone_number: dto.phone_number,
        gender: present("gender", gender)?,
        email: dto.email,
        discipline: dto.discipline,
        register_date: present("register_date", register_date)?,
        active,
    })
}
