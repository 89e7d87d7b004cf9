use crate::{
    model::athlete::CreateAthleteDto,
    server::{
        error::request::RequestError,
        model::db::AthleteModel,
        validation::{present, FieldReport},
    },
};

/// Validates an athlete creation request.
pub fn validate_create(id: String, dto: CreateAthleteDto) -> Result<AthleteModel, RequestError> {
    let mut report = FieldReport::new();

    report.require("club_id", &dto.club_id);
    report.require("name", &dto.name);
    let dob = report.require_date("dob", &dto.dob);
    report.require("phone_number", &dto.phone_number);
    let gender = report.require_gender("gender", &dto.gender);
    report.require("email", &dto.email);
    let register_date = report.require_date("register_date", &dto.register_date);
    let active = report.optional_active(&dto.active);

    report.finish()?;

    Ok(AthleteModel {
        id,
        club_id: dto.club_id,
        name: dto.name,
        dob: present("dob", dob)?,
        phone_number: dto.phone_number,
        gender: present("gender", gender)?,
        email: dto.email,
        register_date: present("register_date", register_date)?,
        active,
    })
}
