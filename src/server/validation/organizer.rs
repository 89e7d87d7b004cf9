use crate::{
    model::organizer::CreateOrganizerDto,
    server::{
        error::request::RequestError,
        model::db::OrganizerModel,
        validation::{present, FieldReport},
    },
};

/// Validates an organizer creation request.
///
/// `club_id` is only checked for presence, the foreign key rejects unknown clubs.
pub fn validate_create(
    id: String,
    dto: CreateOrganizerDto,
) -> Result<OrganizerModel, RequestError> {
    let mut report = FieldReport::new();

    report.require("name", &dto.name);
    report.require("position", &dto.position);
    report.require("club_id", &dto.club_id);
    let register_date = report.require_date("register_date", &dto.register_date);
    report.require("phone_number", &dto.phone_number);
    let active = report.optional_active(&dto.active);

    report.finish()?;

    Ok(OrganizerModel {
        id,
        club_id: dto.club_id,
        name: dto.name,
        position: dto.position,
        register_date: present("register_date", register_date)?,
        phone_number: dto.phone_number,
        active,
        email: dto.email,
    })
}
