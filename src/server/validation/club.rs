use crate::{
    model::club::CreateClubDto,
    server::{
        error::request::RequestError,
        model::db::ClubModel,
        validation::{present, FieldReport},
    },
};

/// Validates a club creation request and maps it to a record with the given id.
pub fn validate_create(id: String, dto: CreateClubDto) -> Result<ClubModel, RequestError> {
    let mut report = FieldReport::new();

    report.require("name", &dto.name);
    report.require("country", &dto.country);
    report.require("province", &dto.province);
    report.require("district", &dto.district);
    report.require("email_pic", &dto.email_pic);
    let establish_date = report.require_date("establish_date", &dto.establish_date);
    report.require("logo", &dto.logo);
    report.require("address", &dto.address);
    report.require("pic", &dto.pic);
    report.require("discipline", &dto.discipline);
    report.require("phone_number", &dto.phone_number);
    let active = report.optional_active(&dto.active);

    report.finish()?;

    let establish_date = present("establish_date", establish_date)?;

    Ok(ClubModel {
        id,
        name: dto.name,
        country: dto.country,
        province: dto.province,
        district: dto.district,
        establish_date,
        logo: dto.logo,
        address: dto.address,
        email_pic: dto.email_pic,
        pic: dto.pic,
        discipline: dto.discipline,
        phone_number: dto.phone_number,
        active,
    })
}
