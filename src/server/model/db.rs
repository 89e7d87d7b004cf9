//! Database model type aliases and read models assembled by repositories.

/// A sports club, the root record organizers and athletes reference.
pub type ClubModel = entity::club::Model;

pub type OrganizerModel = entity::organizer::Model;

pub type AthleteModel = entity::athlete::Model;

pub type CoachModel = entity::coach::Model;

/// Account credentials, `password` is stored exactly as submitted.
pub type AccountModel = entity::account::Model;

/// Sign-in token, one row per account at most.
pub type TokenModel = entity::token::Model;

pub type VerificationCodeModel = entity::verification_code::Model;

/// An organizer joined with a snapshot of its club, read in the same query.
///
/// `club` is `None` only if the foreign key to the club is not enforced by the
/// underlying store.
#[derive(Debug, Clone, PartialEq)]
pub struct OrganizerWithClub {
    pub organizer: OrganizerModel,
    pub club: Option<ClubModel>,
}
