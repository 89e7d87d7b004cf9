pub use super::account::Entity as Account;
pub use super::athlete::Entity as Athlete;
pub use super::club::Entity as Club;
pub use super::coach::Entity as Coach;
pub use super::organizer::Entity as Organizer;
pub use super::token::Entity as Token;
pub use super::verification_code::Entity as VerificationCode;
