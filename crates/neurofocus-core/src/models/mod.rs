pub mod answer;
pub mod category;
pub mod diagnosis;
pub mod education;
pub mod ledger;
pub mod profile;
pub mod question;
pub mod record;
pub mod report;
