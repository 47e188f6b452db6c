pub mod admin;
pub mod ids;
pub mod respondent;
pub mod selection;
pub mod survey;
