pub mod achievement;
pub mod admin;
pub mod contact;
pub mod education;
pub mod project;
