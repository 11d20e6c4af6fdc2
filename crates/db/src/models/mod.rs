pub mod contact;
pub mod gallery;
pub mod meeting;
pub mod notification;
pub mod profile;
pub mod project;
pub mod registration;
pub mod review;
pub mod session;
pub mod stats;
pub mod user;
