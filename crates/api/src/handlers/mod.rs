pub mod auth;
pub mod contact;
pub mod dashboard;
pub mod gallery;
pub mod meeting;
pub mod notification;
pub mod profile;
pub mod project;
pub mod registration;
pub mod review;
pub mod search;
pub mod uploads;
