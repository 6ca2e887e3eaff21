//! Industry Details UI Module

pub mod model;
pub mod view_model;

pub use view_model::IndustryDetailsViewModel;
