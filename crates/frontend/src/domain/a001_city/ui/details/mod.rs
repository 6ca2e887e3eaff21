//! City Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - model.rs: API functions (fetch, save)
//! - view_model.rs: ViewModel with commands and state management

pub mod model;
pub mod view_model;

pub use view_model::CityDetailsViewModel;
