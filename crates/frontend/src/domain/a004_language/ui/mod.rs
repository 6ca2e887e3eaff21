pub mod details;
pub mod list;

pub use details::LanguageDetailsViewModel;
