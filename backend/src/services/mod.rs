//! Business logic services for the Plant Care Assistant

pub mod catalog;
pub mod reminder;
pub mod suggestion;

pub use catalog::CatalogService;
pub use reminder::ReminderService;
pub use suggestion::SuggestionService;
