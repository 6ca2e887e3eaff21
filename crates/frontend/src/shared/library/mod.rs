//! Общая логика ящика библиотечных справочников
//!
//! Семь справочников (города, страны, отделы, языки, отрасли, объекты,
//! подотрасли) редактируются одним и тем же ящиком с тремя закладками.
//! Здесь собрано всё, что у них общее: выбор активной закладки по данным
//! записи, решение о перечитывании похожей библиотеки, обрезка payload
//! перед сохранением и разбор ошибок валидации. Отличия между
//! справочниками описываются декларативно в `LibraryDescriptor`.

pub mod bookmarks;
pub mod descriptor;
pub mod errors;
pub mod refetch;
pub mod submission;
pub mod view_model;

pub use bookmarks::{resolve_active_bookmark, resolve_disabled_bookmarks};
pub use descriptor::LibraryDescriptor;
pub use errors::{group_validation_errors, SaveError};
pub use refetch::{should_refetch_similar_library, RefetchInputs};
pub use submission::build_submission;
pub use view_model::{FieldError, LibraryDetailsVm};
