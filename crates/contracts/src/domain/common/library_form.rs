use serde::Serialize;

/// Доступ дженерик-модели формы к общим полям DTO библиотечной сущности
///
/// Каждая форма справочника (город, страна, отдел и т.д.) реализует этот
/// trait, чтобы общая модель ящика могла переключать закладки и сбрасывать
/// зависимые поля, не зная конкретного типа.
pub trait LibraryForm: Clone + Default + Serialize {
    fn id(&self) -> Option<i64>;
    /// Сбросить id (режим дублирования записи)
    fn clear_id(&mut self);

    fn priority_id(&self) -> Option<i64>;
    fn set_priority_id(&mut self, value: Option<i64>);

    fn translation_id(&self) -> Option<i64>;
    fn set_translation_id(&mut self, value: Option<i64>);

    fn library_id(&self) -> Option<i64>;
    fn set_library_id(&mut self, value: Option<i64>);
}
