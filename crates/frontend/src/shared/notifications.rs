use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

/// Centralized notification feed.
///
/// - Domain view models push success/error messages here
/// - The host shell renders and dismisses them
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn notify(&self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Notification {
                id,
                level,
                message: message.into(),
            })
        });
        id
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.notify(NotificationLevel::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.notify(NotificationLevel::Error, message)
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<Notification> {
        self.items.get()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_and_dismiss() {
        let svc = NotificationService::new();
        let first = svc.error("boom");
        let second = svc.success("saved");
        assert_eq!(svc.items().len(), 2);

        svc.dismiss(first);
        let items = svc.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, second);
        assert_eq!(items[0].level, NotificationLevel::Success);
    }
}
