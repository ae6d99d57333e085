//! Transient notifications (toasts) shown over the current screen.

use std::time::Duration;

use iced::Task;

use adhera_ui::{component::toast, widget::Element};

pub use adhera_ui::component::toast::Variant;

/// Display duration of a toast created without an explicit one.
pub const DEFAULT_DURATION: Duration = Duration::from_secs(5);

/// Maximum number of toasts shown at once, the newest replaces the oldest.
pub const TOAST_LIMIT: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
    pub duration: Option<Duration>,
}

impl Notification {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
            duration: None,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.variant = Variant::Destructive;
        self
    }

    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(usize),
}

#[derive(Debug, Default)]
pub struct Toasts {
    next_id: usize,
    list: Vec<(usize, Notification)>,
}

impl Toasts {
    pub fn list(&self) -> impl Iterator<Item = &Notification> {
        self.list.iter().map(|(_, n)| n)
    }

    /// Shows the notification and returns the task dismissing it once its
    /// duration elapsed.
    pub fn notify(&mut self, notification: Notification) -> Task<Message> {
        let id = self.push(notification.clone());
        let duration = notification.duration.unwrap_or(DEFAULT_DURATION);
        Task::future(async move {
            tokio::time::sleep(duration).await;
            Message::Dismiss(id)
        })
    }

    fn push(&mut self, notification: Notification) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!("toast {}: {}", id, notification.title);
        self.list.push((id, notification));
        if self.list.len() > TOAST_LIMIT {
            let excess = self.list.len() - TOAST_LIMIT;
            self.list.drain(..excess);
        }
        id
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Dismiss(id) => self.list.retain(|(i, _)| *i != id),
        }
    }

    pub fn view(&self) -> Vec<Element<Message>> {
        self.list
            .iter()
            .map(|(id, n)| {
                toast::toast(&n.title, &n.description, n.variant, Message::Dismiss(*id)).into()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_toast_replaces_oldest() {
        let mut toasts = Toasts::default();
        let first = toasts.push(Notification::new("first", "a"));
        let second = toasts.push(Notification::new("second", "b").destructive());
        assert_ne!(first, second);
        let shown: Vec<_> = toasts.list().collect();
        assert_eq!(shown.len(), TOAST_LIMIT);
        assert_eq!(shown[0].title, "second");
        assert_eq!(shown[0].variant, Variant::Destructive);

        // Dismissing an already replaced toast is a no-op.
        toasts.update(Message::Dismiss(first));
        assert_eq!(toasts.list().count(), 1);
        toasts.update(Message::Dismiss(second));
        assert_eq!(toasts.list().count(), 0);
    }

    #[test]
    fn notification_builder() {
        let n = Notification::new("t", "d").with_duration(Duration::from_secs(6));
        assert_eq!(n.variant, Variant::Default);
        assert_eq!(n.duration, Some(Duration::from_secs(6)));
    }
}
