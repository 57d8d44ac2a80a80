use crate::application::{
    ApplicationResult,
    ports::{notification::NotificationService, time::Clock},
};
use crate::domain::article::ArticleId;
use crate::infrastructure::time::SystemClock;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Argument snapshot of one `NotificationService` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum Notification {
    ArticlePublished {
        author_id: String,
        article_id: ArticleId,
        title: String,
    },
    CommentAdded {
        author_id: String,
        article_id: ArticleId,
        commenter_name: String,
    },
    UserEmailChanged {
        user_id: String,
        message: String,
    },
    UserRegistered {
        user_id: String,
        email: String,
    },
}

impl Notification {
    pub fn method(&self) -> &'static str {
        match self {
            Notification::ArticlePublished { .. } => "notify_article_published",
            Notification::CommentAdded { .. } => "notify_comment_added",
            Notification::UserEmailChanged { .. } => "notify_user_email_changed",
            Notification::UserRegistered { .. } => "notify_user_registered",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedNotification {
    pub notification: Notification,
    pub at: DateTime<Utc>,
}

/// Records every notification it receives, in call order, and never fails.
///
/// Assertions are made after the fact through the `was_notified_of_*`
/// queries, which match if *any* recorded call fits.
pub struct NotificationServiceSpy {
    clock: Arc<dyn Clock>,
    calls: Mutex<Vec<RecordedNotification>>,
}

impl NotificationServiceSpy {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Empties the call log so the spy can be reused.
    pub fn clear(&self) {
        self.log().clear();
    }

    pub fn calls(&self) -> Vec<RecordedNotification> {
        self.log().clone()
    }

    /// Matches on author and title only; the article id is opaque to callers.
    pub fn was_notified_of_article_publication(&self, author_id: &str, title: &str) -> bool {
        self.any(|n| {
            matches!(n, Notification::ArticlePublished { author_id: a, title: t, .. }
                if a == author_id && t == title)
        })
    }

    pub fn was_notified_of_comment(&self, author_id: &str, commenter_name: &str) -> bool {
        self.any(|n| {
            matches!(n, Notification::CommentAdded { author_id: a, commenter_name: c, .. }
                if a == author_id && c == commenter_name)
        })
    }

    pub fn was_notified_of_user_email_change(&self, user_id: &str, message: &str) -> bool {
        self.any(|n| {
            matches!(n, Notification::UserEmailChanged { user_id: u, message: m }
                if u == user_id && m == message)
        })
    }

    pub fn was_notified_of_user_registration(&self, user_id: &str, email: &str) -> bool {
        self.any(|n| {
            matches!(n, Notification::UserRegistered { user_id: u, email: e }
                if u == user_id && e == email)
        })
    }

    pub fn total_notifications_sent(&self) -> usize {
        self.log().len()
    }

    pub fn last_notification_time(&self) -> Option<DateTime<Utc>> {
        self.log().last().map(|call| call.at)
    }

    fn record(&self, notification: Notification) {
        let at = self.clock.now();
        tracing::trace!(method = notification.method(), "spy recorded call");
        self.log().push(RecordedNotification { notification, at });
    }

    fn any(&self, predicate: impl Fn(&Notification) -> bool) -> bool {
        self.log().iter().any(|call| predicate(&call.notification))
    }

    fn log(&self) -> MutexGuard<'_, Vec<RecordedNotification>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for NotificationServiceSpy {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationService for NotificationServiceSpy {
    async fn notify_article_published(
        &self,
        author_id: &str,
        article_id: &ArticleId,
        title: &str,
    ) -> ApplicationResult<()> {
        self.record(Notification::ArticlePublished {
            author_id: author_id.to_owned(),
            article_id: article_id.clone(),
            title: title.to_owned(),
        });
        Ok(())
    }

    async fn notify_comment_added(
        &self,
        author_id: &str,
        article_id: &ArticleId,
        commenter_name: &str,
    ) -> ApplicationResult<()> {
        self.record(Notification::CommentAdded {
            author_id: author_id.to_owned(),
            article_id: article_id.clone(),
            commenter_name: commenter_name.to_owned(),
        });
        Ok(())
    }

    async fn notify_user_email_changed(
        &self,
        user_id: &str,
        message: &str,
    ) -> ApplicationResult<()> {
        self.record(Notification::UserEmailChanged {
            user_id: user_id.to_owned(),
            message: message.to_owned(),
        });
        Ok(())
    }

    async fn notify_user_registered(&self, user_id: &str, email: &str) -> ApplicationResult<()> {
        self.record(Notification::UserRegistered {
            user_id: user_id.to_owned(),
            email: email.to_owned(),
        });
        Ok(())
    }
}
