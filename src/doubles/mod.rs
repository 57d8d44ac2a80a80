//! Test doubles for the repository and collaborator ports.
//!
//! Each kind answers a different testing question:
//!
//! * [`dummy`] fills a parameter slot and does nothing.
//! * [`stub`] returns canned answers regardless of input.
//! * [`fake`] is a small but working in-memory implementation.
//! * [`spy`] records every call and lets the test query the log afterwards.
//! * [`mock`] is loaded with ordered expectations up front and fails
//!   [`CommentServiceMock::verify`] when actual usage diverges.

pub mod dummy;
pub mod fake;
pub mod mock;
pub mod spy;
pub mod stub;

pub use dummy::{DummyCommentService, DummyLogger, DummyNotificationService};
pub use fake::{ArticleRepositoryFake, UserRepositoryFake};
pub use mock::{CommentCall, CommentServiceMock, ExpectationError};
pub use spy::{Notification, NotificationServiceSpy, RecordedNotification};
pub use stub::{ArticleRepositoryStub, FixedClock, UserRepositoryStub};
