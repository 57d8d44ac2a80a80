use crate::application::{ApplicationResult, ports::comment::CommentService};
use crate::domain::{article::ArticleId, user::UserId};
use async_trait::async_trait;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentCall {
    pub article_id: ArticleId,
    pub user_id: UserId,
    pub content: String,
}

impl CommentCall {
    fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{self:?}"))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExpectationError {
    #[error("expected {expected} calls but received {actual}")]
    CallCount { expected: usize, actual: usize },

    /// `call` is 1-based.
    #[error("call {call} did not match expectation. Expected: {expected}, Actual: {actual}")]
    CallMismatch {
        call: usize,
        expected: String,
        actual: String,
    },
}

/// Comment service that must be called exactly as scripted.
///
/// Expectations are registered up front with [`expect_add_comment`]; calls
/// are only recorded, and the comparison happens in [`verify`]. Verification
/// stops at the first difference.
///
/// [`expect_add_comment`]: CommentServiceMock::expect_add_comment
/// [`verify`]: CommentServiceMock::verify
#[derive(Debug, Default)]
pub struct CommentServiceMock {
    expected: Mutex<Vec<CommentCall>>,
    actual: Mutex<Vec<CommentCall>>,
    verified: AtomicBool,
}

impl CommentServiceMock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expect_add_comment(
        &self,
        article_id: &ArticleId,
        user_id: &UserId,
        content: impl Into<String>,
    ) -> &Self {
        lock(&self.expected).push(CommentCall {
            article_id: article_id.clone(),
            user_id: user_id.clone(),
            content: content.into(),
        });
        self
    }

    pub fn verify(&self) -> Result<(), ExpectationError> {
        // set before checking so a failed verify still counts as verified
        self.verified.store(true, Ordering::SeqCst);

        let expected = lock(&self.expected);
        let actual = lock(&self.actual);

        if expected.len() != actual.len() {
            return Err(ExpectationError::CallCount {
                expected: expected.len(),
                actual: actual.len(),
            });
        }

        match expected.iter().zip(actual.iter()).position(|(e, a)| e != a) {
            Some(index) => Err(ExpectationError::CallMismatch {
                call: index + 1,
                expected: expected[index].to_json(),
                actual: actual[index].to_json(),
            }),
            None => Ok(()),
        }
    }

    pub fn was_verified(&self) -> bool {
        self.verified.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommentService for CommentServiceMock {
    async fn add_comment(
        &self,
        article_id: &ArticleId,
        user_id: &UserId,
        content: &str,
    ) -> ApplicationResult<()> {
        lock(&self.actual).push(CommentCall {
            article_id: article_id.clone(),
            user_id: user_id.clone(),
            content: content.to_owned(),
        });
        Ok(())
    }
}

fn lock(calls: &Mutex<Vec<CommentCall>>) -> MutexGuard<'_, Vec<CommentCall>> {
    calls.lock().unwrap_or_else(PoisonError::into_inner)
}
