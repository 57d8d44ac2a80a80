// src/domain/user/entity.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::value_objects::{Email, UserId, UserName};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    id: UserId,
    name: UserName,
    email: Email,
    created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: Option<UserId>,
    pub name: String,
    pub email: String,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = Some(id);
        self
    }
}

impl User {
    pub fn create(params: NewUser, now: DateTime<Utc>) -> DomainResult<Self> {
        let name = UserName::new(params.name)?;
        let email = Email::new(params.email)?;

        Ok(Self {
            id: params.id.unwrap_or_else(UserId::generate),
            name,
            email,
            created_at: now,
        })
    }

    pub fn id(&self) -> &UserId {
        &self.id
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Replaces the email. Passing the current address is accepted and
    /// leaves the user untouched.
    pub fn change_email(&mut self, email: impl Into<String>) -> DomainResult<()> {
        let email = Email::new(email)?;
        if email == self.email {
            return Ok(());
        }
        self.email = email;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::create(NewUser::new("Alice", "alice@example.com"), Utc::now()).unwrap()
    }

    #[test]
    fn change_email_replaces_value() {
        let mut user = sample_user();
        user.change_email("alice.new@example.com").unwrap();
        assert_eq!(user.email().as_str(), "alice.new@example.com");
        assert_eq!(user.name().as_str(), "Alice");
    }

    #[test]
    fn change_email_to_same_value_is_noop() {
        let mut user = sample_user();
        let before = user.clone();
        user.change_email("alice@example.com").unwrap();
        assert_eq!(user, before);
    }

    #[test]
    fn change_email_rejects_empty_and_keeps_old_value() {
        let mut user = sample_user();
        assert!(user.change_email("").is_err());
        assert_eq!(user.email().as_str(), "alice@example.com");
    }

    #[test]
    fn change_email_accepts_whitespace_only_value() {
        let mut user = sample_user();
        user.change_email("  ").unwrap();
        assert_eq!(user.email().as_str(), "  ");
    }

    #[test]
    fn create_rejects_empty_name() {
        assert!(User::create(NewUser::new("", "x@y.z"), Utc::now()).is_err());
    }
}
