// src/application/services/user_service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{ClockPort, LoggerPort, NotificationPort},
    },
    domain::user::{NewUser, User, UserId, UserRepository},
};

pub struct RegisterUserCommand {
    pub name: String,
    pub email: String,
}

pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    clock: Arc<ClockPort>,
    notifications: Option<Arc<NotificationPort>>,
    logger: Option<Arc<LoggerPort>>,
}

impl UserService {
    pub fn new(user_repo: Arc<dyn UserRepository>, clock: Arc<ClockPort>) -> Self {
        Self {
            user_repo,
            clock,
            notifications: None,
            logger: None,
        }
    }

    pub fn with_notifications(mut self, notifications: Arc<NotificationPort>) -> Self {
        self.notifications = Some(notifications);
        self
    }

    pub fn with_logger(mut self, logger: Arc<LoggerPort>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub async fn register_user(&self, command: RegisterUserCommand) -> ApplicationResult<User> {
        let user = User::create(NewUser::new(command.name, command.email), self.clock.now())?;
        self.user_repo.save(&user).await?;

        if let Some(notifications) = &self.notifications {
            notifications
                .notify_user_registered(user.id().as_str(), user.email().as_str())
                .await?;
        }

        if let Some(logger) = &self.logger {
            logger.log(&format!("User registered: {}", user.id()));
        }

        Ok(user)
    }

    /// Changes the email of an existing user and tells them about it.
    ///
    /// Submitting the current address still saves the user and still sends
    /// the "changed" notification.
    pub async fn update_user_email(&self, user_id: &str, new_email: &str) -> ApplicationResult<User> {
        let id = UserId::parse(user_id)?;
        let mut user = self
            .user_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| ApplicationError::not_found(format!("user with id {user_id} not found")))?;

        let old_email = user.email().to_string();
        user.change_email(new_email)?;

        self.user_repo.save(&user).await?;
        tracing::debug!(user_id = %user.id(), "user email saved");

        if let Some(notifications) = &self.notifications {
            notifications
                .notify_user_email_changed(
                    user.id().as_str(),
                    &format!("Email changed from {old_email} to {new_email}"),
                )
                .await?;
        }

        Ok(user)
    }

    pub async fn get_all_users(&self) -> ApplicationResult<Vec<User>> {
        let users = self.user_repo.find_all().await?;

        if let Some(logger) = &self.logger {
            logger.log(&format!("Retrieved {} users from repository", users.len()));
        }

        Ok(users)
    }
}
