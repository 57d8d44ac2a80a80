use anyhow::Result;
use newsroom::application::{
    ports::{logger::Logger, notification::NotificationService, time::Clock},
    services::{ArticlePublisher, PublishArticleCommand, RegisterUserCommand, UserService},
};
use newsroom::config::AppConfig;
use newsroom::infrastructure::{
    logging::TracingLogger,
    notification::TracingNotificationService,
    repositories::{InMemoryArticleRepository, InMemoryUserRepository},
    time::SystemClock,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_filter());

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let articles = Arc::new(InMemoryArticleRepository::new());
    let users = Arc::new(InMemoryUserRepository::new());

    let mut publisher = ArticlePublisher::new(articles.clone(), Arc::clone(&clock));
    let mut user_service = UserService::new(users, Arc::clone(&clock));

    if config.notifications_enabled() {
        let notifier: Arc<dyn NotificationService> = Arc::new(TracingNotificationService);
        publisher = publisher.with_notifications(Arc::clone(&notifier));
        user_service = user_service.with_notifications(notifier);
    }

    if config.service_log_enabled() {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        publisher = publisher.with_logger(Arc::clone(&logger));
        user_service = user_service.with_logger(logger);
    }

    let article = publisher
        .publish(PublishArticleCommand::new(
            config.demo_author(),
            "My First Article",
            "This is the content of my first article.",
        ))
        .await?;
    tracing::info!(article_id = %article.id(), stored = articles.values().len(), "demo article published");

    let user = user_service
        .register_user(RegisterUserCommand {
            name: "Alice Johnson".into(),
            email: "alice.johnson@example.com".into(),
        })
        .await?;
    let user = user_service
        .update_user_email(user.id().as_str(), "alice.new@example.com")
        .await?;
    tracing::info!(user_id = %user.id(), email = %user.email(), "demo user updated");

    let all = user_service.get_all_users().await?;
    tracing::info!(count = all.len(), "demo finished");

    Ok(())
}

fn init_tracing(filter: &str) {
    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
