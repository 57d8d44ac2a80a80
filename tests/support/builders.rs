// tests/support/builders.rs
use newsroom::domain::article::{Article, NewArticle};
use newsroom::domain::user::{NewUser, User};

use super::time::fixed_now;

pub fn user(name: &str, email: &str) -> User {
    User::create(NewUser::new(name, email), fixed_now()).expect("valid user")
}

pub fn article(author_id: &str, title: &str, content: &str) -> Article {
    Article::create(NewArticle::new(author_id, title, content), fixed_now()).expect("valid article")
}
