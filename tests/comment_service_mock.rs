use newsroom::application::ports::comment::CommentService;
use newsroom::doubles::{CommentServiceMock, ExpectationError};
use newsroom::domain::{article::ArticleId, user::UserId};

#[tokio::test]
async fn verifies_expected_add_comment_call() {
    let mock = CommentServiceMock::new();
    let article_id = ArticleId::generate();
    let user_id = UserId::generate();
    let content = "This is a comment on the article.";

    mock.expect_add_comment(&article_id, &user_id, content);
    mock.add_comment(&article_id, &user_id, content).await.unwrap();

    mock.verify().expect("expectations should be met");
    assert!(mock.was_verified());
}

#[tokio::test]
async fn fails_on_unexpected_content() {
    let mock = CommentServiceMock::new();
    let article_id = ArticleId::generate();
    let user_id = UserId::generate();

    mock.expect_add_comment(&article_id, &user_id, "Expected comment content");
    mock.add_comment(&article_id, &user_id, "Different comment content")
        .await
        .unwrap();

    let err = mock.verify().unwrap_err();
    assert!(matches!(err, ExpectationError::CallMismatch { call: 1, .. }));
    assert!(err.to_string().starts_with("call 1 did not match expectation."));
    assert!(mock.was_verified());
}

#[tokio::test]
async fn fails_when_call_count_differs() {
    let mock = CommentServiceMock::new();
    let article_id = ArticleId::generate();
    let user_id = UserId::generate();

    mock.expect_add_comment(&article_id, &user_id, "Test comment")
        .expect_add_comment(&article_id, &user_id, "Test comment");
    mock.add_comment(&article_id, &user_id, "Test comment")
        .await
        .unwrap();

    assert_eq!(
        mock.verify(),
        Err(ExpectationError::CallCount {
            expected: 2,
            actual: 1
        })
    );
}

#[tokio::test]
async fn reports_only_the_first_mismatch() {
    let mock = CommentServiceMock::new();
    let article_id = ArticleId::generate();
    let user_id = UserId::generate();
    let other_user = UserId::generate();

    mock.expect_add_comment(&article_id, &user_id, "one")
        .expect_add_comment(&article_id, &user_id, "two")
        .expect_add_comment(&article_id, &user_id, "three");

    mock.add_comment(&article_id, &user_id, "one").await.unwrap();
    mock.add_comment(&article_id, &other_user, "two").await.unwrap();
    mock.add_comment(&article_id, &user_id, "not three").await.unwrap();

    match mock.verify() {
        Err(ExpectationError::CallMismatch { call, actual, .. }) => {
            assert_eq!(call, 2);
            assert!(actual.contains(other_user.as_str()));
        }
        other => panic!("expected a mismatch on call 2, got {other:?}"),
    }
}

#[tokio::test]
async fn unexpected_extra_call_fails_count_check() {
    let mock = CommentServiceMock::new();
    let article_id = ArticleId::generate();
    let user_id = UserId::generate();

    mock.add_comment(&article_id, &user_id, "surprise").await.unwrap();

    assert!(matches!(
        mock.verify(),
        Err(ExpectationError::CallCount {
            expected: 0,
            actual: 1
        })
    ));
}
