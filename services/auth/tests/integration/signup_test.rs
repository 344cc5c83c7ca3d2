use ink_auth::error::AuthServiceError;
use ink_auth::usecase::password::verify_password;
use ink_auth::usecase::signup::{SignUpInput, SignUpUseCase};

use crate::helpers::{ALLOWED_EMAIL, MockUserRepo, TEST_PASSWORD, test_user};

fn usecase(users: MockUserRepo) -> SignUpUseCase<MockUserRepo> {
    SignUpUseCase {
        users,
        allowed_email: ALLOWED_EMAIL.to_owned(),
    }
}

#[tokio::test]
async fn should_create_user_with_hashed_password() {
    let repo = MockUserRepo::empty();
    let handle = repo.users_handle();

    let user = usecase(repo)
        .execute(SignUpInput {
            email: ALLOWED_EMAIL.to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(user.email, ALLOWED_EMAIL);
    assert_ne!(user.password_hash, TEST_PASSWORD);
    assert!(verify_password(TEST_PASSWORD, &user.password_hash));

    let stored = handle.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, user.id);
}

#[tokio::test]
async fn should_normalize_email_before_storing() {
    let user = usecase(MockUserRepo::empty())
        .execute(SignUpInput {
            email: "  Reader@Example.com ".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await
        .unwrap();

    assert_eq!(user.email, ALLOWED_EMAIL);
}

#[tokio::test]
async fn should_reject_email_outside_allow_list() {
    let repo = MockUserRepo::empty();
    let handle = repo.users_handle();

    let result = usecase(repo)
        .execute(SignUpInput {
            email: "intruder@example.com".to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::EmailNotAllowed)),
        "expected EmailNotAllowed, got {result:?}"
    );
    assert!(handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_short_password() {
    let result = usecase(MockUserRepo::empty())
        .execute(SignUpInput {
            email: ALLOWED_EMAIL.to_owned(),
            password: "short".to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidPassword)),
        "expected InvalidPassword, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_existing_user() {
    let result = usecase(MockUserRepo::new(vec![test_user()]))
        .execute(SignUpInput {
            email: ALLOWED_EMAIL.to_owned(),
            password: TEST_PASSWORD.to_owned(),
        })
        .await;

    assert!(
        matches!(result, Err(AuthServiceError::UserAlreadyExists)),
        "expected UserAlreadyExists, got {result:?}"
    );
}
