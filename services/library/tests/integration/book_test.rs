use uuid::Uuid;

use ink_library::domain::form::BookFormInput;
use ink_library::error::LibraryServiceError;
use ink_library::usecase::book::{
    CreateBookUseCase, DeleteBookUseCase, GetBookUseCase, ListBooksUseCase, UpdateBookUseCase,
};

use crate::helpers::{FailingBookTagRepo, InMemoryLibrary, date, form, stored_book};

// ── ListBooks ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_list_by_read_date_then_created_at_descending() {
    let lib = InMemoryLibrary::default();
    let owner = Uuid::now_v7();
    lib.insert_book(stored_book(owner, "older read", date(2024, 1, 1), 0));
    lib.insert_book(stored_book(owner, "same day, created earlier", date(2024, 3, 1), 60));
    lib.insert_book(stored_book(owner, "same day, created later", date(2024, 3, 1), 0));

    let views = ListBooksUseCase { books: lib }.execute(None).await.unwrap();
    let titles: Vec<&str> = views.iter().map(|v| v.book.title.as_str()).collect();
    assert_eq!(
        titles,
        ["same day, created later", "same day, created earlier", "older read"]
    );
}

#[tokio::test]
async fn should_mark_no_book_as_owned_for_anonymous_viewer() {
    let lib = InMemoryLibrary::default();
    lib.insert_book(stored_book(Uuid::now_v7(), "a", date(2024, 1, 1), 0));
    lib.insert_book(stored_book(Uuid::now_v7(), "b", date(2024, 1, 2), 0));

    let views = ListBooksUseCase { books: lib }.execute(None).await.unwrap();
    assert_eq!(views.len(), 2);
    assert!(views.iter().all(|v| !v.is_owner));
}

#[tokio::test]
async fn should_mark_only_own_books_as_owned() {
    let lib = InMemoryLibrary::default();
    let me = Uuid::now_v7();
    lib.insert_book(stored_book(me, "mine", date(2024, 1, 2), 0));
    lib.insert_book(stored_book(Uuid::now_v7(), "theirs", date(2024, 1, 1), 0));

    let views = ListBooksUseCase { books: lib }.execute(Some(me)).await.unwrap();
    assert!(views[0].is_owner);
    assert!(!views[1].is_owner);
}

// ── GetBook ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_return_book_not_found() {
    let result = GetBookUseCase {
        books: InMemoryLibrary::default(),
    }
    .execute(Uuid::now_v7(), None)
    .await;
    assert!(matches!(result, Err(LibraryServiceError::BookNotFound)));
}

// ── CreateBook ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_create_book_visible_in_listing_with_tags() {
    let lib = InMemoryLibrary::with_tags(&["novel", "classic"]);
    let user = Uuid::now_v7();
    let tag_ids = vec![lib.tag_id("novel"), lib.tag_id("classic"), lib.tag_id("novel")];

    let out = CreateBookUseCase {
        books: lib.clone(),
        book_tags: lib.clone(),
    }
    .execute(user, form("Middlemarch", tag_ids))
    .await
    .unwrap();
    assert!(out.tags_linked);

    let views = ListBooksUseCase { books: lib }.execute(Some(user)).await.unwrap();
    assert_eq!(views.len(), 1);
    let view = &views[0];
    assert_eq!(view.book.id, out.id);
    assert_eq!(view.book.user_id, user);
    assert!(view.is_owner);
    let names: Vec<&str> = view.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["classic", "novel"]);
}

#[tokio::test]
async fn should_keep_book_when_tag_linking_fails() {
    let lib = InMemoryLibrary::default();

    let out = CreateBookUseCase {
        books: lib.clone(),
        book_tags: FailingBookTagRepo,
    }
    .execute(Uuid::now_v7(), form("Kept", vec![Uuid::now_v7()]))
    .await
    .unwrap();

    assert!(!out.tags_linked);
    let views = ListBooksUseCase { books: lib }.execute(None).await.unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].book.id, out.id);
    assert!(views[0].tags.is_empty());
}

#[tokio::test]
async fn should_not_touch_links_when_no_tags_selected() {
    let out = CreateBookUseCase {
        books: InMemoryLibrary::default(),
        book_tags: FailingBookTagRepo,
    }
    .execute(Uuid::now_v7(), form("Untagged", vec![]))
    .await
    .unwrap();
    assert!(out.tags_linked);
}

#[tokio::test]
async fn should_validate_before_storing() {
    let lib = InMemoryLibrary::default();
    let result = CreateBookUseCase {
        books: lib.clone(),
        book_tags: lib.clone(),
    }
    .execute(
        Uuid::now_v7(),
        BookFormInput {
            rating: 0,
            ..form("Unrated", vec![])
        },
    )
    .await;

    assert!(matches!(result, Err(LibraryServiceError::InvalidRating)));
    assert!(lib.books.lock().unwrap().is_empty());
}

// ── UpdateBook ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_replace_fields_and_full_tag_set() {
    let lib = InMemoryLibrary::with_tags(&["essay", "history", "science"]);
    let owner = Uuid::now_v7();
    let book = stored_book(owner, "Before", date(2023, 1, 1), 60);
    let id = book.id;
    let created_at = book.created_at;
    lib.insert_book(book);
    lib.links
        .lock()
        .unwrap()
        .extend([(id, lib.tag_id("essay")), (id, lib.tag_id("history"))]);

    UpdateBookUseCase {
        books: lib.clone(),
        book_tags: lib.clone(),
    }
    .execute(
        owner,
        id,
        form("After", vec![lib.tag_id("history"), lib.tag_id("science")]),
    )
    .await
    .unwrap();

    let view = GetBookUseCase { books: lib }
        .execute(id, Some(owner))
        .await
        .unwrap();
    assert_eq!(view.book.title, "After");
    assert_eq!(view.book.read_date, date(2024, 6, 1));
    assert_eq!(view.book.created_at, created_at);
    assert!(view.book.updated_at > created_at);
    let names: Vec<&str> = view.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["history", "science"]);
}

#[tokio::test]
async fn should_forbid_updating_someone_elses_book() {
    let lib = InMemoryLibrary::default();
    let book = stored_book(Uuid::now_v7(), "Theirs", date(2024, 1, 1), 0);
    let id = book.id;
    lib.insert_book(book);

    let result = UpdateBookUseCase {
        books: lib.clone(),
        book_tags: lib.clone(),
    }
    .execute(Uuid::now_v7(), id, form("Mine now", vec![]))
    .await;

    assert!(matches!(result, Err(LibraryServiceError::Forbidden)));
    assert_eq!(lib.books.lock().unwrap()[0].title, "Theirs");
}

#[tokio::test]
async fn should_return_not_found_when_updating_missing_book() {
    let lib = InMemoryLibrary::default();
    let result = UpdateBookUseCase {
        books: lib.clone(),
        book_tags: lib,
    }
    .execute(Uuid::now_v7(), Uuid::now_v7(), form("Ghost", vec![]))
    .await;
    assert!(matches!(result, Err(LibraryServiceError::BookNotFound)));
}

#[tokio::test]
async fn should_keep_field_update_when_tag_replacement_fails() {
    let lib = InMemoryLibrary::default();
    let owner = Uuid::now_v7();
    let book = stored_book(owner, "Before", date(2024, 1, 1), 0);
    let id = book.id;
    lib.insert_book(book);

    let result = UpdateBookUseCase {
        books: lib.clone(),
        book_tags: FailingBookTagRepo,
    }
    .execute(owner, id, form("After", vec![]))
    .await;

    assert!(matches!(result, Err(LibraryServiceError::Internal(_))));
    assert_eq!(lib.books.lock().unwrap()[0].title, "After");
}

// ── DeleteBook ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_delete_book_and_its_links() {
    let lib = InMemoryLibrary::with_tags(&["novel"]);
    let owner = Uuid::now_v7();
    let book = stored_book(owner, "Gone", date(2024, 1, 1), 0);
    let id = book.id;
    lib.insert_book(book);
    lib.links.lock().unwrap().push((id, lib.tag_id("novel")));

    DeleteBookUseCase { books: lib.clone() }
        .execute(owner, id)
        .await
        .unwrap();

    let views = ListBooksUseCase { books: lib.clone() }
        .execute(Some(owner))
        .await
        .unwrap();
    assert!(views.is_empty());
    assert_eq!(lib.link_count(id), 0);
}

#[tokio::test]
async fn should_forbid_deleting_someone_elses_book() {
    let lib = InMemoryLibrary::default();
    let book = stored_book(Uuid::now_v7(), "Theirs", date(2024, 1, 1), 0);
    let id = book.id;
    lib.insert_book(book);

    let result = DeleteBookUseCase { books: lib.clone() }
        .execute(Uuid::now_v7(), id)
        .await;

    assert!(matches!(result, Err(LibraryServiceError::Forbidden)));
    assert_eq!(lib.books.lock().unwrap().len(), 1);
}
