//! Catalogue and tag management through the application services.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use bookshelf_core::modules::books::application::service::{
    BookCreateAppModel, BookService, BookTagsUpdateAppModel,
};
use bookshelf_core::modules::books::infrastructure::InMemoryBookRepository;
use bookshelf_core::modules::reviews::infrastructure::InMemoryBookReviewRepository;
use bookshelf_core::modules::tags::application::service::{
    TagCreateAppModel, TagService, TagUpdateAppModel,
};
use bookshelf_core::modules::tags::infrastructure::InMemoryTagRepository;
use bookshelf_core::AppError;

struct Fixture {
    books: BookService,
    tags: TagService,
}

fn fixture() -> Fixture {
    let review_repo = Arc::new(InMemoryBookReviewRepository::new());
    let book_repo = Arc::new(InMemoryBookRepository::new(review_repo));
    let tag_repo = Arc::new(InMemoryTagRepository::new());

    Fixture {
        books: BookService::new(book_repo, tag_repo.clone()),
        tags: TagService::new(tag_repo),
    }
}

fn book_model(isbn13: &str, year: i32) -> BookCreateAppModel {
    BookCreateAppModel {
        isbn13: isbn13.to_string(),
        title: "実用Rust".to_string(),
        publisher: "Publisher".to_string(),
        authors: vec!["Author".to_string()],
        published_at: NaiveDate::from_ymd_opt(year, 4, 1).unwrap(),
    }
}

#[tokio::test]
async fn malformed_isbn_is_rejected_before_any_lookup() {
    let fx = fixture();

    let err = fx.books.create(book_model("9784296001861", 2023)).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Input validation error. Name:ISBN13, Details:invalid check digits. actual:1, expected:6"
    );

    assert!(fx.books.list_by_isbn13("12345").await.is_err());
}

#[tokio::test]
async fn same_edition_twice_is_a_duplicate_but_reprints_are_not() {
    let fx = fixture();

    fx.books.create(book_model("9784296001866", 2021)).await.unwrap();

    let err = fx
        .books
        .create(book_model("9784296001866", 2021))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::DomainValidation { .. }));

    // a later printing year counts as a distinct edition
    fx.books.create(book_model("9784296001866", 2023)).await.unwrap();

    let editions = fx.books.list_by_isbn13("9784296001866").await.unwrap();
    assert_eq!(editions.len(), 2);
}

#[tokio::test]
async fn unknown_isbn_lookup_is_not_found() {
    let fx = fixture();
    let err = fx.books.list_by_isbn13("9784814400690").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn tag_names_are_unique_but_renaming_to_itself_is_allowed() {
    let fx = fixture();

    let rust = fx
        .tags
        .create(TagCreateAppModel {
            name: "rust".to_string(),
        })
        .await
        .unwrap();

    let err = fx
        .tags
        .create(TagCreateAppModel {
            name: "rust".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Duplicate { .. }));

    let unchanged = fx
        .tags
        .update(
            &rust.tag_id,
            TagUpdateAppModel {
                name: "rust".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(unchanged.name, "rust");

    let renamed = fx
        .tags
        .update(
            &rust.tag_id,
            TagUpdateAppModel {
                name: "systems".to_string(),
            },
        )
        .await
        .unwrap();
    assert_eq!(renamed.name, "systems");
}

#[tokio::test]
async fn book_tags_are_replaced_as_a_full_set() {
    let fx = fixture();

    let book = fx.books.create(book_model("9784814400690", 2023)).await.unwrap();
    let rust = fx
        .tags
        .create(TagCreateAppModel {
            name: "rust".to_string(),
        })
        .await
        .unwrap();
    let web = fx
        .tags
        .create(TagCreateAppModel {
            name: "web".to_string(),
        })
        .await
        .unwrap();

    fx.books
        .update_tags(BookTagsUpdateAppModel {
            book_id: book.book_id,
            tag_ids: vec![rust.tag_id, web.tag_id],
        })
        .await
        .unwrap();
    let tagged = fx.books.find_by_book_id(&book.book_id).await.unwrap();
    assert_eq!(tagged.tags.len(), 2);

    fx.books
        .update_tags(BookTagsUpdateAppModel {
            book_id: book.book_id,
            tag_ids: vec![web.tag_id],
        })
        .await
        .unwrap();
    let retagged = fx.books.find_by_book_id(&book.book_id).await.unwrap();
    assert_eq!(retagged.tags.len(), 1);
    assert_eq!(retagged.tags[0].name, "web");

    fx.books
        .update_tags(BookTagsUpdateAppModel {
            book_id: book.book_id,
            tag_ids: vec![],
        })
        .await
        .unwrap();
    let cleared = fx.books.find_by_book_id(&book.book_id).await.unwrap();
    assert!(cleared.tags.is_empty());
}

#[tokio::test]
async fn tags_can_be_created_concurrently() {
    let fx = fixture();

    let created = futures::future::try_join_all(["rust", "web", "cli"].iter().map(|name| {
        fx.tags.create(TagCreateAppModel {
            name: name.to_string(),
        })
    }))
    .await
    .unwrap();

    assert_eq!(created.len(), 3);
    assert_eq!(fx.tags.list().await.unwrap().len(), 3);
}

#[tokio::test]
async fn tag_update_with_an_unknown_tag_is_not_found() {
    let fx = fixture();
    let book = fx.books.create(book_model("9784814400690", 2023)).await.unwrap();

    let err = fx
        .books
        .update_tags(BookTagsUpdateAppModel {
            book_id: book.book_id,
            tag_ids: vec![Uuid::new_v4()],
        })
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}
