//! Process-local persistence adapters.
//!
//! Both repositories keep their rows behind a [`std::sync::RwLock`] and hand
//! out clones, so a request never observes a half-applied write. A poisoned
//! lock surfaces as the port's `Storage` error rather than a panic.

mod in_memory_article_repository;
mod in_memory_member_repository;

pub use in_memory_article_repository::InMemoryArticleRepository;
pub use in_memory_member_repository::InMemoryMemberRepository;

fn poisoned<T>(_: std::sync::PoisonError<T>) -> String {
    "repository lock poisoned".to_owned()
}
