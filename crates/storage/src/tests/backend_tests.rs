use super::create_test_input;
use crate::{ContactStore, InMemoryStore, StorageBackend};

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn memory_backend_dispatches_crud() {
    let backend = StorageBackend::in_memory();
    assert_eq!(backend.kind(), "memory");

    let created = backend.create_contact(create_test_input("Ada", "Lovelace")).await.unwrap();
    assert_eq!(backend.get_contact(created.id).await.unwrap(), Some(created.clone()));

    let updated =
        backend.update_contact(created.id, create_test_input("Ada", "King")).await.unwrap();
    assert_eq!(updated.last_name, "King");

    backend.delete_contact(created.id).await.unwrap();
    assert!(backend.list_contacts().await.unwrap().is_empty());
}

#[tokio::test]
#[expect(clippy::unwrap_used, reason = "test code")]
async fn seeded_store_converts_into_backend() {
    let backend: StorageBackend = InMemoryStore::with_contacts([
        create_test_input("Ada", "Lovelace"),
        create_test_input("Alan", "Turing"),
        create_test_input("Grace", "Hopper"),
    ])
    .into();
    let all = backend.list_contacts().await.unwrap();
    assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(backend.count_contacts().await.unwrap(), 3);
}
