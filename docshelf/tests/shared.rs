use docshelf::prelude::*;

#[tokio::test]
async fn shared_store_upserts_and_searches() {
    let store = docshelf::in_memory().into_shared();

    let saved = store
        .save(Document::builder().title("Report A").build())
        .await;
    store
        .save(Document { title: Some("Report A, revised".into()), ..saved.clone() })
        .await;

    assert_eq!(store.len().await, 1);
    assert_eq!(
        store
            .find_by_id(saved.id())
            .await
            .and_then(|doc| doc.title),
        Some("Report A, revised".to_string())
    );

    let request = SearchRequest::builder().title_prefix("Report").build();
    assert_eq!(store.search(&request).await.len(), 1);
    assert!(store.search(None).await.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_saves_are_not_lost() {
    let store: SharedDocumentStore<InMemoryStore> = docshelf::in_memory().into();

    let handles = (0..32)
        .map(|n| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .save(Document::builder().title(format!("Note {n}")).build())
                    .await
            })
        })
        .collect::<Vec<_>>();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.len().await, 32);
    assert_eq!(
        store
            .search(&SearchRequest::builder().title_prefix("Note").build())
            .await
            .len(),
        32
    );
}
