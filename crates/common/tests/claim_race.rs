//! The central guarantee: at most one claim wins, no matter how the
//! attempts interleave.

mod support;

use std::sync::Arc;

use common::drops::{DropStore, RedeemError};
use tokio::sync::Barrier;

const RACERS: usize = 32;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_correct_claims_yield_exactly_one_winner() {
    let (store, _temp) = support::setup_store().await;
    let store = Arc::new(store);

    let ticket = store
        .issue(b"only one of you gets this", "prize.txt".to_string())
        .await
        .unwrap();

    let barrier = Arc::new(Barrier::new(RACERS));
    let mut tasks = Vec::with_capacity(RACERS);
    for _ in 0..RACERS {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        let id = ticket.id;
        let password = ticket.password.clone();
        tasks.push(tokio::spawn(async move {
            barrier.wait().await;
            store.redeem(&id, password.reveal()).await
        }));
    }

    let mut winners = 0;
    let mut not_found = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(claimed) => {
                assert_eq!(claimed.bytes, b"only one of you gets this");
                winners += 1;
            }
            Err(RedeemError::NotFound) => not_found += 1,
            Err(other) => panic!("unexpected redeem outcome: {other}"),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(not_found, RACERS - 1);
    assert!(!store.exists(&ticket.id));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn guessers_racing_the_legitimate_claim_never_win() {
    let (store, _temp) = support::setup_store().await;
    let store = Arc::new(store);

    let ticket = store
        .issue(b"contested", "contested.txt".to_string())
        .await
        .unwrap();

    // Half the racers guess wrong, half present the real password.
    let barrier = Arc::new(Barrier::new(RACERS));
    let mut tasks = Vec::with_capacity(RACERS);
    for i in 0..RACERS {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        let id = ticket.id;
        let password = ticket.password.clone();
        tasks.push(tokio::spawn(async move {
            barrier.wait().await;
            if i % 2 == 0 {
                store.redeem(&id, "BADPWD").await
            } else {
                store.redeem(&id, password.reveal()).await
            }
        }));
    }

    let mut winners = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => winners += 1,
            Err(RedeemError::NotFound) | Err(RedeemError::WrongPassword) => {}
            Err(other) => panic!("unexpected redeem outcome: {other}"),
        }
    }

    assert_eq!(winners, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn racing_claims_on_distinct_drops_do_not_interfere() {
    let (store, _temp) = support::setup_store().await;
    let store: Arc<DropStore> = Arc::new(store);

    let mut tickets = Vec::new();
    for i in 0..8 {
        tickets.push(
            store
                .issue(format!("payload {i}").as_bytes(), format!("f{i}.txt"))
                .await
                .unwrap(),
        );
    }

    let barrier = Arc::new(Barrier::new(tickets.len()));
    let mut tasks = Vec::new();
    for ticket in tickets {
        let store = Arc::clone(&store);
        let barrier = Arc::clone(&barrier);
        tasks.push(tokio::spawn(async move {
            barrier.wait().await;
            store.redeem(&ticket.id, ticket.password.reveal()).await
        }));
    }

    for task in tasks {
        assert!(task.await.unwrap().is_ok());
    }
}
