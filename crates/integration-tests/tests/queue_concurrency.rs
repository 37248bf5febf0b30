//! Bounded Queue Concurrency Tests
//!
//! Many producers racing on one queue, on the multi-threaded runtime.

use checkout_core::application::{Cashier, CashierTiming, RemainingCustomers, SimulationStats};
use checkout_core::domain::{BoundedQueue, CustomerId, DequeueOutcome, Lane};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;

const PRODUCERS: u64 = 8;
const PER_PRODUCER: u64 = 100;

fn customer(producer: u64, seq: u64) -> CustomerId {
    CustomerId::new(producer * 1_000 + seq)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_admission_respects_capacity() {
    let queue = Arc::new(BoundedQueue::new(Lane::One, 50));

    let mut producers = JoinSet::new();
    for p in 0..PRODUCERS {
        let queue = Arc::clone(&queue);
        producers.spawn(async move {
            let mut admitted = 0u64;
            for seq in 0..PER_PRODUCER {
                if queue.try_enqueue(customer(p, seq)).is_ok() {
                    admitted += 1;
                }
                assert!(queue.len() <= queue.capacity());
                tokio::task::yield_now().await;
            }
            admitted
        });
    }

    let mut total_admitted = 0;
    while let Some(result) = producers.join_next().await {
        total_admitted += result.unwrap();
    }

    // Nobody consumes, so exactly `capacity` admissions succeed
    assert_eq!(total_admitted, 50);
    assert!(queue.is_full());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_consumer_sees_per_producer_fifo_without_loss() {
    let queue = Arc::new(BoundedQueue::new(Lane::Two, 16));

    let mut producers = JoinSet::new();
    for p in 0..PRODUCERS {
        let queue = Arc::clone(&queue);
        producers.spawn(async move {
            let mut admitted = Vec::new();
            for seq in 0..PER_PRODUCER {
                if queue.try_enqueue(customer(p, seq)).is_ok() {
                    admitted.push(customer(p, seq));
                }
                tokio::task::yield_now().await;
            }
            admitted
        });
    }

    let consumer_queue = Arc::clone(&queue);
    let consumer = tokio::spawn(async move {
        let mut seen = Vec::new();
        while let DequeueOutcome::Served(id) = consumer_queue.dequeue(Duration::from_millis(200)).await {
            seen.push(id);
        }
        seen
    });

    let mut admitted = Vec::new();
    while let Some(result) = producers.join_next().await {
        admitted.extend(result.unwrap());
    }
    let seen = consumer.await.unwrap();

    // Every admitted customer comes out exactly once
    let mut sorted_seen = seen.clone();
    sorted_seen.sort();
    admitted.sort();
    assert_eq!(sorted_seen, admitted);

    // Items from one producer keep their relative order
    for p in 0..PRODUCERS {
        let from_p: Vec<u64> = seen
            .iter()
            .map(|id| id.get())
            .filter(|id| id / 1_000 == p)
            .collect();
        assert!(from_p.windows(2).all(|w| w[0] < w[1]));
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_two_cashiers_share_one_counter() {
    let lanes = [
        Arc::new(BoundedQueue::new(Lane::One, 20)),
        Arc::new(BoundedQueue::new(Lane::Two, 20)),
    ];
    for n in 1..=20 {
        let lane = if n % 2 == 0 { Lane::Two } else { Lane::One };
        lanes[lane.index()].try_enqueue(CustomerId::new(n)).unwrap();
    }
    let remaining = Arc::new(RemainingCustomers::new(20));
    let stats = Arc::new(SimulationStats::new());
    let timing = CashierTiming {
        dequeue_timeout: Duration::from_millis(10),
        idle_threshold: Duration::from_millis(500),
        idle_backoff: Duration::from_millis(10),
        service_duration: Duration::from_millis(1),
    };

    let mut cashiers = JoinSet::new();
    for (i, queue) in lanes.iter().enumerate() {
        let cashier = Cashier::new(
            i as u32 + 1,
            Arc::clone(queue),
            Arc::clone(&remaining),
            Arc::clone(&stats),
            timing,
        );
        cashiers.spawn(async move { cashier.run().await });
    }

    let mut served = 0;
    while let Some(result) = cashiers.join_next().await {
        let summary = result.unwrap().unwrap();
        assert_eq!(summary.served, 10);
        served += summary.served;
    }

    assert_eq!(served, 20);
    assert_eq!(remaining.get(), 0);
    assert_eq!(stats.snapshot().served, 20);
}
