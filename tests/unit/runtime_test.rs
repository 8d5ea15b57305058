//! Tests for tokio runtime adapters

use std::time::Duration;

use prometheus_arrival_scheduler::core::{Spawn, Timer};
use prometheus_arrival_scheduler::runtime::{
    health, ArrivalEvent, ArrivalHandle, TokioClock, TokioSpawner, TokioTimer,
};
use prometheus_arrival_scheduler::util::Clock;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_spawner_spawn() {
    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tx.send(123).unwrap();
    });

    let result = rx.await.expect("oneshot result");
    assert_eq!(result, 123);
}

#[tokio::test(start_paused = true)]
async fn test_tokio_timer_fires_event() {
    let (handle, mut events) = ArrivalHandle::channel();
    let mut timer = TokioTimer::new(TokioSpawner::current(), &handle);
    let clock = TokioClock::new();

    let armed = timer.schedule(Duration::from_millis(1500));
    assert_eq!(timer.live(), 1);

    match events.recv().await {
        Some(ArrivalEvent::TimerFired(fired)) => assert_eq!(fired, armed),
        other => panic!("unexpected event {other:?}"),
    }
    assert!(clock.now_ms() >= 1500);
    assert_eq!(timer.live(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_tokio_timer_cancel_suppresses_event() {
    let (handle, mut events) = ArrivalHandle::channel();
    let mut timer = TokioTimer::new(TokioSpawner::current(), &handle);

    let cancelled = timer.schedule(Duration::from_millis(100));
    let kept = timer.schedule(Duration::from_millis(200));
    assert!(timer.cancel(cancelled));
    assert!(!timer.cancel(cancelled));

    match events.recv().await {
        Some(ArrivalEvent::TimerFired(fired)) => assert_eq!(fired, kept),
        other => panic!("unexpected event {other:?}"),
    }
    assert!(events.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_tokio_timer_does_not_hold_queue_open() {
    let (handle, mut events) = ArrivalHandle::channel();
    let mut timer = TokioTimer::new(TokioSpawner::current(), &handle);
    timer.schedule(Duration::from_millis(100));
    drop(handle);

    assert!(events.recv().await.is_none());
    tokio::time::sleep(Duration::from_millis(200)).await;
    assert_eq!(timer.live(), 0);
}

#[test]
fn test_health() {
    assert!(health().ok);
}
