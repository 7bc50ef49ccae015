use crate::views::DelayedTask;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

fn flag_task(delay: Duration) -> (DelayedTask, Arc<AtomicBool>) {
    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);
    let task = DelayedTask::schedule(delay, async move {
        flag.store(true, Ordering::SeqCst);
    });
    (task, fired)
}

#[tokio::test(start_paused = true)]
async fn given_scheduled_task_then_runs_only_after_delay() {
    let (task, fired) = flag_task(Duration::from_millis(100));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(!fired.load(Ordering::SeqCst));

    tokio::time::sleep(Duration::from_millis(60)).await;
    assert!(fired.load(Ordering::SeqCst));
    assert!(task.is_finished());
}

#[tokio::test(start_paused = true)]
async fn given_dropped_task_then_work_never_runs() {
    let (task, fired) = flag_task(Duration::from_millis(100));

    drop(task);
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(!fired.load(Ordering::SeqCst));
}

#[tokio::test(start_paused = true)]
async fn given_cancelled_task_then_work_never_runs() {
    let (task, fired) = flag_task(Duration::from_millis(100));

    task.cancel();
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(!fired.load(Ordering::SeqCst));
}
