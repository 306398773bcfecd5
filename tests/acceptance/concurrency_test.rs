//! Many concurrent writers and readers against one gateway.

use super::common::spawn_gateway;
use futures_util::future::join_all;
use stamp_common::UnixTimestamp;

const WORKERS: i64 = 50;
const BASE: i64 = 1_700_000_000;

fn was_posted(value: UnixTimestamp) -> bool {
    (BASE..BASE + WORKERS).contains(&value.as_secs())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_post_get_pairs() {
    let gw = spawn_gateway().await;

    let workers = (0..WORKERS).map(|i| {
        let client = gw.client.clone();
        tokio::spawn(async move {
            client.post(UnixTimestamp(BASE + i)).await?;
            client.get().await
        })
    });

    for result in join_all(workers).await {
        let seen = result.expect("worker panicked").expect("request failed");
        assert!(was_posted(seen), "read {seen}, which no worker posted");
    }

    let last = gw.client.get().await.unwrap();
    assert!(was_posted(last), "final value {last} was never posted");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_readers_never_see_partial_values() {
    let gw = spawn_gateway().await;
    // Values chosen so any mix of bytes from two writes would not parse
    // back to either of them.
    let values = [i64::MAX, i64::MIN, -1, 0x0F0F_0F0F_0F0F_0F0F];

    let writers = values.iter().copied().cycle().take(40).map(|v| {
        let client = gw.client.clone();
        tokio::spawn(async move { client.post(UnixTimestamp(v)).await })
    });
    let readers = (0..40).map(|_| {
        let client = gw.client.clone();
        tokio::spawn(async move { client.get().await })
    });

    let (written, read) = tokio::join!(join_all(writers), join_all(readers));
    for result in written {
        result.expect("writer panicked").expect("post failed");
    }
    for result in read {
        let seen = result.expect("reader panicked").expect("get failed").as_secs();
        assert!(
            seen == 0 || values.contains(&seen),
            "read {seen}, which no writer posted"
        );
    }
}
