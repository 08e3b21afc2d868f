use GenericQueueMini::core::buildcore::TracedQueue;
use GenericQueueMini::core::generics::{mid, pairs, Reward};
use GenericQueueMini::core::log::{append_logs, LogError};
use std::collections::HashMap;

fn main() -> Result<(), LogError> {
    let log_path = std::env::args().nth(1).unwrap_or_else(|| "output.ndjson".to_string());

    // Drain past empty, then refill
    let mut q = TracedQueue::<i32>::new();
    q.enqueue(4);
    q.enqueue(2);
    for _ in 0..4 {
        println!("dequeue -> {:?}", q.dequeue());
    }
    q.enqueue(5);
    q.enqueue(3);
    println!("peek -> {:?}", q.peek());

    let mut h = TracedQueue::<i32>::new();
    h.enqueue(4);
    h.enqueue(4);
    println!("homogeneous [4, 4] -> {}", h.is_homogeneous());
    h.enqueue(2);
    println!("homogeneous [4, 4, 2] -> {}", h.is_homogeneous());

    let prices = HashMap::from([("minimum", 199), ("maximum", 299)]);
    println!("pairs -> {:?}", pairs(prices));
    println!("mid -> {:?}", mid(&[3, 5, 1, 2, 4]));
    println!("{}", Reward::TreasureChest("💰").message());
    println!("{}", Reward::<&str>::Medal.message());

    // Append the logs for both queues as NDJSON
    append_logs(q.logs(), &log_path)?;
    append_logs(h.logs(), &log_path)?;
    Ok(())
}
