use fifo_queue::SentinelQueue;

use tracing_subscriber::EnvFilter;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut q = SentinelQueue::new();

    q.push(1);
    q.push(2);
    q.push(4);
    q.push(8);
    tracing::info!(size = q.size(), "pushed sample values");
    println!("{}", q.show());

    println!("{}", q.front_node());
    println!("{}", q.rear_node());
    println!("{}", q.size());
    println!("{}", q.empty() as i32);
    println!("{}", q.pop());
    println!("{}", q.show());
}
