//! Minimal in-process broker routing with a shared topic tree
//!
//! Subscriber tasks register channels under wildcard patterns, a publisher
//! routes messages by matching concrete topics against the tree.
//!
//! ```bash
//! RUST_LOG=trace cargo run --example broker_routing
//! ```

use std::sync::Arc;
use std::time::Duration;

use mqtt_topic_tree::prelude::*;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Subscriber handle stored in the tree; equality is by client id
#[derive(Clone, Debug)]
struct Route {
	client_id: &'static str,
	sender: mpsc::Sender<(String, String)>,
}

impl PartialEq for Route {
	fn eq(&self, other: &Self) -> bool {
		self.client_id == other.client_id
	}
}

/// Setup tracing from RUST_LOG, silent when unset
fn setup_tracing() {
	if std::env::var("RUST_LOG").is_err() {
		return;
	}
	let filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| "info".into());
	tracing_subscriber::registry()
		.with(filter)
		.with(
			tracing_subscriber::fmt::layer()
				.with_target(true)
				.with_thread_ids(false)
				.compact(),
		)
		.init();
}

fn subscribe(
	routes: &SharedTopicTree<Route>,
	client_id: &'static str,
	pattern: &str,
) -> Result<mpsc::Receiver<(String, String)>, TopicParseError> {
	let pattern = parse(pattern, true)?;
	let (sender, receiver) = mpsc::channel(16);
	routes.add(&pattern, Route { client_id, sender });
	info!(client_id, %pattern, "Subscribed");
	Ok(receiver)
}

async fn publish(
	routes: &SharedTopicTree<Route>,
	topic: &str,
	payload: &str,
) -> Result<usize, TopicParseError> {
	let topic = parse(topic, false)?;
	// Clone routes out so no lock is held across await points
	let targets = routes.match_topic(&topic);
	for route in &targets {
		if route
			.sender
			.send((topic.to_string(), payload.to_string()))
			.await
			.is_err()
		{
			warn!(client_id = route.client_id, "Subscriber gone, dropping route");
			routes.clear(route);
		}
	}
	Ok(targets.len())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	setup_tracing();

	let routes = Arc::new(SharedTopicTree::<Route>::new());

	let receivers = [
		("dashboard", "home/+/temperature"),
		("archiver", "home/#"),
		("kitchen-panel", "home/kitchen/+"),
	]
	.into_iter()
	.map(|(client_id, pattern)| {
		subscribe(&routes, client_id, pattern).map(|rx| (client_id, rx))
	})
	.collect::<Result<Vec<_>, _>>()?;

	let mut tasks = Vec::new();
	for (client_id, mut receiver) in receivers {
		tasks.push(tokio::spawn(async move {
			while let Some((topic, payload)) = receiver.recv().await {
				println!("[{client_id}] {topic} -> {payload}");
			}
		}));
	}

	for (topic, payload) in [
		("home/kitchen/temperature", "21.5"),
		("home//livingroom/temperature/", "20.1"),
		("home/garage/door", "open"),
		("office/printer", "idle"),
	] {
		let delivered = publish(&routes, topic, payload).await?;
		println!("published {topic} to {delivered} subscriber(s)");
	}

	// Which subscriptions could ever receive kitchen traffic?
	let interested: Vec<_> = routes
		.search("home/kitchen/#")
		.into_iter()
		.map(|route| route.client_id)
		.collect();
	println!("kitchen interest: {interested:?}");
	println!("{routes}");

	tokio::time::sleep(Duration::from_millis(50)).await;
	// Dropping the routes closes every channel and ends the tasks
	routes.reset();
	for task in tasks {
		task.await?;
	}
	Ok(())
}
