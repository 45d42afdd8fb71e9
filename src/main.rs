//! Unified Routing CLI
//!
//! Reads a quote request body (JSON) from the file given as the first
//! argument, or stdin when absent, and prints one routed quote per config.

use std::io::Read;

use tracing::info_span;
use unified_routing::{
	init_tracing, load_config, log_service_info, log_startup_complete, QuoteRequestBody,
	RouterBuilder,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
	dotenvy::dotenv().ok();

	let settings = load_config()?;
	init_tracing(&settings.logging)?;
	log_service_info();

	let raw = match std::env::args().nth(1) {
		Some(path) => std::fs::read_to_string(path)?,
		None => {
			let mut buffer = String::new();
			std::io::stdin().read_to_string(&mut buffer)?;
			buffer
		},
	};
	let body: QuoteRequestBody = serde_json::from_str(&raw)?;

	let span = info_span!("quote", request_id = body.request_id.as_deref().unwrap_or("-"));
	let router = RouterBuilder::from_config(settings.clone())
		.with_span(span)
		.build()?;
	log_startup_complete(&settings);

	let routed = router.quote(&body).await?;
	println!("{}", serde_json::to_string_pretty(&routed)?);

	Ok(())
}
