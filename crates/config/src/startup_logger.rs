//! Startup logging for the unified routing CLI

use std::env;
use tracing::info;

use crate::Settings;

/// Logs service information at startup
pub fn log_service_info() {
	let service_name = "unified-routing";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Unified Routing Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("💻 Platform: {} ({})", env::consts::OS, env::consts::ARCH);

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}

	if let Ok(config_path) = env::var("CONFIG_PATH") {
		info!("📋 Config Path: {}", config_path);
	}

	info!(
		"🕒 Started at: {}",
		chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
	);
}

/// Logs the quoters the router was built with
pub fn log_startup_complete(settings: &Settings) {
	info!("✅ Router ready");
	info!("📡 Quoters: {}", settings.enabled_quoters().join(", "));
	info!("⏱️ Per-quoter timeout: {}ms", settings.timeouts.per_quoter_ms);
	if let Some(api_key) = &settings.quoters.rfq.api_key {
		info!("🔑 RFQ API key from {}", api_key.description());
	}
}
