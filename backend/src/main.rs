use std::{
	net::{IpAddr, Ipv4Addr, SocketAddr},
	path::Path,
	sync::Arc,
	time::Duration
};

use axum::{extract::DefaultBodyLimit, routing::post, Router};
use concierge::{ask_concierge, AppState, CannedService, CompletionService};
use gemini::GeminiService;
use tower_http::{
	services::{ServeDir, ServeFile},
	trace::TraceLayer
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod concierge;
mod gemini;

#[macro_export]
macro_rules! print_and_ret{
	($err: expr, $ret_str: expr) => {{
		tracing::error!($ret_str);
		return Err(($err, format!($ret_str)));
	}};
	($ret_str: expr) => {
		$crate::print_and_ret!(axum::http::StatusCode::INTERNAL_SERVER_ERROR, $ret_str)
	}
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// so that RUST_LOG can live in the .env too
	_ = dotenv::dotenv();

	tracing_subscriber::registry()
		.with(
			EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| "backend=info,tower_http=info".into())
		)
		.with(tracing_subscriber::fmt::layer())
		.init();

	macro_rules! dotenv_num{
		($key:expr, $default:expr, $type:ident) => {
			dotenv::var($key)
				.ok()
				.and_then(|v| v.parse::<$type>().ok())
				.unwrap_or($default)
		}
	}

	let port = dotenv_num!("BACKEND_PORT", 8080, u16);
	let host = dotenv_num!("BACKEND_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr);
	let timeout = dotenv_num!("CONCIERGE_TIMEOUT_SECS", 20, u64);
	let dist = dotenv::var("DIST_DIR").unwrap_or_else(|_| "frontend/dist".into());

	let service: Arc<dyn CompletionService> = match dotenv::var("GEMINI_API_KEY").ok().filter(|k| !k.trim().is_empty()) {
		Some(key) => {
			let model = dotenv::var("GEMINI_MODEL").unwrap_or_else(|_| gemini::DEFAULT_MODEL.into());
			tracing::info!(%model, timeout, "Concierge is asking Gemini");
			Arc::new(GeminiService::new(key, &model, Duration::from_secs(timeout))?)
		},
		None => {
			tracing::warn!("GEMINI_API_KEY isn't set, so the concierge will only give canned answers");
			Arc::new(CannedService)
		}
	};

	let index = Path::new(&dist).join("index.html");
	if !index.is_file() {
		tracing::warn!(%dist, "There's no index.html in the dist dir; did you run `trunk build`?");
	}

	// There's only one real page, so anything that isn't a file in dist gets the index
	let app = Router::new()
		.route("/api/concierge", post(ask_concierge))
		.layer(DefaultBodyLimit::max(16 * 1024))
		.with_state(AppState { concierge: service })
		.fallback_service(ServeDir::new(&dist).fallback(ServeFile::new(index)))
		.layer(TraceLayer::new_for_http());

	let addr = SocketAddr::new(host, port);
	tracing::info!(%addr, "Serving axum...");

	let listener = tokio::net::TcpListener::bind(addr).await?;
	axum::serve(listener, app).await?;

	Ok(())
}
