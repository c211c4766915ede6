use std::{sync::Arc, time::Instant};

use async_trait::async_trait;
use axum::{extract::State, http::StatusCode, Json};
use shared_data::concierge::{canned_answer, ConciergeRequest, ConciergeResponse, SYSTEM_INSTRUCTION};

use crate::{gemini::CompletionError, print_and_ret};

/// Nobody needs more than this to ask what time we open
pub const MAX_PROMPT_CHARS: usize = 600;

/// Something that can turn a guest's question into an answer
#[async_trait]
pub trait CompletionService: Send + Sync {
	async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError>;
}

/// What we fall back to when there's no API key: just looks the question up in the FAQ
pub struct CannedService;

#[async_trait]
impl CompletionService for CannedService {
	async fn complete(&self, _system: &str, prompt: &str) -> Result<String, CompletionError> {
		Ok(canned_answer(prompt).to_string())
	}
}

#[derive(Clone)]
pub struct AppState {
	pub concierge: Arc<dyn CompletionService>
}

pub async fn ask_concierge(
	State(state): State<AppState>,
	Json(req): Json<ConciergeRequest>
) -> Result<Json<ConciergeResponse>, (StatusCode, String)> {
	let prompt = req.prompt.trim();
	if prompt.is_empty() {
		print_and_ret!(StatusCode::BAD_REQUEST, "Got an empty question for the concierge");
	}

	let chars = prompt.chars().count();
	if chars > MAX_PROMPT_CHARS {
		print_and_ret!(
			StatusCode::PAYLOAD_TOO_LARGE,
			"Concierge question was {chars} chars long, but the max is {MAX_PROMPT_CHARS}"
		);
	}

	let start = Instant::now();
	match state.concierge.complete(SYSTEM_INSTRUCTION, prompt).await {
		Ok(answer) => {
			tracing::info!(chars, elapsed_ms = start.elapsed().as_millis() as u64, "Concierge answered");
			Ok(Json(ConciergeResponse { answer }))
		},
		Err(e) => print_and_ret!(StatusCode::BAD_GATEWAY, "Couldn't get an answer for the concierge: {e}")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::sync::Mutex;

	#[derive(Default)]
	struct StubService {
		answer: Option<String>,
		seen: Mutex<Vec<(String, String)>>
	}

	#[async_trait]
	impl CompletionService for StubService {
		async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError> {
			self.seen.lock().unwrap().push((system.to_string(), prompt.to_string()));
			self.answer.clone().ok_or(CompletionError::MissingCandidate)
		}
	}

	fn state_with(stub: Arc<StubService>) -> State<AppState> {
		State(AppState { concierge: stub })
	}

	fn question(prompt: &str) -> Json<ConciergeRequest> {
		Json(ConciergeRequest { prompt: prompt.to_string() })
	}

	#[tokio::test]
	async fn answers_are_passed_through() {
		let stub = Arc::new(StubService {
			answer: Some("Smart casual, no sportswear.".into()),
			..Default::default()
		});

		let Json(resp) = ask_concierge(state_with(stub.clone()), question("  dress code?  "))
			.await
			.unwrap();

		assert_eq!(resp.answer, "Smart casual, no sportswear.");

		let seen = stub.seen.lock().unwrap();
		assert_eq!(seen.len(), 1);
		assert_eq!(seen[0].0, SYSTEM_INSTRUCTION);
		assert_eq!(seen[0].1, "dress code?");
	}

	#[tokio::test]
	async fn blank_questions_never_reach_the_model() {
		let stub = Arc::new(StubService::default());

		let (status, _) = ask_concierge(state_with(stub.clone()), question(" \n "))
			.await
			.unwrap_err();

		assert_eq!(status, StatusCode::BAD_REQUEST);
		assert!(stub.seen.lock().unwrap().is_empty());
	}

	#[tokio::test]
	async fn huge_questions_are_turned_away() {
		let stub = Arc::new(StubService::default());
		let essay = "a".repeat(MAX_PROMPT_CHARS + 1);

		let (status, _) = ask_concierge(state_with(stub.clone()), question(&essay))
			.await
			.unwrap_err();

		assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
		assert!(stub.seen.lock().unwrap().is_empty());
	}

	#[tokio::test]
	async fn model_failures_are_bad_gateways() {
		let stub = Arc::new(StubService::default());

		let (status, msg) = ask_concierge(state_with(stub), question("what's on friday"))
			.await
			.unwrap_err();

		assert_eq!(status, StatusCode::BAD_GATEWAY);
		assert!(msg.contains("candidates"), "{msg}");
	}

	#[tokio::test]
	async fn canned_service_reads_the_faq() {
		let service = CannedService;
		let answer = service.complete(SYSTEM_INSTRUCTION, "What are your opening hours?").await.unwrap();
		assert_eq!(answer, canned_answer("hours"));
		assert_ne!(answer, shared_data::concierge::CANNED_DEFAULT);
	}
}
