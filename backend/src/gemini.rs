use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::concierge::CompletionService;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(thiserror::Error, Debug)]
pub enum CompletionError {
	#[error("couldn't reach the model: {0}")]
	Network(#[from] reqwest::Error),
	#[error("model returned {status}: {body}")]
	Status { status: u16, body: String },
	#[error("couldn't decode the model's response: {0}")]
	Decode(#[from] serde_json::Error),
	#[error("model didn't give us any candidates")]
	MissingCandidate
}

pub struct GeminiService {
	client: Client,
	api_key: String,
	url: String
}

impl GeminiService {
	pub fn new(api_key: String, model: &str, timeout: Duration) -> Result<Self, CompletionError> {
		let client = Client::builder()
			.timeout(timeout)
			.build()?;

		Ok(Self {
			client,
			api_key,
			url: format!("{BASE_URL}/{model}:generateContent")
		})
	}
}

#[async_trait]
impl CompletionService for GeminiService {
	async fn complete(&self, system: &str, prompt: &str) -> Result<String, CompletionError> {
		let res = self.client.post(&self.url)
			.header("x-goog-api-key", &self.api_key)
			.json(&GeminiRequest::new(system, prompt))
			.send()
			.await?;

		let status = res.status();
		if !status.is_success() {
			// if we can't even read the body, the status is all they're getting
			let body = res.text().await.unwrap_or_default();
			return Err(CompletionError::Status { status: status.as_u16(), body });
		}

		let bytes = res.bytes().await?;
		serde_json::from_slice::<GeminiResponse>(&bytes)?.into_text()
	}
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest<'a> {
	system_instruction: GeminiContent<'a>,
	contents: [GeminiContent<'a>; 1]
}

impl<'a> GeminiRequest<'a> {
	fn new(system: &'a str, prompt: &'a str) -> Self {
		Self {
			system_instruction: GeminiContent { role: None, parts: [GeminiPart { text: system }] },
			contents: [GeminiContent { role: Some("user"), parts: [GeminiPart { text: prompt }] }]
		}
	}
}

#[derive(Serialize, Debug)]
struct GeminiContent<'a> {
	#[serde(skip_serializing_if = "Option::is_none")]
	role: Option<&'static str>,
	parts: [GeminiPart<'a>; 1]
}

#[derive(Serialize, Debug)]
struct GeminiPart<'a> {
	text: &'a str
}

#[derive(Deserialize, Debug)]
struct GeminiResponse {
	#[serde(default)]
	candidates: Vec<GeminiCandidate>
}

#[derive(Deserialize, Debug)]
struct GeminiCandidate {
	#[serde(default)]
	content: Option<GeminiCandidateContent>
}

#[derive(Deserialize, Debug)]
struct GeminiCandidateContent {
	#[serde(default)]
	parts: Vec<GeminiCandidatePart>
}

#[derive(Deserialize, Debug)]
struct GeminiCandidatePart {
	// function calls and the like come back without text, and we don't ask for those anyways
	#[serde(default)]
	text: Option<String>
}

impl GeminiResponse {
	/// Only the first candidate matters. An empty string is fine here; the frontend decides what
	/// to say about that.
	fn into_text(self) -> Result<String, CompletionError> {
		let candidate = self.candidates
			.into_iter()
			.next()
			.ok_or(CompletionError::MissingCandidate)?;

		Ok(candidate.content
			.map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
			.unwrap_or_default())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn parse(value: serde_json::Value) -> Result<String, CompletionError> {
		serde_json::from_value::<GeminiResponse>(value)
			.unwrap()
			.into_text()
	}

	#[test]
	fn request_has_system_and_user_parts() {
		let req = serde_json::to_value(GeminiRequest::new("be nice", "when do you open")).unwrap();

		assert_eq!(req, json!({
			"systemInstruction": { "parts": [{ "text": "be nice" }] },
			"contents": [{ "role": "user", "parts": [{ "text": "when do you open" }] }]
		}));
	}

	#[test]
	fn url_includes_the_model() {
		let service = GeminiService::new("key".into(), "gemini-test", Duration::from_secs(1)).unwrap();
		assert_eq!(
			service.url,
			"https://generativelanguage.googleapis.com/v1beta/models/gemini-test:generateContent"
		);
	}

	#[test]
	fn parts_of_the_first_candidate_are_joined() {
		let text = parse(json!({
			"candidates": [
				{ "content": { "role": "model", "parts": [{ "text": "Doors at 5, " }, { "text": "last call at 3." }] } },
				{ "content": { "role": "model", "parts": [{ "text": "ignored" }] } }
			],
			"usageMetadata": { "totalTokenCount": 12 }
		})).unwrap();

		assert_eq!(text, "Doors at 5, last call at 3.");
	}

	#[test]
	fn parts_without_text_are_skipped() {
		let text = parse(json!({
			"candidates": [{ "content": { "parts": [{ "functionCall": { "name": "x", "args": {} } }, { "text": "ok" }] } }]
		})).unwrap();

		assert_eq!(text, "ok");
	}

	#[test]
	fn no_candidates_is_an_error() {
		assert!(matches!(parse(json!({})), Err(CompletionError::MissingCandidate)));
		assert!(matches!(parse(json!({ "candidates": [] })), Err(CompletionError::MissingCandidate)));
	}

	#[test]
	fn blocked_candidates_come_back_empty() {
		// safety blocks give a candidate with a finishReason but no content
		let text = parse(json!({ "candidates": [{ "finishReason": "SAFETY" }] })).unwrap();
		assert_eq!(text, "");
	}
}
