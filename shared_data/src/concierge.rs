use crate::content::FAQ;

pub const SYSTEM_INSTRUCTION: &str = "You are the late-night concierge at Orange Rooms, a \
	neon-soaked cocktail bar and club. Answer in two or three short, upbeat sentences. Stick to \
	things a guest would ask about: the rooms, events, tables and bookings, opening hours, dress \
	code and how to find us. If you don't know something, tell them to message the team instead \
	of guessing.";

/// What we show if the model comes back with nothing at all
pub const EMPTY_ANSWER_FALLBACK: &str = "The concierge is mixing something up... try asking that \
	one again.";

/// What we show if we couldn't reach anybody
pub const OFFLINE_FALLBACK: &str = "Our concierge has stepped off the floor for a minute. The \
	lights are still on though - drop us a message on the Find Us page and we'll sort you out.";

/// What the canned responder says when nothing in the FAQ matches
pub const CANNED_DEFAULT: &str = "Good question! Doors open at 5pm Thursday through Sunday, and \
	the team on the Find Us page can help with anything else.";

#[derive(serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ConciergeRequest {
	pub prompt: String
}

#[derive(serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ConciergeResponse {
	pub answer: String
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConciergeError {
	#[error("couldn't reach the concierge: {0}")]
	Network(String),
	#[error("concierge returned {status}: {body}")]
	Status { status: u16, body: String },
	#[error("couldn't decode the concierge's answer: {0}")]
	Decode(String)
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ConciergeState {
	pub query: String,
	pub answer: Option<String>,
	pub loading: bool
}

impl ConciergeState {
	/// Starts a new question. Returns `None`, leaving everything as it was, if there's nothing
	/// to ask - in which case nobody should be hitting the network.
	pub fn begin(&mut self, input: &str) -> Option<ConciergeRequest> {
		let prompt = input.trim();
		if prompt.is_empty() {
			return None;
		}

		self.query = prompt.to_string();
		self.answer = None;
		self.loading = true;

		Some(ConciergeRequest { prompt: self.query.clone() })
	}

	/// Whatever happened, we always end up with something to show and the spinner gone
	pub fn complete(&mut self, result: Result<String, ConciergeError>) {
		let answer = match result {
			Ok(text) if text.trim().is_empty() => EMPTY_ANSWER_FALLBACK.to_string(),
			Ok(text) => text,
			Err(_) => OFFLINE_FALLBACK.to_string()
		};

		self.answer = Some(answer);
		self.loading = false;
	}
}

fn words(text: &str) -> Vec<String> {
	text.split(|c: char| !c.is_alphanumeric())
		.filter(|w| !w.is_empty())
		.map(str::to_lowercase)
		.collect()
}

// Each word of the keyword has to start a word of the prompt, in order, so "book" catches
// "booking" but "late" doesn't catch "chocolate"
fn mentions(prompt: &[String], keyword: &str) -> bool {
	let keyword = words(keyword);
	!keyword.is_empty() && prompt.windows(keyword.len())
		.any(|run| run.iter().zip(&keyword).all(|(word, k)| word.starts_with(k.as_str())))
}

/// The answer we give when there's no model to ask. Matches the question against the keywords on
/// each FAQ entry and hands back that entry's answer.
#[must_use]
pub fn canned_answer(prompt: &str) -> &'static str {
	let prompt = words(prompt);

	FAQ.iter()
		.find(|item| item.keywords.iter().any(|k| mentions(&prompt, k)))
		.map_or(CANNED_DEFAULT, |item| item.answer)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_questions_do_nothing() {
		let mut state = ConciergeState {
			query: "what time do you open".into(),
			answer: Some("5pm".into()),
			loading: false
		};
		let before = state.clone();

		assert_eq!(state.begin(""), None);
		assert_eq!(state.begin("   \n\t "), None);
		assert_eq!(state, before);
	}

	#[test]
	fn begin_clears_the_old_answer() {
		let mut state = ConciergeState {
			answer: Some("old news".into()),
			..Default::default()
		};

		let req = state.begin("  is there a dress code?  ");
		assert_eq!(req, Some(ConciergeRequest { prompt: "is there a dress code?".into() }));
		assert_eq!(state.answer, None);
		assert!(state.loading);
	}

	#[test]
	fn failures_get_the_offline_line() {
		let mut state = ConciergeState::default();
		state.begin("can I bring my dog");

		state.complete(Err(ConciergeError::Network("connection reset".into())));
		assert_eq!(state.answer.as_deref(), Some(OFFLINE_FALLBACK));
		assert!(!state.loading);

		state.begin("hello?");
		state.complete(Err(ConciergeError::Status { status: 502, body: "bad gateway".into() }));
		assert_eq!(state.answer.as_deref(), Some(OFFLINE_FALLBACK));
		assert!(!state.loading);
	}

	#[test]
	fn empty_answers_ask_them_to_try_again() {
		let mut state = ConciergeState::default();
		state.begin("what's on saturday");
		state.complete(Ok("  \n".into()));

		assert_eq!(state.answer.as_deref(), Some(EMPTY_ANSWER_FALLBACK));
		assert!(!state.loading);
	}

	#[test]
	fn real_answers_come_through() {
		let mut state = ConciergeState::default();
		state.begin("what's on saturday");
		state.complete(Ok("Neon Jungle, all night.".into()));

		assert_eq!(state.answer.as_deref(), Some("Neon Jungle, all night."));
		assert_eq!(state.query, "what's on saturday");
	}

	#[test]
	fn canned_answers_match_keywords() {
		let dress = FAQ.iter().find(|f| f.keywords.contains(&"dress")).unwrap();
		assert_eq!(canned_answer("Is there a DRESS code?"), dress.answer);
		assert_eq!(canned_answer("do you sell sandwiches at 4am"), CANNED_DEFAULT);
	}

	#[test]
	fn keywords_only_match_whole_words() {
		assert_eq!(canned_answer("can I get a chocolate martini"), CANNED_DEFAULT);
		assert_eq!(canned_answer("are the booths comfortable"), CANNED_DEFAULT);
		assert_eq!(canned_answer("we came in 2018 and loved it"), CANNED_DEFAULT);
	}

	#[test]
	fn keywords_match_word_starts_and_phrases() {
		let booking = FAQ.iter().find(|f| f.keywords.contains(&"book")).unwrap();
		assert_eq!(canned_answer("Booking for six?"), booking.answer);
		assert_eq!(canned_answer("need a reservation"), booking.answer);

		let age = FAQ.iter().find(|f| f.keywords.contains(&"how old")).unwrap();
		assert_eq!(canned_answer("How old do I need to be?"), age.answer);
		assert_eq!(canned_answer("is it 18+"), age.answer);
	}
}
