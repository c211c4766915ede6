use gloo_console::error;
use gloo_net::http::Request;
use shared_data::{
	concierge::{ConciergeError, ConciergeRequest, ConciergeResponse, ConciergeState},
	content::FAQ,
	md_to_html
};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::layout::{Button, SectionHeading};

async fn ask(req: &ConciergeRequest) -> Result<String, ConciergeError> {
	let res = Request::post("/api/concierge")
		.json(req)
		.map_err(|e| ConciergeError::Network(format!("{e:?}")))?
		.send()
		.await
		.map_err(|e| ConciergeError::Network(format!("{e:?}")))?;

	if !res.ok() {
		let body = res.text().await.unwrap_or_else(|e| format!("{e:?}"));
		return Err(ConciergeError::Status { status: res.status(), body });
	}

	res.json::<ConciergeResponse>()
		.await
		.map(|r| r.answer)
		.map_err(|e| ConciergeError::Decode(format!("{e:?}")))
}

#[function_component(Concierge)]
pub fn concierge() -> Html {
	let state = use_state(ConciergeState::default);
	let input = use_state(String::new);

	let question_input = {
		let input = input.clone();
		Callback::from(move |e: InputEvent|
			if let Some(el) = e.target()
				.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
					input.set(el.value());
				}
		)
	};

	let submit = {
		let state = state.clone();
		let input = input.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();

			let mut next = (*state).clone();
			// blank questions don't get to bother anybody
			let Some(req) = next.begin(&input) else {
				return;
			};
			state.set(next.clone());

			let state = state.clone();
			wasm_bindgen_futures::spawn_local(async move {
				let res = ask(&req).await;
				if let Err(e) = &res {
					error!(format!("Concierge request failed: {e}"));
				}

				next.complete(res);
				state.set(next);
			});
		})
	};

	let suggestions = FAQ.iter().map(|item| {
		let input = input.clone();
		html! {
			<button class="chip" type="button" onclick={ move |_| input.set(item.question.to_string()) }>
				{ item.question }
			</button>
		}
	}).collect::<Html>();

	let answer = match (state.loading, &state.answer) {
		(true, _) => html! { <div class="spinner"></div> },
		(false, Some(answer)) => html! {
			<div id="concierge-answer">
				<p class="eyebrow">{ format!("You asked: {}", state.query) }</p>
				{ Html::from_html_unchecked(md_to_html(answer).into()) }
			</div>
		},
		(false, None) => html! {}
	};

	html! {
		<section>
			<style>
			{
				"
				#concierge {
					max-width: 800px;
					margin: 0 auto;
					text-align: center;
				}
				#concierge form {
					display: flex;
					background-color: white;
					border-radius: 999px;
					padding: 8px;
					margin-bottom: 24px;
				}
				#concierge input {
					flex: 1;
					border: none;
					outline: none;
					background: transparent;
					padding: 0 16px;
					font-size: 16px;
					font-weight: 700;
					color: black;
				}
				#concierge .chips {
					flex-wrap: wrap;
				}
				#concierge-answer {
					text-align: left;
					background-color: var(--night);
					border: 4px solid var(--ghost);
					border-radius: 32px;
					padding: 40px;
					font-size: 18px;
					font-weight: 700;
				}
				#concierge .spinner {
					margin: 48px auto;
				}
				"
			}
			</style>
			<div class="container" id="concierge">
				<SectionHeading subtitle="Your Night, Sorted" title="Ask The Concierge" />
				<form onsubmit={ submit }>
					<input
						placeholder="Dress code? Parking? Who's on Saturday?"
						value={ (*input).clone() }
						oninput={ question_input }
					/>
					<Button submit={ true } disabled={ state.loading }>{ "Ask" }</Button>
				</form>
				<div class="chips">{ suggestions }</div>
				{ answer }
			</div>
		</section>
	}
}
