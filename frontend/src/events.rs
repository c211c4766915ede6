use chrono::NaiveDate;
use shared_data::content::{TICKETING_WIDGET, event_date_string, upcoming_events};
use yew::prelude::*;

use crate::{layout::SectionHeading, widget::WidgetFrame};

// js months are 0-indexed, because of course they are
fn today() -> Option<NaiveDate> {
	let now = js_sys::Date::new_0();
	NaiveDate::from_ymd_opt(i32::try_from(now.get_full_year()).ok()?, now.get_month() + 1, now.get_date())
}

#[function_component(Events)]
pub fn events() -> Html {
	// if the date's somehow garbage, just show everything
	let events = upcoming_events(today().unwrap_or(NaiveDate::MIN));

	let listing = if events.is_empty() {
		html! { <p class="eyebrow">{ "Nothing announced just yet. Watch this space." }</p> }
	} else {
		events.into_iter().map(|event| html! {
			<div class="event">
				<img src={ event.image } alt={ event.title } />
				<div>
					<p class="event-date">{ event_date_string(event) }</p>
					<h3>{ event.title }</h3>
					<p class="event-lineup">{ event.lineup }</p>
					<p class="eyebrow">{ format!("Doors {}", event.doors) }</p>
				</div>
			</div>
		}).collect::<Html>()
	};

	html! {
		<section>
			<style>
			{
				"
				.event {
					display: grid;
					grid-template-columns: 200px 1fr;
					gap: 32px;
					align-items: center;
					padding: 24px;
					margin-bottom: 24px;
					border-radius: 24px;
					background-color: var(--night);
					border: 4px solid var(--ghost);
				}
				.event img {
					width: 100%;
					aspect-ratio: 1;
					object-fit: cover;
					border-radius: 16px;
				}
				.event h3 {
					font-size: 32px;
					margin: 8px 0;
				}
				.event-date {
					color: var(--orange);
					font-weight: 900;
					text-transform: uppercase;
					letter-spacing: 0.2em;
				}
				.event-lineup {
					color: var(--faded);
					font-weight: 700;
				}
				#tickets {
					margin-top: 96px;
				}
				"
			}
			</style>
			<div class="container">
				<SectionHeading subtitle="What's On" title="Events" />
				{ listing }
				<div id="tickets">
					<SectionHeading subtitle="Skip The Queue" title="Tickets" />
					<WidgetFrame spec={ &TICKETING_WIDGET } />
				</div>
			</div>
		</section>
	}
}
