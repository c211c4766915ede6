use shared_data::content::{CONTACT, RESERVATION_WIDGET};
use yew::prelude::*;

use crate::{layout::SectionHeading, widget::WidgetFrame};

#[function_component(Reservations)]
pub fn reservations() -> Html {
	html! {
		<section>
			<div class="container" style="max-width: 960px">
				<SectionHeading subtitle="Tables, Booths & Private Hire" title="Bookings" />
				<p style="text-align: center; color: var(--faded); font-weight: 700; margin-bottom: 48px">
					{ "Tables are held for 15 minutes past your booking. Parties bigger than 12 should give us a call on " }
					<a href={ format!("tel:{}", CONTACT.phone.replace(' ', "")) }>{ CONTACT.phone }</a>
					{ "." }
				</p>
				<WidgetFrame spec={ &RESERVATION_WIDGET } />
			</div>
		</section>
	}
}
