use shared_data::content::CONTACT;
use yew::prelude::*;

use crate::layout::SectionHeading;

#[function_component(Contact)]
pub fn contact() -> Html {
	let address = CONTACT.address.iter()
		.map(|line| html! { <>{ *line }<br /></> })
		.collect::<Html>();

	let hours = CONTACT.hours.iter()
		.map(|&(days, time)| html! {
			<tr><td>{ days }</td><td>{ time }</td></tr>
		})
		.collect::<Html>();

	html! {
		<section>
			<style>
			{
				"
				#contact-grid {
					display: grid;
					grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
					gap: 32px;
				}
				.contact-card {
					background-color: var(--night);
					border: 4px solid var(--ghost);
					border-radius: 32px;
					padding: 40px;
					font-weight: 700;
					line-height: 1.8;
				}
				.contact-card h3 {
					color: var(--orange);
					margin-bottom: 24px;
				}
				.contact-card td:first-child {
					padding-right: 24px;
					color: var(--faded);
				}
				.contact-card a {
					display: block;
				}
				"
			}
			</style>
			<div class="container">
				<SectionHeading subtitle="Where's The Vibe?" title="Find Us" />
				<div id="contact-grid">
					<div class="contact-card">
						<h3>{ "Address" }</h3>
						<p>{ address }</p>
						<a href={ CONTACT.maps } target="_blank" rel="noopener">{ "Get directions \u{2192}" }</a>
					</div>
					<div class="contact-card">
						<h3>{ "Hours" }</h3>
						<table><tbody>{ hours }</tbody></table>
					</div>
					<div class="contact-card">
						<h3>{ "Say Hi" }</h3>
						<a href={ format!("tel:{}", CONTACT.phone.replace(' ', "")) }>{ CONTACT.phone }</a>
						<a href={ format!("mailto:{}", CONTACT.email) }>{ CONTACT.email }</a>
						<a href={ CONTACT.instagram } target="_blank" rel="noopener">{ "Instagram" }</a>
						<a href={ CONTACT.facebook } target="_blank" rel="noopener">{ "Facebook" }</a>
					</div>
				</div>
			</div>
		</section>
	}
}
