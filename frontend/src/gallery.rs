use shared_data::content::{Category, gallery_in};
use yew::prelude::*;

use crate::layout::SectionHeading;

#[function_component(Gallery)]
pub fn gallery() -> Html {
	let filter = use_state(|| Option::<Category>::None);

	let options = std::iter::once(None)
		.chain(Category::ALL.into_iter().map(Some))
		.map(|option| {
			let filter = filter.clone();
			let selected = *filter == option;
			html! {
				<button
					class={ classes!("chip", selected.then_some("active")) }
					onclick={ move |_| filter.set(option) }
				>
					{ option.map_or("All", Category::label) }
				</button>
			}
		})
		.collect::<Html>();

	let images = gallery_in(*filter).map(|img| html! {
		<figure class="gallery-item">
			<img class="rounded-img" src={ img.src } alt={ img.caption } loading="lazy" />
			<figcaption class="eyebrow">{ img.caption }</figcaption>
		</figure>
	}).collect::<Html>();

	html! {
		<section>
			<style>
			{
				"
				.gallery-item {
					margin: 0;
				}
				.gallery-item figcaption {
					margin-top: 16px;
					text-align: center;
				}
				"
			}
			</style>
			<div class="container">
				<SectionHeading subtitle="Caught On Camera" title="Gallery" />
				<div class="chips">{ options }</div>
				<div class="card-grid">{ images }</div>
			</div>
		</section>
	}
}
