use shared_data::{Page, content::ROOMS};
use yew::prelude::*;

use crate::layout::{Button, NavProps, SectionHeading};

#[function_component(Rooms)]
pub fn rooms(props: &NavProps) -> Html {
	let rooms = ROOMS.iter().enumerate().map(|(idx, room)| {
		let navigate = props.navigate.clone();
		// alternate which side the picture's on
		let flipped = idx % 2 == 1;

		html! {
			<div class={ classes!("room", flipped.then_some("flipped")) }>
				<img src={ room.image } alt={ room.name } />
				<div class="room-text">
					<p class="eyebrow">{ format!("{} \u{b7} up to {} guests", room.category.label(), room.capacity) }</p>
					<h2>{ room.name }</h2>
					<p class="room-blurb">{ room.blurb }</p>
					<Button onclick={ move |_| navigate.emit(Page::Reservations) }>{ "Book This Room" }</Button>
				</div>
			</div>
		}
	}).collect::<Html>();

	html! {
		<section>
			<style>
			{
				"
				.room {
					display: grid;
					grid-template-columns: 1fr 1fr;
					gap: 64px;
					align-items: center;
					margin-bottom: 96px;
				}
				.room.flipped > img {
					order: 2;
				}
				.room img {
					width: 100%;
					aspect-ratio: 4 / 3;
					object-fit: cover;
					border-radius: 48px;
					border: 4px solid var(--ghost);
				}
				.room h2 {
					font-size: clamp(40px, 6vw, 80px);
					font-style: italic;
					color: var(--orange);
				}
				.room-blurb {
					font-size: 18px;
					font-weight: 700;
					color: var(--faded);
					margin: 24px 0 40px 0;
				}
				@media (max-width: 900px) {
					.room {
						grid-template-columns: 1fr;
					}
					.room.flipped > img {
						order: 0;
					}
				}
				"
			}
			</style>
			<div class="container">
				<SectionHeading subtitle="Three Rooms, One Orange" title="The Rooms" />
				{ rooms }
			</div>
		</section>
	}
}
