use yew::prelude::*;
use shared_data::{Page, ViewRouter, Viewport};
use concierge::Concierge;
use contact::Contact;
use events::Events;
use gallery::Gallery;
use home::Home;
use layout::{Footer, Header, ScrollTopButton, SharedStyle};
use reservations::Reservations;
use rooms::Rooms;

mod concierge;
mod contact;
mod events;
mod gallery;
mod home;
mod layout;
mod reservations;
mod rooms;
mod widget;

struct WindowViewport;

impl Viewport for WindowViewport {
	fn scroll_to_top(&self) {
		if let Some(window) = web_sys::window() {
			window.scroll_to_with_x_and_y(0.0, 0.0);
		}
	}
}

fn switch(page: Page, navigate: &Callback<Page>) -> Html {
	match page {
		Page::Home => html! { <Home navigate={ navigate.clone() } /> },
		Page::Rooms => html! { <Rooms navigate={ navigate.clone() } /> },
		Page::Events => html! { <Events /> },
		Page::Reservations => html! { <Reservations /> },
		Page::Gallery => html! { <Gallery /> },
		Page::Contact => html! { <Contact /> },
		Page::Concierge => html! { <Concierge /> }
	}
}

#[function_component(Frontend)]
pub fn frontend() -> Html {
	let router = use_state(ViewRouter::new);

	let navigate = {
		let router = router.clone();
		Callback::from(move |page: Page| {
			let mut next = *router;
			next.navigate(page, &WindowViewport);
			router.set(next);
		})
	};

	let current = router.current();

	html! {
		<>
			<SharedStyle />
			<Header { current } navigate={ navigate.clone() } />
			// keyed so that going to a different page always tears the old one down completely
			<main key={ current.id() }>
				{ switch(current, &navigate) }
			</main>
			<Footer navigate={ navigate.clone() } />
			<ScrollTopButton />
		</>
	}
}

fn main() {
	yew::Renderer::<Frontend>::new().render();
}
