// There's no URL routing on this site - which page is showing just lives in memory, and every
// transition goes through `ViewRouter::navigate` so that the scroll position gets reset.

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Page {
	#[default]
	Home,
	Rooms,
	Events,
	Reservations,
	Gallery,
	Contact,
	Concierge
}

impl Page {
	/// Every page, in the order they show up in the header
	pub const ALL: [Page; 7] = [
		Self::Home,
		Self::Rooms,
		Self::Events,
		Self::Reservations,
		Self::Gallery,
		Self::Contact,
		Self::Concierge
	];

	#[must_use]
	pub fn id(self) -> &'static str {
		match self {
			Self::Home => "home",
			Self::Rooms => "rooms",
			Self::Events => "events",
			Self::Reservations => "reservations",
			Self::Gallery => "gallery",
			Self::Contact => "contact",
			Self::Concierge => "concierge"
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Home => "Home",
			Self::Rooms => "Rooms",
			Self::Events => "Events",
			Self::Reservations => "Bookings",
			Self::Gallery => "Gallery",
			Self::Contact => "Find Us",
			Self::Concierge => "Ask Us"
		}
	}

	/// Anything we don't recognize just goes back home
	#[must_use]
	pub fn from_id(id: &str) -> Self {
		match id.trim().to_ascii_lowercase().as_str() {
			"home" => Self::Home,
			"rooms" => Self::Rooms,
			"events" => Self::Events,
			"reservations" => Self::Reservations,
			"gallery" => Self::Gallery,
			"contact" => Self::Contact,
			"concierge" => Self::Concierge,
			_ => Self::Home
		}
	}
}

/// Whatever is actually doing the scrolling. In the browser that's the window.
pub trait Viewport {
	fn scroll_to_top(&self);
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ViewRouter {
	current: Page
}

impl ViewRouter {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn current(&self) -> Page {
		self.current
	}

	// We scroll even if they're navigating to the page they're already on, since the footer
	// links should still bring you back up to the top
	pub fn navigate(&mut self, page: Page, viewport: &impl Viewport) {
		self.current = page;
		viewport.scroll_to_top();
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::Cell;

	#[derive(Default)]
	struct FakeViewport {
		scrolls: Cell<usize>
	}

	impl Viewport for FakeViewport {
		fn scroll_to_top(&self) {
			self.scrolls.set(self.scrolls.get() + 1);
		}
	}

	#[test]
	fn starts_at_home() {
		assert_eq!(ViewRouter::new().current(), Page::Home);
	}

	#[test]
	fn every_navigation_scrolls_to_top() {
		let viewport = FakeViewport::default();
		let mut router = ViewRouter::new();

		router.navigate(Page::Events, &viewport);
		router.navigate(Page::Gallery, &viewport);
		// same page again still counts
		router.navigate(Page::Gallery, &viewport);

		assert_eq!(router.current(), Page::Gallery);
		assert_eq!(viewport.scrolls.get(), 3);
	}

	#[test]
	fn ids_resolve_back_to_their_page() {
		for page in Page::ALL {
			assert_eq!(Page::from_id(page.id()), page);
		}
	}

	#[test]
	fn unknown_ids_fall_back_to_home() {
		let viewport = FakeViewport::default();
		let mut router = ViewRouter::new();
		router.navigate(Page::Contact, &viewport);

		router.navigate(Page::from_id("vip-afterparty"), &viewport);
		assert_eq!(router.current(), Page::Home);
		assert_eq!(viewport.scrolls.get(), 2);

		assert_eq!(Page::from_id(""), Page::Home);
		assert_eq!(Page::from_id("  EVENTS "), Page::Events);
	}
}
