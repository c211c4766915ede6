// All the copy on the site. If you want to change what the site says, this is probably the file
// you're looking for.

use chrono::{NaiveDate, Datelike};

use crate::widget::{MountContract, WidgetSpec};

pub const BRAND: &str = "Orange Rooms";
pub const ESTABLISHED: u16 = 2001;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub enum Category {
	#[default]
	Garden,
	Lounge,
	Club
}

impl Category {
	pub const ALL: [Category; 3] = [Self::Garden, Self::Lounge, Self::Club];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Garden => "Garden",
			Self::Lounge => "Lounge",
			Self::Club => "Club"
		}
	}
}

pub struct Product {
	pub name: &'static str,
	pub image: &'static str,
	pub category: Category
}

pub static PRODUCTS: &[Product] = &[
	Product { name: "Neon Jungle Garden", image: "https://images.unsplash.com/photo-1543007630-9710e4a00a20?q=80&w=400", category: Category::Garden },
	Product { name: "Tiki Table Booking", image: "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?q=80&w=400", category: Category::Garden },
	Product { name: "Bottomless Cocktails", image: "https://images.unsplash.com/photo-1470337458703-46ad1756a187?q=80&w=400", category: Category::Garden },
	Product { name: "Velvet Booths", image: "https://images.unsplash.com/photo-1572116469696-31de0f17cc34?q=80&w=400", category: Category::Lounge },
	Product { name: "Champagne Corner", image: "https://images.unsplash.com/photo-1551024709-8f23befc6f87?q=80&w=400", category: Category::Lounge },
	Product { name: "Main Room Table", image: "https://images.unsplash.com/photo-1574096079513-d8259312b785?q=80&w=400", category: Category::Club },
	Product { name: "DJ Booth Side", image: "https://images.unsplash.com/photo-1571266028243-e4733b0f0bb0?q=80&w=400", category: Category::Club },
	Product { name: "Mezzanine VIP", image: "https://images.unsplash.com/photo-1566737236500-c8ac43014a67?q=80&w=400", category: Category::Club },
];

pub fn products_in(category: Category) -> impl Iterator<Item = &'static Product> {
	PRODUCTS.iter().filter(move |p| p.category == category)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ExperienceKind {
	#[default]
	Garden,
	Cocktails,
	Food
}

impl ExperienceKind {
	pub const ALL: [ExperienceKind; 3] = [Self::Garden, Self::Cocktails, Self::Food];

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Self::Garden => "Garden",
			Self::Cocktails => "Cocktails",
			Self::Food => "Food"
		}
	}
}

pub struct Experience {
	pub title: &'static str,
	pub tag: &'static str,
	pub image: &'static str,
	pub servings: &'static str,
	pub items: &'static str,
	pub difficulty: &'static str,
	pub kind: ExperienceKind
}

pub static EXPERIENCES: &[Experience] = &[
	Experience {
		title: "Neon Jungle Garden Party",
		tag: "An Easy Night",
		image: "https://images.unsplash.com/photo-1543007630-9710e4a00a20?q=80&w=1000",
		servings: "Table for 4",
		items: "3 Cocktails",
		difficulty: "Expert",
		kind: ExperienceKind::Garden
	},
	Experience {
		title: "Saturday Bottomless Brunch",
		tag: "The Vibe",
		image: "https://images.unsplash.com/photo-1525268771113-32d9e9bb2d40?q=80&w=1000",
		servings: "Groups of 6",
		items: "Unlimited",
		difficulty: "Legendary",
		kind: ExperienceKind::Food
	},
	Experience {
		title: "Mezcal Masterclass",
		tag: "Get Schooled",
		image: "https://images.unsplash.com/photo-1470337458703-46ad1756a187?q=80&w=1000",
		servings: "Up to 10",
		items: "5 Pours",
		difficulty: "Curious",
		kind: ExperienceKind::Cocktails
	},
	Experience {
		title: "Sunset Spritz Session",
		tag: "Golden Hour",
		image: "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?q=80&w=1000",
		servings: "Pairs",
		items: "2 Spritzes",
		difficulty: "Easy",
		kind: ExperienceKind::Cocktails
	},
];

pub struct FeatureTab {
	pub label: &'static str,
	pub headline: &'static str,
	pub highlight: &'static str,
	pub body: &'static str
}

pub static FEATURE_TABS: &[FeatureTab] = &[
	FeatureTab {
		label: "Table Service",
		headline: "We are all about making",
		highlight: "unbelievably",
		body: "Tasty cocktails brought straight to your table, all night long. Zero queueing at the bar and 0% boredom."
	},
	FeatureTab {
		label: "VIP Lounge",
		headline: "A room that's",
		highlight: "unreasonably",
		body: "Velvet booths, a private bar and your own host. The mezzanine looks down over the whole dance floor."
	},
	FeatureTab {
		label: "Private Hire",
		headline: "Your party, made",
		highlight: "ridiculously",
		body: "Hire the Garden, the Lounge or the whole building. Birthdays, launches, leaving dos - we've seen it all."
	},
	FeatureTab {
		label: "Nightlife",
		headline: "Weekends that get",
		highlight: "seriously",
		body: "Resident DJs Friday and Saturday, live percussion in the Garden and the best sound system on the strip."
	},
];

pub struct FaqItem {
	pub question: &'static str,
	pub answer: &'static str,
	/// lowercase words that'll get the canned concierge to pick this answer
	pub keywords: &'static [&'static str]
}

pub static FAQ: &[FaqItem] = &[
	FaqItem {
		question: "When are you open?",
		answer: "Thursday to Sunday, 5pm until 3am. Bank holiday Mondays too, if we're feeling it.",
		keywords: &["open", "hours", "close", "closing", "late"]
	},
	FaqItem {
		question: "Is there a dress code?",
		answer: "Smart casual, and leave the sportswear at home. Bring your best orange if you've got it.",
		keywords: &["dress", "wear", "shoes", "trainers"]
	},
	FaqItem {
		question: "How do I book a table?",
		answer: "Head to the Bookings page and grab a slot - tables are held for 15 minutes past your time.",
		keywords: &["book", "table", "reserv"]
	},
	FaqItem {
		question: "Where can I find you?",
		answer: "14 Marmalade Lane, right off the high street. The entrance is the big orange door, you can't miss it.",
		keywords: &["where", "address", "find", "parking", "directions"]
	},
	FaqItem {
		question: "Do I need ID?",
		answer: "Yep - it's strictly 18+ and we check photo ID on the door, every time.",
		keywords: &["how old", "18", "age limit", "passport", "licence"]
	},
];

/// Clicking the open item closes it, clicking anything else opens that one instead
#[must_use]
pub fn toggle_accordion(open: Option<usize>, clicked: usize) -> Option<usize> {
	(open != Some(clicked)).then_some(clicked)
}

pub struct Room {
	pub name: &'static str,
	pub capacity: u16,
	pub blurb: &'static str,
	pub image: &'static str,
	pub category: Category
}

pub static ROOMS: &[Room] = &[
	Room {
		name: "The Garden",
		capacity: 180,
		blurb: "A neon jungle under a retractable roof, with tiki tables and a frozen cocktail bar.",
		image: "https://images.unsplash.com/photo-1543007630-9710e4a00a20?q=80&w=1000",
		category: Category::Garden
	},
	Room {
		name: "The Lounge",
		capacity: 90,
		blurb: "Low light, velvet booths and a champagne corner for when you want to actually hear each other.",
		image: "https://images.unsplash.com/photo-1572116469696-31de0f17cc34?q=80&w=1000",
		category: Category::Lounge
	},
	Room {
		name: "The Main Room",
		capacity: 450,
		blurb: "The club. Resident DJs, a full rig and a mezzanine VIP looking down on all of it.",
		image: "https://images.unsplash.com/photo-1574096079513-d8259312b785?q=80&w=1000",
		category: Category::Club
	},
];

pub struct Event {
	pub title: &'static str,
	/// (year, month, day)
	pub date: (i32, u32, u32),
	pub doors: &'static str,
	pub lineup: &'static str,
	pub image: &'static str
}

impl Event {
	#[must_use]
	pub fn date(&self) -> Option<NaiveDate> {
		let (y, m, d) = self.date;
		NaiveDate::from_ymd_opt(y, m, d)
	}
}

pub static EVENTS: &[Event] = &[
	Event {
		title: "Neon Jungle",
		date: (2026, 10, 31),
		doors: "9pm",
		lineup: "Resident DJs all night in the Main Room, percussion in the Garden",
		image: "https://images.unsplash.com/photo-1571266028243-e4733b0f0bb0?q=80&w=1000"
	},
	Event {
		title: "Bottomless Brunch: Disco Edition",
		date: (2026, 11, 7),
		doors: "12pm",
		lineup: "Disco classics and unlimited spritzes in the Garden",
		image: "https://images.unsplash.com/photo-1525268771113-32d9e9bb2d40?q=80&w=1000"
	},
	Event {
		title: "Orange Rooms 25th Birthday",
		date: (2026, 11, 21),
		doors: "8pm",
		lineup: "Special guests across all three rooms",
		image: "https://images.unsplash.com/photo-1566737236500-c8ac43014a67?q=80&w=1000"
	},
	Event {
		title: "Mezcal Masterclass",
		date: (2026, 12, 3),
		doors: "7pm",
		lineup: "Five pours and a lot of stories in the Lounge",
		image: "https://images.unsplash.com/photo-1470337458703-46ad1756a187?q=80&w=1000"
	},
];

/// Events on or after `today`, soonest first. Anything with a date that doesn't exist gets
/// dropped.
#[must_use]
pub fn upcoming_events(today: NaiveDate) -> Vec<&'static Event> {
	let mut events = EVENTS.iter()
		.filter(|e| e.date().is_some_and(|d| d >= today))
		.collect::<Vec<_>>();
	events.sort_by_key(|e| e.date());
	events
}

#[must_use]
pub fn event_date_string(event: &Event) -> String {
	event.date().map_or_else(
		|| "Date TBC".into(),
		|date| format!("{} {}", date.format("%a %-d %b"), date.year())
	)
}

pub struct GalleryImage {
	pub src: &'static str,
	pub caption: &'static str,
	pub category: Category
}

pub static GALLERY: &[GalleryImage] = &[
	GalleryImage { src: "https://images.unsplash.com/photo-1543007630-9710e4a00a20?q=80&w=800", caption: "Garden, golden hour", category: Category::Garden },
	GalleryImage { src: "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?q=80&w=800", caption: "Tiki tables", category: Category::Garden },
	GalleryImage { src: "https://images.unsplash.com/photo-1470337458703-46ad1756a187?q=80&w=800", caption: "Behind the bar", category: Category::Lounge },
	GalleryImage { src: "https://images.unsplash.com/photo-1572116469696-31de0f17cc34?q=80&w=800", caption: "Velvet booths", category: Category::Lounge },
	GalleryImage { src: "https://images.unsplash.com/photo-1574096079513-d8259312b785?q=80&w=800", caption: "Main Room, 1am", category: Category::Club },
	GalleryImage { src: "https://images.unsplash.com/photo-1571266028243-e4733b0f0bb0?q=80&w=800", caption: "Hands up", category: Category::Club },
	GalleryImage { src: "https://images.unsplash.com/photo-1566737236500-c8ac43014a67?q=80&w=800", caption: "From the mezzanine", category: Category::Club },
];

/// `None` means show everything
pub fn gallery_in(filter: Option<Category>) -> impl Iterator<Item = &'static GalleryImage> {
	GALLERY.iter().filter(move |g| filter.is_none_or(|c| g.category == c))
}

pub struct ContactInfo {
	pub address: &'static [&'static str],
	pub phone: &'static str,
	pub email: &'static str,
	pub hours: &'static [(&'static str, &'static str)],
	pub instagram: &'static str,
	pub facebook: &'static str,
	pub maps: &'static str
}

pub static CONTACT: ContactInfo = ContactInfo {
	address: &["Orange Rooms", "14 Marmalade Lane", "Manchester", "M1 4OR"],
	phone: "+44 161 555 0142",
	email: "hello@orangerooms.co.uk",
	hours: &[
		("Mon - Wed", "Closed"),
		("Thursday", "5pm - 1am"),
		("Fri - Sat", "5pm - 3am"),
		("Sunday", "12pm - 11pm"),
	],
	instagram: "https://instagram.com/orangerooms",
	facebook: "https://facebook.com/orangerooms",
	maps: "https://maps.google.com/?q=14+Marmalade+Lane+Manchester"
};

/// (column title, [(link text, page id)]). Ids that aren't a real page just go home.
pub static FOOTER_COLUMNS: &[(&str, &[(&str, &str)])] = &[
	("Drink Vibes", &[("Locator", "contact"), ("Rooms", "rooms"), ("Gallery", "gallery")]),
	("Book Vibes", &[("Tables", "reservations"), ("Tickets", "events")]),
	("About Us", &[("Mission", "home"), ("Careers", "careers"), ("Ask Us", "concierge")]),
];

pub static TICKETING_WIDGET: WidgetSpec = WidgetSpec {
	name: "ticket shop",
	script_url: "https://cdn.ticketshop.io/embed/v2/shop.js",
	script_id: "ticketshop-sdk",
	container_id: "ticketshop-container",
	mount: MountContract::Factory {
		global: "TicketShop",
		options: &[("venue", "orange-rooms"), ("theme", "dark"), ("accent", "#f97316")]
	}
};

pub static RESERVATION_WIDGET: WidgetSpec = WidgetSpec {
	name: "table bookings",
	script_url: "https://book.tablehost.io/widget.js",
	script_id: "tablehost-sdk",
	container_id: "tablehost-container",
	mount: MountContract::SelfMounting {
		attributes: &[("data-widget-id", "20417"), ("data-theme", "dark")]
	}
};

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accordion_only_has_one_open() {
		assert_eq!(toggle_accordion(None, 2), Some(2));
		assert_eq!(toggle_accordion(Some(2), 2), None);
		assert_eq!(toggle_accordion(Some(2), 0), Some(0));
	}

	#[test]
	fn every_category_has_products() {
		for cat in Category::ALL {
			assert!(products_in(cat).count() > 0, "{} is empty", cat.label());
			assert!(products_in(cat).all(|p| p.category == cat));
		}
	}

	#[test]
	fn upcoming_skips_past_events_and_sorts() {
		let today = NaiveDate::from_ymd_opt(2026, 11, 7).unwrap();
		let titles = upcoming_events(today).iter().map(|e| e.title).collect::<Vec<_>>();

		assert_eq!(titles, [
			"Bottomless Brunch: Disco Edition",
			"Orange Rooms 25th Birthday",
			"Mezcal Masterclass"
		]);
	}

	#[test]
	fn event_dates_format_nicely() {
		let event = Event { title: "", date: (2026, 10, 31), doors: "", lineup: "", image: "" };
		assert_eq!(event_date_string(&event), "Sat 31 Oct 2026");

		let bogus = Event { date: (2026, 2, 30), ..event };
		assert_eq!(event_date_string(&bogus), "Date TBC");
	}

	#[test]
	fn gallery_filter() {
		assert_eq!(gallery_in(None).count(), GALLERY.len());
		assert!(gallery_in(Some(Category::Lounge)).all(|g| g.category == Category::Lounge));
	}

	#[test]
	fn footer_links_resolve() {
		use crate::Page;

		let pages = FOOTER_COLUMNS.iter()
			.flat_map(|(_, links)| links.iter())
			.map(|(_, id)| Page::from_id(id))
			.collect::<Vec<_>>();

		assert!(pages.contains(&Page::Reservations));
		// careers doesn't have a page yet
		assert_eq!(Page::from_id("careers"), Page::Home);
	}

	#[test]
	fn widgets_dont_share_ids() {
		assert_ne!(TICKETING_WIDGET.script_id, RESERVATION_WIDGET.script_id);
		assert_ne!(TICKETING_WIDGET.container_id, RESERVATION_WIDGET.container_id);
	}
}
