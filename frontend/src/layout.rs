use shared_data::{BASE_STYLE, Page, content::{BRAND, CONTACT, FOOTER_COLUMNS}};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// The variables and utility classes every page leans on. Rendered once, above everything else.
#[function_component(SharedStyle)]
pub fn shared_style() -> Html {
	html! {
		<style>
			{ BASE_STYLE }
			{ "html { scroll-behavior: smooth; }" }
		</style>
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
	#[default]
	Primary,
	Secondary,
	Outline
}

impl ButtonVariant {
	fn class(self) -> &'static str {
		match self {
			Self::Primary => "btn btn-primary",
			Self::Secondary => "btn btn-secondary",
			Self::Outline => "btn btn-outline"
		}
	}
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
	#[prop_or_default]
	pub variant: ButtonVariant,
	#[prop_or_default]
	pub class: Classes,
	#[prop_or_default]
	pub onclick: Callback<MouseEvent>,
	#[prop_or_default]
	pub disabled: bool,
	#[prop_or_default]
	pub submit: bool,
	pub children: Children
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
	let kind = if props.submit { "submit" } else { "button" };

	html! {
		<button
			type={ kind }
			class={ classes!(props.variant.class(), props.class.clone()) }
			onclick={ props.onclick.clone() }
			disabled={ props.disabled }
		>
			{ for props.children.iter() }
		</button>
	}
}

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
	#[prop_or_default]
	pub subtitle: Option<AttrValue>,
	pub title: AttrValue,
	#[prop_or(true)]
	pub centered: bool
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
	html! {
		<div class={ classes!("section-heading", props.centered.then_some("centered")) }>
			if let Some(sub) = &props.subtitle {
				<p class="eyebrow">{ sub }</p>
			}
			<h2>{ &props.title }</h2>
		</div>
	}
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
	pub navigate: Callback<Page>
}

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
	pub current: Page,
	pub navigate: Callback<Page>
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
	let menu_open = use_state(|| false);

	let toggle_menu = {
		let menu_open = menu_open.clone();
		Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
	};

	let links = Page::ALL.iter().map(|&page| {
		let navigate = props.navigate.clone();
		let menu_open = menu_open.clone();
		let onclick = Callback::from(move |_: MouseEvent| {
			menu_open.set(false);
			navigate.emit(page);
		});

		html! {
			<button
				class={ classes!("nav-link", (page == props.current).then_some("current")) }
				{ onclick }
			>
				{ page.label() }
			</button>
		}
	}).collect::<Html>();

	let home = {
		let navigate = props.navigate.clone();
		Callback::from(move |_: MouseEvent| navigate.emit(Page::Home))
	};

	html! {
		<header id="site-header">
			<style>
			{
				"
				#site-header {
					position: fixed;
					top: 0;
					left: 0;
					width: 100%;
					height: 48px;
					z-index: 50;
					display: flex;
					align-items: center;
					justify-content: space-between;
					padding: 0 32px;
					background-color: var(--orange);
					color: var(--ink);
					box-shadow: 0 4px 12px rgba(0, 0, 0, 0.3);
				}
				#brand {
					background: none;
					border: none;
					color: var(--ink);
					font-size: 11px;
					font-weight: 900;
					text-transform: uppercase;
					cursor: pointer;
				}
				#brand span {
					background-color: var(--ink);
					color: white;
					padding: 0 4px;
					margin-right: 8px;
				}
				#site-nav {
					display: flex;
					gap: 24px;
				}
				.nav-link {
					background: none;
					border: none;
					color: var(--ink);
					font-size: 10px;
					font-weight: 900;
					text-transform: uppercase;
					letter-spacing: 0.2em;
					cursor: pointer;
				}
				.nav-link:hover, .nav-link.current {
					opacity: 0.6;
				}
				#menu-toggle {
					display: none;
					background: none;
					border: none;
					font-size: 20px;
					cursor: pointer;
				}
				@media (max-width: 900px) {
					#menu-toggle {
						display: block;
					}
					#site-nav {
						display: none;
					}
					#site-nav.open {
						display: flex;
						flex-direction: column;
						position: absolute;
						top: 48px;
						left: 0;
						width: 100%;
						padding: 24px 32px;
						background-color: var(--orange);
					}
				}
				main {
					padding-top: 48px;
				}
				"
			}
			</style>
			<button id="brand" onclick={ home }><span>{ "OR" }</span>{ BRAND }</button>
			<nav id="site-nav" class={ classes!((*menu_open).then_some("open")) }>
				{ links }
			</nav>
			<button id="menu-toggle" onclick={ toggle_menu }>{ if *menu_open { "\u{2715}" } else { "\u{2630}" } }</button>
		</header>
	}
}

#[function_component(Footer)]
pub fn footer(props: &NavProps) -> Html {
	let email = use_state(String::new);
	let subscribed = use_state(|| false);

	let email_input = {
		let email = email.clone();
		Callback::from(move |e: InputEvent|
			if let Some(input) = e.target()
				.and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
					email.set(input.value());
				}
		)
	};

	// there's nowhere to actually send this yet, so it just says thanks
	let sign_up = {
		let subscribed = subscribed.clone();
		let email = email.clone();
		Callback::from(move |e: SubmitEvent| {
			e.prevent_default();
			if !email.trim().is_empty() {
				subscribed.set(true);
			}
		})
	};

	let columns = FOOTER_COLUMNS.iter().map(|&(title, links)| html! {
		<div class="footer-column">
			<p class="footer-column-title">{ title }</p>
			{
				links.iter().map(|&(text, id)| {
					let navigate = props.navigate.clone();
					let page = Page::from_id(id);
					html! {
						<button class="footer-link" onclick={ move |_| navigate.emit(page) }>{ text }</button>
					}
				}).collect::<Html>()
			}
		</div>
	}).collect::<Html>();

	html! {
		<footer id="site-footer">
			<style>
			{
				"
				#site-footer {
					background-color: var(--night);
					padding: 128px 24px 48px 24px;
					overflow: hidden;
				}
				#footer-top {
					display: flex;
					flex-wrap: wrap;
					justify-content: space-between;
					gap: 80px;
					margin-bottom: 96px;
				}
				#newsletter {
					max-width: 440px;
				}
				#newsletter h3 {
					font-size: 24px;
					font-style: italic;
					margin-bottom: 32px;
				}
				#newsletter form {
					display: flex;
					background-color: white;
					border-radius: 999px;
					padding: 8px;
				}
				#newsletter input {
					flex: 1;
					border: none;
					outline: none;
					background: transparent;
					padding: 0 16px;
					font-weight: 700;
					color: black;
				}
				#footer-columns {
					display: grid;
					grid-template-columns: repeat(4, auto);
					gap: 48px;
				}
				.footer-column-title {
					font-size: 10px;
					font-weight: 900;
					text-transform: uppercase;
					letter-spacing: 0.2em;
				}
				.footer-link, .footer-column a {
					display: block;
					background: none;
					border: none;
					padding: 0;
					margin-bottom: 16px;
					color: rgba(255, 255, 255, 0.5);
					font-size: 10px;
					font-weight: 900;
					text-transform: uppercase;
					letter-spacing: 0.2em;
					text-decoration: none;
					cursor: pointer;
				}
				.footer-link:hover, .footer-column a:hover {
					color: var(--orange);
				}
				#footer-wordmark {
					font-size: 22vw;
					line-height: 1;
					color: var(--orange);
					text-align: center;
				}
				#footer-legal {
					display: flex;
					justify-content: space-between;
					border-top: 1px solid var(--ghost);
					padding-top: 48px;
					font-size: 10px;
					font-weight: 900;
					text-transform: uppercase;
					letter-spacing: 0.4em;
					color: rgba(255, 255, 255, 0.2);
				}
				"
			}
			</style>
			<div class="container">
				<div id="footer-top">
					<div id="newsletter">
						<h3>{ "Sign up to stay updated on the latest vibes and releases." }</h3>
						if *subscribed {
							<p class="eyebrow">{ "You're on the list. See you on the dance floor." }</p>
						} else {
							<form onsubmit={ sign_up }>
								<input type="email" placeholder="Email*" value={ (*email).clone() } oninput={ email_input } />
								<Button submit={ true }>{ "Submit" }</Button>
							</form>
						}
					</div>
					<div id="footer-columns">
						{ columns }
						<div class="footer-column">
							<p class="footer-column-title">{ "Follow Us" }</p>
							<a href={ CONTACT.instagram } target="_blank" rel="noopener">{ "Instagram" }</a>
							<a href={ CONTACT.facebook } target="_blank" rel="noopener">{ "Facebook" }</a>
						</div>
					</div>
				</div>
				<h2 id="footer-wordmark">{ "Orange" }</h2>
				<div id="footer-legal">
					<p>{ "\u{a9} 2024 Orange Rooms Inc." }</p>
					<p>{ "Terms of Use \u{b7} Privacy Policy" }</p>
				</div>
			</div>
		</footer>
	}
}

#[function_component(ScrollTopButton)]
pub fn scroll_top_button() -> Html {
	// this one doesn't go through the router since we're not changing pages
	let onclick = Callback::from(|_: MouseEvent| {
		if let Some(window) = web_sys::window() {
			window.scroll_to_with_x_and_y(0.0, 0.0);
		}
	});

	html! {
		<>
			<style>
			{
				"
				#scroll-top {
					position: fixed;
					bottom: 40px;
					right: 40px;
					z-index: 60;
					width: 48px;
					height: 48px;
					border: none;
					border-radius: 50%;
					background-color: var(--orange);
					color: var(--ink);
					font-size: 20px;
					font-weight: 900;
					cursor: pointer;
					box-shadow: 0 8px 24px rgba(0, 0, 0, 0.4);
				}
				#scroll-top:hover {
					background-color: white;
				}
				"
			}
			</style>
			<button id="scroll-top" {onclick}>{ "\u{2191}" }</button>
		</>
	}
}
