use shared_data::{
	Page,
	content::{
		Category,
		ExperienceKind,
		ESTABLISHED,
		EXPERIENCES,
		FAQ,
		FEATURE_TABS,
		products_in,
		toggle_accordion
	}
};
use yew::prelude::*;

use crate::layout::{Button, ButtonVariant, NavProps, SectionHeading};

fn go(navigate: &Callback<Page>, page: Page) -> Callback<MouseEvent> {
	let navigate = navigate.clone();
	Callback::from(move |_| navigate.emit(page))
}

#[function_component(Home)]
pub fn home(props: &NavProps) -> Html {
	html! {
		<>
			<style>
			{
				"
				#hero {
					position: relative;
					min-height: 90vh;
					display: flex;
					align-items: center;
					justify-content: center;
					text-align: center;
					overflow: hidden;
				}
				.floater {
					position: absolute;
					width: 192px;
					height: 192px;
					border-radius: 50%;
					overflow: hidden;
					border: 4px solid rgba(249, 115, 22, 0.4);
					animation: pulse 3s ease-in-out infinite;
				}
				.floater img {
					width: 100%;
					height: 100%;
					object-fit: cover;
				}
				@keyframes pulse {
					50% { opacity: 0.6; }
				}
				#hero h1 {
					font-size: clamp(64px, 14vw, 192px);
					line-height: 0.75;
					margin-bottom: 32px;
				}
				#hero h1 span {
					color: var(--orange);
				}
				.product-card h3 {
					font-size: 16px;
					margin: 24px 0 16px 0;
				}
				.product-card img {
					filter: grayscale(1);
					transition: filter 0.7s;
				}
				.product-card:hover img {
					filter: none;
				}
				.dots {
					display: flex;
					justify-content: center;
					gap: 8px;
					margin-top: 48px;
				}
				.dot {
					width: 8px;
					height: 8px;
					border-radius: 50%;
					background-color: rgba(255, 255, 255, 0.2);
				}
				.dot.active {
					background-color: var(--orange);
				}
				.experience-grid {
					display: grid;
					grid-template-columns: repeat(auto-fill, minmax(420px, 1fr));
					gap: 48px;
				}
				.experience img {
					width: 100%;
					aspect-ratio: 16 / 10;
					object-fit: cover;
					border-radius: 32px;
					border: 4px solid var(--ghost);
				}
				.experience {
					text-align: center;
				}
				.experience-meta {
					display: flex;
					justify-content: center;
					gap: 24px;
					font-size: 10px;
					font-weight: 900;
					text-transform: uppercase;
					letter-spacing: 0.2em;
					color: rgba(255, 255, 255, 0.5);
				}
				.tag {
					background-color: var(--orange);
					color: var(--ink);
					padding: 4px 12px;
					font-size: 9px;
					font-weight: 900;
					text-transform: uppercase;
					border-radius: 999px;
				}
				#mission {
					background-color: var(--teal);
					color: var(--wine);
					text-align: center;
				}
				#mission h2 {
					font-size: clamp(72px, 14vw, 160px);
					font-style: italic;
				}
				#mission p {
					max-width: 672px;
					margin: 48px auto 0 auto;
					font-size: 20px;
					font-weight: 700;
					text-transform: uppercase;
					letter-spacing: 0.05em;
				}
				#features {
					display: grid;
					grid-template-columns: 1fr 1fr;
					gap: 80px;
					align-items: center;
				}
				.feature-tab {
					width: 100%;
					display: flex;
					justify-content: space-between;
					padding: 24px;
					margin-bottom: 16px;
					border: none;
					border-radius: 12px;
					background-color: var(--ghost);
					color: white;
					font-weight: 900;
					text-transform: uppercase;
					letter-spacing: 0.2em;
					cursor: pointer;
				}
				.feature-tab.active {
					background-color: var(--orange);
					color: var(--ink);
				}
				#feature-panel {
					background-color: var(--night);
					padding: 48px;
					border-radius: 48px;
					border: 4px solid var(--ghost);
				}
				#feature-panel h3 {
					font-size: 48px;
					font-style: italic;
					margin-bottom: 32px;
				}
				#feature-panel h3 span {
					color: var(--orange);
				}
				.faq-item {
					background-color: var(--night);
					border: 4px solid var(--ghost);
					border-radius: 16px;
					margin-bottom: 24px;
					cursor: pointer;
					transition: border-color 0.2s;
				}
				.faq-item:hover, .faq-item.open {
					border-color: rgba(249, 115, 22, 0.4);
				}
				.faq-question {
					display: flex;
					justify-content: space-between;
					width: 100%;
					padding: 32px;
					background: none;
					border: none;
					color: white;
					font-size: 20px;
					font-weight: 900;
					text-transform: uppercase;
					text-align: left;
					cursor: pointer;
				}
				.faq-answer {
					padding: 0 32px 32px 32px;
					color: var(--faded);
					font-weight: 700;
				}
				#locator {
					background-color: var(--cream);
					color: var(--ink);
					border-radius: 48px;
					padding: 96px 48px;
					text-align: center;
				}
				#locator h2 {
					font-size: clamp(64px, 12vw, 128px);
					font-style: italic;
					margin-bottom: 32px;
				}
				@media (max-width: 900px) {
					#features, .experience-grid {
						grid-template-columns: 1fr;
					}
				}
				"
			}
			</style>
			<Hero navigate={ props.navigate.clone() } />
			<ProductCarousel navigate={ props.navigate.clone() } />
			<PotluckGrid navigate={ props.navigate.clone() } />
			<Mission />
			<FeatureTabs navigate={ props.navigate.clone() } />
			<Faq navigate={ props.navigate.clone() } />
			<Locator navigate={ props.navigate.clone() } />
		</>
	}
}

#[function_component(Hero)]
fn hero(props: &NavProps) -> Html {
	// (image, css position)
	let floaters = [
		("https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?auto=format&fit=crop&q=80&w=400", "top: 80px; left: 40px; rotate: 12deg;"),
		("https://images.unsplash.com/photo-1543007630-9710e4a00a20?auto=format&fit=crop&q=80&w=400", "top: 80px; right: 40px; rotate: -12deg;"),
		("https://images.unsplash.com/photo-1470337458703-46ad1756a187?auto=format&fit=crop&q=80&w=400", "bottom: 80px; left: 80px; rotate: 45deg;"),
		("https://images.unsplash.com/photo-1565299624946-b28f40a0ae38?auto=format&fit=crop&q=80&w=400", "bottom: 80px; right: 80px; rotate: -45deg;"),
	];

	html! {
		<section id="hero">
			{
				floaters.into_iter().map(|(src, style)| html! {
					<div class="floater" { style }><img { src } /></div>
				}).collect::<Html>()
			}
			<div>
				<p class="eyebrow" style="color: var(--orange)">{ format!("Established {ESTABLISHED}") }</p>
				<p class="eyebrow" style="color: white">{ "+ It's Giving -" }</p>
				<h1><span>{ "Orange" }</span><br />{ "Vibes" }</h1>
				<Button onclick={ go(&props.navigate, Page::Rooms) }>{ "Learn More +" }</Button>
			</div>
		</section>
	}
}

#[function_component(ProductCarousel)]
fn product_carousel(props: &NavProps) -> Html {
	let category = use_state(Category::default);

	let chips = Category::ALL.iter().map(|&cat| {
		let category = category.clone();
		let selected = *category == cat;
		html! {
			<button
				class={ classes!("chip", selected.then_some("active")) }
				onclick={ move |_| category.set(cat) }
			>
				{ cat.label() }
			</button>
		}
	}).collect::<Html>();

	let cards = products_in(*category).map(|product| html! {
		<div class="product-card">
			<img class="rounded-img" src={ product.image } alt={ product.name } />
			<h3>{ product.name }</h3>
			<Button variant={ ButtonVariant::Outline } onclick={ go(&props.navigate, Page::Reservations) }>
				{ "Find It" }
			</Button>
		</div>
	}).collect::<Html>();

	html! {
		<section style="border-top: 1px solid var(--ghost); text-align: center">
			<div class="container">
				<p class="eyebrow">{ "Speaking Of Vibes From Plants..." }</p>
				<div class="chips">{ chips }</div>
				<div class="card-grid">{ cards }</div>
				<div class="dots">
				{
					Category::ALL.iter().map(|&cat| html! {
						<div class={ classes!("dot", (*category == cat).then_some("active")) }></div>
					}).collect::<Html>()
				}
				</div>
			</div>
		</section>
	}
}

#[function_component(PotluckGrid)]
fn potluck_grid(props: &NavProps) -> Html {
	// nothing selected means show them all
	let kind = use_state(|| Option::<ExperienceKind>::None);

	let chips = ExperienceKind::ALL.iter().map(|&k| {
		let kind = kind.clone();
		let selected = *kind == Some(k);
		html! {
			<button
				class={ classes!("chip", selected.then_some("active")) }
				onclick={ move |_| kind.set((!selected).then_some(k)) }
			>
				{ k.label() }
			</button>
		}
	}).collect::<Html>();

	let experiences = EXPERIENCES.iter()
		.filter(|e| kind.is_none_or(|k| e.kind == k))
		.map(|e| html! {
			<div class="experience">
				<img src={ e.image } alt={ e.title } />
				<p><span class="tag">{ e.tag }</span></p>
				<h3 style="font-size: 32px; margin: 16px 0 24px 0">{ e.title }</h3>
				<div class="experience-meta">
					<span>{ e.servings }</span>
					<span>{ format!("{} Items", e.items) }</span>
					<span>{ e.difficulty }</span>
				</div>
				<Button
					variant={ ButtonVariant::Outline }
					class="experience-book"
					onclick={ go(&props.navigate, Page::Reservations) }
				>
					{ "View Vibes" }
				</Button>
			</div>
		})
		.collect::<Html>();

	html! {
		<section>
			<div class="container">
				<p class="eyebrow" style="text-align: center">{ "Want Nightlife Inspo? We Got You." }</p>
				<div class="chips">{ chips }</div>
				<SectionHeading subtitle="- Flex On Everyone At -" title="The Potluck" />
				<div class="experience-grid">{ experiences }</div>
				<div style="text-align: center; margin-top: 80px">
					<Button onclick={ go(&props.navigate, Page::Events) }>{ "See All Vibes +" }</Button>
				</div>
			</div>
		</section>
	}
}

#[function_component(Mission)]
fn mission() -> Html {
	html! {
		<section id="mission">
			<div class="container">
				<p class="eyebrow" style="color: var(--wine)">{ "+ Our +" }</p>
				<h2>{ "Mission" }</h2>
				<p>
					{ "We strive to make hospitality that's delicious, better for the planet, and way better for \
					the vibe. \"The way to solve the most important and urgent problem humanity has ever faced \
					turned out to be to figure out how to make the best drink on earth.\"" }
				</p>
				<p class="eyebrow" style="color: var(--wine); margin-top: 48px">{ "The Founder of Orange Rooms" }</p>
			</div>
		</section>
	}
}

#[function_component(FeatureTabs)]
fn feature_tabs(props: &NavProps) -> Html {
	let active = use_state(|| 0_usize);

	let tabs = FEATURE_TABS.iter().enumerate().map(|(idx, tab)| {
		let active = active.clone();
		let selected = *active == idx;
		html! {
			<button
				class={ classes!("feature-tab", selected.then_some("active")) }
				onclick={ move |_| active.set(idx) }
			>
				<span>{ tab.label }</span>
				<span>{ if selected { "\u{2193}" } else { "\u{2192}" } }</span>
			</button>
		}
	}).collect::<Html>();

	let panel = FEATURE_TABS.get(*active).map_or_else(Html::default, |tab| html! {
		<div id="feature-panel">
			<h3>{ tab.headline }{ " " }<span>{ tab.highlight }</span>{ " tasty nights." }</h3>
			<p style="color: var(--faded); font-size: 18px; font-weight: 700; margin-bottom: 48px">{ tab.body }</p>
			<Button onclick={ go(&props.navigate, Page::Reservations) }>{ "Book This Experience" }</Button>
		</div>
	});

	html! {
		<section>
			<div class="container" id="features">
				<div>{ tabs }</div>
				{ panel }
			</div>
		</section>
	}
}

#[function_component(Faq)]
fn faq(props: &NavProps) -> Html {
	let open = use_state(|| Option::<usize>::None);

	let items = FAQ.iter().enumerate().map(|(idx, item)| {
		let open_handle = open.clone();
		let is_open = *open == Some(idx);
		html! {
			<div class={ classes!("faq-item", is_open.then_some("open")) }>
				<button class="faq-question" onclick={ move |_| open_handle.set(toggle_accordion(*open_handle, idx)) }>
					<span>{ item.question }</span>
					<span>{ if is_open { "-" } else { "+" } }</span>
				</button>
				if is_open {
					<p class="faq-answer">{ item.answer }</p>
				}
			</div>
		}
	}).collect::<Html>();

	html! {
		<section>
			<div class="container" style="max-width: 896px">
				<SectionHeading subtitle="- Browse Our -" title="FAQ's" />
				{ items }
				<div style="text-align: center; margin-top: 128px">
					<SectionHeading subtitle="+ Still +" title="Have Questions?" />
					<Button onclick={ go(&props.navigate, Page::Concierge) }>{ "Find Help +" }</Button>
				</div>
			</div>
		</section>
	}
}

#[function_component(Locator)]
fn locator(props: &NavProps) -> Html {
	html! {
		<section>
			<div class="container" style="max-width: 1024px">
				<div id="locator">
					<p class="eyebrow" style="color: var(--ink)">{ "- Experience -" }</p>
					<h2>{ "Locator" }</h2>
					<p style="max-width: 576px; margin: 0 auto 48px auto; font-size: 20px; font-weight: 700; text-transform: uppercase">
						{ "Where's the vibe? This map knows. And it can even give you directions to all the Orange Rooms vibes you could want." }
					</p>
					<Button variant={ ButtonVariant::Secondary } onclick={ go(&props.navigate, Page::Contact) }>
						{ "Get Directions +" }
					</Button>
				</div>
			</div>
		</section>
	}
}
