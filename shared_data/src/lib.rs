pub mod concierge;
pub mod content;
pub mod page;
pub mod widget;

mod md_to_html;
pub use md_to_html::md_to_html;

pub use page::{Page, ViewRouter, Viewport};

pub static BASE_STYLE: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Archivo+Black&family=Inter:wght@400;700;900&display=swap');
* {
	--orange: #f97316;
	--wine: #2d0a14;
	--night: #1a050b;
	--ink: #1a1512;
	--teal: #41ccce;
	--cream: #fde6d2;
	--faded: rgba(255, 255, 255, 0.6);
	--ghost: rgba(255, 255, 255, 0.05);
	box-sizing: border-box;
	font-family: Inter, Arial, sans-serif;
}
::selection {
	background-color: var(--orange);
	color: var(--ink);
}
body {
	margin: 0;
	background-color: var(--wine);
	color: white;
	-webkit-font-smoothing: antialiased;
}
h1, h2, h3 {
	font-family: "Archivo Black", Inter, sans-serif;
	text-transform: uppercase;
	letter-spacing: -0.04em;
	margin: 0;
}
a {
	color: inherit;
}
section {
	padding: 96px 24px;
}
.container {
	max-width: 1200px;
	margin: 0 auto;
}
.eyebrow {
	color: var(--faded);
	font-size: 12px;
	font-weight: 900;
	text-transform: uppercase;
	letter-spacing: 0.4em;
	margin-bottom: 16px;
}
.section-heading {
	margin-bottom: 48px;
}
.section-heading.centered {
	text-align: center;
}
.section-heading h2 {
	font-size: clamp(40px, 8vw, 112px);
	line-height: 0.85;
	font-style: italic;
}
.btn {
	border: none;
	border-radius: 999px;
	padding: 12px 32px;
	font-size: 12px;
	font-weight: 900;
	text-transform: uppercase;
	letter-spacing: 0.2em;
	cursor: pointer;
	transition: all 0.2s;
}
.btn:active {
	transform: scale(0.95);
}
.btn-primary {
	background-color: var(--orange);
	color: var(--ink);
}
.btn-primary:hover {
	background-color: white;
}
.btn-secondary {
	background-color: white;
	color: var(--ink);
}
.btn-secondary:hover {
	background-color: var(--orange);
	color: white;
}
.btn-outline {
	background-color: transparent;
	border: 2px solid rgba(255, 255, 255, 0.2);
	color: white;
}
.btn-outline:hover {
	background-color: var(--orange);
	border-color: var(--orange);
}
.chips {
	display: flex;
	justify-content: center;
	gap: 16px;
	margin-bottom: 48px;
}
.chip {
	background: none;
	border: none;
	border-bottom: 2px solid transparent;
	color: rgba(255, 255, 255, 0.4);
	font-weight: 900;
	text-transform: uppercase;
	padding-bottom: 8px;
	cursor: pointer;
}
.chip.active {
	color: var(--orange);
	border-bottom-color: var(--orange);
}
.card-grid {
	display: grid;
	grid-template-columns: repeat(auto-fill, minmax(240px, 1fr));
	gap: 32px;
}
.rounded-img {
	width: 100%;
	aspect-ratio: 1;
	object-fit: cover;
	border-radius: 32px;
}
.spinner-overlay {
	position: absolute;
	inset: 0;
	display: flex;
	align-items: center;
	justify-content: center;
	background-color: rgba(26, 5, 11, 0.8);
	z-index: 5;
}
.spinner {
	width: 48px;
	height: 48px;
	border: 4px solid var(--ghost);
	border-top-color: var(--orange);
	border-radius: 50%;
	animation: spin 0.8s linear infinite;
}
@keyframes spin {
	to { transform: rotate(360deg); }
}
"#;
