use pulldown_cmark::{CowStr, Event, Options, Parser};

/// Renders a concierge answer (which the model likes to sprinkle with markdown) to html. We don't
/// trust this input at all, so any raw html in it comes out escaped instead of rendered.
#[must_use]
pub fn md_to_html(input: &str) -> String {
	let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_SMART_PUNCTUATION;

	let events = Parser::new_ext(input, options)
		.map(|ev| match ev {
			Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
			// a link to `javascript:` is still a script
			Event::Start(pulldown_cmark::Tag::Link { link_type, dest_url, title, id })
				if dest_url.trim_start().to_ascii_lowercase().starts_with("javascript:") =>
				Event::Start(pulldown_cmark::Tag::Link { link_type, dest_url: CowStr::from("#"), title, id }),
			e => e
		});

	let mut html = String::new();
	pulldown_cmark::html::push_html(&mut html, events);

	html
}

#[cfg(test)]
mod tests {
	use super::md_to_html;

	#[test]
	fn renders_basic_markdown() {
		assert_eq!(
			md_to_html("Doors at **9pm**, see you there"),
			"<p>Doors at <strong>9pm</strong>, see you there</p>\n"
		);
	}

	#[test]
	fn raw_html_is_escaped() {
		let html = md_to_html("hi <script>alert(1)</script>");
		assert!(!html.contains("<script>"));
		assert!(html.contains("&lt;script&gt;"));
	}

	#[test]
	fn javascript_links_are_defanged() {
		let html = md_to_html("[click](javascript:alert(1))");
		assert!(!html.contains("javascript:"));
		assert!(html.contains(r##"href="#""##));
	}
}
