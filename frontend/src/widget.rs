use std::rc::Rc;

use gloo_console::error;
use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect, JSON};
use serde_json::Value;
use shared_data::widget::{
	Bootstrap,
	Placement,
	ScriptTag,
	WidgetError,
	WidgetHost,
	WidgetSpec,
	WidgetVisit,
	LOADING_GRACE
};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Document, Element, HtmlScriptElement, Window};
use yew::prelude::*;

/// `WidgetHost`, but it's the actual page
struct DomHost {
	window: Window,
	document: Document,
	// (load, error)
	listeners: Option<(Function, Function)>,
	// everything we've hooked the listeners up to, so they can come off again
	attached: Vec<Element>
}

impl DomHost {
	fn new() -> Result<Self, WidgetError> {
		let window = web_sys::window().ok_or(WidgetError::NoDocument)?;
		let document = window.document().ok_or(WidgetError::NoDocument)?;
		Ok(Self { window, document, listeners: None, attached: Vec::new() })
	}

	fn with_listeners(mut self, on_load: &Closure<dyn Fn()>, on_error: &Closure<dyn Fn()>) -> Self {
		self.listeners = Some((as_function(on_load).clone(), as_function(on_error).clone()));
		self
	}

	fn attach(&mut self, target: Element) {
		if let Some((on_load, on_error)) = &self.listeners {
			_ = target.add_event_listener_with_callback("load", on_load);
			_ = target.add_event_listener_with_callback("error", on_error);
			self.attached.push(target);
		}
	}

	/// For when the script tag was put on the page by an earlier visit and is still loading
	fn listen(&mut self, script_id: &str) {
		if let Some(script) = self.document.get_element_by_id(script_id) {
			self.attach(script);
		}
	}

	fn container(&self, id: &str) -> Result<Element, WidgetError> {
		self.document.get_element_by_id(id)
			.ok_or_else(|| WidgetError::MissingContainer(id.to_string()))
	}
}

impl WidgetHost for DomHost {
	fn has_element(&self, id: &str) -> bool {
		self.document.get_element_by_id(id).is_some()
	}

	fn has_global(&self, name: &str) -> bool {
		Reflect::get(&self.window, &JsValue::from_str(name))
			.is_ok_and(|g| !g.is_undefined() && !g.is_null())
	}

	fn insert_script(&mut self, script: &ScriptTag<'_>, placement: Placement<'_>) -> Result<(), WidgetError> {
		let insert_err = |e: JsValue| WidgetError::Insert {
			id: script.id.to_string(),
			reason: format!("{e:?}")
		};

		let tag = self.document.create_element("script")
			.map_err(insert_err)?
			.dyn_into::<HtmlScriptElement>()
			.map_err(|e| insert_err(e.into()))?;

		tag.set_id(script.id);
		tag.set_src(script.src);
		tag.set_async(true);
		for (name, value) in script.attributes {
			tag.set_attribute(name, value).map_err(insert_err)?;
		}

		let parent: Element = match placement {
			Placement::Body => self.document.body().ok_or(WidgetError::NoDocument)?.into(),
			Placement::Container(id) => self.container(id)?
		};

		let tag: Element = tag.into();
		self.attach(tag.clone());

		parent.append_child(&tag)
			.map(|_| ())
			.map_err(insert_err)
	}

	fn clear_container(&mut self, container_id: &str) -> Result<(), WidgetError> {
		self.container(container_id)?.set_inner_html("");
		Ok(())
	}

	fn call_factory(&mut self, global: &str, container_id: &str, options: &Value) -> Result<(), WidgetError> {
		let threw = |e: JsValue| WidgetError::Initializer(format!("{e:?}"));

		let vendor = Reflect::get(&self.window, &JsValue::from_str(global)).map_err(threw)?;
		let create = Reflect::get(&vendor, &JsValue::from_str("create"))
			.map_err(threw)?
			.dyn_into::<Function>()
			.map_err(|_| WidgetError::Initializer(format!("{global}.create isn't a function")))?;

		let container = self.container(container_id)?;
		let options = JSON::parse(&options.to_string()).map_err(threw)?;

		create.call2(&vendor, &container, &options)
			.map(|_| ())
			.map_err(threw)
	}
}

fn as_function(closure: &Closure<dyn Fn()>) -> &Function {
	closure.as_ref().unchecked_ref()
}

/// Gets the widget onto the page, and returns whether we should still be showing a spinner
#[hook]
pub fn use_widget(spec: &'static WidgetSpec) -> bool {
	let loading = use_state(|| true);

	{
		let loading = loading.clone();
		use_effect_with(spec.script_id, move |_| {
			let visit = Rc::new(WidgetVisit::new(move || loading.set(false)));

			let on_load = Closure::<dyn Fn()>::new({
				let visit = visit.clone();
				move || {
					if let Err(e) = DomHost::new().and_then(|mut host| visit.loaded(&mut host, spec)) {
						error!(format!("Couldn't start the {} widget: {e}", spec.name));
					}
				}
			});

			let on_error = Closure::<dyn Fn()>::new({
				let visit = visit.clone();
				move || {
					error!(format!("The {} script failed to load from {}", spec.name, spec.script_url));
					visit.failed();
				}
			});

			let grace_ms = u32::try_from(LOADING_GRACE.as_millis()).unwrap_or(u32::MAX);
			let grace = Timeout::new(grace_ms, {
				let visit = visit.clone();
				move || visit.grace_elapsed()
			});

			let attached = match DomHost::new() {
				Ok(host) => {
					let mut host = host.with_listeners(&on_load, &on_error);
					match visit.start(&mut host, spec) {
						Ok(Bootstrap::AwaitingLoad) => host.listen(spec.script_id),
						Ok(Bootstrap::Injected | Bootstrap::Mounted) => (),
						Err(e) => error!(format!("Couldn't set up the {} widget: {e}", spec.name))
					}
					host.attached
				},
				Err(e) => {
					error!(format!("Couldn't set up the {} widget: {e}", spec.name));
					visit.failed();
					Vec::new()
				}
			};

			move || {
				visit.leave();
				// the script tag outlives us, so if it finishes loading later it mustn't find these
				for el in &attached {
					_ = el.remove_event_listener_with_callback("load", as_function(&on_load));
					_ = el.remove_event_listener_with_callback("error", as_function(&on_error));
				}
				drop(grace);
			}
		});
	}

	*loading
}

#[derive(Properties, PartialEq)]
pub struct WidgetFrameProps {
	pub spec: &'static WidgetSpec
}

#[function_component(WidgetFrame)]
pub fn widget_frame(props: &WidgetFrameProps) -> Html {
	let loading = use_widget(props.spec);

	html! {
		<div class="widget-frame">
			<style>
			{
				"
				.widget-frame {
					position: relative;
					min-height: 480px;
					border-radius: 32px;
					border: 4px solid var(--ghost);
					background-color: var(--night);
					overflow: hidden;
				}
				.widget-container {
					padding: 24px;
				}
				"
			}
			</style>
			if loading {
				<div class="spinner-overlay"><div class="spinner"></div></div>
			}
			// the vendor owns everything inside this, so it has to stay childless as far as yew's
			// concerned
			<div id={ props.spec.container_id } class="widget-container"></div>
		</div>
	}
}
