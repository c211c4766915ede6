use std::{cell::Cell, time::Duration};

use serde_json::{Map, Value};

/// How long we show the spinner for if the vendor never tells us it's done. Some of them just
/// don't.
pub const LOADING_GRACE: Duration = Duration::from_secs(3);

/// Everything we need to get one vendor widget onto the page
#[derive(Debug, PartialEq, Eq)]
pub struct WidgetSpec {
	pub name: &'static str,
	pub script_url: &'static str,
	pub script_id: &'static str,
	pub container_id: &'static str,
	pub mount: MountContract
}

#[derive(Debug, PartialEq, Eq)]
pub enum MountContract {
	/// The script goes in `<body>`, and once it's loaded it exposes `window[global]`, which we
	/// have to call `create(container, options)` on ourselves.
	Factory {
		global: &'static str,
		options: &'static [(&'static str, &'static str)]
	},
	/// The script goes inside the container and mounts itself when it loads, reading its config
	/// off of its own `data-*` attributes.
	SelfMounting {
		attributes: &'static [(&'static str, &'static str)]
	}
}

impl MountContract {
	#[must_use]
	pub fn global(&self) -> Option<&'static str> {
		match self {
			Self::Factory { global, .. } => Some(*global),
			Self::SelfMounting { .. } => None
		}
	}

	/// The options object handed to the vendor's `create`, as JSON. Self-mounting widgets don't
	/// get one.
	#[must_use]
	pub fn options_json(&self) -> Option<Value> {
		match self {
			Self::Factory { options, .. } => Some(Value::Object(
				options.iter()
					.map(|(k, v)| ((*k).to_string(), Value::String((*v).to_string())))
					.collect::<Map<_, _>>()
			)),
			Self::SelfMounting { .. } => None
		}
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Placement<'a> {
	Body,
	Container(&'a str)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ScriptTag<'a> {
	pub id: &'a str,
	pub src: &'a str,
	pub attributes: &'a [(&'a str, &'a str)]
}

impl WidgetSpec {
	fn script_tag(&self) -> ScriptTag<'_> {
		let attributes: &[(&str, &str)] = match &self.mount {
			MountContract::SelfMounting { attributes } => *attributes,
			MountContract::Factory { .. } => &[]
		};

		ScriptTag { id: self.script_id, src: self.script_url, attributes }
	}
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum WidgetError {
	#[error("there's no document to put the widget in")]
	NoDocument,
	#[error("container #{0} isn't on the page")]
	MissingContainer(String),
	#[error("the vendor global `{0}` isn't available")]
	MissingGlobal(String),
	#[error("couldn't insert script #{id}: {reason}")]
	Insert { id: String, reason: String },
	#[error("widget initializer threw: {0}")]
	Initializer(String)
}

/// The bits of the document that bootstrapping a widget touches. The frontend implements this on
/// top of the real DOM; tests implement it on top of some vecs.
pub trait WidgetHost {
	/// Whether any element with this id exists anywhere in the document
	fn has_element(&self, id: &str) -> bool;
	fn has_global(&self, name: &str) -> bool;
	/// Scripts must be inserted as `async`
	fn insert_script(&mut self, script: &ScriptTag<'_>, placement: Placement<'_>) -> Result<(), WidgetError>;
	fn clear_container(&mut self, container_id: &str) -> Result<(), WidgetError>;
	fn call_factory(&mut self, global: &str, container_id: &str, options: &Value) -> Result<(), WidgetError>;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Bootstrap {
	/// We just put the script tag on the page; the caller should wait for it to load
	Injected,
	/// The script was already there and loaded, so we mounted right away
	Mounted,
	/// The script tag's there but hasn't finished loading yet, so the caller needs to listen for
	/// it again
	AwaitingLoad
}

pub fn bootstrap(host: &mut impl WidgetHost, spec: &WidgetSpec) -> Result<Bootstrap, WidgetError> {
	if !host.has_element(spec.script_id) {
		match spec.mount {
			MountContract::Factory { .. } => host.insert_script(&spec.script_tag(), Placement::Body)?,
			// for these, putting the script in the container *is* the mount
			MountContract::SelfMounting { .. } => initialize(host, spec)?
		}

		return Ok(Bootstrap::Injected);
	}

	match spec.mount.global() {
		Some(global) if host.has_global(global) => {
			initialize(host, spec)?;
			Ok(Bootstrap::Mounted)
		},
		_ => Ok(Bootstrap::AwaitingLoad)
	}
}

/// Clears out whatever's in the container and mounts the widget fresh, so calling this more than
/// once never leaves two copies of the widget sitting around.
pub fn initialize(host: &mut impl WidgetHost, spec: &WidgetSpec) -> Result<(), WidgetError> {
	host.clear_container(spec.container_id)?;

	match &spec.mount {
		MountContract::Factory { global, .. } => {
			if !host.has_global(global) {
				return Err(WidgetError::MissingGlobal((*global).to_string()));
			}

			let options = spec.mount.options_json().unwrap_or(Value::Null);
			host.call_factory(global, spec.container_id, &options)
		},
		MountContract::SelfMounting { .. } =>
			host.insert_script(&spec.script_tag(), Placement::Container(spec.container_id))
	}
}

/// What to do once the vendor's script fires its `load` event
pub fn on_script_loaded(host: &mut impl WidgetHost, spec: &WidgetSpec) -> Result<(), WidgetError> {
	match spec.mount {
		MountContract::Factory { .. } => initialize(host, spec),
		MountContract::SelfMounting { .. } => Ok(())
	}
}

/// Whether the spinner should still be showing. It only ever goes from loading to not loading,
/// once, no matter how many of the load event/error event/timer end up firing.
#[derive(Debug)]
pub struct LoadingFlag(Cell<bool>);

impl Default for LoadingFlag {
	fn default() -> Self {
		Self(Cell::new(true))
	}
}

impl LoadingFlag {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.0.get()
	}

	/// Returns true only for the call that actually flipped it
	pub fn finish(&self) -> bool {
		self.0.replace(false)
	}
}

/// One trip to a page with a widget on it. Everything that can end the spinner goes through here
/// so that `on_done` fires at most once, and nothing from a visit the user already left can touch
/// the page again.
pub struct WidgetVisit<F: Fn()> {
	loading: LoadingFlag,
	left: Cell<bool>,
	on_done: F
}

impl<F: Fn()> WidgetVisit<F> {
	pub fn new(on_done: F) -> Self {
		Self {
			loading: LoadingFlag::new(),
			left: Cell::new(false),
			on_done
		}
	}

	#[must_use]
	pub fn is_loading(&self) -> bool {
		self.loading.is_loading()
	}

	fn finish(&self) {
		if self.loading.finish() && !self.left.get() {
			(self.on_done)();
		}
	}

	/// Bootstraps the widget. If there's nothing left to wait for (it mounted right away, or it
	/// never will) the spinner's done now; otherwise the caller has to wait for a load, an error,
	/// or the grace timer.
	pub fn start(&self, host: &mut impl WidgetHost, spec: &WidgetSpec) -> Result<Bootstrap, WidgetError> {
		let res = bootstrap(host, spec);
		if !matches!(res, Ok(Bootstrap::Injected | Bootstrap::AwaitingLoad)) {
			self.finish();
		}
		res
	}

	pub fn loaded(&self, host: &mut impl WidgetHost, spec: &WidgetSpec) -> Result<(), WidgetError> {
		// whoever's on the page now has their own visit, and it'll mount the widget itself
		if self.left.get() {
			return Ok(());
		}

		let res = on_script_loaded(host, spec);
		self.finish();
		res
	}

	pub fn failed(&self) {
		self.finish();
	}

	pub fn grace_elapsed(&self) {
		self.finish();
	}

	pub fn leave(&self) {
		self.left.set(true);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::{collections::{HashMap, HashSet}, rc::Rc};

	const TICKETS: WidgetSpec = WidgetSpec {
		name: "tickets",
		script_url: "https://tickets.example/embed.js",
		script_id: "tickets-sdk",
		container_id: "tickets-container",
		mount: MountContract::Factory {
			global: "TicketShop",
			options: &[("shop", "orange-rooms"), ("theme", "dark")]
		}
	};

	const TABLES: WidgetSpec = WidgetSpec {
		name: "tables",
		script_url: "https://tables.example/widget.js",
		script_id: "tables-sdk",
		container_id: "tables-container",
		mount: MountContract::SelfMounting {
			attributes: &[("data-widget-id", "4471")]
		}
	};

	#[derive(Default)]
	struct FakeDocument {
		// ids of scripts that went in <body>
		scripts: Vec<String>,
		containers: HashMap<String, Vec<String>>,
		globals: HashSet<String>,
		factory_throws: bool,
		factory_calls: usize
	}

	impl FakeDocument {
		fn with_container(id: &str) -> Self {
			let mut doc = Self::default();
			doc.containers.insert(id.to_string(), Vec::new());
			doc
		}

		fn script_count(&self, id: &str) -> usize {
			let in_body = self.scripts.iter().filter(|s| *s == id).count();
			let in_containers = self.containers.values()
				.flatten()
				.filter(|c| *c == &format!("script#{id}"))
				.count();
			in_body + in_containers
		}

		fn markup(&self, container: &str) -> &[String] {
			&self.containers[container]
		}
	}

	impl WidgetHost for FakeDocument {
		fn has_element(&self, id: &str) -> bool {
			self.script_count(id) > 0 || self.containers.contains_key(id)
		}

		fn has_global(&self, name: &str) -> bool {
			self.globals.contains(name)
		}

		fn insert_script(&mut self, script: &ScriptTag<'_>, placement: Placement<'_>) -> Result<(), WidgetError> {
			match placement {
				Placement::Body => self.scripts.push(script.id.to_string()),
				Placement::Container(c) => self.containers.get_mut(c)
					.ok_or_else(|| WidgetError::MissingContainer(c.to_string()))?
					.push(format!("script#{}", script.id))
			}
			Ok(())
		}

		fn clear_container(&mut self, container_id: &str) -> Result<(), WidgetError> {
			self.containers.get_mut(container_id)
				.ok_or_else(|| WidgetError::MissingContainer(container_id.to_string()))?
				.clear();
			Ok(())
		}

		fn call_factory(&mut self, global: &str, container_id: &str, options: &Value) -> Result<(), WidgetError> {
			self.factory_calls += 1;
			if self.factory_throws {
				// pretend it got halfway through before blowing up
				self.containers.get_mut(container_id)
					.ok_or_else(|| WidgetError::MissingContainer(container_id.to_string()))?
					.push("half-a-widget".into());
				return Err(WidgetError::Initializer(format!("{global} is having a bad night")));
			}

			self.containers.get_mut(container_id)
				.ok_or_else(|| WidgetError::MissingContainer(container_id.to_string()))?
				.push(format!("{global}:{options}"));
			Ok(())
		}
	}

	#[test]
	fn double_bootstrap_only_injects_once() {
		let mut doc = FakeDocument::with_container(TICKETS.container_id);

		assert_eq!(bootstrap(&mut doc, &TICKETS), Ok(Bootstrap::Injected));
		assert_eq!(bootstrap(&mut doc, &TICKETS), Ok(Bootstrap::AwaitingLoad));
		assert_eq!(doc.script_count(TICKETS.script_id), 1);
		assert!(doc.markup(TICKETS.container_id).is_empty());
	}

	#[test]
	fn mounts_immediately_once_the_global_is_around() {
		let mut doc = FakeDocument::with_container(TICKETS.container_id);
		bootstrap(&mut doc, &TICKETS).unwrap();

		doc.globals.insert("TicketShop".into());
		on_script_loaded(&mut doc, &TICKETS).unwrap();

		// and then they navigate away and come back
		assert_eq!(bootstrap(&mut doc, &TICKETS), Ok(Bootstrap::Mounted));
		assert_eq!(doc.script_count(TICKETS.script_id), 1);
		assert_eq!(doc.markup(TICKETS.container_id), [
			r#"TicketShop:{"shop":"orange-rooms","theme":"dark"}"#
		]);
	}

	#[test]
	fn initializer_clears_old_markup_first() {
		let mut doc = FakeDocument::with_container(TICKETS.container_id);
		doc.globals.insert("TicketShop".into());
		doc.containers.get_mut(TICKETS.container_id).unwrap().push("stale widget".into());

		initialize(&mut doc, &TICKETS).unwrap();
		initialize(&mut doc, &TICKETS).unwrap();

		assert_eq!(doc.markup(TICKETS.container_id).len(), 1);
		assert!(doc.markup(TICKETS.container_id)[0].starts_with("TicketShop:"));
	}

	#[test]
	fn initializer_without_global_errors() {
		let mut doc = FakeDocument::with_container(TICKETS.container_id);
		assert_eq!(
			initialize(&mut doc, &TICKETS),
			Err(WidgetError::MissingGlobal("TicketShop".into()))
		);
	}

	#[test]
	fn throwing_factory_leaves_container_as_is() {
		let mut doc = FakeDocument::with_container(TICKETS.container_id);
		doc.globals.insert("TicketShop".into());
		doc.factory_throws = true;

		assert!(matches!(initialize(&mut doc, &TICKETS), Err(WidgetError::Initializer(_))));
		assert_eq!(doc.markup(TICKETS.container_id), ["half-a-widget"]);
	}

	#[test]
	fn self_mounting_script_goes_in_container() {
		let mut doc = FakeDocument::with_container(TABLES.container_id);
		doc.containers.get_mut(TABLES.container_id).unwrap().push("leftovers".into());

		assert_eq!(bootstrap(&mut doc, &TABLES), Ok(Bootstrap::Injected));
		assert_eq!(bootstrap(&mut doc, &TABLES), Ok(Bootstrap::AwaitingLoad));
		assert_eq!(on_script_loaded(&mut doc, &TABLES), Ok(()));

		assert!(doc.scripts.is_empty());
		assert_eq!(doc.markup(TABLES.container_id), ["script#tables-sdk"]);
	}

	#[test]
	fn self_mounting_without_container_fails() {
		let mut doc = FakeDocument::default();
		assert_eq!(
			bootstrap(&mut doc, &TABLES),
			Err(WidgetError::MissingContainer("tables-container".into()))
		);
	}

	#[test]
	fn loading_flag_only_finishes_once() {
		let flag = LoadingFlag::new();
		assert!(flag.is_loading());

		// e.g. the script errors, and then the grace timer fires anyways
		assert!(flag.finish());
		assert!(!flag.finish());
		assert!(!flag.is_loading());
	}

	#[test]
	fn self_mounting_has_no_options() {
		assert_eq!(TABLES.mount.options_json(), None);
		assert_eq!(TABLES.mount.global(), None);
		assert_eq!(TICKETS.mount.global(), Some("TicketShop"));
	}

	fn counting_visit() -> (Rc<Cell<usize>>, WidgetVisit<impl Fn()>) {
		let done = Rc::new(Cell::new(0));
		let visit = WidgetVisit::new({
			let done = done.clone();
			move || done.set(done.get() + 1)
		});
		(done, visit)
	}

	#[test]
	fn leaving_mid_load_doesnt_mount_twice() {
		let mut doc = FakeDocument::with_container(TICKETS.container_id);

		let (first_done, first) = counting_visit();
		assert_eq!(first.start(&mut doc, &TICKETS), Ok(Bootstrap::Injected));
		first.leave();

		// back to the events page before the script's finished
		let (second_done, second) = counting_visit();
		assert_eq!(second.start(&mut doc, &TICKETS), Ok(Bootstrap::AwaitingLoad));

		// and then both visits' load handlers fire
		doc.globals.insert("TicketShop".into());
		first.loaded(&mut doc, &TICKETS).unwrap();
		second.loaded(&mut doc, &TICKETS).unwrap();

		assert_eq!(doc.factory_calls, 1);
		assert_eq!(doc.markup(TICKETS.container_id).len(), 1);
		assert_eq!(first_done.get(), 0);
		assert_eq!(second_done.get(), 1);
	}

	#[test]
	fn immediate_mount_finishes_right_away() {
		let mut doc = FakeDocument::with_container(TICKETS.container_id);
		doc.scripts.push(TICKETS.script_id.into());
		doc.globals.insert("TicketShop".into());

		let (done, visit) = counting_visit();
		assert_eq!(visit.start(&mut doc, &TICKETS), Ok(Bootstrap::Mounted));
		assert_eq!(done.get(), 1);
		assert!(!visit.is_loading());

		// the grace timer still goes off later
		visit.grace_elapsed();
		assert_eq!(done.get(), 1);
	}

	#[test]
	fn bootstrap_errors_finish_right_away() {
		let mut doc = FakeDocument::default();

		let (done, visit) = counting_visit();
		assert!(visit.start(&mut doc, &TABLES).is_err());
		assert_eq!(done.get(), 1);
	}

	#[test]
	fn injecting_keeps_the_spinner_up() {
		let mut doc = FakeDocument::with_container(TICKETS.container_id);

		let (done, visit) = counting_visit();
		assert_eq!(visit.start(&mut doc, &TICKETS), Ok(Bootstrap::Injected));
		assert_eq!(done.get(), 0);
		assert!(visit.is_loading());

		visit.grace_elapsed();
		assert_eq!(done.get(), 1);
	}

	#[test]
	fn throwing_initializer_on_load_still_finishes() {
		let mut doc = FakeDocument::with_container(TICKETS.container_id);

		let (done, visit) = counting_visit();
		visit.start(&mut doc, &TICKETS).unwrap();

		doc.globals.insert("TicketShop".into());
		doc.factory_throws = true;
		assert!(matches!(visit.loaded(&mut doc, &TICKETS), Err(WidgetError::Initializer(_))));
		assert_eq!(done.get(), 1);

		visit.grace_elapsed();
		assert_eq!(done.get(), 1);
	}

	#[test]
	fn script_errors_finish_once() {
		let mut doc = FakeDocument::with_container(TICKETS.container_id);

		let (done, visit) = counting_visit();
		visit.start(&mut doc, &TICKETS).unwrap();

		visit.failed();
		visit.grace_elapsed();
		visit.failed();
		assert_eq!(done.get(), 1);
		assert_eq!(doc.factory_calls, 0);
	}

	#[test]
	fn nothing_fires_after_leaving() {
		let mut doc = FakeDocument::with_container(TICKETS.container_id);

		let (done, visit) = counting_visit();
		visit.start(&mut doc, &TICKETS).unwrap();
		visit.leave();

		visit.grace_elapsed();
		visit.failed();
		assert_eq!(done.get(), 0);
	}
}
