//! View Region Component
//!
//! A container a core view loader renders into. Each `ViewState` fully
//! replaces the container's children with real DOM nodes; `Action`
//! listeners in the tree become event listeners that dispatch through the
//! application context and re-run the loader when asked to.

use leptos::*;
use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use nexus::actions::{dispatch, Action, FormFields, Outcome};
use nexus::app::AppContext;
use nexus::dom::Node;
use nexus::views::{Surface, ViewState};

/// Fills a region; re-run whenever an action asks for a reload
pub type Loader = Rc<dyn Fn(Rc<Region>) -> Pin<Box<dyn Future<Output = ()>>>>;

/// Wrap an async loader body
pub fn loader<F, Fut>(f: F) -> Loader
where
    F: Fn(AppContext, Rc<Region>) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    Rc::new(move |region: Rc<Region>| {
        let ctx = region.ctx.clone();
        Box::pin(f(ctx, region)) as Pin<Box<dyn Future<Output = ()>>>
    })
}

/// A mounted container plus the listeners of its current tree
pub struct Region {
    me: Weak<Region>,
    container: web_sys::Element,
    ctx: AppContext,
    loader: Loader,
    listeners: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>>,
}

impl Region {
    pub fn new(container: web_sys::Element, ctx: AppContext, loader: Loader) -> Rc<Self> {
        Rc::new_cyclic(|me| Region {
            me: me.clone(),
            container,
            ctx,
            loader,
            listeners: RefCell::new(Vec::new()),
        })
    }

    pub fn reload(self: &Rc<Self>) {
        spawn_local((self.loader)(Rc::clone(self)));
    }

    fn trigger(self: &Rc<Self>, action: Action, form: Option<FormFields>) {
        let region = Rc::clone(self);
        spawn_local(async move {
            if dispatch(&region.ctx, &action, form).await == Outcome::Reload {
                region.reload();
            }
        });
    }

    fn mount(&self, nodes: &[Node]) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;

        let mut listeners = Vec::new();
        self.container.set_inner_html("");
        for node in nodes {
            let child = self.build(&document, node, &mut listeners)?;
            self.container.append_child(&child)?;
        }
        *self.listeners.borrow_mut() = listeners;
        Ok(())
    }

    fn build(
        &self,
        document: &web_sys::Document,
        node: &Node,
        listeners: &mut Vec<Closure<dyn FnMut(web_sys::Event)>>,
    ) -> Result<web_sys::Node, JsValue> {
        let element = match node {
            Node::Text(text) => return Ok(document.create_text_node(text).unchecked_into()),
            Node::Element(element) => element,
        };

        let el = document.create_element(&element.tag)?;
        for (name, value) in &element.attributes {
            el.set_attribute(name, value)?;
        }
        for listener in &element.listeners {
            let me = self.me.clone();
            let action = listener.action.clone();
            let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
                let form = if event.type_() == "submit" {
                    event.prevent_default();
                    event
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok())
                        .map(|f| form_fields(&f))
                } else {
                    None
                };
                if let Some(region) = me.upgrade() {
                    region.trigger(action.clone(), form);
                }
            });
            el.add_event_listener_with_callback(&listener.event, callback.as_ref().unchecked_ref())?;
            listeners.push(callback);
        }
        for child in &element.children {
            let child = self.build(document, child, listeners)?;
            el.append_child(&child)?;
        }

        Ok(el.into())
    }
}

impl Surface for Region {
    fn show(&self, state: ViewState) {
        if let Err(e) = self.mount(&state.into_nodes()) {
            web_sys::console::error_2(&JsValue::from_str("Failed to render view:"), &e);
        }
    }
}

/// Every named control of a form as a flat key/value map
fn form_fields(form: &web_sys::HtmlFormElement) -> FormFields {
    let mut fields = FormFields::new();
    let Ok(data) = web_sys::FormData::new_with_form(form) else {
        return fields;
    };
    if let Ok(Some(entries)) = js_sys::try_iter(data.as_ref()) {
        for entry in entries.flatten() {
            let pair = js_sys::Array::from(&entry);
            if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
                fields.insert(key, value);
            }
        }
    }
    fields
}

/// Container rendered by a core view loader
#[component]
pub fn ViewRegion(
    loader: Loader,
    #[prop(optional)]
    id: &'static str,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext not provided");
    let node_ref = create_node_ref::<html::Div>();

    // Owns the region, and with it the DOM listeners, until the component
    // is disposed
    let mounted = store_value(None::<Rc<Region>>);

    node_ref.on_load(move |div| {
        let container: web_sys::Element = (*div).clone().unchecked_into();
        let region = Region::new(container, ctx, loader);
        if mounted.try_set_value(Some(Rc::clone(&region))).is_some() {
            return;
        }
        region.reload();
    });

    view! {
        <div class="region" id=id node_ref=node_ref />
    }
}
