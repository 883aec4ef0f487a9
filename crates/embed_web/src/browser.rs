use std::cell::RefCell;

use embed_engine::{CrossOriginDenied, DocumentPort, DomEdit, WindowPort};
use embed_host::{Integration, MessagingPolicy};
use serde_json::Value;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, MessageEvent, Window};

thread_local! {
    static INTEGRATION: RefCell<Option<Integration<BrowserWindow, BrowserDocument>>> =
        const { RefCell::new(None) };
}

/// A [`WindowPort`] over the live browser window.
struct BrowserWindow {
    window: Window,
}

impl WindowPort for BrowserWindow {
    fn is_top_level(&self) -> Result<bool, CrossOriginDenied> {
        match self.window.top() {
            Ok(Some(top)) => Ok(js_sys::Object::is(
                self.window.as_ref(),
                top.as_ref(),
            )),
            // No top reference, or reading it threw across origins.
            Ok(None) | Err(_) => Err(CrossOriginDenied),
        }
    }

    fn has_parent(&self) -> bool {
        matches!(self.window.parent(), Ok(Some(_)))
    }

    fn post_to_parent(&mut self, message: Value, target_origin: &str) {
        let parent = match self.window.parent() {
            Ok(Some(parent)) => parent,
            _ => return,
        };
        let encoded = match js_sys::JSON::parse(&message.to_string()) {
            Ok(encoded) => encoded,
            Err(_) => return,
        };
        let _ = parent.post_message(&encoded, target_origin);
    }

    fn navigate(&mut self, href: &str) {
        let _ = self.window.location().set_href(href);
    }
}

/// A [`DocumentPort`] over the live DOM.
struct BrowserDocument {
    document: Document,
}

impl DocumentPort for BrowserDocument {
    fn snapshot(&self) -> String {
        self.document
            .document_element()
            .map(|root| root.outer_html())
            .unwrap_or_default()
    }

    fn apply(&mut self, edits: &[DomEdit]) {
        for edit in edits {
            apply_edit(&self.document, edit);
        }
    }
}

fn apply_edit(document: &Document, edit: &DomEdit) {
    let element = match document.query_selector(edit.selector()) {
        Ok(Some(element)) => element,
        _ => return,
    };
    match edit {
        DomEdit::Remove { .. } => element.remove(),
        DomEdit::SetInlineStyle {
            property, value, ..
        } => {
            let style = match element.get_attribute("style") {
                Some(existing) if !existing.trim().is_empty() => {
                    format!("{existing}; {property}: {value}")
                }
                _ => format!("{property}: {value}"),
            };
            let _ = element.set_attribute("style", &style);
        }
        DomEdit::RemoveClasses { classes, .. } => {
            if let Some(existing) = element.get_attribute("class") {
                let kept = existing
                    .split_whitespace()
                    .filter(|class| !classes.iter().any(|removed| removed == class))
                    .collect::<Vec<_>>()
                    .join(" ");
                let _ = element.set_attribute("class", &kept);
            }
        }
    }
}

fn with_integration(f: impl FnOnce(&mut Integration<BrowserWindow, BrowserDocument>)) {
    INTEGRATION.with(|slot| {
        if let Some(integration) = slot.borrow_mut().as_mut() {
            f(integration);
        }
    });
}

/// Entry point: wires the shim to the page lifecycle.
///
/// No configuration is required by page authors; the default messaging
/// policy reproduces the deployment where the parent owns the embedding.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let integration = Integration::new(
        BrowserWindow {
            window: window.clone(),
        },
        BrowserDocument {
            document: document.clone(),
        },
        MessagingPolicy::default(),
    );
    INTEGRATION.with(|slot| *slot.borrow_mut() = Some(integration));

    let on_ready = Closure::<dyn FnMut()>::new(|| {
        with_integration(|integration| integration.on_ready());
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    // The listener lives as long as the page does.
    on_ready.forget();

    let on_message = Closure::<dyn FnMut(MessageEvent)>::new(|event: MessageEvent| {
        let data = js_sys::JSON::stringify(&event.data())
            .ok()
            .and_then(|text| text.as_string())
            .and_then(|text| serde_json::from_str::<Value>(&text).ok());
        let data = match data {
            Some(data) => data,
            None => return,
        };
        let origin = event.origin();
        with_integration(|integration| integration.on_message(Some(origin.as_str()), &data));
    });
    window.add_event_listener_with_callback("message", on_message.as_ref().unchecked_ref())?;
    on_message.forget();

    Ok(())
}
