// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Browser backend: blobs, object URLs, and synthetic anchor clicks via `web-sys`.

use anyhow::{Result, anyhow};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Blob, BlobPropertyBag, Document, HtmlAnchorElement, Url, Window};

use crate::logic::trigger::{BlobHost, trigger_download};
use crate::models::download::Download;

/// Delay before an object URL is released. Some browsers fetch the blob
/// asynchronously after `click()`, so release must wait well past the click.
const REVOKE_DELAY_MS: i32 = 40_000;

/// [`BlobHost`] backed by the page's `window` and `document`.
pub struct BrowserHost {
    window: Window,
    document: Document,
}

impl BrowserHost {
    /// Resolve the global window and its document.
    ///
    /// # Errors
    ///
    /// Fails outside a document context (for example inside a worker).
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| anyhow!("No global window available"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow!("Window has no document"))?;
        Ok(Self { window, document })
    }

    /// Blob holding `content` as UTF-8, tagged with `mime`.
    fn make_blob(content: &str, mime: &str) -> Result<Blob> {
        let parts = js_sys::Array::of1(&JsValue::from_str(content));
        let options = BlobPropertyBag::new();
        options.set_type(mime);
        Blob::new_with_str_sequence_and_options(&parts, &options)
            .map_err(|err| js_error("Failed to create blob", err))
    }

    /// Detached anchor pointing at `href` with a suggested download name.
    fn make_anchor(&self, href: &str, file_name: &str) -> Result<HtmlAnchorElement> {
        let anchor: HtmlAnchorElement = self
            .document
            .create_element("a")
            .map_err(|err| js_error("Failed to create anchor element", err))?
            .dyn_into()
            .map_err(|_| anyhow!("Created element is not an anchor"))?;
        anchor.set_href(href);
        anchor.set_download(file_name);
        Ok(anchor)
    }
}

impl BlobHost for BrowserHost {
    fn create_object_url(&self, content: &str, mime: &str) -> Result<String> {
        let blob = Self::make_blob(content, mime)?;
        Url::create_object_url_with_blob(&blob)
            .map_err(|err| js_error("Failed to create object URL", err))
    }

    fn activate_anchor(&self, href: &str, file_name: &str) -> Result<()> {
        self.make_anchor(href, file_name)?.click();
        Ok(())
    }

    fn revoke_object_url(&self, url: &str) -> Result<()> {
        let url = url.to_owned();
        let revoke = Closure::once_into_js(move || {
            if let Err(err) = Url::revoke_object_url(&url) {
                log::warn!("Failed to revoke object URL {url}: {err:?}");
            }
        });
        self.window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                revoke.unchecked_ref(),
                REVOKE_DELAY_MS,
            )
            .map_err(|err| js_error("Failed to schedule object URL release", err))?;
        Ok(())
    }
}

/// Offer `download` through the current page.
pub fn offer(download: &Download) -> Result<()> {
    let host = BrowserHost::from_window()?;
    trigger_download(&host, download)
}

/// JS entry point: offer `data` as `warehouse.building.yaml` (`text/yaml`).
///
/// Throws a JS `Error` when the page lacks the required primitives.
#[wasm_bindgen(js_name = download_building_yaml)]
pub fn download_building_yaml_js(data: &str) -> Result<(), JsValue> {
    offer(&Download::building_yaml(data))
        .map_err(|err| js_sys::Error::new(&format!("{err:#}")).into())
}

/// Attach a browser exception to an `anyhow` error.
fn js_error(context: &str, err: JsValue) -> anyhow::Error {
    match err.as_string() {
        Some(message) => anyhow!("{context}: {message}"),
        None => anyhow!("{context}: {err:?}"),
    }
}
