// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Download trigger over host blob/object-URL primitives.
//!
//! Responsibilities:
//! - Wrap text in a typed blob and obtain a temporary URL for it.
//! - Activate a detached anchor pointing at that URL with a suggested file name.
//! - Release the URL once the download has been initiated, even on failure.

use anyhow::Result;

use crate::models::download::Download;

/// Host primitives needed to offer an in-memory file for download.
///
/// The host owns its object-URL registry; implementors only hand out and
/// release opaque URL strings.
pub trait BlobHost {
    /// Wrap `content` in a blob tagged with `mime` and return a temporary URL for it.
    fn create_object_url(&self, content: &str, mime: &str) -> Result<String>;

    /// Create a detached anchor for `href`, set its download name, and click it.
    fn activate_anchor(&self, href: &str, file_name: &str) -> Result<()>;

    /// Release a URL previously returned by [`BlobHost::create_object_url`].
    fn revoke_object_url(&self, url: &str) -> Result<()>;
}

/// Object URL that is revoked when dropped.
pub struct ObjectUrl<'h, H: BlobHost + ?Sized> {
    host: &'h H,
    url: String,
}

impl<'h, H: BlobHost + ?Sized> ObjectUrl<'h, H> {
    /// Allocate a blob for `content` and take ownership of its URL.
    pub fn create(host: &'h H, content: &str, mime: &str) -> Result<Self> {
        let url = host.create_object_url(content, mime)?;
        Ok(Self { host, url })
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl<H: BlobHost + ?Sized> Drop for ObjectUrl<'_, H> {
    fn drop(&mut self) {
        if let Err(err) = self.host.revoke_object_url(&self.url) {
            log::warn!("Failed to revoke object URL {}: {err:#}", self.url);
        }
    }
}

/// Offer `download` to the user through the host's save/download flow.
///
/// Exactly one blob and one URL are created per call. Whether the host
/// actually shows a prompt (or silently blocks it) is not observable here.
///
/// # Errors
///
/// Returns an error when the host cannot create the blob/URL or cannot
/// activate the anchor. The URL is still revoked in the latter case.
pub fn trigger_download<H: BlobHost + ?Sized>(host: &H, download: &Download) -> Result<()> {
    let url = ObjectUrl::create(host, &download.content, download.mime)?;
    host.activate_anchor(url.as_str(), &download.file_name)?;
    log::debug!(
        "Offered download {} ({} bytes, {})",
        download.file_name,
        download.len(),
        download.mime
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use anyhow::anyhow;

    use super::*;
    use crate::models::download::{BUILDING_FILE_NAME, YAML_MIME};

    /// Host call recorded by [`RecordingHost`].
    #[derive(Clone, Debug, PartialEq, Eq)]
    enum HostCall {
        Create { url: String, content: String, mime: String },
        Activate { href: String, file_name: String },
        Revoke { url: String },
    }

    /// In-memory host that records every primitive it is asked to perform.
    #[derive(Default)]
    struct RecordingHost {
        calls: RefCell<Vec<HostCall>>,
        fail_activation: bool,
        next_id: RefCell<u32>,
    }

    impl RecordingHost {
        fn calls(&self) -> Vec<HostCall> {
            self.calls.borrow().clone()
        }

        fn created(&self) -> Vec<(String, String, String)> {
            self.calls()
                .into_iter()
                .filter_map(|c| match c {
                    HostCall::Create { url, content, mime } => Some((url, content, mime)),
                    _ => None,
                })
                .collect()
        }
    }

    impl BlobHost for RecordingHost {
        fn create_object_url(&self, content: &str, mime: &str) -> Result<String> {
            let mut id = self.next_id.borrow_mut();
            *id += 1;
            let url = format!("blob:test/{}", *id);
            self.calls.borrow_mut().push(HostCall::Create {
                url: url.clone(),
                content: content.to_string(),
                mime: mime.to_string(),
            });
            Ok(url)
        }

        fn activate_anchor(&self, href: &str, file_name: &str) -> Result<()> {
            if self.fail_activation {
                return Err(anyhow!("synthetic click unavailable"));
            }
            self.calls.borrow_mut().push(HostCall::Activate {
                href: href.to_string(),
                file_name: file_name.to_string(),
            });
            Ok(())
        }

        fn revoke_object_url(&self, url: &str) -> Result<()> {
            self.calls.borrow_mut().push(HostCall::Revoke {
                url: url.to_string(),
            });
            Ok(())
        }
    }

    #[test]
    fn warehouse_scenario_offers_exact_body() {
        let host = RecordingHost::default();
        trigger_download(&host, &Download::building_yaml("name: warehouse\n")).unwrap();

        assert_eq!(
            host.calls(),
            vec![
                HostCall::Create {
                    url: "blob:test/1".into(),
                    content: "name: warehouse\n".into(),
                    mime: "text/yaml".into(),
                },
                HostCall::Activate {
                    href: "blob:test/1".into(),
                    file_name: "warehouse.building.yaml".into(),
                },
                HostCall::Revoke {
                    url: "blob:test/1".into()
                },
            ]
        );
    }

    #[test]
    fn blob_content_is_byte_identical() {
        let text = "levels:\n  L1:\n    name: \"Étage 1\"\n\ttab\r\n";
        let host = RecordingHost::default();
        trigger_download(&host, &Download::building_yaml(text)).unwrap();

        let created = host.created();
        assert_eq!(created.len(), 1, "exactly one blob per call");
        assert_eq!(created[0].1.as_bytes(), text.as_bytes());
        assert_eq!(created[0].2, YAML_MIME);
    }

    #[test]
    fn empty_content_still_triggers_one_download() {
        let host = RecordingHost::default();
        trigger_download(&host, &Download::building_yaml("")).unwrap();

        let activations = host
            .calls()
            .into_iter()
            .filter(|c| matches!(c, HostCall::Activate { .. }))
            .count();
        assert_eq!(activations, 1);
        assert_eq!(host.created()[0].1, "");
    }

    #[test]
    fn repeated_calls_use_independent_urls() {
        let host = RecordingHost::default();
        let download = Download::building_yaml("name: warehouse\n");
        trigger_download(&host, &download).unwrap();
        trigger_download(&host, &download).unwrap();

        let created = host.created();
        assert_eq!(created.len(), 2);
        assert_ne!(created[0].0, created[1].0);

        let revoked: Vec<String> = host
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                HostCall::Revoke { url } => Some(url),
                _ => None,
            })
            .collect();
        assert_eq!(revoked, vec![created[0].0.clone(), created[1].0.clone()]);
    }

    #[test]
    fn file_name_is_fixed_regardless_of_content() {
        for content in ["", "a", "name: other.building.yaml\n"] {
            let host = RecordingHost::default();
            trigger_download(&host, &Download::building_yaml(content)).unwrap();
            assert!(host.calls().contains(&HostCall::Activate {
                href: "blob:test/1".into(),
                file_name: BUILDING_FILE_NAME.into(),
            }));
        }
    }

    #[test]
    fn failed_activation_propagates_and_still_revokes() {
        let host = RecordingHost {
            fail_activation: true,
            ..Default::default()
        };
        let err = trigger_download(&host, &Download::building_yaml("x")).unwrap_err();

        assert!(err.to_string().contains("synthetic click"));
        assert_eq!(
            host.calls().last(),
            Some(&HostCall::Revoke {
                url: "blob:test/1".into()
            })
        );
    }

    #[test]
    fn guard_revokes_on_drop() {
        let host = RecordingHost::default();
        {
            let url = ObjectUrl::create(&host, "a: 1\n", YAML_MIME).unwrap();
            assert_eq!(url.as_str(), "blob:test/1");
            assert_eq!(host.calls().len(), 1);
        }
        assert_eq!(
            host.calls().last(),
            Some(&HostCall::Revoke {
                url: "blob:test/1".into()
            })
        );
    }
}
