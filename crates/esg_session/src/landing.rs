//! crates/esg_session/src/landing.rs
//! Landing controller: turns a card activation into a relay write plus a
//! navigation request. Anything that does not validate is a silent no-op.

use std::time::Duration;

use esg_core::{ProfileStore, SelectionRelay, TopicId};
use esg_report::report_href;
use tracing::debug;

use crate::{Navigation, Surface, NAV_DELAY};

/// How a card was activated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trigger {
    Click,
    /// Key name as reported by the host (`"Enter"`, `" "`, `"Tab"`, ...).
    Key(String),
}

impl Trigger {
    /// Click, Enter and Space activate; other keys do not.
    pub fn activates(&self) -> bool {
        match self {
            Trigger::Click => true,
            Trigger::Key(k) => matches!(k.as_str(), "Enter" | " " | "Space" | "Spacebar"),
        }
    }
}

/// One activation event on a topic card. `topic` is the card's `data-topic`
/// attribute, absent when the card has none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activation {
    pub topic: Option<String>,
    pub trigger: Trigger,
}

impl Activation {
    pub fn click(topic: &str) -> Self {
        Self { topic: Some(topic.to_string()), trigger: Trigger::Click }
    }

    pub fn key(topic: &str, key: &str) -> Self {
        Self { topic: Some(topic.to_string()), trigger: Trigger::Key(key.to_string()) }
    }
}

/// Loading overlay state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overlay {
    pub visible: bool,
}

pub struct LandingController<'a, R: SelectionRelay> {
    store: &'a ProfileStore,
    relay: R,
    overlay: Option<Overlay>,
    delay: Duration,
}

impl<'a, R: SelectionRelay> LandingController<'a, R> {
    /// Controller for a page that has a loading overlay.
    pub fn new(store: &'a ProfileStore, relay: R) -> Self {
        Self { store, relay, overlay: Some(Overlay::default()), delay: NAV_DELAY }
    }

    /// Page without the overlay region.
    pub fn without_overlay(mut self) -> Self {
        self.overlay = None;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn relay(&self) -> &R {
        &self.relay
    }

    pub fn into_relay(self) -> R {
        self.relay
    }

    /// Handle one activation. `None` means nothing happened.
    pub fn activate(&mut self, a: &Activation) -> Option<Navigation> {
        if !a.trigger.activates() {
            return None;
        }
        let Some(raw) = a.topic.as_deref() else {
            debug!("activation without topic attribute");
            return None;
        };
        if !self.store.contains(raw) {
            debug!(topic = raw, "activation for unknown topic ignored");
            return None;
        }
        let topic: TopicId = raw.parse().ok()?;

        if let Err(e) = self.relay.store_selection(&topic) {
            debug!(topic = %topic, error = %e, "selection not stored; staying on landing");
            return None;
        }
        if let Some(o) = self.overlay.as_mut() {
            o.visible = true;
        }

        Some(Navigation {
            target: Surface::Report,
            href: report_href(topic.as_str()),
            topic,
            delay: self.delay,
        })
    }
}
