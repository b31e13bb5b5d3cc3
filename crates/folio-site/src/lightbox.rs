//! Gallery lightbox state machine.
//!
//! Holds the items of the gallery currently on screen, the index of the
//! image shown in the overlay, and whether the overlay is open. Keyboard
//! events are ignored while the overlay is closed so arrow keys keep their
//! meaning for the rest of the page.

use serde::Serialize;

use crate::gallery::MediaItem;

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    ArrowLeft,
    ArrowRight,
    Other,
}

/// Input to [`LightboxController::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxEvent {
    /// A thumbnail with this `data-index` was activated.
    ThumbnailActivated(usize),
    Key(Key),
    /// The backdrop or close affordance was activated.
    BackdropDismiss,
    NextButton,
    PrevButton,
}

/// What the open overlay shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightboxView {
    pub index: usize,
    pub src: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default)]
pub struct LightboxController {
    items: Vec<MediaItem>,
    current: usize,
    open: bool,
}

impl LightboxController {
    #[must_use]
    pub fn new(items: Vec<MediaItem>) -> Self {
        Self {
            items,
            current: 0,
            open: false,
        }
    }

    /// Replace the gallery; the overlay closes and the index resets.
    pub fn set_items(&mut self, items: Vec<MediaItem>) {
        *self = Self::new(items);
    }

    #[must_use]
    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the overlay on `index`.
    ///
    /// An index outside the gallery leaves the state unchanged.
    pub fn open(&mut self, index: usize) -> Option<LightboxView> {
        if index >= self.items.len() {
            return None;
        }
        self.current = index;
        self.open = true;
        self.view()
    }

    /// Hide the overlay; items and index are kept for the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advance to the next item, wrapping to the first.
    pub fn next(&mut self) {
        if !self.items.is_empty() {
            self.current = (self.current + 1) % self.items.len();
        }
    }

    /// Step back to the previous item, wrapping to the last.
    pub fn prev(&mut self) {
        if !self.items.is_empty() {
            let len = self.items.len();
            self.current = (self.current + len - 1) % len;
        }
    }

    /// The overlay contents while open.
    #[must_use]
    pub fn view(&self) -> Option<LightboxView> {
        if !self.open {
            return None;
        }
        let item = self.items.get(self.current)?;
        Some(LightboxView {
            index: self.current,
            src: item.src().to_owned(),
            caption: item.desc.clone().unwrap_or_default(),
        })
    }

    /// Apply an input event and return the resulting overlay view.
    pub fn handle(&mut self, event: LightboxEvent) -> Option<LightboxView> {
        match event {
            LightboxEvent::ThumbnailActivated(index) => return self.open(index),
            LightboxEvent::BackdropDismiss => self.close(),
            LightboxEvent::NextButton => self.next(),
            LightboxEvent::PrevButton => self.prev(),
            LightboxEvent::Key(_) if !self.open => {}
            LightboxEvent::Key(Key::Escape) => self.close(),
            LightboxEvent::Key(Key::ArrowRight) => self.next(),
            LightboxEvent::Key(Key::ArrowLeft) => self.prev(),
            LightboxEvent::Key(Key::Other) => {}
        }
        self.view()
    }
}
