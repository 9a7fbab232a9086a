pub mod carousel;
pub mod keys;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use carousel::{Carousel, THUMBNAIL_LIMIT};
pub use keys::{Key, KeyListenerHost, KeyListeners, ListenerId};

use crate::catalog::{Catalog, MediaItem, MediaKind, SolutionRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ModalState {
    #[default]
    Closed,
    Open {
        solution_id: String,
    },
}

/// Modal detail view over one catalog record plus its media carousel.
///
/// While open, exactly one escape listener is held in the host; every way out
/// of the open state gives it back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailViewer {
    #[serde(default)]
    modal: ModalState,
    #[serde(default)]
    carousel: Carousel,
    #[serde(default)]
    escape_listener: Option<ListenerId>,
}

impl DetailViewer {
    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn is_open(&self) -> bool {
        matches!(self.modal, ModalState::Open { .. })
    }

    pub fn open_id(&self) -> Option<&str> {
        match &self.modal {
            ModalState::Open { solution_id } => Some(solution_id.as_str()),
            ModalState::Closed => None,
        }
    }

    pub fn escape_listener(&self) -> Option<ListenerId> {
        self.escape_listener
    }

    pub fn active<'a>(&self, catalog: &'a Catalog) -> Option<&'a SolutionRecord> {
        self.open_id().and_then(|id| catalog.by_id(id))
    }

    /// Opens `id`. Unknown ids leave the viewer untouched and return `false`.
    pub fn open(&mut self, catalog: &Catalog, id: &str, host: &mut impl KeyListenerHost) -> bool {
        let Some(record) = catalog.by_id(id) else {
            debug!("ignoring open for unknown solution id: {id}");
            return false;
        };
        if self.open_id() != Some(id) {
            self.carousel = Carousel::new(record.media.len());
            self.modal = ModalState::Open {
                solution_id: record.id.clone(),
            };
        }
        if self.escape_listener.is_none() {
            self.escape_listener = Some(host.install(Key::Escape));
        }
        true
    }

    pub fn close(&mut self, host: &mut impl KeyListenerHost) {
        if let Some(listener) = self.escape_listener.take() {
            host.remove(listener);
        }
        self.modal = ModalState::Closed;
    }

    /// Returns `true` when the key closed the viewer.
    pub fn handle_key(&mut self, key: Key, host: &mut impl KeyListenerHost) -> bool {
        if key == Key::Escape && self.is_open() {
            self.close(host);
            return true;
        }
        false
    }

    pub fn next(&mut self) {
        if self.is_open() {
            self.carousel.next();
        }
    }

    pub fn prev(&mut self) {
        if self.is_open() {
            self.carousel.prev();
        }
    }

    pub fn select(&mut self, position: usize) -> bool {
        self.is_open() && self.carousel.select(position)
    }

    /// Moves to any `position` in the media list: by thumbnail when it has
    /// one, otherwise by stepping forward. Out-of-range positions are ignored.
    pub fn seek(&mut self, position: usize) -> bool {
        if !self.is_open() || position >= self.carousel.len() {
            return false;
        }
        if self.carousel.select(position) {
            return true;
        }
        while self.carousel.index() != Some(position) {
            self.carousel.next();
        }
        true
    }

    /// Restores invariants on a viewer deserialized from an untrusted
    /// snapshot: unknown records close, the carousel is re-anchored, and the
    /// listener registration matches the open state.
    pub fn reconcile(&mut self, catalog: &Catalog, host: &mut KeyListeners) {
        let listener_valid = self.escape_listener.is_some_and(|id| host.contains(id));
        if !listener_valid {
            self.escape_listener = None;
        }
        match self.active(catalog).map(|r| r.media.len()) {
            Some(len) => {
                self.carousel.reconcile(len);
                if self.escape_listener.is_none() {
                    self.escape_listener = Some(host.install(Key::Escape));
                }
            }
            None => {
                self.close(host);
                self.carousel = Carousel::default();
            }
        }
    }
}

/// What the main media frame shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slide<'a> {
    Empty,
    Video { src: &'a str },
    Image { src: &'a str, alt: &'a str },
    Placeholder { title: &'a str, note: &'a str },
}

pub const EMPTY_MEDIA_MESSAGE: &str = "Add images/videos for this solution";

pub fn current_slide<'a>(record: &'a SolutionRecord, carousel: &Carousel) -> Slide<'a> {
    let Some(item) = carousel.index().and_then(|i| record.media.get(i)) else {
        return Slide::Empty;
    };
    match (item.kind, item.src.as_deref()) {
        (MediaKind::Video, Some(src)) => Slide::Video { src },
        (MediaKind::Image, Some(src)) => Slide::Image {
            src,
            alt: item.title.as_str(),
        },
        (kind, None) => Slide::Placeholder {
            title: item.title.as_str(),
            note: item.note.as_deref().unwrap_or(match kind {
                MediaKind::Video => "Video placeholder",
                MediaKind::Image => "Image placeholder",
            }),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail<'a> {
    pub position: usize,
    pub label: String,
    pub note: &'a str,
    pub active: bool,
}

pub fn thumbnails<'a>(record: &'a SolutionRecord, carousel: &Carousel) -> Vec<Thumbnail<'a>> {
    record
        .media
        .iter()
        .take(THUMBNAIL_LIMIT)
        .enumerate()
        .map(|(position, item): (usize, &'a MediaItem)| Thumbnail {
            position,
            label: format!("{} {}", item.kind.glyph(), item.title),
            note: item.note.as_deref().unwrap_or(item.kind.label()),
            active: carousel.index() == Some(position),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::records::build_solutions;

    fn catalog() -> &'static Catalog {
        Catalog::shared()
    }

    #[test]
    fn close_is_idempotent() {
        let mut host = KeyListeners::default();
        let mut viewer = DetailViewer::default();
        viewer.close(&mut host);
        viewer.close(&mut host);
        assert!(!viewer.is_open());
        assert_eq!(host.active_count(), 0);
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let mut host = KeyListeners::default();
        let mut viewer = DetailViewer::default();
        assert!(!viewer.open(catalog(), "nope", &mut host));
        assert!(!viewer.is_open());
        assert_eq!(host.active_count(), 0);
    }

    #[test]
    fn selecting_third_thumbnail_then_switching_resets() {
        let mut host = KeyListeners::default();
        let mut viewer = DetailViewer::default();
        assert!(viewer.open(catalog(), "ai-receptionist", &mut host));
        assert!(viewer.select(2));
        assert_eq!(viewer.carousel().index(), Some(2));

        assert!(viewer.open(catalog(), "whatsapp-busy-pack", &mut host));
        assert_eq!(viewer.carousel().index(), Some(0));
        assert_eq!(host.active_count(), 1);
    }

    #[test]
    fn reopening_same_record_keeps_position() {
        let mut host = KeyListeners::default();
        let mut viewer = DetailViewer::default();
        viewer.open(catalog(), "missed-call-recovery", &mut host);
        viewer.next();
        viewer.open(catalog(), "missed-call-recovery", &mut host);
        assert_eq!(viewer.carousel().index(), Some(1));
    }

    #[test]
    fn seek_reaches_positions_past_thumbnails() {
        let mut records = build_solutions();
        records[0].media = (0..10)
            .map(|i| MediaItem::placeholder(MediaKind::Image, &format!("Shot {i}"), "Screen"))
            .collect();
        let catalog = Catalog::from_records(records);
        let mut host = KeyListeners::default();
        let mut viewer = DetailViewer::default();
        viewer.open(&catalog, "missed-call-recovery", &mut host);
        assert!(!viewer.select(9));
        assert!(viewer.seek(9));
        assert_eq!(viewer.carousel().index(), Some(9));
        assert!(viewer.seek(3));
        assert_eq!(viewer.carousel().index(), Some(3));
        assert!(!viewer.seek(10));
        assert_eq!(viewer.carousel().index(), Some(3));
        assert_eq!(thumbnails(viewer.active(&catalog).expect("open"), viewer.carousel()).len(), 8);
    }

    #[test]
    fn listener_held_only_while_open() {
        let mut host = KeyListeners::default();
        let mut viewer = DetailViewer::default();
        for _ in 0..5 {
            viewer.open(catalog(), "ai-receptionist", &mut host);
            viewer.open(catalog(), "patient-checkins", &mut host);
            assert_eq!(host.active_count(), 1);
            assert!(host.is_listening(Key::Escape));
            viewer.close(&mut host);
            assert_eq!(host.active_count(), 0);
        }
    }

    #[test]
    fn escape_closes_and_releases() {
        let mut host = KeyListeners::default();
        let mut viewer = DetailViewer::default();
        viewer.open(catalog(), "ai-receptionist", &mut host);
        assert!(!viewer.handle_key(Key::Other, &mut host));
        assert!(viewer.is_open());
        assert!(viewer.handle_key(Key::Escape, &mut host));
        assert!(!viewer.is_open());
        assert_eq!(host.active_count(), 0);
        assert!(!viewer.handle_key(Key::Escape, &mut host));
    }

    #[test]
    fn empty_media_shows_placeholder_and_zero_counter() {
        let mut records = build_solutions();
        records[0].media.clear();
        let catalog = Catalog::from_records(records);
        let mut host = KeyListeners::default();
        let mut viewer = DetailViewer::default();
        viewer.open(&catalog, "missed-call-recovery", &mut host);
        viewer.next();
        viewer.prev();
        assert_eq!(viewer.carousel().index(), None);
        assert_eq!(viewer.carousel().counter_label(), "0/0");
        let record = viewer.active(&catalog).expect("open record");
        assert_eq!(current_slide(record, viewer.carousel()), Slide::Empty);
        assert!(thumbnails(record, viewer.carousel()).is_empty());
    }

    #[test]
    fn slide_variants_follow_media_kind_and_src() {
        let mut records = build_solutions();
        records[0].media[0] = records[0].media[0].clone().with_src("/media/flow.png");
        let record = &records[0];
        let mut carousel = Carousel::new(record.media.len());
        assert_eq!(
            current_slide(record, &carousel),
            Slide::Image {
                src: "/media/flow.png",
                alt: "Missed call → WhatsApp reply"
            }
        );
        carousel.select(2);
        assert_eq!(
            current_slide(record, &carousel),
            Slide::Placeholder {
                title: "Demo video",
                note: "30–60s walkthrough"
            }
        );
        let thumbs = thumbnails(record, &carousel);
        assert!(thumbs[2].active);
        assert_eq!(thumbs[2].label, "▶ Demo video");
    }

    #[test]
    fn reconcile_repairs_untrusted_state() {
        let mut host = KeyListeners::default();
        let mut viewer: DetailViewer = serde_json::from_value(serde_json::json!({
            "modal": {"state": "open", "solution_id": "ai-receptionist"},
            "carousel": {"index": 9, "len": 40},
            "escape_listener": 77
        }))
        .expect("deserialize viewer");
        viewer.reconcile(catalog(), &mut host);
        assert_eq!(viewer.carousel().index(), Some(0));
        assert_eq!(viewer.carousel().len(), 3);
        assert_eq!(host.active_count(), 1);

        let mut stale: DetailViewer = serde_json::from_value(serde_json::json!({
            "modal": {"state": "open", "solution_id": "retired-offer"}
        }))
        .expect("deserialize viewer");
        stale.reconcile(catalog(), &mut host);
        assert!(!stale.is_open());
    }
}
