use log::debug;

use crate::config::{self, NavItem};

/// The slice of the viewport a section has to reach before it counts as
/// the one being read. Exclusions are fractions of the viewport height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObserverBand {
    pub top_exclusion: f64,
    pub bottom_exclusion: f64,
    pub threshold: f64,
}

impl Default for ObserverBand {
    fn default() -> Self {
        Self {
            top_exclusion: config::BAND_TOP_EXCLUSION,
            bottom_exclusion: config::BAND_BOTTOM_EXCLUSION,
            threshold: config::BAND_THRESHOLD,
        }
    }
}

impl ObserverBand {
    /// CSS margin handed to the browser's IntersectionObserver.
    pub fn root_margin(&self) -> String {
        format!(
            "-{}% 0px -{}% 0px",
            percent(self.top_exclusion),
            percent(self.bottom_exclusion)
        )
    }
}

fn percent(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

/// One visibility report for an anchor, as delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct IntersectionSignal {
    pub anchor_id: String,
    pub is_intersecting: bool,
    pub ratio: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationState {
    active_section_id: String,
}

impl NavigationState {
    pub fn active_section_id(&self) -> &str {
        &self.active_section_id
    }
}

/// Section in focus before any signal arrives: the first navigation target.
pub fn default_section_id(entries: &[NavItem]) -> &'static str {
    entries.first().map(NavItem::target_id).unwrap_or("hero")
}

/// Navigation entries paired with whether each carries the active marker.
/// Only the entry targeting `active_section_id` is marked.
pub fn nav_markers<'a>(
    entries: &'a [NavItem],
    active_section_id: &'a str,
) -> impl Iterator<Item = (&'a NavItem, bool)> + 'a {
    entries
        .iter()
        .map(move |entry| (entry, entry.target_id() == active_section_id))
}

/// Tracks which navigation target is currently in focus.
///
/// Anchors are registered once, signals are then delivered in batches, and
/// `stop` ends the subscription. Only registered anchors can become active,
/// and a stopped observer ignores everything it is handed.
#[derive(Clone, Debug)]
pub struct SectionObserver {
    entries: Vec<NavItem>,
    observed: Vec<&'static str>,
    state: NavigationState,
    stopped: bool,
}

impl SectionObserver {
    pub fn new(entries: &[NavItem]) -> Self {
        Self {
            entries: entries.to_vec(),
            observed: Vec::new(),
            state: NavigationState {
                active_section_id: default_section_id(entries).to_string(),
            },
            stopped: false,
        }
    }

    /// Starts watching `anchor_id`. Returns false for ids no navigation entry
    /// targets and for anchors already registered.
    pub fn register(&mut self, anchor_id: &str) -> bool {
        if self.stopped || self.observed.iter().any(|id| *id == anchor_id) {
            return false;
        }
        match self.entries.iter().find(|entry| entry.target_id() == anchor_id) {
            Some(entry) => {
                self.observed.push(entry.target_id());
                true
            }
            None => false,
        }
    }

    /// Registers every navigation target present in `rendered`. Targets the
    /// page never rendered are left out.
    pub fn register_rendered(&mut self, rendered: &[&str]) -> usize {
        let targets: Vec<&'static str> = self.entries.iter().map(|entry| entry.target_id()).collect();
        let mut registered = 0;
        for target in targets {
            if !rendered.contains(&target) {
                debug!("No anchor rendered for #{}, skipping", target);
                continue;
            }
            if self.register(target) {
                registered += 1;
            }
        }
        registered
    }

    pub fn observed(&self) -> &[&'static str] {
        &self.observed
    }

    /// Applies a batch of signals. Within a batch the last intersecting
    /// signal wins. Returns the new active id when it changed.
    pub fn deliver(&mut self, batch: &[IntersectionSignal]) -> Option<&str> {
        if self.stopped {
            return None;
        }
        let previous = self.state.active_section_id.clone();
        for signal in batch.iter().filter(|signal| signal.is_intersecting) {
            if let Some(id) = self.observed.iter().find(|id| **id == signal.anchor_id) {
                debug!("#{} entered the band (ratio {:.2})", id, signal.ratio);
                self.state.active_section_id = id.to_string();
            }
        }
        if self.state.active_section_id == previous {
            return None;
        }
        debug!("Active section: {} -> {}", previous, self.state.active_section_id);
        Some(self.state.active_section_id.as_str())
    }

    pub fn active_section_id(&self) -> &str {
        self.state.active_section_id()
    }

    /// Ends observation. Returns true only for the call that actually stopped it.
    pub fn stop(&mut self) -> bool {
        if self.stopped {
            return false;
        }
        self.stopped = true;
        true
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}
