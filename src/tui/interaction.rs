//! Component-level mouse interactivity.
//!
//! Components register their interactive regions during render, and mouse
//! events are routed to the matching region.
//!
//! # Example
//!
//! ```ignore
//! // During render, register the pick button:
//! app.interactions.register_click("toggle_button", button_area.into(), Action::Toggle);
//! ```

use crate::app::ClickRegion;
use crate::events::Action;
use crate::log;

/// An interactive region that can respond to mouse events.
#[derive(Debug, Clone)]
pub struct InteractiveRegion {
    /// Identifier for this region (for debugging/logging)
    pub id: &'static str,

    pub bounds: ClickRegion,

    /// Action to dispatch on left click (None = not clickable)
    pub on_click: Option<Action>,

    /// Action to dispatch on scroll up (None = not scrollable)
    pub on_scroll_up: Option<Action>,

    /// Action to dispatch on scroll down (None = not scrollable)
    pub on_scroll_down: Option<Action>,

    /// Priority for overlapping regions (higher = checked first)
    /// Popups use this to capture clicks over the main window
    pub priority: i32,
}

impl InteractiveRegion {
    /// Create a new clickable region
    pub fn clickable(id: &'static str, bounds: ClickRegion, action: Action) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(action),
            on_scroll_up: None,
            on_scroll_down: None,
            priority: 0,
        }
    }

    /// Create a region that's both clickable and scrollable
    pub fn interactive(
        id: &'static str,
        bounds: ClickRegion,
        on_click: Action,
        scroll_up: Action,
        scroll_down: Action,
    ) -> Self {
        Self {
            id,
            bounds,
            on_click: Some(on_click),
            on_scroll_up: Some(scroll_up),
            on_scroll_down: Some(scroll_down),
            priority: 0,
        }
    }

    /// Set the priority (for builder pattern)
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        self.bounds.contains(x, y)
    }
}

/// Registry of interactive regions, rebuilt each frame during render.
#[derive(Debug, Default)]
pub struct InteractionRegistry {
    regions: Vec<InteractiveRegion>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self {
            regions: Vec::new(),
        }
    }

    /// Clear all registered regions (call at start of each render)
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn register(&mut self, region: InteractiveRegion) {
        self.regions.push(region);
    }

    /// Register a simple clickable region
    pub fn register_click(&mut self, id: &'static str, bounds: ClickRegion, action: Action) {
        self.register(InteractiveRegion::clickable(id, bounds, action));
    }

    /// Find the action to dispatch for a click at (x, y)
    pub fn handle_click(&self, x: u16, y: u16) -> Action {
        match self.find(x, y, |r| r.on_click) {
            Some((id, action)) => {
                log::log_event(&format!("click on {}", id));
                action
            }
            None => Action::None,
        }
    }

    /// Find the action to dispatch for a scroll up at (x, y)
    pub fn handle_scroll_up(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_scroll_up)
            .map_or(Action::None, |(_, action)| action)
    }

    /// Find the action to dispatch for a scroll down at (x, y)
    pub fn handle_scroll_down(&self, x: u16, y: u16) -> Action {
        self.find(x, y, |r| r.on_scroll_down)
            .map_or(Action::None, |(_, action)| action)
    }

    /// Id of the region a click at (x, y) would land on
    #[cfg(test)]
    pub fn region_at(&self, x: u16, y: u16) -> Option<&'static str> {
        self.find(x, y, |r| r.on_click).map(|(id, _)| id)
    }

    /// Highest-priority region containing the point that has a handler.
    fn find(
        &self,
        x: u16,
        y: u16,
        handler: impl Fn(&InteractiveRegion) -> Option<Action>,
    ) -> Option<(&'static str, Action)> {
        let mut candidates: Vec<_> = self
            .regions
            .iter()
            .filter(|r| r.contains(x, y) && handler(*r).is_some())
            .collect();

        candidates.sort_by(|a, b| b.priority.cmp(&a.priority));

        candidates
            .first()
            .and_then(|r| handler(*r).map(|action| (r.id, action)))
    }
}
