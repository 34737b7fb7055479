use tokio::sync::mpsc;

use crate::config::Config;
use crate::engine::{DisplayStyle, DisplayUpdate, PickerEngine, ToggleOutcome};
use crate::events::Action;
use crate::log;
use crate::range::RangeConfig;
use crate::tui::interaction::InteractionRegistry;

/// Display sink handed to the engine: updates travel back to the event loop.
pub type DisplaySender = mpsc::UnboundedSender<DisplayUpdate>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputMode {
    Normal,    // Picking
    EditRange, // Typing a new upper bound
    Help,      // Help popup showing all hotkeys
    About,     // About popup
}

/// A rectangular screen region for mouse hit testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickRegion {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl ClickRegion {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && x < self.x.saturating_add(self.width)
            && y >= self.y
            && y < self.y.saturating_add(self.height)
    }
}

impl From<ratatui::layout::Rect> for ClickRegion {
    fn from(rect: ratatui::layout::Rect) -> Self {
        Self::new(rect.x, rect.y, rect.width, rect.height)
    }
}

/// What the number display currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Display {
    /// `None` until the first draw; rendered as "0"
    pub value: Option<u64>,
    pub style: DisplayStyle,
}

pub struct App {
    pub range: RangeConfig,
    pub engine: PickerEngine<DisplaySender>,
    pub display: Display,
    pub input_mode: InputMode,
    /// Range field text while editing
    pub range_input: String,
    pub always_on_top: bool,
    pub should_quit: bool,
    /// Mouse regions registered by the last render
    pub interactions: InteractionRegistry,
}

impl App {
    pub fn new(config: &Config, sink: DisplaySender) -> Self {
        let mut engine = PickerEngine::new(sink)
            .with_tick(config.tick())
            .with_exclusions(config.exclusions());
        engine.set_instant_mode(config.instant_mode());

        Self {
            range: config.range(),
            engine,
            display: Display::default(),
            input_mode: InputMode::Normal,
            range_input: String::new(),
            always_on_top: config.always_on_top(),
            should_quit: false,
            interactions: InteractionRegistry::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.engine.is_running()
    }

    /// Label for the pick/stop button
    pub fn toggle_label(&self) -> &'static str {
        if self.is_running() { "Stop!" } else { "Pick!" }
    }

    /// Apply an update produced by the engine. Only called on the event loop.
    pub fn apply_display_update(&mut self, update: DisplayUpdate) {
        self.display = Display {
            value: Some(update.value),
            style: update.style,
        };
    }

    /// Apply a user action
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Toggle => self.toggle(),
            Action::Preview => self.preview(),
            Action::IncrementRange => self.increment_range(),
            Action::DecrementRange => self.decrement_range(),
            Action::EditRange => self.begin_range_edit(),
            Action::RangeInputChar(c) => self.range_input.push(c),
            Action::RangeInputBackspace => {
                self.range_input.pop();
            }
            Action::CommitRange => self.commit_range_edit(),
            Action::CancelRangeEdit => self.cancel_range_edit(),
            Action::ToggleInstantMode => self.toggle_instant_mode(),
            Action::ToggleAlwaysOnTop => self.toggle_always_on_top(),
            Action::OpenHelp => self.input_mode = InputMode::Help,
            Action::OpenAbout => self.input_mode = InputMode::About,
            Action::ClosePopup => self.input_mode = InputMode::Normal,
        }
    }

    pub fn toggle(&mut self) {
        if self.input_mode == InputMode::EditRange {
            self.commit_range_edit();
        }
        match self.engine.toggle(self.range.upper_bound()) {
            ToggleOutcome::Started => {
                // The first frame will overwrite the value; drop the emphasis now
                self.display.style = DisplayStyle::Normal;
            }
            ToggleOutcome::Stopped(_) | ToggleOutcome::Drew(_) => {}
        }
    }

    pub fn preview(&mut self) {
        if self.engine.show_preview(self.range.upper_bound()).is_some() {
            self.display.style = DisplayStyle::Normal;
        }
    }

    pub fn increment_range(&mut self) {
        self.range.increment();
        self.sync_range_input();
    }

    pub fn decrement_range(&mut self) {
        self.range.decrement();
        self.sync_range_input();
    }

    pub fn begin_range_edit(&mut self) {
        self.range_input = self.range.upper_bound().to_string();
        self.input_mode = InputMode::EditRange;
    }

    pub fn commit_range_edit(&mut self) {
        let bound = self.range.set_from_text(&self.range_input);
        log::log_event(&format!("range set to 1..={} from {:?}", bound, self.range_input));
        self.range_input = bound.to_string();
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_range_edit(&mut self) {
        self.range_input = self.range.upper_bound().to_string();
        self.input_mode = InputMode::Normal;
    }

    pub fn toggle_instant_mode(&mut self) {
        let enabled = !self.engine.instant_mode();
        self.engine.set_instant_mode(enabled);
        log::log_event(&format!("instant mode {}", on_off(enabled)));
    }

    pub fn toggle_always_on_top(&mut self) {
        self.always_on_top = !self.always_on_top;
        log::log_event(&format!("always on top {}", on_off(self.always_on_top)));
    }

    /// Text shown in the range field
    pub fn range_field_text(&self) -> String {
        if self.input_mode == InputMode::EditRange {
            self.range_input.clone()
        } else {
            self.range.upper_bound().to_string()
        }
    }

    fn sync_range_input(&mut self) {
        if self.input_mode == InputMode::EditRange {
            self.range_input = self.range.upper_bound().to_string();
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
