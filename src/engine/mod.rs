//! Toggle-driven random draw state machine.
//!
//! The engine owns the run state and produces the number stream. Draws are
//! pushed to a [`DisplaySink`]; the engine never touches UI state itself.
//!
//! # Threading
//!
//! The continuous loop and the preview animation run as tokio tasks. The
//! running flag is an `AtomicBool`, and every emission happens while holding
//! the `displayed` lock after re-checking that flag (or the preview's cancel
//! token). Once [`PickerEngine::stop`] returns, the stopped loop can no longer
//! emit, so the settled `Result` update is always the last one.

mod draw;
mod sink;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::log;

use draw::draw;

pub use draw::Exclusions;
pub use sink::{DisplaySink, DisplayStyle, DisplayUpdate};

#[cfg(test)]
pub use sink::testing;

/// Pause between frames of the continuous draw loop.
pub const DEFAULT_TICK: Duration = Duration::from_millis(10);

/// Number of intermediate frames shown by the preview animation.
pub const PREVIEW_FRAMES: usize = 3;

/// Pause between preview frames.
pub const PREVIEW_PAUSE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    Idle,
    Running,
}

/// What a call to [`PickerEngine::toggle`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Continuous loop started
    Started,
    /// Loop stopped; carries the settled value, if anything was drawn yet
    Stopped(Option<u64>),
    /// Instant mode produced a single draw
    Drew(u64),
}

struct Shared<S> {
    running: AtomicBool,
    displayed: Mutex<Option<u64>>,
    sink: S,
}

impl<S: DisplaySink> Shared<S> {
    fn displayed(&self) -> MutexGuard<'_, Option<u64>> {
        self.displayed.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    /// Emit a loop frame unless the engine was stopped or this loop was
    /// cancelled in the meantime.
    fn emit_running_frame(&self, token: &CancellationToken, value: u64) -> bool {
        let mut displayed = self.displayed();
        if token.is_cancelled() || !self.is_running() {
            return false;
        }
        *displayed = Some(value);
        self.sink.emit(DisplayUpdate::normal(value));
        true
    }

    /// Emit `update` unless `token` was cancelled in the meantime.
    fn emit_unless_cancelled(&self, token: &CancellationToken, update: DisplayUpdate) -> bool {
        let mut displayed = self.displayed();
        if token.is_cancelled() {
            return false;
        }
        *displayed = Some(update.value);
        self.sink.emit(update);
        true
    }

    fn emit(&self, update: DisplayUpdate) {
        let mut displayed = self.displayed();
        *displayed = Some(update.value);
        self.sink.emit(update);
    }
}

pub struct PickerEngine<S: DisplaySink> {
    shared: Arc<Shared<S>>,
    instant_mode: bool,
    tick: Duration,
    exclusions: Arc<Exclusions>,
    loop_token: Option<CancellationToken>,
    preview_token: Option<CancellationToken>,
}

impl<S: DisplaySink> PickerEngine<S> {
    pub fn new(sink: S) -> Self {
        Self {
            shared: Arc::new(Shared {
                running: AtomicBool::new(false),
                displayed: Mutex::new(None),
                sink,
            }),
            instant_mode: false,
            tick: DEFAULT_TICK,
            exclusions: Arc::new(Exclusions::default()),
            loop_token: None,
            preview_token: None,
        }
    }

    /// Set the pause between continuous frames. Takes effect on the next start.
    pub fn with_tick(mut self, tick: Duration) -> Self {
        self.tick = tick.max(Duration::from_millis(1));
        self
    }

    pub fn with_exclusions(mut self, exclusions: Exclusions) -> Self {
        self.exclusions = Arc::new(exclusions);
        self
    }

    pub fn state(&self) -> PickerState {
        if self.shared.is_running() {
            PickerState::Running
        } else {
            PickerState::Idle
        }
    }

    pub fn is_running(&self) -> bool {
        self.state() == PickerState::Running
    }

    pub fn instant_mode(&self) -> bool {
        self.instant_mode
    }

    pub fn set_instant_mode(&mut self, enabled: bool) {
        self.instant_mode = enabled;
    }

    pub fn exclusions(&self) -> &Exclusions {
        &self.exclusions
    }

    /// Last value handed to the sink, if any.
    #[cfg(test)]
    pub fn displayed(&self) -> Option<u64> {
        *self.shared.displayed()
    }

    /// Stop when running; otherwise draw once (instant mode) or start the loop.
    pub fn toggle(&mut self, upper_bound: u64) -> ToggleOutcome {
        if self.is_running() {
            ToggleOutcome::Stopped(self.stop())
        } else if self.instant_mode {
            ToggleOutcome::Drew(self.instant_draw(upper_bound))
        } else {
            self.start_continuous(upper_bound);
            ToggleOutcome::Started
        }
    }

    /// Start the repeating draw loop. No-op while already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_continuous(&mut self, upper_bound: u64) {
        if self.is_running() {
            return;
        }
        self.cancel_preview();
        self.warn_if_fully_excluded(upper_bound);

        self.shared.running.store(true, Ordering::Release);
        let token = CancellationToken::new();
        self.loop_token = Some(token.clone());

        log::log_event(&format!(
            "continuous draw started (1..={}, tick {}ms)",
            upper_bound,
            self.tick.as_millis()
        ));

        tokio::spawn(run_continuous(
            Arc::clone(&self.shared),
            token,
            upper_bound,
            Arc::clone(&self.exclusions),
            self.tick,
        ));
    }

    /// Stop the loop and settle the displayed value in the result style.
    pub fn stop(&mut self) -> Option<u64> {
        if let Some(token) = self.loop_token.take() {
            token.cancel();
        }
        self.cancel_preview();

        let displayed = self.shared.displayed();
        self.shared.running.store(false, Ordering::Release);
        let settled = *displayed;
        if let Some(value) = settled {
            self.shared.sink.emit(DisplayUpdate::result(value));
        }
        drop(displayed);

        match settled {
            Some(value) => log::log_event(&format!("stopped on {}", value)),
            None => log::log_event("stopped before any draw"),
        }
        settled
    }

    /// One draw, emitted straight away in the result style.
    pub fn instant_draw(&mut self, upper_bound: u64) -> u64 {
        self.cancel_preview();
        self.warn_if_fully_excluded(upper_bound);

        let value = draw(&mut rand::thread_rng(), upper_bound, &self.exclusions);
        self.shared.emit(DisplayUpdate::result(value));
        log::log_event(&format!("instant draw {} (1..={})", value, upper_bound));
        value
    }

    /// Reveal a draw after a short preview animation.
    ///
    /// Shows [`PREVIEW_FRAMES`] intermediate values [`PREVIEW_PAUSE`] apart,
    /// then the returned final value in the result style. The frames are
    /// scheduled on a tokio task; the caller is never blocked. Returns `None`
    /// without doing anything while the continuous loop runs.
    pub fn show_preview(&mut self, upper_bound: u64) -> Option<u64> {
        if self.is_running() {
            return None;
        }
        self.cancel_preview();
        self.warn_if_fully_excluded(upper_bound);

        let mut rng = rand::thread_rng();
        let frames: Vec<u64> = (0..PREVIEW_FRAMES)
            .map(|_| draw(&mut rng, upper_bound, &self.exclusions))
            .collect();
        let final_value = draw(&mut rng, upper_bound, &self.exclusions);

        let token = CancellationToken::new();
        self.preview_token = Some(token.clone());
        tokio::spawn(run_preview(Arc::clone(&self.shared), token, frames, final_value));

        log::log_event(&format!("preview reveal of {} (1..={})", final_value, upper_bound));
        Some(final_value)
    }

    fn cancel_preview(&mut self) {
        if let Some(token) = self.preview_token.take() {
            token.cancel();
        }
    }

    fn warn_if_fully_excluded(&self, upper_bound: u64) {
        if !self.exclusions.is_empty() && self.exclusions.covers(upper_bound) {
            log::log(&format!(
                "Warning: every id in 1..={} is excluded, drawing from the full range",
                upper_bound
            ));
        }
    }
}

impl<S: DisplaySink> Drop for PickerEngine<S> {
    fn drop(&mut self) {
        self.shared.running.store(false, Ordering::Release);
        if let Some(token) = self.loop_token.take() {
            token.cancel();
        }
        self.cancel_preview();
    }
}

async fn run_continuous<S: DisplaySink>(
    shared: Arc<Shared<S>>,
    token: CancellationToken,
    upper_bound: u64,
    exclusions: Arc<Exclusions>,
    tick: Duration,
) {
    let mut rng = StdRng::from_entropy();
    let mut ticker = tokio::time::interval(tick);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = token.cancelled() => break,
            _ = ticker.tick() => {
                let value = draw(&mut rng, upper_bound, &exclusions);
                if !shared.emit_running_frame(&token, value) {
                    break;
                }
            }
        }
    }
}

async fn run_preview<S: DisplaySink>(
    shared: Arc<Shared<S>>,
    token: CancellationToken,
    frames: Vec<u64>,
    final_value: u64,
) {
    for value in frames {
        if !shared.emit_unless_cancelled(&token, DisplayUpdate::normal(value)) {
            return;
        }
        tokio::select! {
            _ = token.cancelled() => return,
            _ = tokio::time::sleep(PREVIEW_PAUSE) => {}
        }
    }
    shared.emit_unless_cancelled(&token, DisplayUpdate::result(final_value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::testing::RecordingSink;

    fn engine() -> (PickerEngine<RecordingSink>, RecordingSink) {
        let sink = RecordingSink::default();
        (PickerEngine::new(sink.clone()), sink)
    }

    #[tokio::test]
    async fn test_toggle_twice_settles_in_result_style() {
        let (mut engine, sink) = engine();

        assert_eq!(engine.toggle(45), ToggleOutcome::Started);
        assert_eq!(engine.state(), PickerState::Running);

        tokio::time::sleep(Duration::from_millis(60)).await;

        let outcome = engine.toggle(45);
        assert_eq!(engine.state(), PickerState::Idle);
        let ToggleOutcome::Stopped(Some(value)) = outcome else {
            panic!("unexpected outcome {:?}", outcome);
        };
        assert!((1..=45).contains(&value));

        let last = sink.last().unwrap();
        assert_eq!(last, DisplayUpdate::result(value));
        assert!(sink.len() >= 2);
        assert!(
            sink.updates()[..sink.len() - 1]
                .iter()
                .all(|u| u.style == DisplayStyle::Normal && (1..=45).contains(&u.value))
        );
    }

    #[tokio::test]
    async fn test_no_frames_after_stop() {
        let (mut engine, sink) = engine();
        engine.start_continuous(10);
        tokio::time::sleep(Duration::from_millis(40)).await;
        engine.stop();

        let count = sink.len();
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(sink.len(), count);
        assert_eq!(sink.last().unwrap().style, DisplayStyle::Result);
    }

    #[tokio::test]
    async fn test_instant_mode_draws_once_without_running() {
        let (mut engine, sink) = engine();
        engine.set_instant_mode(true);

        let outcome = engine.toggle(10);
        assert_eq!(engine.state(), PickerState::Idle);
        let ToggleOutcome::Drew(value) = outcome else {
            panic!("unexpected outcome {:?}", outcome);
        };
        assert!((1..=10).contains(&value));

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(sink.updates(), vec![DisplayUpdate::result(value)]);
        assert_eq!(engine.state(), PickerState::Idle);
    }

    #[tokio::test]
    async fn test_instant_draw_of_one_is_one() {
        let (mut engine, _sink) = engine();
        for _ in 0..50 {
            assert_eq!(engine.instant_draw(1), 1);
        }
    }

    #[tokio::test]
    async fn test_start_while_running_is_noop() {
        let (mut engine, sink) = engine();
        engine.start_continuous(5);
        engine.start_continuous(5);
        assert!(engine.is_running());

        tokio::time::sleep(Duration::from_millis(30)).await;
        engine.stop();
        let count = sink.len();
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(sink.len(), count);
    }

    #[tokio::test]
    async fn test_stop_before_any_draw() {
        let (mut engine, sink) = engine();
        assert_eq!(engine.stop(), None);
        assert_eq!(sink.len(), 0);
        assert_eq!(engine.state(), PickerState::Idle);
    }

    #[tokio::test]
    async fn test_upper_bound_one_always_draws_one() {
        let (mut engine, sink) = engine();
        engine.start_continuous(1);
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(engine.stop(), Some(1));
        assert!(sink.updates().iter().all(|u| u.value == 1));
    }

    #[tokio::test]
    async fn test_preview_emits_frames_then_result() {
        let (mut engine, sink) = engine();
        let final_value = engine.show_preview(45).unwrap();

        tokio::time::sleep(PREVIEW_PAUSE * (PREVIEW_FRAMES as u32) + Duration::from_millis(100)).await;

        let updates = sink.updates();
        assert_eq!(updates.len(), PREVIEW_FRAMES + 1);
        assert!(updates[..PREVIEW_FRAMES].iter().all(|u| u.style == DisplayStyle::Normal));
        assert_eq!(updates[PREVIEW_FRAMES], DisplayUpdate::result(final_value));
        assert_eq!(engine.displayed(), Some(final_value));
    }

    #[tokio::test]
    async fn test_preview_cancelled_by_instant_draw() {
        let (mut engine, sink) = engine();
        engine.show_preview(45).unwrap();
        tokio::time::sleep(Duration::from_millis(20)).await;

        let value = engine.instant_draw(45);
        tokio::time::sleep(PREVIEW_PAUSE * (PREVIEW_FRAMES as u32 + 1)).await;

        assert_eq!(sink.last(), Some(DisplayUpdate::result(value)));
    }

    #[tokio::test]
    async fn test_preview_ignored_while_running() {
        let (mut engine, _sink) = engine();
        engine.start_continuous(45);
        assert_eq!(engine.show_preview(45), None);
        engine.stop();
    }

    #[tokio::test]
    async fn test_cancelled_loop_cannot_emit_after_restart() {
        let sink = RecordingSink::default();
        let shared = Shared {
            running: AtomicBool::new(true),
            displayed: Mutex::new(None),
            sink: sink.clone(),
        };
        let stale = CancellationToken::new();
        stale.cancel();

        assert!(!shared.emit_running_frame(&stale, 7));
        assert_eq!(sink.len(), 0);
        assert_eq!(*shared.displayed(), None);

        assert!(shared.emit_running_frame(&CancellationToken::new(), 7));
        assert_eq!(sink.updates(), vec![DisplayUpdate::normal(7)]);
    }

    #[tokio::test]
    async fn test_restart_only_shows_new_loop_frames() {
        let (mut engine, sink) = engine();
        engine.start_continuous(45);
        tokio::time::sleep(Duration::from_millis(30)).await;
        engine.stop();
        engine.start_continuous(1);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(engine.stop(), Some(1));

        let updates = sink.updates();
        let first_result = updates
            .iter()
            .position(|u| u.style == DisplayStyle::Result)
            .unwrap();
        assert!(updates[first_result + 1..].iter().all(|u| u.value == 1));
    }

    #[tokio::test]
    async fn test_exclusions_respected_by_loop() {
        let sink = RecordingSink::default();
        let mut engine = PickerEngine::new(sink.clone()).with_exclusions(Exclusions::new([1, 2]));
        engine.start_continuous(3);
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert_eq!(engine.stop(), Some(3));
        assert!(sink.updates().iter().all(|u| u.value == 3));
    }
}
