use crossterm::event::{poll, Event, KeyEvent, KeyEventKind, MouseEvent};
use tokio::time::{Duration, Instant};

pub struct EventHandler {
    tick_rate: Duration,
    last_render_time: Option<Instant>,
    dirty: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick_rate(Duration::from_millis(crate::constants::TICK_RATE_DEFAULT_MS))
    }

    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            last_render_time: None,
            dirty: true,
        }
    }

    pub async fn next_event(&mut self) -> anyhow::Result<EventType> {
        // Check for terminal events without blocking first
        if poll(Duration::from_millis(0))? {
            return Ok(Self::classify(crossterm::event::read()?));
        }

        // If no immediate event, wait a bit and return tick
        tokio::time::sleep(self.tick_rate).await;
        Ok(EventType::Tick)
    }

    /// Map a raw terminal event onto the events the UI reacts to.
    ///
    /// Key releases and repeats are dropped so each press is delivered once.
    pub fn classify(event: Event) -> EventType {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => EventType::Key(key),
            Event::Mouse(mouse) => EventType::Mouse(mouse),
            Event::Resize(w, h) => EventType::Resize(w, h),
            _ => EventType::Other,
        }
    }

    /// Note an event the UI handled; anything but idle ticks needs a redraw
    pub fn record(&mut self, event: &EventType) {
        if !matches!(event, EventType::Tick | EventType::Other) {
            self.dirty = true;
        }
    }

    /// Record that a frame was just drawn
    pub fn mark_rendered(&mut self) {
        self.last_render_time = Some(Instant::now());
        self.dirty = false;
    }

    /// Get the time since last render for frame timing
    pub fn time_since_last_render(&self) -> Option<Duration> {
        self.last_render_time.map(|t| t.elapsed())
    }

    /// Redraw only when something changed, at most once per frame (~60 FPS)
    pub fn should_render(&self) -> bool {
        self.dirty
            && self
                .time_since_last_render()
                .map_or(true, |elapsed| elapsed >= Duration::from_millis(16))
    }
}

#[derive(Debug, Clone)]
pub enum EventType {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    Other,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
