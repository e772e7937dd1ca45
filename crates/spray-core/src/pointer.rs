use glam::Vec2;
use instant::Instant;

/// Current and previous pointer samples of the active stroke.
///
/// Positions are surface-local CSS pixels; the caller subtracts the surface's
/// on-screen offset. Both samples are present while spraying and both are
/// cleared on pointer-up.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    spraying: bool,
    current: Option<Vec2>,
    previous: Option<Vec2>,
    stroke_started: Option<Instant>,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_spraying(&self) -> bool {
        self.spraying
    }

    #[inline]
    pub fn current(&self) -> Option<Vec2> {
        self.current
    }

    #[inline]
    pub fn previous(&self) -> Option<Vec2> {
        self.previous
    }

    pub fn stroke_started(&self) -> Option<Instant> {
        self.stroke_started
    }

    pub fn on_down(&mut self, pos: Vec2) {
        self.spraying = true;
        self.current = Some(pos);
        self.previous = Some(pos);
        self.stroke_started = Some(Instant::now());
    }

    /// Returns false when the move was ignored because no stroke is active.
    pub fn on_move(&mut self, pos: Vec2) -> bool {
        if !self.spraying {
            return false;
        }
        self.previous = self.current;
        self.current = Some(pos);
        true
    }

    /// Ends the stroke and returns its start time, if one was active.
    pub fn on_up(&mut self) -> Option<Instant> {
        self.spraying = false;
        self.current = None;
        self.previous = None;
        self.stroke_started.take()
    }

    /// After a synthesis pass the current sample becomes the previous one, so
    /// a pointer held still reads as stationary on the next frame.
    pub fn advance(&mut self) {
        if self.current.is_some() {
            self.previous = self.current;
        }
    }
}
