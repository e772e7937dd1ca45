//! Drawing session: pointer samples, velocity trackers and frame scheduling
//! for one canvas.
//!
//! The session is owned by a single thread. Hosts forward pointer events to
//! `on_down`/`on_move`/`on_up` and call [`SpraySession::frame`] from the frame
//! callback they scheduled; headless callers may drive [`SpraySession::step`]
//! directly.

use crate::caps::CapProvider;
use crate::pointer::PointerTracker;
use crate::scheduler::{FrameHost, FrameScheduler};
use crate::surface::{RasterSurface, Rgba};
use crate::synth::{synthesize, FrameStats, StrokeFrame};
use crate::velocity::VelocityEstimator;
use glam::Vec2;
use rand::Rng;

pub struct SpraySession<R: Rng> {
    pointer: PointerTracker,
    velocity: VelocityEstimator,
    scheduler: FrameScheduler,
    color: Rgba,
    rng: R,
}

impl<R: Rng> SpraySession<R> {
    pub fn new(rng: R) -> Self {
        Self::with_color(rng, Rgba::WHITE)
    }

    pub fn with_color(rng: R, color: Rgba) -> Self {
        Self {
            pointer: PointerTracker::new(),
            velocity: VelocityEstimator::new(),
            scheduler: FrameScheduler::new(),
            color,
            rng,
        }
    }

    pub fn pointer(&self) -> &PointerTracker {
        &self.pointer
    }

    pub fn velocity(&self) -> &VelocityEstimator {
        &self.velocity
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    #[inline]
    pub fn is_spraying(&self) -> bool {
        self.pointer.is_spraying()
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    pub fn on_down<H: FrameHost + ?Sized>(&mut self, pos: Vec2, host: &mut H) {
        self.pointer.on_down(pos);
        log::debug!("[spray] stroke start at ({:.1},{:.1})", pos.x, pos.y);
        self.scheduler.start(host);
    }

    pub fn on_move(&mut self, pos: Vec2) -> bool {
        self.pointer.on_move(pos)
    }

    pub fn on_up<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        self.scheduler.stop(host);
        if let Some(started) = self.pointer.on_up() {
            log::debug!(
                "[spray] stroke end after {} ms",
                started.elapsed().as_millis()
            );
        }
    }

    /// Frame callback entry: synthesize once, then reschedule while spraying.
    pub fn frame<S, P, H>(&mut self, surface: &mut S, caps: &P, host: &mut H) -> Option<FrameStats>
    where
        S: RasterSurface + ?Sized,
        P: CapProvider + ?Sized,
        H: FrameHost + ?Sized,
    {
        if !self.scheduler.begin_frame() {
            return None;
        }
        let stats = self.step(surface, caps);
        self.scheduler.end_frame(self.pointer.is_spraying(), host);
        stats
    }

    /// One synthesis pass without scheduling.
    pub fn step<S, P>(&mut self, surface: &mut S, caps: &P) -> Option<FrameStats>
    where
        S: RasterSurface + ?Sized,
        P: CapProvider + ?Sized,
    {
        if !self.pointer.is_spraying() {
            return None;
        }
        let current = self.pointer.current()?;
        let previous = self.pointer.previous();
        let reading = self.velocity.observe(current, previous);
        let stats = synthesize(
            surface,
            &mut self.rng,
            caps.active_cap(),
            StrokeFrame {
                current,
                previous,
                reading,
            },
            self.color,
        );
        self.pointer.advance();
        Some(stats)
    }

    pub fn clear<S: RasterSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
    }

    /// Drop the stroke and velocity calibration, as a page reload would.
    pub fn reset<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        self.on_up(host);
        self.velocity = VelocityEstimator::new();
    }
}
