//! Cooperative frame scheduling.
//!
//! The scheduler holds at most one pending frame request. Hosts provide the
//! actual refresh primitive (`requestAnimationFrame` in the browser, a manual
//! step in headless use) through [`FrameHost`].

/// Identifier of a pending frame request, as issued by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

pub trait FrameHost {
    /// Ask for one callback on the next refresh. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SchedulerState {
    #[default]
    Idle,
    Active(FrameHandle),
}

#[derive(Clone, Debug, Default)]
pub struct FrameScheduler {
    state: SchedulerState,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, SchedulerState::Active(_))
    }

    /// Idle -> Active. A no-op while already active, so repeated pointer-down
    /// events never start a second loop.
    pub fn start<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.is_active() {
            return false;
        }
        match host.request_frame() {
            Some(handle) => {
                self.state = SchedulerState::Active(handle);
                true
            }
            None => {
                log::warn!("[spray] host refused frame request");
                false
            }
        }
    }

    /// Called at the top of a frame callback: the pending request has fired.
    /// Returns false if no frame was expected (stale callback after a stop).
    pub fn begin_frame(&mut self) -> bool {
        let expected = self.is_active();
        self.state = SchedulerState::Idle;
        expected
    }

    /// Tail of a frame callback: queue the next frame while spraying.
    pub fn end_frame<H: FrameHost + ?Sized>(&mut self, keep_going: bool, host: &mut H) {
        if keep_going {
            self.start(host);
        } else {
            self.state = SchedulerState::Idle;
        }
    }

    /// Cancel any pending frame and force Idle.
    pub fn stop<H: FrameHost + ?Sized>(&mut self, host: &mut H) {
        if let SchedulerState::Active(handle) = std::mem::take(&mut self.state) {
            host.cancel_frame(handle);
        }
    }
}

/// Headless host: frames are fired explicitly by the owner's loop.
#[derive(Clone, Debug, Default)]
pub struct ManualFrameHost {
    next_id: u64,
    pending: Option<FrameHandle>,
    requested: usize,
    cancelled: usize,
}

impl ManualFrameHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Total frame requests issued.
    pub fn requested(&self) -> usize {
        self.requested
    }

    pub fn cancelled(&self) -> usize {
        self.cancelled
    }

    /// Consume the pending request, as a display refresh would.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameHost for ManualFrameHost {
    fn request_frame(&mut self) -> Option<FrameHandle> {
        self.next_id += 1;
        self.requested += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        Some(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
