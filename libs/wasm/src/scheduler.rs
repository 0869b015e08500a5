//! # Render Scheduler
//!
//! Coalesces render requests. Camera `change` and window `resize` events can
//! fire many times per frame; only the first one after a frame should ask the
//! browser for an animation frame.

use wasm_bindgen::prelude::*;

/// Whether a frame has been requested.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderState {
    /// No frame is scheduled.
    #[default]
    Idle,
    /// A frame is scheduled and has not started yet.
    Pending,
}

/// Two-state render request coalescer.
///
/// # Examples
/// ```
/// use globe_wasm::RenderScheduler;
///
/// let mut scheduler = RenderScheduler::new();
/// assert!(scheduler.request());
/// assert!(!scheduler.request());
/// scheduler.begin_frame();
/// assert!(scheduler.request());
/// ```
///
/// ```no_run
/// // In JavaScript:
/// // const scheduler = new RenderScheduler();
/// // const onChange = () => { if (scheduler.request()) requestAnimationFrame(render); };
/// // function render() {
/// //   scheduler.begin_frame();
/// //   renderer.render(scene, camera);
/// // }
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone, Default)]
pub struct RenderScheduler {
    state: RenderState,
}

#[wasm_bindgen]
impl RenderScheduler {
    /// Creates an idle scheduler.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a render request. Returns true when the caller must schedule
    /// a frame, false when one is already pending.
    pub fn request(&mut self) -> bool {
        match self.state {
            RenderState::Idle => {
                self.state = RenderState::Pending;
                true
            }
            RenderState::Pending => false,
        }
    }

    /// Marks the start of a frame; later requests schedule a new one.
    pub fn begin_frame(&mut self) {
        self.state = RenderState::Idle;
    }

    /// Current state.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// True while a frame is scheduled.
    pub fn is_pending(&self) -> bool {
        self.state == RenderState::Pending
    }
}
