//! Leptos Autoplay Utilities
//!
//! Scheduled tasks tied to a component's lifetime:
//! - `use_autoplay`: repeating tick (carousel auto-advance)
//! - `Delay`: replaceable one-shot timer (banner delays, toast dismissal)
//!
//! Both are cancelled when the owning component is cleaned up.

use gloo_timers::callback::{Interval, Timeout};
use leptos::prelude::*;

/// Handle to a repeating task started by `use_autoplay`
#[derive(Clone, Copy)]
pub struct Autoplay {
    timer: StoredValue<Option<Interval>, LocalStorage>,
}

impl Autoplay {
    /// Stop ticking. Idempotent.
    pub fn cancel(&self) {
        self.timer.set_value(None);
    }
}

/// Call `on_tick` every `period_ms` until cancelled or the component is dropped.
///
/// A zero period never starts the timer.
pub fn use_autoplay(period_ms: u32, on_tick: impl FnMut() + 'static) -> Autoplay {
    let timer = if period_ms == 0 {
        None
    } else {
        Some(Interval::new(period_ms, on_tick))
    };
    let autoplay = Autoplay {
        timer: StoredValue::new_local(timer),
    };
    on_cleanup(move || autoplay.cancel());
    autoplay
}

/// One pending callback at a time; scheduling again replaces the previous one
#[derive(Clone, Copy)]
pub struct Delay {
    timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Delay {
    pub fn new() -> Self {
        let delay = Self {
            timer: StoredValue::new_local(None),
        };
        on_cleanup(move || delay.cancel());
        delay
    }

    /// Run `callback` after `millis`, cancelling anything already scheduled
    pub fn schedule(&self, millis: u32, callback: impl FnOnce() + 'static) {
        self.timer.set_value(Some(Timeout::new(millis, callback)));
    }

    pub fn cancel(&self) {
        self.timer.set_value(None);
    }
}

impl Default for Delay {
    fn default() -> Self {
        Self::new()
    }
}
