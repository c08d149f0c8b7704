//! Auto-advancing index for the featured project showcase.
//!
//! [`CarouselState`] holds the active index and wraps it on every tick. [`Autoplay`]
//! owns the repeating task that drives those ticks: it is started through a
//! [`Scheduler`] and the task is cancelled when the handle is stopped or dropped,
//! so a discarded showcase can never be ticked again.

use std::{fmt, time::Duration};

/// Time between automatic advances.
pub const ROTATE_INTERVAL: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CarouselState {
    active_index: usize,
    len: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Self {
        Self::starting_at(len, 0)
    }

    pub fn starting_at(len: usize, index: usize) -> Self {
        let active_index = if len == 0 { 0 } else { index % len };
        Self { active_index, len }
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Moves to the next item, wrapping to 0 after the last one. No-op when empty.
    pub fn advance(&mut self) {
        if self.is_empty() {
            return;
        }
        self.active_index = (self.active_index + 1) % self.len;
    }

    /// Whether the slide at `index` is the one on show.
    pub fn is_active(&self, index: usize) -> bool {
        !self.is_empty() && self.active_index == index
    }

    pub fn active<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.active_index)
    }
}

pub trait ScheduledTask {
    fn cancel(&mut self);
}

/// Something that can run a callback on a fixed period until the returned task is cancelled.
pub trait Scheduler {
    type Task: ScheduledTask;
    type Error: fmt::Debug;

    fn repeat<F>(&self, period: Duration, tick: F) -> Result<Self::Task, Self::Error>
    where
        F: Fn() + Clone + 'static;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Mounted,
    Unmounted,
}

pub struct Autoplay<T: ScheduledTask> {
    task: Option<T>,
}

impl<T: ScheduledTask> Autoplay<T> {
    /// Starts ticking every [`ROTATE_INTERVAL`]. Nothing is mounted if the scheduler refuses.
    pub fn start<S, F>(scheduler: &S, tick: F) -> Result<Self, S::Error>
    where
        S: Scheduler<Task = T>,
        F: Fn() + Clone + 'static,
    {
        let task = scheduler.repeat(ROTATE_INTERVAL, move || {
            log::trace!("carousel tick");
            tick();
        })?;
        log::debug!("carousel autoplay started ({}ms)", ROTATE_INTERVAL.as_millis());
        Ok(Self { task: Some(task) })
    }

    pub fn lifecycle(&self) -> Lifecycle {
        if self.task.is_some() {
            Lifecycle::Mounted
        } else {
            Lifecycle::Unmounted
        }
    }

    /// Cancels the task. Once unmounted the autoplay stays unmounted.
    pub fn stop(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.cancel();
            log::debug!("carousel autoplay stopped");
        }
    }
}

impl<T: ScheduledTask> Drop for Autoplay<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
