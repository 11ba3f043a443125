//! Deferred work driven once per tick: named timers and resumable steps.
//!
//! Both queues are generic over the context handed to their callbacks, usually
//! the [`World`](crate::object::World).

use crate::utils::*;

pub type TimerCallback<C> = Box<dyn FnOnce(&mut C)>;

struct NamedTimer<C> {
    name: String,
    deadline: Float,
    callback: TimerCallback<C>,
}

/// callbacks fired once accumulated game time passes their deadline
pub struct Timers<C> {
    elapsed: Float,
    timers: Vec<NamedTimer<C>>,
}

impl<C> Default for Timers<C> {
    fn default() -> Self {
        Timers {
            elapsed: 0.0,
            timers: Vec::new(),
        }
    }
}

impl<C> Timers<C> {
    pub fn new() -> Timers<C> {
        Timers::default()
    }

    /// game time accumulated by `update`
    pub fn elapsed(&self) -> Float {
        self.elapsed
    }

    /// schedules `callback` in `delay` seconds, replacing a timer of the same name
    pub fn add<F>(&mut self, name: impl Into<String>, delay: Float, callback: F)
    where
        F: FnOnce(&mut C) + 'static,
    {
        let name = name.into();
        if self.remove(&name) {
            log::debug!("timer {} rescheduled", name);
        }
        self.timers.push(NamedTimer {
            name,
            deadline: self.elapsed + delay,
            callback: Box::new(callback),
        });
    }

    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.name != name);
        before != self.timers.len()
    }

    pub fn is_pending(&self, name: &str) -> bool {
        self.timers.iter().any(|t| t.name == name)
    }

    /// time left until `name` fires
    pub fn remaining(&self, name: &str) -> Option<Float> {
        self.timers
            .iter()
            .find(|t| t.name == name)
            .map(|t| (t.deadline - self.elapsed).max(0.0))
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// advances game time and fires due timers in deadline order
    pub fn update(&mut self, dt: Float, ctx: &mut C) {
        self.elapsed += dt;
        let elapsed = self.elapsed;
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.timers)
            .into_iter()
            .partition(|t| t.deadline <= elapsed);
        self.timers = pending;
        due.sort_by(|a, b| a.deadline.partial_cmp(&b.deadline).unwrap_or(std::cmp::Ordering::Equal));
        for timer in due {
            log::trace!("timer {} fired", timer.name);
            (timer.callback)(ctx);
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Step {
    Continue,
    Done,
}

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CoroutineId(u64);

pub type StepFn<C> = Box<dyn FnMut(&mut C, Float) -> Step>;

/// step functions resumed once per tick until they report `Step::Done`
pub struct Coroutines<C> {
    next_id: u64,
    running: Vec<(CoroutineId, StepFn<C>)>,
}

impl<C> Default for Coroutines<C> {
    fn default() -> Self {
        Coroutines {
            next_id: 0,
            running: Vec::new(),
        }
    }
}

impl<C> Coroutines<C> {
    pub fn new() -> Coroutines<C> {
        Coroutines::default()
    }

    pub fn start<F>(&mut self, step: F) -> CoroutineId
    where
        F: FnMut(&mut C, Float) -> Step + 'static,
    {
        let id = CoroutineId(self.next_id);
        self.next_id += 1;
        self.running.push((id, Box::new(step)));
        id
    }

    pub fn stop(&mut self, id: CoroutineId) -> bool {
        let before = self.running.len();
        self.running.retain(|(running, _)| *running != id);
        before != self.running.len()
    }

    pub fn is_running(&self, id: CoroutineId) -> bool {
        self.running.iter().any(|(running, _)| *running == id)
    }

    pub fn len(&self) -> usize {
        self.running.len()
    }

    pub fn is_empty(&self) -> bool {
        self.running.is_empty()
    }

    /// runs every step once, in start order
    pub fn update(&mut self, dt: Float, ctx: &mut C) {
        self.running
            .retain_mut(|(_, step)| step(ctx, dt) == Step::Continue);
    }
}

/// a step that waits `delay` seconds, runs `action` once and finishes
pub fn after<C, F>(delay: Float, action: F) -> impl FnMut(&mut C, Float) -> Step
where
    F: FnOnce(&mut C),
{
    let mut left = delay;
    let mut action = Some(action);
    move |ctx: &mut C, dt: Float| {
        left -= dt;
        if left > 0.0 {
            return Step::Continue;
        }
        if let Some(action) = action.take() {
            action(ctx);
        }
        Step::Done
    }
}

/// a step that calls `tick` every update for `duration` seconds with the
/// progress in `[0, 1]`
pub fn over<C, F>(duration: Float, mut tick: F) -> impl FnMut(&mut C, Float) -> Step
where
    F: FnMut(&mut C, Float),
{
    let mut t = 0.0;
    move |ctx: &mut C, dt: Float| {
        t += dt;
        if duration <= 0.0 || t >= duration {
            tick(ctx, 1.0);
            Step::Done
        } else {
            tick(ctx, t / duration);
            Step::Continue
        }
    }
}
