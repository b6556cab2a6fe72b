use std::sync::mpsc;

use crate::train::events::TrainEvent;

/// Consumer of the events an optimizer emits.
///
/// The optimizers never print; whatever a caller wants to show (console
/// text, JSON lines, a channel to another thread) lives behind this trait.
pub trait Reporter<P> {
    fn report(&mut self, event: TrainEvent<P>);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl<P> Reporter<P> for NullReporter {
    fn report(&mut self, _event: TrainEvent<P>) {}
}

/// Collects events in order, mostly useful in tests.
impl<P> Reporter<P> for Vec<TrainEvent<P>> {
    fn report(&mut self, event: TrainEvent<P>) {
        self.push(event);
    }
}

/// Forwards events over a channel. A dropped receiver does not stop the
/// run; the remaining events are simply lost.
impl<P> Reporter<P> for mpsc::Sender<TrainEvent<P>> {
    fn report(&mut self, event: TrainEvent<P>) {
        let _ = self.send(event);
    }
}

/// Adapts a closure into a reporter.
pub struct FnReporter<F>(pub F);

impl<P, F> Reporter<P> for FnReporter<F>
where
    F: FnMut(TrainEvent<P>),
{
    fn report(&mut self, event: TrainEvent<P>) {
        (self.0)(event)
    }
}

impl<P, R> Reporter<P> for &mut R
where
    R: Reporter<P> + ?Sized,
{
    fn report(&mut self, event: TrainEvent<P>) {
        (**self).report(event)
    }
}
