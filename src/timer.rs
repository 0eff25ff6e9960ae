use std::thread;
use std::time::Duration;

/// Defers the next generation by a fixed delay.
pub trait Timer {
    fn wait(&mut self, delay: Duration);
}

/// Blocks the current thread for the whole delay
#[derive(Default, Debug, Clone, Copy)]
pub struct SleepTimer;

impl Timer for SleepTimer {
    fn wait(&mut self, delay: Duration) {
        thread::sleep(delay);
    }
}

impl<T: Timer + ?Sized> Timer for &mut T {
    fn wait(&mut self, delay: Duration) {
        (**self).wait(delay);
    }
}
