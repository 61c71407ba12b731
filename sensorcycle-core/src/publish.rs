//! Sample delivery
//!
//! The cycle hands every converted sample to a [`Publisher`] and forgets it.
//! There is no acknowledgment and no backpressure path back into the tick: a
//! publisher that cannot keep up drops data on its own side.
//!
//! ## Sharing Between Cycles
//!
//! Each cycle owns its publisher. When the barometer and inertial cycles run
//! on separate scheduler slots and must feed one sink, that sink has to
//! serialize delivery itself. With `std`, `&Mutex<P>` and `Arc<Mutex<P>>`
//! are publishers that do exactly that.
//!
//! ## Provided Sinks
//!
//! - [`SampleLog`]: bounded in-memory history, oldest entries evicted
//! - [`QueuePublisher`]: producer end of a lock-free SPSC queue, for handing
//!   samples to another execution context; counts what it had to drop

use heapless::{spsc::Producer, Deque};

use crate::channel::{ChannelId, PhysicalSample};

/// Receiver of timestamped physical samples
pub trait Publisher {
    /// Deliver one sample; must not block
    fn publish(&mut self, channel: ChannelId, sample: PhysicalSample);
}

impl<P: Publisher + ?Sized> Publisher for &mut P {
    fn publish(&mut self, channel: ChannelId, sample: PhysicalSample) {
        (**self).publish(channel, sample);
    }
}

#[cfg(feature = "std")]
impl<P: Publisher> Publisher for &std::sync::Mutex<P> {
    fn publish(&mut self, channel: ChannelId, sample: PhysicalSample) {
        let mut sink = self.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        sink.publish(channel, sample);
    }
}

#[cfg(feature = "std")]
impl<P: Publisher> Publisher for std::sync::Arc<std::sync::Mutex<P>> {
    fn publish(&mut self, channel: ChannelId, sample: PhysicalSample) {
        let mut sink = self.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        sink.publish(channel, sample);
    }
}

/// Bounded history of published samples
///
/// Keeps the most recent `N` samples across all channels.
#[derive(Debug, Clone)]
pub struct SampleLog<const N: usize> {
    entries: Deque<(ChannelId, PhysicalSample), N>,
    published: u64,
}

impl<const N: usize> SampleLog<N> {
    /// Empty log
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
            published: 0,
        }
    }

    /// Samples delivered since creation, including evicted ones
    pub fn published(&self) -> u64 {
        self.published
    }

    /// Samples currently retained
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no sample is retained
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Retained samples, oldest first
    pub fn iter(&self) -> impl Iterator<Item = &(ChannelId, PhysicalSample)> {
        self.entries.iter()
    }

    /// Most recent sample for `channel`
    pub fn latest(&self, channel: ChannelId) -> Option<&PhysicalSample> {
        self.entries
            .iter()
            .rev()
            .find(|(c, _)| *c == channel)
            .map(|(_, s)| s)
    }

    /// Remove and return the oldest retained sample
    pub fn pop(&mut self) -> Option<(ChannelId, PhysicalSample)> {
        self.entries.pop_front()
    }

    /// Drop every retained sample; `published` is kept
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<const N: usize> Default for SampleLog<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Publisher for SampleLog<N> {
    fn publish(&mut self, channel: ChannelId, sample: PhysicalSample) {
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        // Cannot fail: a slot was freed above
        let _ = self.entries.push_back((channel, sample));
        self.published = self.published.saturating_add(1);
    }
}

/// Producer end of an SPSC sample queue
///
/// ```rust
/// use heapless::spsc::Queue;
/// use sensorcycle_core::publish::{QueuePublisher, SampleEntry};
///
/// let mut queue: Queue<SampleEntry, 8> = Queue::new();
/// let (producer, mut consumer) = queue.split();
/// let publisher = QueuePublisher::new(producer);
/// // hand `publisher` to a cycle, drain `consumer` elsewhere
/// # drop(publisher);
/// assert!(consumer.dequeue().is_none());
/// ```
pub struct QueuePublisher<'a, const N: usize> {
    producer: Producer<'a, SampleEntry, N>,
    dropped: u64,
}

/// Item carried by [`QueuePublisher`]
pub type SampleEntry = (ChannelId, PhysicalSample);

impl<'a, const N: usize> QueuePublisher<'a, N> {
    /// Wrap the producer end of a split queue
    pub fn new(producer: Producer<'a, SampleEntry, N>) -> Self {
        Self { producer, dropped: 0 }
    }

    /// Samples discarded because the consumer fell behind
    pub fn dropped(&self) -> u64 {
        self.dropped
    }
}

impl<const N: usize> Publisher for QueuePublisher<'_, N> {
    fn publish(&mut self, channel: ChannelId, sample: PhysicalSample) {
        if self.producer.enqueue((channel, sample)).is_err() {
            self.dropped = self.dropped.saturating_add(1);
        }
    }
}
