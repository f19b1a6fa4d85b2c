//! Change notification.
//!
//! Model records own a [`Notifier`], a list of [`Adapter`]s. Each mutation of a record builds a
//! [`Notification`] and hands it to the notifier, which delivers it synchronously to every
//! adapter in registration order.
//!
//! Delivery only happens when [notification is required](Notifier::notification_required), *i.e.*
//! when delivery is on and at least one adapter is registered. There is no value-equality check:
//! setting a feature to its current value still notifies.

prelude! {}

/// Kind of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A feature was set, unsetting a feature is a set to null.
    Set,
    /// Sent to an adapter when it is removed from a notifier.
    RemovingAdapter,
}

impl Display for Kind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Set => "SET".fmt(fmt),
            Self::RemovingAdapter => "REMOVING_ADAPTER".fmt(fmt),
        }
    }
}

/// A change event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Record that changed.
    pub notifier: ObjectId,
    pub kind: Kind,
    /// Feature that changed, `None` for notifications not about a feature.
    pub feature: Option<Feature>,
    pub old: Value,
    pub new: Value,
}

impl Notification {
    pub fn new_set(notifier: ObjectId, feature: Feature, old: Value, new: Value) -> Self {
        Self {
            notifier,
            kind: Kind::Set,
            feature: Some(feature),
            old,
            new,
        }
    }

    pub fn new_removing_adapter(notifier: ObjectId) -> Self {
        Self {
            notifier,
            kind: Kind::RemovingAdapter,
            feature: None,
            old: Value::Null,
            new: Value::Null,
        }
    }

    /// Feature ID of the notification, if any.
    pub fn feature_id(&self) -> Option<usize> {
        self.feature.map(Feature::id)
    }
}

impl Display for Notification {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{} on @{}", self.kind, self.notifier)?;
        if let Some(feature) = self.feature {
            write!(fmt, " `{}`: {} -> {}", feature, self.old, self.new)?;
        }
        Ok(())
    }
}

/// Receives notifications from the notifiers it is registered on.
pub trait Adapter {
    fn notify_changed(&mut self, notification: &Notification);
}

impl<F> Adapter for F
where
    F: FnMut(&Notification),
{
    fn notify_changed(&mut self, notification: &Notification) {
        self(notification)
    }
}

/// A registered adapter.
struct Slot {
    /// Registration rank, delivery follows it.
    rank: u64,
    adapter: Box<dyn Adapter>,
}

/// Adapter list with a delivery flag.
///
/// Removing an adapter frees its slot, the next registration reuses it. An adapter index is thus
/// only meaningful until the adapter it designates is removed.
pub struct Notifier {
    /// Removed adapters leave a `None` so that the other indices stay stable.
    adapters: idx::AdapterMap<Option<Slot>>,
    /// Free slots in `adapters`.
    free: SmallVec<[idx::Adapter; 4]>,
    /// Number of registered adapters.
    live: usize,
    next_rank: u64,
    deliver: bool,
}

impl fmt::Debug for Notifier {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Notifier")
            .field("adapters", &self.adapter_count())
            .field("deliver", &self.deliver)
            .finish()
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    /// Constructor, delivery is on.
    pub fn with_capacity(capa: usize) -> Self {
        Self {
            adapters: idx::AdapterMap::with_capacity(capa),
            free: smallvec![],
            live: 0,
            next_rank: 0,
            deliver: true,
        }
    }
    pub fn new() -> Self {
        Self::with_capacity(1)
    }

    /// Number of adapters currently registered.
    pub fn adapter_count(&self) -> usize {
        self.live
    }

    pub fn deliver(&self) -> bool {
        self.deliver
    }
    /// Turns delivery on/off, returns the previous value.
    pub fn set_deliver(&mut self, deliver: bool) -> bool {
        mem::replace(&mut self.deliver, deliver)
    }

    /// True if delivery is on and there is at least one adapter.
    pub fn notification_required(&self) -> bool {
        self.deliver && self.live > 0
    }

    pub fn add_adapter(&mut self, adapter: impl Adapter + 'static) -> idx::Adapter {
        let slot = Slot {
            rank: self.next_rank,
            adapter: Box::new(adapter),
        };
        self.next_rank += 1;
        self.live += 1;
        let a_idx = match self.free.pop() {
            Some(a_idx) => {
                self.adapters[a_idx] = Some(slot);
                a_idx
            }
            None => self.adapters.push_idx(|_| Some(slot)),
        };
        log::debug!("registered adapter #{}", a_idx);
        a_idx
    }

    /// Removes an adapter, the adapter receives a [`Kind::RemovingAdapter`] notification first.
    ///
    /// Error if no adapter is registered at `a_idx`.
    pub fn remove_adapter(
        &mut self,
        notifier: ObjectId,
        a_idx: idx::Adapter,
    ) -> Res<Box<dyn Adapter>> {
        if a_idx >= self.adapters.next_index() {
            bail!(@unknown("adapter") format!("#{a_idx}"))
        }
        let Slot { mut adapter, .. } = self.adapters[a_idx]
            .take()
            .ok_or_else(|| error!("adapter #{} has already been removed", a_idx))?;
        self.free.push(a_idx);
        self.live -= 1;
        if self.deliver {
            adapter.notify_changed(&Notification::new_removing_adapter(notifier));
        }
        log::debug!("removed adapter #{}", a_idx);
        Ok(adapter)
    }

    /// Delivers a notification to all adapters, in registration order.
    pub fn notify(&mut self, notification: &Notification) {
        if self.live == 0 {
            return;
        }
        log::trace!("delivering {}", notification);
        let mut order: SmallVec<[(u64, idx::Adapter); 4]> = self
            .adapters
            .indices()
            .filter_map(|a_idx| self.adapters[a_idx].as_ref().map(|slot| (slot.rank, a_idx)))
            .collect();
        // reused slots break index order
        order.sort_unstable();
        for (_, a_idx) in order {
            if let Some(slot) = self.adapters[a_idx].as_mut() {
                slot.adapter.notify_changed(notification)
            }
        }
    }
}
