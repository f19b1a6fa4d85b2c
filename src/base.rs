//! Generic record base: identity, proxies, notification, fallbacks for reflective access.

prelude! {}

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-wide unique identity of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(u64);

impl ObjectId {
    /// Generates a new identity.
    pub fn fresh() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl Display for ObjectId {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{:x}", self.0)
    }
}

/// State every model record carries, regardless of its features.
#[derive(Debug)]
pub struct ObjectBase {
    id: ObjectId,
    /// Set iff the record is a placeholder for data that has not been resolved.
    proxy_uri: Option<String>,
    notifier: Notifier,
}

impl Default for ObjectBase {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectBase {
    pub fn with_adapter_capacity(capa: usize) -> Self {
        Self {
            id: ObjectId::fresh(),
            proxy_uri: None,
            notifier: Notifier::with_capacity(capa),
        }
    }
    pub fn new() -> Self {
        Self::with_adapter_capacity(1)
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }
    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    pub fn is_proxy(&self) -> bool {
        self.proxy_uri.is_some()
    }
    pub fn proxy_uri(&self) -> Option<&str> {
        self.proxy_uri.as_deref()
    }
    /// Turns the record into a proxy, or back into a resolved record with `None`.
    pub fn set_proxy_uri(&mut self, uri: Option<impl Into<String>>) -> Option<String> {
        let uri: Option<String> = uri.map(Into::into);
        match &uri {
            Some(uri) => log::debug!("@{} is now a proxy for `{}`", self.id, uri),
            None if self.proxy_uri.is_some() => log::debug!("@{} is resolved", self.id),
            None => (),
        }
        mem::replace(&mut self.proxy_uri, uri)
    }

    /// Notifies a feature change, if notification is required.
    pub fn notify_set(&mut self, feature: Feature, old: Value, new: impl FnOnce() -> Value) {
        if self.notifier.notification_required() {
            let notification = Notification::new_set(self.id, feature, old, new());
            self.notifier.notify(&notification)
        }
    }

    /// Base debug string: `{class}@{id}`, followed by the proxy URI for proxies.
    pub fn display(&self, class: &str) -> String {
        let mut res = format!("{}@{}", class, self.id);
        if let Some(uri) = &self.proxy_uri {
            res.push_str(&format!(" (eProxyURI: {})", uri));
        }
        res
    }

    /// Fallback for reflective operations on IDs the class does not know.
    pub fn unknown_feature<T>(&self, class: &str, id: usize) -> Res<T> {
        Err(error!(@unknown("feature ID") id.to_string())
            .with_context(format!("on `{}` @{}", class, self.id)))
    }
    /// Fallback for reflective operations on names the class does not know.
    pub fn unknown_feature_name<T>(&self, class: &str, name: &str) -> Res<T> {
        Err(error!(@unknown("feature") name)
            .with_context(format!("on `{}` @{}", class, self.id)))
    }
}
