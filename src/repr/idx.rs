safe_index::new! {
    /// Index of an adapter registered on a [`crate::notify::Notifier`].
    Adapter,
    /// Maps an [`Adapter`] to something.
    map: AdapterMap,
}
