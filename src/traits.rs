prelude! {}

/// Reflective interface of model records.
///
/// Features are identified by their ID, see [`Feature::id`]. Implementors handle the IDs of their
/// class and fall back on [`ObjectBase::unknown_feature`] for the others.
pub trait EObject {
    /// Name of the record's class in the Ecore model.
    fn class_name(&self) -> &'static str;

    fn base(&self) -> &ObjectBase;
    fn base_mut(&mut self) -> &mut ObjectBase;

    fn e_get(&self, id: usize) -> Res<Value>;
    /// Fails on type mismatch, in which case the record is unchanged.
    fn e_set(&mut self, id: usize, val: Value) -> Res<()>;
    /// Resets a feature to its default, notifying like a set.
    fn e_unset(&mut self, id: usize) -> Res<()>;
    fn e_is_set(&self, id: usize) -> Res<bool>;

    /// ID of a feature from its name.
    fn e_feature_id(&self, name: &str) -> Res<usize>;

    fn e_get_by_name(&self, name: &str) -> Res<Value> {
        let id = self.e_feature_id(name)?;
        self.e_get(id)
    }
    fn e_set_by_name(&mut self, name: &str, val: Value) -> Res<()> {
        let id = self.e_feature_id(name)?;
        self.e_set(id, val)
    }

    fn e_id(&self) -> ObjectId {
        self.base().id()
    }
    fn e_is_proxy(&self) -> bool {
        self.base().is_proxy()
    }
    fn e_proxy_uri(&self) -> Option<&str> {
        self.base().proxy_uri()
    }

    fn e_deliver(&self) -> bool {
        self.base().notifier().deliver()
    }
    fn e_set_deliver(&mut self, deliver: bool) -> bool {
        self.base_mut().notifier_mut().set_deliver(deliver)
    }
    fn e_notification_required(&self) -> bool {
        self.base().notifier().notification_required()
    }
    fn e_add_adapter(&mut self, adapter: impl Adapter + 'static) -> idx::Adapter
    where
        Self: Sized,
    {
        self.base_mut().notifier_mut().add_adapter(adapter)
    }
    fn e_remove_adapter(&mut self, a_idx: idx::Adapter) -> Res<Box<dyn Adapter>> {
        let id = self.e_id();
        self.base_mut().notifier_mut().remove_adapter(id, a_idx)
    }
}
