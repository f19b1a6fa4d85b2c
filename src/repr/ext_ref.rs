//! SCL `ExtRef` elements.
//!
//! An [`ExtRef`] binds an input of a logical node to a signal published by another (or the same)
//! IED. All its attributes are optional, an absent attribute is `None`.
//!
//! Mutating an attribute, either through its typed setter or reflectively through [`EObject`],
//! always overwrites the attribute and then notifies the record's adapters if
//! [notification is required](Notifier::notification_required).

prelude! {
    regex::Regex,
}

use std::sync::OnceLock;

static LD_INST_RE: OnceLock<Regex> = OnceLock::new();
static LN_INST_RE: OnceLock<Regex> = OnceLock::new();
static PREFIX_RE: OnceLock<Regex> = OnceLock::new();

/// Maximal length of an `ldInst`.
const LD_INST_MAX_LEN: usize = 64;
/// Maximal length of a `prefix`.
const PREFIX_MAX_LEN: usize = 11;

/// An external reference, class `TExtRef` of the SCL package.
#[derive(Debug)]
pub struct ExtRef {
    base: ObjectBase,
    da_name: Option<String>,
    do_name: Option<String>,
    ied_name: Option<String>,
    int_addr: Option<String>,
    ld_inst: Option<String>,
    ln_class: Option<LnClass>,
    ln_inst: Option<String>,
    prefix: Option<String>,
}

macro_rules! text_accessors {
    ( $(
        $(#[$meta:meta])*
        $field:ident, $set_fn:ident = $feature:ident
    ),* $(,)? ) => {
        impl ExtRef {
            $(
                $(#[$meta])*
                pub fn $field(&self) -> Option<&str> {
                    self.$field.as_deref()
                }
                $(#[$meta])*
                ///
                /// Notifies even if the value does not change.
                pub fn $set_fn(&mut self, $field: Option<impl Into<String>>) {
                    let old = mem::replace(&mut self.$field, $field.map(Into::into));
                    let new = &self.$field;
                    self.base
                        .notify_set(Feature::$feature, old.into(), || new.clone().into())
                }
            )*
        }
    };
}

text_accessors! {
    /// Data attribute name.
    da_name, set_da_name = DaName,
    /// Data object name.
    do_name, set_do_name = DoName,
    /// Name of the referenced IED.
    ied_name, set_ied_name = IedName,
    /// Internal address.
    int_addr, set_int_addr = IntAddr,
    /// Logical device instance.
    ld_inst, set_ld_inst = LdInst,
    /// Logical node instance.
    ln_inst, set_ln_inst = LnInst,
    /// Logical node prefix.
    prefix, set_prefix = Prefix,
}

impl Default for ExtRef {
    fn default() -> Self {
        Self::new()
    }
}

impl ExtRef {
    pub const CLASS_NAME: &'static str = "TExtRef";

    /// Constructor, all attributes are absent.
    pub fn new() -> Self {
        Self::with_adapter_capacity(1)
    }
    /// Same as [`Self::new`] with some capacity for adapters.
    pub fn with_adapter_capacity(capa: usize) -> Self {
        Self {
            base: ObjectBase::with_adapter_capacity(capa),
            da_name: None,
            do_name: None,
            ied_name: None,
            int_addr: None,
            ld_inst: None,
            ln_class: None,
            ln_inst: None,
            prefix: None,
        }
    }
    /// A placeholder for an `ExtRef` that has not been resolved yet.
    pub fn new_proxy(uri: impl Into<String>) -> Self {
        let mut slf = Self::new();
        slf.base.set_proxy_uri(Some(uri));
        slf
    }

    /// Logical node class.
    pub fn ln_class(&self) -> Option<&LnClass> {
        self.ln_class.as_ref()
    }
    /// Logical node class.
    ///
    /// Notifies even if the value does not change.
    pub fn set_ln_class(&mut self, ln_class: Option<impl Into<LnClass>>) {
        let old = mem::replace(&mut self.ln_class, ln_class.map(Into::into));
        let new = &self.ln_class;
        self.base
            .notify_set(Feature::LnClass, old.into(), || new.clone().into())
    }

    /// Value of a feature.
    pub fn get(&self, feature: Feature) -> Value {
        match feature {
            Feature::DaName => self.da_name.clone().into(),
            Feature::DoName => self.do_name.clone().into(),
            Feature::IedName => self.ied_name.clone().into(),
            Feature::IntAddr => self.int_addr.clone().into(),
            Feature::LdInst => self.ld_inst.clone().into(),
            Feature::LnClass => self.ln_class.clone().into(),
            Feature::LnInst => self.ln_inst.clone().into(),
            Feature::Prefix => self.prefix.clone().into(),
        }
    }

    /// Sets a feature, [`Value::Null`] clears it.
    ///
    /// Fails if `val` does not have the feature's [kind](Feature::kind), the record is left
    /// untouched in this case.
    pub fn set(&mut self, feature: Feature, val: Value) -> Res<()> {
        match feature {
            Feature::DaName => self.set_da_name(val.into_text(feature)?),
            Feature::DoName => self.set_do_name(val.into_text(feature)?),
            Feature::IedName => self.set_ied_name(val.into_text(feature)?),
            Feature::IntAddr => self.set_int_addr(val.into_text(feature)?),
            Feature::LdInst => self.set_ld_inst(val.into_text(feature)?),
            Feature::LnClass => self.set_ln_class(val.into_ln_class(feature)?),
            Feature::LnInst => self.set_ln_inst(val.into_text(feature)?),
            Feature::Prefix => self.set_prefix(val.into_text(feature)?),
        }
        Ok(())
    }

    /// Resets a feature to its default (absent), notifies like a set.
    pub fn unset(&mut self, feature: Feature) {
        let none = None as Option<String>;
        match feature {
            Feature::DaName => self.set_da_name(none),
            Feature::DoName => self.set_do_name(none),
            Feature::IedName => self.set_ied_name(none),
            Feature::IntAddr => self.set_int_addr(none),
            Feature::LdInst => self.set_ld_inst(none),
            Feature::LnClass => self.set_ln_class(None as Option<LnClass>),
            Feature::LnInst => self.set_ln_inst(none),
            Feature::Prefix => self.set_prefix(none),
        }
    }

    /// True if the feature is not at its default (absent).
    pub fn is_set(&self, feature: Feature) -> bool {
        match feature {
            Feature::DaName => self.da_name.is_some(),
            Feature::DoName => self.do_name.is_some(),
            Feature::IedName => self.ied_name.is_some(),
            Feature::IntAddr => self.int_addr.is_some(),
            Feature::LdInst => self.ld_inst.is_some(),
            Feature::LnClass => self.ln_class.is_some(),
            Feature::LnInst => self.ln_inst.is_some(),
            Feature::Prefix => self.prefix.is_some(),
        }
    }

    /// All feature values, ordered by feature ID.
    pub fn values(&self) -> SmallVec<[(Feature, Value); 8]> {
        Feature::ALL.iter().map(|f| (*f, self.get(*f))).collect()
    }

    /// IEC 61850 object reference of the signal this `ExtRef` designates.
    ///
    /// Has shape `{iedName}{ldInst}/{prefix}{lnClass}{lnInst}.{doName}.{daName}`, where `prefix`
    /// and `lnInst` default to the empty string and `.{daName}` only appears when `daName` is
    /// set. `None` if any of `iedName`, `ldInst`, `lnClass` or `doName` is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # scl_rs::prelude! {}
    /// let mut ext_ref = ExtRef::new();
    /// ext_ref.set_ied_name(Some("IED1"));
    /// ext_ref.set_ld_inst(Some("LD0"));
    /// ext_ref.set_ln_class(Some(LnClass::parse("XCBR").expect("predefined class")));
    /// ext_ref.set_ln_inst(Some("1"));
    /// assert_eq!(ext_ref.object_reference(), None);
    ///
    /// ext_ref.set_do_name(Some("Pos"));
    /// assert_eq!(ext_ref.object_reference().as_deref(), Some("IED1LD0/XCBR1.Pos"));
    ///
    /// ext_ref.set_da_name(Some("stVal"));
    /// assert_eq!(ext_ref.object_reference().as_deref(), Some("IED1LD0/XCBR1.Pos.stVal"));
    /// ```
    pub fn object_reference(&self) -> Option<String> {
        let ied_name = self.ied_name.as_deref()?;
        let ld_inst = self.ld_inst.as_deref()?;
        let ln_class = self.ln_class.as_ref()?;
        let do_name = self.do_name.as_deref()?;
        let mut res = format!(
            "{}{}/{}{}{}.{}",
            ied_name,
            ld_inst,
            self.prefix.as_deref().unwrap_or(""),
            ln_class,
            self.ln_inst.as_deref().unwrap_or(""),
            do_name,
        );
        if let Some(da_name) = &self.da_name {
            res.push('.');
            res.push_str(da_name);
        }
        Some(res)
    }

    /// Checks the lexical rules SCL puts on the attributes.
    ///
    /// Setters never check anything, this is the only place where attributes are validated. The
    /// error has one context line per violation.
    pub fn validate(&self) -> Res<()> {
        let mut violations: SmallVec<[String; 4]> = smallvec![];

        if let Some(ld_inst) = self.ld_inst.as_deref() {
            let re = repr::cached_regex(&LD_INST_RE, r"^[A-Za-z0-9][0-9A-Za-z_]*$")?;
            if !re.is_match(ld_inst) || ld_inst.len() > LD_INST_MAX_LEN {
                violations.push(format!("illegal `ldInst` value `{}`", ld_inst))
            }
        }
        if let Some(ln_class) = self.ln_class.as_ref().filter(|c| !c.is_legal()) {
            violations.push(format!("illegal `lnClass` value `{}`", ln_class))
        }
        if let Some(ln_inst) = self.ln_inst.as_deref() {
            let re = repr::cached_regex(&LN_INST_RE, r"^[0-9]{1,12}$")?;
            if !re.is_match(ln_inst) {
                violations.push(format!("illegal `lnInst` value `{}`", ln_inst))
            }
        }
        // empty prefixes are legal
        if let Some(prefix) = self.prefix.as_deref().filter(|p| !p.is_empty()) {
            let re = repr::cached_regex(&PREFIX_RE, r"^[A-Za-z][0-9A-Za-z_]*$")?;
            if !re.is_match(prefix) || prefix.len() > PREFIX_MAX_LEN {
                violations.push(format!("illegal `prefix` value `{}`", prefix))
            }
        }
        for (feature, name) in [
            (Feature::DoName, self.do_name.as_deref()),
            (Feature::DaName, self.da_name.as_deref()),
        ] {
            if let Some(name) = name {
                if !name.split('.').all(repr::is_valid_ident) {
                    violations.push(format!("illegal `{}` value `{}`", feature, name))
                }
            }
        }

        if violations.is_empty() {
            return Ok(());
        }
        let mut err = error!(
            "`{}` @{} has {} illegal attribute(s)",
            Self::CLASS_NAME,
            self.base.id(),
            violations.len()
        );
        for violation in violations {
            log::warn!("{}", violation);
            err = err.with_context(violation);
        }
        Err(err)
    }

    pub fn is_proxy(&self) -> bool {
        self.base.is_proxy()
    }
}

impl EObject for ExtRef {
    fn class_name(&self) -> &'static str {
        Self::CLASS_NAME
    }

    fn base(&self) -> &ObjectBase {
        &self.base
    }
    fn base_mut(&mut self) -> &mut ObjectBase {
        &mut self.base
    }

    fn e_get(&self, id: usize) -> Res<Value> {
        match Feature::from_id(id) {
            Some(feature) => Ok(self.get(feature)),
            None => self.base.unknown_feature(Self::CLASS_NAME, id),
        }
    }
    fn e_set(&mut self, id: usize, val: Value) -> Res<()> {
        match Feature::from_id(id) {
            Some(feature) => self.set(feature, val),
            None => self.base.unknown_feature(Self::CLASS_NAME, id),
        }
    }
    fn e_unset(&mut self, id: usize) -> Res<()> {
        match Feature::from_id(id) {
            Some(feature) => {
                self.unset(feature);
                Ok(())
            }
            None => self.base.unknown_feature(Self::CLASS_NAME, id),
        }
    }
    fn e_is_set(&self, id: usize) -> Res<bool> {
        match Feature::from_id(id) {
            Some(feature) => Ok(self.is_set(feature)),
            None => self.base.unknown_feature(Self::CLASS_NAME, id),
        }
    }

    fn e_feature_id(&self, name: &str) -> Res<usize> {
        match Feature::from_name(name) {
            Some(feature) => Ok(feature.id()),
            None => self.base.unknown_feature_name(Self::CLASS_NAME, name),
        }
    }
}

impl Display for ExtRef {
    /// Base debug string followed by all attributes, or just the base debug string for proxies.
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let base = self.base.display(Self::CLASS_NAME);
        if self.base.is_proxy() {
            return base.fmt(fmt);
        }
        let fields = self
            .values()
            .into_iter()
            .show_iter_cs(|(feature, val)| format!("{}: {}", feature, val));
        write!(fmt, "{} ({})", base, fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::RefCell, rc::Rc};

    type Log = Rc<RefCell<Vec<Notification>>>;

    fn observed() -> (ExtRef, Log) {
        let log: Log = Rc::new(RefCell::new(vec![]));
        let mut ext_ref = ExtRef::new();
        let sink = log.clone();
        ext_ref.e_add_adapter(move |n: &Notification| sink.borrow_mut().push(n.clone()));
        (ext_ref, log)
    }

    fn sample(feature: Feature) -> Value {
        match feature.kind() {
            ValueKind::Text => Value::Text(format!("{}_val", feature.name())),
            ValueKind::LnClass => Value::LnClass("GGIO".parse().unwrap()),
        }
    }

    #[test]
    fn defaults() {
        let ext_ref = ExtRef::new();
        for feature in Feature::ALL.iter().cloned() {
            assert_eq!(ext_ref.get(feature), Value::Null);
            assert!(!ext_ref.e_is_set(feature.id()).unwrap());
        }
        assert_eq!(ext_ref.da_name(), None);
        assert_eq!(ext_ref.ln_class(), None);
        assert!(!ext_ref.is_proxy());
    }

    #[test]
    fn typed_accessors() {
        let mut ext_ref = ExtRef::new();
        ext_ref.set_da_name(Some("stVal"));
        ext_ref.set_do_name(Some("Pos"));
        ext_ref.set_ied_name(Some("IED1"));
        ext_ref.set_int_addr(Some("In1"));
        ext_ref.set_ld_inst(Some("LD0"));
        ext_ref.set_ln_class(Some(LnClass::parse("XCBR").unwrap()));
        ext_ref.set_ln_inst(Some("1"));
        ext_ref.set_prefix(Some("Q0"));

        assert_eq!(ext_ref.da_name(), Some("stVal"));
        assert_eq!(ext_ref.do_name(), Some("Pos"));
        assert_eq!(ext_ref.ied_name(), Some("IED1"));
        assert_eq!(ext_ref.int_addr(), Some("In1"));
        assert_eq!(ext_ref.ld_inst(), Some("LD0"));
        assert_eq!(ext_ref.ln_class().map(LnClass::name), Some("XCBR"));
        assert_eq!(ext_ref.ln_inst(), Some("1"));
        assert_eq!(ext_ref.prefix(), Some("Q0"));

        ext_ref.set_prefix(None as Option<String>);
        assert_eq!(ext_ref.prefix(), None);
    }

    #[test]
    fn reflective_set_get_unset() {
        let (mut ext_ref, log) = observed();
        let obj = ext_ref.e_id();
        for feature in Feature::ALL.iter().cloned() {
            let id = feature.id();
            let val = sample(feature);
            ext_ref.e_set(id, val.clone()).unwrap();
            assert_eq!(ext_ref.e_get(id).unwrap(), val);
            assert!(ext_ref.e_is_set(id).unwrap());
            assert_eq!(
                log.borrow_mut().drain(..).collect::<Vec<_>>(),
                vec![Notification::new_set(obj, feature, Value::Null, val.clone())],
                "setting `{}`",
                feature,
            );

            ext_ref.e_unset(id).unwrap();
            assert!(!ext_ref.e_is_set(id).unwrap());
            assert_eq!(ext_ref.e_get(id).unwrap(), Value::Null);
            assert_eq!(
                log.borrow_mut().drain(..).collect::<Vec<_>>(),
                vec![Notification::new_set(obj, feature, val, Value::Null)],
                "unsetting `{}`",
                feature,
            );
        }
    }

    #[test]
    fn reflective_ln_class_from_text() {
        let (mut ext_ref, log) = observed();
        let obj = ext_ref.e_id();

        ext_ref.e_set(Feature::LnClass.id(), "LLN0".into()).unwrap();
        let lln0 = LnClass::parse("LLN0").unwrap();
        assert!(lln0.is_predefined());
        assert_eq!(ext_ref.ln_class(), Some(&lln0));
        ext_ref.validate().unwrap();

        ext_ref
            .e_set_by_name("lnClass", "MYLN1".into())
            .unwrap();
        assert_eq!(ext_ref.ln_class(), Some(&LnClass::Other("MYLN1".into())));
        let err = ext_ref.validate().unwrap_err();
        assert!(err.to_string().contains("illegal `lnClass` value `MYLN1`"));

        // empty text is rejected, the record is unchanged
        assert!(ext_ref.e_set(Feature::LnClass.id(), "".into()).is_err());
        assert_eq!(ext_ref.ln_class(), Some(&LnClass::Other("MYLN1".into())));

        assert_eq!(
            *log.borrow(),
            vec![
                Notification::new_set(obj, Feature::LnClass, Value::Null, lln0.clone().into()),
                Notification::new_set(
                    obj,
                    Feature::LnClass,
                    lln0.into(),
                    LnClass::Other("MYLN1".into()).into()
                ),
            ]
        );
    }

    #[test]
    fn reflective_matches_typed() {
        let mut ext_ref = ExtRef::new();
        ext_ref
            .e_set(Feature::IedName.id(), "IED1".into())
            .unwrap();
        assert_eq!(ext_ref.ied_name(), Some("IED1"));
        ext_ref.set_ld_inst(Some("LD0"));
        assert_eq!(
            ext_ref.e_get_by_name("ldInst").unwrap(),
            Value::Text("LD0".into())
        );
        ext_ref.e_set(Feature::DaName.id(), Value::Null).unwrap();
        assert_eq!(ext_ref.da_name(), None);
    }

    #[test]
    fn one_notification_per_mutation() {
        let (mut ext_ref, log) = observed();
        let id = ext_ref.e_id();

        ext_ref.set_da_name(Some("DA1"));
        ext_ref.set_da_name(Some("DA2"));
        ext_ref.e_unset(Feature::DaName.id()).unwrap();

        let log = log.borrow();
        assert_eq!(
            *log,
            vec![
                Notification::new_set(id, Feature::DaName, Value::Null, "DA1".into()),
                Notification::new_set(id, Feature::DaName, "DA1".into(), "DA2".into()),
                Notification::new_set(id, Feature::DaName, "DA2".into(), Value::Null),
            ]
        );
        assert!(log.iter().all(|n| n.kind == Kind::Set));
        assert!(log.iter().all(|n| n.feature_id() == Some(0)));
    }

    #[test]
    fn notifies_on_unchanged_value() {
        let (mut ext_ref, log) = observed();
        let class = LnClass::parse("LLN0").unwrap();
        ext_ref.set_ln_class(Some(class.clone()));
        ext_ref.set_ln_class(Some(class.clone()));
        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].old, Value::LnClass(class.clone()));
        assert_eq!(log[1].new, Value::LnClass(class));
        assert_eq!(log[1].feature, Some(Feature::LnClass));
    }

    #[test]
    fn no_delivery() {
        let (mut ext_ref, log) = observed();
        assert!(ext_ref.e_notification_required());
        ext_ref.e_set_deliver(false);
        assert!(!ext_ref.e_deliver());
        ext_ref.set_do_name(Some("Pos"));
        assert!(log.borrow().is_empty());
        assert_eq!(ext_ref.do_name(), Some("Pos"));

        // no adapter at all
        let mut ext_ref = ExtRef::with_adapter_capacity(0);
        assert!(!ext_ref.e_notification_required());
        ext_ref.set_do_name(Some("Pos"));
        assert_eq!(ext_ref.do_name(), Some("Pos"));
    }

    #[test]
    fn with_adapter_capacity() {
        let mut ext_ref = ExtRef::with_adapter_capacity(3);
        assert!(Feature::ALL.iter().all(|f| !ext_ref.is_set(*f)));
        assert!(!ext_ref.is_proxy());
        assert_ne!(ext_ref.e_id(), ExtRef::default().e_id());

        let log: Log = Rc::new(RefCell::new(vec![]));
        for _ in 0..3 {
            let sink = log.clone();
            ext_ref.e_add_adapter(move |n: &Notification| sink.borrow_mut().push(n.clone()));
        }
        ext_ref.set_ied_name(Some("IED1"));
        assert_eq!(log.borrow().len(), 3);
    }

    #[test]
    fn remove_adapter() {
        let log: Log = Rc::new(RefCell::new(vec![]));
        let mut ext_ref = ExtRef::new();
        let sink = log.clone();
        let a_idx =
            ext_ref.e_add_adapter(move |n: &Notification| sink.borrow_mut().push(n.clone()));
        ext_ref.set_int_addr(Some("In1"));
        ext_ref.e_remove_adapter(a_idx).unwrap();
        ext_ref.set_int_addr(Some("In2"));

        let log = log.borrow();
        assert_eq!(log.len(), 2);
        assert_eq!(log[1].kind, Kind::RemovingAdapter);
        assert_eq!(log[1].feature, None);
    }

    #[test]
    fn type_mismatch() {
        let (mut ext_ref, log) = observed();
        ext_ref.set_ied_name(Some("IED1"));

        let err = ext_ref
            .e_set(
                Feature::IedName.id(),
                Value::LnClass(LnClass::parse("GGIO").unwrap()),
            )
            .unwrap_err();
        assert!(err.src.is_type_mismatch());
        assert_eq!(ext_ref.ied_name(), Some("IED1"));

        let err = ext_ref
            .e_set(Feature::DaName.id(), Value::LnClass(LnClass::parse("XCBR").unwrap()))
            .unwrap_err();
        assert!(err.src.is_type_mismatch());
        assert_eq!(ext_ref.da_name(), None);

        // only the typed set notified
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn unknown_feature() {
        let (mut ext_ref, log) = observed();
        assert!(ext_ref.e_get(8).unwrap_err().src.is_unknown());
        assert!(ext_ref.e_set(8, "x".into()).unwrap_err().src.is_unknown());
        assert!(ext_ref.e_unset(42).unwrap_err().src.is_unknown());
        assert!(ext_ref.e_is_set(usize::MAX).unwrap_err().src.is_unknown());
        assert!(ext_ref
            .e_set_by_name("lnType", "x".into())
            .unwrap_err()
            .src
            .is_unknown());
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn debug_string() {
        let mut ext_ref = ExtRef::new();
        ext_ref.set_da_name(Some("DA1"));
        ext_ref.set_do_name(Some("DO1"));
        ext_ref.set_ied_name(Some("IED1"));
        let s = ext_ref.to_string();
        assert!(s.starts_with(&format!("TExtRef@{}", ext_ref.e_id())));
        assert!(s.contains(
            "(daName: DA1, doName: DO1, iedName: IED1, intAddr: null, ldInst: null, \
            lnClass: null, lnInst: null, prefix: null)"
        ));
    }

    #[test]
    fn proxy_debug_string() {
        let mut ext_ref = ExtRef::new_proxy("station.scd#//@IED.0/@ExtRef.1");
        ext_ref.set_da_name(Some("DA1"));
        assert!(ext_ref.e_is_proxy());
        assert_eq!(
            ext_ref.to_string(),
            format!(
                "TExtRef@{} (eProxyURI: station.scd#//@IED.0/@ExtRef.1)",
                ext_ref.e_id()
            )
        );
        assert!(!ext_ref.to_string().contains("daName"));
    }

    #[test]
    fn validate() {
        let mut ext_ref = ExtRef::new();
        ext_ref.validate().unwrap();

        ext_ref.set_ld_inst(Some("LD0"));
        ext_ref.set_ln_inst(Some("12"));
        ext_ref.set_prefix(Some(""));
        ext_ref.set_do_name(Some("Pos"));
        ext_ref.set_da_name(Some("origin.orCat"));
        ext_ref.validate().unwrap();

        ext_ref.set_ln_inst(Some("a1"));
        ext_ref.set_prefix(Some("_Q0"));
        ext_ref.set_da_name(Some("origin..orCat"));
        let err = ext_ref.validate().unwrap_err();
        assert_eq!(err.ctx.len(), 3);
        let msg = err.to_string();
        assert!(msg.contains("has 3 illegal attribute(s)"));
        assert!(msg.contains("illegal `lnInst` value `a1`"));
        assert!(msg.contains("illegal `prefix` value `_Q0`"));
        assert!(msg.contains("illegal `daName` value `origin..orCat`"));
    }
}
