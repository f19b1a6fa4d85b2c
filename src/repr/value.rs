//! Dynamic values, used by reflective feature access.

prelude! {}

/// Kind of value a feature holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueKind {
    Text,
    LnClass,
}

impl Display for ValueKind {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Text => "text".fmt(fmt),
            Self::LnClass => "logical node class".fmt(fmt),
        }
    }
}

/// A feature value, absent values are [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Value {
    #[default]
    Null,
    Text(String),
    LnClass(LnClass),
}

impl Display for Value {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Null => "null".fmt(fmt),
            Self::Text(s) => s.fmt(fmt),
            Self::LnClass(c) => c.fmt(fmt),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
impl From<&'_ str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.into())
    }
}
impl From<LnClass> for Value {
    fn from(c: LnClass) -> Self {
        Self::LnClass(c)
    }
}
impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Self::Null)
    }
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Kind of the value, `None` for [`Value::Null`] which fits any kind.
    pub fn kind(&self) -> Option<ValueKind> {
        match self {
            Self::Null => None,
            Self::Text(_) => Some(ValueKind::Text),
            Self::LnClass(_) => Some(ValueKind::LnClass),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
    pub fn as_ln_class(&self) -> Option<&LnClass> {
        match self {
            Self::LnClass(c) => Some(c),
            _ => None,
        }
    }

    /// Extracts an optional text, fails if the value is neither text nor null.
    pub fn into_text(self, feature: Feature) -> Res<Option<String>> {
        match self {
            Self::Null => Ok(None),
            Self::Text(s) => Ok(Some(s)),
            Self::LnClass(_) => Err(error!(@mismatch(feature, ValueKind::Text) ValueKind::LnClass)),
        }
    }
    /// Extracts an optional logical node class, text is parsed with [`LnClass::parse`].
    pub fn into_ln_class(self, feature: Feature) -> Res<Option<LnClass>> {
        match self {
            Self::Null => Ok(None),
            Self::LnClass(c) => Ok(Some(c)),
            Self::Text(s) => LnClass::parse(&s)
                .map(Some)
                .context(|| format!("while setting feature `{}`", feature)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from("IED1").to_string(), "IED1");
        assert_eq!(Value::from(None as Option<String>), Value::Null);
    }

    #[test]
    fn into_text_mismatch() {
        let val = Value::LnClass("GGIO".parse().unwrap());
        let err = val.into_text(Feature::DaName).unwrap_err();
        assert!(err.src.is_type_mismatch());
        assert_eq!(
            err.to_string(),
            "type mismatch on feature `daName`: expected text, got logical node class"
        );
    }

    #[test]
    fn into_ln_class_parses_text() {
        let class = Value::from("LLN0").into_ln_class(Feature::LnClass).unwrap();
        assert_eq!(class, Some(LnClass::parse("LLN0").unwrap()));
        assert!(class.unwrap().is_predefined());

        let class = Value::from("MYLN1").into_ln_class(Feature::LnClass).unwrap();
        assert_eq!(class, Some(LnClass::Other("MYLN1".into())));

        let err = Value::from("").into_ln_class(Feature::LnClass).unwrap_err();
        assert_eq!(
            err.to_string(),
            "unexpected empty logical node class ``\nwhile setting feature `lnClass`"
        );
    }
}
