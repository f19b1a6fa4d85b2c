//! Structural features of [`ExtRef`], the `TExtRef` class of the SCL package.

prelude! {}

macro_rules! features {
    ( $(
        $(#[$meta:meta])*
        $variant:ident = $id:literal, $name:literal : $kind:ident
    ),* $(,)? ) => {
        /// Identifies a feature of [`ExtRef`] for reflective access.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Feature {
            $( $(#[$meta])* $variant, )*
        }

        impl Feature {
            /// All features, ordered by ID.
            pub const ALL: &'static [Feature] = &[ $( Feature::$variant, )* ];

            /// Feature ID, as used by [`EObject::e_get`] and friends.
            pub const fn id(self) -> usize {
                match self {
                    $( Self::$variant => $id, )*
                }
            }

            /// Name of the feature in the Ecore model.
            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => $name, )*
                }
            }

            /// Kind of value the feature holds.
            pub const fn kind(self) -> ValueKind {
                match self {
                    $( Self::$variant => ValueKind::$kind, )*
                }
            }

            pub fn from_id(id: usize) -> Option<Self> {
                match id {
                    $( $id => Some(Self::$variant), )*
                    _ => None,
                }
            }

            pub fn from_name(name: impl AsRef<str>) -> Option<Self> {
                match name.as_ref() {
                    $( $name => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

features! {
    /// Data attribute name.
    DaName = 0, "daName": Text,
    /// Data object name.
    DoName = 1, "doName": Text,
    /// Name of the referenced IED.
    IedName = 2, "iedName": Text,
    /// Internal address.
    IntAddr = 3, "intAddr": Text,
    /// Logical device instance.
    LdInst = 4, "ldInst": Text,
    /// Logical node class.
    LnClass = 5, "lnClass": LnClass,
    /// Logical node instance.
    LnInst = 6, "lnInst": Text,
    /// Logical node prefix.
    Prefix = 7, "prefix": Text,
}

impl Display for Feature {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.name().fmt(fmt)
    }
}

impl FromStr for Feature {
    type Err = res::Error;
    fn from_str(s: &str) -> Res<Self> {
        Self::from_name(s).ok_or_else(|| error!(@unknown("TExtRef feature") s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_positions() {
        assert_eq!(Feature::ALL.len(), 8);
        for (pos, feature) in Feature::ALL.iter().cloned().enumerate() {
            assert_eq!(feature.id(), pos);
            assert_eq!(Feature::from_id(pos), Some(feature));
            assert_eq!(Feature::from_name(feature.name()), Some(feature));
        }
        assert_eq!(Feature::from_id(8), None);
    }

    #[test]
    fn kinds() {
        assert_eq!(Feature::LnClass.kind(), ValueKind::LnClass);
        assert!(Feature::ALL
            .iter()
            .filter(|f| **f != Feature::LnClass)
            .all(|f| f.kind() == ValueKind::Text));
    }

    #[test]
    fn parse_unknown() {
        let err = "lnType".parse::<Feature>().unwrap_err();
        assert_eq!(err.to_string(), "unknown TExtRef feature `lnType`");
    }
}
