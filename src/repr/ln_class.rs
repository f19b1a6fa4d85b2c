//! Logical node classes, SCL's `tLNClassEnum`.
//!
//! An SCL logical node class is either one of the classes predefined by IEC 61850-7-4, or an
//! extension class: any four upper-case letters. Other names are stored as-is so that any text a
//! document carries can be held, [`ExtRef::validate`] is where they are reported.

prelude! {
    regex::Regex,
}

use std::sync::OnceLock;

static EXTENSION_RE: OnceLock<Regex> = OnceLock::new();

macro_rules! predefined {
    ( $(
        $(#[$meta:meta])*
        $variant:ident
    ),* $(,)? ) => {
        /// Logical node classes predefined by IEC 61850-7-4.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum Predefined {
            $( $(#[$meta])* $variant, )*
        }

        impl Predefined {
            /// Lists all predefined classes.
            pub const ALL: &'static [Predefined] = &[ $( Predefined::$variant, )* ];

            pub const fn name(self) -> &'static str {
                match self {
                    $( Self::$variant => stringify!($variant), )*
                }
            }

            pub fn from_name(s: impl AsRef<str>) -> Option<Self> {
                match s.as_ref() {
                    $( stringify!($variant) => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

predefined! {
    /// Logical node zero, one per logical device.
    LLN0,
    /// Physical device information.
    LPHD,
    LCCH,
    LGOS,
    LSVS,
    LTIM,
    LTMS,
    LTRK,
    /// Generic automatic process control.
    GAPC,
    /// Generic process I/O.
    GGIO,
    GSAL,
    CALH,
    CCGR,
    CILO,
    CPOW,
    CSWI,
    MDIF,
    MHAI,
    MHAN,
    MMTR,
    MMXN,
    MMXU,
    MSQI,
    MSTA,
    PDIF,
    PDIS,
    PDIR,
    PIOC,
    PTOC,
    PTOV,
    PTRC,
    PTUV,
    RBRF,
    RDRE,
    RREC,
    RSYN,
    TCTR,
    TVTR,
    /// Circuit breaker.
    XCBR,
    /// Circuit switch.
    XSWI,
    YPTR,
    ZBAT,
}

impl Display for Predefined {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        self.name().fmt(fmt)
    }
}

/// A logical node class.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LnClass {
    Predefined(Predefined),
    /// Extension class, four upper-case letters.
    Extension(String),
    /// Any other non-empty name, not legal SCL.
    Other(String),
}

impl Display for LnClass {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Predefined(p) => p.fmt(fmt),
            Self::Extension(s) | Self::Other(s) => s.fmt(fmt),
        }
    }
}

impl From<Predefined> for LnClass {
    fn from(p: Predefined) -> Self {
        Self::Predefined(p)
    }
}

impl FromStr for LnClass {
    type Err = res::Error;
    fn from_str(s: &str) -> Res<Self> {
        Self::parse(s)
    }
}

impl LnClass {
    /// Parses a logical node class name.
    ///
    /// Names that are neither predefined nor extensions yield [`LnClass::Other`], only the empty
    /// string is an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # scl_rs::prelude! {}
    /// use scl_rs::repr::ln_class::Predefined;
    ///
    /// let xcbr = LnClass::parse("XCBR").expect("predefined class");
    /// assert_eq!(xcbr, LnClass::Predefined(Predefined::XCBR));
    ///
    /// let ext = LnClass::parse("ZZZZ").expect("extension class");
    /// assert!(ext.is_extension());
    ///
    /// let other = LnClass::parse("xcbr").expect("other class");
    /// assert!(!other.is_legal());
    ///
    /// assert!(LnClass::parse("").is_err());
    /// ```
    pub fn parse(s: impl AsRef<str>) -> Res<Self> {
        let s = s.as_ref();
        if s.is_empty() {
            bail!(@unexpected("empty logical node class") s)
        }
        if let Some(p) = Predefined::from_name(s) {
            return Ok(Self::Predefined(p));
        }
        let re = repr::cached_regex(&EXTENSION_RE, r"^[A-Z]{4}$")?;
        if re.is_match(s) {
            Ok(Self::Extension(s.into()))
        } else {
            Ok(Self::Other(s.into()))
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Predefined(p) => p.name(),
            Self::Extension(s) | Self::Other(s) => s,
        }
    }

    pub fn is_predefined(&self) -> bool {
        matches!(self, Self::Predefined(_))
    }
    pub fn is_extension(&self) -> bool {
        matches!(self, Self::Extension(_))
    }
    /// False for [`LnClass::Other`] names.
    pub fn is_legal(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}
