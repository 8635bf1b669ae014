//! Declaration macros for schema types.
//!
//! - [`complex_type!`](crate::complex_type) declares a `CT_*` struct with
//!   attributes and ordered child elements.
//! - [`choice!`](crate::choice) declares an `EG_*` group or inline choice as an
//!   enum with one payload per alternative element.
//! - [`st_enum!`](crate::st_enum), [`st_union!`](crate::st_union),
//!   [`bounded!`](crate::bounded) and [`pattern_type!`](crate::pattern_type)
//!   declare simple types.
//!
//! Field declarations in `complex_type!` name a cardinality kind from
//! [`attr`](super::attr) or [`child`](super::child):
//!
//! ```text
//! attributes {
//!     rot: opt Angle = "rot",
//!     w: req PositiveCoordinate = "w" => PositiveCoordinate(0),
//! }
//! children {
//!     off: opt Point2D = "a:off",
//!     fill: choice FillProperties,
//! }
//! ```

#[doc(hidden)]
#[macro_export]
macro_rules! __schema_default {
    ($t:ty) => {
        <$t as ::core::default::Default>::default()
    };
    ($t:ty, $default:expr) => {
        $default
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __schema_name {
    () => {
        ""
    };
    ($name:literal) => {
        $name
    };
}

/// Declare a complex type.
#[macro_export]
macro_rules! complex_type {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            attributes {
                $(
                    $(#[$ameta:meta])*
                    $afield:ident : $akind:ident $aty:ty = $aname:literal $(=> $adefault:expr)?
                ),* $(,)?
            }
            children {
                $(
                    $(#[$cmeta:meta])*
                    $cfield:ident : $ckind:ident $cty:ty $(= $cname:literal)?
                ),* $(,)?
            }
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub struct $name {
            $(
                $(#[$ameta])*
                pub $afield: $crate::ooxml::schema::attr::$akind::Slot<$aty>,
            )*
            $(
                $(#[$cmeta])*
                pub $cfield: $crate::ooxml::schema::child::$ckind::Slot<$cty>,
            )*
        }

        impl $name {
            /// Create a value with mandatory fields at their defaults.
            pub fn new() -> Self {
                Self {
                    $(
                        $afield: $crate::ooxml::schema::attr::$akind::init::<$aty>(
                            $crate::__schema_default!($aty $(, $adefault)?),
                        ),
                    )*
                    $(
                        $cfield: $crate::ooxml::schema::child::$ckind::default::<$cty>(),
                    )*
                }
            }

            #[doc(hidden)]
            #[allow(unused_variables)]
            pub fn encode_attributes<W: ::std::io::Write>(
                &self,
                w: &mut $crate::ooxml::schema::XmlWriter<W>,
            ) {
                $(
                    if let Some(value) = $crate::ooxml::schema::attr::$akind::write::<$aty>(&self.$afield) {
                        w.attribute($aname, &value);
                    }
                )*
            }

            #[doc(hidden)]
            #[allow(unused_variables)]
            pub fn encode_children<W: ::std::io::Write>(
                &self,
                w: &mut $crate::ooxml::schema::XmlWriter<W>,
            ) -> $crate::ooxml::error::Result<()> {
                $(
                    $crate::ooxml::schema::child::$ckind::encode(
                        &self.$cfield,
                        w,
                        $crate::__schema_name!($($cname)?),
                    )?;
                )*
                Ok(())
            }

            #[doc(hidden)]
            #[allow(unused_variables)]
            pub fn decode_attribute(
                &mut self,
                start: &$crate::ooxml::schema::BytesStart<'_>,
                key: &str,
                value: &str,
            ) -> $crate::ooxml::error::Result<bool> {
                $(
                    if key == $crate::ooxml::schema::local_name($aname) {
                        $crate::ooxml::schema::attr::$akind::read::<$aty>(
                            &mut self.$afield,
                            start,
                            $aname,
                            value,
                        )?;
                        return Ok(true);
                    }
                )*
                Ok(false)
            }

            /// Whether some child field accepts an element named `local`.
            #[doc(hidden)]
            #[allow(unused_variables)]
            pub fn accepts_child(local: &str) -> bool {
                $(
                    if $crate::ooxml::schema::child::$ckind::accepts::<$cty>(
                        local,
                        $crate::__schema_name!($($cname)?),
                    ) {
                        return true;
                    }
                )*
                false
            }

            /// Decode one child element into the field that accepts it.
            /// Returns false when no field does.
            #[doc(hidden)]
            #[allow(unused_variables)]
            pub fn decode_child<R: ::std::io::BufRead>(
                &mut self,
                r: &mut $crate::ooxml::schema::XmlReader<R>,
                child: &$crate::ooxml::schema::BytesStart<'_>,
                seen: &mut $crate::ooxml::schema::Seen,
            ) -> $crate::ooxml::error::Result<bool> {
                let local = $crate::ooxml::schema::element_local_name(child)?;
                $(
                    if $crate::ooxml::schema::child::$ckind::accepts::<$cty>(
                        local,
                        $crate::__schema_name!($($cname)?),
                    ) {
                        let first = seen.first(stringify!($cfield));
                        $crate::ooxml::schema::child::$ckind::decode(&mut self.$cfield, first, r, child)?;
                        return Ok(true);
                    }
                )*
                Ok(false)
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::ooxml::schema::XmlElement for $name {
            fn encode<W: ::std::io::Write>(
                &self,
                w: &mut $crate::ooxml::schema::XmlWriter<W>,
                name: &str,
            ) -> $crate::ooxml::error::Result<()> {
                w.open(name)?;
                self.encode_attributes(w);
                self.encode_children(w)?;
                w.close(name)
            }

            fn decode<R: ::std::io::BufRead>(
                &mut self,
                r: &mut $crate::ooxml::schema::XmlReader<R>,
                start: &$crate::ooxml::schema::BytesStart<'_>,
            ) -> $crate::ooxml::error::Result<()> {
                $crate::ooxml::schema::decode_attributes(start, |key, value| {
                    self.decode_attribute(start, key, value)
                })?;
                $(
                    $crate::ooxml::schema::child::$ckind::begin(&mut self.$cfield);
                )*
                $crate::ooxml::schema::decode_children(r, |r, child, seen| {
                    self.decode_child(r, child, seen)
                })
            }
        }

        impl $crate::ooxml::schema::Validate for $name {
            #[allow(unused_variables)]
            fn validate_with_path(
                &self,
                path: &str,
            ) -> ::std::result::Result<(), $crate::ooxml::schema::ValidationError> {
                $(
                    $crate::ooxml::schema::attr::$akind::check::<$aty>(
                        &self.$afield,
                        path,
                        stringify!($afield),
                    )?;
                )*
                $(
                    $crate::ooxml::schema::child::$ckind::validate(
                        &self.$cfield,
                        path,
                        stringify!($cfield),
                    )?;
                )*
                Ok(())
            }
        }
    };
}

/// Declare a choice group: an enum with one variant per alternative element.
#[macro_export]
macro_rules! choice {
    (
        $(#[$meta:meta])*
        pub enum $name:ident($group:literal) {
            $first:ident($fty:ty) = $fname:literal
            $(, $var:ident($ty:ty) = $ename:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $first($fty),
            $($var($ty),)*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::$first(::core::default::Default::default())
            }
        }

        impl $crate::ooxml::schema::ChoiceGroup for $name {
            const GROUP: &'static str = $group;

            fn accepts(local: &str) -> bool {
                local == $crate::ooxml::schema::local_name($fname)
                    $(|| local == $crate::ooxml::schema::local_name($ename))*
            }

            fn holds(&self, local: &str) -> bool {
                local == $crate::ooxml::schema::local_name(self.element_name())
            }

            fn element_name(&self) -> &'static str {
                match self {
                    Self::$first(_) => $fname,
                    $(Self::$var(_) => $ename,)*
                }
            }

            fn variant_name(&self) -> &'static str {
                match self {
                    Self::$first(_) => stringify!($first),
                    $(Self::$var(_) => stringify!($var),)*
                }
            }

            fn decode_new<R: ::std::io::BufRead>(
                r: &mut $crate::ooxml::schema::XmlReader<R>,
                start: &$crate::ooxml::schema::BytesStart<'_>,
            ) -> $crate::ooxml::error::Result<Self> {
                use $crate::ooxml::schema::XmlElement;
                let local = $crate::ooxml::schema::element_local_name(start)?;
                if local == $crate::ooxml::schema::local_name($fname) {
                    let mut value = <$fty as ::core::default::Default>::default();
                    value.decode(r, start)?;
                    return Ok(Self::$first(value));
                }
                $(
                    if local == $crate::ooxml::schema::local_name($ename) {
                        let mut value = <$ty as ::core::default::Default>::default();
                        value.decode(r, start)?;
                        return Ok(Self::$var(value));
                    }
                )*
                Err($crate::ooxml::error::OoxmlError::UnexpectedElement {
                    expected: $group.to_string(),
                    found: local.to_string(),
                })
            }

            fn encode_choice<W: ::std::io::Write>(
                &self,
                w: &mut $crate::ooxml::schema::XmlWriter<W>,
            ) -> $crate::ooxml::error::Result<()> {
                use $crate::ooxml::schema::XmlElement;
                match self {
                    Self::$first(value) => value.encode(w, $fname),
                    $(Self::$var(value) => value.encode(w, $ename),)*
                }
            }
        }

        impl $crate::ooxml::schema::Validate for $name {
            fn validate_with_path(
                &self,
                path: &str,
            ) -> ::std::result::Result<(), $crate::ooxml::schema::ValidationError> {
                use $crate::ooxml::schema::ChoiceGroup;
                let path = $crate::ooxml::schema::validate::field_path(path, self.variant_name());
                match self {
                    Self::$first(value) => $crate::ooxml::schema::Validate::validate_with_path(value, &path),
                    $(Self::$var(value) => $crate::ooxml::schema::Validate::validate_with_path(value, &path),)*
                }
            }
        }
    };
}

/// Declare a fixed-string enumeration. The first variant is the default.
#[macro_export]
macro_rules! st_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $first:ident = $fstr:literal
            $(, $var:ident = $vstr:literal)* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        pub enum $name {
            #[default]
            $first,
            $($var,)*
        }

        impl $name {
            /// Schema string of this value.
            pub fn as_str(&self) -> &'static str {
                match self {
                    Self::$first => $fstr,
                    $(Self::$var => $vstr,)*
                }
            }
        }

        impl $crate::ooxml::schema::XmlValue for $name {
            fn to_xml_value(&self) -> String {
                self.as_str().to_string()
            }

            fn parse_value(s: &str) -> ::std::result::Result<Self, String> {
                match s {
                    $fstr => Ok(Self::$first),
                    $($vstr => Ok(Self::$var),)*
                    _ => Err(format!("'{}' is not a valid {}", s, stringify!($name))),
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Declare a union simple type: an enum over member types, parsed by trying
/// members in order.
#[macro_export]
macro_rules! st_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $first:ident($fty:ty)
            $(, $var:ident($ty:ty))* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $first($fty),
            $($var($ty),)*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self::$first(::core::default::Default::default())
            }
        }

        impl $name {
            /// Name of the member currently held.
            pub fn member_name(&self) -> &'static str {
                match self {
                    Self::$first(_) => stringify!($first),
                    $(Self::$var(_) => stringify!($var),)*
                }
            }
        }

        impl From<$fty> for $name {
            fn from(value: $fty) -> Self {
                Self::$first(value)
            }
        }

        $(
            impl From<$ty> for $name {
                fn from(value: $ty) -> Self {
                    Self::$var(value)
                }
            }
        )*

        impl $crate::ooxml::schema::XmlValue for $name {
            fn to_xml_value(&self) -> String {
                match self {
                    Self::$first(v) => $crate::ooxml::schema::XmlValue::to_xml_value(v),
                    $(Self::$var(v) => $crate::ooxml::schema::XmlValue::to_xml_value(v),)*
                }
            }

            /// The first member that parses and satisfies its constraint
            /// wins; otherwise the first member that parses at all.
            fn parse_value(s: &str) -> ::std::result::Result<Self, String> {
                let mut fallback: Option<Self> = None;
                if let Ok(v) = <$fty as $crate::ooxml::schema::XmlValue>::parse_value(s) {
                    if $crate::ooxml::schema::XmlValue::check(&v).is_ok() {
                        return Ok(Self::$first(v));
                    }
                    fallback.get_or_insert(Self::$first(v));
                }
                $(
                    if let Ok(v) = <$ty as $crate::ooxml::schema::XmlValue>::parse_value(s) {
                        if $crate::ooxml::schema::XmlValue::check(&v).is_ok() {
                            return Ok(Self::$var(v));
                        }
                        fallback.get_or_insert(Self::$var(v));
                    }
                )*
                fallback.ok_or_else(|| {
                    format!("'{}' matches no member of {}", s, stringify!($name))
                })
            }

            fn check(&self) -> ::std::result::Result<(), String> {
                let result = match self {
                    Self::$first(v) => $crate::ooxml::schema::XmlValue::check(v),
                    $(Self::$var(v) => $crate::ooxml::schema::XmlValue::check(v),)*
                };
                result.map_err(|e| format!("{}: {}", self.member_name(), e))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::ooxml::schema::XmlValue::to_xml_value(self))
            }
        }
    };
}

/// Declare a numeric simple type with an inclusive range.
#[macro_export]
macro_rules! bounded {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($t:ty) in [$lo:expr, $hi:expr] = $default:expr;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(pub $t);

        impl $name {
            pub const MIN: $t = $lo;
            pub const MAX: $t = $hi;

            #[inline]
            pub fn get(&self) -> $t {
                self.0
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self($default)
            }
        }

        impl From<$t> for $name {
            fn from(value: $t) -> Self {
                Self(value)
            }
        }

        impl $crate::ooxml::schema::XmlValue for $name {
            fn to_xml_value(&self) -> String {
                $crate::ooxml::schema::XmlValue::to_xml_value(&self.0)
            }

            fn parse_value(s: &str) -> ::std::result::Result<Self, String> {
                <$t as $crate::ooxml::schema::XmlValue>::parse_value(s).map(Self)
            }

            #[allow(unused_comparisons)]
            fn check(&self) -> ::std::result::Result<(), String> {
                if self.0 < Self::MIN || self.0 > Self::MAX {
                    return Err(format!(
                        "{} is outside the range {}..={}",
                        self.0,
                        Self::MIN,
                        Self::MAX
                    ));
                }
                Ok(())
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

/// Declare a string simple type constrained by an anchored pattern. The
/// pattern is checked by validation, not while decoding.
#[macro_export]
macro_rules! pattern_type {
    (
        $(#[$meta:meta])*
        pub struct $name:ident($pattern:literal) = $default:literal;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(pub String);

        impl $name {
            pub const PATTERN: &'static str = $pattern;

            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the value matches the pattern.
            pub fn is_valid(&self) -> bool {
                static PATTERN: ::once_cell::sync::Lazy<::regex::Regex> =
                    ::once_cell::sync::Lazy::new(|| {
                        ::regex::Regex::new($pattern).expect("schema pattern must compile")
                    });
                PATTERN.is_match(&self.0)
            }
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self($default.to_string())
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl $crate::ooxml::schema::XmlValue for $name {
            fn to_xml_value(&self) -> String {
                self.0.clone()
            }

            fn parse_value(s: &str) -> ::std::result::Result<Self, String> {
                Ok(Self(s.to_string()))
            }

            fn check(&self) -> ::std::result::Result<(), String> {
                if self.is_valid() {
                    Ok(())
                } else {
                    Err(format!(
                        "'{}' does not match the {} pattern {}",
                        self.0,
                        stringify!($name),
                        $pattern
                    ))
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}
