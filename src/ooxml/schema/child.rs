//! Child-element codecs, one module per cardinality.
//!
//! Each module exposes the same operations so that `complex_type!` can
//! dispatch on the kind keyword of a field:
//!
//! | kind         | slot        | meaning                                  |
//! |--------------|-------------|------------------------------------------|
//! | `req`        | `T`         | mandatory child                          |
//! | `opt`        | `Option<T>` | optional child                           |
//! | `many`       | `Vec<T>`    | repeated child, minOccurs 0              |
//! | `many1`      | `Vec<T>`    | repeated child, minOccurs 1              |
//! | `choice`     | `Option<C>` | optional choice group                    |
//! | `choice_req` | `C`         | mandatory choice group                   |
//! | `choices`    | `Vec<C>`    | repeated choice group                    |
//! | `choice_pair`| `Vec<C>`    | choice group occurring exactly twice     |
//!
//! `begin` runs once per decode of the parent, before any child is read.
//! `decode` receives `first`, which is true for the first matching element
//! seen for the field within one decode of the parent. A repeated single
//! child replaces the earlier one.

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::schema::reader::XmlReader;
use crate::ooxml::schema::validate::{Validate, ValidationError, field_path, index_path};
use crate::ooxml::schema::writer::XmlWriter;
use crate::ooxml::schema::{ChoiceGroup, XmlElement, element_local_name, local_name};
use quick_xml::events::BytesStart;
use std::io::{BufRead, Write};
use tracing::debug;

/// Log a single-valued child replaced by a later occurrence.
fn log_repeat(start: &BytesStart<'_>) {
    debug!(
        element = %String::from_utf8_lossy(start.name().as_ref()),
        "repeated child replaces earlier occurrence"
    );
}

/// Decode a fresh `T` from `start`.
fn decode_fresh<T: XmlElement, R: BufRead>(
    r: &mut XmlReader<R>,
    start: &BytesStart<'_>,
) -> Result<T> {
    let mut value = T::default();
    value.decode(r, start)?;
    Ok(value)
}

type VResult = std::result::Result<(), ValidationError>;

/// Handle a second, different alternative arriving for one choice slot.
fn replace_alternative<C: ChoiceGroup, R: BufRead>(
    current: &C,
    first: bool,
    r: &XmlReader<R>,
    found: &str,
) -> Result<()> {
    if first {
        return Ok(());
    }
    if r.options().strict_choices {
        return Err(OoxmlError::ChoiceConflict {
            group: C::GROUP.to_string(),
            previous: current.element_name().to_string(),
            found: found.to_string(),
        });
    }
    debug!(
        group = C::GROUP,
        previous = current.element_name(),
        found,
        "choice alternative replaced"
    );
    Ok(())
}

fn validate_each<T: Validate>(items: &[T], path: &str, field: &str) -> VResult {
    for (i, item) in items.iter().enumerate() {
        item.validate_with_path(&index_path(path, field, i))?;
    }
    Ok(())
}

pub mod req {
    use super::*;

    pub type Slot<T> = T;

    #[inline]
    pub fn default<T: Default>() -> T {
        T::default()
    }

    #[inline]
    pub fn accepts<T>(local: &str, name: &str) -> bool {
        local == local_name(name)
    }

    #[inline]
    pub fn begin<T>(_slot: &mut T) {}

    pub fn encode<T: XmlElement, W: Write>(slot: &T, w: &mut XmlWriter<W>, name: &str) -> Result<()> {
        slot.encode(w, name)
    }

    pub fn decode<T: XmlElement, R: BufRead>(
        slot: &mut T,
        first: bool,
        r: &mut XmlReader<R>,
        start: &BytesStart<'_>,
    ) -> Result<()> {
        let value = decode_fresh(r, start)?;
        if !first {
            log_repeat(start);
        }
        *slot = value;
        Ok(())
    }

    pub fn validate<T: Validate>(slot: &T, path: &str, field: &str) -> VResult {
        slot.validate_with_path(&field_path(path, field))
    }
}

pub mod opt {
    use super::*;

    pub type Slot<T> = Option<T>;

    #[inline]
    pub fn default<T>() -> Option<T> {
        None
    }

    #[inline]
    pub fn accepts<T>(local: &str, name: &str) -> bool {
        local == local_name(name)
    }

    #[inline]
    pub fn begin<T>(_slot: &mut Option<T>) {}

    pub fn encode<T: XmlElement, W: Write>(
        slot: &Option<T>,
        w: &mut XmlWriter<W>,
        name: &str,
    ) -> Result<()> {
        match slot {
            Some(v) => v.encode(w, name),
            None => Ok(()),
        }
    }

    pub fn decode<T: XmlElement, R: BufRead>(
        slot: &mut Option<T>,
        first: bool,
        r: &mut XmlReader<R>,
        start: &BytesStart<'_>,
    ) -> Result<()> {
        let value = decode_fresh(r, start)?;
        if !first && slot.is_some() {
            log_repeat(start);
        }
        *slot = Some(value);
        Ok(())
    }

    pub fn validate<T: Validate>(slot: &Option<T>, path: &str, field: &str) -> VResult {
        match slot {
            Some(v) => v.validate_with_path(&field_path(path, field)),
            None => Ok(()),
        }
    }
}

pub mod many {
    use super::*;

    pub type Slot<T> = Vec<T>;

    #[inline]
    pub fn default<T>() -> Vec<T> {
        Vec::new()
    }

    #[inline]
    pub fn accepts<T>(local: &str, name: &str) -> bool {
        local == local_name(name)
    }

    #[inline]
    pub fn begin<T>(_slot: &mut Vec<T>) {}

    pub fn encode<T: XmlElement, W: Write>(
        slot: &[T],
        w: &mut XmlWriter<W>,
        name: &str,
    ) -> Result<()> {
        for item in slot {
            item.encode(w, name)?;
        }
        Ok(())
    }

    pub fn decode<T: XmlElement, R: BufRead>(
        slot: &mut Vec<T>,
        _first: bool,
        r: &mut XmlReader<R>,
        start: &BytesStart<'_>,
    ) -> Result<()> {
        slot.push(decode_fresh(r, start)?);
        Ok(())
    }

    pub fn validate<T: Validate>(slot: &[T], path: &str, field: &str) -> VResult {
        validate_each(slot, path, field)
    }
}

pub mod many1 {
    use super::*;

    pub type Slot<T> = Vec<T>;

    /// One default entry, so a fresh value satisfies minOccurs.
    #[inline]
    pub fn default<T: Default>() -> Vec<T> {
        vec![T::default()]
    }

    pub use super::many::{accepts, decode, encode};

    /// Drop the constructed default entry: a decoded value holds exactly
    /// the occurrences present in the document.
    #[inline]
    pub fn begin<T>(slot: &mut Vec<T>) {
        slot.clear();
    }

    pub fn validate<T: Validate>(slot: &[T], path: &str, field: &str) -> VResult {
        if slot.is_empty() {
            return Err(ValidationError::new(
                field_path(path, field),
                "at least one element is required",
            ));
        }
        validate_each(slot, path, field)
    }
}

pub mod choice {
    use super::*;

    pub type Slot<C> = Option<C>;

    #[inline]
    pub fn default<C>() -> Option<C> {
        None
    }

    #[inline]
    pub fn accepts<C: ChoiceGroup>(local: &str, _name: &str) -> bool {
        C::accepts(local)
    }

    #[inline]
    pub fn begin<C>(_slot: &mut Option<C>) {}

    pub fn encode<C: ChoiceGroup, W: Write>(
        slot: &Option<C>,
        w: &mut XmlWriter<W>,
        _name: &str,
    ) -> Result<()> {
        match slot {
            Some(c) => c.encode_choice(w),
            None => Ok(()),
        }
    }

    pub fn decode<C: ChoiceGroup, R: BufRead>(
        slot: &mut Option<C>,
        first: bool,
        r: &mut XmlReader<R>,
        start: &BytesStart<'_>,
    ) -> Result<()> {
        let local = element_local_name(start)?;
        if let Some(current) = slot {
            if current.holds(local) {
                return current.decode_existing(r, start);
            }
            replace_alternative(&*current, first, r, local)?;
        }
        *slot = Some(C::decode_new(r, start)?);
        Ok(())
    }

    pub fn validate<C: Validate>(slot: &Option<C>, path: &str, field: &str) -> VResult {
        super::opt::validate(slot, path, field)
    }
}

pub mod choice_req {
    use super::*;

    pub type Slot<C> = C;

    #[inline]
    pub fn default<C: Default>() -> C {
        C::default()
    }

    pub use super::choice::accepts;

    #[inline]
    pub fn begin<C>(_slot: &mut C) {}

    pub fn encode<C: ChoiceGroup, W: Write>(slot: &C, w: &mut XmlWriter<W>, _name: &str) -> Result<()> {
        slot.encode_choice(w)
    }

    /// The first occurrence always replaces the constructed default.
    pub fn decode<C: ChoiceGroup, R: BufRead>(
        slot: &mut C,
        first: bool,
        r: &mut XmlReader<R>,
        start: &BytesStart<'_>,
    ) -> Result<()> {
        if first {
            *slot = C::decode_new(r, start)?;
            return Ok(());
        }
        let local = element_local_name(start)?;
        if slot.holds(local) {
            return slot.decode_existing(r, start);
        }
        replace_alternative(&*slot, first, r, local)?;
        *slot = C::decode_new(r, start)?;
        Ok(())
    }

    pub fn validate<C: Validate>(slot: &C, path: &str, field: &str) -> VResult {
        super::req::validate(slot, path, field)
    }
}

pub mod choices {
    use super::*;

    pub type Slot<C> = Vec<C>;

    #[inline]
    pub fn default<C>() -> Vec<C> {
        Vec::new()
    }

    pub use super::choice::accepts;

    #[inline]
    pub fn begin<C>(_slot: &mut Vec<C>) {}

    pub fn encode<C: ChoiceGroup, W: Write>(
        slot: &[C],
        w: &mut XmlWriter<W>,
        _name: &str,
    ) -> Result<()> {
        for c in slot {
            c.encode_choice(w)?;
        }
        Ok(())
    }

    pub fn decode<C: ChoiceGroup, R: BufRead>(
        slot: &mut Vec<C>,
        _first: bool,
        r: &mut XmlReader<R>,
        start: &BytesStart<'_>,
    ) -> Result<()> {
        slot.push(C::decode_new(r, start)?);
        Ok(())
    }

    pub fn validate<C: Validate>(slot: &[C], path: &str, field: &str) -> VResult {
        validate_each(slot, path, field)
    }
}

pub mod choice_pair {
    use super::*;

    pub type Slot<C> = Vec<C>;

    /// Two default entries, so a fresh value has the required count.
    #[inline]
    pub fn default<C: Default>() -> Vec<C> {
        vec![C::default(), C::default()]
    }

    pub use super::choice::accepts;
    pub use super::choices::{decode, encode};

    #[inline]
    pub fn begin<C>(slot: &mut Vec<C>) {
        slot.clear();
    }

    pub fn validate<C: Validate>(slot: &[C], path: &str, field: &str) -> VResult {
        if slot.len() != 2 {
            return Err(ValidationError::new(
                field_path(path, field),
                format!("exactly two elements are required, found {}", slot.len()),
            ));
        }
        validate_each(slot, path, field)
    }
}
