//! Database adapter boundary.
//!
//! The wire types model the client representation of a PostgreSQL range: a
//! record of two bounds with their inclusivity flags, or an empty mark; a
//! multirange is a list of those.  `cast` turns user-facing values into
//! internal ones, `dump`/`load` convert between internal values and wire
//! values, mapping each finite bound through a caller-supplied inner
//! codec.  Loading goes through [`Range::new`], so every loaded value is
//! normalized exactly like a constructed one.

use std::ops::Bound;

use crate::element::Element;
use crate::multiranges::Multirange;
use crate::ranges::Range;

/// One side of a wire range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WireBound<V> {
    /// No limit on this side.
    Unbound,
    /// A finite bound value.
    Value(V),
}

/// The client representation of a range.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireRange<V> {
    pub lower: WireBound<V>,
    pub upper: WireBound<V>,
    pub lower_inclusive: bool,
    pub upper_inclusive: bool,
    /// When set, the other fields are meaningless.
    pub empty: bool,
}

impl<V> WireRange<V> {
    /// The wire form of the empty range.
    pub fn empty() -> Self {
        WireRange {
            lower: WireBound::Unbound,
            upper: WireBound::Unbound,
            lower_inclusive: false,
            upper_inclusive: false,
            empty: true,
        }
    }
}

/// The client representation of a multirange.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WireMultirange<V> {
    pub ranges: Vec<WireRange<V>>,
}

/// Opaque tags identifying the wire type and its element codec, passed
/// through to the inner dumper/loader.
#[derive(Clone, Copy, Debug)]
pub struct TypeParams<'a> {
    /// The underlying wire type, e.g. `"int8range"`.
    pub db_type: &'a str,
    /// The elemental codec, e.g. `"int8"`.
    pub inner_type: &'a str,
}

/// Failures at the adapter boundary.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum WireError {
    /// The input value cannot be cast to the target type.
    #[error("value cannot be cast to {db_type}")]
    Cast { db_type: String },

    /// The wire bounds do not form a valid range.
    #[error("invalid {db_type} bounds: {detail}")]
    Bounds { db_type: String, detail: String },

    /// The inner codec rejected a bound value.
    #[error("{inner_type} codec failed: {detail}")]
    Inner { inner_type: String, detail: String },
}

impl WireError {
    fn cast(params: &TypeParams<'_>) -> Self {
        WireError::Cast {
            db_type: params.db_type.to_string(),
        }
    }
}

/// Values accepted by [`cast_range`]: an already-internal range, a wire
/// range, or one of the contiguous convenience forms (`start..end`,
/// `start..=end`).
#[derive(Clone, Debug)]
pub enum CastInput<T: Element> {
    Internal(Range<T>),
    Wire(WireRange<T>),
    Span(std::ops::Range<T>),
    SpanInclusive(std::ops::RangeInclusive<T>),
}

impl<T: Element> From<Range<T>> for CastInput<T> {
    fn from(range: Range<T>) -> Self {
        CastInput::Internal(range)
    }
}

impl<T: Element> From<WireRange<T>> for CastInput<T> {
    fn from(wire: WireRange<T>) -> Self {
        CastInput::Wire(wire)
    }
}

impl<T: Element> From<std::ops::Range<T>> for CastInput<T> {
    fn from(span: std::ops::Range<T>) -> Self {
        CastInput::Span(span)
    }
}

impl<T: Element> From<std::ops::RangeInclusive<T>> for CastInput<T> {
    fn from(span: std::ops::RangeInclusive<T>) -> Self {
        CastInput::SpanInclusive(span)
    }
}

/// Values accepted by [`cast_multirange`].
#[derive(Clone, Debug)]
pub enum MultirangeCastInput<T: Element> {
    Internal(Multirange<T>),
    Wire(WireMultirange<T>),
}

impl<T: Element> From<Multirange<T>> for MultirangeCastInput<T> {
    fn from(multirange: Multirange<T>) -> Self {
        MultirangeCastInput::Internal(multirange)
    }
}

impl<T: Element> From<WireMultirange<T>> for MultirangeCastInput<T> {
    fn from(wire: WireMultirange<T>) -> Self {
        MultirangeCastInput::Wire(wire)
    }
}

/// Cast a user-facing value to an internal range.  Anything that does not
/// form a valid range reports the generic [`WireError::Cast`] failure.
pub fn cast_range<T: Element>(
    input: CastInput<T>,
    params: &TypeParams<'_>,
) -> Result<Range<T>, WireError> {
    match input {
        CastInput::Internal(range) => Ok(range),
        CastInput::Wire(wire) => {
            load_range(wire, |_, value| Ok::<_, String>(value), params)
                .map_err(|_| WireError::cast(params))
        }
        CastInput::Span(span) => {
            Range::new(Bound::Included(span.start), Bound::Excluded(span.end))
                .map_err(|_| WireError::cast(params))
        }
        CastInput::SpanInclusive(span) => {
            let (start, end) = span.into_inner();
            Range::new(Bound::Included(start), Bound::Included(end))
                .map_err(|_| WireError::cast(params))
        }
    }
}

/// Cast a user-facing value to an internal multirange, casting each inner
/// range with the same params.
pub fn cast_multirange<T: Element>(
    input: MultirangeCastInput<T>,
    params: &TypeParams<'_>,
) -> Result<Multirange<T>, WireError> {
    match input {
        MultirangeCastInput::Internal(multirange) => Ok(multirange),
        MultirangeCastInput::Wire(wire) => wire
            .ranges
            .into_iter()
            .map(|range| cast_range(CastInput::Wire(range), params))
            .collect::<Result<Vec<_>, _>>()
            .map(Multirange::new),
    }
}

/// Convert an internal range to its wire form, mapping each finite bound
/// through `inner_dumper(inner_type, value)`.  Empty and unbound sides are
/// preserved as such.
pub fn dump_range<T, V, D>(
    range: &Range<T>,
    inner_dumper: D,
    params: &TypeParams<'_>,
) -> Result<WireRange<V>, WireError>
where
    T: Element,
    D: Fn(&str, &T) -> Result<V, String>,
{
    if range.is_empty() {
        return Ok(WireRange::empty());
    }
    let dump_bound = |value: Option<&T>| match value {
        None => Ok(WireBound::Unbound),
        Some(value) => inner_dumper(params.inner_type, value)
            .map(WireBound::Value)
            .map_err(|detail| WireError::Inner {
                inner_type: params.inner_type.to_string(),
                detail,
            }),
    };
    Ok(WireRange {
        lower: dump_bound(range.lower())?,
        upper: dump_bound(range.upper())?,
        lower_inclusive: range.lower_inclusive(),
        upper_inclusive: range.upper_inclusive(),
        empty: false,
    })
}

/// Convert a wire range back to an internal one, mapping each finite
/// bound through `inner_loader(inner_type, value)`.  The result goes
/// through the ordinary constructor, so it is canonicalized on load.
pub fn load_range<T, V, L>(
    wire: WireRange<V>,
    inner_loader: L,
    params: &TypeParams<'_>,
) -> Result<Range<T>, WireError>
where
    T: Element,
    L: Fn(&str, V) -> Result<T, String>,
{
    if wire.empty {
        return Ok(Range::empty());
    }
    let load_bound = |bound: WireBound<V>| match bound {
        WireBound::Unbound => Ok(None),
        WireBound::Value(value) => inner_loader(params.inner_type, value)
            .map(Some)
            .map_err(|detail| WireError::Inner {
                inner_type: params.inner_type.to_string(),
                detail,
            }),
    };
    let lower = match load_bound(wire.lower)? {
        None => Bound::Unbounded,
        Some(value) if wire.lower_inclusive => Bound::Included(value),
        Some(value) => Bound::Excluded(value),
    };
    let upper = match load_bound(wire.upper)? {
        None => Bound::Unbounded,
        Some(value) if wire.upper_inclusive => Bound::Included(value),
        Some(value) => Bound::Excluded(value),
    };
    Range::new(lower, upper).map_err(|error| WireError::Bounds {
        db_type: params.db_type.to_string(),
        detail: error.to_string(),
    })
}

/// Convert an internal multirange to its wire form.
pub fn dump_multirange<T, V, D>(
    multirange: &Multirange<T>,
    inner_dumper: D,
    params: &TypeParams<'_>,
) -> Result<WireMultirange<V>, WireError>
where
    T: Element,
    D: Fn(&str, &T) -> Result<V, String>,
{
    let ranges = multirange
        .ranges()
        .iter()
        .map(|range| dump_range(range, &inner_dumper, params))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(WireMultirange { ranges })
}

/// Convert a wire multirange back to an internal one.  The result is
/// renormalized, so overlapping or adjacent wire ranges fuse on load.
pub fn load_multirange<T, V, L>(
    wire: WireMultirange<V>,
    inner_loader: L,
    params: &TypeParams<'_>,
) -> Result<Multirange<T>, WireError>
where
    T: Element,
    L: Fn(&str, V) -> Result<T, String>,
{
    wire.ranges
        .into_iter()
        .map(|range| load_range(range, &inner_loader, params))
        .collect::<Result<Vec<_>, _>>()
        .map(Multirange::new)
}

#[cfg(test)]
mod test {
    use super::*;

    const PARAMS: TypeParams<'static> = TypeParams {
        db_type: "int4range",
        inner_type: "int4",
    };

    fn identity_dump(_: &str, value: &i32) -> Result<i32, String> {
        Ok(*value)
    }

    fn identity_load(_: &str, value: i32) -> Result<i32, String> {
        Ok(value)
    }

    #[test]
    fn test_dump() {
        let range = Range::new_closed_open(1, 10).unwrap();
        let wire = dump_range(&range, identity_dump, &PARAMS).unwrap();
        assert_eq!(
            wire,
            WireRange {
                lower: WireBound::Value(1),
                upper: WireBound::Value(10),
                lower_inclusive: true,
                upper_inclusive: false,
                empty: false,
            },
        );

        let wire =
            dump_range(&Range::new_unbounded_open(10), identity_dump, &PARAMS)
                .unwrap();
        assert_eq!(wire.lower, WireBound::Unbound);
        assert!(!wire.lower_inclusive);

        let wire =
            dump_range(&Range::<i32>::empty(), identity_dump, &PARAMS).unwrap();
        assert!(wire.empty);
    }

    #[test]
    fn test_load_normalizes() {
        // (1, 9] arrives over the wire and loads as [2, 10).
        let wire = WireRange {
            lower: WireBound::Value(1),
            upper: WireBound::Value(9),
            lower_inclusive: false,
            upper_inclusive: true,
            empty: false,
        };
        let range = load_range(wire, identity_load, &PARAMS).unwrap();
        assert_eq!(range, Range::new_closed_open(2, 10).unwrap());

        let wire = WireRange {
            lower: WireBound::Value(3),
            upper: WireBound::Value(3),
            lower_inclusive: true,
            upper_inclusive: false,
            empty: false,
        };
        assert!(load_range::<i32, _, _>(wire, identity_load, &PARAMS)
            .unwrap()
            .is_empty());

        let wire = WireRange {
            lower: WireBound::Value(10),
            upper: WireBound::Value(1),
            lower_inclusive: true,
            upper_inclusive: false,
            empty: false,
        };
        assert!(matches!(
            load_range::<i32, _, _>(wire, identity_load, &PARAMS),
            Err(WireError::Bounds { .. }),
        ));
    }

    #[test]
    fn test_round_trip() {
        for range in [
            Range::new_closed_open(1, 10).unwrap(),
            Range::new_unbounded_open(5),
            Range::new_closed_unbounded(5),
            Range::doubly_unbounded(),
            Range::empty(),
        ] {
            let wire = dump_range(&range, identity_dump, &PARAMS).unwrap();
            let back = load_range(wire, identity_load, &PARAMS).unwrap();
            assert_eq!(back, range);
        }

        let multirange = Multirange::new([
            Range::new_closed_open(1, 10).unwrap(),
            Range::new_closed_open(20, 30).unwrap(),
        ]);
        let wire =
            dump_multirange(&multirange, identity_dump, &PARAMS).unwrap();
        assert_eq!(wire.ranges.len(), 2);
        let back = load_multirange(wire, identity_load, &PARAMS).unwrap();
        assert_eq!(back, multirange);
    }

    #[test]
    fn test_cast() {
        let range = Range::new_closed_open(1, 10).unwrap();
        assert_eq!(
            cast_range(range.clone().into(), &PARAMS).unwrap(),
            range,
        );

        // The contiguous convenience forms.
        assert_eq!(cast_range((1..10).into(), &PARAMS).unwrap(), range);
        assert_eq!(
            cast_range((1..=9).into(), &PARAMS).unwrap(),
            range,
        );

        let wire = dump_range(&range, identity_dump, &PARAMS).unwrap();
        assert_eq!(cast_range(wire.into(), &PARAMS).unwrap(), range);

        // A reversed span is the generic cast failure.
        assert_eq!(
            cast_range((10..1).into(), &PARAMS),
            Err(WireError::Cast { db_type: "int4range".to_string() }),
        );
    }

    #[test]
    fn test_cast_multirange() {
        let multirange = Multirange::new([
            Range::new_closed_open(1, 10).unwrap(),
            Range::new_closed_open(20, 30).unwrap(),
        ]);
        assert_eq!(
            cast_multirange(multirange.clone().into(), &PARAMS).unwrap(),
            multirange,
        );
        let wire =
            dump_multirange(&multirange, identity_dump, &PARAMS).unwrap();
        assert_eq!(
            cast_multirange(wire.into(), &PARAMS).unwrap(),
            multirange,
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let range = Range::new_closed_open(1, 10).unwrap();
        let wire = dump_range(&range, identity_dump, &PARAMS).unwrap();
        let text = serde_json::to_string(&wire).unwrap();
        let parsed: WireRange<i32> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, wire);
        assert_eq!(
            load_range(parsed, identity_load, &PARAMS).unwrap(),
            range,
        );
    }

    #[test]
    fn test_inner_codec_failure() {
        let range = Range::new_closed_open(1, 10).unwrap();
        let result = dump_range::<_, i32, _>(
            &range,
            |_, _| Err("boom".to_string()),
            &PARAMS,
        );
        assert_eq!(
            result,
            Err(WireError::Inner {
                inner_type: "int4".to_string(),
                detail: "boom".to_string(),
            }),
        );
    }
}
