//! Untyped drawing documents.
//!
//! The wire format mirrors the typed model loosely on purpose: positions
//! are arbitrary-length number arrays and shape specs are either a scalar
//! or an array. Structural validation happens in [`normalize`], which can
//! skip a single bad element instead of failing the whole document at the
//! serde layer.
//!
//! ```json
//! [
//!   [
//!     { "position": [2, -8], "kind": "circle", "spec": 3.6 },
//!     { "position": [3, 6],  "kind": "rect",   "spec": [2, 12] }
//!   ]
//! ]
//! ```

use log::warn;
use primitive::{Point, Primitive, Shape, ShapeKind};
use serde::Deserialize;
use thiserror::Error;

use crate::{Drawing, Group};

/// A whole drawing document: an array of groups.
#[derive(Clone, Debug, Deserialize)]
pub struct RawDrawing(pub Vec<RawGroup>);

/// One group: an array of elements.
#[derive(Clone, Debug, Deserialize)]
pub struct RawGroup(pub Vec<RawElement>);

/// One drawing element, not yet validated.
#[derive(Clone, Debug, Deserialize)]
pub struct RawElement {
    /// Position as a number array; anything but two entries is rejected
    /// during normalization.
    pub position: Vec<f32>,
    /// Shape kind tag, e.g. `"rect"` or `"circle"`.
    pub kind: String,
    /// Kind-specific dimensions.
    pub spec: RawSpec,
}

/// Kind-specific dimensions in wire form.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawSpec {
    /// A single magnitude (circle radius).
    Scalar(f32),
    /// A dimension array (rect length and width).
    Dimensions(Vec<f32>),
}

/// Structural failure while turning a raw document into a typed drawing.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// A spec payload whose shape does not fit the element's declared kind.
    #[error("spec for {kind} element must be {expected}")]
    SpecMismatch {
        kind: ShapeKind,
        expected: &'static str,
    },
}

/// Validate a raw document and build the typed drawing.
///
/// Elements with a malformed position or an unrecognized kind are dropped
/// with a warning; a spec that cannot fit its declared kind fails the whole
/// document. Group structure and element order are preserved, including
/// groups left empty by skipped elements.
pub fn normalize(doc: &RawDrawing) -> Result<Drawing, NormalizeError> {
    let mut groups = Vec::with_capacity(doc.0.len());
    for raw_group in &doc.0 {
        let mut primitives = Vec::with_capacity(raw_group.0.len());
        for element in &raw_group.0 {
            if let Some(primitive) = normalize_element(element)? {
                primitives.push(primitive);
            }
        }
        groups.push(Group::new(primitives));
    }
    Ok(Drawing::new(groups))
}

fn normalize_element(element: &RawElement) -> Result<Option<Primitive>, NormalizeError> {
    let &[x, y] = element.position.as_slice() else {
        warn!(
            "skipping element with {}-entry position",
            element.position.len()
        );
        return Ok(None);
    };

    let Ok(kind) = element.kind.parse::<ShapeKind>() else {
        warn!("skipping element with unrecognized kind {:?}", element.kind);
        return Ok(None);
    };

    let shape = match (kind, &element.spec) {
        (ShapeKind::Rect, RawSpec::Dimensions(dims)) if dims.len() == 2 => {
            Shape::rect(dims[0], dims[1])
        }
        (ShapeKind::Rect, _) => {
            return Err(NormalizeError::SpecMismatch {
                kind,
                expected: "a [length, width] pair",
            })
        }
        (ShapeKind::Circle, RawSpec::Scalar(radius)) => Shape::circle(*radius),
        (ShapeKind::Circle, _) => {
            return Err(NormalizeError::SpecMismatch {
                kind,
                expected: "a single radius",
            })
        }
    };

    Ok(Some(Primitive::new(Point::new(x, y), shape)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> RawDrawing {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn well_formed_document_normalizes() {
        let doc = parse(
            r#"[
                [
                    { "position": [2, -8], "kind": "circle", "spec": 3.6 },
                    { "position": [3, 6],  "kind": "rect",   "spec": [2, 12] }
                ]
            ]"#,
        );
        let drawing = normalize(&doc).unwrap();

        assert_eq!(drawing.groups.len(), 1);
        let group = &drawing.groups[0];
        assert_eq!(group.len(), 2);
        assert_eq!(group.primitives[0].position, Point::new(2.0, -8.0));
        assert_eq!(group.primitives[0].shape, Shape::circle(3.6));
        assert_eq!(group.primitives[1].shape, Shape::rect(2.0, 12.0));
    }

    #[test]
    fn spec_forms_deserialize_untagged() {
        let doc = parse(
            r#"[[
                { "position": [0, 0], "kind": "circle", "spec": 5 },
                { "position": [0, 0], "kind": "rect",   "spec": [1, 2] }
            ]]"#,
        );
        assert!(matches!(doc.0[0].0[0].spec, RawSpec::Scalar(_)));
        assert!(matches!(doc.0[0].0[1].spec, RawSpec::Dimensions(_)));
    }

    #[test]
    fn malformed_position_is_skipped() {
        let doc = parse(
            r#"[[
                { "position": [1, 2, 3], "kind": "rect", "spec": [1, 1] },
                { "position": [4],       "kind": "circle", "spec": 2 },
                { "position": [5, 6],    "kind": "circle", "spec": 2 }
            ]]"#,
        );
        let drawing = normalize(&doc).unwrap();

        // The group survives with only the valid element
        assert_eq!(drawing.groups.len(), 1);
        assert_eq!(drawing.groups[0].len(), 1);
        assert_eq!(drawing.groups[0].primitives[0].position, Point::new(5.0, 6.0));
    }

    #[test]
    fn unrecognized_kind_is_skipped() {
        let doc = parse(
            r#"[[
                { "position": [1, 2], "kind": "triangle", "spec": 3 }
            ]]"#,
        );
        let drawing = normalize(&doc).unwrap();

        assert_eq!(drawing.groups.len(), 1);
        assert!(drawing.groups[0].is_empty());
    }

    #[test]
    fn rect_with_scalar_spec_is_an_error() {
        let doc = parse(
            r#"[[
                { "position": [1, 2], "kind": "rect", "spec": 4 }
            ]]"#,
        );
        let err = normalize(&doc).unwrap_err();
        assert!(err.to_string().contains("rect"));
    }

    #[test]
    fn rect_with_wrong_arity_spec_is_an_error() {
        let doc = parse(
            r#"[[
                { "position": [1, 2], "kind": "rect", "spec": [4, 5, 6] }
            ]]"#,
        );
        assert!(normalize(&doc).is_err());
    }

    #[test]
    fn circle_with_array_spec_is_an_error() {
        let doc = parse(
            r#"[[
                { "position": [1, 2], "kind": "circle", "spec": [4, 5] }
            ]]"#,
        );
        let err = normalize(&doc).unwrap_err();
        assert!(err.to_string().contains("circle"));
    }

    #[test]
    fn group_order_is_preserved() {
        let doc = parse(
            r#"[
                [ { "position": [1, 1], "kind": "circle", "spec": 1 } ],
                [ { "position": [2, 2], "kind": "circle", "spec": 2 } ]
            ]"#,
        );
        let drawing = normalize(&doc).unwrap();

        assert_eq!(drawing.groups.len(), 2);
        assert_eq!(drawing.groups[0].primitives[0].shape, Shape::circle(1.0));
        assert_eq!(drawing.groups[1].primitives[0].shape, Shape::circle(2.0));
    }
}
