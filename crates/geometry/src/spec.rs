use std::path::Path;

use gamekit_common::Xyz;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Primitive shape descriptor, tagged by `type` in declarative files.
///
/// Inside a [`Part`], any shape that does not parse as one of the known
/// variants (unrecognised, missing or malformed `type`) becomes
/// [`Shape::Unknown`], which the assembler skips.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Shape {
    Sphere { r: f32 },
    /// `r1` is the top radius, `r2` the bottom radius.
    Cylinder { r1: f32, r2: f32, h: f32 },
    Box { w: f32, h: f32, d: f32 },
    #[serde(other)]
    Unknown,
}

/// One shape placed inside a composite geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(
        default,
        deserialize_with = "lenient_shape",
        skip_serializing_if = "Option::is_none"
    )]
    pub shape: Option<Shape>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Xyz>,
    /// Euler angles in degrees, applied in XYZ order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Xyz>,
}

fn lenient_shape<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Shape>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Lenient {
        Known(Shape),
        Other(IgnoredAny),
    }

    Ok(Option::<Lenient>::deserialize(deserializer)?.map(|shape| match shape {
        Lenient::Known(shape) => shape,
        Lenient::Other(_) => Shape::Unknown,
    }))
}

impl Part {
    pub fn new(shape: Shape) -> Self {
        Self {
            shape: Some(shape),
            ..Self::default()
        }
    }

    pub fn at(mut self, x: f32, y: f32, z: f32) -> Self {
        self.position = Some(Xyz::new(x, y, z));
        self
    }

    pub fn rotated(mut self, x: f32, y: f32, z: f32) -> Self {
        self.rotation = Some(Xyz::new(x, y, z));
        self
    }
}

/// Ordered list of parts, written as `{ "parts": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeometrySpec {
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// Errors from loading geometry spec files.
#[derive(Debug, thiserror::Error)]
pub enum GeometryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unsupported geometry spec format: {0}")]
    UnsupportedFormat(String),
}

impl GeometrySpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn part(mut self, part: Part) -> Self {
        self.parts.push(part);
        self
    }

    pub fn from_json_str(s: &str) -> Result<Self, GeometryError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self, GeometryError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Load a spec, picking the parser from the file extension
    /// (`.json`, `.yaml` or `.yml`).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GeometryError> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&data),
            Some("yaml" | "yml") => Self::from_yaml_str(&data),
            other => Err(GeometryError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, GeometryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SHIP: &str = r#"{
        "parts": [
            { "shape": { "type": "sphere", "r": 0.1 } },
            {
                "shape": { "type": "cylinder", "r1": 0.1, "r2": 0.3, "h": 1.0 },
                "position": { "x": 0.4, "y": -0.7, "z": 0 }
            },
            {
                "shape": { "type": "cylinder", "r1": 0.1, "r2": 0.3, "h": 1.0 },
                "position": { "x": 0, "y": 0.5, "z": 0.2 },
                "rotation": { "x": 30, "y": 0, "z": 0 }
            }
        ]
    }"#;

    #[test]
    fn parses_json_parts() {
        let spec = GeometrySpec::from_json_str(SHIP).unwrap();
        assert_eq!(spec.parts.len(), 3);
        assert_eq!(spec.parts[0].shape, Some(Shape::Sphere { r: 0.1 }));
        assert!(spec.parts[0].position.is_none());
        assert_eq!(spec.parts[2].rotation, Some(Xyz::new(30.0, 0.0, 0.0)));
    }

    #[test]
    fn unknown_shape_type_is_not_an_error() {
        let spec = GeometrySpec::from_json_str(
            r#"{ "parts": [ { "shape": { "type": "torus", "r": 1 } } ] }"#,
        )
        .unwrap();
        assert_eq!(spec.parts[0].shape, Some(Shape::Unknown));
    }

    #[test]
    fn untyped_shape_does_not_drop_its_neighbours() {
        let spec = GeometrySpec::from_json_str(
            r#"{ "parts": [
                { "shape": { "r": 1 } },
                { "shape": { "type": "sphere", "r": 0.5 } }
            ] }"#,
        )
        .unwrap();
        assert_eq!(spec.parts.len(), 2);
        assert_eq!(spec.parts[0].shape, Some(Shape::Unknown));
        assert_eq!(spec.parts[1].shape, Some(Shape::Sphere { r: 0.5 }));
    }

    #[test]
    fn malformed_shapes_are_unknown_in_yaml_too() {
        let yaml = r#"
parts:
  - shape: { type: 7 }
  - shape: cube
  - shape: { type: box, w: 1, h: 1, d: 1 }
"#;
        let spec = GeometrySpec::from_yaml_str(yaml).unwrap();
        assert_eq!(spec.parts[0].shape, Some(Shape::Unknown));
        assert_eq!(spec.parts[1].shape, Some(Shape::Unknown));
        assert_eq!(spec.parts[2].shape, Some(Shape::Box { w: 1.0, h: 1.0, d: 1.0 }));
    }

    #[test]
    fn partial_offsets_default_to_zero() {
        let spec = GeometrySpec::from_yaml_str(
            "parts:\n  - shape: { type: box, w: 1, h: 2, d: 3 }\n    position: { y: 2 }\n",
        )
        .unwrap();
        assert_eq!(spec.parts[0].position, Some(Xyz::new(0.0, 2.0, 0.0)));
    }

    #[test]
    fn part_without_shape_parses() {
        let spec = GeometrySpec::from_json_str(r#"{ "parts": [ { "position": { "x": 1 } } ] }"#)
            .unwrap();
        assert!(spec.parts[0].shape.is_none());
    }

    #[test]
    fn builder_matches_parsed_form() {
        let built = GeometrySpec::new()
            .part(Part::new(Shape::Sphere { r: 0.1 }))
            .part(
                Part::new(Shape::Cylinder { r1: 0.1, r2: 0.3, h: 1.0 }).at(0.4, -0.7, 0.0),
            )
            .part(
                Part::new(Shape::Cylinder { r1: 0.1, r2: 0.3, h: 1.0 })
                    .at(0.0, 0.5, 0.2)
                    .rotated(30.0, 0.0, 0.0),
            );
        assert_eq!(built, GeometrySpec::from_json_str(SHIP).unwrap());
    }

    #[test]
    fn load_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ship.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(SHIP.as_bytes())
            .unwrap();
        assert_eq!(GeometrySpec::load(&path).unwrap().parts.len(), 3);

        let bad = dir.path().join("ship.txt");
        std::fs::write(&bad, SHIP).unwrap();
        assert!(matches!(
            GeometrySpec::load(&bad),
            Err(GeometryError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn json_round_trip_keeps_parts() {
        let spec = GeometrySpec::from_json_str(SHIP).unwrap();
        let again = GeometrySpec::from_json_str(&spec.to_json_pretty().unwrap()).unwrap();
        assert_eq!(spec, again);
    }
}
