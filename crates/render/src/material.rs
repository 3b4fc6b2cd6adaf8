use serde::{Deserialize, Serialize};

/// Phong-style surface parameters. Colours are `0xRRGGBB`.
///
/// Partial parameter sets extend the defaults, either through struct update
/// syntax or `#[serde(default)]` when read from a file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    pub color: u32,
    pub specular: u32,
    pub shininess: f32,
    pub emissive: u32,
    pub smooth_shading: bool,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: 0xffffff,
            specular: 0xffffff,
            shininess: 100.0,
            emissive: 0x000000,
            smooth_shading: true,
        }
    }
}

impl Material {
    pub fn colored(color: u32) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn with_shininess(mut self, shininess: f32) -> Self {
        self.shininess = shininess;
        self
    }

    pub fn with_emissive(mut self, emissive: u32) -> Self {
        self.emissive = emissive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_params_extend_defaults() {
        let m: Material = serde_json::from_str(r#"{ "color": 9474192, "shininess": 1 }"#).unwrap();
        assert_eq!(m.color, 0x909090);
        assert_eq!(m.shininess, 1.0);
        assert_eq!(m.specular, 0xffffff);
        assert!(m.smooth_shading);
    }

    #[test]
    fn builders() {
        let m = Material::colored(0x000000).with_emissive(0x33ff33);
        assert_eq!(m.emissive, 0x33ff33);
        assert_eq!(m.shininess, 100.0);
    }
}
