//! System configuration - root configuration structure.

use heapless::{FnvIndexMap, String};
use serde::Deserialize;

use super::axis::AxisConfig;

/// Root configuration structure from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct SystemConfig {
    /// Named axis configurations.
    pub axes: FnvIndexMap<String<32>, AxisConfig, 8>,
}

impl SystemConfig {
    /// Get an axis configuration by name.
    pub fn axis(&self, name: &str) -> Option<&AxisConfig> {
        self.axes
            .iter()
            .find(|(k, _)| k.as_str() == name)
            .map(|(_, v)| v)
    }

    /// List all axis names.
    pub fn axis_names(&self) -> impl Iterator<Item = &str> {
        self.axes.keys().map(|s| s.as_str())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            axes: FnvIndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_lookup() {
        let toml = r#"
[axes.lift]
name = "Auger Lift"
pulses_per_second = 800.0

[axes.slide]
name = "Auger Slide"
pulses_per_second = 400.0
invert_direction = true
"#;
        let config: SystemConfig = toml::from_str(toml).unwrap();

        assert!(config.axis("lift").is_some());
        assert!(config.axis("slide").is_some());
        assert!(config.axis("belt").is_none());

        let slide = config.axis("slide").unwrap();
        assert_eq!(slide.name.as_str(), "Auger Slide");
        assert!(slide.invert_direction);

        let names: heapless::Vec<&str, 8> = config.axis_names().collect();
        assert!(names.contains(&"lift"));
        assert!(names.contains(&"slide"));
    }
}
