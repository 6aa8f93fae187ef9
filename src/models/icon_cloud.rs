use crate::config::icon_cloud as cfg;

/// How many icons the cloud may show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Density {
    Low,
    #[default]
    Medium,
    High,
}

impl Density {
    /// Icon budget before the size limit applies.
    pub fn base_count(self) -> usize {
        match self {
            Self::Low => cfg::LOW_DENSITY_COUNT,
            Self::Medium => cfg::MEDIUM_DENSITY_COUNT,
            Self::High => cfg::HIGH_DENSITY_COUNT,
        }
    }
}

/// Geometric arrangement of the icons, chosen by canvas size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloudLayout {
    Grid,
    Circle,
    Spiral,
}

impl CloudLayout {
    pub fn for_size(size: u32) -> Self {
        if size < cfg::GRID_MAX_SIZE {
            Self::Grid
        } else if size < cfg::CIRCLE_MAX_SIZE {
            Self::Circle
        } else {
            Self::Spiral
        }
    }
}

/// One item shown in the cloud.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconSource {
    /// Text glyph (emoji or short label) drawn directly.
    Glyph { glyph: String, label: String },
    /// Remote image; a fallback glyph is drawn if it fails to load.
    Image { url: String, label: String },
}

impl IconSource {
    pub fn glyph(glyph: impl Into<String>, label: impl Into<String>) -> Self {
        Self::Glyph {
            glyph: glyph.into(),
            label: label.into(),
        }
    }

    /// Image icon labelled with the file stem of its URL.
    pub fn image(url: impl Into<String>) -> Self {
        let url = url.into();
        let label = url
            .rsplit('/')
            .next()
            .and_then(|f| f.split('.').next())
            .filter(|s| !s.is_empty())
            .unwrap_or(&url)
            .to_string();
        Self::Image { url, label }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Glyph { label, .. } | Self::Image { label, .. } => label,
        }
    }
}

/// Animated state of one icon slot.
#[derive(Clone, Debug, PartialEq)]
pub struct IconPosition {
    pub id: usize,
    pub current_x: f64,
    pub current_y: f64,
    /// Depth offset used for the pseudo-3D wobble.
    pub current_z: f64,
    /// Layout position the icon returns to.
    pub original_x: f64,
    pub original_y: f64,
    /// Position the icon is currently relaxing toward.
    pub target_x: f64,
    pub target_y: f64,
    pub scale: f64,
    pub opacity: f64,
    pub target_scale: f64,
    pub target_opacity: f64,
}

impl IconPosition {
    /// An icon at rest on its layout position.
    pub fn at(id: usize, x: f64, y: f64, z: f64) -> Self {
        Self {
            id,
            current_x: x,
            current_y: y,
            current_z: z,
            original_x: x,
            original_y: y,
            target_x: x,
            target_y: y,
            scale: 1.0,
            opacity: 1.0,
            target_scale: 1.0,
            target_opacity: 1.0,
        }
    }

    /// Re-target the icon at its layout position with neutral scale and opacity.
    pub fn retarget_home(&mut self) {
        self.target_x = self.original_x;
        self.target_y = self.original_y;
        self.target_scale = 1.0;
        self.target_opacity = 1.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_thresholds() {
        assert_eq!(CloudLayout::for_size(200), CloudLayout::Grid);
        assert_eq!(CloudLayout::for_size(299), CloudLayout::Grid);
        assert_eq!(CloudLayout::for_size(300), CloudLayout::Circle);
        assert_eq!(CloudLayout::for_size(499), CloudLayout::Circle);
        assert_eq!(CloudLayout::for_size(500), CloudLayout::Spiral);
    }

    #[test]
    fn test_density_counts() {
        assert_eq!(Density::Low.base_count(), 12);
        assert_eq!(Density::Medium.base_count(), 16);
        assert_eq!(Density::High.base_count(), 24);
    }

    #[test]
    fn test_image_label_from_url() {
        let icon = IconSource::image("https://cdn.example.com/icons/rust.svg");
        assert_eq!(icon.label(), "rust");
        let icon = IconSource::image("logo");
        assert_eq!(icon.label(), "logo");
    }
}
