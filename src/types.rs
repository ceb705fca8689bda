//! Shared types used across lasrun.
//! Includes the `ClassFilter` dispatch table for `-keep_class` and the small
//! helpers that decode GIS host values ("true"/"false", "#" for unset).

/// Sentinel the GIS host passes for an optional parameter left empty.
pub const HOST_UNSET: &str = "#";

/// Point classes a boundary can be restricted to.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum ClassFilter {
    AllPoints,
    Ground,
    Vegetation,
    Buildings,
    Keypoints,
    Water,
    Overlap,
}

impl ClassFilter {
    /// Map a host selection label to a filter. Unknown labels keep every point.
    pub fn from_label(label: &str) -> Self {
        match label {
            "ground points only" => ClassFilter::Ground,
            "vegetation" => ClassFilter::Vegetation,
            "buildings" => ClassFilter::Buildings,
            "keypoints" => ClassFilter::Keypoints,
            "water" => ClassFilter::Water,
            "overlap points" => ClassFilter::Overlap,
            _ => ClassFilter::AllPoints,
        }
    }

    /// ASPRS classification codes passed after `-keep_class`, in order.
    pub fn codes(&self) -> &'static [u8] {
        match self {
            ClassFilter::AllPoints => &[],
            ClassFilter::Ground => &[2],
            ClassFilter::Vegetation => &[3, 4, 5],
            ClassFilter::Buildings => &[6],
            ClassFilter::Keypoints => &[8],
            ClassFilter::Water => &[9],
            ClassFilter::Overlap => &[12],
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ClassFilter::AllPoints => "all points",
            ClassFilter::Ground => "ground points only",
            ClassFilter::Vegetation => "vegetation",
            ClassFilter::Buildings => "buildings",
            ClassFilter::Keypoints => "keypoints",
            ClassFilter::Water => "water",
            ClassFilter::Overlap => "overlap points",
        }
    }
}

impl std::fmt::Display for ClassFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Host booleans arrive as text; only the exact string "true" counts as set.
pub fn host_flag(value: &str) -> bool {
    value == "true"
}

/// Host optional text: `None` for "#" (and for empty strings).
pub fn host_optional(value: &str) -> Option<String> {
    if value == HOST_UNSET || value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
