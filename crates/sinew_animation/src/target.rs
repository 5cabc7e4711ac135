use std::fmt;

/// The transform component a keyframe track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetPath {
    Translation, // Parent-relative position
    Rotation,    // Parent-relative orientation
    Scale,       // Per-axis scale
}

impl fmt::Display for TargetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TargetPath::Translation => "translation",
            TargetPath::Rotation => "rotation",
            TargetPath::Scale => "scale",
        })
    }
}
