//! Detected-object vocabulary for street mode

use serde::{Deserialize, Serialize};

/// Closed category set the street-mode model is instructed to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectKind {
    AutoRickshaw,
    Bike,
    Car,
    Person,
    Pothole,
    Barrier,
    Bottle,
    Chair,
    Other,
}

impl ObjectKind {
    /// Danger-priority order used to pick one object when several are
    /// detected in the same capture. First entry is the most urgent.
    pub const PRIORITY: [ObjectKind; 9] = [
        ObjectKind::AutoRickshaw,
        ObjectKind::Bike,
        ObjectKind::Car,
        ObjectKind::Person,
        ObjectKind::Pothole,
        ObjectKind::Barrier,
        ObjectKind::Bottle,
        ObjectKind::Chair,
        ObjectKind::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::AutoRickshaw => "auto-rickshaw",
            ObjectKind::Bike => "bike",
            ObjectKind::Car => "car",
            ObjectKind::Person => "person",
            ObjectKind::Pothole => "pothole",
            ObjectKind::Barrier => "barrier",
            ObjectKind::Bottle => "bottle",
            ObjectKind::Chair => "chair",
            ObjectKind::Other => "other",
        }
    }

    /// Strings outside the closed set map to None, not to `Other`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "auto-rickshaw" => Some(ObjectKind::AutoRickshaw),
            "bike" => Some(ObjectKind::Bike),
            "car" => Some(ObjectKind::Car),
            "person" => Some(ObjectKind::Person),
            "pothole" => Some(ObjectKind::Pothole),
            "barrier" => Some(ObjectKind::Barrier),
            "bottle" => Some(ObjectKind::Bottle),
            "chair" => Some(ObjectKind::Chair),
            "other" => Some(ObjectKind::Other),
            _ => None,
        }
    }

    /// Indefinite article used when the kind opens a spoken sentence.
    pub fn article(&self) -> &'static str {
        match self {
            ObjectKind::AutoRickshaw => "an ",
            _ => "",
        }
    }

    /// Position in the danger-priority order (0 is most urgent).
    pub fn priority_rank(&self) -> usize {
        Self::PRIORITY
            .iter()
            .position(|k| k == self)
            .unwrap_or(Self::PRIORITY.len())
    }
}

/// Rough bearing of a detected object relative to the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Ahead,
    Behind,
    Center,
    Unknown,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Ahead => "ahead",
            Direction::Behind => "behind",
            Direction::Center => "center",
            Direction::Unknown => "unknown",
        }
    }

    /// Unrecognized directions collapse to Unknown.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "left" => Direction::Left,
            "right" => Direction::Right,
            "ahead" => Direction::Ahead,
            "behind" => Direction::Behind,
            "center" => Direction::Center,
            _ => Direction::Unknown,
        }
    }
}

/// One object reported by a single analysis call. Transient; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectedObject {
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub direction: Direction,
}

impl DetectedObject {
    pub fn new(kind: ObjectKind, direction: Direction) -> Self {
        Self { kind, direction }
    }

    /// Render the spoken description, e.g. "an auto-rickshaw is left"
    /// or "car is ahead".
    pub fn describe(&self) -> String {
        format!(
            "{}{} is {}",
            self.kind.article(),
            self.kind.as_str(),
            self.direction.as_str()
        )
    }
}
