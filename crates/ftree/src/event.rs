//! Event taxonomy and link construction rules.
//!
//! Fault-tree shapes are a styling taxonomy, not a behavior hierarchy: a
//! kind fixes the default size, the z-order, and how links attach to it.

use crate::geom::{Point, Rect, Size};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    /// A fault produced by the combination of its inputs; carries the gate.
    Intermediate,
    /// An event normally expected to occur outside the system.
    External,
    /// A fault not developed further for lack of information or consequence.
    Undeveloped,
    /// A basic initiating fault requiring no further development.
    Basic,
    /// A condition attached to a gate; placed manually beside its neighbor.
    Conditioning,
}

impl EventKind {
    pub fn title(self) -> &'static str {
        match self {
            EventKind::Intermediate => "Intermediate Event",
            EventKind::External => "External Event",
            EventKind::Undeveloped => "Undeveloped Event",
            EventKind::Basic => "Basic Event",
            EventKind::Conditioning => "Conditioning Event",
        }
    }

    pub fn default_size(self) -> Size {
        match self {
            EventKind::Intermediate => Size::new(100.0, 100.0),
            EventKind::External => Size::new(80.0, 100.0),
            EventKind::Undeveloped => Size::new(140.0, 80.0),
            EventKind::Basic => Size::new(80.0, 80.0),
            EventKind::Conditioning => Size::new(140.0, 80.0),
        }
    }

    /// Stacking order; conditioning events render under their siblings.
    pub fn z(self) -> i32 {
        match self {
            EventKind::Conditioning => 2,
            _ => 3,
        }
    }

    /// Conditioning events are placed beside their inbound neighbor instead
    /// of going through the automatic layered layout.
    pub fn manual_layout(self) -> bool {
        matches!(self, EventKind::Conditioning)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub id: String,
    pub kind: EventKind,
    pub label: String,
    pub size: Size,
    /// Top-left corner; meaningless until layout runs.
    pub position: Point,
    pub hidden: bool,
    pub z: i32,
}

impl Event {
    pub fn new(id: impl Into<String>, kind: EventKind, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind,
            label: label.into(),
            size: kind.default_size(),
            position: Point::default(),
            hidden: false,
            z: kind.z(),
        }
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    pub fn bbox(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            self.size.height,
        )
    }

    pub fn center(&self) -> Point {
        self.bbox().center()
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new("", EventKind::Intermediate, "")
    }
}

/// Where a link leaves its source shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceTap {
    #[default]
    Body,
    /// Intermediate events connect downstream from their gate.
    Gate,
}

/// How a link attaches to its target shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetAnchor {
    #[default]
    Center,
    /// Conditioning targets are approached perpendicular to their boundary.
    Perpendicular,
}

/// A directed connection between two events. The tap and anchor are fixed at
/// creation time from the endpoint kinds and never change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    pub source: String,
    pub target: String,
    pub source_tap: SourceTap,
    pub target_anchor: TargetAnchor,
    pub z: i32,
}

impl Link {
    pub fn between(source: &Event, target: &Event) -> Self {
        let source_tap = if source.kind == EventKind::Intermediate {
            SourceTap::Gate
        } else {
            SourceTap::Body
        };
        let target_anchor = if target.kind == EventKind::Conditioning {
            TargetAnchor::Perpendicular
        } else {
            TargetAnchor::Center
        };
        Self {
            source: source.id.clone(),
            target: target.id.clone(),
            source_tap,
            target_anchor,
            z: 1,
        }
    }
}

impl Default for Link {
    fn default() -> Self {
        Self {
            source: String::new(),
            target: String::new(),
            source_tap: SourceTap::Body,
            target_anchor: TargetAnchor::Center,
            z: 1,
        }
    }
}
