// Widget placement and widget type catalogue
use serde::{Deserialize, Serialize};

/// A widget positioned on the dashboard grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPlacement {
    #[serde(rename = "i")]
    pub id: String,
    #[serde(rename = "type")]
    pub widget_type: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_w: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_h: Option<u32>,
}

impl WidgetPlacement {
    pub fn new(
        id: impl Into<String>,
        widget_type: impl Into<String>,
        spec: &WidgetSpec,
        x: u32,
        y: u32,
    ) -> Self {
        Self {
            id: id.into(),
            widget_type: widget_type.into(),
            x,
            y,
            w: spec.w,
            h: spec.h,
            min_w: spec.min_w,
            min_h: spec.min_h,
        }
    }

    /// Row just below this placement
    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Set the size, never going below the declared minimum or zero
    pub fn set_size_clamped(&mut self, w: u32, h: u32) {
        self.w = w.max(self.min_w.unwrap_or(1)).max(1);
        self.h = h.max(self.min_h.unwrap_or(1)).max(1);
    }

    pub fn clamp_to_minimum(&mut self) {
        self.set_size_clamped(self.w, self.h);
    }
}

/// Static metadata for a widget type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WidgetSpec {
    pub widget_type: &'static str,
    pub title: &'static str,
    pub w: u32,
    pub h: u32,
    pub min_w: Option<u32>,
    pub min_h: Option<u32>,
}

static CATALOG: [WidgetSpec; 6] = [
    WidgetSpec {
        widget_type: "health-metrics",
        title: "Health Metrics",
        w: 6,
        h: 4,
        min_w: Some(3),
        min_h: Some(3),
    },
    WidgetSpec {
        widget_type: "trending",
        title: "Trending",
        w: 6,
        h: 4,
        min_w: Some(3),
        min_h: Some(2),
    },
    WidgetSpec {
        widget_type: "geo-listeners",
        title: "Listeners by Region",
        w: 8,
        h: 5,
        min_w: Some(4),
        min_h: Some(4),
    },
    WidgetSpec {
        widget_type: "todo-list",
        title: "Todo",
        w: 4,
        h: 5,
        min_w: Some(2),
        min_h: Some(3),
    },
    WidgetSpec {
        widget_type: "chat-assistant",
        title: "Assistant",
        w: 4,
        h: 8,
        min_w: Some(3),
        min_h: Some(4),
    },
    WidgetSpec {
        widget_type: "artist-stats",
        title: "Artist Stats",
        w: 4,
        h: 3,
        min_w: None,
        min_h: None,
    },
];

const GENERIC_SPEC: WidgetSpec = WidgetSpec {
    widget_type: "",
    title: "Widget",
    w: 4,
    h: 3,
    min_w: None,
    min_h: None,
};

pub fn widget_catalog() -> &'static [WidgetSpec] {
    &CATALOG
}

pub fn find_widget_spec(widget_type: &str) -> Option<&'static WidgetSpec> {
    CATALOG.iter().find(|s| s.widget_type == widget_type)
}

/// Catalogue spec for a type, or a generic 4x3 spec for unknown types
pub fn spec_for(widget_type: &str) -> WidgetSpec {
    find_widget_spec(widget_type).copied().unwrap_or(GENERIC_SPEC)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resize_clamps_to_minimum() {
        let spec = spec_for("health-metrics");
        let mut placement = WidgetPlacement::new("health-metrics-1", "health-metrics", &spec, 0, 0);
        placement.set_size_clamped(1, 10);
        assert_eq!((placement.w, placement.h), (3, 10));
    }

    #[test]
    fn test_resize_never_reaches_zero() {
        let spec = spec_for("artist-stats");
        let mut placement = WidgetPlacement::new("artist-stats-1", "artist-stats", &spec, 0, 0);
        placement.set_size_clamped(0, 0);
        assert_eq!((placement.w, placement.h), (1, 1));
    }

    #[test]
    fn test_unknown_type_gets_generic_spec() {
        let spec = spec_for("lyrics");
        assert_eq!((spec.w, spec.h), (4, 3));
        assert!(find_widget_spec("lyrics").is_none());
    }

    #[test]
    fn test_placement_json_shape() {
        let spec = spec_for("todo-list");
        let placement = WidgetPlacement::new("todo-list-1", "todo-list", &spec, 0, 4);
        let json = serde_json::to_value(&placement).unwrap();
        assert_eq!(json["i"], "todo-list-1");
        assert_eq!(json["type"], "todo-list");
        assert_eq!(json["minH"], 3);
    }
}
