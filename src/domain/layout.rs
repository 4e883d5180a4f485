// Layout domain model - widget placements for a single dashboard mode
use super::mode::find_mode;
use super::widget::{spec_for, WidgetPlacement};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Mode id to layout, ordered so serialization is deterministic
pub type LayoutMap = BTreeMap<String, Layout>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    placements: Vec<WidgetPlacement>,
}

impl Layout {
    pub fn new(placements: Vec<WidgetPlacement>) -> Self {
        Self { placements }
    }

    pub fn placements(&self) -> &[WidgetPlacement] {
        &self.placements
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    pub fn contains_type(&self, widget_type: &str) -> bool {
        self.placements.iter().any(|p| p.widget_type == widget_type)
    }

    pub fn get(&self, widget_id: &str) -> Option<&WidgetPlacement> {
        self.placements.iter().find(|p| p.id == widget_id)
    }

    pub fn get_mut(&mut self, widget_id: &str) -> Option<&mut WidgetPlacement> {
        self.placements.iter_mut().find(|p| p.id == widget_id)
    }

    /// First id of the form `{type}-{n}` not already taken
    pub fn next_widget_id(&self, widget_type: &str) -> String {
        let taken: HashSet<&str> = self.placements.iter().map(|p| p.id.as_str()).collect();
        (1..)
            .map(|n| format!("{}-{}", widget_type, n))
            .find(|id| !taken.contains(id.as_str()))
            .unwrap_or_else(|| format!("{}-{}", widget_type, self.placements.len() + 1))
    }

    /// Row below the lowest occupied cell, 0 for an empty layout
    pub fn next_free_row(&self) -> u32 {
        self.placements.iter().map(WidgetPlacement::bottom).max().unwrap_or(0)
    }

    /// Append a new widget of the given type below everything else
    pub fn append(&mut self, widget_type: &str) -> WidgetPlacement {
        let spec = spec_for(widget_type);
        let placement = WidgetPlacement::new(
            self.next_widget_id(widget_type),
            widget_type,
            &spec,
            0,
            self.next_free_row(),
        );
        self.placements.push(placement.clone());
        placement
    }

    pub fn remove(&mut self, widget_id: &str) -> Option<WidgetPlacement> {
        let index = self.placements.iter().position(|p| p.id == widget_id)?;
        Some(self.placements.remove(index))
    }

    /// Keep the first placement of each widget type, returning how many were dropped
    pub fn dedup_by_type(&mut self) -> usize {
        let before = self.placements.len();
        let mut seen = HashSet::new();
        self.placements.retain(|p| seen.insert(p.widget_type.clone()));
        before - self.placements.len()
    }

    /// Raise every placement to at least its minimum size
    pub fn clamp_sizes(&mut self) {
        for placement in &mut self.placements {
            placement.clamp_to_minimum();
        }
    }

    /// First id that appears more than once, if any
    pub fn duplicate_id(&self) -> Option<&str> {
        let mut seen = HashSet::new();
        self.placements
            .iter()
            .map(|p| p.id.as_str())
            .find(|id| !seen.insert(*id))
    }
}

/// Saved layouts cut down to what the store can hold: unknown modes and
/// layouts with repeated widget ids are dropped, sizes are clamped.
pub fn sanitize_saved(layouts: LayoutMap) -> LayoutMap {
    layouts
        .into_iter()
        .filter_map(|(mode, mut layout)| {
            if find_mode(&mode).is_none() {
                tracing::warn!("Dropping saved layout for unknown mode '{}'", mode);
                return None;
            }
            if let Some(widget_id) = layout.duplicate_id() {
                tracing::warn!(
                    "Dropping saved '{}' layout: widget id '{}' repeats",
                    mode,
                    widget_id
                );
                return None;
            }
            layout.clamp_sizes();
            Some((mode, layout))
        })
        .collect()
}

/// Built-in layouts used for modes that have not been customized
#[derive(Debug, Clone, Default)]
pub struct DefaultLayouts {
    layouts: LayoutMap,
}

impl DefaultLayouts {
    pub fn new(layouts: LayoutMap) -> Self {
        Self { layouts }
    }

    pub fn builtin() -> Self {
        let mut layouts = LayoutMap::new();
        layouts.insert(
            "standard".to_string(),
            Self::stacked(&["health-metrics", "trending", "geo-listeners", "todo-list"]),
        );
        layouts.insert(
            "mc-assist".to_string(),
            Self::stacked(&["chat-assistant", "health-metrics"]),
        );
        layouts.insert(
            "touring".to_string(),
            Self::stacked(&["geo-listeners", "todo-list"]),
        );
        Self { layouts }
    }

    fn stacked(widget_types: &[&str]) -> Layout {
        let mut layout = Layout::default();
        for widget_type in widget_types {
            layout.append(widget_type);
        }
        layout
    }

    /// Default for a mode; modes without one get an empty layout
    pub fn for_mode(&self, mode_id: &str) -> Layout {
        self.layouts.get(mode_id).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_stacks_below_lowest_row() {
        let mut layout = Layout::default();
        let first = layout.append("health-metrics");
        let second = layout.append("todo-list");
        assert_eq!((first.x, first.y), (0, 0));
        assert_eq!((second.x, second.y), (0, first.h));
    }

    #[test]
    fn test_next_widget_id_fills_gaps() {
        let mut layout = Layout::default();
        layout.append("trending");
        let spec = spec_for("trending");
        layout
            .placements
            .push(WidgetPlacement::new("trending-3", "trending", &spec, 0, 10));
        layout.remove("trending-1");
        assert_eq!(layout.next_widget_id("trending"), "trending-1");
        layout.append("trending");
        assert_eq!(layout.next_widget_id("trending"), "trending-2");
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let spec = spec_for("trending");
        let mut layout = Layout::new(vec![
            WidgetPlacement::new("a", "trending", &spec, 0, 0),
            WidgetPlacement::new("b", "todo-list", &spec, 0, 4),
            WidgetPlacement::new("c", "trending", &spec, 0, 8),
        ]);
        assert_eq!(layout.dedup_by_type(), 1);
        let ids: Vec<&str> = layout.placements().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(layout.dedup_by_type(), 0);
    }

    #[test]
    fn test_duplicate_id_detection() {
        let spec = spec_for("trending");
        let layout = Layout::new(vec![
            WidgetPlacement::new("a", "trending", &spec, 0, 0),
            WidgetPlacement::new("a", "todo-list", &spec, 0, 4),
        ]);
        assert_eq!(layout.duplicate_id(), Some("a"));
    }

    #[test]
    fn test_sanitize_saved_layouts() {
        let spec = spec_for("trending");
        let mut undersized = WidgetPlacement::new("trending-1", "trending", &spec, 0, 0);
        undersized.w = 0;
        undersized.h = 0;

        let mut layouts = LayoutMap::new();
        layouts.insert("touring".to_string(), Layout::new(vec![undersized]));
        layouts.insert(
            "standard".to_string(),
            Layout::new(vec![
                WidgetPlacement::new("a", "trending", &spec, 0, 0),
                WidgetPlacement::new("a", "todo-list", &spec, 0, 4),
            ]),
        );
        layouts.insert("karaoke".to_string(), Layout::default());

        let sanitized = sanitize_saved(layouts);
        assert_eq!(sanitized.keys().collect::<Vec<_>>(), vec!["touring"]);
        let placement = &sanitized["touring"].placements()[0];
        assert_eq!((placement.w, placement.h), (3, 2));
    }

    #[test]
    fn test_builtin_defaults() {
        let defaults = DefaultLayouts::builtin();
        assert_eq!(defaults.for_mode("standard").len(), 4);
        assert!(defaults.for_mode("unknown").is_empty());
    }
}
