// Widget layout store - per-mode layouts with write-through persistence
use crate::application::error::LayoutError;
use crate::application::layout_repository::PersistenceHandle;
use crate::domain::layout::{sanitize_saved, DefaultLayouts, Layout, LayoutMap};
use crate::domain::mode::resolve_mode;
use crate::domain::widget::WidgetPlacement;

/// Owns the customized layout of every mode.
///
/// Mutations run against a copy of the mode's layout and are committed only on
/// success, so a rejected operation never leaves partial changes behind. Every
/// commit hands the full mapping to the persistence handle.
#[derive(Debug)]
pub struct WidgetLayoutStore {
    layouts: LayoutMap,
    defaults: DefaultLayouts,
    persistence: PersistenceHandle,
}

impl WidgetLayoutStore {
    pub fn new(defaults: DefaultLayouts, persistence: PersistenceHandle) -> Self {
        Self::with_layouts(LayoutMap::new(), defaults, persistence)
    }

    /// Seed the store from previously persisted layouts. Entries that break
    /// the layout invariants are dropped or clamped first.
    pub fn with_layouts(
        layouts: LayoutMap,
        defaults: DefaultLayouts,
        persistence: PersistenceHandle,
    ) -> Self {
        Self {
            layouts: sanitize_saved(layouts),
            defaults,
            persistence,
        }
    }

    pub fn get_layout(&self, mode_id: &str) -> Layout {
        let mode = resolve_mode(mode_id).id;
        self.layouts
            .get(mode)
            .cloned()
            .unwrap_or_else(|| self.defaults.for_mode(mode))
    }

    pub fn is_customized(&self, mode_id: &str) -> bool {
        self.layouts.contains_key(resolve_mode(mode_id).id)
    }

    pub fn snapshot(&self) -> LayoutMap {
        self.layouts.clone()
    }

    pub fn add_widget(
        &mut self,
        mode_id: &str,
        widget_type: &str,
    ) -> Result<WidgetPlacement, LayoutError> {
        self.edit(mode_id, |mode, layout| {
            if layout.contains_type(widget_type) {
                return Err(LayoutError::Duplicate {
                    mode: mode.to_string(),
                    widget_type: widget_type.to_string(),
                });
            }
            Ok(layout.append(widget_type))
        })
    }

    pub fn move_widget(
        &mut self,
        mode_id: &str,
        widget_id: &str,
        x: u32,
        y: u32,
    ) -> Result<WidgetPlacement, LayoutError> {
        self.edit(mode_id, |mode, layout| {
            let placement = layout
                .get_mut(widget_id)
                .ok_or_else(|| not_found(mode, widget_id))?;
            placement.x = x;
            placement.y = y;
            Ok(placement.clone())
        })
    }

    /// Requests below a placement's minimum size are clamped, not rejected
    pub fn resize_widget(
        &mut self,
        mode_id: &str,
        widget_id: &str,
        w: u32,
        h: u32,
    ) -> Result<WidgetPlacement, LayoutError> {
        self.edit(mode_id, |mode, layout| {
            let placement = layout
                .get_mut(widget_id)
                .ok_or_else(|| not_found(mode, widget_id))?;
            placement.set_size_clamped(w, h);
            Ok(placement.clone())
        })
    }

    pub fn remove_widget(
        &mut self,
        mode_id: &str,
        widget_id: &str,
    ) -> Result<WidgetPlacement, LayoutError> {
        self.edit(mode_id, |mode, layout| {
            layout
                .remove(widget_id)
                .ok_or_else(|| not_found(mode, widget_id))
        })
    }

    /// Replace a mode's layout after a client-side drag or resize
    pub fn replace_layout(
        &mut self,
        mode_id: &str,
        placements: Vec<WidgetPlacement>,
    ) -> Result<Layout, LayoutError> {
        self.edit(mode_id, |_, layout| {
            let mut replacement = Layout::new(placements);
            if let Some(widget_id) = replacement.duplicate_id() {
                return Err(LayoutError::DuplicateId {
                    widget_id: widget_id.to_string(),
                });
            }
            replacement.clamp_sizes();
            *layout = replacement;
            Ok(layout.clone())
        })
    }

    /// Keep the first widget of each type; returns how many were removed
    pub fn cleanup_duplicates(&mut self, mode_id: &str) -> usize {
        let mode = resolve_mode(mode_id).id;
        let mut layout = self.get_layout(mode);
        let removed = layout.dedup_by_type();
        if removed > 0 {
            tracing::info!("Removed {} duplicate widgets from '{}'", removed, mode);
            self.commit(mode, layout);
        }
        removed
    }

    pub fn reset_mode(&mut self, mode_id: &str) {
        let mode = resolve_mode(mode_id).id;
        if self.layouts.remove(mode).is_some() {
            tracing::info!("Reset '{}' layout to default", mode);
            self.persistence.persist(self.layouts.clone());
        }
    }

    pub fn reset_all(&mut self) {
        if !self.layouts.is_empty() {
            tracing::info!("Reset {} customized layouts", self.layouts.len());
            self.layouts.clear();
            self.persistence.persist(LayoutMap::new());
        }
    }

    fn edit<T>(
        &mut self,
        mode_id: &str,
        op: impl FnOnce(&str, &mut Layout) -> Result<T, LayoutError>,
    ) -> Result<T, LayoutError> {
        let mode = resolve_mode(mode_id).id;
        let mut layout = self.get_layout(mode);
        let result = op(mode, &mut layout)?;
        self.commit(mode, layout);
        Ok(result)
    }

    fn commit(&mut self, mode: &str, layout: Layout) {
        self.layouts.insert(mode.to_string(), layout);
        self.persistence.persist(self.layouts.clone());
    }
}

fn not_found(mode: &str, widget_id: &str) -> LayoutError {
    LayoutError::NotFound {
        mode: mode.to_string(),
        widget_id: widget_id.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::widget::spec_for;
    use std::collections::HashSet;
    use tokio::sync::mpsc;

    fn store() -> WidgetLayoutStore {
        WidgetLayoutStore::new(DefaultLayouts::builtin(), PersistenceHandle::detached())
    }

    fn store_with_channel() -> (WidgetLayoutStore, mpsc::UnboundedReceiver<LayoutMap>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let store = WidgetLayoutStore::new(DefaultLayouts::builtin(), PersistenceHandle::new(tx));
        (store, rx)
    }

    fn ids(layout: &Layout) -> Vec<String> {
        layout.placements().iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_uncustomized_mode_returns_default() {
        let store = store();
        assert_eq!(
            store.get_layout("standard"),
            DefaultLayouts::builtin().for_mode("standard")
        );
        assert!(!store.is_customized("standard"));
    }

    #[test]
    fn test_add_widget_appends_below_existing_rows() {
        let mut store = store();
        let placement = store.add_widget("touring", "chat-assistant").unwrap();
        let default = DefaultLayouts::builtin().for_mode("touring");
        assert_eq!(placement.id, "chat-assistant-1");
        assert_eq!(placement.x, 0);
        assert_eq!(placement.y, default.next_free_row());
        assert_eq!(store.get_layout("touring").len(), default.len() + 1);
        assert!(store.is_customized("touring"));
    }

    #[test]
    fn test_second_add_of_same_type_is_duplicate() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut store = WidgetLayoutStore::new(DefaultLayouts::default(), PersistenceHandle::new(tx));
        store.add_widget("standard", "health-metrics").unwrap();
        assert!(rx.try_recv().is_ok());

        let err = store.add_widget("standard", "health-metrics").unwrap_err();
        assert!(rx.try_recv().is_err());
        assert_eq!(
            err,
            LayoutError::Duplicate {
                mode: "standard".to_string(),
                widget_type: "health-metrics".to_string(),
            }
        );
        let layout = store.get_layout("standard");
        assert_eq!(
            layout
                .placements()
                .iter()
                .filter(|p| p.widget_type == "health-metrics")
                .count(),
            1
        );
    }

    #[test]
    fn test_add_remove_sequences_keep_ids_unique() {
        let mut store = store();
        let types = ["trending", "todo-list", "artist-stats", "lyrics", "chat-assistant"];
        for round in 0..4 {
            for widget_type in types {
                let _ = store.add_widget("mc-assist", widget_type);
            }
            let layout = store.get_layout("mc-assist");
            let to_remove = layout.placements()[round % layout.len()].id.clone();
            store.remove_widget("mc-assist", &to_remove).unwrap();

            let layout = store.get_layout("mc-assist");
            let unique: HashSet<String> = ids(&layout).into_iter().collect();
            assert_eq!(unique.len(), layout.len());
        }
    }

    #[test]
    fn test_move_and_resize_missing_widget_is_not_found() {
        let (mut store, mut rx) = store_with_channel();
        let before = store.get_layout("standard");

        let err = store.move_widget("standard", "ghost-1", 3, 3).unwrap_err();
        assert!(matches!(err, LayoutError::NotFound { .. }));
        let err = store.resize_widget("standard", "ghost-1", 3, 3).unwrap_err();
        assert!(matches!(err, LayoutError::NotFound { .. }));
        let err = store.remove_widget("standard", "ghost-1").unwrap_err();
        assert!(matches!(err, LayoutError::NotFound { .. }));

        assert_eq!(store.get_layout("standard"), before);
        assert!(!store.is_customized("standard"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_resize_below_minimum_is_clamped() {
        let mut store = store();
        let placement = store.resize_widget("standard", "geo-listeners-1", 1, 1).unwrap();
        let spec = spec_for("geo-listeners");
        assert_eq!(placement.w, spec.min_w.unwrap());
        assert_eq!(placement.h, spec.min_h.unwrap());
    }

    #[test]
    fn test_move_updates_position_only() {
        let mut store = store();
        let original = store.get_layout("touring").placements()[0].clone();
        let moved = store.move_widget("touring", &original.id, 4, 9).unwrap();
        assert_eq!((moved.x, moved.y), (4, 9));
        assert_eq!((moved.w, moved.h), (original.w, original.h));
    }

    #[test]
    fn test_remove_does_not_compact() {
        let mut store = store();
        let layout = store.get_layout("standard");
        let first = layout.placements()[0].id.clone();
        store.remove_widget("standard", &first).unwrap();

        let after = store.get_layout("standard");
        assert_eq!(after.placements(), &layout.placements()[1..]);
    }

    #[test]
    fn test_cleanup_duplicates_is_idempotent() {
        let spec = spec_for("trending");
        let mut layouts = LayoutMap::new();
        layouts.insert(
            "standard".to_string(),
            Layout::new(vec![
                WidgetPlacement::new("trending-1", "trending", &spec, 0, 0),
                WidgetPlacement::new("todo-list-1", "todo-list", &spec, 0, 4),
                WidgetPlacement::new("trending-2", "trending", &spec, 0, 8),
                WidgetPlacement::new("todo-list-2", "todo-list", &spec, 0, 12),
            ]),
        );
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut store = WidgetLayoutStore::with_layouts(
            layouts,
            DefaultLayouts::builtin(),
            PersistenceHandle::new(tx),
        );

        assert_eq!(store.cleanup_duplicates("standard"), 2);
        assert_eq!(ids(&store.get_layout("standard")), vec!["trending-1", "todo-list-1"]);
        assert!(rx.try_recv().is_ok());

        assert_eq!(store.cleanup_duplicates("standard"), 0);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_reset_mode_restores_default() {
        let mut store = store();
        store.add_widget("standard", "chat-assistant").unwrap();
        store.remove_widget("standard", "trending-1").unwrap();
        store.add_widget("touring", "trending").unwrap();

        store.reset_mode("standard");
        assert_eq!(
            store.get_layout("standard"),
            DefaultLayouts::builtin().for_mode("standard")
        );
        assert!(store.is_customized("touring"));
    }

    #[test]
    fn test_reset_all_discards_every_customization() {
        let (mut store, mut rx) = store_with_channel();
        store.add_widget("standard", "chat-assistant").unwrap();
        store.add_widget("touring", "trending").unwrap();
        while rx.try_recv().is_ok() {}

        store.reset_all();
        assert!(store.snapshot().is_empty());
        assert_eq!(rx.try_recv().unwrap(), LayoutMap::new());
    }

    #[test]
    fn test_every_mutation_writes_full_mapping() {
        let (mut store, mut rx) = store_with_channel();
        store.add_widget("touring", "trending").unwrap();
        store.add_widget("standard", "chat-assistant").unwrap();

        let first = rx.try_recv().unwrap();
        assert_eq!(first.keys().collect::<Vec<_>>(), vec!["touring"]);
        let second = rx.try_recv().unwrap();
        assert_eq!(second.keys().collect::<Vec<_>>(), vec!["standard", "touring"]);
        assert_eq!(second, store.snapshot());
    }

    #[test]
    fn test_unknown_mode_uses_default_mode() {
        let mut store = store();
        store.add_widget("nope", "chat-assistant").unwrap();
        assert!(store.get_layout("standard").contains_type("chat-assistant"));
        assert!(store.snapshot().contains_key("standard"));
    }

    #[test]
    fn test_replace_layout_rejects_duplicate_ids() {
        let (mut store, mut rx) = store_with_channel();
        let spec = spec_for("trending");
        let err = store
            .replace_layout(
                "touring",
                vec![
                    WidgetPlacement::new("x", "trending", &spec, 0, 0),
                    WidgetPlacement::new("x", "todo-list", &spec, 4, 0),
                ],
            )
            .unwrap_err();
        assert_eq!(err, LayoutError::DuplicateId { widget_id: "x".to_string() });
        assert!(!store.is_customized("touring"));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_replace_layout_clamps_sizes() {
        let mut store = store();
        let spec = spec_for("geo-listeners");
        let mut placement = WidgetPlacement::new("geo-listeners-1", "geo-listeners", &spec, 0, 0);
        placement.w = 1;
        let layout = store.replace_layout("touring", vec![placement]).unwrap();
        assert_eq!(layout.placements()[0].w, spec.min_w.unwrap());
        assert_eq!(store.get_layout("touring"), layout);
    }
}
