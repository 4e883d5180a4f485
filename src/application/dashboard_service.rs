// Dashboard service - shared mode and layout state for every consumer
use crate::application::error::LayoutError;
use crate::application::layout_store::WidgetLayoutStore;
use crate::application::mode_controller::ModeController;
use crate::domain::layout::{Layout, LayoutMap};
use crate::domain::mode::DashboardMode;
use crate::domain::widget::WidgetPlacement;
use serde::Serialize;
use tokio::sync::Mutex;

/// What the client needs to render the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub mode: &'static DashboardMode,
    pub show_hint: bool,
    pub customized: bool,
    pub layout: Layout,
}

#[derive(Debug)]
struct DashboardState {
    modes: ModeController,
    layouts: WidgetLayoutStore,
}

/// One dashboard session. Each call applies a single operation under the lock.
/// Layout calls without an explicit mode use the active mode.
#[derive(Debug)]
pub struct DashboardService {
    state: Mutex<DashboardState>,
}

impl DashboardService {
    pub fn new(modes: ModeController, layouts: WidgetLayoutStore) -> Self {
        Self {
            state: Mutex::new(DashboardState { modes, layouts }),
        }
    }

    pub async fn view(&self) -> DashboardView {
        let state = self.state.lock().await;
        Self::build_view(&state)
    }

    pub async fn set_mode(&self, mode_id: &str) -> DashboardView {
        let mut state = self.state.lock().await;
        state.modes.set_mode(mode_id);
        Self::build_view(&state)
    }

    pub async fn dismiss_hint(&self) -> DashboardView {
        let mut state = self.state.lock().await;
        state.modes.dismiss_hint();
        Self::build_view(&state)
    }

    pub async fn get_layout(&self, mode_id: Option<&str>) -> Layout {
        let state = self.state.lock().await;
        let mode = Self::mode_or_current(&state, mode_id);
        state.layouts.get_layout(&mode)
    }

    pub async fn add_widget(
        &self,
        mode_id: Option<&str>,
        widget_type: &str,
    ) -> Result<WidgetPlacement, LayoutError> {
        let mut state = self.state.lock().await;
        let mode = Self::mode_or_current(&state, mode_id);
        state.layouts.add_widget(&mode, widget_type)
    }

    pub async fn move_widget(
        &self,
        mode_id: Option<&str>,
        widget_id: &str,
        x: u32,
        y: u32,
    ) -> Result<WidgetPlacement, LayoutError> {
        let mut state = self.state.lock().await;
        let mode = Self::mode_or_current(&state, mode_id);
        state.layouts.move_widget(&mode, widget_id, x, y)
    }

    pub async fn resize_widget(
        &self,
        mode_id: Option<&str>,
        widget_id: &str,
        w: u32,
        h: u32,
    ) -> Result<WidgetPlacement, LayoutError> {
        let mut state = self.state.lock().await;
        let mode = Self::mode_or_current(&state, mode_id);
        state.layouts.resize_widget(&mode, widget_id, w, h)
    }

    pub async fn remove_widget(
        &self,
        mode_id: Option<&str>,
        widget_id: &str,
    ) -> Result<WidgetPlacement, LayoutError> {
        let mut state = self.state.lock().await;
        let mode = Self::mode_or_current(&state, mode_id);
        state.layouts.remove_widget(&mode, widget_id)
    }

    pub async fn replace_layout(
        &self,
        mode_id: Option<&str>,
        placements: Vec<WidgetPlacement>,
    ) -> Result<Layout, LayoutError> {
        let mut state = self.state.lock().await;
        let mode = Self::mode_or_current(&state, mode_id);
        state.layouts.replace_layout(&mode, placements)
    }

    pub async fn cleanup_duplicates(&self, mode_id: Option<&str>) -> usize {
        let mut state = self.state.lock().await;
        let mode = Self::mode_or_current(&state, mode_id);
        state.layouts.cleanup_duplicates(&mode)
    }

    pub async fn reset_mode(&self, mode_id: Option<&str>) -> Layout {
        let mut state = self.state.lock().await;
        let mode = Self::mode_or_current(&state, mode_id);
        state.layouts.reset_mode(&mode);
        state.layouts.get_layout(&mode)
    }

    pub async fn reset_all(&self) {
        self.state.lock().await.layouts.reset_all();
    }

    pub async fn snapshot(&self) -> LayoutMap {
        self.state.lock().await.layouts.snapshot()
    }

    fn mode_or_current(state: &DashboardState, mode_id: Option<&str>) -> String {
        mode_id
            .unwrap_or(state.modes.current_mode().id)
            .to_string()
    }

    fn build_view(state: &DashboardState) -> DashboardView {
        let mode = state.modes.current_mode();
        DashboardView {
            mode,
            show_hint: state.modes.show_hint(),
            customized: state.layouts.is_customized(mode.id),
            layout: state.layouts.get_layout(mode.id),
        }
    }
}
