// Mode controller - active dashboard mode and the assist onboarding hint
use crate::domain::mode::{default_mode, resolve_mode, DashboardMode};

#[derive(Debug, Clone)]
pub struct ModeController {
    current: &'static DashboardMode,
    show_hint: bool,
    hint_shown: bool,
}

impl Default for ModeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeController {
    pub fn new() -> Self {
        Self {
            current: default_mode(),
            show_hint: false,
            hint_shown: false,
        }
    }

    pub fn current_mode(&self) -> &'static DashboardMode {
        self.current
    }

    pub fn show_hint(&self) -> bool {
        self.show_hint
    }

    /// Switch modes; unknown ids resolve to the default mode.
    /// The hint is raised once per session, on the first entry into the assist mode.
    pub fn set_mode(&mut self, id: &str) -> &'static DashboardMode {
        let target = resolve_mode(id);
        if target.id == self.current.id {
            return self.current;
        }

        if target.is_assist() && !self.hint_shown {
            self.show_hint = true;
            self.hint_shown = true;
        } else {
            self.show_hint = false;
        }

        tracing::debug!("Dashboard mode {} -> {}", self.current.id, target.id);
        self.current = target;
        target
    }

    pub fn dismiss_hint(&mut self) {
        self.show_hint = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_default_mode() {
        let controller = ModeController::new();
        assert_eq!(controller.current_mode().id, "standard");
        assert!(!controller.show_hint());
    }

    #[test]
    fn test_entering_assist_raises_hint() {
        let mut controller = ModeController::new();
        controller.set_mode("mc-assist");
        assert!(controller.show_hint());

        // Already active: no re-trigger, no clear
        controller.set_mode("mc-assist");
        assert!(controller.show_hint());
    }

    #[test]
    fn test_reselecting_active_mode_keeps_dismissed_hint() {
        let mut controller = ModeController::new();
        controller.set_mode("mc-assist");
        controller.dismiss_hint();
        controller.set_mode("mc-assist");
        assert!(!controller.show_hint());
    }

    #[test]
    fn test_hint_is_shown_once_per_session() {
        let mut controller = ModeController::new();
        controller.set_mode("mc-assist");
        controller.set_mode("touring");
        assert!(!controller.show_hint());
        controller.set_mode("mc-assist");
        assert!(!controller.show_hint());
    }

    #[test]
    fn test_unknown_mode_falls_back_to_default() {
        let mut controller = ModeController::new();
        controller.set_mode("touring");
        let mode = controller.set_mode("does-not-exist");
        assert_eq!(mode.id, "standard");
        assert_eq!(controller.current_mode().id, "standard");
    }

    #[test]
    fn test_dismiss_hint_is_idempotent() {
        let mut controller = ModeController::new();
        controller.set_mode("mc-assist");
        controller.dismiss_hint();
        controller.dismiss_hint();
        assert!(!controller.show_hint());
    }
}
