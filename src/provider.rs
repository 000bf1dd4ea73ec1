use std::sync::Arc;

use crate::components::{SearchMetrics, ensure_search_keybindings};
use crate::theme::Theme;

#[derive(Default)]
pub struct SearchProvider {
    theme: Option<Theme>,
    metrics: Option<SearchMetrics>,
}

#[derive(Clone)]
struct ProviderGlobal {
    theme: Arc<Theme>,
    metrics: SearchMetrics,
}

impl gpui::Global for ProviderGlobal {}

impl SearchProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_theme(mut self, configure: impl FnOnce(Theme) -> Theme) -> Self {
        let current = self.theme.take().unwrap_or_default();
        self.theme = Some(configure(current));
        self
    }

    pub fn set_metrics(mut self, metrics: SearchMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    pub fn init(self, cx: &mut gpui::App) {
        ensure_search_keybindings(cx);

        if cx.has_global::<ProviderGlobal>() {
            let global = cx.global_mut::<ProviderGlobal>();
            if let Some(theme) = self.theme {
                global.theme = Arc::new(theme);
            }
            if let Some(metrics) = self.metrics {
                global.metrics = metrics;
            }
            return;
        }

        cx.set_global(ProviderGlobal {
            theme: Arc::new(self.theme.unwrap_or_default()),
            metrics: self.metrics.unwrap_or_default(),
        });
    }

    pub fn theme(cx: &gpui::App) -> Arc<Theme> {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.theme.clone())
            .unwrap_or_else(|| Arc::new(Theme::default()))
    }

    pub fn metrics(cx: &gpui::App) -> SearchMetrics {
        cx.try_global::<ProviderGlobal>()
            .map(|global| global.metrics)
            .unwrap_or_default()
    }
}
