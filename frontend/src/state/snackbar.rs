use leptos::*;

pub const SNACKBAR_DURATION_MS: u32 = 3000;
pub const SNACKBAR_ACTION: &str = "Close";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub action: String,
    pub duration_ms: u32,
}

/// Transient confirmation shown at the bottom of the page.
#[derive(Clone, Copy)]
pub struct SnackBar {
    current: RwSignal<Option<Notice>>,
    generation: RwSignal<u64>,
}

impl Default for SnackBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SnackBar {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            generation: create_rw_signal(0),
        }
    }

    pub fn open(&self, message: impl Into<String>) {
        let notice = Notice {
            message: message.into(),
            action: SNACKBAR_ACTION.to_string(),
            duration_ms: SNACKBAR_DURATION_MS,
        };
        log::debug!("snackbar: {}", notice.message);
        self.generation.update(|g| *g = g.wrapping_add(1));
        self.current.set(Some(notice));
        self.schedule_dismiss(self.generation.get_untracked());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    pub fn current(&self) -> Signal<Option<Notice>> {
        self.current.into()
    }

    #[cfg(target_arch = "wasm32")]
    fn schedule_dismiss(&self, generation: u64) {
        let snackbar = *self;
        gloo_timers::callback::Timeout::new(SNACKBAR_DURATION_MS, move || {
            // A newer notice owns the bar now.
            if snackbar.generation.get_untracked() == generation {
                snackbar.dismiss();
            }
        })
        .forget();
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn schedule_dismiss(&self, _generation: u64) {}
}

pub fn use_snackbar() -> SnackBar {
    use_context::<SnackBar>().unwrap_or_else(|| {
        let snackbar = SnackBar::new();
        provide_context(snackbar);
        snackbar
    })
}
