/// One-shot gate for work that must run on first appearance only.
///
/// Hosts call [`on_appear`](FirstAppearGate::on_appear) from every
/// appearance callback; the action runs the first time and is swallowed on
/// every later call, including after the view re-enters the hierarchy.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstAppearGate {
    fired: bool,
}

impl FirstAppearGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Runs `action` if this is the first appearance.
    pub fn on_appear(&mut self, action: impl FnOnce()) {
        if self.fired {
            return;
        }
        self.fired = true;
        action();
    }
}
