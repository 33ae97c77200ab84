/// Drift integrator state.
///
/// - `accumulated`: S, the running Euler integral of dS/dt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    pub accumulated: f64,
}

impl State {
    /// S starts at zero.
    pub fn initialize() -> Self {
        Self { accumulated: 0.0 }
    }
}

impl Default for State {
    fn default() -> Self {
        Self::initialize()
    }
}
