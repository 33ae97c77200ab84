/// Shared interfaces for parameter sets and explicit recurrences.
use crate::error::ParamsResult;

/// Flat-array view of a parameter set, used at the Python and CLI boundary.
pub trait ModelParams: Sized {
    const N_PARAMS: usize;
    const PARAM_NAMES: &'static [&'static str];

    /// Build from a slice in `PARAM_NAMES` order, validating the values.
    fn from_array(arr: &[f64]) -> ParamsResult<Self>;

    /// Flatten into `PARAM_NAMES` order.
    fn to_array(&self) -> Vec<f64>;
}

/// An explicit one-step recurrence driven by a forcing sequence.
///
/// The first forcing entry only labels the initial record: the state is
/// recorded as-is without taking a step. Every later entry advances the
/// state by one `step`. The output therefore has one record per forcing
/// entry.
pub trait Integrator {
    type Params;
    type State: Clone;
    type Forcing: Copy;
    type Sample;
    type Series: SeriesOps<Self::Sample>;

    /// Create the default initial state.
    fn initialize_state(params: &Self::Params) -> Self::State;

    /// Record for the initial state, before any step has been taken.
    fn initial_sample(state: &Self::State, forcing: &Self::Forcing) -> Self::Sample;

    /// Advance one step: given state, params and forcing, return the new
    /// state and its record.
    fn step(
        state: &Self::State,
        params: &Self::Params,
        forcing: &Self::Forcing,
    ) -> (Self::State, Self::Sample);

    /// Run the recurrence over a forcing sequence.
    fn run(
        params: &Self::Params,
        forcing: &[Self::Forcing],
        initial_state: Option<&Self::State>,
    ) -> Self::Series {
        let mut outputs = Self::Series::with_capacity(forcing.len());
        let Some((first, rest)) = forcing.split_first() else {
            return outputs;
        };

        let mut state = match initial_state {
            Some(s) => s.clone(),
            None => Self::initialize_state(params),
        };
        outputs.push(&Self::initial_sample(&state, first));

        for f in rest {
            let (new_state, sample) = Self::step(&state, params, f);
            outputs.push(&sample);
            state = new_state;
        }

        outputs
    }
}

/// Operations required on the series collection type.
pub trait SeriesOps<S> {
    fn with_capacity(n: usize) -> Self;
    fn push(&mut self, s: &S);
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}
