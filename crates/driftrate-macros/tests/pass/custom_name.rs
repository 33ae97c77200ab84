use driftrate_macros::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Sample)]
#[sample(series_name = "Descent")]
pub struct DescentStep {
    pub state: f64,
    pub gradient: f64,
}

fn main() {
    let s = DescentStep { state: 1.0, gradient: 1.0 };
    let mut trace = Descent::with_capacity(5);
    trace.push(&s);
    trace.push(&DescentStep { state: 0.99, gradient: 0.99 });
    assert_eq!(trace.len(), 2);
    assert_eq!(trace.state, vec![1.0, 0.99]);
    assert_eq!(DescentStep::field_names(), &["state", "gradient"]);
}
