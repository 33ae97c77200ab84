use driftrate_macros::Sample;

#[derive(Debug, Clone, Copy, PartialEq, Sample)]
pub struct RatePoint {
    pub delta_n: f64,
    pub delta_d: f64,
    pub dsdt: f64,
}

fn main() {
    let p = RatePoint { delta_n: 0.5, delta_d: 0.0, dsdt: 250.0 };
    let mut series = RatePointSeries::with_capacity(10);
    assert!(series.is_empty());
    series.push(&p);
    assert_eq!(series.len(), 1);
    assert_eq!(series.get(0), Some(p));
    assert_eq!(series.get(1), None);
    assert_eq!(RatePoint::field_names(), &["delta_n", "delta_d", "dsdt"]);
}
