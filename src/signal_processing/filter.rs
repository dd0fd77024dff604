/// Sample-by-sample smoothing filter
pub trait Filter {
    /// Process a single amplitude through the filter
    fn process(&mut self, sample: f64) -> f64;
}
