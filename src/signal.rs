//! In-memory ECG sample sequence.
//!
//! A [`Signal`] is an append-only, ordered list of [`Sample`]s where
//! insertion order is temporal order. Time values are not validated: a
//! caller that appends non-monotonic times gets exactly what it appended.

/// One (amplitude, time) observation. Time is in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub amplitude: f64,
    pub time: f64,
}

impl Sample {
    pub fn new(amplitude: f64, time: f64) -> Self {
        Self { amplitude, time }
    }
}

/// Ordered sequence of samples
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Signal {
    samples: Vec<Sample>,
}

impl Signal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append one sample at the end of the sequence
    pub fn append(&mut self, amplitude: f64, time: f64) {
        self.samples.push(Sample::new(amplitude, time));
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn amplitudes(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.amplitude)
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.time)
    }

    /// Count of places where time steps backwards
    pub fn non_monotonic_steps(&self) -> usize {
        self.samples
            .windows(2)
            .filter(|w| w[1].time < w[0].time)
            .count()
    }
}

impl FromIterator<Sample> for Signal {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<(f64, f64)>> for Signal {
    /// Build from `(amplitude, time)` pairs
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        pairs
            .into_iter()
            .map(|(amplitude, time)| Sample::new(amplitude, time))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Signal {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
