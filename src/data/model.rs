// ---------------------------------------------------------------------------
// SampleTable – the loaded time series
// ---------------------------------------------------------------------------

/// Two paired columns read from the input file: elapsed time and phase angle.
///
/// `times[i]` and `phi[i]` come from the same row of the source file.
/// Both vectors always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleTable {
    times: Vec<f64>,
    phi: Vec<f64>,
}

impl SampleTable {
    /// Build a table from `(time, phi)` rows in file order.
    pub fn from_rows(rows: impl IntoIterator<Item = (f64, f64)>) -> Self {
        let (times, phi) = rows.into_iter().unzip();
        SampleTable { times, phi }
    }

    /// Column 0, seconds.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Column 1, dimensionless.
    pub fn phi(&self) -> &[f64] {
        &self.phi
    }

    /// `[time, phi]` pairs in row order, ready for plotting.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.times
            .iter()
            .zip(self.phi.iter())
            .map(|(&t, &p)| [t, p])
    }

    /// First and last time stamp, if any rows were loaded.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        Some((*self.times.first()?, *self.times.last()?))
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}
