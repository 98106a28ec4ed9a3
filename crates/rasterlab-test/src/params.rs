//! Regression test parameters and operations

use rasterlab_core::Raster;

/// Regression test parameters
///
/// This structure tracks the state of a regression test, including
/// the test name, current index, and success status.
pub struct RegParams {
    /// Name of the test (e.g., "convolve")
    pub test_name: String,
    /// Current test index (incremented before each check)
    index: usize,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// # Arguments
    ///
    /// * `test_name` - Name of the test (e.g., "convolve")
    pub fn new(test_name: &str) -> Self {
        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");

        Self {
            test_name: test_name.to_string(),
            index: 0,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Compare two floating-point values
    ///
    /// # Arguments
    ///
    /// * `expected` - Expected value
    /// * `actual` - Actual computed value
    /// * `delta` - Maximum allowed difference
    ///
    /// # Returns
    ///
    /// `true` if values match within delta, `false` otherwise.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta || diff.is_nan() {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.record_failure(msg);
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality
    ///
    /// # Returns
    ///
    /// `true` if the rasters are identical, `false` otherwise.
    pub fn compare_raster(&mut self, pix1: &Raster, pix2: &Raster) -> bool {
        self.index += 1;

        match pix1.count_sample_diffs(pix2) {
            Err(e) => {
                let msg = format!(
                    "Failure in {}_reg: raster comparison for index {} - {}",
                    self.test_name, self.index, e
                );
                self.record_failure(msg);
                false
            }
            Ok(diff) if diff.n_diff > 0 => {
                let msg = format!(
                    "Failure in {}_reg: raster comparison for index {} - \
                     {} samples differ (max diff {})",
                    self.test_name, self.index, diff.n_diff, diff.max_diff
                );
                self.record_failure(msg);
                false
            }
            Ok(_) => true,
        }
    }

    /// Compare a raster against an expected sample grid
    ///
    /// `expected` is row-major and interleaved, exactly like [`Raster::data`].
    pub fn compare_samples(&mut self, pix: &Raster, expected: &[u8]) -> bool {
        self.index += 1;

        if pix.data().len() != expected.len() {
            let msg = format!(
                "Failure in {}_reg: sample comparison for index {} - \
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                pix.data().len(),
                expected.len()
            );
            self.record_failure(msg);
            return false;
        }

        let stride = (pix.width() * pix.channel_count()) as usize;
        if let Some(i) = pix.data().iter().zip(expected).position(|(a, b)| a != b) {
            let msg = format!(
                "Failure in {}_reg: sample comparison for index {} - \
                 mismatch at ({}, {}): expected {}, got {}",
                self.test_name,
                self.index,
                (i % stride) / pix.channel_count() as usize,
                i / stride,
                expected[i],
                pix.data()[i]
            );
            self.record_failure(msg);
            return false;
        }

        true
    }

    fn record_failure(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Clean up and report results
    ///
    /// # Returns
    ///
    /// `true` if all checks passed, `false` if any failed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all checks have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}
