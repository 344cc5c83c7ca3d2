//! PASS/FAIL lines and the closing summary.

use crate::{fixture::Fixture, runner::RunResult};

#[derive(Default)]
pub struct Reporter {
    passed: usize,
    failed: usize,
}

impl Reporter {
    pub fn record(&mut self, fixture: &Fixture, result: &RunResult) {
        let label = format!("[{}/{}] {}", fixture.service, fixture.id, fixture.description);
        if result.passed() {
            self.passed += 1;
            println!("PASS  {label}");
            return;
        }

        self.failed += 1;
        println!("FAIL  {label}");
        if let Some(err) = &result.error {
            println!("        error: {err}");
            return;
        }
        if let Some(actual) = result.actual_status.filter(|s| *s != result.expected_status) {
            println!(
                "        {} {}: expected {}, got {}",
                fixture.request.method, fixture.request.path, result.expected_status, actual
            );
        }
        for mismatch in &result.mismatches {
            println!("        {mismatch}");
        }
    }

    pub fn print_summary(&self) {
        println!();
        println!("────────────────────────────────────────────────────");
        println!("Results: {} passed, {} failed", self.passed, self.failed);
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}
