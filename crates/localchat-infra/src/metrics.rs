//! Process memory sampling for the per-response performance block.

use sysinfo::System;

/// Resident memory of the current process in MiB.
///
/// Returns 0.0 when the process cannot be inspected, so a metrics failure
/// never fails a chat request.
pub fn resident_memory_mib() -> f64 {
    let Ok(pid) = sysinfo::get_current_pid() else {
        return 0.0;
    };
    let mut sys = System::new();
    sys.refresh_process(pid);
    sys.process(pid)
        .map(|p| p.memory() as f64 / (1024.0 * 1024.0))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resident_memory_is_positive() {
        let mib = resident_memory_mib();
        assert!(mib > 0.0, "expected a live process to report memory, got {mib}");
    }
}
