//! Interruption handler.

use pathga_core::utils::{CancellationQuota, GenericError, Quota};
use std::sync::{Arc, OnceLock};

static INTERRUPTION: OnceLock<Result<CancellationQuota, String>> = OnceLock::new();

/// Creates interruption quota which is reached on Ctrl-C. Reaching it aborts the run without result.
/// The handler is installed once per process, all quotas share its flag.
pub fn create_interruption_quota() -> Result<Arc<dyn Quota + Send + Sync>, GenericError> {
    let cancellation = INTERRUPTION
        .get_or_init(|| {
            let cancellation = CancellationQuota::default();
            ctrlc::set_handler({
                let cancellation = cancellation.clone();
                move || cancellation.cancel()
            })
            .map(|_| cancellation)
            .map_err(|err| format!("cannot set interruption handler: '{err}'"))
        })
        .clone()?;

    Ok(Arc::new(cancellation))
}
