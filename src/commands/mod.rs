pub mod devices;
pub mod init;
pub mod preview;
pub mod resolution;

pub use devices::*;
pub use init::*;
pub use preview::*;
pub use resolution::*;

use crate::configurator::CaptureConfigurator;
use std::sync::Arc;
use tokio::sync::RwLock;

lazy_static::lazy_static! {
    /// Process-global configurator shared by every command.
    pub(crate) static ref CONFIGURATOR: Arc<RwLock<CaptureConfigurator>> =
        Arc::new(RwLock::new(CaptureConfigurator::default()));
}
