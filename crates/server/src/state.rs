use std::sync::Arc;

use service::swift_codes::repository::SwiftCodeRepository;
use service::SwiftCodeService;

/// Shared handler state. Cloned per request; the repository behind the
/// service is the only shared resource.
#[derive(Clone)]
pub struct ServerState {
    pub swift_codes: SwiftCodeService,
}

impl ServerState {
    pub fn new(repo: Arc<dyn SwiftCodeRepository>) -> Self {
        Self { swift_codes: SwiftCodeService::new(repo) }
    }
}
