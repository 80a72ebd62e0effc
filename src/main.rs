use tracing::{info, warn};
use user_notify::lifecycle::{setup_tracing, NotificationService};

fn main() {
    setup_tracing();

    info!("Starting notification demo");

    let service = NotificationService::new();

    for (id, message) in [(1, "Welcome!"), (999, "Hello?")] {
        if service.notify_by_id(id, message) {
            info!(user_id = id, "User notified");
        } else {
            warn!(user_id = id, "User not notified");
        }
    }

    info!("Demo completed");
}
