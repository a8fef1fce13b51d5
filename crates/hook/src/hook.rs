use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

use webdiag_core::{ErrorEvent, SourceLocation, codes};

use crate::ErrorRouter;

type PanicHook = Box<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

/// Converts the runtime's panic report into a routable [`ErrorEvent`].
///
/// A panic is the runtime's user-raised fatal error, so intercepted panics
/// carry [`codes::USER_ERROR`]. Non-string payloads keep a placeholder
/// message rather than being dropped.
fn event_from_panic(info: &PanicHookInfo<'_>) -> ErrorEvent {
    let message = if let Some(text) = info.payload().downcast_ref::<&str>() {
        (*text).to_owned()
    } else if let Some(text) = info.payload().downcast_ref::<String>() {
        text.clone()
    } else {
        String::from("panic with non-string payload")
    };

    let source = info.location().map_or_else(
        || SourceLocation::new("<unknown>", 0),
        |location| SourceLocation::new(location.file().to_owned(), location.line()),
    );

    ErrorEvent::new(codes::USER_ERROR, message, source)
}

/// Registers `router` as the process-wide error interception handler.
///
/// The previously-active panic hook is saved in the returned [`HookGuard`]
/// and comes back into effect on [`uninstall`](HookGuard::uninstall) or when
/// the guard drops. The router's render mode is untouched by the hook
/// lifecycle; it persists across uninstall/install cycles.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use webdiag_hook::{ErrorRouter, install};
///
/// let router = Arc::new(ErrorRouter::new(std::io::sink()));
/// let guard = install(Arc::clone(&router));
/// // ... panics raised here are routed ...
/// guard.uninstall();
/// ```
#[must_use = "dropping the guard immediately restores the previous hook"]
pub fn install(router: Arc<ErrorRouter>) -> HookGuard {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| router.handle(&event_from_panic(info))));
    tracing::debug!("error interception hook installed");

    HookGuard {
        previous: Some(previous),
    }
}

/// Capability object for the installed interception hook.
///
/// Holds the hook that was active before [`install`] and restores it exactly
/// once, on [`uninstall`](Self::uninstall) or on drop, whichever comes
/// first. The drop path keeps global state deterministic on failure paths
/// (a test that panics before calling `uninstall` still restores the prior
/// hook while unwinding).
#[must_use = "dropping the guard immediately restores the previous hook"]
pub struct HookGuard {
    previous: Option<PanicHook>,
}

impl std::fmt::Debug for HookGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HookGuard")
            .field("restores_previous", &self.previous.is_some())
            .finish()
    }
}

impl HookGuard {
    /// Restores the hook that was active before [`install`].
    pub fn uninstall(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if let Some(previous) = self.previous.take() {
            panic::set_hook(previous);
            tracing::debug!("previous error hook restored");
        }
    }
}

impl Drop for HookGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
