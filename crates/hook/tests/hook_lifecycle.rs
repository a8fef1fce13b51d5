//! Integration tests for the install/uninstall lifecycle of the error
//! interception hook.
//!
//! These tests exercise the real process-global panic hook, so every test
//! that installs a router serialises on one lock: the hook is shared state
//! and concurrent installs would observe each other's handlers.

use std::io::{self, Write};
use std::panic::catch_unwind;
use std::sync::{Arc, Mutex};

use webdiag_hook::{ErrorRouter, RenderMode, install};

/// Serialises access to the process-global panic hook across test threads.
static HOOK_LOCK: Mutex<()> = Mutex::new(());

/// Cloneable writer that lets the test inspect what the router emitted.
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

// ============================================================================
// Install / uninstall lifecycle
// ============================================================================

/// Verifies an installed router receives panics and an uninstalled one does
/// not: after `uninstall` the previously-active hook is back in effect.
#[test]
fn install_routes_panics_and_uninstall_restores_previous_hook() {
    let _hook = HOOK_LOCK.lock().unwrap();

    let buf = SharedBuf::default();
    let router = Arc::new(ErrorRouter::new(buf.clone()));
    router.set_mode(RenderMode::RemoteConsole);

    let guard = install(Arc::clone(&router));
    let _ = catch_unwind(|| panic!("boom"));

    let captured = buf.contents();
    assert!(captured.contains("console.log("));
    assert!(captured.contains("boom"));

    guard.uninstall();
    let _ = catch_unwind(|| panic!("after uninstall"));

    // The second panic went to the restored hook, not to our router.
    assert_eq!(buf.contents(), captured);
}

/// Verifies dropping the guard restores the previous hook just like an
/// explicit `uninstall`, so unwinding test bodies cannot leak the handler.
#[test]
fn dropping_the_guard_restores_the_previous_hook() {
    let _hook = HOOK_LOCK.lock().unwrap();

    let buf = SharedBuf::default();
    let router = Arc::new(ErrorRouter::new(buf.clone()));
    router.set_mode(RenderMode::RemoteConsole);

    {
        let _guard = install(Arc::clone(&router));
        let _ = catch_unwind(|| panic!("captured"));
    }

    let captured = buf.contents();
    assert!(captured.contains("captured"));

    let _ = catch_unwind(|| panic!("not captured"));
    assert_eq!(buf.contents(), captured);
}

/// Verifies the routed event carries the panic's message and location in
/// inline mode as well.
#[test]
fn intercepted_panic_renders_an_inline_block_by_default() {
    let _hook = HOOK_LOCK.lock().unwrap();

    let buf = SharedBuf::default();
    let router = Arc::new(ErrorRouter::new(buf.clone()));

    let guard = install(Arc::clone(&router));
    let _ = catch_unwind(|| panic!("template exploded"));
    guard.uninstall();

    let output = buf.contents();
    // Panics classify as user errors, i.e. the fatal presentation bucket.
    assert!(output.contains("<div class=\"error\">"));
    assert!(output.contains("template exploded"));
    assert!(output.contains("File: "));
    assert!(output.contains("Line: "));
}

// ============================================================================
// Mode persistence across the hook lifecycle
// ============================================================================

/// Verifies the render mode is router state: uninstalling and reinstalling
/// the hook leaves the previously selected channel in effect.
#[test]
fn mode_persists_across_uninstall_install_cycles() {
    let _hook = HOOK_LOCK.lock().unwrap();

    let buf = SharedBuf::default();
    let router = Arc::new(ErrorRouter::new(buf.clone()));
    router.set_mode(RenderMode::RemoteConsole);

    let guard = install(Arc::clone(&router));
    guard.uninstall();

    let guard = install(Arc::clone(&router));
    let _ = catch_unwind(|| panic!("still console"));
    guard.uninstall();

    assert!(buf.contents().contains("console.log("));
    assert!(!buf.contents().contains("<div"));
}
