//! Terminal stand-in for the TV platform bindings.

use std::cell::RefCell;
use std::rc::Rc;

use tvplayer_core::{HostError, Platform, REGISTERED_KEYS};

/// Platform implementation backed by the terminal shell. Registration only
/// accepts the key names the simulated input subsystem knows about, and
/// `hide` is surfaced to the event loop as a quit request.
pub struct TerminalPlatform {
    registered: Vec<String>,
    pub hide_requested: bool,
}

impl TerminalPlatform {
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self {
            registered: Vec::new(),
            hide_requested: false,
        }))
    }

    /// Key names the player registered at startup.
    pub fn registered(&self) -> &[String] {
        &self.registered
    }
}

/// Local wrapper so `Platform` (a foreign trait) can be implemented for the
/// shared `Rc<RefCell<TerminalPlatform>>` handle without violating the orphan
/// rule.
pub struct PlatformHandle(pub Rc<RefCell<TerminalPlatform>>);

impl Platform for PlatformHandle {
    fn is_available(&self) -> bool {
        true
    }

    fn register_key(&mut self, name: &str) -> Result<(), HostError> {
        if !REGISTERED_KEYS.contains(&name) {
            return Err(HostError::KeyRegistration(name.to_string()));
        }
        self.0.borrow_mut().registered.push(name.to_string());
        Ok(())
    }

    fn app_version(&self) -> Option<String> {
        Some(env!("CARGO_PKG_VERSION").to_string())
    }

    fn hide(&mut self) {
        self.0.borrow_mut().hide_requested = true;
    }
}
