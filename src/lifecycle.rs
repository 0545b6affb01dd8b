use std::fmt;

/// Kinds of resource the bootstrap owns, in the order they are acquired
/// during a full start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    EventLoop,
    Window,
    Instance,
    DebugMessenger,
    Surface,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::EventLoop => "event loop",
            Resource::Window => "window",
            Resource::Instance => "instance",
            Resource::DebugMessenger => "debug messenger",
            Resource::Surface => "surface",
        };
        f.write_str(name)
    }
}

/// Records acquisitions so teardown can replay them backwards.
///
/// Each kind may be held at most once. Releasing pops the most recent entry,
/// so an entry is handed out for release exactly once.
#[derive(Debug, Default)]
pub struct Ledger {
    held: Vec<Resource>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` without recording anything if `resource` is already
    /// held.
    pub fn acquire(&mut self, resource: Resource) -> bool {
        if self.holds(resource) {
            return false;
        }
        self.held.push(resource);
        true
    }

    pub fn holds(&self, resource: Resource) -> bool {
        self.held.contains(&resource)
    }

    pub fn release_next(&mut self) -> Option<Resource> {
        self.held.pop()
    }
}
