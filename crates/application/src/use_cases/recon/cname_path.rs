use std::fmt::Display;

/// Ordered hops of one redirection chain, as reported in `cname_paths`.
///
/// A chain only starts once a CNAME was seen; terminal records and resolved
/// addresses are ignored before that.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CnamePath {
    hops: Vec<String>,
    terminal_seen: bool,
}

impl CnamePath {
    pub fn is_active(&self) -> bool {
        !self.hops.is_empty()
    }

    /// `owner` is an alias for `target`.
    pub fn push_alias(&mut self, owner: &str, target: &str) {
        self.push_name(owner);
        self.push_name(target);
    }

    /// A terminal record (SOA, NS, MX, A, AAAA) owned by `owner` and pointing at `value`.
    /// The owner is recorded once per chain.
    pub fn push_terminal(&mut self, owner: &str, value: impl Display) {
        if !self.is_active() {
            return;
        }
        if !self.terminal_seen {
            self.push_name(owner);
            self.terminal_seen = true;
        }
        self.hops.push(value.to_string());
    }

    /// Address resolved for a name at the end of the chain.
    pub fn push_address(&mut self, address: impl Display) {
        if self.is_active() {
            self.hops.push(address.to_string());
        }
    }

    pub fn into_hops(self) -> Vec<String> {
        self.hops
    }

    fn push_name(&mut self, name: &str) {
        if self.hops.last().map(String::as_str) != Some(name) {
            self.hops.push(name.to_string());
        }
    }
}
