//! User-Agent rotation
//!
//! Some listing sites block clients that present an uncommon or absent
//! User-Agent. The pool holds a set of plausible browser identities and
//! hands out a random one per request. It is injected into the fetcher
//! rather than read from a global so tests can pin the selection.

use rand::seq::SliceRandom;

/// Built-in desktop browser identities used when the config supplies none
const BUILTIN_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:16.0) Gecko/20100101 Firefox/16.0",
    "Mozilla/5.0 (Windows NT 6.1; WOW64) AppleWebKit/537.11 (KHTML, like Gecko) Chrome/23.0.1271.64 Safari/537.11",
    "Mozilla/5.0 (Windows NT 6.1; Win64; x64; rv:2.0b13pre) Gecko/20110307 Firefox/4.0b13pre",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_7_3) AppleWebKit/535.20 (KHTML, like Gecko) Chrome/19.0.1036.7 Safari/535.20",
    "Opera/9.80 (Macintosh; Intel Mac OS X 10.6.8; U; fr) Presto/2.9.168 Version/11.52",
    "Mozilla/5.0 (iPad; U; CPU OS 4_2_1 like Mac OS X; zh-cn) AppleWebKit/533.17.9 (KHTML, like Gecko) Version/5.0.2 Mobile/8C148 Safari/6533.18.5",
];

/// Pool of User-Agent strings, one picked at random per request
#[derive(Debug, Clone)]
pub struct UserAgentPool {
    agents: Vec<String>,
}

impl UserAgentPool {
    /// Creates a pool from the given agents, falling back to the built-in
    /// list when the slice is empty
    pub fn new(agents: &[String]) -> Self {
        let agents = if agents.is_empty() {
            BUILTIN_AGENTS.iter().map(|s| s.to_string()).collect()
        } else {
            agents.to_vec()
        };
        Self { agents }
    }

    /// Picks a random identity from the pool
    pub fn pick(&self) -> &str {
        // Pool is never empty by construction
        self.agents
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or(BUILTIN_AGENTS[0])
    }
}

impl Default for UserAgentPool {
    fn default() -> Self {
        Self::new(&[])
    }
}
