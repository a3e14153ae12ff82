#![allow(dead_code)]

use token_authorizer::CredentialRecord;

pub const TOKEN: &str = "secret token!";
pub const EMAIL: &str = "user@email.com";

pub fn session(pairs: &[(&str, &str)]) -> CredentialRecord {
    pairs.iter().copied().collect()
}

/// Records every callback invocation.
#[derive(Debug, Default)]
pub struct CallbackSpy {
    pub calls: Vec<(String, String)>,
}

impl CallbackSpy {
    pub fn record(&mut self, name: &str, value: &str) {
        self.calls.push((name.to_string(), value.to_string()));
    }
}
