// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::error::Error as _;
use std::io;
use std::io::Write;

use crate::Error;
use crate::trap::Trap;

/// A trap that reports suppressed errors on standard error.
///
/// Each report is one `logbridge:` line for the error itself, followed by
/// one `logbridge: caused by:` line per deeper cause. If standard error is
/// not writable, the report is silently dropped.
///
/// # Examples
///
/// ```
/// use logbridge::Error;
/// use logbridge::trap::DefaultTrap;
/// use logbridge::trap::Trap;
///
/// let trap = DefaultTrap::default();
/// trap.trap(&Error::bridge_library(anyhow::anyhow!("install refused")));
/// ```
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct DefaultTrap {}

impl Trap for DefaultTrap {
    fn trap(&self, err: &Error) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "logbridge: {err}");
        // the first source repeats the message already embedded in `err`
        let mut source = err.source().and_then(|first| first.source());
        while let Some(cause) = source {
            let _ = writeln!(stderr, "logbridge: caused by: {cause}");
            source = cause.source();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn reports_causes_deeper_than_the_embedded_message() {
        let root = io::Error::new(io::ErrorKind::BrokenPipe, "socket closed");
        let err = Error::handler_mutation(anyhow::Error::new(root).context("detach refused"));

        assert_eq!(
            err.to_string(),
            "failed to mutate root logger handlers: detach refused"
        );
        let first = err.source().unwrap();
        assert_eq!(first.to_string(), "detach refused");
        let deeper = first.source().unwrap();
        assert_eq!(deeper.to_string(), "socket closed");
        assert!(deeper.source().is_none());

        DefaultTrap::default().trap(&err);
    }
}
