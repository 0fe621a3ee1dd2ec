//! Filter that replaces the output with its message count.

use super::CommandOutputFilter;
use crate::error::Result;
use crate::output::CommandOutputBuffer;

/// Replaces the buffer with a single line stating how many messages it held.
pub struct CountFilter;

impl CommandOutputFilter for CountFilter {
    fn run(&self, _params: &[String], output: &mut CommandOutputBuffer) -> Result<()> {
        let count = output.len();
        output.set_messages(vec![format!("Matched: {count} lines")]);
        Ok(())
    }
}
