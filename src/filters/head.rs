//! Filter that keeps only the first N messages.

use super::{parse_wanted, CommandOutputFilter};
use crate::error::Result;
use crate::output::CommandOutputBuffer;

/// Keeps the first `wanted` messages (default 10). A buffer shorter than
/// `wanted` is left untouched.
pub struct HeadFilter;

impl CommandOutputFilter for HeadFilter {
    fn run(&self, params: &[String], output: &mut CommandOutputBuffer) -> Result<()> {
        let wanted = parse_wanted(params)?;
        if wanted < output.len() {
            let kept = output.messages()[..wanted].to_vec();
            output.set_messages(kept);
        }
        Ok(())
    }
}
