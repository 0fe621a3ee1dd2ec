//! Filter that keeps only the last N messages.

use super::{parse_wanted, CommandOutputFilter};
use crate::error::Result;
use crate::output::CommandOutputBuffer;

/// Keeps the last `wanted` messages (default 10). A buffer shorter than
/// `wanted` is left untouched.
pub struct TailFilter;

impl CommandOutputFilter for TailFilter {
    fn run(&self, params: &[String], output: &mut CommandOutputBuffer) -> Result<()> {
        let wanted = parse_wanted(params)?;
        if wanted < output.len() {
            let skip = output.len() - wanted;
            let kept = output.messages()[skip..].to_vec();
            output.set_messages(kept);
        }
        Ok(())
    }
}
