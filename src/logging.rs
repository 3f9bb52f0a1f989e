use log::Level::Trace;
use log::{log_enabled, trace};

use crate::error::ParseError;
use crate::state::State;
use crate::{util, LABEL, LOG_TARGET};

const LABEL_WIDTH: usize = 12;
const INPUT_WIDTH: usize = 35;

/// Trace-level narration of a parse, one aligned line per event:
/// remaining input, active grammar label, operation. Enable with
/// `RUST_LOG=pn=trace`.
impl State<'_> {
    pub(crate) fn log_try(&self, op: &str, args: &str) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {op}({args})",
                iw = INPUT_WIDTH,
                lw = LABEL_WIDTH,
                label = LABEL.with(|l| l.get()),
                inp = util::formatter_str(self.get()),
            );
        }
    }

    pub(crate) fn log_ok(&self, op: &str, token: &str) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : {op} -> '{tok}'",
                iw = INPUT_WIDTH,
                lw = LABEL_WIDTH,
                label = LABEL.with(|l| l.get()),
                inp = util::formatter_str(self.get()),
                tok = util::formatter_str(token),
            );
        }
    }

    pub(crate) fn log_miss(&self, e: &ParseError) {
        if log_enabled!(target: LOG_TARGET, Trace) {
            trace!(
                target: LOG_TARGET,
                "{inp:<iw$} {label:<lw$} : miss -> {e}",
                iw = INPUT_WIDTH,
                lw = LABEL_WIDTH,
                label = LABEL.with(|l| l.get()),
                inp = util::formatter_str(self.get()),
            );
        }
    }
}
